use std::{sync::Arc, time::Duration};

use super::{Advance, ConfigError, CyclicIndex, Position, RotationConfig};

/// An item that carries its own list of images.
pub trait Slide {
    fn images(&self) -> &[String];
}

/// Selected item, its selected image and the detail overlay, kept consistent.
#[derive(Debug)]
pub struct Carousel<T> {
    items: Arc<[T]>,
    selection: CyclicIndex,
    image: CyclicIndex,
    overlay: Option<Overlay>,
}

/// The item captured by the open overlay and a cursor over its images.
#[derive(Debug)]
struct Overlay {
    item: usize,
    image: CyclicIndex,
}

/// What the view layer should currently draw.
#[derive(Debug)]
pub struct CarouselView<'a, T> {
    pub items: &'a [T],
    pub selected: Option<&'a T>,
    pub position: Option<Position>,
    pub image: Option<&'a str>,
    pub image_position: Option<Position>,
    pub overlay: Option<&'a T>,
}

impl<T: Slide> Carousel<T> {
    pub fn new(items: impl Into<Arc<[T]>>, config: &RotationConfig) -> Result<Self, ConfigError> {
        let items = items.into();
        let selection = CyclicIndex::new(items.len(), config)?;
        let mut carousel = Self {
            items,
            selection,
            image: CyclicIndex::manual(0, true),
            overlay: None,
        };
        carousel.reset_image();
        Ok(carousel)
    }

    /// Non-advancing carousel, used when a config is rejected.
    pub fn manual(items: impl Into<Arc<[T]>>, looping: bool) -> Self {
        let items = items.into();
        let selection = CyclicIndex::manual(items.len(), looping);
        let mut carousel = Self {
            items,
            selection,
            image: CyclicIndex::manual(0, true),
            overlay: None,
        };
        carousel.reset_image();
        carousel
    }

    pub fn with_on_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(usize) + Send + Sync + 'static,
    {
        self.selection.set_on_change(f);
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selection.current()
    }

    pub fn selected_image_index(&self) -> usize {
        self.image.current()
    }

    pub fn overlay_index(&self) -> Option<usize> {
        self.overlay.as_ref().map(|o| o.item)
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn set_auto_advance(&mut self, enabled: bool) -> Result<(), ConfigError> {
        self.selection.set_auto_advance(enabled)
    }

    pub fn select_next_item(&mut self) -> bool {
        let changed = self.selection.next();
        self.reset_image();
        changed
    }

    pub fn select_previous_item(&mut self) -> bool {
        let changed = self.selection.previous();
        self.reset_image();
        changed
    }

    pub fn jump_to_item(&mut self, index: i64) -> bool {
        let changed = self.selection.jump_to(index);
        self.reset_image();
        changed
    }

    /// While the overlay is open the image operations drive its slider; the
    /// selected item's cursor follows only when both show the same item.
    pub fn next_image(&mut self) -> bool {
        self.step_image(CyclicIndex::next)
    }

    pub fn previous_image(&mut self) -> bool {
        self.step_image(CyclicIndex::previous)
    }

    pub fn select_image_at(&mut self, index: i64) -> bool {
        self.step_image(|cursor| cursor.jump_to(index))
    }

    /// Captures the current selection and image. Later navigation does not move the overlay.
    pub fn open_overlay(&mut self) {
        let item = self.selection.current();
        let Some(count) = self.items.get(item).map(|i| i.images().len()) else {
            return;
        };
        let mut image = CyclicIndex::manual(count, true);
        image.jump_to(self.image.current() as i64);
        self.overlay = Some(Overlay { item, image });
    }

    /// Selects `index` and opens the overlay on it.
    pub fn open_overlay_at(&mut self, index: i64) {
        if self.selection.current() as i64 != index {
            self.jump_to_item(index);
        }
        self.open_overlay();
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn view(&self) -> CarouselView<'_, T> {
        let selected = self.items.get(self.selection.current());
        let image = selected
            .and_then(|item| item.images().get(self.image.current()))
            .map(String::as_str);
        CarouselView {
            items: &self.items,
            selected,
            position: self.selection.position(),
            image,
            image_position: self.image.position(),
            overlay: self.overlay_index().and_then(|i| self.items.get(i)),
        }
    }

    /// Image the overlay slider is showing.
    pub fn overlay_image(&self) -> Option<(&str, Position)> {
        let overlay = self.overlay.as_ref()?;
        let images = self.items.get(overlay.item)?.images();
        let position = overlay.image.position()?;
        let image = images.get(position.index)?;
        Some((image.as_str(), position))
    }

    fn step_image(&mut self, step: impl Fn(&mut CyclicIndex) -> bool) -> bool {
        let selected = self.selection.current();
        match self.overlay.as_mut() {
            Some(overlay) => {
                let moved = step(&mut overlay.image);
                if overlay.item == selected {
                    self.image.jump_to(overlay.image.current() as i64);
                }
                moved
            }
            None => step(&mut self.image),
        }
    }

    fn reset_image(&mut self) {
        let count = self
            .items
            .get(self.selection.current())
            .map_or(0, |item| item.images().len());
        self.image = CyclicIndex::manual(count, true);
    }
}

impl<T: Slide> Advance for Carousel<T> {
    fn period(&self) -> Duration {
        self.selection.period()
    }

    fn auto_advance_active(&self) -> bool {
        self.selection.auto_advance_active()
    }

    fn rearm(&mut self) {
        self.selection.rearm();
    }

    /// Auto-advance holds while the overlay is open.
    fn tick(&mut self, elapsed: Duration) -> usize {
        if self.overlay.is_some() {
            return 0;
        }
        let changed = self.selection.tick(elapsed);
        if changed > 0 {
            self.reset_image();
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Shot {
        name: &'static str,
        images: Vec<String>,
    }

    impl Slide for Shot {
        fn images(&self) -> &[String] {
            &self.images
        }
    }

    fn shot(name: &'static str, count: usize) -> Shot {
        Shot {
            name,
            images: (0..count).map(|i| format!("{name}-{i}.png")).collect(),
        }
    }

    fn two_projects() -> Carousel<Shot> {
        Carousel::new(vec![shot("a", 4), shot("b", 3)], &RotationConfig::default())
            .expect("valid config")
    }

    #[test]
    fn test_next_item_resets_stale_image() {
        let mut carousel = two_projects();
        carousel.select_image_at(3);
        assert_eq!(carousel.view().image, Some("a-3.png"));

        carousel.select_next_item();
        let view = carousel.view();
        assert_eq!(view.selected.map(|s| s.name), Some("b"));
        assert_eq!(view.image, Some("b-0.png"));
        assert_eq!(view.image_position, Some(Position { index: 0, total: 3 }));
    }

    #[test]
    fn test_every_item_change_resets_image() {
        let ops: [fn(&mut Carousel<Shot>); 4] = [
            |c| {
                c.select_next_item();
            },
            |c| {
                c.select_previous_item();
            },
            |c| {
                c.jump_to_item(1);
            },
            |c| {
                c.jump_to_item(0);
            },
        ];
        for op in ops {
            for start in 0..4 {
                let mut carousel = two_projects();
                carousel.select_image_at(start);
                op(&mut carousel);
                assert_eq!(carousel.selected_image_index(), 0);
            }
        }
    }

    #[test]
    fn test_reset_even_without_item_change() {
        let mut carousel = Carousel::new(
            vec![shot("a", 4), shot("b", 3)],
            &RotationConfig {
                looping: false,
                ..RotationConfig::default()
            },
        )
        .expect("valid config");
        carousel.next_image();
        carousel.next_image();
        assert!(!carousel.select_previous_item());
        assert_eq!(carousel.selected_image_index(), 0);
    }

    #[test]
    fn test_image_navigation_wraps_within_item() {
        let mut carousel = two_projects();
        carousel.previous_image();
        assert_eq!(carousel.view().image, Some("a-3.png"));
        carousel.next_image();
        assert_eq!(carousel.view().image, Some("a-0.png"));
        carousel.select_image_at(-5);
        assert_eq!(carousel.selected_image_index(), 0);
        carousel.select_image_at(50);
        assert_eq!(carousel.selected_image_index(), 3);
    }

    #[test]
    fn test_item_without_images() {
        let mut carousel = Carousel::new(
            vec![shot("a", 2), shot("empty", 0)],
            &RotationConfig::default(),
        )
        .expect("valid config");
        carousel.select_next_item();
        assert!(!carousel.next_image());
        assert!(!carousel.previous_image());
        assert!(!carousel.select_image_at(1));
        let view = carousel.view();
        assert_eq!(view.image, None);
        assert_eq!(view.image_position, None);
        assert_eq!(view.position.map(|p| p.to_string()).as_deref(), Some("2 / 2"));
    }

    #[test]
    fn test_overlay_keeps_its_snapshot() {
        let mut carousel = two_projects();
        carousel.open_overlay();
        carousel.select_next_item();

        let view = carousel.view();
        assert_eq!(view.overlay.map(|s| s.name), Some("a"));
        assert_eq!(view.selected.map(|s| s.name), Some("b"));
        assert_eq!(
            carousel.overlay_image(),
            Some(("a-0.png", Position { index: 0, total: 4 }))
        );

        assert_eq!(carousel.overlay_index(), Some(0));
        carousel.close_overlay();
        assert!(!carousel.is_overlay_open());
        assert!(carousel.view().overlay.is_none());
        assert_eq!(carousel.overlay_image(), None);
    }

    #[test]
    fn test_overlay_image_follows_slider_on_selected_item() {
        let mut carousel = two_projects();
        carousel.open_overlay_at(1);
        carousel.next_image();
        carousel.next_image();
        assert_eq!(
            carousel.overlay_image(),
            Some(("b-2.png", Position { index: 2, total: 3 }))
        );
    }

    #[test]
    fn test_overlay_slider_moves_after_selection_leaves() {
        let mut carousel = two_projects();
        carousel.open_overlay();
        carousel.select_next_item();

        assert!(carousel.next_image());
        assert_eq!(
            carousel.overlay_image(),
            Some(("a-1.png", Position { index: 1, total: 4 }))
        );
        // the background item keeps its own, freshly reset cursor
        assert_eq!(carousel.view().image, Some("b-0.png"));

        assert!(carousel.select_image_at(3));
        assert!(carousel.next_image());
        assert_eq!(
            carousel.overlay_image(),
            Some(("a-0.png", Position { index: 0, total: 4 }))
        );
        assert_eq!(carousel.selected_image_index(), 0);
    }

    #[test]
    fn test_overlay_starts_on_the_selected_image() {
        let mut carousel = two_projects();
        carousel.select_image_at(2);
        carousel.open_overlay();
        assert_eq!(
            carousel.overlay_image(),
            Some(("a-2.png", Position { index: 2, total: 4 }))
        );
        carousel.previous_image();
        assert_eq!(carousel.view().image, Some("a-1.png"));
    }

    #[test]
    fn test_manual_step_rearms_auto_advance() {
        let mut carousel =
            Carousel::new(vec![shot("a", 1), shot("b", 1)], &RotationConfig::auto(1000))
                .expect("valid config");
        carousel.tick(Duration::from_millis(800));
        carousel.select_next_item();
        carousel.rearm();
        assert_eq!(carousel.tick(Duration::from_millis(800)), 0);
        assert_eq!(carousel.selected_index(), 1);
    }

    #[test]
    fn test_auto_advance_holds_while_overlay_open() {
        let mut carousel =
            Carousel::new(vec![shot("a", 4), shot("b", 3)], &RotationConfig::auto(1000))
                .expect("valid config");
        carousel.next_image();
        carousel.open_overlay();
        assert_eq!(carousel.tick(Duration::from_secs(3)), 0);
        assert_eq!(carousel.selected_index(), 0);
        assert_eq!(carousel.selected_image_index(), 1);

        carousel.close_overlay();
        assert_eq!(carousel.tick(Duration::from_millis(1000)), 1);
        assert_eq!(carousel.selected_index(), 1);
        assert_eq!(carousel.selected_image_index(), 0);
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel: Carousel<Shot> = Carousel::manual(Vec::new(), true);
        carousel.select_next_item();
        carousel.open_overlay();
        let view = carousel.view();
        assert!(view.selected.is_none());
        assert!(view.position.is_none());
        assert!(view.overlay.is_none());
    }
}
