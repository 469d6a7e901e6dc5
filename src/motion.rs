//! Scroll and pointer driven animation math. Everything here is a pure function of
//! its inputs so the components only have to feed in measurements and write styles.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitBy {
    #[default]
    Characters,
    Words,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub glyphs: Vec<String>,
    pub needs_space: bool,
}

/// Splits `text` on spaces, then each word into user-perceived characters, so
/// combining marks and flag sequences stay in one glyph.
pub fn split_text(text: &str, split_by: SplitBy) -> Vec<Word> {
    let words = text.split(' ').collect::<Vec<_>>();
    let last = words.len().saturating_sub(1);
    words
        .into_iter()
        .enumerate()
        .map(|(i, word)| Word {
            glyphs: match split_by {
                SplitBy::Characters => word.graphemes(true).map(String::from).collect(),
                SplitBy::Words => vec![word.to_string()],
            },
            needs_space: i != last,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaggerFrom {
    #[default]
    First,
    Last,
    Center,
    Index(usize),
}

/// Per-glyph delay, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stagger {
    pub from: StaggerFrom,
    pub step: f64,
}

impl Stagger {
    pub fn delay(&self, index: usize, total: usize) -> f64 {
        let distance = match self.from {
            StaggerFrom::First => index,
            StaggerFrom::Last => total.saturating_sub(1).saturating_sub(index),
            StaggerFrom::Center => (total / 2).abs_diff(index),
            StaggerFrom::Index(pivot) => pivot.abs_diff(index),
        };
        distance as f64 * self.step
    }
}

/// Scroll trigger window, as fractions of the viewport height.
/// `ScrollRange::new(0.8, 0.5)` starts when the element top crosses 80% of the
/// viewport and completes at 50%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Scrubbed progress in `[0, 1]` for an element whose top edge is at
    /// `element_top` px relative to the viewport.
    pub fn progress(&self, element_top: f64, viewport_height: f64) -> f64 {
        // not measured yet (server render, detached element)
        if !viewport_height.is_finite() || viewport_height <= 0.0 || !element_top.is_finite() {
            return 0.0;
        }
        let start = self.start * viewport_height;
        let end = self.end * viewport_height;
        if (start - end).abs() < f64::EPSILON {
            return if element_top <= end { 1.0 } else { 0.0 };
        }
        ((start - element_top) / (start - end)).clamp(0.0, 1.0)
    }
}

/// Sequential reveal of `count` elements across one scrubbed progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    pub duration: f64,
    pub stagger: f64,
    pub count: usize,
}

impl Timeline {
    pub fn total(&self) -> f64 {
        self.duration + self.stagger * self.count.saturating_sub(1) as f64
    }

    pub fn local_progress(&self, progress: f64, index: usize) -> f64 {
        if self.duration <= 0.0 {
            return if progress > 0.0 { 1.0 } else { 0.0 };
        }
        let t = progress.clamp(0.0, 1.0) * self.total();
        ((t - self.stagger * index as f64) / self.duration).clamp(0.0, 1.0)
    }
}

/// A transform/filter pose. `Frame::REST` is the fully revealed pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f64,
    pub translate_y: f64,
    pub blur: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl Frame {
    pub const REST: Frame = Frame {
        opacity: 1.0,
        translate_y: 0.0,
        blur: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
    };

    /// Fade up out of a blur.
    pub const fn rise(distance: f64, blur: f64) -> Self {
        Frame {
            opacity: 0.0,
            translate_y: distance,
            blur,
            ..Self::REST
        }
    }

    /// Flip in around both axes.
    pub const fn flip(rotate_x: f64, rotate_y: f64, scale: f64) -> Self {
        Frame {
            opacity: 0.0,
            rotate_x,
            rotate_y,
            scale,
            ..Self::REST
        }
    }

    /// Pose at `t`, where 0 is `self` and 1 is the rest pose.
    pub fn lerp(&self, t: f64) -> Frame {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: f64, to: f64| from + (to - from) * t;
        Frame {
            opacity: mix(self.opacity, Self::REST.opacity),
            translate_y: mix(self.translate_y, Self::REST.translate_y),
            blur: mix(self.blur, Self::REST.blur),
            rotate_x: mix(self.rotate_x, Self::REST.rotate_x),
            rotate_y: mix(self.rotate_y, Self::REST.rotate_y),
            scale: mix(self.scale, Self::REST.scale),
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {:.3}; filter: blur({:.2}px); transform: perspective(800px) translateY({:.2}px) rotateX({:.2}deg) rotateY({:.2}deg) scale({:.3});",
            self.opacity, self.blur, self.translate_y, self.rotate_x, self.rotate_y, self.scale
        )
    }
}

/// Opaque sRGB colour, parsed from `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);

    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Channel-wise blend, 0 is `self` and 1 is `to`.
    pub fn lerp(&self, to: Rgb, t: f64) -> Rgb {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, to.0), mix(self.1, to.1), mix(self.2, to.2))
    }

    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

static TILT_RANGE: f64 = 50.0;
static TILT_ROTATE: f64 = 0.4;
static TILT_SKEW: f64 = 0.2;
static TILT_SCALE: f64 = 1.05;

/// Pointer-follow transform of the hero card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub x: f64,
    pub y: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub skew_x: f64,
    pub skew_y: f64,
    pub scale: f64,
}

impl Tilt {
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::rest();
        }
        let dx = (x / width - 0.5).clamp(-0.5, 0.5) * TILT_RANGE;
        let dy = (y / height - 0.5).clamp(-0.5, 0.5) * TILT_RANGE;
        Tilt {
            x: dx,
            y: dy,
            rotate_x: -dy * TILT_ROTATE,
            rotate_y: dx * TILT_ROTATE,
            skew_x: dx * TILT_SKEW,
            skew_y: dy * TILT_SKEW,
            scale: TILT_SCALE,
        }
    }

    pub fn rest() -> Self {
        Tilt {
            scale: 1.0,
            ..Default::default()
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "transform: perspective(800px) translate({:.2}px, {:.2}px) rotateX({:.2}deg) rotateY({:.2}deg) skew({:.2}deg, {:.2}deg) scale({:.3});",
            self.x, self.y, self.rotate_x, self.rotate_y, self.skew_x, self.skew_y, self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_split_characters() {
        let words = split_text("Git & GitHub", SplitBy::Characters);
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].glyphs, vec!["G", "i", "t"]);
        assert_eq!(words[1].glyphs, vec!["&"]);
        assert!(words[0].needs_space);
        assert!(words[1].needs_space);
        assert!(!words[2].needs_space);
    }

    #[test]
    fn test_split_keeps_grapheme_clusters() {
        let words = split_text("Cafe\u{301} 🇮🇳", SplitBy::Characters);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].glyphs, vec!["C", "a", "f", "e\u{301}"]);
        assert_eq!(words[1].glyphs, vec!["🇮🇳"]);

        let family = split_text("👨‍👩‍👧", SplitBy::Characters);
        assert_eq!(family[0].glyphs.len(), 1);
    }

    #[test]
    fn test_split_words() {
        let words = split_text("Responsive Design", SplitBy::Words);
        assert_eq!(
            words,
            vec![
                Word {
                    glyphs: vec!["Responsive".to_string()],
                    needs_space: true
                },
                Word {
                    glyphs: vec!["Design".to_string()],
                    needs_space: false
                },
            ]
        );
    }

    #[test]
    fn test_stagger_delays() {
        let first = Stagger {
            from: StaggerFrom::First,
            step: 0.5,
        };
        assert!(close(first.delay(0, 5), 0.0));
        assert!(close(first.delay(4, 5), 2.0));

        let last = Stagger {
            from: StaggerFrom::Last,
            step: 0.5,
        };
        assert!(close(last.delay(4, 5), 0.0));
        assert!(close(last.delay(0, 5), 2.0));

        let center = Stagger {
            from: StaggerFrom::Center,
            step: 1.0,
        };
        assert!(close(center.delay(2, 5), 0.0));
        assert!(close(center.delay(0, 5), 2.0));
        assert!(close(center.delay(4, 5), 2.0));

        let pivot = Stagger {
            from: StaggerFrom::Index(1),
            step: 1.0,
        };
        assert!(close(pivot.delay(1, 5), 0.0));
        assert!(close(pivot.delay(4, 5), 3.0));
    }

    #[test]
    fn test_stagger_from_json() {
        let stagger: Stagger =
            serde_json::from_str(r#"{ "from": "last", "step": 0.025 }"#).expect("valid json");
        assert_eq!(stagger.from, StaggerFrom::Last);
        let stagger: Stagger =
            serde_json::from_str(r#"{ "from": { "index": 3 } }"#).expect("valid json");
        assert_eq!(stagger.from, StaggerFrom::Index(3));
        assert!(close(stagger.step, 0.0));
    }

    #[test]
    fn test_scroll_progress() {
        let range = ScrollRange::new(0.8, 0.5);
        // viewport 1000px: starts at 800, completes at 500
        assert!(close(range.progress(900.0, 1000.0), 0.0));
        assert!(close(range.progress(800.0, 1000.0), 0.0));
        assert!(close(range.progress(650.0, 1000.0), 0.5));
        assert!(close(range.progress(500.0, 1000.0), 1.0));
        assert!(close(range.progress(-200.0, 1000.0), 1.0));

        let instant = ScrollRange::new(0.85, 0.85);
        assert!(close(instant.progress(900.0, 1000.0), 0.0));
        assert!(close(instant.progress(800.0, 1000.0), 1.0));

        assert!(close(range.progress(0.0, f64::INFINITY), 0.0));
        assert!(close(range.progress(f64::NAN, 1000.0), 0.0));
    }

    #[test]
    fn test_timeline_reveals_in_order() {
        let timeline = Timeline {
            duration: 1.0,
            stagger: 0.3,
            count: 3,
        };
        assert!(close(timeline.total(), 1.6));
        for p in [0.0, 0.2, 0.4, 0.6, 0.8, 1.0] {
            let a = timeline.local_progress(p, 0);
            let b = timeline.local_progress(p, 1);
            let c = timeline.local_progress(p, 2);
            assert!(a >= b && b >= c, "progress {p}");
        }
        assert!(close(timeline.local_progress(1.0, 2), 1.0));
        assert!(close(timeline.local_progress(0.0, 0), 0.0));
    }

    #[test]
    fn test_frame_lerp() {
        let from = Frame::rise(20.0, 10.0);
        assert_eq!(from.lerp(0.0), from);
        assert_eq!(from.lerp(1.0), Frame::REST);
        let mid = from.lerp(0.5);
        assert!(close(mid.opacity, 0.5));
        assert!(close(mid.translate_y, 10.0));
        assert!(close(mid.blur, 5.0));
        assert!(Frame::REST.to_css().starts_with("opacity: 1.000; filter: blur(0.00px);"));
    }

    #[test]
    fn test_colour_blend() {
        let sand = Rgb::from_hex("#D6C7AE").expect("valid hex");
        assert_eq!(sand, Rgb(0xd6, 0xc7, 0xae));
        assert_eq!(Rgb::WHITE.lerp(sand, 0.0), Rgb::WHITE);
        assert_eq!(Rgb::WHITE.lerp(sand, 1.0), sand);
        assert_eq!(Rgb::WHITE.lerp(sand, 0.5), Rgb(235, 227, 215));
        assert_eq!(Rgb::WHITE.lerp(sand, 7.0), sand);
        assert_eq!(Rgb::WHITE.lerp(sand, f64::NAN), Rgb::WHITE);
        assert_eq!(sand.to_css(), "rgb(214, 199, 174)");

        assert_eq!(Rgb::from_hex("D6C7AE"), None);
        assert_eq!(Rgb::from_hex("#D6C7"), None);
        assert_eq!(Rgb::from_hex("#GGGGGG"), None);
    }

    #[test]
    fn test_tilt_from_pointer() {
        assert_eq!(Tilt::from_pointer(500.0, 400.0, 1000.0, 800.0).x, 0.0);

        let corner = Tilt::from_pointer(1000.0, 0.0, 1000.0, 800.0);
        assert!(close(corner.x, 25.0));
        assert!(close(corner.y, -25.0));
        assert!(close(corner.rotate_x, 10.0));
        assert!(close(corner.rotate_y, 10.0));
        assert!(close(corner.skew_x, 5.0));
        assert!(close(corner.scale, 1.05));

        assert_eq!(Tilt::from_pointer(10.0, 10.0, 0.0, 0.0), Tilt::rest());
    }
}
