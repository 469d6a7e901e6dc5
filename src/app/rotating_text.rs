use leptos::prelude::*;

use crate::carousel::CyclicIndex;
use crate::content::TextRotation;
use crate::motion::split_text;

use super::hooks::use_auto_advance;

/// Cycles through `rotation.items`, revealing each entry glyph by glyph.
///
/// Clicking advances by one. `on_next` runs with the new index after every
/// accepted transition, whether it came from the timer or a click.
#[component]
pub fn RotatingText(
    rotation: &'static TextRotation,
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_next: Option<Callback<usize>>,
) -> impl IntoView {
    let items = &rotation.items;
    let index = CyclicIndex::new(items.len(), &rotation.rotation)
        .unwrap_or_else(|e| {
            log::error!("rotating text falls back to manual control: {e}");
            CyclicIndex::manual(items.len(), rotation.rotation.looping)
        })
        .with_on_change(move |i| {
            log::debug!("rotating text -> {i}");
            if let Some(cb) = on_next {
                cb.run(i);
            }
        });
    let state = RwSignal::new(index);
    let restart = use_auto_advance(state);

    let current = Memo::new(move |_| state.with(|s| s.current()));

    let glyphs = move || {
        let item = items.get(current.get())?;
        let words = split_text(&item.text, rotation.split_by);
        let total = words.iter().map(|w| w.glyphs.len()).sum::<usize>();
        let mut offset = 0;
        let words = words
            .into_iter()
            .map(|word| {
                let start = offset;
                offset += word.glyphs.len();
                let glyphs = word
                    .glyphs
                    .into_iter()
                    .enumerate()
                    .map(|(j, glyph)| {
                        let delay = rotation.stagger.delay(start + j, total);
                        view! {
                            <span
                                class="inline-block rotate-in"
                                style=format!("animation-delay: {delay:.3}s")
                            >
                                {glyph}
                            </span>
                        }
                    })
                    .collect_view();
                view! {
                    <span class="inline-flex overflow-hidden pb-0.5 sm:pb-1">
                        {glyphs}
                        {word.needs_space.then(|| view! { <span class="whitespace-pre">" "</span> })}
                    </span>
                }
            })
            .collect_view();
        let icon = item.icon.as_ref().map(|icon| {
            view! { <i class=format!("ml-2 inline-block rotate-in {icon}") /> }
        });
        Some(view! {
            <div class="flex items-center" aria-hidden="true">
                {words}
                {icon}
            </div>
        })
    };

    view! {
        <span
            class=format!("flex items-center flex-wrap relative cursor-pointer select-none {class}")
            on:click=move |_| {
                let mut moved = false;
                state.maybe_update(|s| {
                    moved = s.next();
                    moved
                });
                if moved {
                    restart.run(());
                }
            }
        >
            {glyphs}
            <span class="sr-only" aria-live="polite">
                {move || items.get(current.get()).map(|item| item.text.as_str())}
            </span>
        </span>
    }
}
