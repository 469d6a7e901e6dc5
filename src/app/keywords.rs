use leptos::{html, prelude::*};
use leptos_use::{use_element_bounding, use_media_query, UseElementBoundingReturn};

use crate::content::Owner;
use crate::motion::{Frame, ScrollRange};

use super::hooks::{use_scroll_progress, WIDE_SCREEN};

#[component]
pub fn Keywords(owner: &'static Owner, keywords: &'static [String]) -> impl IntoView {
    view! {
        <section id="keywords" class="bg-black text-center px-6 py-16 md:p-32 text-white relative z-20">
            <h3 class="text-gray-400 text-lg md:text-3xl">
                {format!("{} | designed and developed", owner.name)}
            </h3>
            {keywords
                .iter()
                .map(|word| view! { <Keyword word=word.as_str() /> })
                .collect_view()}
        </section>
    }
}

/// One word flipping into place as it scrolls through the viewport.
#[component]
fn Keyword(word: &'static str) -> impl IntoView {
    let word_ref = NodeRef::<html::H1>::new();
    let UseElementBoundingReturn { top, .. } = use_element_bounding(word_ref);
    let wide = use_media_query(WIDE_SCREEN);

    let range = Signal::derive(move || {
        if wide.get() {
            ScrollRange::new(0.9, -0.2)
        } else {
            ScrollRange::new(0.8, 0.1)
        }
    });
    let progress = use_scroll_progress(top, range);
    let style = move || {
        let from = if wide.get() {
            Frame::flip(-180.0, -85.0, 0.8)
        } else {
            Frame::flip(-90.0, 0.0, 0.9)
        };
        from.lerp(progress.get()).to_css()
    };

    view! {
        <div class="text-center py-16 md:py-48 [perspective:800px]">
            <h1
                node_ref=word_ref
                class="text-[14vw] lg:text-[14vw] uppercase leading-none text-white/50 font-serif"
                style=style
            >
                {word}
            </h1>
        </div>
    }
}
