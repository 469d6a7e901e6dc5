use leptos::{html, prelude::*};
use leptos_use::{use_element_bounding, use_media_query, UseElementBoundingReturn};

use crate::motion::{Frame, Rgb, ScrollRange};

use super::hooks::{use_scroll_progress, WIDE_SCREEN};

const SAND: Rgb = Rgb(0xd6, 0xc7, 0xae);
const HEADING_FROM: Frame = Frame::rise(30.0, 15.0);

/// Interlude between the skills and the projects. The heading rises out of a blur
/// while the background warms from white to sand, both scrubbed by scroll.
#[component]
pub fn WhatIDo() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let heading_ref = NodeRef::<html::H2>::new();
    let UseElementBoundingReturn { top: section_top, .. } = use_element_bounding(section_ref);
    let UseElementBoundingReturn { top: heading_top, .. } = use_element_bounding(heading_ref);
    let wide = use_media_query(WIDE_SCREEN);

    let heading_range = Signal::derive(move || {
        if wide.get() {
            ScrollRange::new(0.75, 0.5)
        } else {
            ScrollRange::new(0.85, 0.6)
        }
    });
    // on narrow screens the colour runs backwards: sand first, white once scrolled past
    let background_range = Signal::derive(move || {
        if wide.get() {
            ScrollRange::new(0.9, 0.5)
        } else {
            ScrollRange::new(0.3, 0.55)
        }
    });
    let heading = use_scroll_progress(heading_top, heading_range);
    let background = use_scroll_progress(section_top, background_range);
    let background_style = move || {
        let colour = Rgb::WHITE.lerp(SAND, background.get());
        format!("background-color: {};", colour.to_css())
    };

    view! {
        <section
            id="what-i-do"
            node_ref=section_ref
            class="w-full h-screen flex flex-col items-center justify-center relative text-center px-6 py-16"
            style=background_style
        >
            <h2
                node_ref=heading_ref
                class="text-3xl md:text-9xl font-bold text-gray-900"
                style=move || HEADING_FROM.lerp(heading.get()).to_css()
            >
                "What Do i Do ?"
            </h2>
        </section>
    }
}
