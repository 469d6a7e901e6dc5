use leptos::{html, prelude::*};
use leptos_use::{use_element_bounding, use_media_query, UseElementBoundingReturn};

use crate::content::{Owner, Social};
use crate::motion::{Frame, ScrollRange, Timeline};

use super::hooks::{use_scroll_progress, WIDE_SCREEN};

const REVEAL_FROM: Frame = Frame::rise(20.0, 10.0);

#[component]
pub fn Intro(owner: &'static Owner, socials: &'static [Social]) -> impl IntoView {
    let lead_ref = NodeRef::<html::H2>::new();
    let UseElementBoundingReturn { top, .. } = use_element_bounding(lead_ref);
    let wide = use_media_query(WIDE_SCREEN);

    let range = Signal::derive(move || {
        if wide.get() {
            ScrollRange::new(0.8, 0.5)
        } else {
            ScrollRange::new(0.85, 0.6)
        }
    });
    let progress = use_scroll_progress(top, range);

    let timeline = move || {
        if wide.get() {
            Timeline {
                duration: 1.0,
                stagger: 0.3,
                count: 3,
            }
        } else {
            Timeline {
                duration: 1.2,
                stagger: 0.4,
                count: 3,
            }
        }
    };
    let reveal = move |i: usize| {
        move || {
            REVEAL_FROM
                .lerp(timeline().local_progress(progress.get(), i))
                .to_css()
        }
    };

    view! {
        <section
            id="about"
            class="w-full h-screen bg-[#dee2e6] flex flex-col justify-center items-center text-center px-4"
        >
            <div class="flex flex-col items-center justify-center">
                <h2
                    node_ref=lead_ref
                    class="text-3xl md:text-6xl font-extrabold text-gray-900 mb-10"
                    style=reveal(0)
                >
                    "Hello I'm"
                </h2>
                <h2 class="text-3xl md:text-6xl font-extrabold text-gray-900" style=reveal(1)>
                    <span class="text-black text-3xl md:text-8xl border-r-2 md:border-r-8 pr-2 md:pr-8 border-gray-700">
                        {owner.name.as_str()}
                    </span>
                    <span class="md:text-8xl text-2xl text-gray-700 font-semibold md:pl-8 pl-2">
                        {owner.role.as_str()}
                    </span>
                </h2>
                <p
                    class="text-lg md:text-2xl leading-relaxed mt-12 text-gray-600 max-w-2xl"
                    style=reveal(2)
                >
                    {owner.about.as_str()}
                </p>
            </div>
            <div class="flex items-center justify-center gap-8 mt-10 md:gap-28 md:mt-40">
                {socials
                    .iter()
                    .map(|social| {
                        view! {
                            <a href=social.href.as_str() target="_blank" rel="noopener noreferrer">
                                <img
                                    src=social.icon.as_str()
                                    alt=social.label.as_str()
                                    class="w-12 h-12 md:w-14 md:h-14 hover:scale-110 transition-transform duration-300"
                                />
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
