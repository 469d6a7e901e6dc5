use leptos::{html, prelude::*};
use leptos_use::{use_element_bounding, UseElementBoundingReturn};

use crate::content::Footer as FooterContent;
use crate::motion::{Frame, ScrollRange};

use super::hooks::use_scroll_progress;

static BUILD_TIME: &str = env!("BUILD_TIME");

/// Blurs in once when its top reaches 85% of the viewport, then stays.
#[component]
pub fn Footer(footer: &'static FooterContent) -> impl IntoView {
    let footer_ref = NodeRef::<html::Footer>::new();
    let UseElementBoundingReturn { top, .. } = use_element_bounding(footer_ref);
    let progress = use_scroll_progress(top, ScrollRange::new(0.85, 0.85).into());

    let (revealed, set_revealed) = signal(false);
    Effect::new(move |_| {
        if !revealed.get_untracked() && progress.get() >= 1.0 {
            log::debug!("footer revealed");
            set_revealed(true);
        }
    });
    let style = move || {
        let t = if revealed.get() { 1.0 } else { 0.0 };
        Frame::rise(0.0, 10.0).lerp(t).to_css()
    };

    view! {
        <footer
            node_ref=footer_ref
            class="w-full h-[20vh] mt-20 text-center text-white text-2xl md:text-3xl font-light transition-all duration-[1500ms] ease-out"
            style=style
        >
            {footer.text.as_str()}
            <br />
            <a
                href=footer.link_href.as_str()
                target="_blank"
                rel="noopener noreferrer"
                class="text-blue-400 underline hover:text-blue-300 transition-colors duration-300 pl-2"
            >
                {footer.link_label.as_str()}
            </a>
            <p class="mt-6 text-xs text-gray-500">{format!("built {BUILD_TIME}")}</p>
        </footer>
    }
}
