use leptos::prelude::*;

use crate::content::Owner;

#[component]
pub fn Header(owner: &'static Owner) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let mailto = format!("mailto:{}", owner.email);

    view! {
        <header class="fixed w-full flex items-center justify-between z-30 p-4 sm:p-6 md:p-16 lg:p-20 md:py-4 lg:py-4 min-w-0">
            <button
                class="text-3xl text-white"
                aria-label="Sections"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                <i class="ri-more-2-fill" />
            </button>
            <nav
                class="absolute top-16 left-4 sm:left-6 md:left-16 flex flex-col gap-2 p-4 rounded-xl bg-black/70 backdrop-blur-md text-white"
                class:hidden=move || !menu_open()
                on:click=move |_| set_menu_open(false)
            >
                <a href="#home">"Home"</a>
                <a href="#about">"About"</a>
                <a href="#skills">"Skills"</a>
                <a href="#projects">"Projects"</a>
            </nav>
            <div class="flex-1"></div>
            <a
                href=mailto
                class="bg-black border-2 text-white rounded-2xl text-lg sm:text-xl px-5 sm:px-6 py-2 sm:py-3 hover:bg-gray-200 hover:text-black transition"
            >
                "Hire Me"
            </a>
        </header>
    }
}
