use leptos::prelude::*;

use crate::content::TextRotation;

use super::rotating_text::RotatingText;

#[component]
pub fn Skills(skills: &'static TextRotation) -> impl IntoView {
    let heading = skills.heading.as_deref().unwrap_or("Skills");
    let on_next = Callback::new(move |i: usize| {
        if let Some(skill) = skills.items.get(i) {
            log::debug!("showing skill {}", skill.text);
        }
    });
    view! {
        <section
            id="skills"
            class="relative w-full h-[40vh] bg-[#fdf0d5] flex flex-col justify-center items-center text-center px-4"
        >
            <h1 class="absolute top-10 text-xl md:text-3xl font-bold text-black">{heading}</h1>
            <RotatingText
                rotation=skills
                on_next
                class="inline-flex items-center justify-center w-full text-2xl md:text-6xl lg:text-8xl text-black overflow-hidden py-0.5 sm:py-1 md:py-2 sm:px-2 md:px-3 rounded-lg"
            />
        </section>
    }
}
