use leptos::prelude::*;
use leptos_use::{use_window_size, UseWindowSizeReturn};

use crate::content::{Owner, TextRotation};
use crate::motion::Tilt;

use super::rotating_text::RotatingText;

#[component]
pub fn Hero(owner: &'static Owner, messages: &'static TextRotation) -> impl IntoView {
    let (pointer, set_pointer) = signal(None::<(f64, f64)>);
    let UseWindowSizeReturn { width, height } = use_window_size();

    let tilt = Memo::new(move |_| match pointer.get() {
        Some((x, y)) => Tilt::from_pointer(x, y, width.get(), height.get()),
        None => Tilt::rest(),
    });

    let backgrounds = format!(
        "--hero-image: url('{}'); --hero-mobile: url('{}');",
        owner.hero_image, owner.mobile_image
    );

    view! {
        <section
            id="home"
            class="relative h-screen p-4 md:p-8 flex items-center justify-center overflow-hidden"
        >
            <div
                class="relative w-full h-full rounded-[30px] shadow-xl shadow-sky-200 bg-cover bg-no-repeat bg-center bg-[image:var(--hero-mobile)] lg:bg-[image:var(--hero-image)] transition-transform duration-300 ease-out will-change-transform"
                style=move || format!("{backgrounds} {}", tilt.get().to_css())
                on:mousemove=move |ev| {
                    set_pointer(Some((ev.client_x() as f64, ev.client_y() as f64)))
                }
                on:mouseleave=move |_| set_pointer(None)
            ></div>

            <div class="absolute top-[60%] right-[5%] md:top-[45%] md:right-[15%] lg:top-[50%] lg:right-[10%] xl:top-[20%] xl:right-[2%] rounded-xl bg-white/20 backdrop-blur-md lg:bg-transparent lg:backdrop-blur-0 px-2">
                <h1 class="text-5xl md:text-8xl lg:text-9xl font-extrabold text-white">
                    {owner.hero_title.as_str()}
                </h1>
            </div>

            <div class="absolute bottom-10 w-full p-6 md:p-24 flex flex-col md:flex-row items-center md:items-end justify-center md:justify-end">
                <h2 class="text-2xl md:text-4xl font-extrabold text-white p-4 md:p-5 rounded-xl bg-black/30 border border-gray-500 shadow-xl shadow-gray-900 backdrop-blur-2xl text-center">
                    <RotatingText rotation=messages class="justify-center" />
                </h2>
            </div>
        </section>
    }
}
