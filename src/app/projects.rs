use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::carousel::Carousel;
use crate::content::{Project, ProjectRotation};

use super::hooks::use_auto_advance;

static GITHUB_ICON: &str = "ri-github-fill";
static TECH_PREVIEW: usize = 4;

#[component]
pub fn Projects(projects: &'static ProjectRotation) -> impl IntoView {
    let items = &projects.items;
    let carousel = Carousel::new(items.clone(), &projects.rotation)
        .unwrap_or_else(|e| {
            log::error!("project carousel falls back to manual control: {e}");
            Carousel::manual(items.clone(), projects.rotation.looping)
        })
        .with_on_change(|i| log::debug!("project carousel -> {i}"));
    let state = RwSignal::new(carousel);
    let restart = use_auto_advance(state);
    let step = move |forward: bool| {
        state.update(|c| {
            if forward {
                c.select_next_item();
            } else {
                c.select_previous_item();
            }
        });
        restart.run(());
    };

    let selected = Memo::new(move |_| state.with(|c| c.selected_index()));
    let position = move || state.with(|c| c.view().position.map(|p| p.to_string()));

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        let overlay_open = state.with_untracked(|c| c.is_overlay_open());
        match (ev.key().as_str(), overlay_open) {
            ("Escape", true) => state.update(|c| c.close_overlay()),
            ("ArrowRight", true) => state.update(|c| {
                c.next_image();
            }),
            ("ArrowLeft", true) => state.update(|c| {
                c.previous_image();
            }),
            _ => {}
        }
    });

    view! {
        <section
            id="projects"
            class="relative h-screen overflow-hidden bg-gradient-to-br from-gray-900 via-teal-950 to-cyan-950 z-20"
        >
            <div
                class="flex h-full transition-transform duration-700 ease-in-out"
                style=move || format!("transform: translateX(-{}%);", selected.get() * 100)
            >
                {items
                    .iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectPanel project index state /> })
                    .collect_view()}
            </div>

            <div class="absolute bottom-10 left-10 right-10 flex items-center justify-between text-white">
                <button
                    class="rounded-full w-10 h-10 bg-black/50 hover:bg-black/70 font-bold"
                    aria-label="Previous project"
                    on:click=move |_| step(false)
                >
                    "❮"
                </button>
                <span class="px-3 py-1 rounded-full bg-black/60 text-cyan-300 text-sm font-semibold">
                    {position}
                </span>
                <button
                    class="rounded-full w-10 h-10 bg-black/50 hover:bg-black/70 font-bold"
                    aria-label="Next project"
                    on:click=move |_| step(true)
                >
                    "❯"
                </button>
            </div>

            <ProjectModal projects=items state />
        </section>
    }
}

#[component]
fn ProjectPanel(
    project: &'static Project,
    index: usize,
    state: RwSignal<Carousel<Project>>,
) -> impl IntoView {
    let open = move || state.update(|c| c.open_overlay_at(index as i64));
    view! {
        <div class="w-screen h-screen flex-shrink-0 flex items-center justify-center p-4 sm:p-20">
            <div class="w-full max-w-6xl flex flex-col md:flex-row items-center gap-10">
                <div class="w-full md:w-1/2">
                    <ProjectCard project on_open=Callback::new(move |_| open()) />
                </div>
                <div class="hidden md:flex w-full md:w-1/2 flex-col text-left">
                    <span class="text-cyan-400 font-bold text-xl mb-2">
                        {format!("Project {:02}", index + 1)}
                    </span>
                    <h2 class="text-5xl font-bold text-white mb-6">{project.title.as_str()}</h2>
                    <p class="text-gray-300 text-lg mb-8 line-clamp-4">
                        {project.description.as_str()}
                    </p>
                    <button
                        class="w-fit px-8 py-3 rounded-full bg-cyan-500 text-black font-bold hover:bg-cyan-400 transition-colors"
                        on:click=move |_| open()
                    >
                        "View Case Study"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project, on_open: Callback<()>) -> impl IntoView {
    let hidden_tech = project.tech_stack.len().saturating_sub(TECH_PREVIEW);
    view! {
        <div
            class="w-full bg-gradient-to-br from-cyan-900 via-neutral-900 to-teal-900 shadow-lg rounded-xl overflow-hidden hover:-translate-y-2 transition-all duration-300 border border-cyan-800 cursor-pointer group"
            on:click=move |_| on_open.run(())
        >
            <div class="w-full h-80 bg-gray-900 flex items-center justify-center overflow-hidden">
                <img
                    src=project.image.as_str()
                    alt=project.title.as_str()
                    class="object-cover w-full h-full group-hover:scale-110 transition-transform duration-500"
                />
            </div>
            <div class="p-8 flex flex-col gap-4">
                <h3 class="text-2xl font-bold text-white group-hover:text-cyan-300 transition-colors">
                    {project.title.as_str()}
                </h3>
                <GithubLink href=project.github_url.as_str() label="GitHub Repository" />
                <p class="text-gray-300 text-sm line-clamp-2">{project.description.as_str()}</p>
                <div>
                    <h4 class="text-white font-semibold text-xs mb-2">"Tech Stack"</h4>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .tech_stack
                            .iter()
                            .take(TECH_PREVIEW)
                            .map(|tech| view! { <TechBadge tech=tech.as_str() /> })
                            .collect_view()}
                        {(hidden_tech > 0)
                            .then(|| {
                                view! {
                                    <span class="px-2 py-1 text-cyan-400 text-xs">
                                        {format!("+{hidden_tech}")}
                                    </span>
                                }
                            })}
                    </div>
                </div>
                <p class="text-cyan-400 text-xs font-semibold group-hover:text-yellow-400 transition-colors">
                    "Click to view details →"
                </p>
            </div>
        </div>
    }
}

#[component]
fn GithubLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            on:click=|ev| ev.stop_propagation()
            class="flex items-center gap-2 text-green-400 hover:text-teal-300 text-sm font-medium transition-colors"
        >
            <i class=GITHUB_ICON />
            {label}
        </a>
    }
}

#[component]
fn TechBadge(tech: &'static str) -> impl IntoView {
    view! {
        <span class="px-2 py-1 rounded-full bg-cyan-900 border border-cyan-600 text-cyan-300 text-xs font-semibold">
            {tech}
        </span>
    }
}

/// Details of the project captured when the overlay was opened.
#[component]
fn ProjectModal(projects: &'static [Project], state: RwSignal<Carousel<Project>>) -> impl IntoView {
    let target = Memo::new(move |_| state.with(|c| c.overlay_index()));
    let close = move |_| state.update(|c| c.close_overlay());

    move || {
        let project = projects.get(target.get()?)?;
        Some(view! {
            <div
                class="fixed inset-0 bg-black/70 flex items-center justify-center z-50 p-4"
                on:click=close
            >
                <div
                    class="bg-gradient-to-br from-cyan-900 via-neutral-900 to-teal-900 rounded-2xl shadow-2xl border border-cyan-700 max-w-2xl w-full max-h-[90vh] overflow-hidden flex flex-col"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="flex justify-between items-center p-6 border-b border-cyan-700 flex-shrink-0">
                        <h2 class="text-3xl font-bold text-cyan-300">{project.title.as_str()}</h2>
                        <button
                            class="text-white hover:text-cyan-300 text-2xl font-bold transition-colors"
                            aria-label="Close"
                            on:click=close
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="flex-1 overflow-y-auto p-8 space-y-6">
                        <ImageSlider title=project.title.as_str() state />
                        <GithubLink href=project.github_url.as_str() label="View on GitHub" />
                        <div>
                            <h3 class="text-lg font-semibold text-cyan-300 mb-2">"Overview"</h3>
                            <p class="text-gray-300 leading-relaxed">
                                {project.description.as_str()}
                            </p>
                        </div>
                        <div>
                            <h4 class="text-lg font-semibold text-cyan-300 mb-3">"Key Features:"</h4>
                            <ul class="list-disc pl-6 space-y-2 text-gray-300 text-sm marker:text-orange-400">
                                {project
                                    .features
                                    .iter()
                                    .map(|feature| view! { <li>{feature.as_str()}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div>
                            <h4 class="text-lg font-semibold text-cyan-300 mb-3">"Tech Stack"</h4>
                            <div class="flex flex-wrap gap-2">
                                {project
                                    .tech_stack
                                    .iter()
                                    .map(|tech| view! { <TechBadge tech=tech.as_str() /> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                    <div class="p-6 border-t border-cyan-700 flex-shrink-0">
                        <a
                            href=project.github_url.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="block w-full text-center py-3 rounded-lg font-bold bg-gradient-to-r from-cyan-400 via-teal-300 to-yellow-400 text-gray-900"
                        >
                            "Visit Repository →"
                        </a>
                    </div>
                </div>
            </div>
        })
    }
}

/// Image browser for the overlay project, with a counter and one dot per image.
#[component]
fn ImageSlider(title: &'static str, state: RwSignal<Carousel<Project>>) -> impl IntoView {
    let current = Memo::new(move |_| {
        state.with(|c| {
            c.overlay_image()
                .map(|(src, position)| (src.to_string(), position))
        })
    });
    let total = move || current.get().map_or(0, |(_, p)| p.total);

    move || {
        let (src, position) = current.get()?;
        let dots = (0..position.total)
            .map(|i| {
                view! {
                    <button
                        class={
                            if i == position.index {
                                "h-2 w-6 rounded-full bg-cyan-400 transition-all duration-300"
                            } else {
                                "h-2 w-2 rounded-full bg-white/50 hover:bg-white/70 transition-all duration-300"
                            }
                        }
                        aria-label=format!("Go to image {}", i + 1)
                        on:click=move |_| {
                            state.update(|c| {
                                c.select_image_at(i as i64);
                            })
                        }
                    />
                }
            })
            .collect_view();
        Some(view! {
            <div class="relative w-full rounded-xl overflow-hidden bg-gray-900">
                <div class="relative w-full h-96">
                    <img
                        src=src
                        alt=format!("{title} - {}", position.ordinal())
                        class="w-full h-full object-cover"
                    />
                    <div class="absolute top-4 right-4 bg-black/60 px-3 py-1 rounded-full text-cyan-300 text-sm font-semibold">
                        {position.to_string()}
                    </div>
                </div>
                <Show when=move || { total() > 1 }>
                    <button
                        class="absolute left-4 top-1/2 -translate-y-1/2 bg-black/50 hover:bg-black/70 text-white rounded-full w-10 h-10 font-bold text-lg"
                        aria-label="Previous image"
                        on:click=move |_| {
                            state.update(|c| {
                                c.previous_image();
                            })
                        }
                    >
                        "❮"
                    </button>
                    <button
                        class="absolute right-4 top-1/2 -translate-y-1/2 bg-black/50 hover:bg-black/70 text-white rounded-full w-10 h-10 font-bold text-lg"
                        aria-label="Next image"
                        on:click=move |_| {
                            state.update(|c| {
                                c.next_image();
                            })
                        }
                    >
                        "❯"
                    </button>
                </Show>
                <div class="absolute bottom-4 left-1/2 -translate-x-1/2 flex gap-2">{dots}</div>
            </div>
        })
    }
}
