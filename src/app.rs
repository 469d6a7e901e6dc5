mod footer;
mod header;
mod hero;
mod hooks;
mod intro;
mod keywords;
mod projects;
mod rotating_text;
mod skills;
mod what_i_do;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::portfolio;

use footer::Footer;
use header::Header;
use hero::Hero;
use intro::Intro;
use keywords::Keywords;
use projects::Projects;
use skills::Skills;
use what_i_do::WhatIDo;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/npm/remixicon@4.2.0/fonts/remixicon.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black overflow-x-hidden">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Code-D-Saurabh - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole single-page site, one full-viewport section after another.
#[component]
fn HomePage() -> impl IntoView {
    let portfolio = match portfolio() {
        Ok(p) => p,
        Err(e) => {
            log::error!("failed to load portfolio content: {e}");
            return view! {
                <Title text="Unavailable" />
                <main class="h-screen flex items-center justify-center text-white">
                    <p>"This portfolio is temporarily unavailable."</p>
                </main>
            }
            .into_any();
        }
    };

    view! {
        <Title text="Portfolio" />
        <Meta name="description" content=portfolio.owner.about.as_str() />
        <Header owner={&portfolio.owner} />
        <main>
            <Hero owner={&portfolio.owner} messages={&portfolio.messages} />
            <Intro owner={&portfolio.owner} socials={&portfolio.socials} />
            <Skills skills={&portfolio.skills} />
            <WhatIDo />
            <Projects projects={&portfolio.projects} />
            <Keywords owner={&portfolio.owner} keywords={&portfolio.keywords} />
        </main>
        <Footer footer={&portfolio.footer} />
    }
    .into_any()
}
