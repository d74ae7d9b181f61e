mod about;
mod blog;
mod charts;
mod contact;
mod footer;
mod gallery;
mod hero;
mod hooks;
mod icons;
mod layout;
mod navbar;
mod portfolio;
mod roadmap;
mod skills;
mod testimonials;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{config::SiteConfig, content::PROFILE, seo::person_json_ld, theme::BOOTSTRAP_SCRIPT};

use about::About;
use blog::{BlogPostPage, BlogSection};
use contact::Contact;
use footer::Footer;
use gallery::Gallery;
use hero::Hero;
use navbar::Navbar;
use portfolio::Portfolio;
use roadmap::Roadmap;
use skills::Skills;
use testimonials::Testimonials;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let site = use_context::<SiteConfig>().unwrap_or_default();
    let json_ld = person_json_ld(&site);
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=PROFILE.hero_tagline />
                <link rel="canonical" href=site.url("/") />
                <link
                    rel="alternate"
                    type="application/rss+xml"
                    title="RSS"
                    href=site.url("/rss.xml")
                />
                <script inner_html=BOOTSTRAP_SCRIPT></script>
                <script type="application/ld+json" inner_html=json_ld></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    hooks::use_smooth_scroll();

    view! {
        <Title formatter=|title| format!("{title} | {}", PROFILE.name) />
        <Router>
            <div class="min-h-screen bg-gradient-to-b from-slate-50 to-white dark:from-slate-950 dark:to-slate-900 text-slate-800 dark:text-slate-200">
                <Navbar />
                <main>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/blog/:post") view=BlogPostPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portofolio" />
        <Hero />
        <About />
        <Skills />
        <Portfolio />
        <Roadmap />
        <BlogSection />
        <Gallery />
        <Testimonials />
        <Contact />
    }
}

#[cfg(feature = "ssr")]
fn set_not_found_status() {
    if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
        res.set_status(http::StatusCode::NOT_FOUND);
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    set_not_found_status();

    view! {
        <Title text="Halaman tidak ditemukan" />
        <div class="mx-auto max-w-6xl px-4 py-24 text-center">
            <h1 class="text-3xl font-bold text-slate-900 dark:text-slate-50">"404"</h1>
            <p class="mt-2 text-slate-600 dark:text-slate-300">"Halaman tidak ditemukan."</p>
            <A href="/" attr:class="mt-6 inline-block text-blue-700 dark:text-blue-400">
                "← Kembali ke beranda"
            </A>
        </div>
    }
}
