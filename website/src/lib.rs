pub mod components;
pub mod pages;
pub mod site;
pub mod storage;

use components::footer::Footer;
use components::navbar::Navbar;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use lws_core::content::render;
use lws_core::prelude::warn;
use lws_core::Page;
use lws_core::DARK_MODE_CLASS;
use pages::about::About;
use pages::contact::Contact;
use pages::home::Home;
use pages::services::Services;
use site::{current_hash, Site};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = Site::new();
    provide_context(site);

    // Deep links land on the page named by the fragment
    site.send(lws_app::Message::Navigate(Page::from_slug(&current_hash())));

    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        site.send(lws_app::Message::Navigate(Page::from_slug(&current_hash())));
    });

    let page = site.current_page();
    let title = move || render(page.get()).title.to_string();

    view! {
        <Title text=title />
        <ThemeClass />
        <ScrollToTop />
        <div class="min-h-screen flex flex-col font-sans">
            <Navbar />
            <main class="flex-1 pt-16">
                {move || match page.get() {
                    Page::Home => view! { <Home /> }.into_any(),
                    Page::Services => view! { <Services /> }.into_any(),
                    Page::About => view! { <About /> }.into_any(),
                    Page::Contact => view! { <Contact /> }.into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
}

/// Mirrors the theme onto `<body>` so the stylesheet can switch palettes
#[component]
fn ThemeClass() -> impl IntoView {
    let site = expect_context::<Site>();
    let theme = site.theme();

    Effect::new(move || {
        let dark = theme.get().is_dark();
        let Some(body) = document().body() else {
            return;
        };
        if body.class_list().toggle_with_force(DARK_MODE_CLASS, dark).is_err() {
            warn!("Could not update body class for {:?}", theme.get_untracked());
        }
    });

    ()
}

#[component]
fn ScrollToTop() -> impl IntoView {
    let site = expect_context::<Site>();
    let page = site.current_page();

    Effect::new(move || {
        let _ = page.get();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    ()
}
