use leptos::prelude::*;
use lws_core::content::render;
use lws_core::Page;

/// Heading and tagline for a content page
#[component]
pub fn PageHeader(page: Page) -> impl IntoView {
    let content = render(page);

    view! {
        <section class="py-16 px-6 text-center">
            <h1 class="text-4xl md:text-5xl font-black tracking-tight mb-4">{content.heading}</h1>
            <p class="text-lg opacity-70 max-w-2xl mx-auto">{content.tagline}</p>
        </section>
    }
}
