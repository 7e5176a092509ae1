use leptos::prelude::*;
use lws_core::content::services;
use lws_core::Page;

use crate::components::page_header::PageHeader;

#[component]
pub fn Services() -> impl IntoView {
    let offered = services();

    view! {
        <div class="pb-24">
            <PageHeader page=Page::Services />
            <section class="max-w-6xl mx-auto px-6 grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {offered
                    .into_iter()
                    .map(|s| {
                        view! {
                            <div class="card rounded-xl p-6">
                                <div class="text-4xl mb-4">{s.icon}</div>
                                <h3 class="text-lg font-semibold mb-2">{s.title}</h3>
                                <p class="text-sm opacity-70 leading-relaxed mb-4">{s.desc}</p>
                                <ul class="text-sm space-y-1 list-disc list-inside">
                                    {s.highlights.into_iter().map(|h| view! { <li>{h}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
