use leptos::prelude::*;
use lws_core::content::{stats, team, APPROACH_INTRO, APPROACH_STEPS, STORY};
use lws_core::Page;

use crate::components::page_header::PageHeader;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="pb-24 space-y-20">
            <PageHeader page=Page::About />

            <section class="max-w-6xl mx-auto px-6 grid md:grid-cols-3 gap-10">
                <div class="md:col-span-2 space-y-8">
                    <div>
                        <h2 class="text-2xl font-bold mb-4">"Our Story"</h2>
                        {STORY.into_iter().map(|p| view! { <p class="opacity-80 leading-relaxed mb-4">{p}</p> }).collect_view()}
                    </div>
                    <div>
                        <h2 class="text-2xl font-bold mb-4">"Our Approach"</h2>
                        <p class="opacity-80 leading-relaxed mb-3">{APPROACH_INTRO}</p>
                        <ol class="list-decimal list-inside space-y-1 opacity-80">
                            {APPROACH_STEPS.into_iter().map(|step| view! { <li>{step}</li> }).collect_view()}
                        </ol>
                    </div>
                </div>

                <div class="grid grid-cols-2 gap-4 content-start">
                    {stats()
                        .into_iter()
                        .map(|s| {
                            view! {
                                <div class="card rounded-xl p-5 text-center">
                                    <div class="text-3xl font-black text-blue-600">{s.value}</div>
                                    <div class="text-xs uppercase tracking-wide opacity-70 mt-1">{s.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="max-w-6xl mx-auto px-6">
                <h2 class="text-3xl font-bold text-center mb-12">"Our Team"</h2>
                <div class="grid sm:grid-cols-2 md:grid-cols-4 gap-6">
                    {team()
                        .into_iter()
                        .map(|m| {
                            view! {
                                <div class="card rounded-xl p-6 text-center">
                                    <div class="w-20 h-20 mx-auto mb-4 rounded-full bg-slate-400/30"></div>
                                    <h3 class="font-semibold">{m.name}</h3>
                                    <p class="text-sm opacity-70">{m.role}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
