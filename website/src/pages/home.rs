use leptos::prelude::*;
use lws_core::content::{features, render, testimonials};
use lws_core::Page;

#[component]
pub fn Home() -> impl IntoView {
    let content = render(Page::Home);
    let feats = features();
    let quotes = testimonials();

    view! {
        <div class="space-y-24 pb-24">
            // Hero Section
            <section class="pt-24 px-6 text-center relative overflow-hidden">
                <div class="absolute top-0 left-1/2 -translate-x-1/2 w-[800px] h-[400px] bg-blue-600/10 blur-[120px] rounded-full pointer-events-none"></div>

                <div class="relative z-10 flex flex-col items-center">
                    <h1 class="text-5xl md:text-7xl font-black tracking-tight mb-6">
                        {content.heading}
                    </h1>
                    <p class="text-xl opacity-70 max-w-2xl mx-auto mb-10 font-light leading-relaxed">
                        {content.tagline}
                    </p>
                    <a
                        href=Page::Contact.href()
                        class="px-8 py-3 bg-blue-600 text-white font-bold rounded-full hover:bg-blue-500 transition-colors"
                    >
                        "Get Started"
                    </a>
                </div>
            </section>

            // Features
            <section class="max-w-6xl mx-auto px-6">
                <h2 class="text-3xl font-bold text-center mb-12">"Why Choose Us"</h2>
                <div class="grid md:grid-cols-3 gap-6">
                    {feats
                        .into_iter()
                        .map(|f| {
                            view! {
                                <div class="card rounded-xl p-6 text-center">
                                    <div class="text-4xl mb-4">{f.icon}</div>
                                    <h3 class="text-lg font-semibold mb-2">{f.title}</h3>
                                    <p class="text-sm opacity-70 leading-relaxed">{f.desc}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            // Testimonials
            <section class="max-w-5xl mx-auto px-6">
                <h2 class="text-3xl font-bold text-center mb-12">"Client Testimonials"</h2>
                <div class="grid md:grid-cols-2 gap-6">
                    {quotes
                        .into_iter()
                        .map(|t| {
                            view! {
                                <div class="card rounded-xl p-6">
                                    <p class="italic leading-relaxed mb-4">"\u{201C}"{t.quote}"\u{201D}"</p>
                                    <p class="text-sm font-semibold">{t.client}", "{t.company}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
