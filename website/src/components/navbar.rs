use leptos::prelude::*;
use lws_app::Message;
use lws_core::content::COMPANY_NAME;
use lws_core::Page;

use crate::site::Site;

#[component]
pub fn Navbar() -> impl IntoView {
    let site = expect_context::<Site>();
    let current = site.current_page();
    let theme = site.theme();

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 backdrop-blur-md border-b border-slate-500/20 bg-white/70">
            <div class="max-w-7xl mx-auto px-6 h-16 flex items-center justify-between">
                <a href=Page::Home.href() class="font-bold text-lg tracking-tight">
                    {COMPANY_NAME}
                </a>

                <nav class="flex items-center space-x-6">
                    {Page::ALL
                        .into_iter()
                        .map(|page| {
                            view! {
                                <a
                                    href=page.href()
                                    class=move || {
                                        if current.get() == page {
                                            "text-sm font-semibold text-blue-600"
                                        } else {
                                            "text-sm font-medium opacity-70 hover:opacity-100 transition-opacity"
                                        }
                                    }
                                >
                                    {page.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        class="text-sm px-3 py-1 rounded-full border border-slate-400/40 hover:border-slate-400 transition-colors"
                        on:click=move |_| site.send(Message::ToggleTheme)
                    >
                        {move || theme.get().toggle_label()}
                    </button>
                </nav>
            </div>
        </header>
    }
}
