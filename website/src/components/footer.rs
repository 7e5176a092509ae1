use leptos::prelude::*;
use lws_core::content::{
    contact_details, copyright_notice, COMPANY_NAME, COMPANY_PITCH, SOCIAL_ICONS,
};
use lws_core::Page;

#[component]
pub fn Footer() -> impl IntoView {
    let details = contact_details();

    view! {
        <footer class="border-t border-slate-500/20 py-12 mt-auto">
            <div class="max-w-7xl mx-auto px-6 grid gap-10 md:grid-cols-3 text-sm">
                <div>
                    <h3 class="font-bold text-base mb-3">{COMPANY_NAME}</h3>
                    <p class="opacity-70">{COMPANY_PITCH}</p>
                </div>

                <div>
                    <h3 class="font-bold text-base mb-3">"Quick Links"</h3>
                    <ul class="space-y-2">
                        {Page::ALL
                            .into_iter()
                            .map(|page| {
                                view! {
                                    <li>
                                        <a href=page.href() class="opacity-70 hover:opacity-100 transition-opacity">
                                            {page.label()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h3 class="font-bold text-base mb-3">"Contact Info"</h3>
                    {details
                        .into_iter()
                        .map(|d| view! { <p class="opacity-70">{d.icon}" "{d.lines.join(", ")}</p> })
                        .collect_view()}
                    <div class="flex space-x-3 mt-4 text-xl">
                        {SOCIAL_ICONS.into_iter().map(|icon| view! { <span>{icon}</span> }).collect_view()}
                    </div>
                </div>
            </div>
            <p class="text-center opacity-60 text-xs mt-10">{copyright_notice()}</p>
        </footer>
    }
}
