use leptos::prelude::*;
use lws_core::SubmissionStatus;

/// Result of the latest contact submission; renders nothing while idle or pending
#[component]
pub fn StatusBanner(#[prop(into)] status: Signal<SubmissionStatus>) -> impl IntoView {
    move || {
        status.with(|status| {
            let class = status.banner_class()?;
            let message = status.message()?.to_string();
            Some(view! {
                <div class=format!("banner {class} rounded-lg px-4 py-3 mb-6 text-sm font-medium")>
                    {message}
                </div>
            })
        })
    }
}
