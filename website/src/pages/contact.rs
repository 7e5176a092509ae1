use leptos::prelude::*;
use lws_app::{ContactFormState, Message};
use lws_core::content::{contact_details, CONTACT_INTRO};
use lws_core::{ContactField, Page};

use crate::components::page_header::PageHeader;
use crate::components::status_banner::StatusBanner;
use crate::site::Site;

#[component]
pub fn Contact() -> impl IntoView {
    let site = expect_context::<Site>();
    let form = site.contact();

    let status = Signal::derive(move || form.with(|f| f.status.clone()));
    let disabled = move || form.with(|f| f.inputs_disabled());
    let label = move || form.with(|f| f.submit_label());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        site.send(Message::SubmitContact);
    };

    view! {
        <div class="pb-24">
            <PageHeader page=Page::Contact />

            <section class="max-w-6xl mx-auto px-6 grid md:grid-cols-2 gap-12">
                <div>
                    <h2 class="text-2xl font-bold mb-4">"Get In Touch"</h2>
                    <p class="opacity-80 leading-relaxed mb-8">{CONTACT_INTRO}</p>
                    <div class="space-y-6">
                        {contact_details()
                            .into_iter()
                            .map(|d| {
                                view! {
                                    <div>
                                        <h3 class="font-semibold mb-1">{d.icon}" "{d.title}</h3>
                                        {d.lines.iter().map(|line| view! { <p class="text-sm opacity-70">{*line}</p> }).collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                // Inputs keep `required` as hints; the engine runs the real check
                <form class="card rounded-xl p-8" novalidate=true on:submit=on_submit>
                    <StatusBanner status=status />
                    {ContactField::ALL
                        .into_iter()
                        .map(|field| view! { <FormField field=field form=form /> })
                        .collect_view()}
                    <button
                        type="submit"
                        class="w-full py-3 rounded-lg bg-blue-600 text-white font-bold hover:bg-blue-500 transition-colors disabled:opacity-60 disabled:cursor-not-allowed"
                        disabled=disabled
                    >
                        {label}
                    </button>
                </form>
            </section>
        </div>
    }
}

#[component]
fn FormField(field: ContactField, form: Memo<ContactFormState>) -> impl IntoView {
    let site = expect_context::<Site>();
    let id = field.name();
    let value = move || form.with(|f| f.draft.get(field).to_string());
    let disabled = move || form.with(|f| f.inputs_disabled());
    let on_input = move |ev: leptos::ev::Event| {
        site.send(Message::UpdateField {
            field,
            value: event_target_value(&ev),
        })
    };

    let input = match field {
        ContactField::Message => view! {
            <textarea
                id=id
                name=id
                rows="5"
                class="field w-full rounded-lg px-3 py-2"
                prop:value=value
                required=true
                disabled=disabled
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        ContactField::Email => view! {
            <input
                type="email"
                id=id
                name=id
                class="field w-full rounded-lg px-3 py-2"
                prop:value=value
                required=true
                disabled=disabled
                on:input=on_input
            />
        }
        .into_any(),
        ContactField::Name | ContactField::Subject => view! {
            <input
                type="text"
                id=id
                name=id
                class="field w-full rounded-lg px-3 py-2"
                prop:value=value
                required=true
                disabled=disabled
                on:input=on_input
            />
        }
        .into_any(),
    };

    view! {
        <div class="mb-5">
            <label for=id class="block text-sm font-medium mb-2">{field.label()}</label>
            {input}
        </div>
    }
}
