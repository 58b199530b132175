use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::config::Timings;
use crate::contact::{schedule_dismissal, submit_with, ContactForm, Field, SimulatedBackend};
use crate::content::CONTACT_INFO;
use crate::timer::TimerGuard;

use super::timers::{BrowserHandle, BrowserScheduler};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-gray-800 border border-gray-700 text-white placeholder-gray-500 outline-none transition-all duration-300";

#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    let class = move || {
        if form.with(|f| f.focused() == Some(field)) {
            format!("{INPUT_CLASS} border-purple-500 ring-2 ring-purple-500/40")
        } else {
            INPUT_CLASS.to_string()
        }
    };
    let value = move || form.with(|f| f.value(field).to_string());
    let kind = if field == Field::Email { "email" } else { "text" };

    match field {
        Field::Message => view! {
            <textarea
                id=field.id()
                name=field.id()
                placeholder=field.placeholder()
                rows="5"
                required=true
                class=class
                prop:value=value
                on:input=move |ev| form.update(|f| f.update_field(field, event_target_value(&ev)))
                on:focus=move |_| form.update(|f| f.focus(field))
                on:blur=move |_| form.update(ContactForm::blur)
            ></textarea>
        }
        .into_any(),
        _ => view! {
            <input
                id=field.id()
                name=field.id()
                type=kind
                placeholder=field.placeholder()
                required=true
                class=class
                prop:value=value
                on:input=move |ev| form.update(|f| f.update_field(field, event_target_value(&ev)))
                on:focus=move |_| form.update(|f| f.focus(field))
                on:blur=move |_| form.update(ContactForm::blur)
            />
        }
        .into_any(),
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let timings = use_context::<Timings>().unwrap_or_default();
    let form = RwSignal::new(ContactForm::new());
    let dismiss = StoredValue::new(None::<TimerGuard<BrowserHandle>>);
    on_cleanup(move || {
        dismiss.try_update_value(Option::take);
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let backend = SimulatedBackend::new(BrowserScheduler, timings.submit_delay());
        // signal updates become no-ops once the section is torn down
        let update = move |apply: &mut dyn FnMut(&mut ContactForm) -> bool| {
            form.try_update(|f| apply(f))
        };
        spawn_local(async move {
            if submit_with(&backend, update).await != Some(true) {
                return;
            }
            match schedule_dismissal(&BrowserScheduler, timings.success_display(), update) {
                Ok(guard) => {
                    dismiss.try_update_value(|slot| *slot = Some(guard));
                }
                Err(e) => {
                    log::warn!("success message won't auto-hide: {e}");
                    form.try_update(ContactForm::dismiss_success);
                }
            }
        });
    };

    view! {
        <section id="contact" class="py-24 bg-gray-900">
            <div class="container mx-auto px-4">
                <div class="mb-16 text-center">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        <span class="bg-gradient-to-r from-purple-500 to-pink-500 bg-clip-text text-transparent">
                            "Get In Touch"
                        </span>
                    </h2>
                    <p class="text-gray-400 max-w-xl mx-auto text-lg">
                        "Have a project in mind or just want to say hi? My inbox is always open."
                    </p>
                </div>
                <div class="grid lg:grid-cols-3 gap-12 max-w-6xl mx-auto">
                    <aside class="space-y-6">
                        {CONTACT_INFO
                            .iter()
                            .map(|info| {
                                view! {
                                    <div class="flex items-center gap-4 p-4 rounded-xl bg-gray-800/60 border border-gray-700">
                                        <span class="text-2xl">{info.icon}</span>
                                        <div>
                                            <p class="text-sm text-gray-500">{info.label}</p>
                                            <p class="font-medium">{info.value}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </aside>
                    <div class="lg:col-span-2 relative">
                        <Show when=move || form.with(ContactForm::show_success)>
                            <div class="absolute inset-0 z-10 flex flex-col items-center justify-center rounded-xl bg-gray-900/95 animate-fadeIn">
                                <span class="text-5xl mb-4">"✓"</span>
                                <h3 class="text-2xl font-bold mb-2">"Message Sent!"</h3>
                                <p class="text-gray-400">"Thanks for reaching out. I'll get back to you soon."</p>
                            </div>
                        </Show>
                        <form class="space-y-6" on:submit=on_submit>
                            <div class="grid md:grid-cols-2 gap-6">
                                <FormField form=form field=Field::Name />
                                <FormField form=form field=Field::Email />
                            </div>
                            <FormField form=form field=Field::Subject />
                            <FormField form=form field=Field::Message />
                            {move || {
                                form.with(|f| f.error().map(str::to_string))
                                    .map(|reason| {
                                        view! { <p class="text-red-400 text-sm">{reason}</p> }
                                    })
                            }}
                            <button
                                type="submit"
                                disabled=move || form.with(ContactForm::is_submitting)
                                class="w-full py-3 rounded-lg font-medium bg-gradient-to-r from-purple-600 to-pink-600 hover:shadow-lg hover:shadow-purple-500/30 transition-all duration-300 disabled:opacity-60 disabled:cursor-not-allowed"
                            >
                                {move || {
                                    if form.with(ContactForm::is_submitting) {
                                        "Sending..."
                                    } else {
                                        "Send Message"
                                    }
                                }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
