use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;
use leptos::{ev, html, prelude::*, task::spawn_local};

use crate::contact::{run_submission, ContactMessage, FormPhase, SimulatedSink, SubmissionSink, Timer};
use crate::content;
use crate::page::SectionId;
use crate::scenes;

use super::animate::{use_interaction, use_scroll_reveal, Interaction};

/// The contact form's delivery capability, looked up from context.
#[derive(Clone)]
pub struct Mailer(pub Arc<dyn SubmissionSink>);

/// Waits on the browser's timer queue.
pub struct BrowserTimer;

#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        let (tx, rx) = oneshot::channel();
        set_timeout(
            move || {
                let _ = tx.send(());
            },
            duration,
        );
        let _ = rx.await;
    }
}

/// Provides the simulated sink unless something else already provided a [`Mailer`].
pub fn provide_default_sink() {
    if use_context::<Mailer>().is_some() {
        return;
    }
    let delay = content::settings().submit_delay();
    provide_context(Mailer(Arc::new(SimulatedSink::new(BrowserTimer, delay))));
}

fn value_of(input: NodeRef<html::Input>) -> String {
    input.get_untracked().map(|el| el.value()).unwrap_or_default()
}

#[component]
pub fn Contact() -> impl IntoView {
    let Mailer(sink) = expect_context::<Mailer>();
    let phase = RwSignal::new(FormPhase::Idle);
    let error = RwSignal::new(None::<String>);

    let section = NodeRef::<html::Section>::new();
    let form = NodeRef::<html::Form>::new();
    let socials = NodeRef::<html::Div>::new();
    let name = NodeRef::<html::Input>::new();
    let email = NodeRef::<html::Input>::new();
    let message = NodeRef::<html::Textarea>::new();
    let button = NodeRef::<html::Button>::new();

    use_scroll_reveal(scenes::CONTACT_BAND, move |scene| {
        let el = section.get()?;
        let blocks = vec![scene.add(form.get()?), scene.add(socials.get()?)];
        let inputs = vec![
            scene.add(name.get()?),
            scene.add(email.get()?),
            scene.add(message.get()?),
        ];
        let button = scene.add(button.get()?);
        Some((el.into(), scenes::contact(&blocks, &inputs, button)))
    });

    let focus_name = use_interaction(move || name.get().map(Into::into), scenes::input_focus);
    let focus_email = use_interaction(move || email.get().map(Into::into), scenes::input_focus);
    let focus_message =
        use_interaction(move || message.get().map(Into::into), scenes::input_focus);
    let pulse = use_interaction(move || button.get().map(Into::into), scenes::submit_pulse);

    let on_submit = move |e: ev::SubmitEvent| {
        e.prevent_default();
        if phase.get_untracked().is_submitting() {
            return;
        }
        let body = message.get_untracked().map(|el| el.value()).unwrap_or_default();
        let msg = match ContactMessage::new(&value_of(name), &value_of(email), &body) {
            Ok(msg) => msg,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        let sink = Arc::clone(&sink);
        spawn_local(async move {
            let res = run_submission(sink.as_ref(), &msg, |p| phase.set(p)).await;
            match res {
                Ok(()) => {
                    if let Some(form) = form.get_untracked() {
                        form.reset();
                    }
                    pulse.pulse();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let submitting = move || phase.get().is_submitting();
    let profile = content::profile();

    view! {
        <section id=SectionId::Contact.as_str() node_ref=section class="py-20 relative">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                        "Get In Touch"
                    </h2>
                    <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                        "Ready to bring your ideas to life? Let's collaborate and create something amazing together."
                    </p>
                </div>

                <div class="max-w-2xl mx-auto">
                    <form
                        node_ref=form
                        class="glass-strong p-8 rounded-2xl space-y-6"
                        novalidate=true
                        on:submit=on_submit
                    >
                        <div class="grid md:grid-cols-2 gap-6">
                            <FocusInput input=name focus=focus_name kind="text" field="name" placeholder="Your Name" />
                            <FocusInput input=email focus=focus_email kind="email" field="email" placeholder="Your Email" />
                        </div>
                        <textarea
                            node_ref=message
                            name="message"
                            rows=6
                            required=true
                            placeholder="Your Message"
                            class="w-full px-4 py-3 rounded-lg glass bg-transparent border border-white/10 focus:border-primary focus:outline-none transition-colors resize-none"
                            on:focus=move |_| focus_message.enter()
                            on:blur=move |_| focus_message.leave()
                        ></textarea>
                        <Show when=move || error.with(Option::is_some)>
                            <p class="text-sm text-red-400" role="alert">
                                {move || error.get().unwrap_or_default()}
                            </p>
                        </Show>
                        <button
                            node_ref=button
                            type="submit"
                            disabled=submitting
                            class="submit-btn w-full py-4 rounded-lg bg-gradient-to-r from-primary to-accent text-white font-semibold hover:glow-primary transition-all duration-300 disabled:opacity-50 flex items-center justify-center gap-3"
                        >
                            <Show
                                when=submitting
                                fallback=|| {
                                    view! {
                                        <i class="ph-light ph-paper-plane-tilt text-xl"></i>
                                        "Send Message"
                                    }
                                }
                            >
                                <div class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></div>
                                "Sending..."
                            </Show>
                        </button>
                    </form>

                    <div node_ref=socials class="flex justify-center gap-6 mt-12">
                        {profile
                            .socials
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.url.as_str()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.label.as_str()
                                        class="glass p-4 rounded-full hover:glow-primary transition-all duration-300"
                                    >
                                        <i class=format!("ph-light {} text-2xl", link.icon)></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FocusInput(
    input: NodeRef<html::Input>,
    focus: Interaction,
    kind: &'static str,
    field: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            node_ref=input
            type=kind
            name=field
            required=true
            placeholder=placeholder
            class="w-full px-4 py-3 rounded-lg glass bg-transparent border border-white/10 focus:border-primary focus:outline-none transition-colors"
            on:focus=move |_| focus.enter()
            on:blur=move |_| focus.leave()
        />
    }
}
