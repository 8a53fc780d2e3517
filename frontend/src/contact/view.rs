use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::form::{Field, Service};
use crate::contact::state::{ContactFormAction, ContactFormState};
use crate::contact::submit::{submit_contact, SubmitError};
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct ContactFormViewProps {
    #[prop_or(AttrValue::from("Send Message"))]
    pub submit_label: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// The contact form used in the contact popup and in the footer.
#[function_component(ContactFormView)]
pub fn contact_form_view(props: &ContactFormViewProps) -> Html {
    let state = use_reducer(ContactFormState::default);

    // The success banner hides itself.
    {
        let shown = state.show_success;
        let state = state.clone();
        use_effect_with_deps(
            move |shown| {
                let timeout = shown.then(|| {
                    Timeout::new(config::SUCCESS_BANNER_MS, move || {
                        state.dispatch(ContactFormAction::HideBanner)
                    })
                });
                move || drop(timeout)
            },
            shown,
        );
    }

    let text_input = |field: Field| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(ContactFormAction::Set(field, input.value()));
        })
    };

    let on_message = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            state.dispatch(ContactFormAction::Set(Field::Message, input.value()));
        })
    };

    let toggle_service = |service: Service| {
        let state = state.clone();
        Callback::from(move |_: Event| state.dispatch(ContactFormAction::ToggleService(service)))
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.sending {
                return;
            }
            if let Err(err) = state.form.validate() {
                dom::alert(&err.to_string());
                return;
            }

            info!("submitting contact form");
            let snapshot = state.form.clone();
            let state = state.clone();
            state.dispatch(ContactFormAction::Submit);
            spawn_local(async move {
                match submit_contact(&snapshot).await {
                    Ok(()) => state.dispatch(ContactFormAction::Succeeded),
                    Err(err) => {
                        match &err {
                            SubmitError::Network(e) => {
                                gloo_console::error!("Form submission error:", e.to_string())
                            }
                            SubmitError::Rejected { .. } => warn!("{}", err),
                        }
                        state.dispatch(ContactFormAction::Failed);
                    }
                }
            });
        })
    };

    let form = &state.form;
    let sending = state.sending;

    html! {
        <div class="contact-form">
            {
                if state.show_success {
                    html! {
                        <div class="success-banner" role="status">
                            {"Message sent successfully! We'll get back to you soon."}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <form {onsubmit}>
                { for props.children.iter() }
                <div class="form-row">
                    <input
                        type="text"
                        name="name"
                        placeholder="Name *"
                        required=true
                        value={form.name.clone()}
                        oninput={text_input(Field::Name)}
                    />
                    <input
                        type="email"
                        name="email"
                        placeholder="Email *"
                        required=true
                        value={form.email.clone()}
                        oninput={text_input(Field::Email)}
                    />
                </div>
                <div class="form-row">
                    <input
                        type="text"
                        name="location"
                        placeholder="Location"
                        value={form.location.clone()}
                        oninput={text_input(Field::Location)}
                    />
                    <input
                        type="text"
                        name="company"
                        placeholder="Company Name"
                        value={form.company.clone()}
                        oninput={text_input(Field::Company)}
                    />
                </div>
                <div class="form-services">
                    <p class="form-label">{"What do you want our help with? *"}</p>
                    {
                        for Service::ALL.iter().map(|service| html! {
                            <label class="form-checkbox">
                                <input
                                    type="checkbox"
                                    checked={form.services.is_selected(*service)}
                                    onchange={toggle_service(*service)}
                                />
                                <span>{ service.label() }</span>
                            </label>
                        })
                    }
                </div>
                <div>
                    <p class="form-label">{"Tell us about your project *"}</p>
                    <textarea
                        name="message"
                        placeholder="Your message..."
                        required=true
                        value={form.message.clone()}
                        oninput={on_message}
                    />
                </div>
                <button type="submit" class="form-submit" disabled={sending}>
                    { if sending { AttrValue::from("Sending...") } else { props.submit_label.clone() } }
                </button>
            </form>
        </div>
    }
}
