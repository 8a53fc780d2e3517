use yew::prelude::*;

use crate::components::popup::{use_animated_close, PopupShell};
use crate::contact::view::ContactFormView;

#[derive(Properties, PartialEq)]
pub struct ContactPopupProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ContactPopup)]
pub fn contact_popup(props: &ContactPopupProps) -> Html {
    let (is_closing, request_close) = use_animated_close(props.on_close.clone());

    html! {
        <PopupShell
            is_open={props.is_open}
            {is_closing}
            on_request_close={request_close}
            class="contact-popup"
        >
            <ContactFormView>
                <div class="contact-heading">
                    <h2>{"Contact Us"}</h2>
                    <p>{"Ready to bring your vision to life? Let's talk about your project."}</p>
                </div>
            </ContactFormView>
        </PopupShell>
    }
}
