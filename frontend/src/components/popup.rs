use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;

/// Lifecycle of a popup: open, playing its close animation, or gone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupPhase {
    Hidden,
    Open,
    Closing,
}

impl PopupPhase {
    pub fn from_flags(is_open: bool, is_closing: bool) -> Self {
        match (is_open, is_closing) {
            (_, true) => PopupPhase::Closing,
            (true, false) => PopupPhase::Open,
            (false, false) => PopupPhase::Hidden,
        }
    }

    pub fn renders(self) -> bool {
        self != PopupPhase::Hidden
    }
}

/// Plays the close animation before handing control back to the owner.
///
/// Returns whether the close animation is running and a callback that starts
/// it. `on_close` fires once the animation has finished.
#[hook]
pub fn use_animated_close(on_close: Callback<()>) -> (bool, Callback<()>) {
    let is_closing = use_state_eq(|| false);
    let close_timer = use_mut_ref(|| None::<Timeout>);

    let request_close = {
        let is_closing = is_closing.clone();
        Callback::from(move |_: ()| {
            if *is_closing {
                return;
            }
            debug!("closing popup");
            is_closing.set(true);
            let is_closing = is_closing.clone();
            let on_close = on_close.clone();
            *close_timer.borrow_mut() = Some(Timeout::new(config::POPUP_CLOSE_MS, move || {
                is_closing.set(false);
                on_close.emit(());
            }));
        })
    };

    (*is_closing, request_close)
}

#[derive(Properties, PartialEq)]
pub struct PopupShellProps {
    pub is_open: bool,
    pub is_closing: bool,
    pub on_request_close: Callback<()>,
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Backdrop + card shared by the about, pricing and contact popups.
///
/// Clicking the backdrop or the close button asks the owner to close. Clicks
/// inside the card do not reach the backdrop.
#[function_component(PopupShell)]
pub fn popup_shell(props: &PopupShellProps) -> Html {
    let phase = PopupPhase::from_flags(props.is_open, props.is_closing);
    if !phase.renders() {
        return html! {};
    }

    let on_backdrop = {
        let request_close = props.on_request_close.clone();
        Callback::from(move |_: MouseEvent| request_close.emit(()))
    };
    let on_card = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_button = {
        let request_close = props.on_request_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            request_close.emit(());
        })
    };

    let closing = phase == PopupPhase::Closing;

    html! {
        <div class={classes!("popup-backdrop", closing.then_some("closing"))} onclick={on_backdrop}>
            <div class={classes!("popup-card", props.class.clone(), closing.then_some("closing"))} onclick={on_card}>
                <button class="popup-close" aria-label="Close" onclick={on_close_button}>
                    {"✕"}
                </button>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_popup_does_not_render() {
        assert_eq!(PopupPhase::from_flags(false, false), PopupPhase::Hidden);
        assert!(!PopupPhase::Hidden.renders());
    }

    #[test]
    fn open_popup_renders() {
        assert_eq!(PopupPhase::from_flags(true, false), PopupPhase::Open);
        assert!(PopupPhase::Open.renders());
    }

    #[test]
    fn closing_popup_keeps_rendering_until_animation_ends() {
        assert_eq!(PopupPhase::from_flags(true, true), PopupPhase::Closing);
        assert_eq!(PopupPhase::from_flags(false, true), PopupPhase::Closing);
        assert!(PopupPhase::Closing.renders());
    }
}
