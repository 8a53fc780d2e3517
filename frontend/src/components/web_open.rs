use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::arrow_button::ArrowButton;
use crate::config;
use crate::context::use_web_open;
use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum IntroStage {
    Waiting,
    Exiting,
    Gone,
}

#[derive(Properties, PartialEq)]
pub struct WebOpenAnimationProps {
    /// Deep links go straight to the content.
    #[prop_or_default]
    pub skip: bool,
}

/// Full-screen intro with the "Open Website" button. Clicking it releases the
/// header and hero, then the two slices part and the overlay goes away.
#[function_component(WebOpenAnimation)]
pub fn web_open_animation(props: &WebOpenAnimationProps) -> Html {
    let (already_open, open_website) = use_web_open();
    let stage = use_state_eq(|| {
        if props.skip || already_open {
            IntroStage::Gone
        } else {
            IntroStage::Waiting
        }
    });
    let button_visible = use_state_eq(|| false);
    let is_narrow = use_state(dom::is_narrow_viewport);
    let exit_timer = use_mut_ref(|| None::<Timeout>);

    {
        let button_visible = button_visible.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::INTRO_BUTTON_REVEAL_MS, move || {
                    button_visible.set(true)
                });
                move || drop(timeout)
            },
            (),
        );
    }

    {
        let open_website = open_website.clone();
        use_effect_with_deps(
            move |skip| {
                if *skip {
                    open_website.emit(());
                }
                || ()
            },
            props.skip,
        );
    }

    let on_enter = {
        let stage = stage.clone();
        Callback::from(move |_: MouseEvent| {
            if *stage != IntroStage::Waiting {
                return;
            }
            open_website.emit(());
            stage.set(IntroStage::Exiting);
            let stage = stage.clone();
            *exit_timer.borrow_mut() = Some(Timeout::new(config::INTRO_EXIT_MS, move || {
                stage.set(IntroStage::Gone)
            }));
        })
    };

    if *stage == IntroStage::Gone {
        return html! {};
    }

    let exiting = *stage == IntroStage::Exiting;

    html! {
        <div class={classes!("web-open", exiting.then_some("exiting"))}>
            <div class="web-open-dim" />
            <div class="web-open-slice top" />
            <div class="web-open-slice bottom" />
            <div class="web-open-cta">
                <ArrowButton
                    label="Open Website"
                    expanded={*button_visible}
                    disable_hover={*is_narrow}
                    height_px={52}
                    onclick={on_enter}
                />
            </div>
        </div>
    }
}
