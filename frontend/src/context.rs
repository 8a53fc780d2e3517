use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use yew::prelude::*;

use crate::config;

/// Sequencing state for the intro overlay and everything that waits on it.
/// Both flags only ever move from `false` to `true`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationState {
    pub is_animation_ready: bool,
    pub is_web_open_animating: bool,
}

pub enum AnimationAction {
    Ready,
    OpenWebsite,
}

impl Reducible for AnimationState {
    type Action = AnimationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            AnimationAction::Ready if !self.is_animation_ready => AnimationState {
                is_animation_ready: true,
                ..(*self).clone()
            },
            AnimationAction::OpenWebsite if !self.is_web_open_animating => AnimationState {
                is_web_open_animating: true,
                ..(*self).clone()
            },
            _ => return self,
        };
        Rc::new(next)
    }
}

pub type AnimationContext = UseReducerHandle<AnimationState>;

#[derive(Properties, PartialEq)]
pub struct AnimationProviderProps {
    #[prop_or(config::ANIMATION_READY_DELAY_MS)]
    pub delay_start_ms: u32,
    pub children: Children,
}

#[function_component(AnimationProvider)]
pub fn animation_provider(props: &AnimationProviderProps) -> Html {
    let state = use_reducer(AnimationState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |delay| {
                let timeout = Timeout::new(*delay, move || {
                    debug!("section animations ready");
                    state.dispatch(AnimationAction::Ready);
                });
                move || drop(timeout)
            },
            props.delay_start_ms,
        );
    }

    html! {
        <ContextProvider<AnimationContext> context={state}>
            { for props.children.iter() }
        </ContextProvider<AnimationContext>>
    }
}

/// Whether the visitor has clicked through the intro overlay, plus a callback
/// that does it.
#[hook]
pub fn use_web_open() -> (bool, Callback<()>) {
    let context = use_context::<AnimationContext>();
    let is_open = context
        .as_ref()
        .map(|state| state.is_web_open_animating)
        .unwrap_or(true);
    let open = Callback::from(move |_: ()| {
        if let Some(state) = context.as_ref() {
            info!("opening website");
            state.dispatch(AnimationAction::OpenWebsite);
        }
    });
    (is_open, open)
}

#[hook]
pub fn use_animation_ready() -> bool {
    use_context::<AnimationContext>()
        .map(|state| state.is_animation_ready)
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: AnimationState, action: AnimationAction) -> AnimationState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn open_website_sets_flag() {
        let state = reduce(AnimationState::default(), AnimationAction::OpenWebsite);
        assert!(state.is_web_open_animating);
        assert!(!state.is_animation_ready);
    }

    #[test]
    fn flags_never_revert() {
        let state = reduce(AnimationState::default(), AnimationAction::Ready);
        let state = reduce(state, AnimationAction::OpenWebsite);
        let state = reduce(state, AnimationAction::Ready);
        let state = reduce(state, AnimationAction::OpenWebsite);
        assert!(state.is_animation_ready);
        assert!(state.is_web_open_animating);
    }

    #[test]
    fn repeated_action_returns_same_state() {
        let first = Rc::new(AnimationState::default()).reduce(AnimationAction::Ready);
        let second = first.clone().reduce(AnimationAction::Ready);
        assert!(Rc::ptr_eq(&first, &second));
    }
}
