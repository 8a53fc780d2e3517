use yew::prelude::*;

use crate::viewport::{use_in_view, ViewportOptions};

const EASE_OUT_QUAD: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";
const EASE_SOFT: &str = "cubic-bezier(0.33, 0.66, 0.66, 1)";

/// The entrance styles used across the page sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    FadeIn,
    SlideUp,
    ScaleIn,
    Strategy,
    Clarity,
    Services,
    Process,
    Heading,
    ContentBlock,
    Bloom,
    ScaleImage,
}

impl Reveal {
    pub fn viewport(self) -> ViewportOptions {
        match self {
            Reveal::FadeIn | Reveal::SlideUp | Reveal::ScaleIn | Reveal::Services => {
                ViewportOptions::default()
            }
            Reveal::Strategy => ViewportOptions::new(0.15, "0px 0px -100px 0px"),
            Reveal::Clarity => ViewportOptions::new(0.2, "0px 0px -80px 0px"),
            Reveal::Process => ViewportOptions::new(0.2, "0px 0px -100px 0px"),
            Reveal::Heading | Reveal::ScaleImage => ViewportOptions::threshold(0.2),
            Reveal::ContentBlock => ViewportOptions::threshold(0.15),
            Reveal::Bloom => ViewportOptions::threshold(0.3),
        }
    }

    pub fn hidden_style(self) -> &'static str {
        match self {
            Reveal::FadeIn | Reveal::Strategy | Reveal::Services => "opacity: 0;",
            Reveal::SlideUp => "opacity: 0; transform: translateY(40px);",
            Reveal::ScaleIn => "opacity: 0; transform: scale(0.95);",
            Reveal::Clarity => "opacity: 0; transform: translateY(30px);",
            Reveal::Process => "opacity: 0; transform: translateX(-40px);",
            Reveal::Heading => "opacity: 0; transform: translateY(20px);",
            Reveal::ContentBlock => "opacity: 0; backdrop-filter: blur(10px);",
            Reveal::Bloom => "opacity: 0; filter: blur(20px); transform: scale(1.1);",
            Reveal::ScaleImage => "opacity: 0; transform: scale(0.9);",
        }
    }

    pub fn visible_style(self) -> &'static str {
        match self {
            Reveal::ContentBlock => "opacity: 1; backdrop-filter: blur(0px);",
            Reveal::Bloom => "opacity: 1; filter: blur(0px); transform: none;",
            _ => "opacity: 1; transform: none;",
        }
    }

    /// Duration in ms and easing for the transition.
    pub fn timing(self) -> (u32, &'static str) {
        match self {
            Reveal::FadeIn | Reveal::SlideUp | Reveal::ScaleIn => (600, EASE_SOFT),
            Reveal::Strategy => (800, "ease-out"),
            Reveal::Clarity => (900, EASE_OUT_QUAD),
            Reveal::Services => (600, EASE_OUT_QUAD),
            Reveal::Process => (700, EASE_OUT_QUAD),
            Reveal::Heading => (800, EASE_SOFT),
            Reveal::ContentBlock | Reveal::Bloom => (1000, "ease-out"),
            Reveal::ScaleImage => (800, EASE_OUT_QUAD),
        }
    }

    pub fn default_delay_ms(self) -> u32 {
        match self {
            Reveal::Clarity => 100,
            _ => 0,
        }
    }
}

/// Delay for the `index`-th item of a staggered group.
pub fn stagger_delay_ms(index: usize, step_ms: u32, base_ms: u32) -> u32 {
    base_ms + step_ms * index as u32
}

/// Inline style for a revealed/hidden element. The delay only applies on the
/// way in so a hidden element never waits before hiding.
pub fn reveal_style(reveal: Reveal, visible: bool, delay_ms: u32) -> String {
    let (duration, easing) = reveal.timing();
    let (state, delay) = if visible {
        (reveal.visible_style(), delay_ms)
    } else {
        (reveal.hidden_style(), 0)
    };
    format!(
        "{} transition: all {}ms {}; transition-delay: {}ms;",
        state, duration, easing, delay
    )
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(Reveal::FadeIn)]
    pub variant: Reveal,
    #[prop_or_default]
    pub delay_ms: Option<u32>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Wraps children in a block that animates in the first time it is scrolled
/// into view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), props.variant.viewport());
    let delay = props.delay_ms.unwrap_or_else(|| props.variant.default_delay_ms());

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!(props.class.clone(), visible.then_some("in-view"))}
            style={reveal_style(props.variant, visible, delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggerGroupProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(150)]
    pub step_ms: u32,
}

/// Grid cascade: the group is observed once and every child card follows with
/// its own delay.
#[function_component(StaggerGroup)]
pub fn stagger_group(props: &StaggerGroupProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), Reveal::Services.viewport());

    html! {
        <div ref={node} class={props.class.clone()}>
            {
                for props.children.iter().enumerate().map(|(index, child)| html! {
                    <div
                        class="stagger-item"
                        style={reveal_style(
                            Reveal::SlideUp,
                            visible,
                            stagger_delay_ms(index, props.step_ms, 0),
                        )}
                    >
                        { child }
                    </div>
                })
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_style_ignores_delay() {
        let style = reveal_style(Reveal::Heading, false, 300);
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("transition-delay: 0ms"));
    }

    #[test]
    fn visible_style_carries_delay() {
        let style = reveal_style(Reveal::Process, true, 240);
        assert!(style.contains("opacity: 1"));
        assert!(style.contains("transition: all 700ms"));
        assert!(style.contains("transition-delay: 240ms"));
    }

    #[test]
    fn stagger_is_linear_in_index() {
        assert_eq!(stagger_delay_ms(0, 100, 0), 0);
        assert_eq!(stagger_delay_ms(3, 100, 0), 300);
        assert_eq!(stagger_delay_ms(2, 120, 200), 440);
    }

    #[test]
    fn presets_use_their_own_thresholds() {
        assert_eq!(Reveal::Strategy.viewport().threshold, 0.15);
        assert_eq!(Reveal::Clarity.viewport().root_margin, "0px 0px -80px 0px");
        assert_eq!(Reveal::Bloom.viewport().threshold, 0.3);
        assert_eq!(Reveal::Clarity.default_delay_ms(), 100);
    }
}
