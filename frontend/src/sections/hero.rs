use yew::prelude::*;
use web_sys::MouseEvent;
use yew_hooks::{use_event_with_window, use_window_scroll};

use crate::animations::{reveal_style, stagger_delay_ms, Reveal};
use crate::context::{use_animation_ready, use_web_open};
use crate::viewport::{use_in_view, ViewportOptions};

const SECOND_LINE: [&str; 3] = ["built", "with", "intention."];

/// Linear map of `value` from `[from_start, from_end]` onto
/// `[to_start, to_end]`, clamped at both ends.
fn interpolate(value: f64, (from_start, from_end): (f64, f64), (to_start, to_end): (f64, f64)) -> f64 {
    let progress = ((value - from_start) / (from_end - from_start)).clamp(0.0, 1.0);
    to_start + (to_end - to_start) * progress
}

/// Scroll-linked drift of the hero: background offset in px and headline opacity.
pub fn parallax(scroll_y: f64) -> (f64, f64) {
    let offset = interpolate(scroll_y, (0.0, 500.0), (0.0, 150.0));
    let opacity = interpolate(scroll_y, (0.0, 300.0), (1.0, 0.0));
    (offset, opacity)
}

/// Offset of the floating accent for a pointer at (`x`, `y`) in client px.
pub fn pointer_drift(x: f64, y: f64) -> (f64, f64) {
    (x * 0.02, y * 0.02)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let (is_web_open, _) = use_web_open();
    let is_ready = use_animation_ready();
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), ViewportOptions::threshold(0.1));
    let (_, scroll_y) = use_window_scroll();
    let (offset, opacity) = parallax(scroll_y);

    let pointer = use_state_eq(|| (0.0_f64, 0.0_f64));
    {
        let pointer = pointer.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            pointer.set((f64::from(e.client_x()), f64::from(e.client_y())));
        });
    }
    let (drift_x, drift_y) = pointer_drift(pointer.0, pointer.1);

    let words_visible = in_view && is_web_open;

    html! {
        <section ref={node} class="hero">
            <div class="hero-glow" style={format!("transform: translateY({:.1}px);", offset)} />
            <div
                class={classes!("hero-accent", is_web_open.then_some("risen"))}
                style="transition-delay: 800ms;"
            />
            <div
                class={classes!("hero-orb", in_view.then_some("floating"))}
                style={format!("translate: {:.1}px {:.1}px;", drift_x, drift_y)}
            />
            <div class="hero-headline" style={format!("opacity: {:.3};", opacity)}>
                <h1>
                    <span class="hero-line">
                        <span
                            class="hero-word floating-text"
                            style={reveal_style(Reveal::SlideUp, words_visible, 100)}
                        >
                            {"Brands,"}
                        </span>
                    </span>
                    <span class="hero-line">
                        {
                            for SECOND_LINE.iter().enumerate().map(|(idx, word)| html! {
                                <span
                                    class="hero-word"
                                    style={reveal_style(Reveal::SlideUp, words_visible, stagger_delay_ms(idx, 120, 200))}
                                >
                                    { *word }
                                </span>
                            })
                        }
                    </span>
                </h1>
            </div>
            <div class="hero-tagline">
                <div></div>
                <p>{"We create premium brands that command attention."}</p>
            </div>
            <div
                class="scroll-indicator"
                aria-hidden="true"
                style={reveal_style(Reveal::FadeIn, is_ready && is_web_open, 1200)}
            >
                {"↓"}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_starts_at_rest() {
        assert_eq!(parallax(0.0), (0.0, 1.0));
    }

    #[test]
    fn parallax_midway() {
        let (offset, opacity) = parallax(150.0);
        assert!((offset - 45.0).abs() < 1e-9);
        assert!((opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn accent_follows_the_pointer_at_a_fiftieth() {
        assert_eq!(pointer_drift(0.0, 0.0), (0.0, 0.0));
        let (x, y) = pointer_drift(500.0, 250.0);
        assert!((x - 10.0).abs() < 1e-9);
        assert!((y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn parallax_clamps_past_the_range() {
        assert_eq!(parallax(2_000.0), (150.0, 0.0));
        assert_eq!(parallax(-50.0), (0.0, 1.0));
    }
}
