use stylist::yew::styled_component;
use web_sys::MouseEvent;
use yew::prelude::*;

/// Where the two arrows sit for a given hover state. The primary arrow slides
/// out to the right while a second one slides in from the left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowSwap {
    pub primary_x: i32,
    pub primary_opacity: f32,
    pub secondary_x: i32,
    pub secondary_opacity: f32,
}

pub fn arrow_swap(hovering: bool, travel_px: i32) -> ArrowSwap {
    if hovering {
        ArrowSwap {
            primary_x: travel_px,
            primary_opacity: 0.0,
            secondary_x: 0,
            secondary_opacity: 1.0,
        }
    } else {
        ArrowSwap {
            primary_x: 0,
            primary_opacity: 1.0,
            secondary_x: -travel_px,
            secondary_opacity: 0.0,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ArrowButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    /// Renders an anchor instead of a button.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    /// Collapsed pills show only the arrow circle.
    #[prop_or(true)]
    pub expanded: bool,
    #[prop_or_default]
    pub disable_hover: bool,
    #[prop_or(44)]
    pub height_px: u32,
    #[prop_or(40)]
    pub travel_px: i32,
    #[prop_or_default]
    pub class: Classes,
}

/// Pill-shaped call to action with the sliding arrow micro-interaction.
#[styled_component(ArrowButton)]
pub fn arrow_button(props: &ArrowButtonProps) -> Html {
    let hovering = use_state_eq(|| false);
    let swap = arrow_swap(*hovering && !props.disable_hover, props.travel_px);

    let label_opacity = if props.expanded { 1 } else { 0 };
    let label_width = if props.expanded { "auto" } else { "0" };
    let style = css!(
        r#"
        height: ${height}px;
        display: inline-flex;
        align-items: center;
        justify-content: space-between;
        gap: 0.75rem;
        padding: 0 6px 0 ${pad_left}px;
        border: none;
        border-left: 2px solid #fff;
        border-right: 2px solid #fff;
        border-radius: 9999px;
        background: transparent;
        color: #fff;
        font-weight: 500;
        font-size: 14px;
        text-decoration: none;
        cursor: pointer;
        overflow: hidden;
        transition: background 0.3s ease, padding 1.3s cubic-bezier(0.33, 0.66, 0.66, 1);

        &:hover {
            background: rgba(255, 255, 255, 0.05);
        }

        .arrow-label {
            white-space: nowrap;
            opacity: ${label_opacity};
            max-width: ${label_width};
            transition: opacity 1.2s cubic-bezier(0.33, 0.66, 0.66, 1);
        }

        .arrow-circle {
            position: relative;
            flex-shrink: 0;
            width: 36px;
            height: 36px;
            border-radius: 9999px;
            background: #fff;
            color: #000;
            overflow: hidden;
        }

        .arrow-circle span {
            position: absolute;
            inset: 0;
            display: flex;
            align-items: center;
            justify-content: center;
            transition: transform 0.5s cubic-bezier(0.25, 0.46, 0.45, 0.94), opacity 0.5s cubic-bezier(0.25, 0.46, 0.45, 0.94);
        }

        .arrow-primary {
            transform: translateX(${px}px);
            opacity: ${po};
        }

        .arrow-secondary {
            transform: translateX(${sx}px);
            opacity: ${so};
        }
        "#,
        height = props.height_px,
        pad_left = if props.expanded { 16 } else { 6 },
        label_opacity = label_opacity,
        label_width = label_width,
        px = swap.primary_x,
        po = swap.primary_opacity,
        sx = swap.secondary_x,
        so = swap.secondary_opacity,
    );

    let onmouseenter = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(true))
    };
    let onmouseleave = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(false))
    };
    let onclick = props.onclick.clone().unwrap_or_else(|| Callback::from(|_: MouseEvent| ()));

    let inner = html! {
        <>
            <span class="arrow-label">{ &props.label }</span>
            <div class="arrow-circle">
                <span class="arrow-primary">{"→"}</span>
                <span class="arrow-secondary">{"→"}</span>
            </div>
        </>
    };

    match &props.href {
        Some(href) => html! {
            <a
                href={href.clone()}
                target="_blank"
                rel="noopener noreferrer"
                class={classes!(style, props.class.clone())}
                {onmouseenter}
                {onmouseleave}
                {onclick}
            >
                { inner }
            </a>
        },
        None => html! {
            <button
                type="button"
                class={classes!(style, props.class.clone())}
                {onmouseenter}
                {onmouseleave}
                {onclick}
            >
                { inner }
            </button>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_state_shows_primary_arrow() {
        let swap = arrow_swap(false, 40);
        assert_eq!(swap.primary_x, 0);
        assert_eq!(swap.primary_opacity, 1.0);
        assert_eq!(swap.secondary_x, -40);
        assert_eq!(swap.secondary_opacity, 0.0);
    }

    #[test]
    fn hover_swaps_arrows() {
        let swap = arrow_swap(true, 30);
        assert_eq!(swap.primary_x, 30);
        assert_eq!(swap.primary_opacity, 0.0);
        assert_eq!(swap.secondary_x, 0);
        assert_eq!(swap.secondary_opacity, 1.0);
    }
}
