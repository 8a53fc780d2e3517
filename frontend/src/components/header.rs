use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::about_popup::AboutPopup;
use crate::components::arrow_button::ArrowButton;
use crate::components::contact_popup::ContactPopup;
use crate::config;
use crate::context::use_web_open;
use crate::dom;
use crate::Route;

pub const CURTAIN_PANELS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Section(&'static str),
    About,
    Contact,
}

pub const NAV_LINKS: &[(&str, NavAction)] = &[
    ("HOME", NavAction::Section("home")),
    ("OUR WORK", NavAction::Section("work")),
    ("OUR SERVICES", NavAction::Section("services")),
    ("ABOUT", NavAction::About),
    ("CONTACT US", NavAction::Contact),
];

/// Curtain panels drop in left to right and lift out right to left.
pub fn curtain_panel_delay_ms(index: usize, open: bool) -> u32 {
    if open {
        index as u32 * 50
    } else {
        (CURTAIN_PANELS - 1 - index) as u32 * 30
    }
}

/// Menu links rise in after the curtain; on close the last link leaves first.
pub fn menu_link_delay_ms(index: usize, count: usize, open: bool) -> u32 {
    if open {
        400 + index as u32 * 80
    } else {
        (count - index) as u32 * 40
    }
}

fn menu_item_style(index: usize, open: bool) -> String {
    format!(
        "transform: translateY({}); opacity: {}; transition-duration: 1500ms; transition-delay: {}ms; transition-property: transform, opacity;",
        if open { "0" } else { "120%" },
        if open { 1 } else { 0 },
        menu_link_delay_ms(index, NAV_LINKS.len(), open),
    )
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let (is_web_open, _) = use_web_open();
    let is_menu_open = use_state_eq(|| false);
    let curtain_active = use_state_eq(|| false);
    let is_about_open = use_state_eq(|| false);
    let is_contact_open = use_state_eq(|| false);
    let location = use_location();

    // Close the menu whenever the route changes.
    {
        let is_menu_open = is_menu_open.clone();
        let path = location.map(|l| l.path().to_string());
        use_effect_with_deps(
            move |_| {
                is_menu_open.set(false);
                || ()
            },
            path,
        );
    }

    // Lock page scroll under the menu and keep the curtain interactive while it
    // animates away.
    {
        let curtain_active = curtain_active.clone();
        use_effect_with_deps(
            move |open| {
                let hold = (*open).then(dom::lock_body_scroll);
                let tail = if *open {
                    curtain_active.set(true);
                    None
                } else {
                    Some(Timeout::new(config::MENU_CURTAIN_TAIL_MS, move || {
                        curtain_active.set(false)
                    }))
                };
                move || {
                    drop(tail);
                    drop(hold);
                }
            },
            *is_menu_open,
        );
    }

    let toggle_menu = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("menu toggled: {}", !*is_menu_open);
            is_menu_open.set(!*is_menu_open);
        })
    };

    let open_contact = {
        let is_contact_open = is_contact_open.clone();
        Callback::from(move |_: MouseEvent| {
            info!("opening contact popup from header");
            is_contact_open.set(true);
        })
    };

    let on_logo = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            is_menu_open.set(false);
            dom::scroll_to_top();
        })
    };

    let nav_click = |action: NavAction| {
        let is_menu_open = is_menu_open.clone();
        let is_about_open = is_about_open.clone();
        let is_contact_open = is_contact_open.clone();
        Callback::from(move |_: MouseEvent| {
            is_menu_open.set(false);
            match action {
                NavAction::Section(id) => dom::scroll_to_section(id),
                NavAction::About => is_about_open.set(true),
                NavAction::Contact => is_contact_open.set(true),
            }
        })
    };

    let open = *is_menu_open;
    let header_style = if is_web_open {
        "transform: translateY(0);"
    } else {
        "transform: translateY(-100%);"
    };

    html! {
        <>
            <header class="site-header" style={header_style}>
                <div class="header-bar">
                    <div onclick={on_logo}>
                        <Link<Route> to={Route::Home} classes="header-logo">
                            {"LOZINR"}
                        </Link<Route>>
                    </div>
                    <div class="header-actions">
                        <ArrowButton
                            label="Schedule a Call"
                            expanded={is_web_open}
                            onclick={open_contact}
                        />
                        <button
                            class={classes!("hamburger", open.then_some("open"))}
                            onclick={toggle_menu}
                            aria-label={if open { "Close menu" } else { "Open menu" }}
                            aria-expanded={open.to_string()}
                        >
                            <span class="line top"></span>
                            <span class="line middle"></span>
                            <span class="line bottom"></span>
                        </button>
                    </div>
                </div>
            </header>

            <div class={classes!("menu-curtain", (open || *curtain_active).then_some("interactive"))}>
                <div class="curtain-panels">
                    {
                        for (0..CURTAIN_PANELS).map(|i| html! {
                            <div
                                class={classes!("curtain-panel", open.then_some("down"))}
                                style={format!("transition-delay: {}ms;", curtain_panel_delay_ms(i, open))}
                            />
                        })
                    }
                </div>
                <div class="menu-content">
                    <nav class="menu-nav">
                        <ul>
                            {
                                for NAV_LINKS.iter().enumerate().map(|(index, (label, action))| html! {
                                    <li>
                                        <button
                                            class="menu-link"
                                            style={menu_item_style(index, open)}
                                            onclick={nav_click(*action)}
                                        >
                                            { *label }
                                        </button>
                                    </li>
                                })
                            }
                        </ul>
                    </nav>
                    <div
                        class="menu-socials"
                        style={format!(
                            "transform: translateY({}); opacity: {}; transition-delay: {}ms;",
                            if open { "0" } else { "100%" },
                            if open { 1 } else { 0 },
                            if open { 1500 } else { 0 },
                        )}
                    >
                        {
                            for config::SOCIAL_LINKS.iter().map(|(name, href)| html! {
                                <a href={*href} target="_blank" rel="noopener noreferrer">
                                    { *name }
                                    <span class="social-arrow">{"→"}</span>
                                </a>
                            })
                        }
                    </div>
                </div>
            </div>

            <div class={classes!("header-spacer", is_web_open.then_some("visible"))} />

            <AboutPopup
                is_open={*is_about_open}
                on_close={{
                    let is_about_open = is_about_open.clone();
                    Callback::from(move |_: ()| is_about_open.set(false))
                }}
            />
            <ContactPopup
                is_open={*is_contact_open}
                on_close={{
                    let is_contact_open = is_contact_open.clone();
                    Callback::from(move |_: ()| is_contact_open.set(false))
                }}
            />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curtain_opens_left_to_right() {
        let delays: Vec<u32> = (0..CURTAIN_PANELS).map(|i| curtain_panel_delay_ms(i, true)).collect();
        assert_eq!(delays, vec![0, 50, 100, 150, 200]);
    }

    #[test]
    fn curtain_closes_right_to_left() {
        let delays: Vec<u32> = (0..CURTAIN_PANELS).map(|i| curtain_panel_delay_ms(i, false)).collect();
        assert_eq!(delays, vec![120, 90, 60, 30, 0]);
    }

    #[test]
    fn links_follow_the_curtain() {
        assert_eq!(menu_link_delay_ms(0, 5, true), 400);
        assert_eq!(menu_link_delay_ms(4, 5, true), 720);
        assert_eq!(menu_link_delay_ms(0, 5, false), 200);
        assert_eq!(menu_link_delay_ms(4, 5, false), 40);
    }

    #[test]
    fn nav_targets_existing_sections() {
        let sections: Vec<&str> = NAV_LINKS
            .iter()
            .filter_map(|(_, action)| match action {
                NavAction::Section(id) => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(sections, vec!["home", "work", "services"]);
    }
}
