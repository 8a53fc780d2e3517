use yew::prelude::*;

use crate::components::popup::{use_animated_close, PopupShell};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct AboutPopupProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(AboutPopup)]
pub fn about_popup(props: &AboutPopupProps) -> Html {
    let (is_closing, request_close) = use_animated_close(props.on_close.clone());

    html! {
        <PopupShell
            is_open={props.is_open}
            {is_closing}
            on_request_close={request_close}
            class="about-popup"
        >
            <div class="about-content">
                <div class="about-founder">
                    <img
                        class="about-avatar"
                        src="https://simontype.com/wp-content/uploads/2026/02/file_00000000710471f89d96dee985fc497f.png"
                        alt="Profile"
                    />
                    <div>
                        <h3>{"Adnan Akif"}</h3>
                        <p>{"Creative Director"}</p>
                    </div>
                </div>
                <p>
                    {"I'm Adnan Akif, a brand identity designer and founder of Lozinr. I help founders and growing businesses build distinctive, strategy-led brands that communicate clearly and stand apart in crowded markets."}
                </p>
                <p>
                    {"My work focuses on brand identity systems, visual language, and structured design thinking. Not just how a brand looks, but how it behaves and scales. Every project is built with intention, consistency, and long-term usability in mind."}
                </p>
                <p>
                    {"I believe strong brands are not decoration. They are decisions made visible."}
                </p>
                <div class="about-socials">
                    {
                        for config::SOCIAL_LINKS.iter().map(|(name, href)| html! {
                            <a href={*href} target="_blank" rel="noopener noreferrer" aria-label={*name}>
                                { *name }
                            </a>
                        })
                    }
                </div>
            </div>
        </PopupShell>
    }
}
