use chrono::Datelike;
use yew::prelude::*;

use crate::animations::{reveal_style, stagger_delay_ms, Reveal};
use crate::components::arrow_button::ArrowButton;
use crate::config;
use crate::contact::view::ContactFormView;
use crate::viewport::{use_in_view, ViewportOptions};

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::SITE_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let ctas = use_node_ref();
    let ctas_visible = use_in_view(ctas.clone(), ViewportOptions::threshold(0.3));
    let year = chrono::Local::now().year();
    let mailto = format!("mailto:{}", config::CONTACT_EMAIL);

    html! {
        <footer id="contact" class="site-footer">
            <div class="footer-grid">
                <div class="footer-chat">
                    <h2>{"Schedule a chat"}</h2>
                    <p>
                        {"Ready to bring your vision to life? Let's talk about your project and how we can \
                          help you create something extraordinary."}
                    </p>
                    <div ref={ctas} class="footer-ctas">
                        <div style={reveal_style(Reveal::SlideUp, ctas_visible, stagger_delay_ms(0, 150, 0))}>
                            <ArrowButton
                                label="Call Now"
                                href={AttrValue::from(config::CALL_LINK)}
                                height_px={52}
                            />
                        </div>
                        <div style={reveal_style(Reveal::SlideUp, ctas_visible, stagger_delay_ms(1, 150, 0))}>
                            <ArrowButton
                                label={config::CONTACT_EMAIL}
                                href={AttrValue::from(mailto)}
                                height_px={52}
                            />
                        </div>
                    </div>
                </div>

                <div class="footer-form">
                    <ContactFormView submit_label="Submit Message">
                        <h3>{"Send us a message"}</h3>
                    </ContactFormView>
                </div>
            </div>

            <div class="footer-bottom">
                <ul class="social-links">
                    {
                        for config::SOCIAL_LINKS.iter().map(|(name, url)| html! {
                            <li>
                                <a href={*url} target="_blank" rel="noopener noreferrer">{ *name }</a>
                            </li>
                        })
                    }
                </ul>
                <p class="copyright">{ copyright_line(year) }</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_studio_and_year() {
        assert_eq!(copyright_line(2026), "© 2026 Lozinr. All rights reserved.");
    }
}
