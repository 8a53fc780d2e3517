use gloo_timers::callback::Timeout;
use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::popup::{use_animated_close, PopupShell};
use crate::config;

pub struct PackageSection {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub struct Package {
    pub price: &'static str,
    pub timeline: &'static str,
    pub sections: &'static [PackageSection],
    pub notes: &'static [&'static str],
}

const DISCOVERY: PackageSection = PackageSection { title: "BRAND DISCOVERY", items: &[] };
const GUIDELINES: PackageSection = PackageSection { title: "BRAND GUIDELINES", items: &[] };

pub const PACKAGES: &[Package] = &[
    Package {
        price: "US $15,000",
        timeline: "6 weeks",
        sections: &[
            DISCOVERY,
            PackageSection {
                title: "BRAND STRATEGY:",
                items: &[
                    "Brand Positioning",
                    "Brand Persona",
                    "Brand Story",
                    "Ideal Buyer Persona",
                    "Taglines (x3)",
                    "Competitive Analysis",
                    "Brand Voice & Tone",
                    "Look & Feel Moodboards (x3)",
                ],
            },
            PackageSection {
                title: "BRAND IDENTITY DESIGN:",
                items: &[
                    "Logo Designs (x3)",
                    "Brand Colors + Fonts",
                    "Brand Messaging",
                    "Website Header Mockup",
                    "Social Media Mockup",
                    "Marketing Collateral Mockups",
                    "Corporate Stationary Mockup",
                ],
            },
            GUIDELINES,
        ],
        notes: &[
            "All files are delivered in Adobe Illustrator (open file format).",
            "Logos in another language (eg. Arabic) will be charged an extra $2,500.",
        ],
    },
    Package {
        price: "US $25,000",
        timeline: "10 weeks",
        sections: &[
            DISCOVERY,
            PackageSection {
                title: "BRAND STRATEGY:",
                items: &[
                    "Brand Positioning",
                    "Brand Persona",
                    "Brand Story",
                    "Ideal Buyer Persona",
                    "Taglines (x3)",
                    "Competitive Analysis",
                    "Brand Voice & Tone",
                    "Look & Feel Moodboards",
                    "Brand Names (x9)",
                ],
            },
            PackageSection {
                title: "BRAND IDENTITY DESIGN:",
                items: &[
                    "Logo Designs x3",
                    "Packaging Design Mockups (Multiple SKUs & Formats)",
                    "Brand Colors + Fonts",
                    "Brand Messaging",
                    "Website Header Mockup",
                    "Social Media Mockup",
                    "Marketing Collateral Mockups",
                    "Corporate Stationary Mockups",
                ],
            },
            GUIDELINES,
        ],
        notes: &[],
    },
];

fn render_section(section: &PackageSection) -> Html {
    html! {
        <div class="package-section">
            <h4>{ section.title }</h4>
            {
                if section.items.is_empty() {
                    html! {}
                } else {
                    html! {
                        <ul>
                            { for section.items.iter().map(|item| html! { <li>{ *item }</li> }) }
                        </ul>
                    }
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingPopupProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub on_get_started: Option<Callback<()>>,
}

#[function_component(PricingPopup)]
pub fn pricing_popup(props: &PricingPopupProps) -> Html {
    let (is_closing, request_close) = use_animated_close(props.on_close.clone());
    let follow_up = use_mut_ref(|| None::<Timeout>);

    // Close first, then hand over once the close animation is done.
    let get_started = {
        let request_close = request_close.clone();
        let on_get_started = props.on_get_started.clone();
        Callback::from(move |_: MouseEvent| {
            info!("pricing: get started");
            request_close.emit(());
            if let Some(on_get_started) = on_get_started.clone() {
                *follow_up.borrow_mut() = Some(Timeout::new(config::POPUP_CLOSE_MS, move || {
                    on_get_started.emit(());
                }));
            }
        })
    };

    html! {
        <PopupShell
            is_open={props.is_open}
            {is_closing}
            on_request_close={request_close}
            class="pricing-popup"
        >
            <div class="pricing-content">
                <h2>{"Your investment for Brand Strategy & Identity Design"}</h2>
                <div class="pricing-grid">
                    {
                        for PACKAGES.iter().map(|package| html! {
                            <div class="package-card">
                                <div class="package-header">
                                    <h3>{ package.price }</h3>
                                    <p>{ format!("Timeline: {}", package.timeline) }</p>
                                </div>
                                <div class="package-details">
                                    { for package.sections.iter().map(render_section) }
                                </div>
                                {
                                    if package.notes.is_empty() {
                                        html! {}
                                    } else {
                                        html! {
                                            <div class="package-notes">
                                                <p>{"Note:"}</p>
                                                <ul>
                                                    { for package.notes.iter().map(|note| html! { <li>{ *note }</li> }) }
                                                </ul>
                                            </div>
                                        }
                                    }
                                }
                                <button class="package-cta" onclick={get_started.clone()}>
                                    {"Get Started"}
                                </button>
                            </div>
                        })
                    }
                </div>
            </div>
        </PopupShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_package_bookends_with_discovery_and_guidelines() {
        for package in PACKAGES {
            assert_eq!(package.sections.first().map(|s| s.title), Some("BRAND DISCOVERY"));
            assert_eq!(package.sections.last().map(|s| s.title), Some("BRAND GUIDELINES"));
        }
    }

    #[test]
    fn only_the_first_package_has_notes() {
        assert_eq!(PACKAGES[0].notes.len(), 2);
        assert!(PACKAGES[1].notes.is_empty());
    }
}
