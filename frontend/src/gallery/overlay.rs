use log::debug;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::animations::{reveal_style, stagger_delay_ms, Reveal};
use crate::config;
use crate::dom::{self, PageMeta};
use crate::gallery::projects::{Project, PLACEHOLDER_IMAGE};
use crate::viewport::{use_in_view, ViewportOptions};

#[derive(Properties, PartialEq)]
struct OverlayImageProps {
    src: AttrValue,
    alt: AttrValue,
    index: usize,
}

#[function_component(OverlayImage)]
fn overlay_image(props: &OverlayImageProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), ViewportOptions::new(0.1, "50px"));
    let src = if props.src.is_empty() {
        AttrValue::from(PLACEHOLDER_IMAGE)
    } else {
        props.src.clone()
    };

    html! {
        <div
            ref={node}
            class="overlay-image"
            style={reveal_style(Reveal::SlideUp, visible, stagger_delay_ms(props.index, 100, 0))}
        >
            <img {src} alt={props.alt.clone()} loading="lazy" />
        </div>
    }
}

fn detail(label: &str, value: Option<&str>) -> Html {
    match value.filter(|v| !v.is_empty()) {
        Some(value) => html! {
            <div class="overlay-detail">
                <p class="overlay-detail-label">{ label }</p>
                <p>{ value }</p>
            </div>
        },
        None => html! {},
    }
}

fn detail_list(label: &str, values: &[String]) -> Html {
    if values.is_empty() {
        return html! {};
    }
    html! {
        <div class="overlay-detail">
            <p class="overlay-detail-label">{ label }</p>
            <ul>
                { for values.iter().map(|v| html! { <li>{ v }</li> }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectOverlayProps {
    pub is_open: bool,
    pub project: Option<&'static Project>,
    pub on_close: Callback<()>,
}

/// Full-screen case study for one project.
#[function_component(ProjectOverlay)]
pub fn project_overlay(props: &ProjectOverlayProps) -> Html {
    let showing = props.is_open && props.project.is_some();

    {
        let project = props.project;
        use_effect_with_deps(
            move |showing| {
                let hold = (*showing).then(dom::lock_body_scroll);
                match project.filter(|_| *showing) {
                    Some(project) => {
                        let title = format!("{} | {}", project.title, config::SITE_NAME);
                        let path = format!("/work/{}", project.slug);
                        dom::set_page_metadata(&PageMeta {
                            title: &title,
                            description: project
                                .context_text
                                .as_deref()
                                .unwrap_or(config::SITE_DESCRIPTION),
                            path: &path,
                            image: project.cover(),
                        });
                    }
                    None => dom::set_page_metadata(&PageMeta::default()),
                }
                move || drop(hold)
            },
            showing,
        );
    }

    {
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if showing && e.key() == "Escape" {
                debug!("overlay closed with Escape");
                on_close.emit(());
            }
        });
    }

    let Some(project) = props.project.filter(|_| props.is_open) else {
        return html! {};
    };

    let on_back = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let services = project.services.join(", ");

    html! {
        <div class="project-overlay" aria-labelledby="project-title">
            <div class="overlay-back">
                <button onclick={on_back} aria-label="Go back">
                    <span>{"←"}</span>
                    <span>{"Back"}</span>
                </button>
            </div>

            <div class="overlay-headline">
                <h1 id="project-title">
                    { project.headline.clone().unwrap_or_else(|| project.title.clone()) }
                </h1>
            </div>

            <div class="overlay-body">
                <div class="overlay-text">
                    { for project.context_text.iter().map(|text| html! { <p>{ text }</p> }) }
                    { for project.description.iter().map(|text| html! { <p>{ text }</p> }) }
                </div>
                <div class="overlay-details">
                    { detail("Category", Some(project.category.as_str())) }
                    { detail("Industry", Some(project.industry.as_str())) }
                    { detail("Client", project.client.as_deref()) }
                    { detail("Role", project.role.as_deref()) }
                    { detail("Year", project.year.as_deref()) }
                    { detail("Scope", Some(services.as_str())) }
                    { detail_list("Deliverables", &project.deliverables) }
                </div>
            </div>

            {
                if project.tags.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="overlay-tags">
                            { for project.tags.iter().map(|tag| html! { <span class="tag">{ tag }</span> }) }
                        </div>
                    }
                }
            }

            <div class="overlay-images">
                {
                    if project.images.is_empty() {
                        html! { <div class="overlay-empty">{"No images available"}</div> }
                    } else {
                        html! {
                            <>
                                {
                                    for project.images.iter().enumerate().map(|(index, src)| html! {
                                        <OverlayImage
                                            key={index}
                                            src={src.clone()}
                                            alt={format!("{} - Image {}", project.title, index + 1)}
                                            {index}
                                        />
                                    })
                                }
                            </>
                        }
                    }
                }
            </div>
            <div class="overlay-bottom-pad" />
        </div>
    }
}
