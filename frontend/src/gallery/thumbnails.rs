use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animations::{reveal_style, stagger_delay_ms, Reveal};
use crate::gallery::overlay::ProjectOverlay;
use crate::gallery::projects::{find_by_slug, masonry_span, projects, Project};
use crate::viewport::{use_in_view, ViewportOptions};
use crate::Route;

#[derive(Properties, PartialEq)]
struct ThumbnailCardProps {
    project: &'static Project,
    index: usize,
    on_select: Callback<&'static Project>,
}

#[function_component(ThumbnailCard)]
fn thumbnail_card(props: &ThumbnailCardProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), ViewportOptions::threshold(0.1));
    let (cols, rows) = masonry_span(props.index);

    let onclick = {
        let on_select = props.on_select.clone();
        let project = props.project;
        Callback::from(move |_: MouseEvent| on_select.emit(project))
    };

    let project = props.project;
    html! {
        <div
            ref={node}
            class="thumbnail"
            data-project-id={project.id.clone()}
            style={format!("--col-span: {}; --row-span: {};", cols, rows)}
        >
            <button class="thumbnail-button" {onclick}>
                <div
                    class={classes!("project-card", visible.then_some("in-view"))}
                    style={reveal_style(Reveal::SlideUp, visible, stagger_delay_ms(props.index, 100, 0))}
                >
                    <div class="thumbnail-image">
                        <img
                            src={project.cover().to_string()}
                            alt={project.title.clone()}
                            loading={if props.index == 0 { "eager" } else { "lazy" }}
                        />
                    </div>
                    <div class="thumbnail-caption">
                        <h3>{ &project.title }</h3>
                        <p>{ &project.category }</p>
                    </div>
                </div>
            </button>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseNavigation {
    Back,
    PushHome,
}

/// How closing the overlay moves the history. Going back after opening from
/// the grid keeps Back from reopening the project; a deep link has nothing
/// on the site to go back to.
pub fn close_navigation(opened_from_grid: bool) -> CloseNavigation {
    if opened_from_grid {
        CloseNavigation::Back
    } else {
        CloseNavigation::PushHome
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectThumbnailsProps {
    /// Slug from a `/work/:slug` deep link.
    #[prop_or_default]
    pub selected_slug: Option<AttrValue>,
}

/// "Selected Work" grid. The open project lives in the URL so it can be
/// shared; selecting a card navigates to its slug.
#[function_component(ProjectThumbnails)]
pub fn project_thumbnails(props: &ProjectThumbnailsProps) -> Html {
    let navigator = use_navigator();
    let selected = props.selected_slug.as_deref().and_then(find_by_slug);

    // Set when the overlay was opened from this grid, so closing it can pop
    // the history entry that opening pushed.
    let opened_from_grid = use_mut_ref(|| false);

    let on_select = {
        let navigator = navigator.clone();
        let opened_from_grid = opened_from_grid.clone();
        Callback::from(move |project: &'static Project| {
            info!("opening project {}", project.slug);
            if let Some(navigator) = &navigator {
                *opened_from_grid.borrow_mut() = true;
                navigator.push(&Route::Project { slug: project.slug.clone() });
            }
        })
    };

    let on_close = Callback::from(move |_: ()| {
        let Some(navigator) = &navigator else {
            return;
        };
        match close_navigation(opened_from_grid.replace(false)) {
            CloseNavigation::Back => navigator.back(),
            CloseNavigation::PushHome => navigator.push(&Route::Home),
        }
    });

    html! {
        <section class="thumbnails">
            <div class="section-title">
                <h2>{"Selected Work"}</h2>
            </div>
            <div class="thumbnail-grid">
                {
                    for projects().iter().enumerate().map(|(index, project)| html! {
                        <ThumbnailCard
                            key={project.id.clone()}
                            {project}
                            {index}
                            on_select={on_select.clone()}
                        />
                    })
                }
            </div>
            <ProjectOverlay
                is_open={selected.is_some()}
                project={selected}
                {on_close}
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_after_opening_from_grid_goes_back() {
        assert_eq!(close_navigation(true), CloseNavigation::Back);
    }

    #[test]
    fn closing_a_deep_link_goes_home() {
        assert_eq!(close_navigation(false), CloseNavigation::PushHome);
    }
}
