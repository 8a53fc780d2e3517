use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod animations;
mod config;
mod context;
mod dom;
mod styles;
mod viewport;
mod components {
    pub mod about_popup;
    pub mod arrow_button;
    pub mod contact_popup;
    pub mod header;
    pub mod popup;
    pub mod pricing_popup;
    pub mod web_open;
}
mod contact {
    pub mod form;
    pub mod state;
    pub mod submit;
    pub mod view;
}
mod gallery {
    pub mod overlay;
    pub mod projects;
    pub mod thumbnails;
}
mod sections {
    pub mod brand_clarity;
    pub mod brand_strategy;
    pub mod footer;
    pub mod hero;
    pub mod services;
    pub mod why_choose_us;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::header::SiteHeader;
use context::AnimationProvider;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/work/:slug")]
    Project { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Project { slug } => {
            info!("Rendering project {}", slug);
            html! { <Home selected_slug={AttrValue::from(slug)} /> }
        }
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <AnimationProvider delay_start_ms={config::ANIMATION_READY_DELAY_MS}>
                <style>{ styles::GLOBAL_CSS }</style>
                <SiteHeader />
                <Switch<Route> render={switch} />
            </AnimationProvider>
        </BrowserRouter>
    }
}

fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log_level()) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_route_round_trips_through_its_path() {
        let route = Route::Project { slug: "northwind-coffee".to_string() };
        assert_eq!(route.to_path(), "/work/northwind-coffee");
        assert_eq!(Route::recognize("/work/northwind-coffee"), Some(route));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::recognize("/pricing"), Some(Route::NotFound));
    }
}
