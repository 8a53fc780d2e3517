use yew::prelude::*;

use crate::components::web_open::WebOpenAnimation;
use crate::gallery::thumbnails::ProjectThumbnails;
use crate::sections::{
    brand_clarity::BrandClarity, brand_strategy::BrandStrategy, footer::Footer, hero::Hero,
    services::Services, why_choose_us::WhyChooseUs,
};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    /// Set when the page was opened on a `/work/:slug` link.
    #[prop_or_default]
    pub selected_slug: Option<AttrValue>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <main class="home">
            <WebOpenAnimation skip={props.selected_slug.is_some()} />
            <div id="home">
                <Hero />
            </div>
            <hr class="separator" />
            <BrandStrategy />
            <hr class="separator" />
            <BrandClarity />
            <section id="work">
                <ProjectThumbnails selected_slug={props.selected_slug.clone()} />
            </section>
            <div id="services">
                <Services />
            </div>
            <hr class="separator" />
            <WhyChooseUs />
            <Footer />
        </main>
    }
}
