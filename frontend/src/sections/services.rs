use yew::prelude::*;

use crate::animations::{AnimatedSection, Reveal, StaggerGroup};

pub struct ServiceCard {
    pub title: &'static str,
    pub summary: &'static str,
    pub includes: &'static [&'static str],
}

pub const SERVICE_CARDS: [ServiceCard; 3] = [
    ServiceCard {
        title: "Brand Strategy",
        summary: "Positioning, audience and voice, worked out before anything is drawn.",
        includes: &["Market & competitor research", "Positioning", "Messaging framework"],
    },
    ServiceCard {
        title: "Brand Identity",
        summary: "A distinctive mark and the visual language that carries it.",
        includes: &["Logo design", "Typography", "Colour palette"],
    },
    ServiceCard {
        title: "Visual Identity Systems",
        summary: "Guidelines and assets that keep the brand consistent wherever it shows up.",
        includes: &["Brand guidelines", "Templates", "Collateral"],
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section class="services">
            <AnimatedSection variant={Reveal::Heading} class="section-heading">
                <h2>{"How we can help you"}</h2>
            </AnimatedSection>
            <StaggerGroup class="service-grid">
                {
                    for SERVICE_CARDS.iter().map(|card| html! {
                        <article class="service-card">
                            <h3>{ card.title }</h3>
                            <p>{ card.summary }</p>
                            <ul>
                                { for card.includes.iter().map(|item| html! { <li>{ *item }</li> }) }
                            </ul>
                        </article>
                    })
                }
            </StaggerGroup>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::Service;

    #[test]
    fn cards_match_the_services_offered_in_the_form() {
        let titles: Vec<_> = SERVICE_CARDS.iter().map(|c| c.title).collect();
        let labels: Vec<_> = Service::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(titles, labels);
    }
}
