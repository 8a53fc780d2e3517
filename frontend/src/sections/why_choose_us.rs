use yew::prelude::*;

use crate::animations::{AnimatedSection, Reveal};

pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const PROCESS: [ProcessStep; 3] = [
    ProcessStep {
        step: "01",
        title: "Discovery",
        description: "We dive deep into understanding your business, audience, values, and goals. \
            Through research and strategy sessions, we uncover the insights that form the foundation \
            of your brand identity.",
        image: "/images/process-discovery.jpg",
    },
    ProcessStep {
        step: "02",
        title: "Strategy",
        description: "With a clear understanding of your brand essence, we develop a comprehensive \
            brand strategy, messaging framework, and visual identity system that authentically \
            represents your business.",
        image: "/images/process-strategy.png",
    },
    ProcessStep {
        step: "03",
        title: "Design",
        description: "We bring your brand to life across all touchpoints, from logo design to brand \
            guidelines, ensuring consistency and impact everywhere your customers interact with your brand.",
        image: "/images/process-implementation.png",
    },
];

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    html! {
        <section class="why-choose-us">
            <AnimatedSection variant={Reveal::Heading} class="section-heading">
                <h2>{"Want to work with us?"}</h2>
            </AnimatedSection>
            <AnimatedSection variant={Reveal::Heading} delay_ms={100} class="section-subheading">
                <p>{"Here's our branding & design process"}</p>
            </AnimatedSection>
            <div class="process-steps">
                {
                    for PROCESS.iter().map(|step| html! {
                        <AnimatedSection key={step.step} variant={Reveal::Process} class="process-step">
                            <div class="process-head">
                                <p class="process-number">{ format!("Step {}", step.step) }</p>
                                <h3>{ step.title }</h3>
                                <div class="process-image">
                                    <img src={step.image} alt={step.title} loading="lazy" />
                                </div>
                            </div>
                            <p class="process-description">{ step.description }</p>
                        </AnimatedSection>
                    })
                }
            </div>
        </section>
    }
}
