use yew::prelude::*;

use crate::animations::{reveal_style, AnimatedSection, Reveal};
use crate::viewport::{use_in_view, ViewportOptions};

const PARAGRAPHS: [&str; 2] = [
    "Our work brings structure, clarity, and intention to your brand, so you can attract high paying customers, raise your value, and grow with confidence.",
    "We work with founders who think big and want their brand to reflect that ambition.",
];

#[function_component(BrandStrategy)]
pub fn brand_strategy() -> Html {
    let image = use_node_ref();
    let image_visible = use_in_view(image.clone(), Reveal::ScaleImage.viewport());
    let copy = use_node_ref();
    let copy_visible = use_in_view(copy.clone(), ViewportOptions::threshold(0.5));

    html! {
        <section class="brand-strategy">
            <AnimatedSection variant={Reveal::Heading} class="section-heading">
                <h2>
                    {"We're a Brand Strategy & Identity Design studio based in Toronto. \
                      We help founders build premium, iconic brands that stand out and command attention."}
                </h2>
            </AnimatedSection>
            <div class="split-grid">
                <div
                    ref={image}
                    class="split-image"
                    style={reveal_style(Reveal::ScaleImage, image_visible, 0)}
                >
                    <img src="/images/strategy.jpg" alt="Brand strategy workshop" loading="lazy" />
                </div>
                <AnimatedSection variant={Reveal::ContentBlock} class="split-copy">
                    <div ref={copy}>
                        {
                            for PARAGRAPHS.iter().enumerate().map(|(idx, text)| html! {
                                <p
                                    class="lead"
                                    style={reveal_style(Reveal::Heading, copy_visible, 100 * (idx as u32 + 1))}
                                >
                                    { *text }
                                </p>
                            })
                        }
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}
