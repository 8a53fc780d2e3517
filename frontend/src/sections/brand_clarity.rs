use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animations::{reveal_style, AnimatedSection, Reveal};
use crate::components::arrow_button::ArrowButton;
use crate::components::contact_popup::ContactPopup;
use crate::components::pricing_popup::PricingPopup;
use crate::viewport::use_in_view;

#[function_component(BrandClarity)]
pub fn brand_clarity() -> Html {
    let pricing_open = use_state_eq(|| false);
    let contact_open = use_state_eq(|| false);
    let image = use_node_ref();
    let image_visible = use_in_view(image.clone(), Reveal::Bloom.viewport());

    let open_pricing = {
        let pricing_open = pricing_open.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("pricing popup opened");
            pricing_open.set(true);
        })
    };
    let close_pricing = {
        let pricing_open = pricing_open.clone();
        Callback::from(move |_: ()| pricing_open.set(false))
    };
    // Fires after the pricing popup has finished closing.
    let get_started = {
        let contact_open = contact_open.clone();
        Callback::from(move |_: ()| contact_open.set(true))
    };
    let close_contact = {
        let contact_open = contact_open.clone();
        Callback::from(move |_: ()| contact_open.set(false))
    };

    html! {
        <section class="brand-clarity">
            <AnimatedSection variant={Reveal::Heading} class="section-heading">
                <h2>
                    {"When your brand is clear,"}
                    <br />
                    {"everything else moves faster."}
                </h2>
            </AnimatedSection>

            <div
                ref={image}
                class="clarity-image"
                style={reveal_style(Reveal::Bloom, image_visible, 0)}
            >
                <img src="/images/clarity.jpg" alt="Brand clarity" loading="lazy" />
            </div>

            <AnimatedSection variant={Reveal::Clarity} class="clarity-copy">
                <p>
                    {"Every strong brand begins with clarity. We start by understanding your audience, \
                      your story, your personality, and your product or service. When these align, your \
                      brand becomes unmistakable. From there, we build your brand strategy, messaging, and \
                      visual identity that express who you are with confidence and consistency. The result \
                      is a premium, cohesive brand that resonates deeply and performs across every touchpoint."}
                </p>
                <p>{"Schedule a call to see if we're a good fit to work together."}</p>
                <div class="clarity-cta">
                    <ArrowButton label="Our Prices" onclick={open_pricing} />
                </div>
            </AnimatedSection>

            <PricingPopup
                is_open={*pricing_open}
                on_close={close_pricing}
                on_get_started={get_started}
            />
            <ContactPopup is_open={*contact_open} on_close={close_contact} />
        </section>
    }
}
