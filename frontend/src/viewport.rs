use js_sys::Array;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Observer settings for a scroll-triggered reveal.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl ViewportOptions {
    pub const fn new(threshold: f64, root_margin: &'static str) -> Self {
        Self { threshold, root_margin }
    }

    pub const fn threshold(threshold: f64) -> Self {
        Self::new(threshold, "0px")
    }

    fn to_init(&self) -> IntersectionObserverInit {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.threshold));
        init.set_root_margin(self.root_margin);
        init
    }
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self::new(0.1, "0px 0px -50px 0px")
    }
}

/// Visibility flag that can only be switched on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InViewLatch {
    seen: bool,
}

impl InViewLatch {
    /// Feeds one observer report. Returns `true` only for the report that
    /// first makes the element visible.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.seen || !is_intersecting {
            return false;
        }
        self.seen = true;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.seen
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct OnceObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for OnceObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(
    element: &Element,
    options: &ViewportOptions,
    on_enter: impl Fn() + 'static,
) -> Result<OnceObserver, JsValue> {
    let mut latch = InViewLatch::default();
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if latch.observe(entry.is_intersecting()) {
                    observer.unobserve(&entry.target());
                    on_enter();
                }
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options.to_init())?;
    observer.observe(element);
    Ok(OnceObserver { observer, _callback: callback })
}

/// Reports whether `node` has scrolled into view at least once.
///
/// The first intersection flips the flag and stops observing; it never goes
/// back to `false`. Browsers without `IntersectionObserver` get `true` right
/// away so content is never stuck hidden.
#[hook]
pub fn use_in_view(node: NodeRef, options: ViewportOptions) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let mut guard = None;
                if let Some(element) = node.cast::<Element>() {
                    let setter = in_view.setter();
                    match observe_once(&element, options, move || setter.set(true)) {
                        Ok(observer) => guard = Some(observer),
                        Err(e) => {
                            warn!("IntersectionObserver unavailable, revealing immediately: {:?}", e);
                            in_view.set(true);
                        }
                    }
                }
                move || drop(guard)
            },
            (node, options),
        );
    }

    *in_view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_flips_once_on_first_intersection() {
        let mut latch = InViewLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_visible());
        assert!(latch.observe(true));
        assert!(latch.is_visible());
        assert!(!latch.observe(true));
    }

    #[test]
    fn latch_does_not_revert_when_scrolled_away() {
        let mut latch = InViewLatch::default();
        latch.observe(true);
        assert!(!latch.observe(false));
        assert!(latch.is_visible());
    }

    #[test]
    fn default_options_match_generic_section() {
        let options = ViewportOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px 0px -50px 0px");
        assert_eq!(ViewportOptions::threshold(0.3).root_margin, "0px");
    }
}
