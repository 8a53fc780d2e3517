use std::cell::RefCell;

use log::{debug, warn};
use web_sys::{window, Document, ScrollBehavior, ScrollIntoViewOptions};

use crate::config;

/// Blocking browser alert. Used for contact form validation.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        if window.alert_with_message(message).is_err() {
            warn!("alert() was blocked: {}", message);
        }
    }
}

/// Number of layers currently holding the page scroll lock. Only the first
/// acquire and the last release touch the DOM.
#[derive(Debug, Default)]
pub struct ScrollLockCount {
    holders: usize,
}

impl ScrollLockCount {
    /// Returns `true` when this hold is the one that locks the page.
    pub fn acquire(&mut self) -> bool {
        self.holders += 1;
        self.holders == 1
    }

    /// Returns `true` when this release is the one that unlocks the page.
    pub fn release(&mut self) -> bool {
        match self.holders {
            0 => false,
            n => {
                self.holders = n - 1;
                self.holders == 0
            }
        }
    }
}

thread_local! {
    static SCROLL_LOCKS: RefCell<ScrollLockCount> = RefCell::new(ScrollLockCount::default());
}

fn set_body_overflow_hidden(hidden: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = if hidden {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if result.is_err() {
        warn!("could not toggle body scroll lock");
    }
}

/// One full-screen layer's hold on page scrolling. The page scrolls again
/// once every hold has been dropped.
#[must_use]
pub struct ScrollLock(());

pub fn lock_body_scroll() -> ScrollLock {
    if SCROLL_LOCKS.with(|locks| locks.borrow_mut().acquire()) {
        set_body_overflow_hidden(true);
    }
    ScrollLock(())
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        if SCROLL_LOCKS.with(|locks| locks.borrow_mut().release()) {
            set_body_overflow_hidden(false);
        }
    }
}

/// Smooth-scrolls to the element with the given id, if it exists.
pub fn scroll_to_section(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        warn!("no section with id #{}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// What link previews see for the current view.
pub struct PageMeta<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub path: &'a str,
    pub image: &'a str,
}

impl Default for PageMeta<'static> {
    fn default() -> Self {
        PageMeta {
            title: config::SITE_TITLE,
            description: config::SITE_DESCRIPTION,
            path: "/",
            image: config::OG_IMAGE,
        }
    }
}

fn set_attribute(document: &Document, selector: &str, attribute: &str, value: &str) {
    match document.query_selector(selector) {
        Ok(Some(element)) => {
            if element.set_attribute(attribute, value).is_err() {
                warn!("could not update {}", selector);
            }
        }
        Ok(None) => debug!("no {} in document head", selector),
        Err(_) => warn!("invalid selector {}", selector),
    }
}

/// Updates the document title, description, canonical link and share tags.
pub fn set_page_metadata(meta: &PageMeta) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let url = config::absolute_url(meta.path);
    let image = config::absolute_url(meta.image);
    document.set_title(meta.title);
    set_attribute(&document, "link[rel='canonical']", "href", &url);
    set_attribute(&document, "meta[name='description']", "content", meta.description);
    set_attribute(&document, "meta[property='og:title']", "content", meta.title);
    set_attribute(&document, "meta[property='og:description']", "content", meta.description);
    set_attribute(&document, "meta[property='og:url']", "content", &url);
    set_attribute(&document, "meta[property='og:image']", "content", &image);
    set_attribute(&document, "meta[name='twitter:title']", "content", meta.title);
    set_attribute(&document, "meta[name='twitter:image']", "content", &image);
}

pub fn is_narrow_viewport() -> bool {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width < config::NARROW_VIEWPORT_PX)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_hold_locks_and_last_release_unlocks() {
        let mut locks = ScrollLockCount::default();
        assert!(locks.acquire());
        assert!(!locks.acquire());
        assert!(!locks.release());
        assert!(locks.release());
    }

    #[test]
    fn releasing_an_unrelated_layer_keeps_the_overlay_lock() {
        // Overlay locks first, then the idle menu mounts and unmounts its own hold.
        let mut locks = ScrollLockCount::default();
        assert!(locks.acquire());
        locks.acquire();
        assert!(!locks.release());
        assert_eq!(locks.holders, 1);
    }

    #[test]
    fn extra_release_is_ignored() {
        let mut locks = ScrollLockCount::default();
        assert!(!locks.release());
        assert!(locks.acquire());
    }
}
