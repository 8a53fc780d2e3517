#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://lozinr.com"
}

const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/mblnejjn";

/// Where the contact form posts to. Set `LOZINR_FORM_ENDPOINT` at build time
/// to point a staging build at a different form inbox.
pub fn get_form_endpoint() -> &'static str {
    option_env!("LOZINR_FORM_ENDPOINT").unwrap_or(DEFAULT_FORM_ENDPOINT)
}

pub const SITE_NAME: &str = "Lozinr";
pub const SITE_TITLE: &str = "Lozinr | Logo & Brand Identity Design Agency";
pub const SITE_DESCRIPTION: &str = "Lozinr is a brand strategy and identity design studio in Toronto. \
    We create premium brands that command attention.";
pub const OG_IMAGE: &str = "/og-image.jpg";

// Timings shared by the popups, the menu and the intro overlay (milliseconds).
pub const POPUP_CLOSE_MS: u32 = 400;
pub const SUCCESS_BANNER_MS: u32 = 6_000;
pub const MENU_CURTAIN_TAIL_MS: u32 = 800;
pub const INTRO_BUTTON_REVEAL_MS: u32 = 300;
pub const INTRO_EXIT_MS: u32 = 800;
pub const ANIMATION_READY_DELAY_MS: u32 = 800;

pub const NARROW_VIEWPORT_PX: f64 = 768.0;

pub const CONTACT_EMAIL: &str = "lozinrcontact@gmail.com";
pub const CALL_LINK: &str = "https://wa.me/201615910614";

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Instagram", "https://www.instagram.com/adnanahmedakif/"),
    ("Facebook", "https://www.facebook.com/adnanahakif"),
    ("YouTube", "https://www.youtube.com/@adnanahmedakif"),
];

/// Canonical URL for a path on the site, used for share links. Absolute
/// URLs pass through.
pub fn absolute_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}/{}", get_site_url(), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_joins_without_double_slash() {
        assert_eq!(absolute_url("/work/nova"), format!("{}/work/nova", get_site_url()));
        assert_eq!(absolute_url("work/nova"), format!("{}/work/nova", get_site_url()));
    }

    #[test]
    fn absolute_url_keeps_external_links() {
        assert_eq!(absolute_url("https://cdn.example.com/a.jpg"), "https://cdn.example.com/a.jpg");
    }

    #[test]
    fn form_endpoint_is_https() {
        assert!(get_form_endpoint().starts_with("https://") || option_env!("LOZINR_FORM_ENDPOINT").is_some());
    }
}
