use log::error;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer};

/// One portfolio entry. Read-only; loaded once from the embedded catalogue.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub industry: String,
    pub image: String,
    pub slug: String,
    pub tags: Vec<String>,
    pub year: Option<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub services: Vec<String>,
    pub client: Option<String>,
    pub role: Option<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub deliverables: Vec<String>,
    pub headline: Option<String>,
    pub context_text: Option<String>,
    pub description: Option<String>,
    pub images: Vec<String>,
}

/// The catalogue writes some list fields as a single string.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

const CATALOGUE: &str = include_str!("projects.json");

fn parse_catalogue(raw: &str) -> Vec<Project> {
    match serde_json::from_str(raw) {
        Ok(projects) => projects,
        Err(e) => {
            error!("project catalogue is invalid: {}", e);
            Vec::new()
        }
    }
}

static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| parse_catalogue(CATALOGUE));

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn find_by_slug(slug: &str) -> Option<&'static Project> {
    projects().iter().find(|p| p.slug == slug)
}

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

impl Project {
    pub fn cover(&self) -> &str {
        if self.image.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            &self.image
        }
    }
}

/// Desktop masonry pattern: (column span, row span) for the card at `index`.
pub fn masonry_span(index: usize) -> (u8, u8) {
    match index % 5 {
        0 => (2, 2),
        4 => (2, 1),
        _ => (1, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn embedded_catalogue_loads() {
        assert!(!projects().is_empty());
        for project in projects() {
            assert!(!project.title.is_empty());
            assert!(!project.slug.is_empty());
        }
    }

    #[test]
    fn ids_and_slugs_are_unique() {
        let ids: HashSet<_> = projects().iter().map(|p| &p.id).collect();
        let slugs: HashSet<_> = projects().iter().map(|p| &p.slug).collect();
        assert_eq!(ids.len(), projects().len());
        assert_eq!(slugs.len(), projects().len());
    }

    #[test]
    fn single_string_services_become_a_list() {
        let raw = r#"[{"id":"a","title":"A","slug":"a","services":"Logo Design","deliverables":["Logo","Cards"]}]"#;
        let parsed = parse_catalogue(raw);
        assert_eq!(parsed[0].services, vec!["Logo Design".to_string()]);
        assert_eq!(parsed[0].deliverables.len(), 2);
        assert!(parsed[0].images.is_empty());
    }

    #[test]
    fn broken_catalogue_is_empty_not_fatal() {
        assert!(parse_catalogue("{ not json").is_empty());
    }

    #[test]
    fn find_by_slug_matches_exactly() {
        let first = &projects()[0];
        assert_eq!(find_by_slug(&first.slug), Some(first));
        assert_eq!(find_by_slug("does-not-exist"), None);
    }

    #[test]
    fn masonry_pattern_repeats_every_five() {
        let spans: Vec<_> = (0..6).map(masonry_span).collect();
        assert_eq!(spans, vec![(2, 2), (1, 1), (1, 1), (1, 1), (2, 1), (2, 2)]);
    }

    #[test]
    fn cover_falls_back_to_placeholder() {
        let project = Project::default();
        assert_eq!(project.cover(), PLACEHOLDER_IMAGE);
    }
}
