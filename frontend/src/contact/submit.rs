use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::config;
use crate::contact::form::ContactForm;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("form endpoint answered with status {status}")]
    Rejected { status: u16 },
}

#[derive(Deserialize)]
struct EndpointError {
    message: String,
}

#[derive(Deserialize)]
struct EndpointErrorResponse {
    #[serde(default)]
    errors: Vec<EndpointError>,
}

/// Joins the messages of an endpoint error body, if it has any.
fn describe_rejection(body: &str) -> Option<String> {
    let parsed: EndpointErrorResponse = serde_json::from_str(body).ok()?;
    if parsed.errors.is_empty() {
        return None;
    }
    Some(
        parsed
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; "),
    )
}

/// Posts the form once. No retries: the visitor can press send again.
pub async fn submit_contact(form: &ContactForm) -> Result<(), SubmitError> {
    let response = Request::post(config::get_form_endpoint())
        .header("Accept", "application/json")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form.to_form_body())
        .send()
        .await?;

    if response.ok() {
        info!("contact form accepted");
        return Ok(());
    }

    let status = response.status();
    if let Ok(body) = response.text().await {
        if let Some(reason) = describe_rejection(&body) {
            warn!("contact form rejected ({}): {}", status, reason);
        }
    }
    Err(SubmitError::Rejected { status })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages_are_joined() {
        let body = r#"{"errors":[{"code":"TYPE_EMAIL","message":"should be an email"},{"message":"too short"}]}"#;
        assert_eq!(describe_rejection(body).as_deref(), Some("should be an email; too short"));
    }

    #[test]
    fn unknown_bodies_are_ignored() {
        assert_eq!(describe_rejection("<html>oops</html>"), None);
        assert_eq!(describe_rejection(r#"{"ok":false}"#), None);
    }

    #[test]
    fn rejected_error_mentions_status() {
        assert_eq!(
            SubmitError::Rejected { status: 422 }.to_string(),
            "form endpoint answered with status 422"
        );
    }
}
