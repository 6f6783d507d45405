// src/markup/validate.rs
// =============================================================================
// Asks the HTML validator to check the published page and sorts its
// findings into warnings and errors.
//
// Request:
//   <endpoint>?out=json&charset=UTF-8&parser=html5&doc=<published url>
//
// Every warning becomes "HTML Validation Warning: <text>", every error
// "HTML Validation Error: <text>". Each group that is not empty is followed
// by one "For details check <validator url>" line so the full report can be
// opened in a browser.
// =============================================================================

use super::message::{MessageKind, ValidatorResponse};
use crate::config::Config;
use crate::context::RunContext;
use crate::error::StageError;
use crate::fetch::Fetcher;
use log::{debug, warn};
use url::Url;

// Findings of one validator run, already classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub validator_url: String,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ValidationReport {
    // Splits the validator messages into warnings and errors
    pub fn from_response(validator_url: String, response: ValidatorResponse) -> Self {
        let mut warnings = Vec::new();
        let mut errors = Vec::new();

        for message in response.messages {
            if message.is_warning() {
                warnings.push(message.message);
            } else if message.is_error() {
                errors.push(message.message);
            } else if message.kind == MessageKind::NonDocumentError {
                warn!("Validator could not check the document: {}", message.message);
            } else if message.kind == MessageKind::Other {
                warn!("Ignoring validator message of unknown type: {}", message.message);
            }
        }

        Self {
            validator_url,
            warnings,
            errors,
        }
    }

    /// Appends the findings to `ctx`, warnings first.
    ///
    /// Returns `true` when the page has no validation errors.
    pub fn record(&self, ctx: &mut RunContext) -> bool {
        if !self.warnings.is_empty() {
            for text in &self.warnings {
                ctx.warning(format!("HTML Validation Warning: {}", text));
            }
            ctx.warning(format!("For details check {}", self.validator_url));
        }

        if !self.errors.is_empty() {
            for text in &self.errors {
                ctx.error(format!("HTML Validation Error: {}", text));
            }
            ctx.error(format!("For details check {}", self.validator_url));
        }

        self.errors.is_empty()
    }
}

/// Builds the validator request for `published_url`.
pub fn validator_url(config: &Config, published_url: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(
        &config.validator_endpoint,
        &[
            ("out", "json"),
            ("charset", "UTF-8"),
            ("parser", "html5"),
            ("doc", published_url),
        ],
    )
}

// Validates the HTML served at published_url
//
// Returns: the classified report, or a StageError if the validator could
// not be reached or answered with something other than its JSON format
pub async fn validate(
    fetcher: &Fetcher,
    config: &Config,
    published_url: &str,
) -> Result<ValidationReport, StageError> {
    let url = validator_url(config, published_url)
        .map_err(|e| StageError::Network {
            url: config.validator_endpoint.clone(),
            reason: e.to_string(),
        })?
        .to_string();

    let body = fetcher
        .get_text(&url)
        .await
        .map_err(|e| StageError::Network {
            url: url.clone(),
            reason: e.to_string(),
        })?;

    let response: ValidatorResponse =
        serde_json::from_str(&body).map_err(|e| StageError::BadValidatorResponse {
            url: url.clone(),
            reason: e.to_string(),
        })?;

    let report = ValidationReport::from_response(url, response);
    debug!(
        "Validator reported {} warning(s) and {} error(s)",
        report.warnings.len(),
        report.errors.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::config_for;
    use mockito::{Matcher, Server};

    const PUBLISHED: &str = "https://live.door43.org/u/owner/repo/abc1234";

    #[test]
    fn test_validator_url_encodes_document() {
        let url = validator_url(&Config::default(), PUBLISHED).unwrap();
        assert_eq!(
            url.as_str(),
            "https://validator.nu/?out=json&charset=UTF-8&parser=html5\
             &doc=https%3A%2F%2Flive.door43.org%2Fu%2Fowner%2Frepo%2Fabc1234"
        );
    }

    #[test]
    fn test_warnings_only_pass() {
        let json = r#"{"messages": [
            {"type": "info", "subType": "warning", "message": "first"},
            {"type": "info", "subType": "warning", "message": "second"},
            {"type": "info", "message": "plain info is ignored"}
        ]}"#;
        let report = ValidationReport::from_response(
            "https://validator.nu/?doc=x".to_string(),
            serde_json::from_str(json).unwrap(),
        );

        let mut ctx = RunContext::new();
        assert!(report.record(&mut ctx));
        assert!(ctx.errors().is_empty());
        assert_eq!(
            ctx.warnings(),
            [
                "HTML Validation Warning: first",
                "HTML Validation Warning: second",
                "For details check https://validator.nu/?doc=x",
            ]
        );
    }

    #[test]
    fn test_error_and_warning_fail() {
        let json = r#"{"messages": [
            {"type": "error", "message": "Stray end tag div."},
            {"type": "info", "subType": "warning", "message": "Missing lang."}
        ]}"#;
        let report = ValidationReport::from_response(
            "https://validator.nu/?doc=x".to_string(),
            serde_json::from_str(json).unwrap(),
        );

        let mut ctx = RunContext::new();
        assert!(!report.record(&mut ctx));
        assert_eq!(
            ctx.errors(),
            [
                "HTML Validation Error: Stray end tag div.",
                "For details check https://validator.nu/?doc=x",
            ]
        );
        assert_eq!(
            ctx.warnings(),
            [
                "HTML Validation Warning: Missing lang.",
                "For details check https://validator.nu/?doc=x",
            ]
        );
    }

    #[test]
    fn test_clean_page_adds_nothing() {
        let report = ValidationReport::from_response(
            "https://validator.nu/?doc=x".to_string(),
            serde_json::from_str(r#"{"messages": []}"#).unwrap(),
        );
        let mut ctx = RunContext::new();
        assert!(report.record(&mut ctx));
        assert!(ctx.errors().is_empty());
        assert!(ctx.warnings().is_empty());
    }

    #[test]
    fn test_non_document_error_does_not_fail() {
        let json = r#"{"messages": [
            {"type": "non-document-error", "subType": "io", "message": "HTTP resource not retrievable."}
        ]}"#;
        let report = ValidationReport::from_response(
            "https://validator.nu/?doc=x".to_string(),
            serde_json::from_str(json).unwrap(),
        );

        let mut ctx = RunContext::new();
        assert!(report.record(&mut ctx));
        assert!(ctx.errors().is_empty());
        assert!(ctx.warnings().is_empty());
    }

    #[tokio::test]
    async fn test_validate_against_mock_validator() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/validate")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("out".into(), "json".into()),
                Matcher::UrlEncoded("charset".into(), "UTF-8".into()),
                Matcher::UrlEncoded("parser".into(), "html5".into()),
                Matcher::UrlEncoded("doc".into(), PUBLISHED.into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"messages": [{"type": "info", "subType": "warning", "message": "w"}]}"#)
            .create_async()
            .await;

        let config = config_for(&server.url());
        let fetcher = Fetcher::new(&config).unwrap();

        let report = validate(&fetcher, &config, PUBLISHED).await.unwrap();
        assert_eq!(report.warnings, vec!["w".to_string()]);
        assert!(report.errors.is_empty());
        assert!(report.validator_url.starts_with(&format!("{}/validate?out=json", server.url())));
    }

    #[tokio::test]
    async fn test_non_json_answer_is_an_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/validate")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let config = config_for(&server.url());
        let fetcher = Fetcher::new(&config).unwrap();

        let err = validate(&fetcher, &config, PUBLISHED).await.unwrap_err();
        assert!(matches!(err, StageError::BadValidatorResponse { .. }));
    }

    #[tokio::test]
    async fn test_unavailable_validator_is_a_network_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/validate")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let config = config_for(&server.url());
        let fetcher = Fetcher::new(&config).unwrap();

        let err = validate(&fetcher, &config, PUBLISHED).await.unwrap_err();
        assert!(matches!(err, StageError::Network { .. }));
        assert!(err.to_string().contains("503"));
    }
}
