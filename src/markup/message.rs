// src/markup/message.rs
// =============================================================================
// The JSON returned by validator.nu when asked for ?out=json:
//
//   {
//     "url": "https://live.door43.org/u/...",
//     "messages": [
//       { "type": "info", "subType": "warning", "message": "..." },
//       { "type": "error", "message": "...", "lastLine": 12 }
//     ]
//   }
//
// Only the fields we classify on are decoded; serde ignores the rest.
//
// Rust concepts:
// - #[derive(Deserialize)]: serde generates the JSON decoding code
// - #[serde(rename = ...)]: Map camelCase JSON keys to snake_case fields
// - #[serde(other)]: Catch-all variant for message types we don't know
// =============================================================================

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ValidatorResponse {
    #[serde(default)]
    pub messages: Vec<ValidationMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationMessage {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    #[serde(rename = "subType", default)]
    pub sub_kind: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKind {
    Info,
    Error,
    /// The validator could not check the document at all (e.g. fetch failed).
    /// Logged, but it does not count as a validation error.
    NonDocumentError,
    #[serde(other)]
    Other,
}

impl ValidationMessage {
    /// `info` messages with the `warning` sub type.
    pub fn is_warning(&self) -> bool {
        self.kind == MessageKind::Info && self.sub_kind.as_deref() == Some("warning")
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}
