//! State codec — moves an answer set in and out of the session.
//!
//! Two independent encodings:
//!
//! - **Transport token**: compact JSON, UTF-8, base64 with the URL-safe
//!   alphabet and no padding. The token only contains `[A-Za-z0-9_-]`, so it
//!   can sit in a query string and survives percent-encoding round trips.
//! - **Document**: pretty JSON or TOML with stable camelCase field names,
//!   used for file export/import. Import is a shallow merge: only the keys
//!   present in the document overwrite the current answers.
//!
//! Decoding never mutates anything. On any failure the caller keeps its
//! current record.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use percent_encoding::percent_decode_str;
use std::path::Path;
use tracing::{debug, warn};

use crate::answers::{AnswerPatch, AnswerSet, Field};
use crate::error::CodecError;

/// Query parameter that carries the token in share links.
pub const SHARE_PARAM: &str = "s";

const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(false)
    .with_decode_padding_mode(DecodePaddingMode::Indifferent);

const URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Tokens shared by older links use the standard alphabet.
const STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

// ── Transport token ───────────────────────────────────────────────────────

/// Encode the full answer set as a URL-safe token.
pub fn encode_token(answers: &AnswerSet) -> Result<String, CodecError> {
    let json = serde_json::to_vec(answers).map_err(|e| CodecError::Serialize(e.to_string()))?;
    Ok(URL_SAFE.encode(json))
}

/// Decode a token produced by [`encode_token`].
///
/// Accepts surrounding whitespace, optional padding, the standard alphabet,
/// and tokens that are still percent-encoded. Missing fields take their
/// defaults so the result is always a complete record, but at least one
/// field must be present.
pub fn decode_token(token: &str) -> Result<AnswerSet, CodecError> {
    let token = token.trim();
    let unescaped = percent_decode_str(token)
        .decode_utf8()
        .map_err(|e| CodecError::InvalidUtf8(e.to_string()))?;

    let engine = if unescaped.contains(['+', '/']) {
        &STANDARD
    } else {
        &URL_SAFE
    };

    let bytes = engine
        .decode(unescaped.as_bytes())
        .map_err(|e| CodecError::InvalidBase64(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|e| CodecError::InvalidUtf8(e.to_string()))?;

    let answers = answers_from_token_json(&text).inspect_err(|e| {
        warn!(error = %e, "Rejected transport token");
    })?;
    debug!(bytes = text.len(), "Decoded transport token");
    Ok(answers)
}

/// A token must be a JSON object naming at least one answer field.
/// Anything else (`{}`, foreign key names) would silently decode to the
/// defaults.
fn answers_from_token_json(text: &str) -> Result<AnswerSet, CodecError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| CodecError::InvalidJson(e.to_string()))?;
    let Some(map) = value.as_object() else {
        return Err(CodecError::NotAnObject(json_kind(&value).into()));
    };
    if !Field::ALL.iter().any(|f| map.contains_key(f.as_str())) {
        return Err(CodecError::NoKnownFields);
    }
    serde_json::from_value(value).map_err(|e| CodecError::InvalidJson(e.to_string()))
}

/// Build a share link carrying the token in the `s` query parameter.
pub fn share_link(base_url: &str, answers: &AnswerSet) -> Result<String, CodecError> {
    let token = encode_token(answers)?;
    let sep = if base_url.contains('?') { '&' } else { '?' };
    Ok(format!("{base_url}{sep}{SHARE_PARAM}={token}"))
}

/// Pull the token out of a share link, or return the input if it is
/// already a bare token.
pub fn token_from_link(input: &str) -> &str {
    let input = input.trim();
    let Some((_, query)) = input.split_once('?') else {
        return input;
    };
    let query = query.split('#').next().unwrap_or(query);
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("s="))
        .unwrap_or(input)
}

// ── Document export/import ────────────────────────────────────────────────

/// Serialization used for exported documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentFormat {
    #[default]
    Json,
    Toml,
}

impl DocumentFormat {
    /// `.toml` files are TOML, everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

/// Serialize every field, including empty strings and empty lists.
pub fn export_document(answers: &AnswerSet, format: DocumentFormat) -> Result<String, CodecError> {
    match format {
        DocumentFormat::Json => serde_json::to_string_pretty(answers)
            .map_err(|e| CodecError::Serialize(e.to_string())),
        DocumentFormat::Toml => {
            toml::to_string_pretty(answers).map_err(|e| CodecError::Serialize(e.to_string()))
        }
    }
}

/// Parse a whole document into a partial answer set.
///
/// Any syntax or type error rejects the document as a whole.
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<AnswerPatch, CodecError> {
    match format {
        DocumentFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(text).map_err(|e| CodecError::InvalidJson(e.to_string()))?;
            if !value.is_object() {
                return Err(CodecError::NotAnObject(json_kind(&value).into()));
            }
            serde_json::from_value(value).map_err(|e| CodecError::InvalidJson(e.to_string()))
        }
        DocumentFormat::Toml => {
            toml::from_str(text).map_err(|e| CodecError::InvalidToml(e.to_string()))
        }
    }
}

/// Parse `text` and merge it into `answers`.
///
/// Returns the fields that were overwritten. On error `answers` is untouched.
pub fn import_document(
    answers: &mut AnswerSet,
    text: &str,
    format: DocumentFormat,
) -> Result<Vec<Field>, CodecError> {
    let patch = parse_document(text, format).inspect_err(|e| {
        warn!(error = %e, format = format.as_str(), "Rejected imported document");
    })?;
    Ok(answers.merge(patch))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
