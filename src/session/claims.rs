//! Bearer-token claims decoding.
//!
//! Tokens are three dot-separated segments (header, claims, signature). Only
//! the claims segment is read; the signature is never verified here, that is
//! the server's job.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::{Map, Value};

const LENIENT_PADDING: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT_PADDING);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT_PADDING);

/// Claim carrying the administrative role flag.
pub const ADMIN_CLAIM: &str = "isAdmin";

/// User identity derived from a token's claims.
///
/// Claims are not validated beyond being a JSON object: an absent `id` or
/// `email` leaves the field empty rather than rejecting the token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    /// User id; non-string ids are rendered as their JSON text.
    pub id: Option<String>,
    pub email: Option<String>,
    pub is_admin: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("token is empty")]
    Empty,
    #[error("expected 3 token segments, found {0}")]
    SegmentCount(usize),
    #[error("claims segment is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("claims segment is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode the identity carried in `token`'s claims segment.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the token is empty, does not have exactly
/// three segments, or its claims segment is not a base64-encoded JSON object.
pub fn decode_identity(token: &str) -> Result<Identity, DecodeError> {
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError::SegmentCount(segments.len()));
    }

    let raw = decode_segment(segments[1])?;
    let claims: Map<String, Value> = serde_json::from_slice(&raw)?;

    Ok(Identity {
        id: claim_text(claims.get("id")),
        email: claim_text(claims.get("email")),
        is_admin: claims.get(ADMIN_CLAIM).is_some_and(is_truthy),
    })
}

/// Claim value as text; `null` and absent claims are `None`.
fn claim_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Base64 decode a segment, accepting both alphabets with or without padding.
fn decode_segment(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    if segment.contains(['-', '_']) {
        URL_SAFE_LENIENT.decode(segment)
    } else {
        STANDARD_LENIENT.decode(segment)
    }
}

/// Loose truthiness for the role claim: issuers disagree on `true` vs `1`.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
