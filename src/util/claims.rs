//! Bearer-credential claim decoding for UX routing decisions.
//!
//! SECURITY BOUNDARY
//! =================
//! Nothing here verifies the token signature. Claims are extracted
//! client-side only to decide which screens to render and where to
//! navigate; authorization is enforced by the backend on every request.
//! A forged token decoded here buys nothing beyond a differently-shaped
//! redirect to the login page.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use thiserror::Error;

/// Failure modes when parsing a compact JWS credential.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("credential is not a three-segment compact JWS")]
    MalformedStructure,
    #[error("credential segment is not valid base64url")]
    InvalidEncoding,
    #[error("credential claims are not valid JSON")]
    InvalidClaims,
    #[error("unsupported signature scheme {0:?}")]
    UnsupportedScheme(String),
    #[error("credential carries no subject or username claim")]
    MissingSubject,
}

/// Role claim projected to a closed set so route tables stay exhaustive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Customer,
    Employee,
    /// Absent or unrecognized role claim.
    Unknown,
}

impl Role {
    fn from_claim(raw: Option<&str>) -> Self {
        match raw {
            Some("customer") => Self::Customer,
            Some("employee") => Self::Employee,
            _ => Self::Unknown,
        }
    }
}

/// Read-only identity projection of a decoded credential.
///
/// Never persisted on its own; always re-derived from the raw credential
/// so storage and identity cannot drift apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub role: Role,
}

/// Claims extracted from a credential payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claims {
    pub username: String,
    pub role: Role,
    /// Expiry as Unix seconds; absent counts as expired.
    pub exp: Option<i64>,
}

impl Claims {
    /// Project the claims down to what the route guard needs.
    pub fn identity(&self) -> Identity {
        Identity {
            username: self.username.clone(),
            role: self.role,
        }
    }

    /// True when the expiry claim is missing or in the past.
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp.is_none_or(|exp| exp < now)
    }
}

#[derive(Debug, Deserialize)]
struct RawHeader {
    #[serde(default)]
    alg: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawClaims {
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    exp: Option<i64>,
}

/// Parse a compact JWS into [`Claims`] without verifying its signature.
///
/// The `username` claim names the identity, falling back to `sub`; a
/// credential carrying neither is rejected rather than decoded to an
/// anonymous identity.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the string is not a three-segment
/// compact JWS, a segment is not base64url, the claim JSON is invalid,
/// the header declares an unsigned scheme, or no subject is present.
pub fn decode(raw: &str) -> Result<Claims, DecodeError> {
    let segments: Vec<&str> = raw.split('.').collect();
    let &[header_b64, payload_b64, _signature] = segments.as_slice() else {
        return Err(DecodeError::MalformedStructure);
    };

    let header_bytes = URL_SAFE_NO_PAD
        .decode(header_b64)
        .map_err(|_| DecodeError::InvalidEncoding)?;
    let header: RawHeader =
        serde_json::from_slice(&header_bytes).map_err(|_| DecodeError::MalformedStructure)?;
    let alg = header.alg.unwrap_or_default();
    if alg.is_empty() || alg.eq_ignore_ascii_case("none") {
        return Err(DecodeError::UnsupportedScheme(alg));
    }

    let payload_bytes = URL_SAFE_NO_PAD
        .decode(payload_b64)
        .map_err(|_| DecodeError::InvalidEncoding)?;
    let claims: RawClaims =
        serde_json::from_slice(&payload_bytes).map_err(|_| DecodeError::InvalidClaims)?;

    let username = claims
        .username
        .or(claims.sub)
        .filter(|name| !name.is_empty())
        .ok_or(DecodeError::MissingSubject)?;

    Ok(Claims {
        username,
        role: Role::from_claim(claims.role.as_deref()),
        exp: claims.exp,
    })
}
