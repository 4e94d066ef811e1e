//! Access-token inspection.
//!
//! Tokens are JWTs whose payload is read without signature verification:
//! the client only needs the expiry to decide whether a stored session is
//! still worth presenting. Every malformed input fails closed.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::{Map, Value};

/// URL-safe alphabet, accepting payloads with or without `=` padding.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decoded JWT payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Claims(Map<String, Value>);

impl Claims {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// The `exp` claim in seconds since the Unix epoch, if numeric.
    #[must_use]
    pub fn exp(&self) -> Option<f64> {
        self.0.get("exp").and_then(Value::as_f64)
    }
}

/// Source of the current wall-clock time.
pub trait Clock {
    /// Seconds since the Unix epoch.
    fn now_secs(&self) -> f64;
}

/// Real wall clock (`Date.now()` in the browser build).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> f64 {
        #[cfg(feature = "csr")]
        {
            js_sys::Date::now() / 1000.0
        }
        #[cfg(not(feature = "csr"))]
        {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0.0, |d| d.as_secs_f64())
        }
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub f64);

impl Clock for FixedClock {
    fn now_secs(&self) -> f64 {
        self.0
    }
}

/// Decode the payload segment of `token`.
///
/// Returns `None` when the token has fewer than two `.`-separated segments,
/// the payload is not URL-safe base64, or the bytes are not a JSON object.
#[must_use]
pub fn decode_token(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let Some(payload) = segments.next() else {
        log::warn!("failed to decode token: missing payload segment");
        return None;
    };
    let bytes = match PAYLOAD_ENGINE.decode(payload) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("failed to decode token payload: {e}");
            return None;
        }
    };
    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(map)) => Some(Claims(map)),
        Ok(_) => {
            log::warn!("failed to decode token: payload is not a JSON object");
            None
        }
        Err(e) => {
            log::warn!("failed to decode token payload: {e}");
            None
        }
    }
}

/// Whether `token` should be treated as expired at `clock`'s current time.
///
/// Undecodable tokens and tokens without a numeric `exp` claim are expired.
/// Otherwise the token is expired once `exp <= now`.
#[must_use]
pub fn is_token_expired(token: &str, clock: &impl Clock) -> bool {
    decode_token(token)
        .and_then(|claims| claims.exp())
        .map_or(true, |exp| exp <= clock.now_secs())
}
