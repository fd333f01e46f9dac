//! Client for the remote ranking service.
//!
//! All mutating requests are signed: the signature is the hex-encoded
//! SHA-256 of `app_id + payload + timestamp_ms + app_secret`, where the
//! payload is the plaintext session code for POST bodies and the session
//! code *hash* for browser-visible URLs. GET requests that identify the
//! user carry only the hash, never the code itself.

use rand::RngCore;
use serde::Deserialize;
use sha2::{Digest, Sha256};

pub mod ranking;

pub use ranking::{LeaderboardData, LeaderboardEntry, RankingClient, UserInfo};

/// Response envelope shared by every service endpoint.
///
/// `data` is optional on the wire; an empty or malformed body deserializes
/// to `None` and is treated as a failed call by consumers.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// Lowercase hex SHA-256 of a UTF-8 string.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Request signature: `hex(sha256(app_id + payload + timestamp + secret))`.
pub fn sign_request(app_id: &str, payload: &str, timestamp_ms: i64, app_secret: &str) -> String {
    sha256_hex(&format!("{}{}{}{}", app_id, payload, timestamp_ms, app_secret))
}

/// Hash transmitted in place of the session code on GET requests.
pub fn session_code_hash(session_code: &str) -> String {
    sha256_hex(session_code)
}

/// Generates a fresh session code: 32 random bytes as lowercase hex.
pub fn generate_session_code() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
