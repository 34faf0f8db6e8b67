use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque per-page-load conversation identifier.
///
/// Sent with every reply request so the provider can correlate turns.
/// Only uniqueness matters; it is not a security token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Base36 millisecond timestamp followed by a random base36 suffix.
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis().max(0) as u128;
        let random = to_base36(uuid::Uuid::new_v4().as_u128());
        let mut id = to_base36(millis);
        // low digits only; the high bits carry the uuid version nibble
        id.push_str(&random[random.len().saturating_sub(11)..]);
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn to_base36(mut n: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
