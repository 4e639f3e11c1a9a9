use serde::de::DeserializeOwned;

use crate::error::{ProtocolError, ProtocolResult};

/// Decode a JSON body.
///
/// Content type is not inspected; any body that parses is accepted.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> ProtocolResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ProtocolError::EmptyBody);
    }
    serde_json::from_slice(body).map_err(|e| ProtocolError::Deserialization(e.to_string()))
}
