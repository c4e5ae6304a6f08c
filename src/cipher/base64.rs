use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use super::Result;
use crate::CipherError;

const NAME: &str = "Base64 Encoding";

pub(super) fn encode(text: &str) -> String {
    BASE64.encode(text.as_bytes())
}

pub(super) fn decode(text: &str) -> Result<String> {
    let bytes = BASE64
        .decode(text.trim())
        .map_err(|e| CipherError::format(NAME, e.to_string()))?;
    String::from_utf8(bytes)
        .map_err(|_| CipherError::format(NAME, "decoded bytes are not valid UTF-8"))
}
