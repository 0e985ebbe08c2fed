//! Data URI encoding for upload previews

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{ImageError, Result};

/// Encode bytes as a `data:<mime>;base64,...` URI
pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Split a base64 data URI into its MIME type (if any) and decoded bytes.
///
/// A bare base64 string without the `data:` prefix is accepted too.
pub fn decode_data_uri(uri: &str) -> Result<(Option<String>, Vec<u8>)> {
    let uri = uri.trim();
    let Some(rest) = uri.strip_prefix("data:") else {
        return Ok((None, STANDARD.decode(uri)?));
    };

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| ImageError::DataUri("missing ',' separator".into()))?;

    let mut params = header.split(';');
    let mime = params
        .next()
        .filter(|m| !m.is_empty())
        .map(str::to_ascii_lowercase);
    if !params.any(|p| p.eq_ignore_ascii_case("base64")) {
        return Err(ImageError::DataUri("only base64 payloads are supported".into()));
    }

    Ok((mime, STANDARD.decode(payload.trim())?))
}
