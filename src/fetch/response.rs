//! Response body handling.

use thiserror::Error;

use crate::config::MAX_RESPONSE_BODY_SIZE;

#[derive(Debug, Error)]
pub(crate) enum BodyError {
    #[error("response body of {0} bytes exceeds the size limit")]
    TooLarge(u64),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Reads the body as text, giving up once it grows past `MAX_RESPONSE_BODY_SIZE`.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub(crate) async fn read_body_capped(mut response: reqwest::Response) -> Result<String, BodyError> {
    if let Some(length) = response.content_length() {
        if length > MAX_RESPONSE_BODY_SIZE as u64 {
            return Err(BodyError::TooLarge(length));
        }
    }

    let mut bytes = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        bytes.extend_from_slice(&chunk);
        if bytes.len() > MAX_RESPONSE_BODY_SIZE {
            return Err(BodyError::TooLarge(bytes.len() as u64));
        }
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
