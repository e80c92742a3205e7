//! Caller-side validation of raw revision content.
//!
//! The comparison engine only accepts decoded text; binary and non-UTF-8
//! blobs must be rejected before [`compare`](crate::compare) is called. This
//! module is where that rejection lives so front ends do not re-implement it.

/// Errors raised while validating raw revision content.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The content is not valid UTF-8 text.
    #[error("content is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// The content contains a NUL byte and is treated as binary.
    #[error("content appears to be binary (NUL byte at offset {offset})")]
    Binary { offset: usize },
}

/// Validate raw bytes as comparable text.
///
/// Rejects content containing NUL bytes (the conventional binary marker) and
/// content that is not valid UTF-8.
pub fn decode_text(bytes: &[u8]) -> Result<&str, InputError> {
    if let Some(offset) = bytes.iter().position(|&b| b == 0) {
        return Err(InputError::Binary { offset });
    }
    Ok(std::str::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes() {
        assert_eq!(decode_text(b"hello\nworld").unwrap(), "hello\nworld");
    }

    #[test]
    fn empty_content_passes() {
        assert_eq!(decode_text(b"").unwrap(), "");
    }

    #[test]
    fn utf8_text_passes() {
        assert_eq!(decode_text("héllo ☃".as_bytes()).unwrap(), "héllo ☃");
    }

    #[test]
    fn nul_byte_is_rejected_as_binary() {
        let err = decode_text(b"head\0tail").unwrap_err();
        assert!(matches!(err, InputError::Binary { offset: 4 }));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = decode_text(&[0x66, 0x6f, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, InputError::InvalidUtf8(_)));
    }
}
