//! Conversions from backend failures into [`StoreError`].

use promptlab_core::StoreError;

/// Longest remote error body kept in a [`StoreError::Remote`] message.
pub(crate) const MAX_REMOTE_MESSAGE_CHARS: usize = 200;

pub(crate) fn io_error(e: std::io::Error) -> StoreError {
    StoreError::Io(e.to_string())
}

pub(crate) fn json_error(e: serde_json::Error) -> StoreError {
    StoreError::Serialization(e.to_string())
}

pub(crate) fn transport_error(e: reqwest::Error) -> StoreError {
    StoreError::Transport(e.to_string())
}

pub(crate) fn remote_error(status: u16, body: &str) -> StoreError {
    StoreError::Remote {
        status,
        message: body.trim().chars().take(MAX_REMOTE_MESSAGE_CHARS).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_message_is_truncated() {
        let err = remote_error(500, &"x".repeat(1_000));
        match err {
            StoreError::Remote { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message.chars().count(), MAX_REMOTE_MESSAGE_CHARS);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_io_error_keeps_message() {
        let err = io_error(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.to_string(), "Storage I/O error: denied");
    }
}
