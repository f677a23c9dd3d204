//! Inspection errors.
//!
//! Exhausted traversal and serialization limits are not errors; they
//! surface as `None` and marker strings respectively.

use thiserror::Error;

use crate::cdp::CdpError;

#[derive(Debug, Error)]
pub enum InspectError {
    /// The hook script could not be installed (blocked or rejected injection).
    #[error("Hook installation failed: {0}")]
    InstallationFailure(String),

    /// An id, backend node or element did not resolve.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A component id that does not parse.
    #[error("Invalid component id '{0}': expected <registration>:<root>:<path>")]
    InvalidId(String),

    /// The page returned a payload the engine could not decode.
    #[error("Malformed export from page: {0}")]
    Export(String),

    #[error(transparent)]
    Cdp(#[from] CdpError),
}

impl From<serde_json::Error> for InspectError {
    fn from(e: serde_json::Error) -> Self {
        InspectError::Export(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, InspectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_search() {
        let err = InspectError::NotFound("component 1:0:0.3".to_string());
        assert_eq!(err.to_string(), "Not found: component 1:0:0.3");
    }

    #[test]
    fn test_invalid_id_display() {
        let err = InspectError::InvalidId("abc".to_string());
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_cdp_error_is_transparent() {
        let err: InspectError = CdpError::SessionClosed.into();
        assert_eq!(err.to_string(), "Session closed");
    }

    #[test]
    fn test_serde_error_maps_to_export() {
        let serde_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: InspectError = serde_err.into();
        assert!(matches!(err, InspectError::Export(_)));
    }
}
