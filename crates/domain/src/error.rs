//! Common error types used across the workspace.
//!
//! Each failure has its own typed error carrying the data needed to report
//! it; [`SmartHubError`] gathers them with `#[from]` conversions so callers
//! can propagate with `?`.

use crate::device::DeviceKind;

/// Top-level error returned by hub, device, and factory operations.
#[derive(Debug, thiserror::Error)]
pub enum SmartHubError {
    /// The factory was handed a type tag it does not recognise.
    #[error(transparent)]
    UnknownKind(#[from] UnknownKindError),

    /// An access-control proxy refused the call.
    #[error(transparent)]
    AccessDenied(#[from] AccessDeniedError),

    /// The device does not offer the requested operation.
    #[error(transparent)]
    Unsupported(#[from] UnsupportedOperationError),
}

/// A device type tag that matches none of the known kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown device type: {tag}")]
pub struct UnknownKindError {
    pub tag: String,
}

/// A gated call was rejected by an access-control proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("access denied to {kind}")]
pub struct AccessDeniedError {
    pub kind: DeviceKind,
}

/// An operation was invoked on a device kind that does not support it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} does not support {operation}")]
pub struct UnsupportedOperationError {
    pub kind: DeviceKind,
    pub operation: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_unknown_kind_with_tag() {
        let err = UnknownKindError {
            tag: "toaster".to_string(),
        };
        assert_eq!(err.to_string(), "unknown device type: toaster");
    }

    #[test]
    fn should_display_access_denied_with_kind() {
        let err = AccessDeniedError {
            kind: DeviceKind::DoorLock,
        };
        assert_eq!(err.to_string(), "access denied to DoorLock");
    }

    #[test]
    fn should_convert_access_denied_into_top_level_error() {
        let err: SmartHubError = AccessDeniedError {
            kind: DeviceKind::Light,
        }
        .into();
        assert!(matches!(
            err,
            SmartHubError::AccessDenied(AccessDeniedError {
                kind: DeviceKind::Light
            })
        ));
    }

    #[test]
    fn should_display_inner_message_without_repeating_it() {
        use std::error::Error;

        let err: SmartHubError = UnsupportedOperationError {
            kind: DeviceKind::Light,
            operation: "set_temperature",
        }
        .into();
        assert_eq!(err.to_string(), "Light does not support set_temperature");
        assert!(err.source().is_none());
    }

    #[test]
    fn should_display_access_denied_once_through_top_level_error() {
        let err: SmartHubError = AccessDeniedError {
            kind: DeviceKind::DoorLock,
        }
        .into();
        assert_eq!(err.to_string(), "access denied to DoorLock");
    }
}
