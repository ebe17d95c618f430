use thiserror::Error;

// Errno values referenced by the variant mapping. The core crate stays
// platform-agnostic, so these are spelled out rather than pulled from libc;
// the values are the POSIX ones every supported platform uses.
const ENOENT: i32 = 2;
const EIO: i32 = 5;
const EINVAL: i32 = 22;

/// Errors surfaced by PCM control operations.
///
/// Every variant has an errno equivalent, reachable through
/// [`PcmError::os_code`], so callers that speak raw platform codes can
/// keep doing so.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PcmError {
    /// Operation attempted on a handle with no open descriptor. The
    /// transport is never touched in this case.
    #[error("device is not open")]
    NotOpen,

    /// The platform rejected the request; carries the raw errno.
    #[error("{}", describe_os_error(*.0))]
    Os(i32),

    /// A framed transfer was rejected by the device. Nothing was moved.
    #[error("interleaved transfer rejected by device")]
    TransferFailed,
}

impl PcmError {
    /// Wrap a raw errno reported by the platform.
    pub fn from_os(code: i32) -> Self {
        Self::Os(code)
    }

    /// The errno equivalent of this error.
    pub fn os_code(&self) -> i32 {
        match self {
            Self::NotOpen => ENOENT,
            Self::Os(code) => *code,
            Self::TransferFailed => EINVAL,
        }
    }
}

impl From<std::io::Error> for PcmError {
    fn from(err: std::io::Error) -> Self {
        Self::Os(err.raw_os_error().unwrap_or(EIO))
    }
}

/// Text for a raw platform error code.
///
/// Code `0` reads `"Success"`; any other code is described using the
/// platform's own error text.
pub fn describe_os_error(code: i32) -> String {
    if code == 0 {
        "Success".to_string()
    } else {
        std::io::Error::from_raw_os_error(code).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_zero_is_success() {
        assert_eq!(describe_os_error(0), "Success");
    }

    #[test]
    fn nonzero_code_uses_platform_text() {
        let text = describe_os_error(EINVAL);
        assert_ne!(text, "Success");
        assert!(text.contains("os error 22"));
    }

    #[test]
    fn os_code_round_trips() {
        assert_eq!(PcmError::from_os(13).os_code(), 13);
    }

    #[test]
    fn variants_map_to_errno_classes() {
        assert_eq!(PcmError::NotOpen.os_code(), ENOENT);
        assert_eq!(PcmError::TransferFailed.os_code(), EINVAL);
    }

    #[test]
    fn io_error_conversion_keeps_code() {
        let err = std::io::Error::from_raw_os_error(ENOENT);
        assert_eq!(PcmError::from(err), PcmError::Os(ENOENT));
    }

    #[test]
    fn display_describes_os_code() {
        assert!(PcmError::Os(EINVAL).to_string().contains("os error 22"));
        assert_eq!(PcmError::NotOpen.to_string(), "device is not open");
    }
}
