use crate::host::Host;
use serde::Serialize;
use thiserror::Error;

pub const COPY_SUCCEEDED: &str = "가이드를 복사했습니다.";
pub const COPY_FAILED: &str = "복사에 실패했습니다.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    #[error("copyText API를 사용할 수 없습니다.")]
    ClipboardUnavailable,

    /// The clipboard's own failure text; may be empty.
    #[error("{0}")]
    ClipboardWriteFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyResult {
    pub success: bool,
    pub message: String,
}

impl From<Result<(), CopyError>> for CopyResult {
    fn from(outcome: Result<(), CopyError>) -> Self {
        match outcome {
            Ok(()) => CopyResult {
                success: true,
                message: COPY_SUCCEEDED.to_string(),
            },
            Err(e) => {
                let text = e.to_string();
                CopyResult {
                    success: false,
                    message: if text.is_empty() {
                        COPY_FAILED.to_string()
                    } else {
                        text
                    },
                }
            }
        }
    }
}

/// Copy `guide` through the host clipboard. Failures never escape; they come
/// back as an unsuccessful [`CopyResult`].
pub fn run<H: Host + ?Sized>(host: &mut H, guide: &str) -> CopyResult {
    let outcome = write_guide(host, guide);
    if let Err(e) = &outcome {
        tracing::warn!(error = ?e, "copy-guide failed");
    }
    outcome.into()
}

fn write_guide<H: Host + ?Sized>(host: &mut H, guide: &str) -> Result<(), CopyError> {
    let clipboard = host.clipboard().ok_or(CopyError::ClipboardUnavailable)?;
    clipboard
        .copy_text(guide)
        .map_err(|e| CopyError::ClipboardWriteFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::{MemoryHost, RecordingClipboard};

    #[test]
    fn successful_copy_reports_success() {
        let mut host = MemoryHost::new().with_clipboard(RecordingClipboard::new());
        let result = run(&mut host, "# Button guide");
        assert_eq!(
            result,
            CopyResult {
                success: true,
                message: "가이드를 복사했습니다.".into()
            }
        );
        assert_eq!(host.copied(), ["# Button guide".to_string()]);
    }

    #[test]
    fn missing_clipboard_reports_unavailable() {
        let mut host = MemoryHost::new();
        let result = run(&mut host, "guide");
        assert!(!result.success);
        assert_eq!(result.message, "copyText API를 사용할 수 없습니다.");
    }

    #[test]
    fn write_failure_reports_clipboard_message() {
        let mut host =
            MemoryHost::new().with_clipboard(RecordingClipboard::failing("permission denied"));
        let result = run(&mut host, "guide");
        assert!(!result.success);
        assert_eq!(result.message, "permission denied");
        assert!(host.copied().is_empty());
    }

    #[test]
    fn silent_write_failure_uses_generic_message() {
        let mut host = MemoryHost::new().with_clipboard(RecordingClipboard::failing(""));
        let result = run(&mut host, "guide");
        assert!(!result.success);
        assert_eq!(result.message, "복사에 실패했습니다.");
    }
}
