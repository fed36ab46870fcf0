use crate::error::{CompdocError, Result};
use crate::host::Clipboard;
use std::io::Write;
use std::process::{Command, Stdio};

/// Writes to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        #[cfg(target_os = "macos")]
        {
            pipe_to("pbcopy", &[], text)
        }

        #[cfg(target_os = "linux")]
        {
            // Try xclip first, then xsel
            match pipe_to("xclip", &["-selection", "clipboard"], text) {
                Err(CompdocError::Clipboard(first)) if first.starts_with("Failed to spawn") => {
                    pipe_to("xsel", &["--clipboard", "--input"], text).map_err(|e| {
                        CompdocError::Clipboard(format!("{}. Install xclip or xsel.", e))
                    })
                }
                result => result,
            }
        }

        #[cfg(target_os = "windows")]
        {
            pipe_to("clip", &[], text)
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            let _ = text;
            Err(CompdocError::Clipboard(
                "Clipboard not supported on this platform".to_string(),
            ))
        }
    }
}

/// Spawn `program`, feed `text` on its stdin and wait for a clean exit.
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .map_err(|e| CompdocError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(|e| {
            CompdocError::Clipboard(format!("Failed to write to {}: {}", program, e))
        })?;
    }

    let status = child.wait().map_err(|e| {
        CompdocError::Clipboard(format!("Failed to wait for {}: {}", program, e))
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(CompdocError::Clipboard(format!(
            "{} exited with error",
            program
        )))
    }
}
