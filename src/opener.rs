//! Opening result URLs in a local browser.

use crate::error::{GiphyError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Something that can show a URL to the user.
pub trait UrlOpener: Send + Sync {
    /// Opens `url`. Failures are reported, never fatal to the caller.
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the platform launcher (`open`, `xdg-open` or `start`).
#[derive(Debug, Clone)]
pub struct SystemOpener {
    name: String,
    program: Option<PathBuf>,
    args: Vec<String>,
}

impl SystemOpener {
    /// Selects the launcher for the current platform and resolves it on `PATH`.
    pub fn detect() -> Self {
        match platform_launcher() {
            Some((name, args)) => Self::with_command(name, args),
            None => Self {
                name: "browser launcher".into(),
                program: None,
                args: Vec::new(),
            },
        }
    }

    /// Uses `program` with leading `args`; the URL is appended last.
    pub fn with_command(program: &str, args: &[&str]) -> Self {
        let resolved = which::which(program).ok();
        if resolved.is_none() {
            tracing::debug!(program, "launcher not found on PATH");
        }
        Self {
            name: program.to_string(),
            program: resolved,
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// True when the launcher was found.
    pub fn is_available(&self) -> bool {
        self.program.is_some()
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        let program = self
            .program
            .as_ref()
            .ok_or_else(|| GiphyError::Open(format!("missing package {}", self.name)))?;

        let status = Command::new(program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| GiphyError::Open(format!("{}: {e}", self.name)))?;

        if !status.success() {
            return Err(GiphyError::Open(format!("{} exited with {status}", self.name)));
        }
        Ok(())
    }
}

fn platform_launcher() -> Option<(&'static str, &'static [&'static str])> {
    const NO_ARGS: &[&str] = &[];
    // `start` is a cmd builtin; the empty string is the window title.
    const WINDOWS_START: &[&str] = &["/C", "start", ""];

    if cfg!(target_os = "macos") {
        Some(("open", NO_ARGS))
    } else if cfg!(target_os = "windows") {
        Some(("cmd", WINDOWS_START))
    } else if cfg!(any(
        target_os = "linux",
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd",
        target_os = "dragonfly"
    )) {
        Some(("xdg-open", NO_ARGS))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_launcher() {
        let opener = SystemOpener::with_command("giphy-test-no-such-launcher", &[]);
        assert!(!opener.is_available());

        let err = opener.open("https://example.com").unwrap_err();
        assert!(matches!(err, GiphyError::Open(_)));
        assert!(err.to_string().contains("giphy-test-no-such-launcher"));
    }

    #[test]
    fn test_platform_launcher_known() {
        if cfg!(any(target_os = "linux", target_os = "macos", target_os = "windows")) {
            assert!(platform_launcher().is_some());
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_launcher_success_and_failure() {
        let ok = SystemOpener::with_command("true", &[]);
        assert!(ok.open("https://example.com").is_ok());

        let failing = SystemOpener::with_command("false", &[]);
        let err = failing.open("https://example.com").unwrap_err();
        assert!(err.to_string().contains("exited with"));
    }
}
