//! Session notifications: desktop alerts, the terminal bell and in-app toasts.
//!
//! Desktop alerts use osascript on macOS and notify-send on Linux; elsewhere
//! they are a no-op. Failures are ignored.

use crate::domain::SoundType;
use std::io::Write;
use std::time::{Duration, Instant};

#[cfg(any(target_os = "macos", target_os = "linux"))]
use std::process::Command;

/// How long a toast stays visible
pub const TOAST_TTL: Duration = Duration::from_secs(5);

/// Outbound side of session notifications
pub trait Notifier {
    /// Best-effort desktop notification
    fn desktop(&mut self, title: &str, message: &str);

    /// Audible cue for the configured sound
    fn ring(&mut self, sound: SoundType);
}

/// Notifier backed by the host OS and the controlling terminal
#[derive(Debug, Default)]
pub struct SystemNotifier;

impl Notifier for SystemNotifier {
    fn desktop(&mut self, title: &str, message: &str) {
        #[cfg(target_os = "macos")]
        {
            let script = format!(
                r#"display notification "{}" with title "Tempo - {}""#,
                message.replace('"', "\\\""),
                title.replace('"', "\\\"")
            );

            let _ = Command::new("osascript").arg("-e").arg(&script).output();
        }

        #[cfg(target_os = "linux")]
        {
            let _ = Command::new("notify-send")
                .arg(format!("Tempo - {}", title))
                .arg(message)
                .output();
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux")))]
        {
            // No-op on other platforms
            let _ = (title, message);
        }
    }

    fn ring(&mut self, sound: SoundType) {
        let bells = "\x07".repeat(sound.rings());
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(bells.as_bytes());
        let _ = stdout.flush();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub expires_at: Instant,
}

/// Transient in-app messages, newest last
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    ttl: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(TOAST_TTL)
    }
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            ttl,
        }
    }

    pub fn push(&mut self, title: &str, message: &str, severity: Severity) {
        self.push_at(title, message, severity, Instant::now());
    }

    pub fn push_at(&mut self, title: &str, message: &str, severity: Severity, now: Instant) {
        self.toasts.push(Toast {
            title: title.to_string(),
            message: message.to_string(),
            severity,
            expires_at: now + self.ttl,
        });
    }

    /// Drop expired toasts
    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
pub use recording::RecordingNotifier;
