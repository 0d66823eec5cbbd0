//! Transient notifications.
//!
//! Toasts are shown until their deadline passes; `active` prunes the
//! expired ones so nothing needs to dismiss them explicitly.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

#[derive(Debug)]
pub struct Notifier {
    duration: Duration,
    toasts: Vec<Toast>,
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            toasts: Vec::new(),
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push_at(message, ToastKind::Success, Instant::now());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push_at(message, ToastKind::Error, Instant::now());
    }

    pub fn push_at(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        self.toasts.push(Toast {
            message: message.into(),
            kind,
            expires_at: now + self.duration,
        });
    }

    /// Toasts still visible at `now`. Expired toasts are dropped.
    pub fn active(&mut self, now: Instant) -> Vec<Toast> {
        self.toasts.retain(|t| t.expires_at > now);
        self.toasts.clone()
    }
}
