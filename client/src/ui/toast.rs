use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: Instant,
    pub expires_at: Instant,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message.into(), Duration::from_secs(3))
    }

    // Errors linger longer.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message.into(), Duration::from_secs(6))
    }

    fn new(kind: ToastKind, message: String, lifetime: Duration) -> Self {
        let created_at = Instant::now();
        Self {
            kind,
            message,
            created_at,
            expires_at: created_at + lifetime,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Transient notifications, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, toast: Toast) {
        self.items.push(toast);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Toast::success(message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Toast::error(message));
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|toast| !toast.is_expired(now));
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn last(&self) -> Option<&Toast> {
        self.items.last()
    }
}
