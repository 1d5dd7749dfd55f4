//! Suspend rendering while the text field has focus.
//!
//! ```text
//! Idle --focus--> Focused { pending: false }
//! Focused --render requested--> Focused { pending: true }
//! Focused { pending } --blur--> Idle (flush if pending)
//! ```

/// Whether a render request should run now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderDecision {
    Apply,
    Defer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusGuard {
    #[default]
    Idle,
    Focused {
        pending: bool,
    },
}

impl FocusGuard {
    pub fn new() -> Self {
        Self::Idle
    }

    /// The text field gained focus. A pending flag survives a repeated focus.
    pub fn on_focus(&mut self) {
        if let Self::Idle = self {
            *self = Self::Focused { pending: false };
        }
    }

    /// The text field lost focus. Returns `true` if a deferred render must run now.
    pub fn on_blur(&mut self) -> bool {
        let flush = matches!(self, Self::Focused { pending: true });
        *self = Self::Idle;
        flush
    }

    /// Ask to render. While focused the request is recorded instead.
    pub fn request(&mut self) -> RenderDecision {
        match self {
            Self::Idle => RenderDecision::Apply,
            Self::Focused { pending } => {
                *pending = true;
                RenderDecision::Defer
            }
        }
    }

    pub fn is_focused(&self) -> bool {
        matches!(self, Self::Focused { .. })
    }

    pub fn has_pending(&self) -> bool {
        matches!(self, Self::Focused { pending: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_applies_immediately() {
        let mut guard = FocusGuard::new();
        assert_eq!(guard.request(), RenderDecision::Apply);
        assert!(!guard.on_blur());
    }

    #[test]
    fn focused_defers_and_flushes_once() {
        let mut guard = FocusGuard::new();
        guard.on_focus();
        assert_eq!(guard.request(), RenderDecision::Defer);
        assert_eq!(guard.request(), RenderDecision::Defer);
        assert!(guard.has_pending());

        assert!(guard.on_blur());
        assert!(!guard.on_blur());
        assert_eq!(guard, FocusGuard::Idle);
    }

    #[test]
    fn blur_without_request_does_not_flush() {
        let mut guard = FocusGuard::new();
        guard.on_focus();
        assert!(guard.is_focused());
        assert!(!guard.on_blur());
    }

    #[test]
    fn refocus_keeps_pending() {
        let mut guard = FocusGuard::new();
        guard.on_focus();
        guard.request();
        guard.on_focus();
        assert!(guard.has_pending());
    }
}
