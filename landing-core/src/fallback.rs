//! One-shot image fallback.

use tracing::debug;

/// Hands out a placeholder image URL once, for the first load failure of one
/// image element. Later failures (including a failing placeholder) get `None`,
/// so an error handler cannot loop.
#[derive(Debug, Clone)]
pub struct ImageFallback {
    placeholder: &'static str,
    fired: bool,
}

impl ImageFallback {
    pub const fn new(placeholder: &'static str) -> Self {
        Self {
            placeholder,
            fired: false,
        }
    }

    /// The placeholder on the first call, `None` on every call after.
    pub fn take(&mut self) -> Option<&'static str> {
        if self.fired {
            return None;
        }
        self.fired = true;
        debug!(placeholder = self.placeholder, "image failed, using placeholder");
        Some(self.placeholder)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
