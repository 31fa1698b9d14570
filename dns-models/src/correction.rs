//! Deferred units of corrective work

use std::fmt;

use serde::Serialize;

/// Error type returned by a correction action.
pub type CorrectionError = Box<dyn std::error::Error + Send + Sync>;

/// Result of running a correction.
pub type CorrectionResult = std::result::Result<(), CorrectionError>;

type Action = Box<dyn FnOnce() -> CorrectionResult + Send>;

/// A described, deferred change built by a diff engine and run by its caller.
///
/// The action is consumed by [`run`](Self::run), so a correction can be
/// executed at most once. Ordering and retries are up to the caller.
#[derive(Serialize)]
pub struct Correction {
    /// Human-readable description of the change.
    pub msg: String,
    #[serde(skip)]
    action: Action,
}

impl Correction {
    pub fn new<F>(msg: impl Into<String>, action: F) -> Self
    where
        F: FnOnce() -> CorrectionResult + Send + 'static,
    {
        Self {
            msg: msg.into(),
            action: Box::new(action),
        }
    }

    /// Execute the action.
    pub fn run(self) -> CorrectionResult {
        log::debug!("Running correction: {}", self.msg);
        let result = (self.action)();
        if let Err(e) = &result {
            log::warn!("Correction failed: {} ({e})", self.msg);
        }
        result
    }
}

impl fmt::Debug for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Correction")
            .field("msg", &self.msg)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.msg)
    }
}
