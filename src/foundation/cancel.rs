use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation flag shared between a caller and a running conversion.
///
/// Clones observe the same flag. Face tasks poll it between rows, so a cancelled run stops within
/// one row of work per task.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a token in the "not cancelled" state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Per-run stop signal combining the caller's token with the batch abort flag raised by the first
/// failing face.
#[derive(Debug)]
pub(crate) struct StopSignal<'a> {
    cancel: &'a CancelToken,
    abort: AtomicBool,
}

impl<'a> StopSignal<'a> {
    pub(crate) fn new(cancel: &'a CancelToken) -> Self {
        Self {
            cancel,
            abort: AtomicBool::new(false),
        }
    }

    pub(crate) fn abort(&self) {
        self.abort.store(true, Ordering::Release);
    }

    pub(crate) fn is_aborted(&self) -> bool {
        self.abort.load(Ordering::Acquire)
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub(crate) fn should_stop(&self) -> bool {
        self.is_aborted() || self.is_cancelled()
    }
}
