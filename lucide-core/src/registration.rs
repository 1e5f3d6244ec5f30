//! Once-only font registration guard.
//!
//! The flag starts false and flips to true after the first successful
//! attempt; it never flips back. Failed attempts are logged and leave
//! the flag false, so the next caller tries again. Attempts are
//! serialized by a mutex, so two threads racing on first use register
//! the font once.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::error::IconError;

#[derive(Debug, Default)]
pub struct RegistrationGuard {
    registered: AtomicBool,
    attempts: AtomicUsize,
    lock: Mutex<()>,
}

impl RegistrationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `attempt` unless registration already succeeded.
    ///
    /// Returns whether the font is registered afterwards.
    pub fn ensure<F>(&self, attempt: F) -> bool
    where
        F: FnOnce() -> Result<(), IconError>,
    {
        if self.registered.load(Ordering::Acquire) {
            return true;
        }

        let _serial = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have finished while we waited.
        if self.registered.load(Ordering::Acquire) {
            return true;
        }

        let attempt_no = self.attempts.fetch_add(1, Ordering::AcqRel) + 1;
        match attempt() {
            Ok(()) => {
                self.registered.store(true, Ordering::Release);
                log::debug!("Font registration succeeded on attempt {attempt_no}");
                true
            }
            Err(err) => {
                log::warn!("Font registration attempt {attempt_no} failed: {err}");
                false
            }
        }
    }

    pub fn is_registered(&self) -> bool {
        self.registered.load(Ordering::Acquire)
    }

    /// Number of registration attempts made so far.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::Acquire)
    }
}

// ===================================================================
// Tests
// ===================================================================
