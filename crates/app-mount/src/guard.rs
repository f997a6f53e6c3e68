//! The "has the app been mounted" flag.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{BootstrapError, Result};

/// Guard backing [`crate::bootstrap`]. One per process.
pub static GLOBAL_GUARD: MountGuard = MountGuard::new();

/// Allows at most one successful mount.
#[derive(Debug, Default)]
pub struct MountGuard {
    mounted: AtomicBool,
}

impl MountGuard {
    pub const fn new() -> Self {
        Self {
            mounted: AtomicBool::new(false),
        }
    }

    /// Claim the guard, failing if it is already held.
    pub fn claim(&self) -> Result<()> {
        self.mounted
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| BootstrapError::AlreadyMounted)
    }

    /// Give the guard back after a bootstrap that did not mount. Only the
    /// bootstrap's failure path may call this.
    pub(crate) fn release(&self) {
        self.mounted.store(false, Ordering::Release);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_once() {
        let guard = MountGuard::new();
        assert!(!guard.is_mounted());
        guard.claim().unwrap();
        assert!(guard.is_mounted());
        assert_eq!(guard.claim(), Err(BootstrapError::AlreadyMounted));
    }

    #[test]
    fn test_release_allows_reclaim() {
        let guard = MountGuard::new();
        guard.claim().unwrap();
        guard.release();
        assert!(!guard.is_mounted());
        assert!(guard.claim().is_ok());
    }
}
