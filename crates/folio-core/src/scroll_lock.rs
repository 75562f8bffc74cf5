//! Document-level scroll lock.
//!
//! Overlays (the mobile menu, the detail panel, the lightbox) suppress page
//! scrolling while they are open. Each holder keeps a [`ScrollLockGuard`];
//! the page is locked while any guard is alive. Releasing happens on drop,
//! so replacing or tearing down an overlay state can never leak a lock.

use std::cell::Cell;
use std::rc::Rc;

/// Shared lock counter. Cloning yields a handle to the same lock.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a hold on the lock.
    pub fn acquire(&self) -> ScrollLockGuard {
        self.holders.set(self.holders.get() + 1);
        ScrollLockGuard {
            holders: Rc::clone(&self.holders),
        }
    }

    /// Whether page scrolling is currently suppressed.
    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    /// Number of live guards.
    pub fn holders(&self) -> usize {
        self.holders.get()
    }
}

/// A live hold on the [`ScrollLock`]. Released on drop.
#[derive(Debug)]
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    holders: Rc<Cell<usize>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.holders.set(self.holders.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unlocked() {
        let lock = ScrollLock::new();
        assert!(!lock.is_locked());
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn guard_locks_until_dropped() {
        let lock = ScrollLock::new();
        let g = lock.acquire();
        assert!(lock.is_locked());
        drop(g);
        assert!(!lock.is_locked());
    }

    #[test]
    fn nested_guards_release_independently() {
        let lock = ScrollLock::new();
        let menu = lock.acquire();
        let modal = lock.acquire();
        assert_eq!(lock.holders(), 2);
        drop(menu);
        assert!(lock.is_locked());
        drop(modal);
        assert!(!lock.is_locked());
    }

    #[test]
    fn clones_share_state() {
        let lock = ScrollLock::new();
        let other = lock.clone();
        let _g = other.acquire();
        assert!(lock.is_locked());
    }

    #[test]
    fn replacing_an_option_releases() {
        let lock = ScrollLock::new();
        let mut slot = Some(lock.acquire());
        assert!(lock.is_locked());
        drop(slot.take());
        assert!(slot.is_none());
        assert!(!lock.is_locked());
    }
}
