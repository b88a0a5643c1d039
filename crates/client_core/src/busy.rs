use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Shared "submission in flight" marker. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Sets the flag if it was clear. The returned guard clears it again on drop.
    pub(crate) fn try_acquire(&self) -> Option<BusyGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(self.0.clone()))
    }
}

pub(crate) struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_fails_until_guard_drops() {
        let flag = BusyFlag::default();
        let guard = flag.try_acquire().expect("first acquire");
        assert!(flag.is_set());
        assert!(flag.try_acquire().is_none());

        drop(guard);
        assert!(!flag.is_set());
        assert!(flag.try_acquire().is_some());
    }

    #[test]
    fn clones_share_state() {
        let flag = BusyFlag::default();
        let observer = flag.clone();
        let _guard = flag.try_acquire().expect("acquire");
        assert!(observer.is_set());
    }
}
