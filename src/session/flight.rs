//! Single-flight gate: at most one store-backed transition at a time.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared busy flag.
///
/// Clones observe the same flag, so the presentation layer can disable its
/// controls while the session holds a permit.
#[derive(Debug, Clone, Default)]
pub struct SingleFlight {
    busy: Arc<AtomicBool>,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the session busy, or returns `None` if it already is.
    pub fn try_begin(&self) -> Option<FlightPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| FlightPermit {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Clears the busy flag when dropped, including when the transition's
/// future is dropped before completing.
#[derive(Debug)]
pub struct FlightPermit {
    busy: Arc<AtomicBool>,
}

impl Drop for FlightPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_refused_until_permit_drops() {
        let flight = SingleFlight::new();
        let permit = flight.try_begin().expect("first begin should succeed");
        assert!(flight.is_busy());
        assert!(flight.try_begin().is_none());

        drop(permit);
        assert!(!flight.is_busy());
        assert!(flight.try_begin().is_some());
    }

    #[test]
    fn clones_share_the_flag() {
        let flight = SingleFlight::new();
        let observer = flight.clone();
        let _permit = flight.try_begin().unwrap();
        assert!(observer.is_busy());
        assert!(observer.try_begin().is_none());
    }
}
