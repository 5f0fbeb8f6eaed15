use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Copy)]
pub struct LeakStats {
    pub vectors_allocated: usize,
    pub vectors_dropped: usize,
}

impl LeakStats {
    /// Vectors allocated but not yet torn down.
    pub fn live_vectors(&self) -> usize {
        self.vectors_allocated - self.vectors_dropped
    }
}

static VECTORS_ALLOCATED: AtomicUsize = AtomicUsize::new(0);
static VECTORS_DROPPED: AtomicUsize = AtomicUsize::new(0);

pub fn record_vector_alloc() {
    VECTORS_ALLOCATED.fetch_add(1, Ordering::Relaxed);
}

pub fn record_vector_drop() {
    VECTORS_DROPPED.fetch_add(1, Ordering::Relaxed);
}

pub fn snapshot() -> LeakStats {
    LeakStats {
        vectors_allocated: VECTORS_ALLOCATED.load(Ordering::Relaxed),
        vectors_dropped: VECTORS_DROPPED.load(Ordering::Relaxed),
    }
}
