use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Evaluates to `true` when the given type implements `Clone`.
///
/// An inherent const on `Probe<T: Clone>` shadows the blanket trait const, so
/// the lookup only falls back to `false` when the bound does not hold.
macro_rules! implements_clone {
    ($ty:ty) => {{
        trait NotClone {
            const IS_CLONE: bool = false;
        }
        impl<T> NotClone for T {}

        #[allow(dead_code)]
        struct Probe<T>(std::marker::PhantomData<T>);

        #[allow(dead_code)]
        impl<T: Clone> Probe<T> {
            const IS_CLONE: bool = true;
        }

        <Probe<$ty>>::IS_CLONE
    }};
}
pub(crate) use implements_clone;

/// Bumps a shared counter when dropped.
pub(crate) struct DropCounter(Arc<AtomicUsize>);

impl DropCounter {
    pub(crate) fn new(counter: &Arc<AtomicUsize>) -> Self {
        DropCounter(Arc::clone(counter))
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}
