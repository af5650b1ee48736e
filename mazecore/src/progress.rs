use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared view of a running job's progress.
#[derive(Clone, Debug)]
pub struct ProgressHandle {
    progress: Arc<Mutex<Progress>>,
}

impl ProgressHandle {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            progress: Arc::new(Mutex::new(Progress::new_empty())),
        }
    }

    pub fn lock(&self) -> MutexGuard<Progress> {
        // plain counters, poisoning is harmless
        self.progress.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn progress(&self) -> Progress {
        *self.lock()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub from: usize,
    pub is_done: bool,
}

impl Progress {
    pub fn new(done: usize, from: usize) -> Self {
        Self {
            done,
            from,
            is_done: false,
        }
    }

    pub fn new_empty() -> Self {
        Self::new(0, 0)
    }

    pub fn percent(&self) -> f32 {
        if self.from == 0 {
            return if self.is_done { 1.0 } else { 0.0 };
        }
        self.done as f32 / self.from as f32
    }

    pub fn finish(&mut self) {
        self.done = self.from;
        self.is_done = true;
    }

    pub fn combine(&self, other: &Self) -> Self {
        Self {
            done: self.done + other.done,
            from: self.from + other.from,
            is_done: self.is_done && other.is_done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_between_clones() {
        let handle = ProgressHandle::new();
        let worker = handle.clone();

        worker.lock().from = 10;
        worker.lock().done = 4;
        assert_eq!(handle.progress(), Progress::new(4, 10));
        assert!((handle.progress().percent() - 0.4).abs() < f32::EPSILON);

        worker.lock().finish();
        assert!(handle.progress().is_done);
        assert_eq!(handle.progress().done, 10);
    }

    #[test]
    fn combine() {
        let mut a = Progress::new(1, 2);
        a.finish();
        let b = Progress::new(3, 4);

        let both = a.combine(&b);
        assert_eq!((both.done, both.from, both.is_done), (5, 6, false));
        assert_eq!(Progress::new_empty().percent(), 0.0);
    }
}
