use std::{
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use mazecore::{Progress, ProgressHandle};

const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Work running on its own thread, its result is only reachable once it's finished.
pub struct RunningJob<R> {
    pub handle: JoinHandle<R>,
    pub progress: ProgressHandle,
}

impl<R: Send + 'static> RunningJob<R> {
    pub fn spawn(task: impl FnOnce(ProgressHandle) -> R + Send + 'static) -> Self {
        let progress = ProgressHandle::new();
        let progress_clone = progress.clone();
        let handle = thread::spawn(move || task(progress_clone));

        RunningJob { handle, progress }
    }

    pub fn progress(&self) -> Progress {
        self.progress.progress()
    }

    /// Blocks until the job is done, calling `report` every `interval` in the meantime.
    ///
    /// Returns `None` if the job panicked.
    pub fn wait(self, interval: Duration, mut report: impl FnMut(Progress)) -> Option<R> {
        let mut last_report = Instant::now();
        while !self.handle.is_finished() {
            thread::sleep(POLL_INTERVAL.min(interval));
            if last_report.elapsed() >= interval {
                report(self.progress());
                last_report = Instant::now();
            }
        }

        self.handle.join().ok()
    }
}
