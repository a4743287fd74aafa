//! Running engine calls against a wall-clock budget

use log::warn;

use std::sync::mpsc::{channel, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crate::error::EngineError;

/// Runs `work` on a worker thread and waits at most `limit` for its answer
///
/// A worker that overruns is detached: it keeps its own copies of its inputs,
/// and whatever it eventually produces is dropped.
pub fn run_with_deadline<T, F>(limit: Duration, work: F) -> Result<T, EngineError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = channel();

    thread::Builder::new()
        .name("engine-worker".into())
        .spawn(move || {
            // the receiver is gone if the deadline already passed
            let _ = tx.send(work());
        })
        .map_err(|_| EngineError::WorkerFailed)?;

    match rx.recv_timeout(limit) {
        Ok(value) => Ok(value),
        Err(RecvTimeoutError::Timeout) => {
            warn!("engine worker exceeded {:?}, abandoning it", limit);
            Err(EngineError::Timeout { limit })
        }
        Err(RecvTimeoutError::Disconnected) => Err(EngineError::WorkerFailed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_value_within_limit() {
        assert_eq!(run_with_deadline(Duration::from_secs(5), || 6 * 7), Ok(42));
    }

    #[test]
    fn abandons_slow_worker() {
        let limit = Duration::from_millis(20);
        let result = run_with_deadline(limit, || {
            thread::sleep(Duration::from_millis(500));
            1
        });
        assert_eq!(result, Err(EngineError::Timeout { limit }));
    }

    #[test]
    fn reports_panicking_worker() {
        let result: Result<(), _> =
            run_with_deadline(Duration::from_secs(5), || panic!("worker died"));
        assert_eq!(result, Err(EngineError::WorkerFailed));
    }
}
