/// How many pixels a render worker processes between cancellation checks.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

/// Returned instead of a frame when a render was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "render cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Polled by render workers; once it reports `true` the render is stale.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

    // Walks a row the way the renderer does, polling at each check interval.
    fn pixels_processed<C: CancelToken>(row_len: usize, cancel: &C) -> Result<usize, Cancelled> {
        for x in 0..row_len {
            if x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                return Err(Cancelled);
            }
        }

        Ok(row_len)
    }

    #[test]
    fn never_cancel_lets_every_row_finish() {
        assert_eq!(pixels_processed(5000, &NeverCancel), Ok(5000));
    }

    #[test]
    fn generation_token_goes_stale_once_a_newer_request_arrives() {
        let generation = AtomicU64::new(0);
        let job_generation = generation.fetch_add(1, Ordering::SeqCst) + 1;
        let token = || generation.load(Ordering::Relaxed) != job_generation;

        assert_eq!(pixels_processed(CANCEL_CHECK_INTERVAL_PIXELS * 3, &token), Ok(3072));

        generation.fetch_add(1, Ordering::SeqCst);
        assert_eq!(pixels_processed(CANCEL_CHECK_INTERVAL_PIXELS * 3, &token), Err(Cancelled));
    }

    #[test]
    fn shutdown_cancels_even_the_current_generation() {
        let generation = AtomicU64::new(7);
        let shutdown = AtomicBool::new(false);
        let token = || {
            shutdown.load(Ordering::Relaxed) || generation.load(Ordering::Relaxed) != 7
        };

        assert!(!token.is_cancelled());

        shutdown.store(true, Ordering::Relaxed);
        assert!(token.is_cancelled());
    }

    #[test]
    fn cancellation_is_noticed_at_the_next_check_interval() {
        let polls = AtomicU64::new(0);
        // cancelled from the second poll onwards
        let token = || polls.fetch_add(1, Ordering::Relaxed) >= 1;

        let result = pixels_processed(CANCEL_CHECK_INTERVAL_PIXELS * 4, &token);

        assert_eq!(result, Err(Cancelled));
        assert_eq!(polls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn cancelled_display() {
        assert_eq!(Cancelled.to_string(), "render cancelled");
    }
}
