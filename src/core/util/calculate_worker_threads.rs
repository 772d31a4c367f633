use std::num::NonZeroUsize;

/// Size of the worker pool for a render of `tile_count` tiles.
///
/// Uses `requested` when given, otherwise the machine's available parallelism,
/// and never more workers than there are tiles to hand out.
#[must_use]
pub fn calculate_worker_threads(requested: Option<NonZeroUsize>, tile_count: usize) -> usize {
    let num_avail_threads = requested
        .or_else(|| std::thread::available_parallelism().ok())
        .map_or(1, NonZeroUsize::get);

    num_avail_threads.min(tile_count).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_threads_are_used() {
        assert_eq!(calculate_worker_threads(NonZeroUsize::new(3), 100), 3);
    }

    #[test]
    fn test_threads_never_exceed_tiles() {
        assert_eq!(calculate_worker_threads(NonZeroUsize::new(16), 4), 4);
        assert_eq!(calculate_worker_threads(NonZeroUsize::new(16), 1), 1);
    }

    #[test]
    fn test_at_least_one_thread() {
        assert_eq!(calculate_worker_threads(NonZeroUsize::new(8), 0), 1);
    }

    #[test]
    fn test_sanity_check_available_parallelism() {
        let num_avail_threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        assert_eq!(
            calculate_worker_threads(None, usize::MAX),
            num_avail_threads
        );
    }
}
