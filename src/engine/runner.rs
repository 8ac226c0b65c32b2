use crate::engine::frame::FrameTap;
use crate::engine::registry::Algorithm;
use crate::foundation::core::SortConfig;
use crate::foundation::error::{SortError, SortResult};
use crate::input::is_sorted;
use crate::visualize::sink::Visualizer;
use rayon::prelude::*;

/// Result of one visualized sort run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortOutcome {
    /// Algorithm that produced the result.
    pub algorithm: Algorithm,
    /// Final sequence.
    pub sorted: Vec<u32>,
    /// Frames emitted, including the initial frame.
    pub frames: u64,
}

/// Options for [`run_batch`].
#[derive(Clone, Debug, Default)]
pub struct BatchOpts {
    /// Run the algorithms concurrently on a dedicated rayon pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// Run one algorithm end to end against a visualizer.
///
/// Calls `setup`, emits the initial frame, runs the sort, then calls `complete`. Every algorithm
/// gets exactly one initial frame here, so inputs of length 0 or 1 produce exactly one frame.
/// If the sort or a frame delivery fails, `complete` is not called.
#[tracing::instrument(skip(input, cfg, visualizer), fields(len = input.len()))]
pub fn run_sort(
    algorithm: Algorithm,
    input: Vec<u32>,
    cfg: &SortConfig,
    visualizer: &mut dyn Visualizer,
) -> SortResult<SortOutcome> {
    visualizer.setup(algorithm)?;

    let mut seq = input;
    let mut tap = FrameTap::new(visualizer);
    tap.emit(&seq);
    algorithm.sort(&mut seq, cfg, &mut tap)?;
    let frames = tap.finish()?;

    if !is_sorted(&seq) {
        tracing::warn!(%algorithm, "output is not sorted");
    }
    tracing::debug!(%algorithm, frames, "sort finished");

    visualizer.complete()?;
    Ok(SortOutcome {
        algorithm,
        sorted: seq,
        frames,
    })
}

/// Sort `seq` with no frame consumer attached and return the frame count.
pub fn sort_in_place(algorithm: Algorithm, seq: &mut Vec<u32>, cfg: &SortConfig) -> SortResult<u64> {
    let mut tap = FrameTap::detached();
    tap.emit(seq);
    algorithm.sort(seq, cfg, &mut tap)?;
    tap.finish()
}

/// Run several algorithms on copies of the same input, each against its own visualizer.
///
/// Results are returned in the order of `algorithms` regardless of completion order. The first
/// failing run aborts the batch.
#[tracing::instrument(skip(input, cfg, make_visualizer), fields(runs = algorithms.len()))]
pub fn run_batch<V, F>(
    algorithms: &[Algorithm],
    input: &[u32],
    cfg: &SortConfig,
    opts: &BatchOpts,
    make_visualizer: F,
) -> SortResult<Vec<SortOutcome>>
where
    V: Visualizer + Send,
    F: Fn(Algorithm) -> SortResult<V> + Sync,
{
    let run_one = |algorithm: Algorithm| -> SortResult<SortOutcome> {
        let mut vis = make_visualizer(algorithm)?;
        run_sort(algorithm, input.to_vec(), cfg, &mut vis)
    };

    if !opts.parallel {
        return algorithms.iter().map(|&a| run_one(a)).collect();
    }

    let pool = build_thread_pool(opts.threads)?;
    pool.install(|| algorithms.par_iter().map(|&a| run_one(a)).collect())
}

fn build_thread_pool(threads: Option<usize>) -> SortResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SortError::validation("batch 'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SortError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/engine/runner.rs"]
mod tests;
