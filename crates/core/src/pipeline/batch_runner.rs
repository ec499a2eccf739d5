use std::thread;

use crate::pipeline::blur_detector::BlurDetector;
use crate::pipeline::process_result::ProcessResult;

/// Scores a list of identifiers, capturing each failure in its own entry.
///
/// Output always has one entry per input, in input order. With more than one
/// worker, identifiers are pulled from a shared queue by scoped threads and
/// reassembled by index.
pub struct BatchRunner {
    workers: usize,
}

impl BatchRunner {
    /// `workers` below 1 is treated as 1.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn sequential() -> Self {
        Self::new(1)
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn run<S>(&self, identifiers: &[S], detector: &BlurDetector) -> Vec<ProcessResult>
    where
        S: AsRef<str> + Sync,
    {
        log::info!(
            "Scoring {} image(s) with {} worker(s)",
            identifiers.len(),
            self.workers.min(identifiers.len().max(1))
        );
        let results = if self.workers <= 1 || identifiers.len() <= 1 {
            identifiers
                .iter()
                .map(|id| process_one(detector, id.as_ref()))
                .collect()
        } else {
            self.run_parallel(identifiers, detector)
        };
        let failed = results.iter().filter(|r| r.is_failure()).count();
        log::info!("Finished: {} scored, {failed} failed", results.len() - failed);
        results
    }

    fn run_parallel<S>(&self, identifiers: &[S], detector: &BlurDetector) -> Vec<ProcessResult>
    where
        S: AsRef<str> + Sync,
    {
        let (job_tx, job_rx) = crossbeam_channel::unbounded::<(usize, &str)>();
        let (result_tx, result_rx) = crossbeam_channel::unbounded::<(usize, ProcessResult)>();

        for (index, id) in identifiers.iter().enumerate() {
            if job_tx.send((index, id.as_ref())).is_err() {
                break;
            }
        }
        drop(job_tx);

        thread::scope(|scope| {
            for _ in 0..self.workers.min(identifiers.len()) {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move || {
                    for (index, id) in job_rx {
                        if result_tx.send((index, process_one(detector, id))).is_err() {
                            break;
                        }
                    }
                });
            }
        });
        drop(result_tx);

        let mut slots: Vec<Option<ProcessResult>> = vec![None; identifiers.len()];
        for (index, result) in result_rx {
            slots[index] = Some(result);
        }
        slots.into_iter().flatten().collect()
    }
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::sequential()
    }
}

fn process_one(detector: &BlurDetector, identifier: &str) -> ProcessResult {
    match detector.process(identifier) {
        Ok(report) => ProcessResult::Scored(report),
        Err(e) => {
            log::warn!("{e}");
            ProcessResult::failed(identifier, &e)
        }
    }
}
