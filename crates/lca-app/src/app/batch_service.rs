//! Batch analysis over worker threads
//!
//! Workers pull the next request from a shared index and append to the same
//! history, so history order is completion order. Outcomes are returned in
//! file order.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;

use lca_domain::model::AnalysisResult;
use lca_domain::repository::{AnalysisHistoryRepository, ImpactTable};
use lca_infra::AnalysisRequest;
use serde::Serialize;
use tracing::{debug, warn};

use super::analysis_service::AnalysisService;

/// Result of one batch row
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub request: AnalysisRequest,
    pub result: std::result::Result<AnalysisResult, String>,
}

/// All outcomes of a batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub outcomes: Vec<BatchOutcome>,
    pub successful: usize,
    pub failed: usize,
}

/// Analyze every request with `jobs` worker threads
///
/// `on_done` is called from the worker thread after each request.
pub fn run_batch<T, H, F>(
    service: &AnalysisService<T, H>,
    requests: &[AnalysisRequest],
    jobs: usize,
    on_done: F,
) -> BatchSummary
where
    T: ImpactTable + Sync,
    H: AnalysisHistoryRepository + Sync,
    F: Fn(&BatchOutcome) + Sync,
{
    let jobs = jobs.clamp(1, requests.len().max(1));
    let next_index = AtomicUsize::new(0);
    let results: Mutex<Vec<BatchOutcome>> = Mutex::new(Vec::with_capacity(requests.len()));

    thread::scope(|scope| {
        for worker_id in 0..jobs {
            let next_index = &next_index;
            let results = &results;
            let on_done = &on_done;

            scope.spawn(move || loop {
                let idx = next_index.fetch_add(1, Ordering::SeqCst);
                let Some(request) = requests.get(idx) else {
                    break;
                };

                debug!(worker_id, row = request.row, material = %request.material, "batch row");
                let result = service
                    .analyze(&request.material, request.quantity)
                    .map_err(|e| e.to_string());
                if let Err(ref e) = result {
                    warn!(row = request.row, error = %e, "batch row failed");
                }

                let outcome = BatchOutcome {
                    request: request.clone(),
                    result,
                };
                on_done(&outcome);
                results
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(outcome);
            });
        }
    });

    let mut outcomes = results.into_inner().unwrap_or_else(PoisonError::into_inner);
    outcomes.sort_by_key(|o| o.request.row);

    let successful = outcomes.iter().filter(|o| o.result.is_ok()).count();
    let failed = outcomes.len() - successful;

    BatchSummary {
        outcomes,
        successful,
        failed,
    }
}
