mod config;
mod policy;
mod rules;

pub use config::AssignmentConfig;
pub use policy::{AssignmentOutcome, CandidateStatus};

use serde::{Deserialize, Serialize};

use super::domain::{TaskDraft, TaskSnapshot, WorkerId, WorkerProfile};
use policy::rank_candidates;

/// Stateless screening engine applying the configured dials to a roster
/// snapshot. A pure function of its inputs: no I/O, no shared state, safe to
/// call from concurrent requests.
pub struct AssignmentEvaluator {
    config: AssignmentConfig,
}

impl AssignmentEvaluator {
    pub fn new(config: AssignmentConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    pub fn config(&self) -> &AssignmentConfig {
        &self.config
    }

    /// Screen every worker against the draft's requirements, rank the
    /// eligible ones, and explain each verdict.
    ///
    /// Every worker in the input appears in `diagnostics`, in input order,
    /// whatever its verdict. A draft with no required skills short-circuits
    /// to an empty result before any worker is examined.
    pub fn evaluate(
        &self,
        draft: &TaskDraft,
        workers: &[WorkerProfile],
        tasks: &[TaskSnapshot],
    ) -> AssignmentEvaluation {
        let mut trace = Vec::new();

        let required = rules::normalize_required(&draft.skills);
        if required.is_empty() {
            trace.push(format!(
                "Task '{}' lists no required skills; matching skipped.",
                draft.title
            ));
            let outcome = AssignmentOutcome::NoSkillsRequired;
            trace.push(outcome.summary());
            return AssignmentEvaluation {
                candidates: Vec::new(),
                top_candidate: None,
                diagnostics: Vec::new(),
                outcome,
                trace,
            };
        }

        trace.push(format!(
            "Matching workers for task '{}' ({} required skill(s): {}).",
            draft.title,
            required.len(),
            required.join(", ")
        ));

        let workload = rules::workload_by_worker(tasks);
        trace.push(format!(
            "Screening {} worker(s); open assignments counted across {} stored task(s).",
            workers.len(),
            tasks.len()
        ));

        let mut candidates = Vec::new();
        let mut diagnostics = Vec::with_capacity(workers.len());

        for worker in workers {
            let active_tasks = workload.get(&worker.id).copied().unwrap_or(0);
            let screened = rules::screen_worker(worker, &required, active_tasks, &self.config);

            trace.push(format!(
                "{}: {}/{} skill(s) matched ({:.0}%), {} active task(s) -> {}",
                worker.full_name,
                screened.match_count,
                required.len(),
                screened.match_percentage,
                active_tasks,
                screened.status.label()
            ));

            if screened.status.is_eligible() {
                candidates.push(Candidate {
                    worker_id: worker.id.clone(),
                    full_name: worker.full_name.clone(),
                    email: worker.email.clone(),
                    match_percentage: screened.match_percentage,
                    match_count: screened.match_count,
                    workload: active_tasks,
                });
            }

            diagnostics.push(CandidateDiagnostic {
                worker_id: worker.id.clone(),
                full_name: worker.full_name.clone(),
                match_percentage: screened.match_percentage,
                match_count: screened.match_count,
                required_count: required.len(),
                active_tasks,
                status: screened.status,
            });
        }

        rank_candidates(&mut candidates);

        let outcome = match candidates.first() {
            Some(top) => AssignmentOutcome::Matched {
                candidate_count: candidates.len(),
                top_name: top.full_name.clone(),
                top_percentage: top.match_percentage,
            },
            None => AssignmentOutcome::NoEligibleCandidates,
        };
        trace.push(outcome.summary());

        let top_candidate = candidates.first().cloned();

        AssignmentEvaluation {
            candidates,
            top_candidate,
            diagnostics,
            outcome,
            trace,
        }
    }
}

/// An eligible worker, carried with the figures the ranking used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub worker_id: WorkerId,
    pub full_name: String,
    pub email: String,
    pub match_percentage: f64,
    pub match_count: usize,
    pub workload: u32,
}

/// Screening record for one worker, eligible or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateDiagnostic {
    pub worker_id: WorkerId,
    pub full_name: String,
    pub match_percentage: f64,
    pub match_count: usize,
    pub required_count: usize,
    pub active_tasks: u32,
    pub status: CandidateStatus,
}

/// Full evaluation output: ranked candidates, the per-worker diagnostic
/// trail, and a verbose trace for the operator confirmation dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentEvaluation {
    pub candidates: Vec<Candidate>,
    pub top_candidate: Option<Candidate>,
    pub diagnostics: Vec<CandidateDiagnostic>,
    pub outcome: AssignmentOutcome,
    pub trace: Vec<String>,
}

impl AssignmentEvaluation {
    pub fn rendered_trace(&self) -> String {
        self.trace.join("\n")
    }
}
