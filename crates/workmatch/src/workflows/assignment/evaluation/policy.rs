use serde::{Deserialize, Serialize};

use super::super::domain::AccountStatus;
use super::Candidate;

/// Screening verdict for one worker, decided in strict priority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CandidateStatus {
    Eligible,
    Inactive(AccountStatus),
    Busy,
    LowSkill(f64),
}

impl CandidateStatus {
    pub fn is_eligible(&self) -> bool {
        matches!(self, CandidateStatus::Eligible)
    }

    /// Operator-facing label, e.g. `INACTIVE (Status: suspended)`.
    pub fn label(&self) -> String {
        match self {
            CandidateStatus::Eligible => "Eligible".to_string(),
            CandidateStatus::Inactive(status) => {
                format!("INACTIVE (Status: {})", status.label())
            }
            CandidateStatus::Busy => "BUSY (Too many tasks)".to_string(),
            CandidateStatus::LowSkill(percentage) => format!("LOW SKILL ({percentage:.0}%)"),
        }
    }
}

/// Outcome of one evaluation pass, summarized for the operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AssignmentOutcome {
    NoSkillsRequired,
    NoEligibleCandidates,
    Matched {
        candidate_count: usize,
        top_name: String,
        top_percentage: f64,
    },
}

impl AssignmentOutcome {
    pub fn summary(&self) -> String {
        match self {
            AssignmentOutcome::NoSkillsRequired => {
                "no skills required; automatic matching skipped".to_string()
            }
            AssignmentOutcome::NoEligibleCandidates => "no suitable candidates found".to_string(),
            AssignmentOutcome::Matched {
                candidate_count,
                top_name,
                top_percentage,
            } => format!(
                "{candidate_count} eligible candidate(s); top match {top_name} ({top_percentage:.0}%)"
            ),
        }
    }
}

/// Match percentage descending, then current workload ascending. The sort is
/// stable, so full ties keep roster order.
pub(crate) fn rank_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| {
        b.match_percentage
            .partial_cmp(&a.match_percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.workload.cmp(&b.workload))
    });
}
