use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_WORKLOAD_LIMIT: u32 = 2;
pub(crate) const DEFAULT_SKILL_THRESHOLD_PERCENT: f64 = 0.0;

/// Dials governing candidate screening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentConfig {
    /// A worker holding this many open assignments is screened out as busy.
    pub workload_limit: u32,
    /// Minimum skill-match percentage. Production runs this at 0, so the
    /// percentage gate only removes workers matching none of the required
    /// skills; raising it requires product sign-off.
    pub skill_threshold_percent: f64,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            workload_limit: DEFAULT_WORKLOAD_LIMIT,
            skill_threshold_percent: DEFAULT_SKILL_THRESHOLD_PERCENT,
        }
    }
}

impl AssignmentConfig {
    /// Clamp non-finite or out-of-range dials back to usable values.
    pub(crate) fn sanitized(self) -> Self {
        let skill_threshold_percent = if self.skill_threshold_percent.is_finite() {
            self.skill_threshold_percent.clamp(0.0, 100.0)
        } else {
            DEFAULT_SKILL_THRESHOLD_PERCENT
        };

        Self {
            workload_limit: self.workload_limit,
            skill_threshold_percent,
        }
    }
}
