use std::collections::{HashMap, HashSet};

use super::super::domain::{TaskSnapshot, WorkerId, WorkerProfile};
use super::config::AssignmentConfig;
use super::policy::CandidateStatus;

/// Lowercased requirement tokens, order and duplicates preserved so each
/// token is matched independently rather than as a unique-skill set.
pub(crate) fn normalize_required(skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .collect()
}

/// A worker's offered skills as a lowercased set, so a requirement token can
/// match at most once.
pub(crate) fn normalize_offered(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .collect()
}

/// Open assignments per worker across the full task roster. Workers holding
/// no counted task are simply absent and default to zero.
pub(crate) fn workload_by_worker(tasks: &[TaskSnapshot]) -> HashMap<WorkerId, u32> {
    let mut counts = HashMap::new();

    for task in tasks {
        if !task.status.counts_toward_workload() {
            continue;
        }
        if let Some(worker_id) = &task.assigned_to {
            *counts.entry(worker_id.clone()).or_insert(0) += 1;
        }
    }

    counts
}

pub(crate) struct ScreenedWorker {
    pub(crate) match_count: usize,
    pub(crate) match_percentage: f64,
    pub(crate) status: CandidateStatus,
}

/// Screen one worker against the normalized requirement list.
///
/// The status gates are evaluated in strict priority order: account status
/// first, workload second, skill match last.
pub(crate) fn screen_worker(
    worker: &WorkerProfile,
    required: &[String],
    workload: u32,
    config: &AssignmentConfig,
) -> ScreenedWorker {
    let offered = normalize_offered(&worker.skills);
    let match_count = required
        .iter()
        .filter(|token| offered.contains(token.as_str()))
        .count();
    let match_percentage = if required.is_empty() {
        0.0
    } else {
        match_count as f64 / required.len() as f64 * 100.0
    };

    let status = if !worker.account_status.is_active() {
        CandidateStatus::Inactive(worker.account_status)
    } else if workload >= config.workload_limit {
        CandidateStatus::Busy
    } else if match_count == 0 || match_percentage < config.skill_threshold_percent {
        // Workers matching none of the required skills are screened out even
        // while the percentage threshold sits at zero.
        CandidateStatus::LowSkill(match_percentage)
    } else {
        CandidateStatus::Eligible
    };

    ScreenedWorker {
        match_count,
        match_percentage,
        status,
    }
}
