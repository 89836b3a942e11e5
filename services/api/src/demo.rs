use crate::infra::{
    assignment_config, seed_roster, InMemoryNotificationPublisher, InMemoryTaskRepository,
    InMemoryWorkerRepository,
};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use workmatch::config::AppConfig;
use workmatch::error::AppError;
use workmatch::workflows::assignment::{
    AssignmentConfig, AssignmentEvaluation, AssignmentEvaluator, AssignmentMode,
    TaskAssignmentService, TaskDraft, WorkerProfile,
};
use workmatch::workflows::roster::RosterImporter;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional roster CSV export to hydrate the worker pool instead of the
    /// built-in seed roster.
    #[arg(long)]
    pub(crate) roster_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct AssignPreviewArgs {
    /// Title for the drafted task
    #[arg(long)]
    pub(crate) title: String,
    /// Required skill; repeat the flag to require several
    #[arg(long = "skill")]
    pub(crate) skills: Vec<String>,
    /// Optional roster CSV export to evaluate against instead of the seed roster
    #[arg(long)]
    pub(crate) roster_csv: Option<PathBuf>,
}

pub(crate) fn run_assign_preview(args: AssignPreviewArgs) -> Result<(), AppError> {
    let AssignPreviewArgs {
        title,
        skills,
        roster_csv,
    } = args;

    println!("Assignment preview for '{title}'");
    if skills.is_empty() {
        println!("Required skills: none");
    } else {
        println!("Required skills: {}", skills.join(", "));
    }

    let roster = load_roster(roster_csv)?;
    println!("Roster: {} worker(s)\n", roster.len());

    let config = AppConfig::load()?;
    let evaluator = AssignmentEvaluator::new(assignment_config(&config.assignment));
    let draft = TaskDraft {
        title,
        detail: String::new(),
        skills,
        payout: 0,
    };

    // The CLI preview has no stored tasks, so every worker screens at zero
    // workload.
    let evaluation = evaluator.evaluate(&draft, &roster, &[]);
    render_evaluation(&evaluation);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { roster_csv } = args;

    println!("Work-match assignment demo");

    let profiles = load_roster(roster_csv)?;
    println!("\nRoster ({} workers)", profiles.len());
    for profile in &profiles {
        println!(
            "- {} [{}] {}",
            profile.full_name,
            profile.account_status.label(),
            profile.skills.join(", ")
        );
    }

    let roster = Arc::new(InMemoryWorkerRepository::seeded(profiles));
    let tasks = Arc::new(InMemoryTaskRepository::default());
    let notifier = Arc::new(InMemoryNotificationPublisher::default());
    let service = Arc::new(TaskAssignmentService::new(
        roster,
        tasks,
        notifier.clone(),
        AssignmentConfig::default(),
    ));

    let draft = TaskDraft {
        title: "Realtime chat widget".to_string(),
        detail: "Embed the support chat widget in the client portal.".to_string(),
        skills: vec!["React".to_string(), "Node.js".to_string()],
        payout: 350,
    };

    println!(
        "\nPreviewing '{}' (skills: {})",
        draft.title,
        draft.skills.join(", ")
    );
    let evaluation = match service.preview(&draft) {
        Ok(evaluation) => evaluation,
        Err(err) => {
            println!("  Preview unavailable: {err}");
            return Ok(());
        }
    };
    render_evaluation(&evaluation);

    println!("\nCreating the task with auto-assignment");
    match service.create_task(draft, AssignmentMode::AutoAssign) {
        Ok(created) => {
            println!(
                "- Stored {} with status {}",
                created.record.id.0,
                created.record.status.label()
            );
            println!("- Decision: {}", created.decision.summary());
            if let Some(failure) = &created.notification_failure {
                println!("- Alert not dispatched: {failure}");
            }
        }
        Err(err) => {
            println!("  Task creation failed: {err}");
            return Ok(());
        }
    }

    let broadcast_draft = TaskDraft {
        title: "Data cleanup scripts".to_string(),
        detail: "One-off scripts migrating the legacy payment exports.".to_string(),
        skills: vec!["Python".to_string()],
        payout: 200,
    };

    println!(
        "\nBroadcasting '{}' (skills: {})",
        broadcast_draft.title,
        broadcast_draft.skills.join(", ")
    );
    match service.create_task(broadcast_draft, AssignmentMode::Broadcast) {
        Ok(created) => {
            println!(
                "- Stored {} with status {}",
                created.record.id.0,
                created.record.status.label()
            );
            println!("- Decision: {}", created.decision.summary());
            println!(
                "- Visible to: {}",
                created
                    .record
                    .candidate_worker_ids
                    .iter()
                    .map(|id| id.0.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        Err(err) => {
            println!("  Task creation failed: {err}");
            return Ok(());
        }
    }

    // A second look at the same stack shows the assignee's workload climbing.
    let followup = TaskDraft {
        title: "Client portal dark mode".to_string(),
        detail: String::new(),
        skills: vec!["React".to_string()],
        payout: 150,
    };
    println!("\nPreviewing '{}' after the assignments above", followup.title);
    match service.preview(&followup) {
        Ok(evaluation) => render_evaluation(&evaluation),
        Err(err) => {
            println!("  Preview unavailable: {err}");
            return Ok(());
        }
    }

    let events = notifier.events();
    if events.is_empty() {
        println!("\nDispatched alerts: none");
    } else {
        println!("\nDispatched alerts");
        for alert in events {
            println!(
                "- template={} task={} -> {}",
                alert.template,
                alert.task_id.0,
                alert.recipients.join(", ")
            );
        }
    }

    Ok(())
}

fn load_roster(roster_csv: Option<PathBuf>) -> Result<Vec<WorkerProfile>, AppError> {
    match roster_csv {
        Some(path) => {
            let import = RosterImporter::from_path(path)?;
            for row in &import.skipped {
                println!("  Skipped roster row {}: {}", row.line, row.reason);
            }
            Ok(import.workers)
        }
        None => Ok(seed_roster()),
    }
}

fn render_evaluation(evaluation: &AssignmentEvaluation) {
    println!("Screening results");
    for diagnostic in &evaluation.diagnostics {
        println!(
            "- {:<14} {:>3.0}% ({} of {}) | {} active task(s) | {}",
            diagnostic.full_name,
            diagnostic.match_percentage,
            diagnostic.match_count,
            diagnostic.required_count,
            diagnostic.active_tasks,
            diagnostic.status.label()
        );
    }

    println!("\nDecision trace");
    for line in &evaluation.trace {
        println!("  {line}");
    }

    match &evaluation.top_candidate {
        Some(top) => println!(
            "\nTop candidate: {} ({:.0}% match, {} active task(s))",
            top.full_name, top.match_percentage, top.workload
        ),
        None => println!("\nTop candidate: none ({})", evaluation.outcome.summary()),
    }
}
