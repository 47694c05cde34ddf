//! Handler for the `repoguard commit-msg` command.

use anyhow::{Context, Result};
use repoguard_config::{CommitMsgArgs, GlobalArgs, OutputFormat};
use repoguard_taskid::{
    GuardOutcome, TaskIdSet, evaluate_message, failure_message, skip_notice,
};
use serde::Serialize;
use tracing::info;

use crate::GuardStatus;
use crate::config::ResolvedConfig;

const USAGE: &str = "Usage: repoguard commit-msg <COMMIT_MSG_FILE>";

#[derive(Serialize)]
struct Report<'a> {
    passed: bool,
    tasks_file: &'a str,
    #[serde(flatten)]
    outcome: &'a GuardOutcome,
}

pub(crate) fn handle(args: CommitMsgArgs, global: &GlobalArgs) -> Result<GuardStatus> {
    let Some(path) = args.file else {
        eprintln!("{USAGE}");
        return Ok(GuardStatus::Fail);
    };
    let resolved = ResolvedConfig::load(global)?;

    let message = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read commit message from {}", path.display()))?;

    let tasks = resolved.task_settings()?;
    let ids = TaskIdSet::load(&tasks.path, &tasks.prefixes)?;
    let outcome = evaluate_message(&message, ids.as_ref());
    info!(tasks_file = %tasks.label, ?outcome, "commit message guard");

    match args.format {
        OutputFormat::Json => {
            let report = Report {
                passed: outcome.passed(),
                tasks_file: &tasks.label,
                outcome: &outcome,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            if let GuardOutcome::Skipped { .. } = outcome {
                println!("{}", skip_notice(&tasks.label));
            }
        }
    }

    match &outcome {
        GuardOutcome::Missing { valid_ids } => {
            eprintln!("{}", failure_message(&tasks.label, valid_ids));
            Ok(GuardStatus::Fail)
        }
        GuardOutcome::Matched { .. } | GuardOutcome::Skipped { .. } => Ok(GuardStatus::Pass),
    }
}
