//! Handler for the `repoguard check-version` command.

use anyhow::{Context, Result};
use repoguard_config::{CheckVersionArgs, OutputFormat};
use repoguard_version::{check_version, probe_interpreter};
use tracing::info;

use crate::GuardStatus;
use crate::config::ResolvedConfig;

pub(crate) fn handle(args: CheckVersionArgs, resolved: &ResolvedConfig) -> Result<GuardStatus> {
    let settings = resolved.version_settings(&args);

    let found = match args.found {
        Some(found) => found,
        None => probe_interpreter(&settings.interpreter)
            .with_context(|| format!("Failed to determine {} version", settings.tool))?,
    };

    let check = check_version(&settings.tool, settings.minimum, found);
    info!(
        tool = %check.tool,
        required = %check.required,
        found = %check.found,
        passed = check.passed,
        "version gate"
    );

    if args.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&check)?);
    }

    if check.passed {
        Ok(GuardStatus::Pass)
    } else {
        eprintln!("{}", check.diagnostic());
        Ok(GuardStatus::Fail)
    }
}
