//! Handler for the `repoguard hello` command.

use anyhow::Result;
use repoguard_config::HelloArgs;

use crate::GuardStatus;

pub(crate) fn handle(args: HelloArgs) -> Result<GuardStatus> {
    println!("{}", repoguard_greeting::hello(&args.name));
    Ok(GuardStatus::Pass)
}
