pub(crate) mod check_version;
pub(crate) mod commit_msg;
pub(crate) mod hello;
pub(crate) mod install_hook;

use anyhow::Result;
use repoguard_config::{Cli, Commands};

use crate::GuardStatus;
use crate::config::ResolvedConfig;

pub(crate) fn dispatch(cli: Cli) -> Result<GuardStatus> {
    let global = &cli.global;
    match cli.command {
        Commands::Hello(args) => hello::handle(args),
        Commands::InstallHook(args) => install_hook::handle(args, global),
        Commands::CheckVersion(args) => check_version::handle(args, &ResolvedConfig::load(global)?),
        Commands::CommitMsg(args) => commit_msg::handle(args, global),
    }
}
