pub mod create_task;
pub mod genlog;
pub mod log;
pub mod login;
pub mod logs;
pub mod set_creds;
pub mod snap;
pub mod tasks;

use crate::api::{Tracsis, Transport};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error, msg_print};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Login to the Tracsis API")]
    Login,
    #[command(about = "List tasks assigned to a user")]
    Tasks(tasks::TasksArgs),
    #[command(about = "List work logs", arg_required_else_help = true)]
    Logs(logs::LogsArgs),
    #[command(about = "Log work for a task", arg_required_else_help = true)]
    Log(log::LogArgs),
    #[command(about = "Create a task", name = "create-task")]
    CreateTask,
    #[command(about = "Capture a screenshot of a task page", arg_required_else_help = true)]
    Snap(snap::SnapArgs),
    #[command(about = "Export today's git commits to CSV", arg_required_else_help = true)]
    Genlog(genlog::GenlogArgs),
    #[command(about = "Store credentials and profile data", name = "set-creds")]
    SetCreds,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Login => login::cmd().await,
            Commands::Tasks(args) => tasks::cmd(args).await,
            Commands::Logs(args) => logs::cmd(args).await,
            Commands::Log(args) => log::cmd(args).await,
            Commands::CreateTask => create_task::cmd().await,
            Commands::Snap(args) => snap::cmd(args),
            Commands::Genlog(args) => genlog::cmd(args),
            Commands::SetCreds => set_creds::cmd().await,
        }
    }
}

/// Walks a command from "credentials on disk" to "authenticated client".
///
/// Every data command shares this gate: the loaded credentials must be
/// valid, and a fresh login happens only when the client holds no token
/// pair yet. A failed login prints the envelope and is fatal.
pub async fn ensure_authenticated<T: Transport>(api: &mut Tracsis<T>, config: &Config) -> Result<()> {
    if !config.has_credentials() {
        msg_bail_anyhow!(Message::CredentialsInvalid);
    }

    if api.is_authenticated() {
        return Ok(());
    }

    msg_print!(Message::NotAuthenticatedLoggingIn);
    let response = api.login(&config.credentials.user, &config.credentials.password).await;
    if response.error {
        msg_error!(Message::LoginFailed);
        println!("{}", response.pretty());
        msg_bail_anyhow!(Message::LoginFailed);
    }

    msg_print!(Message::LoginSuccessful, true);
    Ok(())
}
