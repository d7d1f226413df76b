use super::ensure_authenticated;
use crate::api::{Tracsis, Transport};
use crate::libs::{config::Config, messages::Message, view::View};
use crate::{msg_bail_anyhow, msg_error, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LogsArgs {
    #[arg(required = true, help = "Task id to fetch logs for")]
    pub task_id: i64,
    #[arg(long, default_value_t = 1, help = "Page number")]
    pub page: u32,
    #[arg(long, default_value_t = 10, help = "Items per page")]
    pub per_page: u32,
}

pub async fn cmd(args: LogsArgs) -> Result<()> {
    let config = Config::read()?;
    let mut api = Tracsis::new();
    run(&mut api, &config, args).await
}

pub async fn run<T: Transport>(api: &mut Tracsis<T>, config: &Config, args: LogsArgs) -> Result<()> {
    ensure_authenticated(api, config).await?;

    let response = api.get_task_logs(args.task_id, args.page, args.per_page).await;
    if response.error {
        msg_error!(Message::LogsFetchFailed);
        println!("{}", response.pretty());
        msg_bail_anyhow!(Message::LogsFetchFailed);
    }

    let items = response.items();
    if items.is_empty() {
        msg_print!(Message::LogsNotFound);
        return Ok(());
    }

    View::task_logs(&items)
}
