use super::ensure_authenticated;
use crate::api::{Tracsis, Transport};
use crate::libs::{
    config::Config,
    messages::Message,
    prompt::{Prompter, Terminal},
    view::View,
};
use crate::{msg_bail_anyhow, msg_error, msg_print};
use anyhow::Result;
use clap::Args;

/// Default actor when neither `--user-id` nor stored profile data names one.
const DEFAULT_USER_ID: i64 = 6010;

#[derive(Debug, Args)]
pub struct TasksArgs {
    #[arg(long, help = "User id to filter tasks for")]
    pub user_id: Option<i64>,
    #[arg(long, default_value_t = 1, help = "Page number")]
    pub page: u32,
    #[arg(long, default_value_t = 10, help = "Items per page")]
    pub per_page: u32,
}

pub async fn cmd(args: TasksArgs) -> Result<()> {
    let config = Config::read()?;
    let mut api = Tracsis::new();
    run(&mut api, &config, args, &mut Terminal).await
}

pub async fn run<T: Transport, P: Prompter>(api: &mut Tracsis<T>, config: &Config, args: TasksArgs, prompter: &mut P) -> Result<()> {
    ensure_authenticated(api, config).await?;

    let user_id = args.user_id.or_else(|| config.user_id()).unwrap_or(DEFAULT_USER_ID);
    let response = api.get_task_list(user_id, args.page, args.per_page).await;
    if response.error {
        msg_error!(Message::TasksFetchFailed);
        println!("{}", response.pretty());
        msg_bail_anyhow!(Message::TasksFetchFailed);
    }

    let tasks = response.items();
    if tasks.is_empty() {
        msg_print!(Message::TasksNotFound);
        return Ok(());
    }

    View::task_pager(&tasks, prompter)
}
