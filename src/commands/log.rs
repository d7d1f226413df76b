//! Work logging command.
//!
//! Collects one work entry interactively and sends it in a single request.
//! The hours field is fatal on the first malformed input; only the date
//! falls back to a default (today). Those two behaviors are intentionally
//! different.

use super::ensure_authenticated;
use crate::api::{Tracsis, Transport};
use crate::libs::{
    config::Config,
    messages::Message,
    prompt::{Prompter, Terminal},
};
use crate::{msg_bail_anyhow, msg_error, msg_error_anyhow, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;

/// Suggestions offered by the work title prompt.
pub const WORK_TITLES: [&str; 5] = ["Development", "Code Review", "Testing", "Documentation", "Meeting"];

#[derive(Debug, Args)]
pub struct LogArgs {
    #[arg(required = true, help = "Task id to log work against")]
    pub task_id: i64,
    #[arg(required = true, value_parser = ["i", "c"], help = "Task status: i (in progress) or c (completed)")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkEntry {
    pub work_title: String,
    pub work_date: String,
    pub log_hour: f64,
}

/// Prompts for a single work entry.
pub fn collect_work_entry<P: Prompter>(prompter: &mut P) -> Result<WorkEntry> {
    let work_title = prompter.input_with_suggestions(&Message::PromptWorkTitle.to_string(), &WORK_TITLES)?;

    let default_date = Local::now().format("%Y/%m/%d").to_string();
    let work_date = prompter.input_with_default(&Message::PromptWorkDate.to_string(), &default_date)?;

    let raw_hours = prompter.input(&Message::PromptLogHour.to_string())?;
    let log_hour: f64 = raw_hours
        .trim()
        .parse()
        .map_err(|_| msg_error_anyhow!(Message::InvalidHours(raw_hours.clone())))?;
    if log_hour <= 0.0 {
        return Err(msg_error_anyhow!(Message::InvalidHours(raw_hours)));
    }

    Ok(WorkEntry {
        work_title,
        work_date,
        log_hour,
    })
}

pub async fn cmd(args: LogArgs) -> Result<()> {
    let config = Config::read()?;
    let mut api = Tracsis::new();
    run(&mut api, &config, args, &mut Terminal).await
}

pub async fn run<T: Transport, P: Prompter>(api: &mut Tracsis<T>, config: &Config, args: LogArgs, prompter: &mut P) -> Result<()> {
    ensure_authenticated(api, config).await?;

    let entry = collect_work_entry(prompter)?;
    let response = api
        .log_task_work(args.task_id, &args.status, &entry.work_title, &entry.work_date, entry.log_hour)
        .await;
    if response.error {
        msg_error!(Message::WorkLogFailed);
        println!("{}", response.pretty());
        msg_bail_anyhow!(Message::WorkLogFailed);
    }

    msg_success!(Message::WorkLogged, true);
    Ok(())
}
