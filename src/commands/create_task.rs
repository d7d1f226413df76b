//! Task creation command.
//!
//! Project selection and the hours/date prompts validate differently on
//! purpose: a bad project number is fatal on the first try, while delivery
//! date and estimated hours re-prompt until they parse.

use super::ensure_authenticated;
use crate::api::{Tracsis, Transport};
use crate::libs::{
    config::Config,
    messages::Message,
    prompt::{Prompter, Terminal},
    view::View,
};
use crate::{msg_bail_anyhow, msg_error, msg_error_anyhow, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use serde_json::Value;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mut api = Tracsis::new();
    run(&mut api, &config, &mut Terminal).await
}

/// Numbered 1-based selection from the project list. Non-numeric or
/// out-of-range input is fatal.
pub fn select_project<P: Prompter>(projects: &[(i64, String)], prompter: &mut P) -> Result<i64> {
    View::projects(projects);

    let raw = prompter.input(&Message::PromptSelectProject.to_string())?;
    let index: usize = raw.trim().parse().map_err(|_| msg_error_anyhow!(Message::InvalidProjectSelection))?;
    if index == 0 || index > projects.len() {
        return Err(msg_error_anyhow!(Message::InvalidProjectSelection));
    }

    Ok(projects[index - 1].0)
}

/// Re-prompts until the answer parses as `YYYY-MM-DD`.
pub fn prompt_delivery_date<P: Prompter>(prompter: &mut P) -> Result<String> {
    loop {
        let raw = prompter.input(&Message::PromptDeliveryDate.to_string())?;
        let raw = raw.trim();
        if NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok() {
            return Ok(raw.to_string());
        }
        msg_error!(Message::InvalidDateFormat);
    }
}

/// Re-prompts until the answer parses as a positive float.
pub fn prompt_estimated_hours<P: Prompter>(prompter: &mut P) -> Result<f64> {
    loop {
        let raw = prompter.input(&Message::PromptEstimatedHours.to_string())?;
        match raw.trim().parse::<f64>() {
            Ok(hours) if hours > 0.0 => return Ok(hours),
            _ => msg_error!(Message::InvalidEstimatedHours),
        }
    }
}

pub async fn run<T: Transport, P: Prompter>(api: &mut Tracsis<T>, config: &Config, prompter: &mut P) -> Result<()> {
    ensure_authenticated(api, config).await?;

    let Some(user_id) = config.user_id() else {
        msg_bail_anyhow!(Message::ProfileDataMissing);
    };

    let response = api.get_my_project_list().await;
    if response.error {
        msg_error!(Message::ProjectsFetchFailed);
        println!("{}", response.pretty());
        msg_bail_anyhow!(Message::ProjectsFetchFailed);
    }

    let projects: Vec<(i64, String)> = response
        .items()
        .iter()
        .filter_map(|item| {
            let id = item.get("hidden_project_id").and_then(Value::as_i64)?;
            let name = item.get("project_name").and_then(Value::as_str)?.to_string();
            Some((id, name))
        })
        .collect();

    let project_id = select_project(&projects, prompter)?;
    let title = prompter.input(&Message::PromptTaskTitle.to_string())?;
    let delivery_date = prompt_delivery_date(prompter)?;
    let estimated_hour = prompt_estimated_hours(prompter)?;

    let response = api.create_task(&title, user_id, &delivery_date, estimated_hour, project_id).await;
    if response.error {
        msg_error!(Message::TaskCreateFailed);
        println!("{}", response.pretty());
        msg_bail_anyhow!(Message::TaskCreateFailed);
    }

    msg_success!(Message::TaskCreated, true);
    println!("{}", response.pretty());
    Ok(())
}
