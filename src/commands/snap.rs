//! Task page screenshot command.
//!
//! Auxiliary utility: drives a headless browser through the Tracsis web
//! UI sign-in form and captures the task table element. It authenticates
//! against the web UI directly and never touches the API client's session.

use crate::libs::{config::Config, messages::Message};
use crate::{msg_bail_anyhow, msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::{Browser, LaunchOptions};
use std::fs;
use std::time::Duration;

const SIGNIN_URL: &str = "https://tracsis.apsissolutions.com/signin";
const TASK_URL: &str = "https://tracsis.apsissolutions.com/pts/my-task/tasks/view";
const SNAP_DIR: &str = "snaps";

/// The task table can be slow to render after navigation.
const TABLE_TIMEOUT: Duration = Duration::from_secs(25);

#[derive(Debug, Args)]
pub struct SnapArgs {
    #[arg(required = true, help = "Task id to capture")]
    pub task_id: i64,
}

pub fn cmd(args: SnapArgs) -> Result<()> {
    let config = Config::read()?;
    if !config.has_credentials() {
        msg_bail_anyhow!(Message::CredentialsInvalid);
    }

    msg_print!(Message::SnapTakingScreenshot(args.task_id));
    if let Err(e) = capture(&config, args.task_id) {
        msg_error!(Message::SnapFailed(e.to_string()));
        return Err(e);
    }
    Ok(())
}

fn capture(config: &Config, task_id: i64) -> Result<()> {
    msg_print!(Message::SnapOpeningBrowser);
    let launch_options = LaunchOptions::default_builder()
        .headless(true)
        .sandbox(false)
        .build()
        .map_err(|e| anyhow::anyhow!("browser launch options: {}", e))?;
    let browser = Browser::new(launch_options)?;
    let tab = browser.new_tab()?;

    // Sign in through the web form; the API bearer token is useless here.
    tab.navigate_to(SIGNIN_URL)?;
    tab.wait_for_element("input#email")?.click()?;
    tab.type_str(&config.credentials.user)?;
    tab.wait_for_element("input#password")?.click()?;
    tab.type_str(&config.credentials.password)?;
    tab.wait_for_element("button[type='submit']")?.click()?;
    msg_print!(Message::SnapLoginInProgress);
    tab.wait_until_navigated()?;
    msg_print!(Message::SnapLoggedIn);

    let task_url = format!("{}/{}?parent=my-task", TASK_URL, task_id);
    tab.navigate_to(&task_url)?;
    let table = tab.wait_for_element_with_custom_timeout(".ant-table", TABLE_TIMEOUT)?;
    msg_print!(Message::SnapTaskPageReached);

    let screenshot = table.capture_screenshot(CaptureScreenshotFormatOption::Png)?;
    fs::create_dir_all(SNAP_DIR)?;
    let screenshot_path = format!("{}/task_{}_screenshot.png", SNAP_DIR, task_id);
    fs::write(&screenshot_path, screenshot)?;

    msg_success!(Message::SnapSaved(screenshot_path), true);
    Ok(())
}
