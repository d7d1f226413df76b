//! Git commit export command.
//!
//! Auxiliary utility: finds every git repository under a directory, pulls
//! today's commits for an author, and writes them to a CSV shaped like a
//! work log (`title,date,log_hour`). Each commit is attributed one hour.

use crate::libs::{config::Config, messages::Message};
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::process::Command;

const HOURS_PER_COMMIT: f64 = 1.0;

#[derive(Debug, Args)]
pub struct GenlogArgs {
    #[arg(required = true, help = "Git author to collect commits for")]
    pub username: String,
    #[arg(long, default_value = ".", help = "Directory to scan for repositories")]
    pub path: String,
}

pub fn cmd(args: GenlogArgs) -> Result<()> {
    let config = Config::read()?;
    if !config.has_credentials() {
        msg_bail_anyhow!(Message::CredentialsInvalid);
    }

    let path = Path::new(&args.path)
        .canonicalize()
        .map_err(|_| msg_error_anyhow!(Message::GenlogPathMissing(args.path.clone())))?;
    let date = Local::now().format("%Y-%m-%d").to_string();
    msg_print!(Message::GenlogFetching {
        username: args.username.clone(),
        path: path.display().to_string(),
        date: date.clone(),
    });

    let repos = find_repositories(&path);
    if repos.is_empty() {
        msg_print!(Message::GenlogNoRepos(path.display().to_string()));
        return Ok(());
    }

    let csv_filename = format!("git_commits_{}_{}.csv", args.username, date);
    let mut writer = csv::Writer::from_path(&csv_filename)?;
    writer.write_record(["title", "date", "log_hour"])?;
    let hours = format!("{:.1}", HOURS_PER_COMMIT);

    for repo in repos {
        msg_print!(Message::GenlogRepoHeader(repo.display().to_string()));
        let log = match commits_for_date(&repo, &args.username, &date) {
            Ok(log) => log,
            Err(_) => {
                msg_warning!(Message::GenlogRepoSkipped(repo.display().to_string()));
                continue;
            }
        };
        if log.is_empty() {
            continue;
        }
        println!("{}", log);

        for title in commit_titles(&log) {
            writer.write_record([title.as_str(), date.as_str(), hours.as_str()])?;
        }
    }
    writer.flush()?;

    msg_success!(Message::GenlogCsvGenerated(csv_filename), true);
    Ok(())
}

/// Directories containing a `.git` folder anywhere under `root`.
pub fn find_repositories(root: &Path) -> Vec<PathBuf> {
    let mut repos = Vec::new();
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .build();

    for entry in walker.flatten() {
        if entry.file_type().map_or(false, |kind| kind.is_dir()) && entry.file_name() == ".git" {
            if let Some(repo) = entry.path().parent() {
                repos.push(repo.to_path_buf());
            }
        }
    }
    repos
}

fn commits_for_date(repo: &Path, username: &str, date: &str) -> Result<String> {
    let output = Command::new("git")
        .current_dir(repo)
        .arg("log")
        .arg("--all")
        .arg(format!("--author={}", username))
        .arg(format!("--since={} 00:00:00", date))
        .arg(format!("--until={} 23:59:59", date))
        .arg("--pretty=format:%h - %an, %ar : %s")
        .output()?;

    if !output.status.success() {
        return Err(msg_error_anyhow!(Message::GenlogGitFailed(
            String::from_utf8_lossy(&output.stderr).to_string()
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Commit subjects, taken from the text after the last `:` of each line.
pub fn commit_titles(log: &str) -> Vec<String> {
    log.lines()
        .filter(|line| line.contains(':'))
        .filter_map(|line| line.rsplit(':').next())
        .map(|title| title.trim().to_string())
        .collect()
}
