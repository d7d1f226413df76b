use crate::libs::messages::Message;
use crate::libs::prompt::Prompter;
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Table};
use serde_json::Value;

const SEPARATOR: &str = "================================================================================";

/// String form of a field on a server-owned record. Records are opaque;
/// anything missing renders blank instead of failing.
fn field(record: &Value, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

pub struct View {}

impl View {
    /// One task per screen; Enter advances, `q` stops early.
    pub fn task_pager<P: Prompter>(tasks: &[Value], prompter: &mut P) -> Result<()> {
        for task in tasks {
            Self::clear_screen();
            println!("{}", Self::format_task(task));

            let answer = prompter.input(&Message::TaskPagerPrompt.to_string())?;
            if answer.trim().eq_ignore_ascii_case("q") {
                break;
            }
        }
        Ok(())
    }

    /// Field block for a single task record.
    pub fn format_task(task: &Value) -> String {
        format!(
            "{sep}\nTask ID: {}\nTitle: {}\nProject: {}\nDelivery Date: {}\nEstimated Hours: {}\nTask Type: {}\n{sep}",
            field(task, "hidden_task_id"),
            field(task, "task_title"),
            field(task, "project_name"),
            field(task, "formatted_date"),
            field(task, "estimated_hour"),
            field(task, "module_name"),
            sep = SEPARATOR,
        )
    }

    pub fn task_logs(items: &[Value]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TITLE", "DATE", "TYPE", "HOURS"]);
        for item in items {
            table.add_row(row![
                field(item, "work_title"),
                field(item, "work_date"),
                field(item, "work_type"),
                field(item, "log_hour")
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Numbered 1-based project list matching the selection prompt.
    pub fn projects(projects: &[(i64, String)]) {
        msg_print!(Message::AvailableProjects);
        for (index, (id, name)) in projects.iter().enumerate() {
            println!("{}. {} (ID: {})", index + 1, name, id);
        }
    }

    fn clear_screen() {
        // ANSI clear + cursor home.
        print!("\x1b[2J\x1b[H");
    }
}
