use super::task::Task;
use anyhow::Result;
use chrono::{DateTime, Local};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK", "CREATED", "STATUS"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.text,
                Self::format_date(&task.date),
                if task.completed { "done" } else { "open" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Local `YYYY/MM/DD HH:MM` rendering of the stored RFC 3339 date.
    /// Unparseable values are shown as stored.
    pub fn format_date(date: &str) -> String {
        match DateTime::parse_from_rfc3339(date) {
            Ok(dt) => dt.with_timezone(&Local).format("%Y/%m/%d %H:%M").to_string(),
            Err(_) => date.to_string(),
        }
    }
}
