//! Plain-text rendering of Vikunja resources for tool results.

use chrono::{DateTime, Datelike};

use crate::client::models::{Attachment, Bucket, Comment, Label, Project, Task, User, View};

/// Year Vikunja uses for "no date set".
const ZERO_DATE_YEAR: &str = "0001";

/// `"{n} {noun}(s){context}:\n{lines}"`, or `empty` when there is nothing to list.
pub fn listing<T>(
    items: &[T],
    noun: &str,
    context: &str,
    empty: &str,
    render: impl Fn(&T) -> String,
) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    let lines: Vec<String> = items.iter().map(render).collect();
    format!(
        "{} {}(s){}:\n{}",
        items.len(),
        noun,
        context,
        lines.join("\n")
    )
}

/// Date portion (`YYYY-MM-DD`) of a timestamp, or `None` for the zero date.
pub fn date_only(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() || value.starts_with(ZERO_DATE_YEAR) {
        return None;
    }
    match DateTime::parse_from_rfc3339(value) {
        Ok(parsed) if parsed.year() <= 1 => None,
        Ok(parsed) => Some(parsed.format("%Y-%m-%d").to_string()),
        Err(_) => value.split('T').next().map(str::to_string),
    }
}

pub fn task(t: &Task) -> String {
    let status = if t.done { "[x]" } else { "[ ]" };
    let priority = if t.priority > 0 {
        format!(" P{}", t.priority)
    } else {
        String::new()
    };
    let due = date_only(t.due_date.as_deref())
        .map(|d| format!(" due:{}", d))
        .unwrap_or_default();
    let labels = match t.labels.as_deref() {
        Some(labels) if !labels.is_empty() => {
            let titles: Vec<&str> = labels.iter().map(|l| l.title.as_str()).collect();
            format!(" [{}]", titles.join(", "))
        }
        _ => String::new(),
    };
    format!("{} #{} {}{}{}{}", status, t.id, t.title, priority, due, labels)
}

pub fn project(p: &Project) -> String {
    let archived = if p.is_archived { " [ARCHIVED]" } else { "" };
    let parent = if p.parent_project_id > 0 {
        format!(" (child of #{})", p.parent_project_id)
    } else {
        String::new()
    };
    format!("[{}] {}{}{}", p.id, p.title, archived, parent)
}

pub fn view(v: &View) -> String {
    let mut line = format!("[{}] \"{}\" ({})", v.id, v.title, v.view_kind);
    if v.default_bucket_id > 0 {
        line.push_str(&format!(" default_bucket:#{}", v.default_bucket_id));
    }
    if v.done_bucket_id > 0 {
        line.push_str(&format!(" done_bucket:#{}", v.done_bucket_id));
    }
    line
}

pub fn bucket_limit(limit: i64) -> String {
    if limit > 0 {
        format!("limit: {}", limit)
    } else {
        "no limit".to_string()
    }
}

pub fn bucket(b: &Bucket) -> String {
    format!(
        "[{}] \"{}\" ({} task(s), {})",
        b.id,
        b.title,
        b.count,
        bucket_limit(b.limit)
    )
}

pub fn label(l: &Label) -> String {
    if l.hex_color.is_empty() {
        format!("[{}] {}", l.id, l.title)
    } else {
        format!("[{}] {} ({})", l.id, l.title, l.hex_color)
    }
}

pub fn comment(c: &Comment) -> String {
    let author = c
        .author
        .as_ref()
        .map(|a| a.username.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("unknown");
    match date_only(c.created.as_deref()) {
        Some(date) => format!("[{}] {} ({}): {}", c.id, author, date, c.comment),
        None => format!("[{}] {}: {}", c.id, author, c.comment),
    }
}

pub fn user(u: &User) -> String {
    if u.name.is_empty() {
        format!("[{}] {}", u.id, u.username)
    } else {
        format!("[{}] {} ({})", u.id, u.username, u.name)
    }
}

/// Bytes below 1 KiB, otherwise whole kilobytes rounded to nearest.
pub fn file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{}B", bytes)
    } else {
        format!("{}KB", (bytes as f64 / 1024.0).round() as u64)
    }
}

pub fn attachment(a: &Attachment) -> String {
    format!(
        "[{}] {} ({}, {})",
        a.id,
        a.file.name,
        a.file.mime,
        file_size(a.file.size)
    )
}

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;
