//! Output formatting utilities

use crate::application::{group_by_day, DayGroup, ExportFormat};
use crate::domain::{self, Entry};
use crate::error::Result;

/// `- content [project] #tag1, #tag2`
pub fn format_entry_line(entry: &Entry) -> String {
    let mut meta = Vec::new();
    if let Some(project) = entry.project.as_deref().filter(|p| !p.is_empty()) {
        meta.push(format!("[{}]", project));
    }
    if !entry.tags.is_empty() {
        meta.push(format!("#{}", entry.tags.join(", #")));
    }

    if meta.is_empty() {
        format!("- {}", entry.content)
    } else {
        format!("- {} {}", entry.content, meta.join(" "))
    }
}

/// Format grouped entries for `brag list`
pub fn format_day_groups(groups: &[DayGroup]) -> String {
    if groups.is_empty() {
        return "No brags found\n".to_string();
    }

    let mut output = String::new();
    for group in groups {
        output.push_str(&format!("\n## {}\n", group.date));
        for entry in &group.entries {
            output.push_str(&format_entry_line(entry));
            output.push('\n');
        }
    }
    output
}

/// Render entries for `brag export`
pub fn format_export(entries: &[Entry], format: ExportFormat) -> Result<String> {
    let output = match format {
        ExportFormat::Json => format!("{}\n", domain::encode_pretty(entries)?),
        ExportFormat::Markdown => {
            let mut output = String::new();
            for group in group_by_day(entries.to_vec()) {
                output.push_str(&format!("\n## {}\n", group.date));
                for entry in &group.entries {
                    output.push_str(&format!("- {}\n", entry.content));
                }
            }
            output
        }
        ExportFormat::Text => entries
            .iter()
            .map(|entry| format!("- {}\n", entry.content))
            .collect(),
    };
    Ok(output)
}

/// Export output for a store that holds no days yet
pub fn format_empty_store(format: ExportFormat) -> String {
    match format {
        ExportFormat::Json => "[]\n".to_string(),
        ExportFormat::Markdown | ExportFormat::Text => "\n".to_string(),
    }
}
