//! Human-readable summary renderer for block rates.

use serde_json::Value;

use crate::compare::block_rate::BlockRateRecord;
use crate::compare::rate::ItemRateRecord;
use crate::compare::score::Status;

/// Render a Markdown summary of a [`BlockRateRecord`] and its children.
///
/// The summary is intended for review screens. It is informational only and
/// does not affect the structured record.
pub fn render_rate_summary(record: &BlockRateRecord) -> String {
    let mut out = String::new();
    render_block(record, 2, &mut out);
    out
}

fn render_block(record: &BlockRateRecord, depth: usize, out: &mut String) {
    let heading = "#".repeat(depth.min(6));
    out.push_str(&format!(
        "{heading} Block `{}`\n\n**Status**: {}  \n**Total rate**: {}\n\n",
        record.block_type,
        status_label(record.status),
        record.total_rate
    ));

    out.push_str(&format!(
        "| Index | Properties | Events | Permissions | Artifacts |\n\
         |---|---|---|---|---|\n\
         | {} | {} | {} | {} | {} |\n\n",
        record.index_rate,
        record.properties_rate,
        record.events_rate,
        record.permissions_rate,
        record.artifacts_rate,
    ));

    let categories: [(&str, &[ItemRateRecord]); 4] = [
        ("Properties", record.properties.as_slice()),
        ("Events", record.events.as_slice()),
        ("Permissions", record.permissions.as_slice()),
        ("Artifacts", record.artifacts.as_slice()),
    ];
    let mut any_change = false;
    for (title, items) in categories {
        let changed: Vec<&ItemRateRecord> = items
            .iter()
            .filter(|item| item.status != Status::Unchanged)
            .collect();
        if changed.is_empty() {
            continue;
        }
        any_change = true;
        out.push_str(&format!("**{}**\n\n", title));
        for item in changed {
            out.push_str(&format!(
                "- {} `{}` ({})\n",
                status_label(item.status),
                item_label(item),
                item.total_rate
            ));
        }
        out.push('\n');
    }
    if !any_change {
        out.push_str("_No item changes._\n\n");
    }

    for child in &record.children {
        render_block(child, depth + 1, out);
    }
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Unchanged => "Unchanged",
        Status::Added => "Added",
        Status::Removed => "Removed",
        Status::Changed => "Changed",
        Status::None => "None",
    }
}

/// Short display name for an item: a property path, an artifact name, an
/// event edge, or the compact JSON of anything else
fn item_label(item: &ItemRateRecord) -> String {
    let Some(value) = item.left.as_ref().or(item.right.as_ref()) else {
        return String::from("?");
    };
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            if let Some(Value::String(path)) = map.get("path") {
                return path.clone();
            }
            if let Some(Value::String(name)) = map.get("name") {
                return name.clone();
            }
            match (map.get("source"), map.get("target")) {
                (Some(Value::String(source)), Some(Value::String(target))) => {
                    format!("{} -> {}", source, target)
                }
                _ => value.to_string(),
            }
        }
        other => other.to_string(),
    }
}
