//! Human-readable output rendering.

use chrono::{DateTime, Utc};
use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};

use crate::domain::models::AgentRoster;

/// Render the agent roster as a table.
pub fn format_agent_table(roster: &AgentRoster) -> String {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Agent").add_attribute(Attribute::Bold),
        Cell::new("Status").add_attribute(Attribute::Bold),
        Cell::new("Connected").add_attribute(Attribute::Bold),
    ]);

    for agent in &roster.agents {
        let connected = agent
            .connected_at
            .as_ref()
            .map_or_else(|| "-".to_string(), format_relative_time);

        table.add_row(vec![
            Cell::new(&agent.name),
            Cell::new(agent.status.as_str()),
            Cell::new(connected),
        ]);
    }

    table.to_string()
}

/// Format relative time (e.g., "2 hours ago")
fn format_relative_time(datetime: &DateTime<Utc>) -> String {
    let delta = Utc::now().signed_duration_since(*datetime);
    if delta.num_seconds() < 60 {
        "just now".to_string()
    } else if delta.num_minutes() < 60 {
        format!("{} min ago", delta.num_minutes())
    } else if delta.num_hours() < 24 {
        format!("{} hours ago", delta.num_hours())
    } else {
        datetime.format("%Y-%m-%d %H:%M UTC").to_string()
    }
}
