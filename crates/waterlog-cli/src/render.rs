//! Plain-text rendering of views and events.

use waterlog_core::{DailyView, Event, RecordList};

const BAR_WIDTH: usize = 20;

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

pub fn view(view: &DailyView) -> String {
    let mut lines = Vec::new();
    if view.reset {
        lines.push("Daily limit passed, starting over.".to_string());
    }
    lines.push(format!(
        "Today ({}): {} / {} cups",
        view.date, view.count, view.daily_goal
    ));
    lines.push(format!(
        "{} {:.0}%",
        progress_bar(view.progress_percent),
        view.progress_percent
    ));
    if view.goal_reached {
        lines.push("Goal reached!".to_string());
    }
    lines.push(format!("Tier {}", view.intensity.level()));
    lines.push(view.message.clone());

    match &view.records {
        RecordList::Empty => lines.push("No check-ins yet today".to_string()),
        RecordList::Entries(rows) => lines.extend(
            rows.iter()
                .map(|row| format!("  {}  #{}", row.formatted_time, row.sequence_index)),
        ),
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn event(event: &Event) -> String {
    match event {
        Event::CheckedIn { view: v, .. } => view(v),
        Event::Debounced { elapsed_ms, .. } => {
            format!("Ignored: last check-in was only {elapsed_ms} ms ago\n")
        }
    }
}
