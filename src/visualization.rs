use std::{fmt::Write as _, fs, path::Path};

use serde::Serialize;

use crate::{
    availability::Availability, error::ReportError, events::ItemEvent,
    tracker::TransitionRecord,
};

/// Every state of the availability machine, in display order
const STATES: [Availability; 2] = [Availability::Available, Availability::CheckedOut];

/// Every event of the availability machine
const EVENTS: [ItemEvent; 2] = [ItemEvent::CheckOut, ItemEvent::CheckIn];

/// Rendering helpers for items and their history
#[derive(Debug)]
pub struct StateVisualization;

impl StateVisualization {
    /// Generate a DOT graph of the availability machine, highlighting `current`
    #[must_use]
    pub fn generate_dot(current: Availability) -> String {
        let mut dot = String::from("digraph availability {\n");
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");

        for state in STATES {
            if state == current {
                let _ = writeln!(
                    dot,
                    "  {state} [label=\"{state}\", fillcolor=palegreen, peripheries=2];"
                );
            } else {
                let _ = writeln!(dot, "  {state} [label=\"{state}\"];");
            }
        }

        for state in STATES {
            for event in EVENTS {
                let transition = state.apply(event);
                let style = if transition.accepted { "color=black" } else { "color=gray, style=dashed" };
                let _ = writeln!(
                    dot,
                    "  {} -> {} [label=\"{event}\", {style}];",
                    transition.from, transition.to
                );
            }
        }

        dot.push_str("}\n");
        dot
    }

    /// Generate a markdown table of recorded history
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub fn history_table(records: &[TransitionRecord]) -> String {
        if records.is_empty() {
            return "No transitions recorded yet.".to_string();
        }

        let mut table = String::from("| # | From | Event | To | Accepted |\n");
        table.push_str("|---|------|-------|----|----------|\n");

        for (i, record) in records.iter().enumerate() {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {} |",
                i + 1,
                record.from,
                record.event,
                record.to,
                if record.accepted { "yes" } else { "no" }
            );
        }

        table
    }

    /// Pretty JSON snapshot of anything serializable
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Json` if the value cannot be serialized
    pub fn to_json<T: Serialize>(value: &T) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(value)?)
    }

    /// Write a rendered report to a file
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Io` if the file cannot be created or written to
    pub fn save_report(contents: &str, path: impl AsRef<Path>) -> Result<(), ReportError> {
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cataloged::CatalogedItem,
        item::{Item, Lendable},
        tracker::LendingTracker,
    };

    #[test]
    fn test_dot_highlights_current_state() {
        let dot = StateVisualization::generate_dot(Availability::CheckedOut);
        assert!(dot.starts_with("digraph availability {"));
        assert!(dot.contains("CheckedOut [label=\"CheckedOut\", fillcolor=palegreen"));
        assert!(dot.contains("Available [label=\"Available\"];"));
        assert!(dot.contains("CheckedOut -> CheckedOut [label=\"checkout\", color=gray"));
        assert!(dot.contains("Available -> Available [label=\"checkin\", color=black"));
    }

    #[test]
    fn test_history_table() {
        assert_eq!(StateVisualization::history_table(&[]), "No transitions recorded yet.");

        let mut tracker = LendingTracker::new(Item::new("T", "A"));
        assert!(tracker.checkout());
        assert!(!tracker.checkout());

        let table = StateVisualization::history_table(&tracker.get_history());
        assert!(table.contains("| 1 | Available | checkout | CheckedOut | yes |"));
        assert!(table.contains("| 2 | CheckedOut | checkout | CheckedOut | no |"));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_json_snapshot() {
        let mut cataloged = CatalogedItem::new("T", "A", "Fiction");
        assert!(cataloged.checkout());

        let json = StateVisualization::to_json(&cataloged).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "T");
        assert_eq!(value["author"], "A");
        assert_eq!(value["department"], "Fiction");
        assert_eq!(value["availability"], "CheckedOut");
        assert!(value.get("price").is_none());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_history_json_snapshot() {
        let mut tracker = LendingTracker::new(Item::new("T", "A"));
        assert!(tracker.checkout());
        tracker.checkin();

        let json = StateVisualization::to_json(&tracker.get_history()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["event"], "CheckOut");
        assert_eq!(value[0]["to"], "CheckedOut");
        assert_eq!(value[1]["event"], "CheckIn");
        assert_eq!(value[1]["accepted"], true);
        assert!(value[1]["at"]["seconds"].as_u64().unwrap() > 0);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_save_report_to_missing_directory_fails() {
        let err = StateVisualization::save_report("x", "/nonexistent-dir/report.dot").unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
