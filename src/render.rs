//! Interfaces de rendu : les moteurs ne reçoivent que `Roster` et `HoursSummary`.

use crate::error::Result;
use crate::hours::HoursSummary;
use crate::io::write_atomic;
use crate::roster::Roster;
use chrono::{DateTime, Utc};
use std::path::Path;

pub const UNASSIGNED: &str = "Unassigned";

/// Rendu visuel du planning (image, terminal, ...).
pub trait RosterRenderer {
    fn render(&self, title: &str, roster: &Roster) -> String;
}

/// Rendu document : sections par jour, résumé des heures, pied de page daté.
pub trait DocumentRenderer {
    fn render(&self, roster: &Roster, summary: &HoursSummary, generated_at: DateTime<Utc>) -> String;
}

/// Texte brut : un bloc par jour, une ligne `<shift>: <travailleur>` par shift.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRoster;

impl RosterRenderer for TextRoster {
    fn render(&self, title: &str, roster: &Roster) -> String {
        let mut out = format!("{title}\n");
        for day in roster.days() {
            out.push_str(&format!("\n{}\n", day.day));
            for slot in &day.slots {
                let worker = slot.worker.as_ref().map_or(UNASSIGNED, |w| w.name());
                out.push_str(&format!("  {}: {}\n", slot.label, worker));
            }
        }
        out
    }
}

/// Document Markdown : tableau `Shift Time | Worker` par jour, puis le résumé.
#[derive(Debug, Clone)]
pub struct MarkdownDocument {
    pub title: String,
}

impl Default for MarkdownDocument {
    fn default() -> Self {
        Self {
            title: "Weekly Schedule".to_string(),
        }
    }
}

impl DocumentRenderer for MarkdownDocument {
    fn render(&self, roster: &Roster, summary: &HoursSummary, generated_at: DateTime<Utc>) -> String {
        let mut out = format!("# {}\n", self.title);
        for day in roster.days() {
            out.push_str(&format!("\n## {}\n\n| Shift Time | Worker |\n|---|---|\n", day.day));
            for slot in &day.slots {
                let worker = slot.worker.as_ref().map_or(UNASSIGNED, |w| w.name());
                out.push_str(&format!("| {} | {} |\n", slot.label, worker));
            }
        }
        out.push_str("\n## Summary of Hours\n\n| Worker Name | Total Hours |\n|---|---|\n");
        for entry in summary.entries() {
            out.push_str(&format!("| {} | {} |\n", entry.worker, entry.hours));
        }
        out.push_str(&format!(
            "\n_Generated on {} (catalog {})_\n",
            generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            roster.catalog_version()
        ));
        out
    }
}

/// Écrit le rendu visuel ; rien n'est laissé sur disque en cas d'échec.
pub fn export_roster<P: AsRef<Path>>(
    path: P,
    renderer: &dyn RosterRenderer,
    title: &str,
    roster: &Roster,
) -> Result<()> {
    write_atomic(path.as_ref(), renderer.render(title, roster).as_bytes())
}

pub fn export_document<P: AsRef<Path>>(
    path: P,
    renderer: &dyn DocumentRenderer,
    roster: &Roster,
    summary: &HoursSummary,
    generated_at: DateTime<Utc>,
) -> Result<()> {
    let doc = renderer.render(roster, summary, generated_at);
    write_atomic(path.as_ref(), doc.as_bytes())
}
