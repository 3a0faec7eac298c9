use crate::catalog::ShiftCatalog;
use crate::model::{Day, Worker};
use crate::sheet::WorkerRecord;
use serde::Serialize;

/// Travailleurs disponibles pour un shift, dans l'ordre des lignes importées.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftAvailability {
    pub label: String,
    pub workers: Vec<Worker>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAvailability {
    pub day: Day,
    pub shifts: Vec<ShiftAvailability>,
}

/// Vue jour -> shift -> travailleurs disponibles. Immuable une fois construite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityTable {
    catalog_version: String,
    days: Vec<DayAvailability>,
}

impl AvailabilityTable {
    /// La disponibilité est par jour : chaque shift du jour reçoit la même liste.
    pub fn build(catalog: &ShiftCatalog, records: &[WorkerRecord]) -> Self {
        let days = catalog
            .days
            .iter()
            .map(|entry| {
                let available: Vec<Worker> = records
                    .iter()
                    .filter(|r| r.availability(entry.day).is_available())
                    .map(|r| r.worker.clone())
                    .collect();
                tracing::debug!(day = %entry.day, available = available.len(), "day availability");
                DayAvailability {
                    day: entry.day,
                    shifts: entry
                        .shifts
                        .iter()
                        .map(|label| ShiftAvailability {
                            label: label.clone(),
                            workers: available.clone(),
                        })
                        .collect(),
                }
            })
            .collect();
        Self {
            catalog_version: catalog.version.clone(),
            days,
        }
    }

    pub fn catalog_version(&self) -> &str {
        &self.catalog_version
    }

    pub fn days(&self) -> &[DayAvailability] {
        &self.days
    }

    pub fn day(&self, day: Day) -> Option<&DayAvailability> {
        self.days.iter().find(|d| d.day == day)
    }
}

/// Travailleur disponible, avec son email et la plage saisie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableEntry {
    pub worker: Worker,
    pub email: String,
    pub note: String,
}

/// Rapport d'un jour : qui est disponible, qui ne l'est pas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    pub day: Day,
    pub available: Vec<AvailableEntry>,
    pub unavailable: Vec<Worker>,
}

impl DayReport {
    pub fn build(records: &[WorkerRecord], day: Day) -> Self {
        let mut available = Vec::new();
        let mut unavailable = Vec::new();
        for record in records {
            match record.availability(day).note() {
                Some(note) => available.push(AvailableEntry {
                    worker: record.worker.clone(),
                    email: record.email.clone(),
                    note: note.to_string(),
                }),
                None => unavailable.push(record.worker.clone()),
            }
        }
        Self {
            day,
            available,
            unavailable,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if self.unavailable.is_empty() {
            out.push_str(&format!("No workers marked as 'Not Available' for {}.\n", self.day));
        } else {
            out.push_str(&format!(
                "The following workers are NOT AVAILABLE on {}:\n{}\n",
                self.day,
                "-".repeat(50)
            ));
            for w in &self.unavailable {
                out.push_str(&format!("{w} - Not Available\n"));
            }
        }
        out.push('\n');
        if self.available.is_empty() {
            out.push_str(&format!("No workers marked as 'Available' for {}.\n", self.day));
        } else {
            out.push_str(&format!(
                "The following workers are AVAILABLE on {}:\n{}\n",
                self.day,
                "-".repeat(50)
            ));
            for e in &self.available {
                out.push_str(&format!(
                    "{} - Email: {} - Available Time: {}\n",
                    e.worker, e.email, e.note
                ));
            }
        }
        out
    }
}
