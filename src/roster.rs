use crate::model::{Day, Worker};
use serde::{Deserialize, Serialize};

/// Affectation d'un shift : au plus un travailleur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    pub label: String,
    pub worker: Option<Worker>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRoster {
    pub day: Day,
    pub slots: Vec<SlotAssignment>,
}

/// Planning complet produit par une génération, dans l'ordre du catalogue.
///
/// Seul objet (avec `HoursSummary`) transmis aux moteurs de rendu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    catalog_version: String,
    days: Vec<DayRoster>,
}

impl Roster {
    pub(crate) fn new(catalog_version: String, days: Vec<DayRoster>) -> Self {
        Self {
            catalog_version,
            days,
        }
    }

    pub fn catalog_version(&self) -> &str {
        &self.catalog_version
    }

    pub fn days(&self) -> &[DayRoster] {
        &self.days
    }

    pub fn day(&self, day: Day) -> Option<&DayRoster> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn worker_at(&self, day: Day, label: &str) -> Option<&Worker> {
        self.day(day)?
            .slots
            .iter()
            .find(|s| s.label == label)
            .and_then(|s| s.worker.as_ref())
    }

    /// Tous les couples (jour, shift), y compris non assignés.
    pub fn slots(&self) -> impl Iterator<Item = (Day, &SlotAssignment)> + '_ {
        self.days
            .iter()
            .flat_map(|d| d.slots.iter().map(move |s| (d.day, s)))
    }

    pub fn unassigned_count(&self) -> usize {
        self.slots().filter(|(_, s)| s.worker.is_none()).count()
    }
}
