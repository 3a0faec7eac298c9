use crate::catalog::shift_duration_hours;
use crate::error::Result;
use crate::model::Worker;
use crate::roster::Roster;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerHours {
    pub worker: Worker,
    pub hours: u32,
}

/// Total d'heures par travailleur, trié par heures décroissantes
/// (à égalité, ordre de première apparition dans le roster).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HoursSummary {
    entries: Vec<WorkerHours>,
}

impl HoursSummary {
    /// Échoue dès qu'un libellé de shift assigné est mal formé.
    pub fn from_roster(roster: &Roster) -> Result<Self> {
        let mut entries: Vec<WorkerHours> = Vec::new();
        for (_, slot) in roster.slots() {
            let Some(worker) = &slot.worker else {
                continue;
            };
            let hours = shift_duration_hours(&slot.label)?;
            match entries.iter_mut().find(|e| &e.worker == worker) {
                Some(entry) => entry.hours += hours,
                None => entries.push(WorkerHours {
                    worker: worker.clone(),
                    hours,
                }),
            }
        }
        // tri stable
        entries.sort_by(|a, b| b.hours.cmp(&a.hours));
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[WorkerHours] {
        &self.entries
    }

    pub fn hours_for(&self, worker: &Worker) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| &e.worker == worker)
            .map(|e| e.hours)
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|e| e.hours).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
