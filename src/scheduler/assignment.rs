use crate::availability::{AvailabilityTable, DayAvailability};
use crate::model::Worker;
use crate::roster::{DayRoster, Roster, SlotAssignment};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

pub(super) fn assign<R: Rng + ?Sized>(table: &AvailabilityTable, rng: &mut R) -> Roster {
    let days = table
        .days()
        .iter()
        .map(|day| assign_day(day, rng))
        .collect();
    Roster::new(table.catalog_version().to_string(), days)
}

fn assign_day<R: Rng + ?Sized>(day: &DayAvailability, rng: &mut R) -> DayRoster {
    let mut assigned_today: HashSet<Worker> = HashSet::new();
    let mut slots = Vec::with_capacity(day.shifts.len());

    for shift in &day.shifts {
        let mut candidates = shift.workers.clone();
        candidates.shuffle(rng);

        let fresh = candidates
            .iter()
            .find(|w| !assigned_today.contains(*w))
            .cloned();

        let worker = match fresh {
            Some(w) => {
                assigned_today.insert(w.clone());
                Some(w)
            }
            // tout le monde est déjà pris aujourd'hui : on double plutôt que laisser un trou
            None => candidates.first().cloned().inspect(|w| {
                tracing::warn!(day = %day.day, shift = %shift.label, worker = %w, "double booking");
            }),
        };

        if worker.is_none() {
            tracing::warn!(day = %day.day, shift = %shift.label, "no worker available");
        } else {
            tracing::debug!(day = %day.day, shift = %shift.label, worker = ?worker, "assigned");
        }

        slots.push(SlotAssignment {
            label: shift.label.clone(),
            worker,
        });
    }

    DayRoster {
        day: day.day,
        slots,
    }
}
