use super::{IssueKind, RosterIssue};
use crate::model::Worker;
use crate::roster::Roster;
use std::collections::HashSet;

/// Liste les shifts non assignés et les doubles affectations du jour.
pub fn check_roster(roster: &Roster) -> Vec<RosterIssue> {
    let mut out = Vec::new();

    for day in roster.days() {
        let mut seen: HashSet<&Worker> = HashSet::new();
        for slot in &day.slots {
            let kind = match &slot.worker {
                None => Some(IssueKind::Unassigned),
                Some(w) if !seen.insert(w) => Some(IssueKind::DoubleBooked(w.clone())),
                Some(_) => None,
            };
            if let Some(kind) = kind {
                out.push(RosterIssue {
                    day: day.day,
                    label: slot.label.clone(),
                    kind,
                });
            }
        }
    }

    out
}
