use crate::model::{Day, Worker};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum IssueKind {
    /// Aucun travailleur disponible pour ce shift.
    Unassigned,
    /// Travailleur réaffecté le même jour faute d'autre candidat.
    DoubleBooked(Worker),
}

/// Constat sur un roster ; jamais une erreur, seulement un avertissement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterIssue {
    pub day: Day,
    pub label: String,
    pub kind: IssueKind,
}
