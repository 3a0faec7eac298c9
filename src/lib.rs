#![forbid(unsafe_code)]
//! Weekly roster — génération d'un planning hebdomadaire de shifts.
//!
//! - Import d'un tableau de disponibilités (CSV), une colonne par jour.
//! - Catalogue statique et versionné des shifts de chaque jour.
//! - Affectation aléatoire sans doublon dans la journée (sauf repli).
//! - Total d'heures par travailleur ; rendus texte/Markdown, exports CSV/JSON.
//! - Lieux de travail persistés en JSON.

pub mod availability;
pub mod catalog;
pub mod error;
pub mod hours;
pub mod io;
pub mod model;
pub mod render;
pub mod roster;
pub mod scheduler;
pub mod session;
pub mod sheet;
pub mod workplace;

pub use availability::{AvailabilityTable, DayReport};
pub use catalog::{shift_duration_hours, DayShifts, ShiftCatalog, STANDARD_CATALOG_VERSION};
pub use error::RosterError;
pub use hours::{HoursSummary, WorkerHours};
pub use model::{Availability, Day, Worker};
pub use render::{DocumentRenderer, MarkdownDocument, RosterRenderer, TextRoster};
pub use roster::{DayRoster, Roster, SlotAssignment};
pub use scheduler::{check_roster, IssueKind, RosterIssue, Scheduler};
pub use session::Session;
pub use sheet::{Sheet, WorkerRecord, REQUIRED_COLUMNS};
pub use workplace::{JsonWorkplaceStore, Workplace, WorkplaceStore, Workplaces};
