use crate::availability::AvailabilityTable;
use crate::catalog::ShiftCatalog;
use crate::error::{Result, RosterError};
use crate::hours::HoursSummary;
use crate::roster::Roster;
use crate::scheduler::Scheduler;
use crate::sheet::Sheet;
use rand::Rng;
use std::path::Path;

/// État explicite d'une session : tableau chargé, disponibilités, roster.
///
/// Une action en échec laisse intact l'état de l'étape précédente.
#[derive(Debug, Default)]
pub struct Session {
    catalog: ShiftCatalog,
    sheet: Option<Sheet>,
    availability: Option<AvailabilityTable>,
    roster: Option<Roster>,
}

impl Session {
    pub fn new(catalog: ShiftCatalog) -> Self {
        Self {
            catalog,
            sheet: None,
            availability: None,
            roster: None,
        }
    }

    pub fn catalog(&self) -> &ShiftCatalog {
        &self.catalog
    }

    pub fn sheet(&self) -> Option<&Sheet> {
        self.sheet.as_ref()
    }

    pub fn availability(&self) -> Option<&AvailabilityTable> {
        self.availability.as_ref()
    }

    pub fn roster(&self) -> Option<&Roster> {
        self.roster.as_ref()
    }

    pub fn load_sheet(&mut self, sheet: Sheet) {
        tracing::info!(rows = sheet.len(), "sheet loaded");
        self.sheet = Some(sheet);
    }

    /// Un fichier invalide ne remplace pas le tableau déjà chargé.
    pub fn load_sheet_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let sheet = Sheet::from_csv_path(path)?;
        self.load_sheet(sheet);
        Ok(())
    }

    /// Reconstruit la table de disponibilités depuis le tableau chargé.
    pub fn generate_availability(&mut self) -> Result<&AvailabilityTable> {
        let sheet = self
            .sheet
            .as_ref()
            .ok_or(RosterError::MissingStep("loading a sheet"))?;
        let table = AvailabilityTable::build(&self.catalog, &sheet.records());
        tracing::info!(days = table.days().len(), "availability generated");
        Ok(self.availability.insert(table))
    }

    /// Génère un roster neuf ; l'ancien est remplacé en bloc.
    pub fn generate_roster<R: Rng>(&mut self, scheduler: &mut Scheduler<R>) -> Result<&Roster> {
        let table = self
            .availability
            .as_ref()
            .ok_or(RosterError::MissingStep("generating availability"))?;
        let roster = scheduler.assign(table);
        tracing::info!(unassigned = roster.unassigned_count(), "roster generated");
        Ok(self.roster.insert(roster))
    }

    pub fn hours_summary(&self) -> Result<HoursSummary> {
        let roster = self
            .roster
            .as_ref()
            .ok_or(RosterError::MissingStep("generating the schedule"))?;
        HoursSummary::from_roster(roster)
    }
}
