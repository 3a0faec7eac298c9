use crate::error::{Result, RosterError};
use crate::io::write_atomic;
use crate::model::Day;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Horaires proposés par défaut lors de la saisie.
pub const DEFAULT_HOURS: &str = "9 AM - 5 PM";

/// Identifiant fort pour Workplace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkplaceId(Uuid);

impl WorkplaceId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Lieu de travail et ses horaires libres par jour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workplace {
    #[serde(default = "WorkplaceId::random")]
    pub id: WorkplaceId,
    pub name: String,
    #[serde(default)]
    pub hours: BTreeMap<Day, String>,
}

impl Workplace {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            id: WorkplaceId::random(),
            name: name.into(),
            hours: BTreeMap::new(),
        }
    }

    pub fn hours_for(&self, day: Day) -> &str {
        self.hours.get(&day).map_or(DEFAULT_HOURS, String::as_str)
    }
}

/// Enregistrement complet, chargé et sauvegardé d'un bloc.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workplaces {
    #[serde(default)]
    pub workplaces: Vec<Workplace>,
}

impl Workplaces {
    pub fn find(&self, name: &str) -> Option<&Workplace> {
        self.workplaces.iter().find(|w| w.name == name)
    }

    pub fn add<N: Into<String>>(&mut self, name: N) -> Result<&Workplace> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RosterError::EmptyWorkplaceName);
        }
        if self.find(trimmed).is_some() {
            return Err(RosterError::DuplicateWorkplace(trimmed.to_string()));
        }
        self.workplaces.push(Workplace::new(trimmed));
        Ok(&self.workplaces[self.workplaces.len() - 1])
    }

    pub fn remove(&mut self, name: &str) -> Result<Workplace> {
        let pos = self
            .workplaces
            .iter()
            .position(|w| w.name == name)
            .ok_or_else(|| RosterError::UnknownWorkplace(name.to_string()))?;
        Ok(self.workplaces.remove(pos))
    }

    /// Un horaire vide laisse l'ancienne valeur en place.
    pub fn set_hours(&mut self, name: &str, day: Day, hours: &str) -> Result<()> {
        let workplace = self
            .workplaces
            .iter_mut()
            .find(|w| w.name == name)
            .ok_or_else(|| RosterError::UnknownWorkplace(name.to_string()))?;
        let hours = hours.trim();
        if !hours.is_empty() {
            workplace.hours.insert(day, hours.to_string());
        }
        Ok(())
    }
}

pub trait WorkplaceStore {
    /// Charge l'enregistrement ; un support absent donne un enregistrement vide.
    fn load(&self) -> Result<Workplaces>;
    /// Sauvegarde de manière atomique.
    fn save(&self, data: &Workplaces) -> Result<()>;
}

pub struct JsonWorkplaceStore {
    path: PathBuf,
}

impl JsonWorkplaceStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WorkplaceStore for JsonWorkplaceStore {
    fn load(&self) -> Result<Workplaces> {
        if !self.path.exists() {
            return Ok(Workplaces::default());
        }
        let data = fs::read(&self.path).map_err(|e| RosterError::io("reading", &self.path, e))?;
        Ok(serde_json::from_slice(&data)?)
    }

    fn save(&self, data: &Workplaces) -> Result<()> {
        let json = serde_json::to_vec_pretty(data)?;
        write_atomic(&self.path, &json)
    }
}
