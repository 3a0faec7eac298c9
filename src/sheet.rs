use crate::error::{Result, RosterError};
use crate::model::{Availability, Day, Worker};
use csv::ReaderBuilder;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

pub const FIRST_NAME: &str = "First Name";
pub const LAST_NAME: &str = "Last Name";
pub const EMAIL: &str = "Email";

/// Colonnes attendues, dans l'ordre canonique du fichier source.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    FIRST_NAME,
    LAST_NAME,
    EMAIL,
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Tableau brut fourni par l'import (en-têtes + lignes de cellules).
#[derive(Debug, Clone)]
pub struct Sheet {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Ligne normalisée : un travailleur et sa disponibilité par jour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerRecord {
    pub worker: Worker,
    pub email: String,
    pub days: BTreeMap<Day, Availability>,
}

static UNAVAILABLE: Availability = Availability::Unavailable;

impl WorkerRecord {
    pub fn availability(&self, day: Day) -> &Availability {
        self.days.get(&day).unwrap_or(&UNAVAILABLE)
    }
}

impl Sheet {
    /// Construit un tableau en validant le schéma avant toute lecture de ligne.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        check_columns(&headers)?;
        Ok(Self { headers, rows })
    }

    /// Import CSV avec en-têtes `First Name,Last Name,Email,Sunday..Saturday`.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| RosterError::io("reading sheet", path, e))?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(file);
        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        check_columns(&headers)?;
        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            rows.push(rec.iter().map(str::to_string).collect());
        }
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column(&self, name: &str) -> usize {
        // le schéma est validé à la construction
        self.headers.iter().position(|h| h == name).unwrap_or(usize::MAX)
    }

    /// Normalise chaque ligne, dans l'ordre du tableau. Les lignes sans
    /// prénom ni nom sont ignorées.
    pub fn records(&self) -> Vec<WorkerRecord> {
        let first = self.column(FIRST_NAME);
        let last = self.column(LAST_NAME);
        let email = self.column(EMAIL);
        let day_cols: Vec<(Day, usize)> =
            Day::ALL.iter().map(|d| (*d, self.column(d.name()))).collect();

        self.rows
            .iter()
            .filter_map(|row| {
                let cell = |idx: usize| row.get(idx).map(String::as_str);
                let worker = Worker::from_parts(cell(first).unwrap_or(""), cell(last).unwrap_or(""));
                if worker.name().is_empty() {
                    tracing::debug!("skipping row without a name");
                    return None;
                }
                Some(WorkerRecord {
                    worker,
                    email: cell(email).unwrap_or("").trim().to_string(),
                    days: day_cols
                        .iter()
                        .map(|(day, idx)| (*day, Availability::classify(cell(*idx))))
                        .collect(),
                })
            })
            .collect()
    }
}

/// Vérifie la présence de toutes les colonnes obligatoires.
pub fn check_columns(headers: &[String]) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .map(|col| col.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(RosterError::Schema { missing })
    }
}
