use crate::error::{Result, RosterError};
use crate::model::Day;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Version du catalogue intégré. Toute modification des créneaux change la
/// durée des shifts et doit s'accompagner d'une nouvelle version.
pub const STANDARD_CATALOG_VERSION: &str = "standard-v1";

const STANDARD_SHIFTS: [(Day, &[&str]); 7] = [
    (Day::Sunday, &["12 PM - 4 PM", "4 PM - 7 PM", "7 PM - 10 PM", "10 PM - 12 AM"]),
    (Day::Monday, &["2 PM - 5 PM", "5 PM - 8 PM", "8 PM - 12 AM"]),
    (Day::Tuesday, &["2 PM - 5 PM", "5 PM - 8 PM", "8 PM - 12 AM"]),
    (Day::Wednesday, &["2 PM - 6 PM", "6 PM - 9 PM", "9 PM - 12 AM"]),
    (Day::Thursday, &["2 PM - 4 PM", "4 PM - 8 PM", "8 PM - 12 AM"]),
    (Day::Friday, &["2 PM - 7 PM", "7 PM - 9 PM", "9 PM - 12 AM"]),
    (Day::Saturday, &["12 PM - 4 PM", "4 PM - 8 PM", "8 PM - 12 AM"]),
];

/// Créneaux d'un jour, dans l'ordre du catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayShifts {
    pub day: Day,
    pub shifts: Vec<String>,
}

/// Catalogue statique des shifts de la semaine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCatalog {
    pub version: String,
    pub days: Vec<DayShifts>,
}

impl ShiftCatalog {
    /// Catalogue sans validation ; les libellés sont contrôlés au calcul des heures.
    pub fn new<V: Into<String>>(version: V, days: Vec<DayShifts>) -> Self {
        Self {
            version: version.into(),
            days,
        }
    }

    pub fn standard() -> Self {
        let days = STANDARD_SHIFTS
            .iter()
            .map(|(day, labels)| DayShifts {
                day: *day,
                shifts: labels.iter().map(|l| l.to_string()).collect(),
            })
            .collect();
        Self::new(STANDARD_CATALOG_VERSION, days)
    }

    pub fn shifts_for(&self, day: Day) -> &[String] {
        self.days
            .iter()
            .find(|d| d.day == day)
            .map(|d| d.shifts.as_slice())
            .unwrap_or(&[])
    }

    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(RosterError::Catalog("version cannot be empty".into()));
        }
        let mut seen_days = HashSet::new();
        for entry in &self.days {
            if !seen_days.insert(entry.day) {
                return Err(RosterError::Catalog(format!("day {} listed twice", entry.day)));
            }
            let mut seen_labels = HashSet::new();
            for label in &entry.shifts {
                if !seen_labels.insert(label.as_str()) {
                    return Err(RosterError::Catalog(format!(
                        "shift {label:?} listed twice on {}",
                        entry.day
                    )));
                }
                shift_duration_hours(label)?;
            }
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| RosterError::io("reading catalog", path, e))?;
        let catalog: ShiftCatalog = serde_json::from_slice(&data)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        crate::io::write_atomic(path.as_ref(), json.as_bytes())
    }
}

impl Default for ShiftCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Découpe `"<N> AM|PM - <N> AM|PM"` en heures de début et de fin (0..24).
pub fn parse_label(label: &str) -> Result<(u32, u32)> {
    let normalized = label.replace(['–', '—'], "-");
    let (start, end) = normalized
        .split_once('-')
        .ok_or_else(|| RosterError::format(label, "expected a '-' between start and end"))?;
    let start = parse_clock(label, start)?;
    let end = parse_clock(label, end)?;
    Ok((start, end))
}

/// Durée entière en heures ; un shift qui passe minuit ajoute 24h à la fin.
pub fn shift_duration_hours(label: &str) -> Result<u32> {
    let (start, mut end) = parse_label(label)?;
    if end <= start {
        end += 24;
    }
    Ok(end - start)
}

fn parse_clock(label: &str, raw: &str) -> Result<u32> {
    let mut parts = raw.split_whitespace();
    let (Some(hour), Some(meridiem), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(RosterError::format(label, "expected '<hour> AM|PM' on each side"));
    };
    let hour: u32 = hour
        .parse()
        .map_err(|_| RosterError::format(label, "hour is not a number"))?;
    if !(1..=12).contains(&hour) {
        return Err(RosterError::format(label, "hour must be between 1 and 12"));
    }
    let base = hour % 12;
    if meridiem.eq_ignore_ascii_case("AM") {
        Ok(base)
    } else if meridiem.eq_ignore_ascii_case("PM") {
        Ok(base + 12)
    } else {
        Err(RosterError::format(label, "expected AM or PM"))
    }
}
