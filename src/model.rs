use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Jour de la semaine, dans l'ordre du tableau importé (dimanche en premier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Nom complet, tel qu'utilisé comme en-tête de colonne.
    pub fn name(self) -> &'static str {
        match self {
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Day::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown day: {wanted}"))
    }
}

/// Travailleur, identifié par son nom complet (prénom + nom).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Worker(String);

impl Worker {
    pub fn new<S: Into<String>>(full_name: S) -> Self {
        Self(full_name.into())
    }

    pub fn from_parts(first: &str, last: &str) -> Self {
        Self(format!("{} {}", first.trim(), last.trim()).trim().to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Worker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Disponibilité d'un travailleur pour un jour donné.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Unavailable,
    /// Disponible, avec la plage horaire libre saisie dans la cellule.
    Available(String),
}

impl Availability {
    /// Classe une cellule brute : vide ou `na` (insensible à la casse) => indisponible.
    pub fn classify(cell: Option<&str>) -> Self {
        match cell.map(str::trim) {
            None | Some("") => Availability::Unavailable,
            Some(v) if v.eq_ignore_ascii_case("na") => Availability::Unavailable,
            Some(v) => Availability::Available(v.to_string()),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available(_))
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            Availability::Available(note) => Some(note),
            Availability::Unavailable => None,
        }
    }
}
