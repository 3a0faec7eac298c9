mod assignment;
mod checks;
mod types;

pub use checks::check_roster;
pub use types::{IssueKind, RosterIssue};

use crate::availability::AvailabilityTable;
use crate::roster::Roster;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Moteur d'affectation : encapsule la source d'aléa utilisée pour mélanger
/// les candidats. Aucun état n'est conservé entre deux générations.
#[derive(Debug)]
pub struct Scheduler<R = StdRng> {
    rng: R,
}

impl Scheduler<StdRng> {
    /// Graine tirée de l'horloge : deux exécutions successives diffèrent.
    pub fn from_clock() -> Self {
        let seed = clock_seed();
        tracing::debug!(seed, "seeding scheduler from wall clock");
        Self::seeded(seed)
    }

    /// Graine fixe, pour des sorties reproductibles.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Scheduler<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Produit un nouveau roster complet à partir de la table de disponibilités.
    pub fn assign(&mut self, table: &AvailabilityTable) -> Roster {
        assignment::assign(table, &mut self.rng)
    }
}

pub fn clock_seed() -> u64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .map(|n| n as u64)
        .unwrap_or_else(|| now.timestamp_micros() as u64)
}
