use crate::catalog::shift_duration_hours;
use crate::error::{Result, RosterError};
use crate::hours::HoursSummary;
use crate::roster::Roster;
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Écriture atomique : fichier temporaire dans le même dossier puis renommage.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp =
        NamedTempFile::new_in(dir).map_err(|e| RosterError::io("creating temp file", dir, e))?;
    tmp.write_all(data)
        .and_then(|_| tmp.flush())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| RosterError::io("writing", path, e))?;
    tmp.persist(path)
        .map_err(|e| RosterError::io("renaming into", path, e.error))?;
    Ok(())
}

/// Export JSON du roster (jolie mise en forme)
pub fn export_roster_json<P: AsRef<Path>>(path: P, roster: &Roster) -> Result<()> {
    let s = serde_json::to_string_pretty(roster)?;
    write_atomic(path.as_ref(), s.as_bytes())
}

/// Export CSV : header `day,shift,worker,hours` ; travailleur vide si non assigné.
pub fn export_roster_csv<P: AsRef<Path>>(path: P, roster: &Roster) -> Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    w.write_record(["day", "shift", "worker", "hours"])?;
    for (day, slot) in roster.slots() {
        let hours = shift_duration_hours(&slot.label)?.to_string();
        let worker = slot.worker.as_ref().map_or("", |w| w.name());
        w.write_record([day.name(), slot.label.as_str(), worker, hours.as_str()])?;
    }
    let bytes = w
        .into_inner()
        .map_err(|e| RosterError::io("encoding csv", path.as_ref(), e.into_error()))?;
    write_atomic(path.as_ref(), &bytes)
}

/// Export CSV du résumé : header `worker,hours`, ordre d'affichage conservé.
pub fn export_hours_csv<P: AsRef<Path>>(path: P, summary: &HoursSummary) -> Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    w.write_record(["worker", "hours"])?;
    for entry in summary.entries() {
        w.write_record([entry.worker.name(), entry.hours.to_string().as_str()])?;
    }
    let bytes = w
        .into_inner()
        .map_err(|e| RosterError::io("encoding csv", path.as_ref(), e.into_error()))?;
    write_atomic(path.as_ref(), &bytes)
}
