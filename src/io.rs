//! Lecture / écriture d'un planning sur disque.
//!
//! La lecture valide toujours : un planning qui échoue aux règles de
//! [`crate::check`] n'est jamais remis à l'appelant.

use crate::check;
use crate::model::Schedule;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::NamedTempFile;

/// Décode puis valide un planning YAML.
pub fn from_str(input: &str) -> Result<Schedule> {
    let schedule: Schedule = serde_yaml::from_str(input)?;
    check::check(&schedule)?;
    Ok(schedule)
}

/// Sérialise un planning en YAML (échoue sur une liste de créneaux vide).
pub fn to_string(schedule: &Schedule) -> Result<String> {
    Ok(serde_yaml::to_string(schedule)?)
}

/// Charge un planning depuis un fichier et le valide.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Schedule> {
    let path = path.as_ref();
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    from_str(&data).with_context(|| format!("invalid schedule {}", path.display()))
}

/// Écrit un planning de manière atomique (fichier temporaire puis rename).
pub fn write<P: AsRef<Path>>(path: P, schedule: &Schedule) -> Result<()> {
    let path = path.as_ref();
    let yaml = to_string(schedule)?;
    let mut tmp = NamedTempFile::new_in(path.parent().unwrap_or_else(|| Path::new(".")))
        .with_context(|| "creating temp file")?;
    tmp.write_all(yaml.as_bytes())?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}

/// Export CSV des créneaux : header `email,start,end`.
pub fn export_shifts_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["email", "start", "end"])?;
    for s in &schedule.shifts {
        let start = s.start.to_rfc3339();
        let end = s.end.to_rfc3339();
        w.write_record([s.email.as_str(), start.as_str(), end.as_str()])?;
    }
    w.flush()?;
    Ok(())
}
