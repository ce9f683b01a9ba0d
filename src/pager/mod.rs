//! Client du service de pagination (API REST v2 PagerDuty).
//!
//! Consomme un couple `(schedule_id, ShiftList)` déjà validé, en lecture
//! seule ; aucune re-validation ici.

mod http;
mod types;

pub use http::HttpPager;
pub use types::{Override, PdSchedule, User, UserRef};

use crate::model::ShiftList;
use anyhow::Result;

/// Lecture/écriture vers le service de pagination.
pub trait Pager {
    /// Réconcilie les overrides distants avec la liste de créneaux validée.
    fn sync(&mut self, schedule_id: &str, shifts: &ShiftList) -> Result<()>;
    /// Vérifie que le planning distant existe.
    fn get_schedule(&mut self, id: &str) -> Result<PdSchedule>;
}

/// Construit le client HTTP à partir de `$PD_TOKEN`.
pub fn new() -> Result<HttpPager> {
    HttpPager::from_env()
}
