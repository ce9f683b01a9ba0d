use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Créneau d'astreinte borné (le fuseau écrit dans le fichier est conservé).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    pub email: String,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl Shift {
    pub fn new<E: Into<String>>(
        email: E,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            email: email.into(),
            start,
            end,
        }
    }

    /// Durée en minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Liste de créneaux ; l'ordre d'insertion est l'ordre chronologique attendu.
///
/// La (dé)sérialisation passe par le codec de [`crate::codec`] : une suite de
/// paires ordonnées `horodatage → personne`, jamais une table de hachage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftList(pub(crate) Vec<Shift>);

impl ShiftList {
    pub fn new(shifts: Vec<Shift>) -> Self {
        Self(shifts)
    }

    pub fn into_inner(self) -> Vec<Shift> {
        self.0
    }
}

impl From<Vec<Shift>> for ShiftList {
    fn from(shifts: Vec<Shift>) -> Self {
        Self(shifts)
    }
}

impl std::ops::Deref for ShiftList {
    type Target = [Shift];

    fn deref(&self) -> &[Shift] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ShiftList {
    type Item = &'a Shift;
    type IntoIter = std::slice::Iter<'a, Shift>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Options d'extension automatique de la rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExtendOpts {
    pub min_days: i64,
    pub max_days: i64,
    #[serde(default)]
    pub users: Vec<String>,
}

/// Planning d'astreinte complet, tel que lu depuis un fichier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schedule {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extend: Option<ExtendOpts>,
    #[serde(default)]
    pub shifts: ShiftList,
}
