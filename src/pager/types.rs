use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Planning distant (seuls les champs utiles sont retenus).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PdSchedule {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Override distant : une personne remplace la rotation sur un intervalle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Override {
    pub user: UserRef,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "summary", default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

/// Utilisateur distant (seuls les champs utiles sont retenus).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct GetScheduleResponse {
    pub schedule: PdSchedule,
}

#[derive(Debug, Deserialize)]
pub(super) struct GetOverridesResponse {
    pub overrides: Vec<Override>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GetUsersResponse {
    pub users: Vec<User>,
}
