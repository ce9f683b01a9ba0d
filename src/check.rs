//! Vérifications d'un [`Schedule`] décodé : chaque règle est indépendante et
//! toutes sont évaluées — les échecs sont agrégés, jamais court-circuités.

use crate::model::Schedule;
use std::fmt;
use thiserror::Error;

const MIN_DAYS_MIN: i64 = 14;
const MIN_DAYS_MAX: i64 = 30;
const MAX_DAYS_MIN: i64 = 21;
const MAX_DAYS_MAX: i64 = 56;

/// Échec d'une règle de validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("schedule is missing `id` field")]
    MissingId,
    #[error("start timestamps in `shifts` must be unique")]
    DuplicateStart,
    #[error("{0} appears for two shifts in a row. this should instead be expressed as a single, longer shift")]
    RepeatedAssignee(String),
    #[error("`shifts` must be ordered by time")]
    OutOfOrder,
    #[error("extend.minDays must be between {} and {}, but found {}", MIN_DAYS_MIN, MIN_DAYS_MAX, .0)]
    MinDaysOutOfRange(i64),
    #[error("extend.maxDays must be between {} and {}, but found {}", MAX_DAYS_MIN, MAX_DAYS_MAX, .0)]
    MaxDaysOutOfRange(i64),
    #[error("extend.minDays must be less than extend.maxDays, but {min} >= {max}")]
    MinNotBelowMax { min: i64, max: i64 },
}

/// Ensemble des échecs relevés sur un planning ; `Display` concatène tous les
/// messages, un appelant cherche donc une sous-chaîne, jamais l'égalité.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

type Check = fn(&Schedule) -> Option<Violation>;

/// Passe toutes les règles sur le planning et agrège les échecs.
pub fn check(schedule: &Schedule) -> Result<(), Violations> {
    const CHECKS: [Check; 7] = [
        check_id,
        check_shift_list_dupes,
        check_shift_list_dupe_email,
        check_shift_list_sorted,
        check_extend_min_days,
        check_extend_max_days,
        check_extend_min_less_than_max,
    ];

    let found: Vec<Violation> = CHECKS.iter().filter_map(|rule| rule(schedule)).collect();
    if found.is_empty() {
        Ok(())
    } else {
        Err(Violations(found))
    }
}

fn check_id(s: &Schedule) -> Option<Violation> {
    s.id.is_empty().then_some(Violation::MissingId)
}

// Les doublons ne sont cherchés qu'entre voisins : suffisant dès lors que la
// liste est triée (règle `check_shift_list_sorted`).
fn check_shift_list_dupes(s: &Schedule) -> Option<Violation> {
    s.shifts
        .windows(2)
        .any(|w| w[0].start == w[1].start)
        .then_some(Violation::DuplicateStart)
}

fn check_shift_list_dupe_email(s: &Schedule) -> Option<Violation> {
    s.shifts
        .windows(2)
        .find(|w| w[0].email == w[1].email)
        .map(|w| Violation::RepeatedAssignee(w[0].email.clone()))
}

fn check_shift_list_sorted(s: &Schedule) -> Option<Violation> {
    let mut sorted = s.shifts.to_vec();
    sorted.sort_by_key(|shift| shift.start);
    (sorted[..] != s.shifts[..]).then_some(Violation::OutOfOrder)
}

fn check_extend_min_days(s: &Schedule) -> Option<Violation> {
    let extend = s.extend.as_ref()?;
    (!(MIN_DAYS_MIN..=MIN_DAYS_MAX).contains(&extend.min_days))
        .then_some(Violation::MinDaysOutOfRange(extend.min_days))
}

fn check_extend_max_days(s: &Schedule) -> Option<Violation> {
    let extend = s.extend.as_ref()?;
    (!(MAX_DAYS_MIN..=MAX_DAYS_MAX).contains(&extend.max_days))
        .then_some(Violation::MaxDaysOutOfRange(extend.max_days))
}

fn check_extend_min_less_than_max(s: &Schedule) -> Option<Violation> {
    let extend = s.extend.as_ref()?;
    (extend.min_days >= extend.max_days).then_some(Violation::MinNotBelowMax {
        min: extend.min_days,
        max: extend.max_days,
    })
}
