//! Codec du `shifts:` — table ordonnée `horodatage → personne` ⇄ [`ShiftList`].
//!
//! Chaque entrée ne porte que le début de son créneau : la fin est le début
//! de l'entrée suivante, et la dernière entrée (sentinelle `TBD`) ne fait que
//! fermer le dernier créneau. Les entrées sont lues dans l'ordre du document,
//! jamais via une table de hachage.

use crate::model::{Shift, ShiftList};
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Valeur réservée de la dernière entrée : ferme la rotation sans inventer
/// une personne fictive.
pub const SHIFT_LIST_ENDER: &str = "TBD";

fn format_instant(t: &DateTime<FixedOffset>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl Serialize for ShiftList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let Some(last) = self.0.last() else {
            return Err(ser::Error::custom("cannot represent an empty rotation"));
        };
        let mut map = serializer.serialize_map(Some(self.0.len() + 1))?;
        for shift in &self.0 {
            map.serialize_entry(&format_instant(&shift.start), &shift.email)?;
        }
        map.serialize_entry(&format_instant(&last.end), SHIFT_LIST_ENDER)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for ShiftList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ShiftListVisitor)
    }
}

struct ShiftListVisitor;

impl<'de> Visitor<'de> for ShiftListVisitor {
    type Value = ShiftList;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of RFC3339 timestamp to assignee")
    }

    // `shifts:` sans valeur.
    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(ShiftList::default())
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(ShiftList::default())
    }

    // `shifts: []` est accepté comme liste vide ; toute séquence non vide est
    // une erreur de format.
    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        match seq.next_element::<serde_yaml::Value>()? {
            None => Ok(ShiftList::default()),
            Some(_) => Err(de::Error::custom(
                "`shifts` must be a mapping of timestamp to assignee",
            )),
        }
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        while let Some((k, v)) = map.next_entry::<serde_yaml::Value, serde_yaml::Value>()? {
            let k = k
                .as_str()
                .ok_or_else(|| de::Error::custom("shift time is not a string"))?;
            let v = v
                .as_str()
                .ok_or_else(|| de::Error::custom("shift email is not a string"))?;
            entries.push((k.to_owned(), v.to_owned()));
        }
        shifts_from_entries(&entries)
    }
}

/// Repliage des paires ordonnées en créneaux bornés : l'entrée i borne la fin
/// du créneau i-1, la dernière entrée doit valoir la sentinelle.
fn shifts_from_entries<E>(entries: &[(String, String)]) -> Result<ShiftList, E>
where
    E: de::Error,
{
    let n = entries.len();
    let mut shifts: Vec<Shift> = Vec::with_capacity(n.saturating_sub(1));

    for (i, (key, value)) in entries.iter().enumerate() {
        let start = DateTime::parse_from_rfc3339(key)
            .map_err(|e| E::custom(format!("invalid shift timestamp {key:?}: {e}")))?;

        if i > 0 {
            shifts[i - 1].end = start;
        }

        if i + 1 < n {
            // La fin sera écrasée par l'entrée suivante.
            shifts.push(Shift::new(value.clone(), start, start));
        } else if value != SHIFT_LIST_ENDER {
            return Err(E::custom(format!(
                "last shift must have user {SHIFT_LIST_ENDER:?}, but found {value:?}"
            )));
        }
    }

    Ok(ShiftList::new(shifts))
}
