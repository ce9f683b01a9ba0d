#![forbid(unsafe_code)]
//! Relève — validation d'un planning d'astreinte écrit à la main (YAML)
//! et synchronisation vers un service de pagination.
//!
//! - Le fichier décrit les créneaux comme une table ordonnée
//!   `horodatage RFC3339 → personne`, close par la sentinelle `TBD`.
//! - Décodage puis validation systématique ; les échecs de validation sont
//!   agrégés (tous les messages, jamais le premier seul).
//! - Cœur synchrone et sans état ; l'accès réseau vit dans [`pager`].

pub mod check;
pub mod codec;
pub mod io;
pub mod model;
pub mod pager;

pub use check::{check, Violation, Violations};
pub use codec::SHIFT_LIST_ENDER;
pub use model::{ExtendOpts, Schedule, Shift, ShiftList};
pub use pager::{HttpPager, Pager};
