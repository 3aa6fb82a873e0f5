use crate::model::Role;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Plafond de personnes retenues par créneau.
pub const MAX_PICKS: usize = 3;

/// Options de planification.
///
/// Les deux plafonds horaires sont acceptés et conservés, mais la génération
/// ne les consulte pas : la sortie reste celle d'un tirage non contraint.
/// Limite d'heures voulue ou simple réservation ? Question ouverte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedOptions {
    pub max_week_paid_hours: u32,
    pub max_hours_per_person: Option<u32>,
}

impl Default for SchedOptions {
    fn default() -> Self {
        Self {
            max_week_paid_hours: 240,
            max_hours_per_person: None,
        }
    }
}

/// Charge informative d'une personne sur le mois généré.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StaffLoad {
    pub name: String,
    pub role: Role,
    pub paid: bool,
    pub shifts: u32,
    pub hours: u32,
    pub paid_hours: u32,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid date: {year}-{month:02} is not a computable calendar month")]
    InvalidDate { year: i32, month: u32 },
    #[error("malformed roster row {row}: {reason}")]
    MalformedRoster { row: usize, reason: String },
}
