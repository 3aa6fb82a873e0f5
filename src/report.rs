use crate::model::{Pick, ShiftKind, ShiftSlot, Violation};
use crate::scheduler::StaffLoad;
use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Picks d'un créneau, à plat pour la sérialisation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotAssignment {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub slot: ShiftSlot,
    #[cfg_attr(feature = "serde", serde(default))]
    pub picks: Vec<Pick>,
}

/// Instantané d'un mois généré, remis aux renderers et aux exports.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduleReport {
    pub year: i32,
    pub month: u32,
    pub slots: Vec<SlotAssignment>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub violations: Vec<Violation>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub load: Vec<StaffLoad>,
}

impl ScheduleReport {
    pub fn picks(&self, date: NaiveDate, shift: ShiftKind) -> &[Pick] {
        let key = ShiftSlot::new(date, shift);
        self.slots
            .iter()
            .find(|s| s.slot == key)
            .map(|s| s.picks.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_fully_covered(&self) -> bool {
        self.violations.is_empty()
    }

    /// Nom de fichier conventionnel du document mensuel.
    pub fn file_stem(&self) -> String {
        format!("schedule_{}_{}", self.month, self.year)
    }
}
