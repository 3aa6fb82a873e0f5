mod assignment;
mod coverage;
mod types;

pub use types::{SchedError, SchedOptions, StaffLoad, MAX_PICKS};

use crate::model::{Pick, ShiftSlot, Violation};
use crate::report::{ScheduleReport, SlotAssignment};
use crate::roster::RosterStore;
use rand::Rng;
use std::collections::BTreeMap;

/// Scheduler : tire au hasard le personnel de chaque créneau d'un mois et
/// relève les rôles manquants.
///
/// Chaque appel à `generate` repart d'un état vide ; une date invalide laisse
/// le résultat précédent intact.
#[derive(Debug)]
pub struct Scheduler<'a> {
    roster: &'a RosterStore,
    options: SchedOptions,
    assignments: BTreeMap<ShiftSlot, Vec<Pick>>,
    violations: Vec<Violation>,
    period: Option<(i32, u32)>,
}

impl<'a> Scheduler<'a> {
    pub fn new(roster: &'a RosterStore, options: SchedOptions) -> Self {
        Self {
            roster,
            options,
            assignments: BTreeMap::new(),
            violations: Vec::new(),
            period: None,
        }
    }

    pub fn roster(&self) -> &RosterStore {
        self.roster
    }

    pub fn options(&self) -> SchedOptions {
        self.options
    }

    pub fn assignments(&self) -> &BTreeMap<ShiftSlot, Vec<Pick>> {
        &self.assignments
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn picks(&self, slot: &ShiftSlot) -> &[Pick] {
        self.assignments.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Génère le mois avec le générateur aléatoire du thread courant.
    pub fn generate(&mut self, year: i32, month: u32) -> Result<(), SchedError> {
        self.generate_with(year, month, &mut rand::rng())
    }

    /// Génère le mois avec une source aléatoire fournie (graine fixe en test).
    pub fn generate_with<R: Rng + ?Sized>(
        &mut self,
        year: i32,
        month: u32,
        rng: &mut R,
    ) -> Result<(), SchedError> {
        assignment::generate(self, year, month, rng)
    }

    /// Heures par personne (informatif, jamais utilisé pour l'assignation).
    pub fn staff_load(&self) -> Vec<StaffLoad> {
        coverage::staff_load(self)
    }

    /// Instantané du dernier mois généré, `None` avant toute génération.
    pub fn report(&self) -> Option<ScheduleReport> {
        let (year, month) = self.period?;
        let slots = self
            .assignments
            .iter()
            .map(|(slot, picks)| SlotAssignment {
                slot: *slot,
                picks: picks.clone(),
            })
            .collect();
        Some(ScheduleReport {
            year,
            month,
            slots,
            violations: self.violations.clone(),
            load: self.staff_load(),
        })
    }
}
