use super::{types::StaffLoad, Scheduler};
use crate::model::{Pick, ShiftSlot, Violation, ROLES_NEEDED, SHIFT_HOURS};
use std::collections::{BTreeSet, HashMap};

/// Une violation par rôle exigé absent des picks, dans l'ordre de `ROLES_NEEDED`.
pub(super) fn missing_roles(slot: ShiftSlot, picks: &[Pick]) -> impl Iterator<Item = Violation> {
    let present: BTreeSet<_> = picks.iter().map(|p| p.role).collect();
    ROLES_NEEDED
        .into_iter()
        .filter(move |role| !present.contains(role))
        .map(move |missing_role| Violation { slot, missing_role })
}

pub(super) fn staff_load(scheduler: &Scheduler<'_>) -> Vec<StaffLoad> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for pick in scheduler.assignments.values().flatten() {
        *counts.entry(pick.name.as_str()).or_default() += 1;
    }

    scheduler
        .roster
        .records()
        .iter()
        .filter_map(|staff| {
            let shifts = *counts.get(staff.name.as_str())?;
            let hours = shifts * SHIFT_HOURS;
            Some(StaffLoad {
                name: staff.name.clone(),
                role: staff.role,
                paid: staff.paid,
                shifts,
                hours,
                paid_hours: if staff.paid { hours } else { 0 },
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Role, ShiftKind};
    use chrono::NaiveDate;

    fn slot() -> ShiftSlot {
        ShiftSlot::new(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(), ShiftKind::Am)
    }

    fn pick(name: &str, role: Role) -> Pick {
        Pick { name: name.into(), role, paid: false }
    }

    #[test]
    fn full_coverage_yields_nothing() {
        let picks = [
            pick("a", Role::Observer),
            pick("b", Role::FullEmt),
            pick("c", Role::ProbationaryEmt),
        ];
        assert_eq!(missing_roles(slot(), &picks).count(), 0);
    }

    #[test]
    fn missing_roles_follow_required_order() {
        let picks = [pick("a", Role::ProbationaryEmt), pick("b", Role::ProbationaryEmt)];
        let missing: Vec<Role> = missing_roles(slot(), &picks).map(|v| v.missing_role).collect();
        assert_eq!(missing, [Role::FullEmt, Role::Observer]);
    }

    #[test]
    fn empty_slot_misses_every_role() {
        let missing: Vec<_> = missing_roles(slot(), &[]).collect();
        assert_eq!(missing.len(), ROLES_NEEDED.len());
        assert!(missing.iter().all(|v| v.slot == slot()));
    }
}
