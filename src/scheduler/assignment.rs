use super::{coverage, types::SchedError, types::MAX_PICKS, Scheduler};
use crate::calendar;
use crate::model::{Pick, ShiftSlot, SHIFTS};
use rand::seq::IndexedRandom;
use rand::Rng;

pub(super) fn generate<R: Rng + ?Sized>(
    scheduler: &mut Scheduler<'_>,
    year: i32,
    month: u32,
    rng: &mut R,
) -> Result<(), SchedError> {
    // tout échec de date survient avant de toucher à l'état courant
    let days = calendar::month_days(year, month)?;

    scheduler.assignments.clear();
    scheduler.violations.clear();
    scheduler.period = None;

    let roster = scheduler.roster;

    #[cfg(feature = "logging")]
    tracing::debug!(year, month, staff = roster.len(), "generating schedule");

    for date in days {
        for shift in SHIFTS {
            let slot = ShiftSlot::new(date, shift);
            let available = roster.filter_available(shift);
            let count = available.len().min(MAX_PICKS);

            let picks: Vec<Pick> = available
                .choose_multiple(rng, count)
                .map(|staff| Pick::from(*staff))
                .collect();

            #[cfg(feature = "logging")]
            tracing::trace!(%slot, available = available.len(), picked = picks.len(), "slot filled");

            scheduler.violations.extend(coverage::missing_roles(slot, &picks));
            scheduler.assignments.insert(slot, picks);
        }
    }

    scheduler.period = Some((year, month));

    #[cfg(feature = "logging")]
    tracing::debug!(
        slots = scheduler.assignments.len(),
        violations = scheduler.violations.len(),
        "schedule generated"
    );

    Ok(())
}
