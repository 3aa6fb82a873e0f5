#![forbid(unsafe_code)]
//! EMS scheduler — planning mensuel d'équipes (AM / Midday / PM).
//!
//! - Roster en lecture seule, filtré par disponibilité (inclusion de texte).
//! - Tirage aléatoire uniforme, au plus 3 personnes par créneau.
//! - Violations de couverture par rôle exigé.
//! - Calendrier mural texte ; exports CSV/JSON (feature `serde`).

pub mod calendar;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod render;
pub mod report;
pub mod roster;
pub mod scheduler;
#[cfg(feature = "serde")]
pub mod storage;

pub use calendar::{days_in_month, shift_color, MonthGrid, ShiftColor};
pub use model::{Pick, Role, ShiftKind, ShiftSlot, StaffRecord, Violation, SHIFTS, SHIFT_HOURS};
pub use render::{CalendarRenderer, TextCalendar};
pub use report::{ScheduleReport, SlotAssignment};
pub use roster::RosterStore;
pub use scheduler::{SchedError, SchedOptions, Scheduler, StaffLoad};
#[cfg(feature = "serde")]
pub use storage::{JsonStorage, Storage};
