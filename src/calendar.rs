//! Grille mensuelle (semaines commençant le dimanche) et tables d'affichage
//! fixes des créneaux.

use crate::model::ShiftKind;
use crate::scheduler::SchedError;
use chrono::{Datelike, NaiveDate};

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Teinte de fond associée à un créneau, pour le regroupement visuel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftColor {
    LightYellow,
    LightBlue,
    LightGrey,
}

impl ShiftColor {
    pub fn label(self) -> &'static str {
        match self {
            ShiftColor::LightYellow => "light yellow",
            ShiftColor::LightBlue => "light blue",
            ShiftColor::LightGrey => "light grey",
        }
    }
}

pub fn shift_color(shift: ShiftKind) -> ShiftColor {
    match shift {
        ShiftKind::Am => ShiftColor::LightYellow,
        ShiftKind::Midday => ShiftColor::LightBlue,
        ShiftKind::Pm => ShiftColor::LightGrey,
    }
}

pub fn month_name(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(idx).copied()
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, SchedError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(SchedError::InvalidDate { year, month })
}

/// Nombre de jours du mois (calendrier grégorien).
pub fn days_in_month(year: i32, month: u32) -> Result<u32, SchedError> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(SchedError::InvalidDate { year, month })?;

    let days = next.signed_duration_since(first).num_days();
    u32::try_from(days).map_err(|_| SchedError::InvalidDate { year, month })
}

/// Toutes les dates du mois, du 1er au dernier jour.
pub fn month_days(year: i32, month: u32) -> Result<Vec<NaiveDate>, SchedError> {
    let first = first_of_month(year, month)?;
    let count = days_in_month(year, month)? as usize;
    Ok(first.iter_days().take(count).collect())
}

/// Mois découpé en semaines de 7 colonnes, dimanche en tête ; les cases hors
/// du mois valent `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[Option<NaiveDate>; 7]>,
}

impl MonthGrid {
    pub fn new(year: i32, month: u32) -> Result<Self, SchedError> {
        let first = first_of_month(year, month)?;
        let offset = first.weekday().num_days_from_sunday() as usize;
        let days = month_days(year, month)?;

        let rows = (offset + days.len()).div_ceil(7);
        let mut weeks = vec![[None; 7]; rows];
        for (i, date) in days.into_iter().enumerate() {
            let cell = offset + i;
            weeks[cell / 7][cell % 7] = Some(date);
        }

        Ok(Self { year, month, weeks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gregorian_month_lengths() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
        assert_eq!(days_in_month(2025, 12).unwrap(), 31);
        assert_eq!(days_in_month(2025, 4).unwrap(), 30);
    }

    #[test]
    fn out_of_range_month_is_invalid_date() {
        for month in [0, 13] {
            assert!(matches!(
                days_in_month(2025, month),
                Err(SchedError::InvalidDate { .. })
            ));
        }
        assert!(MonthGrid::new(2025, 0).is_err());
    }

    #[test]
    fn grid_starts_on_sunday() {
        // 1er mars 2025 : un samedi
        let grid = MonthGrid::new(2025, 3).unwrap();
        assert_eq!(grid.weeks.len(), 6);
        assert!(grid.weeks[0][..6].iter().all(Option::is_none));
        assert_eq!(grid.weeks[0][6], NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(grid.weeks[5][1], NaiveDate::from_ymd_opt(2025, 3, 31));
        assert_eq!(grid.weeks.iter().flatten().flatten().count(), 31);
    }

    #[test]
    fn february_starting_sunday_fills_four_rows() {
        let grid = MonthGrid::new(2015, 2).unwrap();
        assert_eq!(grid.weeks.len(), 4);
        assert!(grid.weeks.iter().flatten().all(Option::is_some));
    }

    #[test]
    fn shift_colors_are_distinct() {
        let colors: std::collections::HashSet<_> =
            crate::model::SHIFTS.into_iter().map(shift_color).collect();
        assert_eq!(colors.len(), 3);
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(0), None);
    }
}
