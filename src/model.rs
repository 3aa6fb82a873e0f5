use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Durée nominale d'un shift, en heures.
pub const SHIFT_HOURS: u32 = 12;

/// Créneaux quotidiens, dans l'ordre de planification.
pub const SHIFTS: [ShiftKind; 3] = [ShiftKind::Am, ShiftKind::Midday, ShiftKind::Pm];

/// Rôles exigés sur chaque créneau, dans l'ordre de contrôle.
pub const ROLES_NEEDED: [Role; 3] = [Role::FullEmt, Role::ProbationaryEmt, Role::Observer];

/// Rôle d'un membre de l'équipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Role {
    #[cfg_attr(feature = "serde", serde(rename = "Full EMT"))]
    FullEmt,
    #[cfg_attr(feature = "serde", serde(rename = "Probationary EMT"))]
    ProbationaryEmt,
    #[cfg_attr(feature = "serde", serde(rename = "Observer"))]
    Observer,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::FullEmt => "Full EMT",
            Role::ProbationaryEmt => "Probationary EMT",
            Role::Observer => "Observer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ROLES_NEEDED
            .into_iter()
            .find(|r| r.label() == s.trim())
            .ok_or_else(|| format!("unknown role: {s}"))
    }
}

/// Créneau quotidien (ensemble fermé, ordonné AM < Midday < PM)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShiftKind {
    #[cfg_attr(feature = "serde", serde(rename = "AM"))]
    Am,
    Midday,
    #[cfg_attr(feature = "serde", serde(rename = "PM"))]
    Pm,
}

impl ShiftKind {
    pub fn label(self) -> &'static str {
        match self {
            ShiftKind::Am => "AM",
            ShiftKind::Midday => "Midday",
            ShiftKind::Pm => "PM",
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShiftKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SHIFTS
            .into_iter()
            .find(|k| k.label() == s.trim())
            .ok_or_else(|| format!("unknown shift: {s}"))
    }
}

/// Membre de l'équipe, tel que lu dans le roster.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StaffRecord {
    pub name: String,
    pub role: Role,
    /// Texte brut de disponibilité, ex. `"AM,PM"`.
    pub availability: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub paid: bool,
}

impl StaffRecord {
    pub fn new<N: Into<String>, A: Into<String>>(
        name: N,
        role: Role,
        availability: A,
        paid: bool,
    ) -> Self {
        Self {
            name: name.into(),
            role,
            availability: availability.into(),
            paid,
        }
    }

    /// Test d'inclusion de sous-chaîne sur le libellé du créneau.
    pub fn is_available(&self, shift: ShiftKind) -> bool {
        self.availability.contains(shift.label())
    }

    pub fn available_shifts(&self) -> BTreeSet<ShiftKind> {
        SHIFTS.into_iter().filter(|s| self.is_available(*s)).collect()
    }
}

/// Clé (jour, créneau) de la table d'assignation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShiftSlot {
    pub date: NaiveDate,
    pub shift: ShiftKind,
}

impl ShiftSlot {
    pub fn new(date: NaiveDate, shift: ShiftKind) -> Self {
        Self { date, shift }
    }
}

impl fmt::Display for ShiftSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.format("%Y-%m-%d"), self.shift)
    }
}

/// Personne retenue sur un créneau.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pick {
    pub name: String,
    pub role: Role,
    pub paid: bool,
}

impl From<&StaffRecord> for Pick {
    fn from(staff: &StaffRecord) -> Self {
        Self {
            name: staff.name.clone(),
            role: staff.role,
            paid: staff.paid,
        }
    }
}

/// Rôle manquant sur un créneau
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Violation {
    pub slot: ShiftSlot,
    pub missing_role: Role,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: missing role {}", self.slot, self.missing_role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_is_substring_match() {
        let s = StaffRecord::new("Alice", Role::FullEmt, "AM,PM", true);
        assert!(s.is_available(ShiftKind::Am));
        assert!(!s.is_available(ShiftKind::Midday));
        assert!(s.is_available(ShiftKind::Pm));

        let loose = StaffRecord::new("Bob", Role::Observer, "AM/Midday", false);
        assert_eq!(
            loose.available_shifts().into_iter().collect::<Vec<_>>(),
            vec![ShiftKind::Am, ShiftKind::Midday]
        );
    }

    #[test]
    fn role_labels_parse_back() {
        for role in ROLES_NEEDED {
            assert_eq!(role.label().parse::<Role>().unwrap(), role);
        }
        assert!("Paramedic".parse::<Role>().is_err());
    }

    #[test]
    fn violation_display_matches_report_format() {
        let slot = ShiftSlot::new(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(), ShiftKind::Midday);
        let v = Violation { slot, missing_role: Role::ProbationaryEmt };
        assert_eq!(v.to_string(), "2025-03-07 Midday: missing role Probationary EMT");
    }
}
