use crate::model::{ShiftKind, StaffRecord};

/// Roster en lecture seule pour la durée d'une génération.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    staff: Vec<StaffRecord>,
}

impl RosterStore {
    pub fn new(staff: Vec<StaffRecord>) -> Self {
        Self { staff }
    }

    pub fn records(&self) -> &[StaffRecord] {
        &self.staff
    }

    pub fn len(&self) -> usize {
        self.staff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }

    pub fn find_by_name<'a>(&'a self, name: &str) -> Option<&'a StaffRecord> {
        self.staff.iter().find(|s| s.name == name)
    }

    /// Personnes disponibles pour `shift`, dans l'ordre d'insertion.
    pub fn filter_available(&self, shift: ShiftKind) -> Vec<&StaffRecord> {
        self.staff.iter().filter(|s| s.is_available(shift)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn store() -> RosterStore {
        RosterStore::new(vec![
            StaffRecord::new("Alice", Role::FullEmt, "AM", true),
            StaffRecord::new("Bob", Role::Observer, "AM,PM", false),
            StaffRecord::new("Carol", Role::ProbationaryEmt, "Midday", false),
            StaffRecord::new("Dan", Role::FullEmt, "PM AM", true),
        ])
    }

    #[test]
    fn filter_keeps_insertion_order() {
        let s = store();
        let names: Vec<&str> = s
            .filter_available(ShiftKind::Am)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["Alice", "Bob", "Dan"]);
    }

    #[test]
    fn filter_returns_empty_when_nobody_matches() {
        let s = RosterStore::new(vec![StaffRecord::new("Eve", Role::Observer, "", false)]);
        assert!(s.filter_available(ShiftKind::Pm).is_empty());
        assert!(RosterStore::default().filter_available(ShiftKind::Am).is_empty());
    }

    #[test]
    fn find_by_name() {
        let s = store();
        assert_eq!(s.find_by_name("Carol").map(|r| r.role), Some(Role::ProbationaryEmt));
        assert!(s.find_by_name("Zed").is_none());
        assert_eq!(s.len(), 4);
    }
}
