use crate::model::{Role, StaffRecord};
use crate::report::ScheduleReport;
use crate::roster::RosterStore;
use crate::scheduler::SchedError;
use anyhow::Context;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::File;
use std::path::Path;

const ROSTER_COLUMNS: [&str; 4] = ["name", "role", "availability", "paid"];

/// Import du roster depuis CSV: header `Name,Role,Availability,Paid`
/// (colonnes repérées par nom, casse ignorée, colonnes en trop ignorées).
pub fn import_roster_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<RosterStore> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("reading {}", path.display()))?;
    read_roster_csv(file).with_context(|| format!("importing roster {}", path.display()))
}

pub fn read_roster_csv<R: std::io::Read>(reader: R) -> anyhow::Result<RosterStore> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut columns = [0usize; 4];
    for (slot, wanted) in columns.iter_mut().zip(ROSTER_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SchedError::MalformedRoster {
                row: 0,
                reason: format!("missing column {wanted}"),
            })?;
    }

    let mut out = Vec::new();
    for (idx, rec) in rdr.records().enumerate() {
        let rec = rec?;
        if rec.iter().all(str::is_empty) {
            continue;
        }
        out.push(parse_staff_row(&rec, &columns, idx + 1)?);
    }
    Ok(RosterStore::new(out))
}

fn parse_staff_row(
    rec: &StringRecord,
    columns: &[usize; 4],
    row: usize,
) -> Result<StaffRecord, SchedError> {
    let malformed = move |reason: String| SchedError::MalformedRoster { row, reason };
    let required = move |col: usize, field: &str| {
        rec.get(col)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| malformed(format!("missing {field}")))
    };

    let name = required(columns[0], "name")?;
    let role: Role = required(columns[1], "role")?.parse().map_err(malformed)?;
    let availability = required(columns[2], "availability")?;
    let paid = match rec.get(columns[3]).unwrap_or("") {
        "" => false,
        raw => parse_bool(raw).ok_or_else(|| malformed(format!("invalid paid value {raw:?}")))?,
    };

    Ok(StaffRecord::new(name, role, availability, paid))
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Some(true),
        "false" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}

/// Export CSV des picks: header `date,shift,name,role,paid` (une ligne vide
/// par créneau non pourvu).
pub fn write_assignments_csv<W: std::io::Write>(
    writer: W,
    report: &ScheduleReport,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(writer);
    w.write_record(["date", "shift", "name", "role", "paid"])?;
    for entry in &report.slots {
        let date = entry.slot.date.format("%Y-%m-%d").to_string();
        let shift = entry.slot.shift.label();
        if entry.picks.is_empty() {
            w.write_record([date.as_str(), shift, "", "", ""])?;
            continue;
        }
        for pick in &entry.picks {
            w.write_record([
                date.as_str(),
                shift,
                pick.name.as_str(),
                pick.role.label(),
                if pick.paid { "true" } else { "false" },
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}

/// Export CSV des violations: header `date,shift,missing_role`
pub fn write_violations_csv<W: std::io::Write>(
    writer: W,
    report: &ScheduleReport,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(writer);
    w.write_record(["date", "shift", "missing_role"])?;
    for v in &report.violations {
        let date = v.slot.date.format("%Y-%m-%d").to_string();
        w.write_record([date.as_str(), v.slot.shift.label(), v.missing_role.label()])?;
    }
    w.flush()?;
    Ok(())
}

pub fn export_assignments_csv<P: AsRef<Path>>(
    path: P,
    report: &ScheduleReport,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_assignments_csv(file, report)
}

pub fn export_violations_csv<P: AsRef<Path>>(
    path: P,
    report: &ScheduleReport,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_violations_csv(file, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_variants() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("n"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn columns_found_by_header_name() {
        let data = "Paid,Notes,Availability,Role,Name\n\
                    yes,lead,\"AM,PM\",Full EMT,Alice\n\
                    ,,Midday,Observer,Bob\n";
        let store = read_roster_csv(data.as_bytes()).unwrap();
        assert_eq!(store.len(), 2);
        let alice = &store.records()[0];
        assert_eq!(alice.name, "Alice");
        assert_eq!(alice.availability, "AM,PM");
        assert!(alice.paid);
        assert!(!store.records()[1].paid);
    }
}
