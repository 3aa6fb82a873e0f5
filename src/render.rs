use crate::calendar::{month_name, shift_color, MonthGrid, WEEKDAY_HEADERS};
use crate::model::{Pick, SHIFTS};
use crate::report::ScheduleReport;
use crate::scheduler::SchedError;
use chrono::{Datelike, NaiveDate};

/// Permet de customiser le rendu du calendrier (texte, PDF, HTML...).
pub trait CalendarRenderer {
    fn render(&self, report: &ScheduleReport) -> Result<String, SchedError>;
}

/// Calendrier mural en texte brut : une section par semaine, puis la liste
/// des violations.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextCalendar;

impl TextCalendar {
    /// Case d'un jour : numéro puis chaque créneau avec ses picks.
    pub fn render_day(&self, date: NaiveDate, report: &ScheduleReport) -> Vec<String> {
        let weekday = WEEKDAY_HEADERS[date.weekday().num_days_from_sunday() as usize];
        let mut lines = vec![format!("{weekday} {}", date.day())];
        for shift in SHIFTS {
            let picks = report.picks(date, shift);
            if picks.is_empty() {
                lines.push(format!("  {shift}: (unfilled)"));
                continue;
            }
            lines.push(format!("  {shift}:"));
            lines.extend(picks.iter().map(|p| format!("    {}", pick_line(p))));
        }
        lines
    }
}

impl CalendarRenderer for TextCalendar {
    fn render(&self, report: &ScheduleReport) -> Result<String, SchedError> {
        let grid = MonthGrid::new(report.year, report.month)?;
        let title = month_name(report.month).ok_or(SchedError::InvalidDate {
            year: report.year,
            month: report.month,
        })?;

        let legend = SHIFTS
            .iter()
            .map(|s| format!("{s} = {}", shift_color(*s).label()))
            .collect::<Vec<_>>()
            .join(", ");

        let mut lines = vec![format!("{title} {}", report.year), format!("Shifts: {legend}")];

        for (idx, week) in grid.weeks.iter().enumerate() {
            lines.push(String::new());
            lines.push(format!("Week {}", idx + 1));
            for date in week.iter().flatten() {
                lines.extend(self.render_day(*date, report).into_iter().map(|l| format!("  {l}")));
            }
        }

        if !report.violations.is_empty() {
            lines.push(String::new());
            lines.push("Violations".to_string());
            lines.extend(report.violations.iter().map(|v| format!("• {v}")));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }
}

fn pick_line(pick: &Pick) -> String {
    let paid = if pick.paid { " $" } else { "" };
    format!("• {} ({}){paid}", pick.name, pick.role)
}
