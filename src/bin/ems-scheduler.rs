#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use ems_scheduler::{
    io,
    model::{ROLES_NEEDED, SHIFTS},
    render::{CalendarRenderer, TextCalendar},
    report::ScheduleReport,
    scheduler::{SchedOptions, Scheduler},
    storage::{write_atomic, JsonStorage, Storage},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Planning mensuel EMS : tirage des équipes et calendrier mural
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer le planning d'un mois à partir d'un roster CSV
    Generate {
        /// CSV `Name,Role,Availability,Paid`
        #[arg(long)]
        staff: PathBuf,
        /// Année (défaut : année courante)
        #[arg(long)]
        year: Option<i32>,
        /// Mois 1-12 (défaut : mois courant)
        #[arg(long)]
        month: Option<u32>,
        /// Accepté mais non appliqué par le tirage
        #[arg(long, default_value_t = 240)]
        max_week_paid_hours: u32,
        /// Accepté mais non appliqué par le tirage
        #[arg(long)]
        max_hours_per_person: Option<u32>,
        /// Graine fixe pour un tirage reproductible
        #[arg(long)]
        seed: Option<u64>,
        /// Calendrier texte (défaut : schedule_{month}_{year}.txt)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Instantané JSON du planning
        #[arg(long)]
        out_json: Option<PathBuf>,
        #[arg(long)]
        out_assignments_csv: Option<PathBuf>,
        #[arg(long)]
        out_violations_csv: Option<PathBuf>,
    },

    /// Re-générer le calendrier texte d'un planning JSON sauvegardé
    Render {
        #[arg(long)]
        from: PathBuf,
        /// Fichier de sortie (stdout si absent)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Vérifier un roster CSV et la couverture possible par créneau
    Check {
        #[arg(long)]
        staff: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Generate {
            staff,
            year,
            month,
            max_week_paid_hours,
            max_hours_per_person,
            seed,
            out,
            out_json,
            out_assignments_csv,
            out_violations_csv,
        } => {
            let today = Local::now().date_naive();
            let year = year.unwrap_or_else(|| today.year());
            let month = month.unwrap_or_else(|| today.month());

            let roster = io::import_roster_csv(&staff)?;
            let opts = SchedOptions {
                max_week_paid_hours,
                max_hours_per_person,
            };
            let mut scheduler = Scheduler::new(&roster, opts);
            match seed {
                Some(seed) => {
                    scheduler.generate_with(year, month, &mut StdRng::seed_from_u64(seed))?
                }
                None => scheduler.generate(year, month)?,
            }
            let report = scheduler
                .report()
                .context("no schedule produced")?;

            let out = out.unwrap_or_else(|| PathBuf::from(format!("{}.txt", report.file_stem())));
            let text = TextCalendar.render(&report)?;
            write_atomic(&out, text.as_bytes())?;
            println!("Calendar written to {}", out.display());

            if let Some(path) = out_json {
                JsonStorage::new(path).save(&report)?;
            }
            if let Some(path) = out_assignments_csv {
                io::export_assignments_csv(path, &report)?;
            }
            if let Some(path) = out_violations_csv {
                io::export_violations_csv(path, &report)?;
            }

            for load in &report.load {
                println!(
                    "{} ({}): {} shift(s), {} h, {} paid h",
                    load.name, load.role, load.shifts, load.hours, load.paid_hours
                );
            }

            report_violations(&report)
        }
        Commands::Render { from, out } => {
            let report = JsonStorage::new(&from).load()?;
            let text = TextCalendar.render(&report)?;
            match out {
                Some(path) => {
                    write_atomic(&path, text.as_bytes())?;
                    println!("Calendar written to {}", path.display());
                }
                None => print!("{text}"),
            }
            0
        }
        Commands::Check { staff } => {
            let roster = io::import_roster_csv(&staff)?;
            println!("{} staff record(s)", roster.len());
            let mut gaps = 0usize;
            for shift in SHIFTS {
                let available = roster.filter_available(shift);
                println!("{shift}: {} available", available.len());
                for role in ROLES_NEEDED {
                    if !available.iter().any(|s| s.role == role) {
                        eprintln!("{shift}: nobody available with role {role}");
                        gaps += 1;
                    }
                }
            }
            // Code 2 = WARNING/INCOMPLETE
            if gaps == 0 {
                0
            } else {
                2
            }
        }
    };

    std::process::exit(code);
}

fn report_violations(report: &ScheduleReport) -> i32 {
    if report.is_fully_covered() {
        println!("OK: every shift covered");
        return 0;
    }
    eprintln!("Found {} violation(s)", report.violations.len());
    for v in &report.violations {
        eprintln!("{v}");
    }
    // Code 2 = WARNING/INCOMPLETE
    2
}
