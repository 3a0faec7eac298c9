#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};
use weekly_roster::{
    check_roster, io, render, shift_duration_hours,
    workplace::{JsonWorkplaceStore, WorkplaceStore},
    Day, DayReport, IssueKind, MarkdownDocument, RosterRenderer, Scheduler, Session,
    ShiftCatalog, Sheet, TextRoster,
};

/// CLI de génération de planning hebdomadaire
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Catalogue de shifts JSON (par défaut : catalogue intégré)
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Fichier JSON des lieux de travail
    #[arg(long, global = true, default_value = "workplaces.json")]
    workplaces: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Afficher le catalogue de shifts et leurs durées
    Catalog {
        /// Export JSON du catalogue
        #[arg(long)]
        export: Option<String>,
    },

    /// Lister les travailleurs disponibles / indisponibles un jour donné
    Availability {
        #[arg(long)]
        sheet: String,
        #[arg(long)]
        day: Day,
    },

    /// Générer le planning de la semaine
    Generate {
        #[arg(long)]
        sheet: String,
        /// Graine fixe (par défaut : horloge)
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "Final Weekly Schedule")]
        title: String,
        #[arg(long)]
        out_text: Option<String>,
        #[arg(long)]
        out_doc: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_hours: Option<String>,
    },

    /// Gérer les lieux de travail
    Workplace {
        #[command(subcommand)]
        action: WorkplaceAction,
    },
}

#[derive(Subcommand, Debug)]
enum WorkplaceAction {
    List,
    Add {
        #[arg(long)]
        name: String,
    },
    Remove {
        #[arg(long)]
        name: String,
    },
    /// Modifier les horaires d'un jour
    Hours {
        #[arg(long)]
        name: String,
        #[arg(long)]
        day: Day,
        #[arg(long)]
        hours: String,
    },
    Show {
        #[arg(long)]
        name: String,
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

    let catalog = match &cli.catalog {
        Some(path) => ShiftCatalog::load_from_file(path)
            .with_context(|| format!("loading catalog {path}"))?,
        None => ShiftCatalog::standard(),
    };

    let code = match cli.cmd {
        Commands::Catalog { export } => {
            if let Some(path) = export {
                catalog.export_json(&path)?;
            }
            println!("catalog {}", catalog.version);
            for entry in &catalog.days {
                println!("{}", entry.day);
                for label in &entry.shifts {
                    let hours = shift_duration_hours(label)?;
                    println!("  {label} ({hours}h)");
                }
            }
            0
        }
        Commands::Availability { sheet, day } => {
            let sheet = Sheet::from_csv_path(&sheet)
                .with_context(|| format!("loading sheet {sheet}"))?;
            print!("{}", DayReport::build(&sheet.records(), day).render_text());
            0
        }
        Commands::Generate {
            sheet,
            seed,
            title,
            out_text,
            out_doc,
            out_csv,
            out_json,
            out_hours,
        } => {
            let mut session = Session::new(catalog);
            session
                .load_sheet_csv(&sheet)
                .with_context(|| format!("loading sheet {sheet}"))?;
            session.generate_availability()?;
            let mut scheduler = match seed {
                Some(seed) => Scheduler::seeded(seed),
                None => Scheduler::from_clock(),
            };
            let roster = session.generate_roster(&mut scheduler)?.clone();
            let summary = session.hours_summary()?;

            print!("{}", TextRoster.render(&title, &roster));
            println!("\nSummary of Hours");
            for entry in summary.entries() {
                println!("  {}: {} hours", entry.worker, entry.hours);
            }

            if let Some(path) = out_text {
                render::export_roster(&path, &TextRoster, &title, &roster)
                    .with_context(|| format!("exporting {path}"))?;
            }
            if let Some(path) = out_doc {
                render::export_document(
                    &path,
                    &MarkdownDocument::default(),
                    &roster,
                    &summary,
                    Utc::now(),
                )
                .with_context(|| format!("exporting {path}"))?;
            }
            if let Some(path) = out_csv {
                io::export_roster_csv(&path, &roster).with_context(|| format!("exporting {path}"))?;
            }
            if let Some(path) = out_json {
                io::export_roster_json(&path, &roster)
                    .with_context(|| format!("exporting {path}"))?;
            }
            if let Some(path) = out_hours {
                io::export_hours_csv(&path, &summary)
                    .with_context(|| format!("exporting {path}"))?;
            }

            let issues = check_roster(&roster);
            for issue in &issues {
                match &issue.kind {
                    IssueKind::Unassigned => {
                        eprintln!("warning: {} {} has no worker", issue.day, issue.label)
                    }
                    IssueKind::DoubleBooked(w) => {
                        eprintln!("warning: {w} works {} {} twice that day", issue.day, issue.label)
                    }
                }
            }
            0
        }
        Commands::Workplace { action } => {
            let store = JsonWorkplaceStore::open(&cli.workplaces);
            let mut data = store.load()?;
            match action {
                WorkplaceAction::List => {
                    for w in &data.workplaces {
                        println!("{}", w.name);
                    }
                }
                WorkplaceAction::Add { name } => {
                    data.add(name.as_str())?;
                    store.save(&data)?;
                    println!("Added workplace '{name}'.");
                }
                WorkplaceAction::Remove { name } => {
                    data.remove(&name)?;
                    store.save(&data)?;
                    println!("Removed workplace '{name}'.");
                }
                WorkplaceAction::Hours { name, day, hours } => {
                    data.set_hours(&name, day, &hours)?;
                    store.save(&data)?;
                    println!("Updated hours for workplace '{name}'.");
                }
                WorkplaceAction::Show { name } => {
                    let w = data
                        .find(&name)
                        .ok_or_else(|| anyhow::anyhow!("unknown workplace: {name}"))?;
                    println!("{}", serde_json::to_string_pretty(w)?);
                }
            }
            0
        }
    };

    std::process::exit(code);
}
