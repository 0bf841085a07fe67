use std::path::PathBuf;

use clap::{Parser, Subcommand};
use epr_core::{generate_summary, PatientError, PatientService, SeedOutcome, Store};
use epr_health_id::recover_health_id;

#[derive(Parser)]
#[command(name = "epr")]
#[command(about = "EPR emergency patient record CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the demo dataset
    Seed {
        /// Database file path
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// List all patients
    List {
        /// Database file path
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Look up a patient's emergency view from scanned or typed input
    Lookup {
        /// Raw scanner or keyboard input
        input: String,
        /// Database file path
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Recover a canonical health ID from free text
    Normalize {
        /// Raw scanner or keyboard input
        input: String,
    },
    /// Generate a summary from labelled medical text
    Summarize {
        /// Text to process (reads the file given with --file when omitted)
        text: Option<String>,
        /// Read the text from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn db_path(db: Option<PathBuf>) -> PathBuf {
    match db {
        Some(path) => path,
        None => std::env::var("EPR_DB_PATH")
            .unwrap_or_else(|_| "data.db".to_string())
            .into(),
    }
}

fn open_service(db: Option<PathBuf>) -> Result<PatientService, PatientError> {
    let store = Store::open(&db_path(db))?;
    Ok(PatientService::new(store))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Seed { db }) => {
            let service = open_service(db)?;
            match service.seed_demo_data() {
                Ok(SeedOutcome::Seeded) => println!("Seeded demo dataset."),
                Ok(SeedOutcome::AlreadySeeded) => println!("Database already seeded."),
                Err(e) => eprintln!("Error seeding database: {}", e),
            }
        }
        Some(Commands::List { db }) => {
            let service = open_service(db)?;
            let patients = service.list_patients()?;
            if patients.is_empty() {
                println!("No patients found.");
            } else {
                for patient in patients {
                    println!(
                        "ID: {}, Name: {}, Blood Group: {}",
                        patient.health_id, patient.name, patient.blood_group
                    );
                }
            }
        }
        Some(Commands::Lookup { input, db }) => match recover_health_id(&input) {
            Some(health_id) => {
                let service = open_service(db)?;
                match service.emergency_view(&health_id)? {
                    Some(view) => {
                        println!("Health ID: {}", view.health_id);
                        println!("Name: {}", view.name);
                        println!("Blood Group: {}", view.blood_group);
                        println!("Allergies: {}", view.allergies);
                        println!("Emergency Contact: {}", view.emergency_contact);
                        println!("Current Medications: {}", view.current_medications);
                        println!("Conditions: {}", view.conditions);
                        println!();
                        println!("Summary: {}", view.summary);
                    }
                    None => eprintln!("No patient found for health ID: {}", health_id),
                }
            }
            None => eprintln!("No health ID found in input"),
        },
        Some(Commands::Normalize { input }) => match recover_health_id(&input) {
            Some(health_id) => println!("{}", health_id),
            None => eprintln!("No health ID found in input"),
        },
        Some(Commands::Summarize { text, file }) => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                (None, None) => {
                    eprintln!("Provide text or --file");
                    return Ok(());
                }
            };
            println!("{}", generate_summary(&text));
        }
        None => {
            println!("Use 'epr --help' for commands");
        }
    }

    Ok(())
}
