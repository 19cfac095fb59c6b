mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "plan2board",
    version,
    about = "Floor-plan survey tool: detect rooms in a PDF and draft a device plan"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Survey a floor-plan PDF: detect rooms, apply standards, draft the I/O map
    Survey {
        /// Path to the floor-plan PDF
        plan_file: PathBuf,

        /// Custom standards JSON file (default: built-in table)
        #[arg(short, long, value_name = "FILE")]
        standards: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the bill of materials to a CSV file
        #[arg(long = "bom-csv", value_name = "FILE")]
        bom_csv: Option<PathBuf>,

        /// Write the draft I/O map to a CSV file
        #[arg(long = "io-csv", value_name = "FILE")]
        io_csv: Option<PathBuf>,

        /// List per-occurrence room markers in table output
        #[arg(long)]
        markers: bool,
    },
    /// Extract text and count room names without applying standards
    Extract {
        /// Path to the floor-plan PDF
        plan_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Manage and inspect standards tables
    Standards {
        #[command(subcommand)]
        action: StandardsAction,
    },
}

#[derive(Subcommand)]
enum StandardsAction {
    /// List room types in the built-in standards table
    List,
    /// Print the standard device quantities for one room type
    Show {
        /// Room-type key (e.g. "kitchen")
        room: String,
    },
    /// Validate a custom standards JSON file
    Validate {
        /// Path to JSON standards file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Survey {
            plan_file,
            standards,
            output,
            bom_csv,
            io_csv,
            markers,
        } => commands::survey::run(plan_file, standards, &output, bom_csv, io_csv, markers),
        Commands::Extract { plan_file, output } => commands::extract::run(plan_file, &output),
        Commands::Standards { action } => match action {
            StandardsAction::List => commands::standards::list(),
            StandardsAction::Show { room } => commands::standards::show(&room),
            StandardsAction::Validate { file } => commands::standards::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
