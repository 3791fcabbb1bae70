use clap::Parser;
use chamberdesk::StartPage;
use chamberdesk::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chamberdesk", about = "Antenna test chamber booking")]
struct Args {
    /// Page to open on start
    #[arg(short, long, value_enum)]
    page: Option<StartPage>,

    /// Start without the demo chambers and bookings
    #[arg(long)]
    empty: bool,

    /// Write the log here instead of chamberdesk.log
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            config::DeskConfig::default()
        }
    };
    let cli = CliOverrides {
        start_page: args.page,
        empty: args.empty,
        log_file: args.log_file,
    };
    let resolved = config::resolve(&file_config, &cli);

    // File logger - the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!(
        "chamberdesk starting on {:?} (seed data: {})",
        resolved.start_page,
        resolved.seed_demo_data
    );

    chamberdesk::tui::run(resolved)
}
