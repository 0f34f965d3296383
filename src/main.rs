use brag::application::{
    add_brag, AddBragService, AddRequest, ExportBragsService, ExportFormat, ListBragsService,
};
use brag::cli::{format_day_groups, format_empty_store, format_export, Cli, Commands};
use brag::error::{BragError, Result};
use brag::infrastructure::{Config, EditorSession, FileSystemRepository};
use chrono::Local;
use clap::Parser;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr so stdout stays clean for exports. Filter with BRAG_LOG.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("BRAG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let repo = FileSystemRepository::new(config.resolve_data_dir(cli.data_dir)?);
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Add {
            content,
            tags,
            project,
            edit,
        } => {
            let editor = EditorSession::new(config.get_editor());
            let Some(content) = add_brag::collect_content(&content, edit, &editor)? else {
                println!("\nCancelled.");
                return Ok(());
            };

            let service = AddBragService::new(repo);
            let entry = service.execute(AddRequest {
                content,
                tags,
                project,
            })?;
            println!("✅ Brag added for {}", entry.timestamp);
            Ok(())
        }
        Commands::List { days, date } => {
            let service = ListBragsService::new(repo);
            let groups = match date {
                Some(date) => service.for_date(&date)?,
                None => service.recent(days.unwrap_or_else(|| config.default_days()), today)?,
            };
            print!("{}", format_day_groups(&groups));
            Ok(())
        }
        Commands::Export { start, end, format } => {
            let format = ExportFormat::from_str(&format).map_err(BragError::Config)?;
            let service = ExportBragsService::new(repo);
            match service.execute(start.as_deref(), end.as_deref(), today)? {
                Some(entries) => print!("{}", format_export(&entries, format)?),
                None => print!("{}", format_empty_store(format)),
            }
            Ok(())
        }
    }
}
