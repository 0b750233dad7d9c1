//! Laudo server — excerpt extraction service for expert-report drafting.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "validate-keywords" => {
                if args.len() < 3 {
                    eprintln!("Usage: laudo-server validate-keywords <file.json>");
                    std::process::exit(1);
                }
                let path = PathBuf::from(&args[2]);
                match laudo_extract::KeywordTables::load(&path) {
                    Ok(tables) => {
                        println!("{}", serde_json::to_string_pretty(&tables)?);
                        return Ok(());
                    }
                    Err(e) => {
                        eprintln!("Invalid keyword file {}: {}", path.display(), e);
                        std::process::exit(1);
                    }
                }
            }
            "--help" | "-h" | "help" => {
                println!("Laudo server — topic-tagged excerpts from defense documents");
                println!();
                println!("Usage: laudo-server [command]");
                println!();
                println!("Commands:");
                println!("  (none)                      Start the server");
                println!("  validate-keywords <file>    Check a keyword table file and print it");
                println!("  help                        Show this help message");
                println!();
                println!("Environment: LAUDO_PORT, LAUDO_KEYWORDS_FILE, LAUDO_MAX_UPLOAD_MB, RUST_LOG");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'laudo-server help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let config = laudo_core::LaudoConfig::from_env()?;
    let port = config.port;

    let state = Arc::new(AppState::new(config)?);
    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Laudo server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
