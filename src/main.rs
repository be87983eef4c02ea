use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use underworld::AppState;
use underworld::api::handle_raw;
use underworld::combat::RngRoller;
use underworld::config::Config;
use underworld::database::init::connect;
use underworld::database::models::PlayerId;
use underworld::database::players::PgPlayerDirectory;

const USAGE: &str = "usage: underworld <attacker_id> '{\"targetId\": <id>, \"weaponName\": \"<name>\"}'";

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (Some(attacker_raw), Some(body)) = (args.first(), args.get(1)) else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };
    let Ok(attacker_id) = attacker_raw.parse::<i64>().map(PlayerId) else {
        eprintln!("attacker_id must be a number.\n{USAGE}");
        return ExitCode::FAILURE;
    };

    let ranks = match config.load_rank_table() {
        Ok(ranks) => ranks,
        Err(e) => {
            tracing::error!(target: "startup", error = %e, "rank table");
            return ExitCode::FAILURE;
        }
    };
    let pool = match config.require_database_url() {
        Ok(url) => match connect(&config, url).await {
            Ok(pool) => pool,
            Err(e) => {
                tracing::error!(target: "startup", error = %e, "database connection failed");
                return ExitCode::FAILURE;
            }
        },
        Err(e) => {
            tracing::error!(target: "startup", error = %e, "database");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(Arc::new(PgPlayerDirectory::new(pool)), ranks);
    let mut roller = RngRoller::from_os_rng();
    let response = handle_raw(&state, &mut roller, attacker_id, body).await;

    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!(target: "output", error = %e, "could not encode response");
            return ExitCode::FAILURE;
        }
    }
    if response.status == 200 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
