use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "movielens-server")]
#[command(about = "Read-only REST API over the MovieLens dataset", long_about = None)]
struct Args {
    #[arg(short, long, default_value = "movielens-api.yaml")]
    config: String,

    /// SQLite database file, overrides the config file.
    #[arg(short, long)]
    database: Option<String>,

    #[arg(long)]
    debug: bool,

    /// Emit log lines as JSON.
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.debug {
        "movielens_api=debug,tower_http=debug"
    } else {
        "movielens_api=info,tower_http=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let options = movielens_api::RunOptions {
        config_path: args.config,
        database: args.database,
    };

    if let Err(e) = movielens_api::run(options).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
