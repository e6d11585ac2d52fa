use tracing::{error, info};

use gameforum::{Config, Forum};

fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = gameforum::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        gameforum::logging::init_console_only(&config.logging.level);
    }

    let forum = match Forum::new(config) {
        Ok(forum) => forum,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let stats = forum.stats();
    info!(
        forum = %forum.catalog().forum_name(),
        topics = stats.total_topics,
        posts = stats.total_posts,
        users = stats.total_users,
        "Game Forum ready"
    );

    match serde_json::to_string_pretty(&forum.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("Failed to serialize snapshot: {e}"),
    }
}
