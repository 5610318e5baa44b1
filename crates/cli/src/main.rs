//! PromptSmith CLI — the main entry point.
//!
//! Commands:
//! - `init`     — Create config directory and default config
//! - `wizard`   — Walk the questionnaire step by step
//! - `set` / `add` / `remove` — Edit single answers
//! - `show`     — Print the current answers
//! - `render`   — Print the assembled prompt
//! - `status`   — Show progress and which sections will render
//! - `share` / `load` — Transport token / share link
//! - `export` / `import` — Document files
//! - `reset`    — Discard every answer
//! - `config`   — Inspect configuration

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "promptsmith",
    about = "PromptSmith — guided questionnaire that assembles LLM prompts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the config directory and a default config file
    Init,

    /// Answer the questionnaire interactively
    Wizard {
        /// Start at this step (1-based) instead of the saved one
        #[arg(short, long)]
        step: Option<usize>,
    },

    /// Set a scalar field (objective, tone, persona, ...)
    Set {
        field: String,
        value: String,
    },

    /// Append an entry to a list field (inputs, constraints, tools, ...)
    Add {
        field: String,
        value: String,
    },

    /// Remove an entry from a list field by its 0-based index
    Remove {
        field: String,
        index: usize,
    },

    /// Print the current answers as JSON
    Show,

    /// Print the assembled prompt
    Render {
        /// Render even if the objective is too short
        #[arg(short, long)]
        force: bool,
    },

    /// Show questionnaire progress and the sections that will render
    Status,

    /// Print a share token, or a link when a base URL is known
    Share {
        /// Base URL for the link (overrides share.base_url)
        #[arg(long, env = "PROMPTSMITH_SHARE_URL")]
        base_url: Option<String>,
    },

    /// Replace the answers with a shared token or link
    Load {
        token: String,
    },

    /// Write the answers to a document file
    Export {
        /// Output path (defaults to export.file_name)
        path: Option<String>,
    },

    /// Merge a document file into the answers
    Import {
        path: String,
    },

    /// Restore every answer to its default
    Reset {
        /// Skip the safety prompt
        #[arg(long)]
        confirm: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Validate the config file
    Validate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init => commands::init::run().await?,
        Commands::Wizard { step } => commands::wizard::run(step).await?,
        Commands::Set { field, value } => commands::answers::set(&field, &value).await?,
        Commands::Add { field, value } => commands::answers::add(&field, &value).await?,
        Commands::Remove { field, index } => commands::answers::remove(&field, index).await?,
        Commands::Show => commands::answers::show().await?,
        Commands::Render { force } => commands::render::run(force).await?,
        Commands::Status => commands::render::status().await?,
        Commands::Share { base_url } => commands::share::share(base_url).await?,
        Commands::Load { token } => commands::share::load(&token).await?,
        Commands::Export { path } => commands::document::export(path).await?,
        Commands::Import { path } => commands::document::import(&path).await?,
        Commands::Reset { confirm } => commands::answers::reset(confirm).await?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show().await?,
            ConfigAction::Path => commands::config_cmd::path().await?,
            ConfigAction::Validate => commands::config_cmd::validate().await?,
        },
    }

    Ok(())
}
