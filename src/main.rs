//! OctoFit CLI
//!
//! Loads one collection from the OctoFit API and renders it the way the
//! browser view would: a loading line, an error, an empty-state hint, or the
//! records as a table or cards.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use octofit::client::{load_collection, load_leaderboard, ApiClient};
use octofit::config::{generate_default_config, Config};
use octofit::display::{DisplayOptions, Page, Present};
use octofit::resources::{Activity, Resource, ResourceKind, Team, User, Workout};
use octofit::telemetry;
use octofit::terminal::{self, OutputFormat};
use octofit::unit::{CollectionUnit, ViewMode};

#[derive(Parser)]
#[command(name = "octofit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse OctoFit Tracker activities, teams, users, workouts and the leaderboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config and codespace detection)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Logged fitness activities
    Activities(ViewArgs),

    /// Teams
    Teams(ViewArgs),

    /// Registered users
    Users(ViewArgs),

    /// Workout suggestions
    Workouts(ViewArgs),

    /// Ranked leaderboard (table only)
    Leaderboard,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Clone, Copy)]
pub struct ViewArgs {
    /// Initial layout: table or cards
    #[arg(long)]
    pub view: Option<ViewMode>,

    /// Render, switch layout, and render again from the same data
    #[arg(long)]
    pub toggle: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let config = generate_default_config();

        match output {
            Some(path) => {
                // Create parent directory if needed
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &config)?;
                println!("Config written to {:?}", path);
            }
            None => {
                print!("{}", config);
            }
        }
        return Ok(());
    }

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(url) = &cli.api_url {
        config.api.base_url = Some(url.clone());
    }

    telemetry::init(&config.logging);
    tracing::debug!("OctoFit CLI v{}", env!("CARGO_PKG_VERSION"));

    let client = ApiClient::new(&config.api)?;
    tracing::info!("Using API at {}", client.base_url());

    let view = Rendering {
        opts: config.display.options(),
        format: cli.format,
        default_view: config.display.view,
    };

    let loaded = match cli.command {
        Commands::Activities(args) => view.collection::<Activity>(&client, args).await?,
        Commands::Teams(args) => view.collection::<Team>(&client, args).await?,
        Commands::Users(args) => view.collection::<User>(&client, args).await?,
        Commands::Workouts(args) => view.collection::<Workout>(&client, args).await?,
        Commands::Leaderboard => {
            let mut unit = CollectionUnit::for_kind(ResourceKind::Leaderboard);
            load_leaderboard(&client, &mut unit).await;
            view.show(ResourceKind::Leaderboard, &mut unit, false)?
        }
        Commands::Config { .. } => true,
    };

    if !loaded {
        std::process::exit(1);
    }

    Ok(())
}

struct Rendering {
    opts: DisplayOptions,
    format: OutputFormat,
    default_view: ViewMode,
}

impl Rendering {
    async fn collection<R>(&self, client: &ApiClient, args: ViewArgs) -> anyhow::Result<bool>
    where
        R: Resource + Present,
    {
        let mut unit =
            CollectionUnit::<R>::for_kind(R::KIND).with_view(args.view.unwrap_or(self.default_view));
        load_collection(client, &mut unit).await;
        self.show(R::KIND, &mut unit, args.toggle)
    }

    /// Print the unit, twice when toggling. Returns false for the error state.
    fn show<R: Present>(
        &self,
        kind: ResourceKind,
        unit: &mut CollectionUnit<R>,
        toggle: bool,
    ) -> anyhow::Result<bool> {
        self.print(kind, unit)?;

        if toggle {
            if kind.has_card_layout() {
                unit.toggle_view();
                println!();
                self.print(kind, unit)?;
            } else {
                eprintln!("The {} view has no card layout", kind);
            }
        }

        match unit.error() {
            Some(message) => {
                if self.format != OutputFormat::Text {
                    eprintln!("Failed to load {}: {}", kind, message);
                }
                Ok(false)
            }
            None => Ok(true),
        }
    }

    fn print<R: Present>(&self, kind: ResourceKind, unit: &CollectionUnit<R>) -> anyhow::Result<()> {
        let page = Page::build(kind, unit, &self.opts);
        print!("{}", terminal::render(&page, self.format)?);
        if self.format == OutputFormat::Json {
            println!();
        }
        Ok(())
    }
}
