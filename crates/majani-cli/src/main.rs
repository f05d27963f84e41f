// Rust guideline compliant 2026-10-12

//! Majani CLI Application
//!
//! Command-line interface for the Majani free-item marketplace catalog.

use clap::Parser;
use majani_app::{CatalogContext, Clock, SystemClock};
use majani_cli::commands::{self, discover::DiscoverArgs, post::PostArgs, CommandContext};
use majani_cli::{create_formatter, should_use_color};
use majani_core::{Config, Locale};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "majani",
    version,
    about = "Majani: discover free items donated nearby",
    long_about = "Majani keeps a catalog of donated items in JSONL and finds them by category, distance, text and recency.",
    after_help = "Examples:\n  majani init --seed\n  majani discover --category home --max-distance 5 --sort proximity\n  majani show lst-abc123\n  majani post --owner usr-0a1b2c --category books --condition used \"Calculus textbook\"\n  majani reserve lst-abc123 --requester usr-7d8e9f\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Display locale (fa or en)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Directory containing the .majani catalog
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

impl From<OutputFormat> for majani_core::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => majani_core::OutputFormat::Json,
            OutputFormat::Table => majani_core::OutputFormat::Table,
            OutputFormat::Plain => majani_core::OutputFormat::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new Majani catalog
    Init {
        /// Fill an empty catalog with demo listings around Tehran
        #[arg(long)]
        seed: bool,
    },

    /// Post a listing
    Post {
        /// Title of the listing
        title: String,

        /// Posting user ID (usr-...)
        #[arg(long)]
        owner: String,

        /// Category tag
        #[arg(long)]
        category: String,

        /// Condition (new, almost_new, used, needs_repair)
        #[arg(long, default_value = "used")]
        condition: String,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Image URLs
        #[arg(long = "image")]
        images: Vec<String>,

        /// Pickup latitude (defaults to the configured origin)
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Pickup longitude (defaults to the configured origin)
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Human-readable pickup address
        #[arg(long)]
        address: Option<String>,

        /// City label
        #[arg(long)]
        city: Option<String>,
    },

    /// Show a listing and record the view
    Show {
        /// Listing ID (full or partial)
        id: String,

        /// Your latitude
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Your longitude
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,
    },

    /// Find listings by category, distance and text
    Discover {
        /// Category tag or "all"
        #[arg(long)]
        category: Option<String>,

        /// Maximum distance in kilometers
        #[arg(long)]
        max_distance: Option<f64>,

        /// Text contained in the title or description
        #[arg(long, short)]
        query: Option<String>,

        /// Sort order (recency or proximity)
        #[arg(long)]
        sort: Option<String>,

        /// Your latitude
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Your longitude
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,
    },

    /// List listings in the same category
    Similar {
        /// Listing ID (full or partial)
        id: String,

        /// Maximum number of listings to show
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Reserve an available listing
    Reserve {
        /// Listing ID (full or partial)
        id: String,

        /// Requesting user ID
        #[arg(long)]
        requester: String,
    },

    /// Mark a listing as given
    Give {
        /// Listing ID (full or partial)
        id: String,

        /// Owner user ID
        #[arg(long)]
        owner: String,
    },

    /// List category tags and labels
    Categories,

    /// Show recently viewed listings
    Recent,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MAJANI_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Loads the catalog config when a catalog exists, defaults otherwise.
fn load_config(root: Option<&std::path::Path>) -> anyhow::Result<Config> {
    match CatalogContext::discover(root) {
        Ok(catalog) => Ok(catalog.load_config()?),
        Err(_) => Ok(Config::default()),
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let use_color = !cli.no_color && should_use_color();
    let now = SystemClock.now();
    let config_result = load_config(cli.root.as_deref());
    let config = config_result.as_ref().cloned().unwrap_or_default();

    let format = match (cli.json, cli.format) {
        (true, _) => majani_core::OutputFormat::Json,
        (false, Some(format)) => format.into(),
        (false, None) => config.output_format,
    };
    let locale_result = match cli.locale.as_deref() {
        Some(value) => value.parse::<Locale>(),
        None => Ok(config.locale),
    };
    let locale = locale_result.as_ref().copied().unwrap_or_default();
    let formatter = create_formatter(format, use_color, locale, now);

    let result = config_result
        .and_then(|config| locale_result.map(|_| config).map_err(anyhow::Error::from))
        .and_then(|config| {
            let ctx = CommandContext {
                root: cli.root.clone(),
                config,
                formatter: formatter.as_ref(),
                use_color,
                json: format == majani_core::OutputFormat::Json,
                now,
            };
            run(&ctx, cli.command)
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let rendered = formatter.format_error(&e);
            if format == majani_core::OutputFormat::Json {
                println!("{}", rendered);
            } else {
                eprintln!("{}", rendered);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(ctx: &CommandContext<'_>, command: Option<Commands>) -> anyhow::Result<()> {
    match command {
        Some(Commands::Init { seed }) => commands::init::execute(ctx, seed)?,
        Some(Commands::Post {
            title,
            owner,
            category,
            condition,
            description,
            images,
            lat,
            lon,
            address,
            city,
        }) => commands::post::execute(
            ctx,
            PostArgs {
                owner,
                title,
                description,
                category,
                condition,
                images,
                lat,
                lon,
                address,
                city,
            },
        )?,
        Some(Commands::Show { id, lat, lon }) => commands::show::execute(ctx, id, lat, lon)?,
        Some(Commands::Discover {
            category,
            max_distance,
            query,
            sort,
            lat,
            lon,
        }) => commands::discover::execute(
            ctx,
            DiscoverArgs {
                category,
                max_distance,
                query,
                sort,
                lat,
                lon,
            },
        )?,
        Some(Commands::Similar { id, limit }) => commands::similar::execute(ctx, id, limit)?,
        Some(Commands::Reserve { id, requester }) => {
            commands::reserve::execute(ctx, id, requester)?
        }
        Some(Commands::Give { id, owner }) => commands::give::execute(ctx, id, owner)?,
        Some(Commands::Categories) => commands::categories::execute(ctx),
        Some(Commands::Recent) => commands::recent::execute(ctx)?,
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
