mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{export::ExportSubcommand, extra::ExtraSubcommand, plan::PlanSubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "poolplan",
    about = "Pool build planner — estimate budget, timeline, materials, and upkeep for a backyard pool project",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .poolplan/ or .git/)
    #[arg(long, global = true, env = "POOLPLAN_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the .poolplan/ data directory
    Init,

    /// Show the current plan
    Show,

    /// Set a plan field (location, soil, shape, size, length, width, depth, type, finish)
    Set { field: String, value: String },

    /// Manage additional features on the plan
    Extra {
        #[command(subcommand)]
        subcommand: ExtraSubcommand,
    },

    /// Cost estimate with breakdown and DIY/premium tiers
    Budget {
        /// Scale labor costs, e.g. 1.5 for a high-cost market
        #[arg(long, default_value_t = 1.0)]
        labor: f64,

        /// Scale structure, finish, and excavation costs
        #[arg(long, default_value_t = 1.0)]
        materials: f64,

        /// Scale additional-feature costs
        #[arg(long, default_value_t = 1.0)]
        extras: f64,
    },

    /// Construction schedule by phase
    Timeline,

    /// Materials and tools checklist
    Materials,

    /// Annual upkeep costs and routine schedule
    Maintenance,

    /// Property value return analysis
    Roi,

    /// Safety checklist and compliance score
    Safety,

    /// Advice tailored to the current selections
    Recommend,

    /// Equipment suggestions matching the pool type and size
    Products,

    /// Manage saved plan snapshots
    Plan {
        #[command(subcommand)]
        subcommand: PlanSubcommand,
    },

    /// Produce a document, email link, or share link for the plan
    Export {
        #[command(subcommand)]
        subcommand: ExportSubcommand,
    },

    /// Load a plan from a share link
    Import { link: String },

    /// Clear the current plan
    Reset,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Show => cmd::show::run(&root, cli.json),
        Commands::Set { field, value } => cmd::set::run(&root, &field, &value, cli.json),
        Commands::Extra { subcommand } => cmd::extra::run(&root, subcommand, cli.json),
        Commands::Budget {
            labor,
            materials,
            extras,
        } => cmd::budget::run(
            &root,
            poolplan_core::budget::Adjustments { labor, materials, extras },
            cli.json,
        ),
        Commands::Timeline => cmd::timeline::run(&root, cli.json),
        Commands::Materials => cmd::materials::run(&root, cli.json),
        Commands::Maintenance => cmd::maintenance::run(&root, cli.json),
        Commands::Roi => cmd::roi::run(&root, cli.json),
        Commands::Safety => cmd::safety::run(&root, cli.json),
        Commands::Recommend => cmd::recommend::run(&root, cli.json),
        Commands::Products => cmd::products::run(&root, cli.json),
        Commands::Plan { subcommand } => cmd::plan::run(&root, subcommand, cli.json),
        Commands::Export { subcommand } => cmd::export::run(&root, subcommand),
        Commands::Import { link } => cmd::import::run(&root, &link, cli.json),
        Commands::Reset => cmd::reset::run(&root, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
