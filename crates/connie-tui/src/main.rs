//! Connie TUI entry point.
//!
//! # Usage
//!
//! ```bash
//! # Demo profile, `n` advances the trip as the backend would
//! connie-tui --simulate --role driver
//!
//! # Profile read from a JSON user table
//! connie-tui --profiles users.json --uid u-ana --destination "Corner Store"
//! ```

use std::{fs::File, path::PathBuf, sync::Mutex};

use clap::{Parser, ValueEnum};
use connie_app::{App, ProfileStore, Runtime};
use connie_core::{ActorRole, Destination, UserProfile};
use connie_tui::{DemoProfile, JsonProfileStore, LocalTrip, TerminalDriver};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Account side of the session.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum RoleArg {
    Passenger,
    Driver,
}

impl From<RoleArg> for ActorRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Passenger => Self::Passenger,
            RoleArg::Driver => Self::Driver,
        }
    }
}

/// Connie ride action panel
#[derive(Parser, Debug)]
#[command(name = "connie-tui")]
#[command(about = "Terminal ride action panel for Connie trips")]
#[command(version)]
struct Args {
    /// JSON document holding the user table
    ///
    /// If not provided, a demo profile for the session role is used.
    #[arg(short, long)]
    profiles: Option<PathBuf>,

    /// Uid of the signed-in user in the profile document
    #[arg(short, long, requires = "profiles")]
    uid: Option<String>,

    /// Session role
    #[arg(short, long, value_enum, default_value = "passenger")]
    role: RoleArg,

    /// Let the `n` key advance the trip phase as a remote update would
    #[arg(long)]
    simulate: bool,

    /// Destination shown on the request panel
    #[arg(long)]
    destination: Option<String>,

    /// Street address of the destination
    #[arg(long, requires = "destination", default_value = "")]
    address: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// File receiving log output
    #[arg(long, default_value = "connie-tui.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    let log_file = File::create(&args.log_file)?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(log_file)))
        .with(filter)
        .init();

    let role = ActorRole::from(args.role);
    let mut app = App::new(role);
    if let Some(name) = args.destination {
        app = app.with_destination(Destination::new(name, args.address));
    }

    tracing::info!(%role, simulate = args.simulate, "Connie TUI starting");

    match args.profiles {
        Some(path) => {
            tracing::info!(path = %path.display(), "Reading profiles from file");
            run(app, JsonProfileStore::new(path, args.uid), args.simulate).await
        },
        None => {
            let demo = UserProfile::new("demo", "Kim", role);
            run(app, DemoProfile::new(demo), args.simulate).await
        },
    }
}

async fn run<P: ProfileStore>(
    app: App,
    profiles: P,
    simulate: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let driver = TerminalDriver::new(simulate)?;
    let runtime = Runtime::with_app(driver, profiles, LocalTrip, app);
    let app = runtime.run().await?;

    tracing::info!(phase = %app.phase(), "Connie TUI stopped");
    Ok(())
}
