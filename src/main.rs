use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use influencer::{config::Config, scenario::Scenario, Listener};

/// Replays a follow/post scenario and reports what every subscriber opened.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Scenario file (TOML). The built-in scenario runs when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the service prefix used to build post URLs.
    #[arg(long)]
    base_url: Option<String>,

    /// More output; repeat for trace level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn level(&self) -> LevelFilter {
        match (self.quiet, self.verbose) {
            (true, _) => LevelFilter::Warn,
            (false, 0) => LevelFilter::Info,
            (false, 1) => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Applies command line overrides on top of `config`.
    fn apply(&self, mut config: Config) -> Config {
        if let Some(base_url) = &self.base_url {
            config.service.base_url = base_url.clone();
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    TermLogger::init(args.level(), log_config, TerminalMode::Mixed, ColorChoice::Auto)
        .context("could not initialise logging")?;

    let config = match &args.config {
        Some(path) => Config::load(path).await?,
        None => Config::default(),
    };
    let config = args.apply(config);

    let scenario = Scenario::build(&config).context("invalid scenario")?;
    scenario.run();

    for subscriber in scenario.subscribers() {
        info!("{} opened {} post(s)", subscriber.name(), subscriber.opened().len());
    }
    Ok(())
}
