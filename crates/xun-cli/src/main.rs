mod db;
mod run;
mod schedule;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use xun_agent::{TriageOptions, Workflows};

use crate::db::DbCommands;

#[derive(Debug, Parser)]
#[command(name = "xun")]
#[command(about = "AgentXun social agent")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze trending headlines and posts, then post the analysis
    Trends,
    /// Classify mentions, reply, and deploy tokens for accepted pitches
    Mentions {
        /// Use the canned mention set instead of the live account
        #[arg(long, conflicts_with = "live")]
        fixtures: bool,
        /// Read mentions from the live account even in development
        #[arg(long)]
        live: bool,
        /// Post generated replies instead of only logging them
        #[arg(long)]
        publish_replies: bool,
    },
    /// Run both workflows on their cron schedules until interrupted
    Schedule,
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

impl Commands {
    /// Triage options for this invocation; flags win over configuration.
    fn triage_options(&self, config: &xun_core::AppConfig) -> TriageOptions {
        let (fixtures, live, publish_replies) = match self {
            Commands::Mentions {
                fixtures,
                live,
                publish_replies,
            } => (*fixtures, *live, *publish_replies),
            _ => (false, false, false),
        };
        TriageOptions {
            use_fixtures: fixtures || (!live && config.use_fixture_mentions),
            publish_replies: publish_replies || config.publish_replies,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("xun: no command given (try `xun --help`)");
        return Ok(());
    };

    let config = xun_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool_config = xun_db::PoolConfig::from_app_config(&config);
    let pool = xun_db::connect_pool(&config.database_url, pool_config).await?;

    if let Commands::Db { command } = &command {
        return db::run_db_command(&pool, command).await;
    }

    xun_db::run_migrations(&pool).await?;
    let options = command.triage_options(&config);
    let workflows = Workflows::from_config(&config, pool, options)?;

    match command {
        Commands::Trends => run::run_trends(&workflows).await,
        Commands::Mentions { .. } => run::run_mentions(&workflows).await,
        Commands::Schedule => schedule::run_schedule(workflows, &config).await,
        Commands::Db { .. } => Ok(()),
    }
}
