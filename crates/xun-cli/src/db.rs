//! `xun db` maintenance commands.

use clap::Subcommand;

/// Sub-commands available under `db`.
#[derive(Debug, Subcommand)]
pub enum DbCommands {
    /// Check database connectivity
    Ping,
    /// Apply pending migrations
    Migrate,
}

pub(crate) async fn run_db_command(
    pool: &sqlx::PgPool,
    command: &DbCommands,
) -> anyhow::Result<()> {
    match command {
        DbCommands::Ping => {
            xun_db::ping(pool).await?;
            println!("database: ok");
        }
        DbCommands::Migrate => {
            let applied = xun_db::run_migrations(pool).await?;
            println!("migrations: {applied} applied");
        }
    }
    Ok(())
}
