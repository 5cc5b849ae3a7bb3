//! sqlstmt CLI
//!
//! Builds an INSERT from `column=value` arguments and either prints it or
//! runs it against a SQLite database.

mod assignment;

use clap::{Parser, Subcommand};
use sqlstmt_core::Insert;
use sqlstmt_sqlite::SqliteExecutor;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use crate::assignment::Assignment;

/// Build and run parameterized INSERT statements.
#[derive(Parser)]
#[command(name = "sqlstmt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database URL (SQLite path or connection string).
    #[arg(short, long, env = "DATABASE_URL", default_value = "sqlite::memory:")]
    database: String,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert one row.
    Insert {
        /// Table to insert into.
        #[arg(short, long)]
        table: String,

        /// Render `INSERT IGNORE` (MySQL syntax, rejected by SQLite).
        #[arg(long)]
        ignore: bool,

        /// Print the SQL and bound values without executing.
        #[arg(long)]
        dry_run: bool,

        /// SQL to run before the insert, e.g. a CREATE TABLE (repeatable).
        #[arg(long)]
        init: Vec<String>,

        /// Values as COLUMN=VALUE, in column order.
        #[arg(required = true)]
        assignments: Vec<Assignment>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Insert {
            table,
            ignore,
            dry_run,
            init,
            assignments,
        } => {
            let mut insert = Insert::with_pairs(
                assignments
                    .into_iter()
                    .map(|assignment| (assignment.column, assignment.value)),
            )
            .into(table);
            if ignore {
                insert = insert.ignore();
            }

            if dry_run {
                let (sql, params) = insert.build()?;
                println!("{sql}");
                println!("{}", serde_json::to_string(&params)?);
                return Ok(());
            }

            let executor = SqliteExecutor::connect(&cli.database).await?;
            for sql in &init {
                debug!(sql = %sql, "running init statement");
                sqlx::query(sql).execute(executor.pool()).await?;
            }

            let id = insert.execute(&executor).await?;
            info!("Inserted row {id}");
            println!("{id}");
        }
    }

    Ok(())
}
