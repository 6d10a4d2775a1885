// bm/src/cli/mod.rs
use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::config::Settings;
use crate::infrastructure::repositories::sqlite::repository::SqliteBookmarkRepository;
use std::io;
use tracing::debug;

pub mod args;
pub mod bookmark_commands;
pub mod display;
pub mod error;

/// Runs one parsed command. The repository is only opened for commands that
/// touch bookmarks.
pub fn execute_command(cli: Cli, settings: &Settings) -> CliResult<()> {
    if cli.generate_config {
        println!("{}", crate::config::generate_default_config());
        return Ok(());
    }

    let Some(command) = cli.command else {
        return Ok(());
    };

    let db_path = cli.path.as_deref().unwrap_or(&settings.db_path);

    match command {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Add {
            name,
            url,
            tags,
            archived,
        } => bookmark_commands::add(&mut open_repository(db_path)?, &name, &url, &tags, archived),
        Commands::Del { name } => bookmark_commands::delete(&mut open_repository(db_path)?, &name),
        Commands::Ls {
            separator,
            all,
            is_json,
        } => {
            let mut repo = open_repository(db_path)?;
            let mut stdout = io::stdout().lock();
            bookmark_commands::list(&mut repo, &mut stdout, &separator, all, is_json)
        }
        Commands::Upd {
            name,
            url,
            tags,
            archive,
            unarchive,
        } => bookmark_commands::update(
            &mut open_repository(db_path)?,
            &name,
            url.as_deref(),
            &tags,
            bookmark_commands::archived_flag(archive, unarchive),
        ),
    }
}

fn open_repository(db_path: &str) -> CliResult<SqliteBookmarkRepository> {
    debug!("Using database: {}", db_path);
    Ok(SqliteBookmarkRepository::open(db_path)?)
}
