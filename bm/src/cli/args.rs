// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bm", author, version, about, long_about = None)]
/// A minimal bookmark manager for the terminal
pub struct Cli {
    /// Path to the sqlite database (overrides config file and BM_DB_PATH)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub path: Option<String>,

    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Print a default config file and exit
    #[arg(long = "generate-config")]
    pub generate_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new bookmark
    Add {
        #[arg(short = 'n', long = "name", help = "name of the bookmark (must be unique)")]
        name: String,
        #[arg(short = 'u', long = "url", help = "URL of the bookmark")]
        url: String,
        #[arg(
            short = 't',
            long = "tags",
            help = "tags for the bookmark, repeatable or comma separated"
        )]
        tags: Vec<String>,
        #[arg(long = "archived", help = "store the bookmark as archived")]
        archived: bool,
    },
    /// Delete a bookmark
    Del {
        #[arg(short = 'n', long = "name", help = "name to be deleted")]
        name: String,
    },
    /// List bookmarks
    Ls {
        #[arg(
            short = 's',
            long = "separator",
            default_value = "|",
            help = "column separator (one character)"
        )]
        separator: String,
        #[arg(short = 'a', long = "all", help = "include archived bookmarks")]
        all: bool,
        #[arg(long = "json", help = "output as json")]
        is_json: bool,
    },
    /// Update a bookmark, only given fields change
    Upd {
        #[arg(short = 'n', long = "name", help = "name of the bookmark to update")]
        name: String,
        #[arg(short = 'u', long = "url", help = "new URL")]
        url: Option<String>,
        #[arg(
            short = 't',
            long = "tags",
            help = "replace all tags, repeatable or comma separated"
        )]
        tags: Vec<String>,
        #[arg(long = "archive", conflicts_with = "unarchive", help = "archive the bookmark")]
        archive: bool,
        #[arg(long = "unarchive", help = "restore an archived bookmark")]
        unarchive: bool,
    },
    /// Show version information
    Version,
}
