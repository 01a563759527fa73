//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Ladle - recipe browsing and a personal recipe notebook.
#[derive(Debug, Parser)]
#[command(name = "ladle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default ~/.ladle/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for local state (notebook, catalog cache)
    #[arg(long, global = true, env = "LADLE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Base URL of the recipe catalog
    #[arg(long, global = true, env = "LADLE_CATALOG_URL")]
    pub catalog_url: Option<String>,

    /// Serve catalog data from the local cache only
    #[arg(long, global = true, env = "LADLE_OFFLINE")]
    pub offline: bool,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse the catalog interactively (default if no command specified)
    Browse(BrowseArgs),

    /// List catalog categories
    Categories(CategoriesArgs),

    /// List recipes in a category
    List(ListArgs),

    /// Show one catalog recipe
    Show(ShowArgs),

    /// Manage your own recipes
    My(MyArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `browse` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BrowseArgs {
    /// Start in this category instead of the category picker
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for the `categories` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CategoriesArgs {
    /// Include category descriptions
    #[arg(long)]
    pub wide: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ListArgs {
    /// Category to list
    pub category: String,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Recipe id
    pub id: String,
}

/// Arguments for the `my` command group.
#[derive(Debug, Clone, clap::Args)]
pub struct MyArgs {
    #[command(subcommand)]
    pub command: MyCommands,
}

/// Notebook subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum MyCommands {
    /// List your recipes
    List,

    /// Show one of your recipes
    Show(MyShowArgs),

    /// Add a recipe to your notebook
    Add(MyAddArgs),

    /// Edit a recipe in your notebook
    Edit(MyEditArgs),

    /// Remove a recipe from your notebook
    Remove(MyRemoveArgs),
}

/// Arguments for `my show`.
#[derive(Debug, Clone, clap::Args)]
pub struct MyShowArgs {
    /// Recipe number as printed by `my list` (1-based)
    pub number: usize,
}

/// Arguments for `my add`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct MyAddArgs {
    /// Recipe title (prompted when omitted)
    #[arg(long)]
    pub title: Option<String>,

    /// Free-text description
    #[arg(long)]
    pub description: Option<String>,

    /// Image URL or path
    #[arg(long)]
    pub image: Option<String>,
}

/// Arguments for `my edit`.
#[derive(Debug, Clone, clap::Args)]
pub struct MyEditArgs {
    /// Recipe number as printed by `my list` (1-based)
    pub number: usize,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New image URL or path
    #[arg(long)]
    pub image: Option<String>,
}

/// Arguments for `my remove`.
#[derive(Debug, Clone, clap::Args)]
pub struct MyRemoveArgs {
    /// Recipe number as printed by `my list` (1-based)
    pub number: usize,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
