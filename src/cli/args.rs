//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};
use clap_complete::Shell;

use crate::domain::NodeKind;

/// AI design-artifact studio: sitemap diagrams, journey maps, and style guides
#[derive(Parser, Debug)]
#[command(name = "uxforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Raise verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Print author and version info
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with information-architecture sitemaps
    Sitemap {
        #[command(subcommand)]
        command: SitemapCommands,
    },

    /// Work with user journey maps
    Journey {
        #[command(subcommand)]
        command: JourneyCommands,
    },

    /// Work with design-system style guides
    Styleguide {
        #[command(subcommand)]
        command: StyleguideCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum SitemapCommands {
    /// Lay out a sitemap payload and export it as SVG
    Render {
        /// Generation payload (JSON), `-` for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,

        /// Output file (default: ia_diagram_<stem>_<timestamp>.svg)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Expanded (fullscreen-style) padding
        #[arg(long)]
        expanded: bool,
    },

    /// Rename the first node matching --name and --kind
    Rename {
        /// Generation payload (JSON), `-` for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,

        /// Current node name
        #[arg(long)]
        name: String,

        /// Node kind: page, category or feature
        #[arg(long)]
        kind: NodeKind,

        /// Replacement name
        #[arg(long)]
        new_name: String,

        /// Output file (default: stdout)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Print the sitemap outline as a tree
    Tree {
        /// Generation payload (JSON), `-` for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,
    },

    /// Show tree metrics and the computed canvas size
    Stats {
        /// Generation payload (JSON), `-` for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum JourneyCommands {
    /// Render a journey map payload as Markdown
    Render {
        /// Generation payload (JSON), `-` for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,

        /// Output file (default: journey_map_<stem>_<timestamp>.md)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum StyleguideCommands {
    /// Render a style guide payload as Markdown
    Render {
        /// Generation payload (JSON), `-` for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,

        /// Output file (default: style_guide_<stem>_<timestamp>.md)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}
