//! CLI definitions for axsid.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use axsid_protocols::{CaptureScope, RankBy};

/// axsid CLI.
#[derive(Parser)]
#[command(name = "axsid")]
#[command(about = "Semantic identification and query over accessibility trees")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "AXSID_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Tree file to capture from (overrides provider.tree_path)
    #[arg(short, long, env = "AXSID_TREE", global = true)]
    pub tree: Option<String>,

    /// Bounds file for cdp trees (overrides provider.bounds_path)
    #[arg(long, env = "AXSID_BOUNDS", global = true)]
    pub bounds: Option<String>,

    /// Tree file format (overrides provider.format)
    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    /// Frame id for trees that do not name one (overrides provider.frame_id)
    #[arg(long, global = true)]
    pub frame_id: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum FormatArg {
    Tree,
    Cdp,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print one page of identified nodes
    Snapshot {
        /// Portion of the page to capture
        #[arg(long, default_value = "document")]
        scope: CaptureScope,

        /// Only include the subtree rooted at this SID
        #[arg(long)]
        within: Option<String>,

        /// Fields to include, comma separated (default: all)
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,

        /// Page size
        #[arg(long)]
        max_nodes: Option<usize>,

        /// Cursor from a previous page
        #[arg(long)]
        cursor: Option<String>,
    },

    /// Rank nodes against predicates and print their SIDs
    Query {
        /// Substring of the node role
        #[arg(long)]
        role: Option<String>,

        /// Substring of the accessible name (falls back to description)
        #[arg(long)]
        label: Option<String>,

        /// Substring of name, description or value
        #[arg(long)]
        text: Option<String>,

        /// Exact attribute value, as name=value (repeatable)
        #[arg(long = "attr", value_parser = parse_key_val)]
        attributes: Vec<(String, String)>,

        /// Only search the subtree rooted at this SID
        #[arg(long)]
        within: Option<String>,

        /// Result ordering
        #[arg(long, default_value = "semantic_score")]
        rank_by: RankBy,

        /// Return up to --max matches instead of only the best
        #[arg(long)]
        multiple: bool,

        /// Maximum matches with --multiple
        #[arg(long)]
        max: Option<usize>,

        /// Include match reasons
        #[arg(long)]
        explain: bool,
    },

    /// Derive a SID from explicit inputs
    Sid {
        /// Frame id
        #[arg(long, default_value = "main")]
        frame: String,

        /// Path such as `WebArea[0]/form[1]/button[2]`
        #[arg(long)]
        path: String,

        #[arg(long, default_value = "")]
        role: String,

        #[arg(long, default_value = "")]
        label: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Print the tool definitions
    Tools {
        /// Output format (plain, openai, anthropic)
        #[arg(long, default_value = "plain")]
        style: String,
    },

    /// Validate the configuration file
    ValidateConfig,
}

/// Parse `name=value`.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", s))?;
    if name.trim().is_empty() {
        return Err(format!("empty attribute name in '{}'", s));
    }
    Ok((name.trim().to_string(), value.to_string()))
}
