//! Snapshot, query, SID and tool commands.

use std::sync::Arc;

use tracing::info;

use axsid_config::{Config, ConfigLoader, TreeFormat};
use axsid_core::identity::{self, AxPath};
use axsid_core::{EngineOptions, SemanticEngine};
use axsid_protocols::{NodeField, QueryRequest, SnapshotRequest};
use axsid_tools_semantic::{JsonTreeProvider, SemanticToolset, TreeFileFormat};

use crate::cli::{Cli, FormatArg};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Engine options from the `[engine]` section.
pub(crate) fn engine_options(config: &Config) -> EngineOptions {
    let engine = &config.engine;
    let default_fields: Vec<NodeField> = engine
        .default_fields
        .iter()
        .filter_map(|name| NodeField::parse(name))
        .collect();
    EngineOptions {
        default_max_nodes: engine.default_max_nodes,
        default_query_max: engine.default_query_max,
        safety_multiple: engine.safety_multiple,
        snippet_max_chars: engine.snippet_max_chars,
        default_fields: if default_fields.is_empty() {
            NodeField::ALL.to_vec()
        } else {
            default_fields
        },
    }
}

/// Build an engine over the tree file named by the CLI or the config.
pub(crate) fn build_engine(cli: &Cli, config: &Config) -> Result<Arc<SemanticEngine>, Box<dyn std::error::Error>> {
    let path = cli
        .tree
        .clone()
        .or_else(|| config.provider.tree_path.clone())
        .ok_or("no tree file: pass --tree, set AXSID_TREE or provider.tree_path")?;
    let path = ConfigLoader::expand_path(&path);

    let format = match cli.format {
        Some(FormatArg::Tree) => TreeFileFormat::Tree,
        Some(FormatArg::Cdp) => TreeFileFormat::Cdp,
        None => match config.provider.format {
            TreeFormat::Tree => TreeFileFormat::Tree,
            TreeFormat::Cdp => TreeFileFormat::Cdp,
        },
    };
    let frame_id = cli
        .frame_id
        .clone()
        .unwrap_or_else(|| config.provider.frame_id.clone());

    info!("Using tree file {} ({:?}, frame {})", path, format, frame_id);
    let mut provider = JsonTreeProvider::new(path, format, frame_id);
    if let Some(bounds) = cli.bounds.clone().or_else(|| config.provider.bounds_path.clone()) {
        let bounds = ConfigLoader::expand_path(&bounds);
        info!("Using bounds file {}", bounds);
        provider = provider.with_bounds_file(bounds);
    }
    Ok(Arc::new(SemanticEngine::with_options(
        Arc::new(provider),
        engine_options(config),
    )))
}

fn print_json<T: serde::Serialize>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) async fn snapshot(engine: Arc<SemanticEngine>, request: SnapshotRequest) -> CmdResult {
    let response = engine.snapshot(&request).await?;
    print_json(&response)
}

pub(crate) async fn query(engine: Arc<SemanticEngine>, request: QueryRequest) -> CmdResult {
    let response = engine.query(&request).await?;
    print_json(&response)
}

pub(crate) fn sid(frame: &str, path: &str, role: &str, label: &str, description: &str) -> CmdResult {
    let ax_path = AxPath::from_segments(path.split('/').filter(|s| !s.is_empty()));
    let sid = identity::derive(frame, &ax_path, role, label, description);
    print_json(&serde_json::json!({
        "sid": sid.as_str(),
        "frame_id": frame,
        "path": ax_path.as_str(),
        "role": role,
        "normalized_label": identity::normalize_label(label),
        "description": description,
    }))
}

pub(crate) fn tools(engine: Arc<SemanticEngine>, style: &str) -> CmdResult {
    let toolset = SemanticToolset::new(engine);
    let definitions = toolset.list();
    let rendered: Vec<serde_json::Value> = match style {
        "openai" => definitions.iter().map(|d| d.to_openai_function()).collect(),
        "anthropic" => definitions.iter().map(|d| d.to_anthropic_tool()).collect(),
        "plain" => definitions
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<_, _>>()?,
        other => return Err(format!("unknown tool style '{}' (plain, openai, anthropic)", other).into()),
    };
    print_json(&rendered)
}
