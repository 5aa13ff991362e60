//! Command dispatch: wires parsed arguments to services.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::services::{ExportService, GenerationService};
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, JourneyCommands, SitemapCommands, StyleguideCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{NodeKind, NodeRef};
use crate::infrastructure::traits::{ContentSource, FileSystem};
use crate::infrastructure::{FileSource, InfraError, RealFileSystem, StdinSource};
use crate::layout::{DisplayMode, LayoutEngine};
use crate::render::ToOutline;

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Sitemap { command }) => match command {
            SitemapCommands::Render {
                input,
                output,
                expanded,
            } => _sitemap_render(settings, input, output.as_deref(), *expanded),
            SitemapCommands::Rename {
                input,
                name,
                kind,
                new_name,
                output,
            } => _sitemap_rename(input, name, *kind, new_name, output.as_deref()),
            SitemapCommands::Tree { input } => _sitemap_tree(input),
            SitemapCommands::Stats { input } => _sitemap_stats(settings, input),
        },
        Some(Commands::Journey { command }) => match command {
            JourneyCommands::Render { input, output } => {
                _journey_render(settings, input, output.as_deref())
            }
        },
        Some(Commands::Styleguide { command }) => match command {
            StyleguideCommands::Render { input, output } => {
                _styleguide_render(settings, input, output.as_deref())
            }
        },
        None => Ok(()),
    }
}

/// `-` selects stdin, anything else is read as a file.
fn payload_source(input: &Path) -> Box<dyn ContentSource> {
    if input == Path::new("-") {
        Box::new(StdinSource)
    } else {
        Box::new(FileSource::new(input))
    }
}

/// Topic string for default export names, taken from the input file stem.
fn topic_stem(input: &Path) -> String {
    if input == Path::new("-") {
        String::new()
    } else {
        input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[instrument(skip(settings))]
fn _sitemap_render(
    settings: &Settings,
    input: &Path,
    output: Option<&Path>,
    expanded: bool,
) -> CliResult<()> {
    let tree = GenerationService::new()
        .load_sitemap(payload_source(input).as_ref())
        .map_err(InfraError::from)?;

    let mode = if expanded {
        DisplayMode::Expanded
    } else {
        DisplayMode::Normal
    };
    let layout = LayoutEngine::new(settings.layout.clone()).compute(&tree, mode);
    debug!(
        nodes = layout.nodes.len(),
        edges = layout.edges.len(),
        width = layout.width,
        height = layout.height,
        "layout ready"
    );

    let export = ExportService::new(Arc::new(RealFileSystem));
    let path = resolve_output(&export, settings, output, "ia_diagram", input, "svg");
    let written = export
        .export_sitemap(&tree, &layout, &path)
        .map_err(InfraError::from)?;
    output::success(&format!("exported sitemap to {}", written.display()));
    Ok(())
}

#[instrument]
fn _sitemap_rename(
    input: &Path,
    name: &str,
    kind: NodeKind,
    new_name: &str,
    output: Option<&Path>,
) -> CliResult<()> {
    let tree = GenerationService::new()
        .load_sitemap(payload_source(input).as_ref())
        .map_err(InfraError::from)?;

    let target = NodeRef::new(name, kind);
    if tree.find_first(&target).is_none() {
        output::warning(&format!("no node named {:?} of kind {}", name, kind));
    }
    let renamed = tree.rename_first(&target, new_name);

    let root = renamed
        .to_node()
        .ok_or_else(|| CliError::InvalidArgs("empty sitemap".to_string()))?;
    let json = serde_json::to_string_pretty(&root)
        .map_err(|e| ApplicationError::OperationFailed {
            context: "serialize renamed sitemap".to_string(),
            source: Box::new(e),
        })
        .map_err(InfraError::from)?;

    match output {
        Some(path) => {
            RealFileSystem
                .write(path, &json)
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::success(&format!("wrote renamed sitemap to {}", path.display()));
        }
        None => output::info(&json),
    }
    Ok(())
}

#[instrument]
fn _sitemap_tree(input: &Path) -> CliResult<()> {
    let tree = GenerationService::new()
        .load_sitemap(payload_source(input).as_ref())
        .map_err(InfraError::from)?;
    match tree.to_outline() {
        Some(outline) => output::info(&outline),
        None => output::warning("sitemap is empty"),
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _sitemap_stats(settings: &Settings, input: &Path) -> CliResult<()> {
    let tree = GenerationService::new()
        .load_sitemap(payload_source(input).as_ref())
        .map_err(InfraError::from)?;
    let (width, height) = LayoutEngine::new(settings.layout.clone()).canvas_size(&tree);

    output::header("Sitemap metrics");
    output::detail(&format!("nodes:     {}", tree.len()));
    output::detail(&format!("leaves:    {}", tree.leaf_count()));
    output::detail(&format!("max depth: {}", tree.max_depth()));
    output::detail(&format!("canvas:    {} x {} px", width, height));
    Ok(())
}

#[instrument(skip(settings))]
fn _journey_render(settings: &Settings, input: &Path, output: Option<&Path>) -> CliResult<()> {
    let map = GenerationService::new()
        .load_journey_map(payload_source(input).as_ref())
        .map_err(InfraError::from)?;

    let export = ExportService::new(Arc::new(RealFileSystem));
    let path = resolve_output(&export, settings, output, "journey_map", input, "md");
    let written = export
        .export_journey_map(&map, &path)
        .map_err(InfraError::from)?;
    output::success(&format!("exported journey map to {}", written.display()));
    Ok(())
}

#[instrument(skip(settings))]
fn _styleguide_render(settings: &Settings, input: &Path, output: Option<&Path>) -> CliResult<()> {
    let guide = GenerationService::new()
        .load_style_guide(payload_source(input).as_ref())
        .map_err(InfraError::from)?;

    let export = ExportService::new(Arc::new(RealFileSystem));
    let path = resolve_output(&export, settings, output, "style_guide", input, "md");
    let written = export
        .export_style_guide(&guide, &path)
        .map_err(InfraError::from)?;
    output::success(&format!("exported style guide to {}", written.display()));
    Ok(())
}

fn resolve_output(
    export: &ExportService,
    settings: &Settings,
    output: Option<&Path>,
    prefix: &str,
    input: &Path,
    extension: &str,
) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => export.default_path(
            settings.export.directory.as_deref(),
            prefix,
            &topic_stem(input),
            extension,
        ),
    }
}
