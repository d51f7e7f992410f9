//! The API build: discover, build every component concurrently, then write
//! `components/<Name>.json` and `translations/<Name>/<Name>.json`.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use propdocs::{
    ComponentApiBuilder, ComponentApiData, ComponentSource, DocsError, DocumentationPageIndex,
    InheritanceResolver, OutputLayout, StyleExtractor, find_components,
};
use regex::Regex;
use tokio::sync::Semaphore;
use tokio::task::{self, JoinSet};
use tracing::{debug, error, info};

use crate::cli::Cli;
use crate::commands::utils;
use crate::config::PropdocsConfig;
use crate::error::{CliError, Result};
use crate::ui;

/// What to build and where to write it.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub output_directory: PathBuf,
    pub component_directories: Vec<PathBuf>,
    pub grep: Option<Regex>,
}

impl From<&Cli> for BuildRequest {
    fn from(args: &Cli) -> Self {
        Self {
            output_directory: args.output_directory.clone(),
            component_directories: args.component_directories.clone(),
            grep: args.grep.clone(),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Components written, in discovery order.
    pub written: Vec<String>,
    /// Components that opted out of documentation.
    pub skipped: Vec<String>,
    /// Stale translation directories removed.
    pub pruned: Vec<String>,
}

/// Execute the command.
///
/// 1. Load configuration (CLI > Env > File > Defaults)
/// 2. Build every discovered component
/// 3. Print a summary
pub async fn execute(args: Cli) -> Result<()> {
    let start_time = Instant::now();
    let cwd = utils::get_cwd()?;
    let config = PropdocsConfig::load(&args, &cwd)?;

    let summary = build_api(&config, &BuildRequest::from(&args), &cwd).await?;

    ui::success(&format!(
        "Wrote {} API pages in {:.2?}",
        summary.written.len(),
        start_time.elapsed()
    ));
    if !summary.pruned.is_empty() {
        ui::info(&format!(
            "Removed stale translations: {}",
            summary.pruned.join(", ")
        ));
    }
    Ok(())
}

/// Run the whole batch.
///
/// Nothing is written when any component fails: every failure is logged
/// and the run ends with [`CliError::ComponentsFailed`].
pub async fn build_api(
    config: &PropdocsConfig,
    request: &BuildRequest,
    cwd: &Path,
) -> Result<BuildSummary> {
    let layout = OutputLayout::new(utils::resolve_path(&request.output_directory, cwd));
    let directories = utils::resolve_component_dirs(&request.component_directories, cwd)?;

    let mut discovered = Vec::new();
    for directory in &directories {
        discovered.extend(find_components(directory)?);
    }
    let (components, filtered_out) = apply_grep(discovered, request.grep.as_ref());
    if components.is_empty() {
        ui::warning("No components matched");
    }
    debug!(
        components = components.len(),
        filtered = filtered_out.len(),
        "discovered components"
    );

    let pages = DocumentationPageIndex::build(&config.pages_dir(cwd))?;
    info!(pages = pages.len(), "indexed documentation pages");

    utils::clear_dir(&layout.components_dir())?;
    utils::ensure_dir(&layout.translations_dir())?;

    let builder = Arc::new(component_builder(config, cwd, pages));
    let progress = ui::BatchProgress::new(components.len() as u64, ui::is_interactive());
    let outcomes = build_all(&builder, &components, config.parallelism(), &progress).await?;

    let mut failed = 0;
    let mut built = Vec::new();
    let mut skipped = Vec::new();
    for (component, outcome) in components.iter().zip(outcomes) {
        match outcome {
            Ok(Some(data)) => built.push(data),
            Ok(None) => skipped.push(component.name.clone()),
            Err(err) => {
                failed += 1;
                error!(file = %component.path.display(), error = %err, "error building docs");
            }
        }
    }
    if failed > 0 {
        progress.abandon();
        return Err(CliError::ComponentsFailed {
            failed,
            total: components.len(),
        });
    }
    progress.finish(&format!("Built {} components", built.len()));

    let keep: BTreeSet<String> = built
        .iter()
        .map(|data| data.api.name.clone())
        .chain(filtered_out)
        .collect();
    let pruned = layout.prune_stale_translations(&keep)?;

    let mut written = Vec::with_capacity(built.len());
    for data in &built {
        info!(component = %data.api.name, "writing API JSON data");
        layout.write(data)?;
        written.push(data.api.name.clone());
    }

    Ok(BuildSummary {
        written,
        skipped,
        pruned,
    })
}

/// Split discovered components into those matching `grep` and the names of
/// those filtered out.
fn apply_grep(
    discovered: Vec<ComponentSource>,
    grep: Option<&Regex>,
) -> (Vec<ComponentSource>, Vec<String>) {
    let Some(grep) = grep else {
        return (discovered, Vec::new());
    };
    let (matched, filtered): (Vec<_>, Vec<_>) = discovered
        .into_iter()
        .partition(|component| grep.is_match(&component.path.to_string_lossy()));
    (
        matched,
        filtered.into_iter().map(|component| component.name).collect(),
    )
}

fn component_builder(
    config: &PropdocsConfig,
    cwd: &Path,
    pages: DocumentationPageIndex,
) -> ComponentApiBuilder {
    let styles = StyleExtractor::new(config.data_dir(cwd))
        .with_theme(config.theme.clone())
        .with_class_names(config.class_names.clone())
        .with_delegates(config.style_delegates.clone());

    ComponentApiBuilder::new(config.root_dir(cwd), styles, pages)
        .with_inheritance(InheritanceResolver::new(config.api_route.clone()))
}

type Outcome = std::result::Result<Option<ComponentApiData>, DocsError>;

/// Build every component on the blocking pool, at most `max_parallel` at a
/// time, and return the outcomes in input order.
async fn build_all(
    builder: &Arc<ComponentApiBuilder>,
    components: &[ComponentSource],
    max_parallel: usize,
    progress: &ui::BatchProgress,
) -> Result<Vec<Outcome>> {
    let semaphore = Arc::new(Semaphore::new(max_parallel));
    let mut join_set = JoinSet::new();

    for (index, component) in components.iter().enumerate() {
        let builder = Arc::clone(builder);
        let semaphore = Arc::clone(&semaphore);
        let component = component.clone();

        join_set.spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .expect("semaphore closed unexpectedly");
            let outcome = task::spawn_blocking(move || builder.build(&component)).await;
            (index, outcome)
        });
    }

    let mut slots: Vec<Option<Outcome>> = components.iter().map(|_| None).collect();
    let mut panics = Vec::new();
    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((index, Ok(outcome))) => {
                progress.component_done(&components[index].name);
                slots[index] = Some(outcome);
            }
            Ok((index, Err(join_err))) => {
                panics.push(format!("{}: {}", components[index].path.display(), join_err));
            }
            Err(join_err) => panics.push(join_err.to_string()),
        }
    }

    if !panics.is_empty() {
        progress.abandon();
        return Err(CliError::Task(panics.join("; ")));
    }

    Ok(slots
        .into_iter()
        .map(|slot| slot.unwrap_or(Ok(None)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_grep_partitions_by_path() {
        let discovered = vec![
            ComponentSource::new("/repo/src/Badge/Badge.js"),
            ComponentSource::new("/repo/src/Button/Button.js"),
            ComponentSource::new("/repo/src/ButtonBase/ButtonBase.js"),
        ];
        let grep = Regex::new("Button").unwrap();

        let (matched, filtered) = apply_grep(discovered, Some(&grep));
        let names: Vec<_> = matched.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Button", "ButtonBase"]);
        assert_eq!(filtered, vec!["Badge"]);
    }

    #[test]
    fn test_apply_grep_without_pattern() {
        let discovered = vec![ComponentSource::new("/repo/src/Badge/Badge.js")];
        let (matched, filtered) = apply_grep(discovered, None);
        assert_eq!(matched.len(), 1);
        assert!(filtered.is_empty());
    }
}
