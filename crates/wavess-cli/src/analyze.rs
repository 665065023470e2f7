//! `analyze` command handler.
//!
//! Resolves the dataset location and tunables from config plus CLI overrides,
//! loads the three tables, runs the analysis, and prints the report.

use std::path::{Path, PathBuf};

use anyhow::Context;
use wavess_analysis::{AnalysisOptions, Lexicon};
use wavess_core::{AppConfig, DatasetPaths, MAX_HISTOGRAM_BINS};

use crate::report::render_markdown;
use crate::OutputFormat;

/// CLI flags that take precedence over [`AppConfig`] values.
#[derive(Debug, Default)]
pub(crate) struct AnalyzeOverrides {
    pub data_dir: Option<PathBuf>,
    pub top_keywords: Option<usize>,
    pub histogram_bins: Option<usize>,
    pub lexicon_path: Option<PathBuf>,
}

/// Fully resolved inputs of one `analyze` run.
#[derive(Debug)]
pub(crate) struct AnalyzeSettings {
    pub data_dir: PathBuf,
    pub paths: DatasetPaths,
    pub options: AnalysisOptions,
    pub lexicon_path: Option<PathBuf>,
}

/// Merge CLI overrides over config values.
///
/// # Errors
///
/// Returns an error if `--top` is zero or `--bins` exceeds [`MAX_HISTOGRAM_BINS`].
pub(crate) fn resolve_settings(
    config: &AppConfig,
    overrides: AnalyzeOverrides,
) -> anyhow::Result<AnalyzeSettings> {
    let top_keywords = overrides.top_keywords.unwrap_or(config.top_keywords);
    if top_keywords == 0 {
        anyhow::bail!("--top must be at least 1");
    }
    let histogram_bins = overrides.histogram_bins.unwrap_or(config.histogram_bins);
    if histogram_bins > MAX_HISTOGRAM_BINS {
        anyhow::bail!("--bins must be at most {MAX_HISTOGRAM_BINS}");
    }

    let mut config = config.clone();
    if let Some(dir) = overrides.data_dir {
        config.data_dir = dir;
    }

    Ok(AnalyzeSettings {
        paths: config.dataset_paths(),
        data_dir: config.data_dir,
        options: AnalysisOptions {
            top_keywords,
            histogram_bins,
        },
        lexicon_path: overrides.lexicon_path.or(config.lexicon_path),
    })
}

/// Load the built-in lexicon, extended by the YAML overlay at `path` if given.
///
/// # Errors
///
/// Returns an error if the overlay cannot be read or is invalid.
pub(crate) fn load_lexicon(path: Option<&Path>) -> anyhow::Result<Lexicon> {
    let Some(path) = path else {
        return Ok(Lexicon::default());
    };
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read lexicon overlay {}", path.display()))?;
    let lexicon = Lexicon::from_yaml_str(&yaml)
        .with_context(|| format!("invalid lexicon overlay {}", path.display()))?;
    tracing::info!(path = %path.display(), words = lexicon.len(), "lexicon overlay loaded");
    Ok(lexicon)
}

/// Run the `analyze` command.
///
/// # Errors
///
/// Returns an error if any data file is missing or malformed, the lexicon
/// overlay is invalid, or a required table is empty.
pub(crate) fn run_analyze(
    config: &AppConfig,
    overrides: AnalyzeOverrides,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let settings = resolve_settings(config, overrides)?;

    let missing = settings.paths.missing();
    if !missing.is_empty() {
        let names: Vec<String> = missing.iter().map(|p| p.display().to_string()).collect();
        anyhow::bail!(
            "data files missing; ensure {} contains all CSV files (missing: {})",
            settings.data_dir.display(),
            names.join(", ")
        );
    }

    let lexicon = load_lexicon(settings.lexicon_path.as_deref())?;
    let dataset = wavess_core::load_dataset(&settings.paths)?;
    let report = wavess_analysis::analyze(&dataset, &lexicon, &settings.options)?;

    match format {
        OutputFormat::Markdown => {
            print!("{}", render_markdown(&report, chrono::Utc::now())?);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
