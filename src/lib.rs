pub mod cli;
pub mod generator;
pub mod parser;
pub mod utils;

// Re-export frequently used items for easier access
pub use cli::{ApiFramework, UiFramework};
pub use generator::{match_step, sample_for, ActionStatement, TestDescriptor};
pub use parser::{extract_operations, parse_stories, StoryBlock};

use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{error, info};

use generator::emit::{DirectorySink, Emitter};
use generator::templates::BuiltinTemplates;
use generator::{api_tests, test_data, ui_tests};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Extractor error: {0}")]
    ExtractorError(#[from] parser::ExtractorError),

    #[error("Generator error: {0}")]
    GeneratorError(#[from] generator::GeneratorError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Inputs for one generation run. Every requirement source is optional;
/// an absent source simply contributes zero descriptors.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Markdown stories document
    pub stories: Option<PathBuf>,

    /// Directory of raw .feature files
    pub features: Option<PathBuf>,

    /// OpenAPI specification (YAML or JSON)
    pub openapi: Option<PathBuf>,

    /// Root directory for generated artifacts
    pub output_dir: PathBuf,

    pub ui_framework: UiFramework,
    pub api_framework: ApiFramework,

    /// Fallback base URL baked into generated artifacts
    pub base_url: String,
}

/// Outcome of a generation run. Generation is best-effort: a failed source
/// or artifact is recorded here without aborting the rest.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Relative paths of artifacts written under the output directory
    pub written: Vec<PathBuf>,

    /// Artifacts that failed to render or persist
    pub failed_artifacts: usize,

    /// Requirement sources that could not be read or parsed
    pub source_errors: Vec<String>,
}

impl GenerationReport {
    pub fn is_clean(&self) -> bool {
        self.failed_artifacts == 0 && self.source_errors.is_empty()
    }
}

/// Generates test artifacts from the configured requirement sources.
///
/// Each source is processed independently: a malformed OpenAPI document is
/// fatal for that source only and never prevents story or feature
/// processing. Descriptor emission is best-effort per artifact.
pub fn generate_tests(options: &GenerateOptions) -> Result<GenerationReport> {
    let mut descriptors = Vec::new();
    let mut source_errors = Vec::new();

    if let Some(path) = &options.stories {
        match fs::read_to_string(path) {
            Ok(md) => {
                let from_stories = ui_tests::descriptors_from_stories(&md, options.ui_framework);
                info!(count = from_stories.len(), source = %path.display(), "parsed stories");
                descriptors.extend(from_stories);
            }
            Err(err) => {
                error!(source = %path.display(), "failed to read stories: {}", err);
                source_errors.push(format!("stories {}: {}", path.display(), err));
            }
        }
    }

    if let Some(dir) = &options.features {
        match collect_feature_files(dir) {
            Ok(files) => {
                for (stem, content) in files {
                    descriptors.push(ui_tests::descriptor_from_feature(
                        &content,
                        &stem,
                        options.ui_framework,
                    ));
                }
            }
            Err(err) => {
                error!(source = %dir.display(), "failed to read features directory: {}", err);
                source_errors.push(format!("features {}: {}", dir.display(), err));
            }
        }
    }

    if let Some(path) = &options.openapi {
        match parser::openapi::load_spec(path) {
            Ok(spec) => {
                let from_spec = api_tests::descriptors_from_spec(&spec, options.api_framework);
                info!(count = from_spec.len(), source = %path.display(), "extracted operations");
                descriptors.extend(from_spec);
                descriptors.extend(test_data::test_data_descriptors(&spec));
            }
            Err(err) => {
                error!(source = %path.display(), "failed to load OpenAPI spec: {}", err);
                source_errors.push(format!("openapi {}: {}", path.display(), err));
            }
        }
    }

    let renderer = BuiltinTemplates::new(&options.base_url);
    let sink = DirectorySink::new(options.output_dir.clone());
    let summary = Emitter::new(&renderer, &sink).emit_all(&descriptors);

    info!(
        written = summary.written.len(),
        failed = summary.failed,
        "generation finished"
    );

    Ok(GenerationReport {
        written: summary.written,
        failed_artifacts: summary.failed,
        source_errors,
    })
}

// Feature files are read in name order so log output is stable; artifact
// names are pure functions of input text, so ordering never changes results.
fn collect_feature_files(dir: &std::path::Path) -> std::io::Result<Vec<(String, String)>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "feature").unwrap_or(false))
        .collect();
    entries.sort();

    let mut files = Vec::new();
    for path in entries {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("feature")
            .to_string();
        files.push((stem, fs::read_to_string(&path)?));
    }
    Ok(files)
}
