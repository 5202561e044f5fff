// Artifact emission: descriptors are rendered by a template renderer and
// handed to an artifact sink. Both collaborators sit behind traits so the
// engine never inspects template syntax or touches the filesystem directly.
// Emission is best-effort: one failed artifact never aborts the rest.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::generator::descriptor::TestDescriptor;
use crate::utils::write_to_file;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Template error: {0}")]
    TemplateError(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Renders a named template against a structured context.
pub trait TemplateRenderer {
    fn render(&self, template: &str, context: &Value) -> Result<String>;
}

/// Persists rendered artifacts. Implementations guarantee parent-directory
/// creation and full-overwrite semantics.
pub trait ArtifactSink {
    fn write(&self, relative_path: &Path, content: &str) -> Result<()>;
}

/// Sink writing artifacts under a fixed output directory
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new<P: Into<PathBuf>>(root: P) -> DirectorySink {
        DirectorySink { root: root.into() }
    }
}

impl ArtifactSink for DirectorySink {
    fn write(&self, relative_path: &Path, content: &str) -> Result<()> {
        write_to_file(self.root.join(relative_path), content)?;
        Ok(())
    }
}

/// Outcome of one emission pass
#[derive(Debug, Default)]
pub struct EmitSummary {
    /// Relative paths of artifacts successfully written
    pub written: Vec<PathBuf>,

    /// Number of artifacts that failed to render or persist
    pub failed: usize,
}

/// Pairs a renderer with a sink and runs descriptors through both
pub struct Emitter<'a> {
    renderer: &'a dyn TemplateRenderer,
    sink: &'a dyn ArtifactSink,
}

impl<'a> Emitter<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, sink: &'a dyn ArtifactSink) -> Emitter<'a> {
        Emitter { renderer, sink }
    }

    /// Renders and writes every descriptor. Failures are logged per artifact
    /// and counted; remaining descriptors still proceed. No retries.
    pub fn emit_all(&self, descriptors: &[TestDescriptor]) -> EmitSummary {
        let mut summary = EmitSummary::default();
        let mut seen: HashSet<PathBuf> = HashSet::new();

        for descriptor in descriptors {
            if !seen.insert(descriptor.relative_path.clone()) {
                // Names are pure functions of input text, so two sources with
                // colliding slugs end up here. Last write wins.
                warn!(
                    artifact = %descriptor.artifact_name,
                    path = %descriptor.relative_path.display(),
                    "artifact name collision, overwriting earlier output"
                );
            }

            match self.emit_one(descriptor) {
                Ok(()) => {
                    debug!(
                        artifact = %descriptor.artifact_name,
                        path = %descriptor.relative_path.display(),
                        "generated artifact"
                    );
                    summary.written.push(descriptor.relative_path.clone());
                }
                Err(err) => {
                    error!(
                        artifact = %descriptor.artifact_name,
                        template = %descriptor.template,
                        "failed to emit artifact: {}",
                        err
                    );
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    fn emit_one(&self, descriptor: &TestDescriptor) -> Result<()> {
        let content = self.renderer.render(&descriptor.template, &descriptor.context)?;
        self.sink.write(&descriptor.relative_path, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::descriptor::Classification;
    use serde_json::json;
    use std::cell::RefCell;

    struct FakeRenderer;

    impl TemplateRenderer for FakeRenderer {
        fn render(&self, template: &str, _context: &Value) -> Result<String> {
            if template == "broken" {
                Err(GeneratorError::TemplateError("unknown template".into()))
            } else {
                Ok(format!("rendered {}", template))
            }
        }
    }

    struct MemorySink {
        writes: RefCell<Vec<(PathBuf, String)>>,
    }

    impl ArtifactSink for MemorySink {
        fn write(&self, relative_path: &Path, content: &str) -> Result<()> {
            self.writes
                .borrow_mut()
                .push((relative_path.to_path_buf(), content.to_string()));
            Ok(())
        }
    }

    fn descriptor(name: &str, template: &str) -> TestDescriptor {
        TestDescriptor {
            artifact_name: name.to_string(),
            relative_path: format!("out/{}.txt", name).into(),
            template: template.to_string(),
            context: json!({}),
            actions: Vec::new(),
            classification: Classification::from_labels(&[]),
        }
    }

    #[test]
    fn one_failure_does_not_abort_the_rest() {
        let sink = MemorySink { writes: RefCell::new(Vec::new()) };
        let emitter = Emitter::new(&FakeRenderer, &sink);

        let summary = emitter.emit_all(&[
            descriptor("a", "ok"),
            descriptor("b", "broken"),
            descriptor("c", "ok"),
        ]);

        assert_eq!(summary.written.len(), 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(sink.writes.borrow().len(), 2);
    }

    #[test]
    fn colliding_paths_are_last_write_wins() {
        let sink = MemorySink { writes: RefCell::new(Vec::new()) };
        let emitter = Emitter::new(&FakeRenderer, &sink);

        let summary = emitter.emit_all(&[descriptor("same", "ok"), descriptor("same", "ok")]);

        assert_eq!(summary.written.len(), 2);
        assert_eq!(sink.writes.borrow().len(), 2);
    }
}
