// Generation: descriptors are built from parsed requirement sources, then
// rendered and persisted through the emission boundary.

pub mod descriptor;
pub mod emit;
pub mod steps;
pub mod templates;
pub mod test_data;
pub mod ui_tests;

pub use descriptor::{resolve_layer, resolve_test_type, Classification, TestDescriptor};
pub use emit::{ArtifactSink, DirectorySink, EmitSummary, Emitter, GeneratorError, TemplateRenderer};
pub use steps::{match_step, ActionStatement};
pub use templates::BuiltinTemplates;
pub use test_data::sample_for;
