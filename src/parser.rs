// Parsers for the three requirement sources: Markdown story documents,
// raw Gherkin feature files and OpenAPI specifications.

pub mod feature;
pub mod openapi;
pub mod stories;

pub use feature::feature_name;
pub use openapi::{
    extract_operations, load_spec, ApiOperation, ExtractorError, HttpMethod, ParamDescriptor,
};
pub use stories::{parse_stories, StepKind, StoryBlock};
