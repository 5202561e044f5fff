use clap::{ArgEnum, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "req2test",
    about = "Generate executable tests from stories, Gherkin features and OpenAPI specs",
    version
)]
pub struct Args {
    /// Path to a Markdown stories document
    #[clap(long, value_name = "FILE")]
    pub stories: Option<PathBuf>,

    /// Directory containing raw .feature files
    #[clap(long, value_name = "DIRECTORY")]
    pub features: Option<PathBuf>,

    /// Path to an OpenAPI specification (YAML or JSON)
    #[clap(long, value_name = "FILE")]
    pub openapi: Option<PathBuf>,

    /// Output directory for generated test artifacts
    #[clap(short, long, value_name = "DIRECTORY")]
    pub output_dir: PathBuf,

    /// UI testing framework to generate tests for
    #[clap(long, value_enum, default_value = "playwright")]
    pub ui_framework: UiFramework,

    /// API testing framework to generate tests for
    #[clap(long, value_enum, default_value = "restassured")]
    pub api_framework: ApiFramework,

    /// Base URL baked into generated artifacts as the fallback default
    #[clap(long, value_name = "URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Enable debug-level log output
    #[clap(long)]
    pub verbose: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ArgEnum)]
pub enum UiFramework {
    /// Generate Playwright TypeScript UI tests
    Playwright,
}

impl UiFramework {
    /// Directory segment used in output paths (ui/<dir>/tests)
    pub fn dir_name(&self) -> &'static str {
        match self {
            UiFramework::Playwright => "playwright",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ArgEnum)]
pub enum ApiFramework {
    /// Generate RestAssured JUnit test classes
    Restassured,
    /// Generate Playwright API request tests
    PlaywrightApi,
}

impl ApiFramework {
    /// Directory segment used in output paths (api/<dir>/...)
    pub fn dir_name(&self) -> &'static str {
        match self {
            ApiFramework::Restassured => "restassured",
            ApiFramework::PlaywrightApi => "playwright_api",
        }
    }
}
