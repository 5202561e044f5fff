pub mod args;

pub use args::{ApiFramework, Args, UiFramework};
