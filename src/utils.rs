pub mod helpers;

pub use helpers::{ensure_directory_exists, relative_to_cwd, slug, snake_to_camel, write_to_file};
