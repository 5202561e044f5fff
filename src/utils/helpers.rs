// Helper functions shared across the parsers and generators: identifier
// normalization, casing and filesystem plumbing.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9_]+").unwrap());

/// Normalizes arbitrary text into a filesystem/identifier-safe token.
///
/// Lower-cases the input, collapses every maximal run of characters outside
/// `[a-z0-9_]` into a single `_` and strips leading/trailing underscores.
/// Idempotent: `slug(slug(x)) == slug(x)`. Empty or all-punctuation input
/// yields an empty string; callers fall back to a default name in that case.
pub fn slug(text: &str) -> String {
    NON_SLUG_RUN
        .replace_all(&text.to_lowercase(), "_")
        .trim_matches('_')
        .to_string()
}

/// Converts snake_case to CamelCase (used for generated Java class names)
pub fn snake_to_camel(snake: &str) -> String {
    let mut camel = String::new();
    let mut capitalize_next = true;

    for c in snake.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            camel.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            camel.push(c);
        }
    }

    camel
}

/// Creates a directory if it doesn't exist
pub fn ensure_directory_exists<P: AsRef<Path>>(path: P) -> io::Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Writes content to a file, creating parent directories if needed.
/// An existing file is fully overwritten.
pub fn write_to_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, content: C) -> io::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        ensure_directory_exists(parent)?;
    }

    let mut file = File::create(path)?;
    file.write_all(content.as_ref())?;
    Ok(())
}

/// Renders a path relative to the current working directory for log output,
/// falling back to the path itself when no relative form exists.
pub fn relative_to_cwd<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    std::env::current_dir()
        .ok()
        .and_then(|cwd| pathdiff::diff_paths(path, cwd))
        .unwrap_or_else(|| path.to_path_buf())
}
