// Markdown story document parser. A stories document holds a sequence of
// `### ... Story: <title>` blocks, each carrying an optional `labels:` line
// and a fenced Gherkin body introduced by a `gherkin:` line.

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading keywords that mark a line as a Gherkin step line. Anything else in
/// a Gherkin body is structural noise (blank lines, comments) and is skipped
/// before step matching.
static STEP_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(Feature:|Scenario:|Given |When |Then |And )").unwrap());

/// Kind of a recognized Gherkin line, determined by a case-insensitive
/// leading-keyword match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Feature,
    Scenario,
    Given,
    When,
    Then,
    And,
}

impl StepKind {
    /// Classifies a raw line, returning `None` for non-step lines.
    pub fn detect(line: &str) -> Option<StepKind> {
        let trimmed = line.trim();
        let m = STEP_KEYWORD.find(trimmed)?;
        match m.as_str().trim_end_matches(|c| c == ':' || c == ' ').to_lowercase().as_str() {
            "feature" => Some(StepKind::Feature),
            "scenario" => Some(StepKind::Scenario),
            "given" => Some(StepKind::Given),
            "when" => Some(StepKind::When),
            "then" => Some(StepKind::Then),
            "and" => Some(StepKind::And),
            _ => None,
        }
    }
}

/// One user story extracted from a Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryBlock {
    /// Title text captured from the `### ... Story:` heading
    pub title: String,

    /// Labels from the `labels:` line, comma-split, trimmed, leading '@' stripped
    pub labels: Vec<String>,

    /// The raw Gherkin body captured from the fenced block, newlines preserved
    pub gherkin: String,
}

impl StoryBlock {
    fn new() -> Self {
        StoryBlock {
            title: String::new(),
            labels: Vec::new(),
            gherkin: String::new(),
        }
    }

    /// Step lines of the body, in order, with structural noise filtered out.
    pub fn step_lines(&self) -> Vec<&str> {
        self.gherkin
            .lines()
            .map(str::trim)
            .filter(|l| StepKind::detect(l).is_some())
            .collect()
    }
}

/// Splits a Markdown stories document into discrete story blocks.
///
/// A `### ... Story: <title>` heading flushes the current accumulator (only
/// if it captured a non-empty Gherkin body) and starts a new block. A
/// `labels:` line (case-insensitive prefix) sets the label list. A `gherkin:`
/// line opens capture mode; the fenced code block that follows toggles it
/// back off — the opening fence marker is skipped, the closing one ends the
/// capture. Lines seen while capturing are appended verbatim. End of input
/// flushes any pending non-empty block. Stories that never receive a Gherkin
/// body are dropped — label metadata alone does not justify a generated
/// artifact.
pub fn parse_stories(md: &str) -> Vec<StoryBlock> {
    let mut blocks = Vec::new();
    let mut cur = StoryBlock::new();
    let mut capturing = false;
    let mut in_fence = false;

    for line in md.lines() {
        let trimmed = line.trim();

        if line.starts_with("### ") && line.contains("Story:") {
            if !cur.gherkin.is_empty() {
                blocks.push(std::mem::replace(&mut cur, StoryBlock::new()));
            } else {
                cur = StoryBlock::new();
            }
            if let Some((_, title)) = line.split_once("Story:") {
                cur.title = title.trim().to_string();
            }
            capturing = false;
            in_fence = false;
        } else if trimmed.to_lowercase().starts_with("labels:") {
            if let Some((_, rest)) = trimmed.split_once(':') {
                cur.labels = rest
                    .split(',')
                    .map(|t| t.trim().trim_start_matches('@').to_string())
                    .collect();
            }
        } else if trimmed.to_lowercase().starts_with("gherkin:") {
            capturing = true;
            in_fence = false;
            cur.gherkin.clear();
        } else if trimmed.starts_with("```") && capturing {
            if in_fence {
                capturing = false;
            } else {
                in_fence = true;
            }
        } else if capturing {
            cur.gherkin.push_str(line);
            cur.gherkin.push('\n');
        }
    }

    if !cur.gherkin.is_empty() {
        blocks.push(cur);
    }

    blocks
}
