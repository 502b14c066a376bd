//! Translation marker patterns per source file type.
//!
//! Each file type has one canonical [`FileTypeRule`]. Scanning state never lives
//! on the rule: [`token_regex`] hands out a new [`Matcher`] with its own cursor
//! on every call, so unrelated scans cannot disturb each other.

use std::{fmt, ops::Range, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, TranslateError};

/// `gettext('...')` or `gettext("...")`, whitespace tolerated inside the parens.
/// Group 1 holds a double-quoted literal, group 2 a single-quoted one.
const JAVASCRIPT_PATTERN: &str = r#"gettext\(\s*(?:"([^"]+)"|'([^']+)')\s*\)\s*"#;

static JAVASCRIPT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(JAVASCRIPT_PATTERN).unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Javascript,
    /// Declared so configs can name it; no marker pattern exists yet.
    Handlebars,
}

impl FileType {
    pub fn name(self) -> &'static str {
        match self {
            FileType::Javascript => "javascript",
            FileType::Handlebars => "handlebars",
        }
    }

    /// Guesses the file type from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "js" | "mjs" | "cjs" => Some(FileType::Javascript),
            "hbs" | "handlebars" => Some(FileType::Handlebars),
            _ => None,
        }
    }

    /// The marker rule registered for this type, if any.
    pub fn rule(self) -> Option<&'static FileTypeRule> {
        static JAVASCRIPT: LazyLock<FileTypeRule> = LazyLock::new(|| FileTypeRule {
            pattern: &*JAVASCRIPT_REGEX,
            bookend: "'",
        });

        match self {
            FileType::Javascript => Some(&*JAVASCRIPT),
            FileType::Handlebars => None,
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FileType {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(FileType::Javascript),
            "handlebars" | "hbs" => Ok(FileType::Handlebars),
            _ => Err(TranslateError::UnsupportedFileType {
                file_type: s.to_string(),
            }),
        }
    }
}

/// Canonical marker definition for a file type.
#[derive(Debug)]
pub struct FileTypeRule {
    pattern: &'static Regex,
    /// Reinserted around each translation to restore the quoting the pattern consumed.
    pub bookend: &'static str,
}

impl FileTypeRule {
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn matcher(&self) -> Matcher {
        Matcher {
            regex: self.pattern.clone(),
            last_index: 0,
        }
    }
}

/// One marker occurrence found by a [`Matcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatch<'t> {
    /// The whole matched text, e.g. `gettext('Hello')`.
    pub span: &'t str,
    /// The quoted literal, without quotes. Empty when the pattern captured nothing.
    pub literal: &'t str,
    pub range: Range<usize>,
}

/// A scanning cursor over one marker pattern.
///
/// Behaves like a global regex: every [`Matcher::next_match`] call resumes
/// after the previous match and the cursor rewinds once no match is left.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
    last_index: usize,
}

impl Matcher {
    pub fn next_match<'t>(&mut self, text: &'t str) -> Option<MarkerMatch<'t>> {
        let found = (self.last_index <= text.len())
            .then(|| self.regex.captures_at(text, self.last_index))
            .flatten();

        let Some(caps) = found else {
            self.last_index = 0;
            return None;
        };

        let whole = caps.get(0)?;
        self.last_index = if whole.is_empty() {
            whole.end() + text[whole.end()..].chars().next().map_or(1, char::len_utf8)
        } else {
            whole.end()
        };

        let literal = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map_or("", |m| m.as_str());

        Some(MarkerMatch {
            span: whole.as_str(),
            literal,
            range: whole.range(),
        })
    }

    /// Byte offset where the next scan starts.
    pub fn position(&self) -> usize {
        self.last_index
    }

    pub fn reset(&mut self) {
        self.last_index = 0;
    }
}

/// Returns a fresh matcher for `file_type`.
pub fn token_regex(file_type: FileType) -> Result<Matcher> {
    file_type
        .rule()
        .map(FileTypeRule::matcher)
        .ok_or_else(|| TranslateError::UnsupportedFileType {
            file_type: file_type.to_string(),
        })
}

/// Bookend for `file_type`, empty when the type has no rule.
pub fn bookend(file_type: FileType) -> &'static str {
    file_type.rule().map_or("", |rule| rule.bookend)
}
