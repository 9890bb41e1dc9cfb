//! Line classification for BASIC-family module source
//!
//! Every rule here works on the trimmed line. Attribute detection is a
//! case-sensitive prefix match; Option detection is case-insensitive and
//! requires the trailing space, so a bare `Option` line stays ordinary.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Matches a module name declaration, prefix only (no closing-quote check)
    static ref ATTRIBUTE_NAME: Regex = Regex::new(r#"^Attribute VB_Name = ""#).unwrap();
    // Captures the declared name from a well-formed declaration
    static ref ATTRIBUTE_NAME_FULL: Regex =
        Regex::new(r#"^Attribute VB_Name = "([^"]*)""#).unwrap();
    // Matches Option directives (Option Explicit, Option Base 1, ...)
    static ref OPTION_STATEMENT: Regex = Regex::new(r"(?i)^option ").unwrap();
}

/// Classification of a single source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `Attribute VB_Name = "<name>"` declaration
    AttributeName,
    /// Module-level `Option ...` directive
    Option,
    /// Anything else, including blank lines
    Ordinary,
}

/// Classify a raw source line by its trimmed content.
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();
    if ATTRIBUTE_NAME.is_match(trimmed) {
        LineKind::AttributeName
    } else if OPTION_STATEMENT.is_match(trimmed) {
        LineKind::Option
    } else {
        LineKind::Ordinary
    }
}

/// True if the line declares the enclosing module's name.
pub fn is_attribute_name_line(line: &str) -> bool {
    ATTRIBUTE_NAME.is_match(line.trim())
}

/// True if the line is an Option directive.
pub fn is_option_line(line: &str) -> bool {
    OPTION_STATEMENT.is_match(line.trim())
}

/// Extract the declared module name from an `Attribute VB_Name` line.
///
/// Returns `None` for non-declaration lines and for truncated declarations
/// missing their closing quote.
pub fn module_name(line: &str) -> Option<&str> {
    ATTRIBUTE_NAME_FULL
        .captures(line.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Build the synthesized declaration line for a combined module.
///
/// The name is substituted verbatim; see `CombineConfig::validate` for the
/// opt-in check against embedded quotes.
pub fn attribute_name_line(name: &str) -> String {
    format!("Attribute VB_Name = \"{}\"", name)
}
