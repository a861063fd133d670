//! Inline style rendering and the top-level `generate` entry point.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lookup::is_empty_value;
use crate::resolve::{Ruleset, resolve_rules};
use crate::sanitize::sanitize_css_declaration;
use crate::schema::schema;

/// Options accepted by [`generate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    /// When true, render the resolved ruleset as an inline style string;
    /// when false, `generate` returns the empty string (callers needing
    /// the raw ruleset use [`resolve_rules`] directly).
    pub inline: bool,
}

/// Render a ruleset as a single inline-style string.
///
/// Each declaration passes through [`sanitize_css_declaration`]; rejected
/// declarations are dropped without affecting their siblings. Partial
/// success is expected and not an error.
///
/// # Examples
///
/// ```
/// use blockstyle::{Ruleset, format_inline};
///
/// let mut ruleset = Ruleset::new();
/// ruleset.insert("margin", "1em");
/// ruleset.insert("font-size", "2em");
/// assert_eq!(format_inline(&ruleset), "margin: 1em; font-size: 2em;");
/// ```
pub fn format_inline(ruleset: &Ruleset) -> String {
    let mut out = String::new();
    for (property, value) in ruleset.iter() {
        let safe = sanitize_css_declaration(&format!("{property}: {value}"));
        if safe.is_empty() {
            continue;
        }
        out.push_str(&safe);
        out.push_str("; ");
    }
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}

/// Resolve an attribute tree and render it per `options`.
///
/// Returns the inline style string when `options.inline` is set, the
/// empty string otherwise. Missing or malformed paths never raise; an
/// empty tree short-circuits to `""`.
pub fn generate(tree: &Value, options: &StyleOptions) -> String {
    if is_empty_value(tree) {
        return String::new();
    }
    let ruleset = resolve_rules(schema(), tree);
    if options.inline {
        format_inline(&ruleset)
    } else {
        String::new()
    }
}
