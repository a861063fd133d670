//! # blockstyle
//!
//! Schema-driven generation of CSS rulesets and utility classnames from
//! nested style attribute trees.
//!
//! ## Features
//!
//! - Resolve a nested attribute tree into an ordered CSS ruleset
//! - Derive utility classnames from templated schema entries
//! - Render rulesets as sanitized, HTML-escaped inline style strings
//! - Box-model values (`{top, right, bottom, left}`) expand into longhands
//! - Driven by an immutable, validated schema shared across threads
//!
//! ## Quick Start
//!
//! ```
//! use blockstyle::{StyleOptions, generate, resolve_classnames, resolve_rules, schema};
//! use serde_json::json;
//!
//! let attributes = json!({
//!     "spacing": { "margin": "1em" },
//!     "typography": { "fontSize": "2em" },
//! });
//!
//! let rules = resolve_rules(schema(), &attributes);
//! assert_eq!(rules.get("font-size"), Some("2em"));
//!
//! let classnames = resolve_classnames(schema(), &attributes);
//! assert_eq!(classnames.join(" "), "has-2em-font-size");
//!
//! let inline = generate(&attributes, &StyleOptions { inline: true });
//! assert_eq!(inline, "margin: 1em; font-size: 2em;");
//! ```
//!
//! ## Resolution Model
//!
//! The schema is an ordered table of style definitions grouped by
//! category (spacing, typography, color, border). Each definition names a
//! path into the attribute tree, the CSS property it maps to, and
//! optionally a classname template. Missing paths and empty values
//! contribute nothing — resolution is total and never errors. The only
//! failure mode is a misconfigured schema, caught by
//! [`StyleSchema::build`] before any resolution happens.

pub mod error;
pub mod inline;
pub mod lookup;
pub mod resolve;
pub mod sanitize;
pub mod schema;
pub mod util;

pub use error::{Error, Result};
pub use inline::{StyleOptions, format_inline, generate};
pub use lookup::{is_empty_value, lookup};
pub use resolve::{Ruleset, resolve_classnames, resolve_rules};
pub use sanitize::sanitize_css_declaration;
pub use schema::{Expand, StyleCategory, StyleDefinition, StyleSchema, schema};
pub use util::to_kebab_case;
