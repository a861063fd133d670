//! Rule and classname resolution.
//!
//! Both resolvers walk the schema in declaration order, look up each
//! definition's value by path, and skip anything missing or empty. They
//! are total functions: for any input they return a (possibly empty)
//! result, never an error.

use serde_json::Value;

use crate::lookup::{is_empty_value, lookup, scalar_to_string};
use crate::schema::{Expand, StyleSchema};
use crate::util::to_kebab_case;

// ============================================================================
// Ruleset
// ============================================================================

/// An ordered mapping from CSS property name to value.
///
/// Insertion order follows schema traversal order. Re-inserting an
/// existing property overwrites its value in place, keeping the
/// property's original position so output stays deterministic under
/// last-write-wins merging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ruleset {
    rules: Vec<(String, String)>,
}

impl Ruleset {
    /// Create an empty ruleset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, overwriting any existing value for the property.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.rules.iter_mut().find(|(p, _)| *p == property) {
            Some(rule) => rule.1 = value,
            None => self.rules.push((property, value)),
        }
    }

    /// Get the value for a property, if present.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate `(property, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether the ruleset holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Merge another ruleset into this one, last write wins.
    pub fn merge(&mut self, other: Ruleset) {
        for (property, value) in other.rules {
            self.insert(property, value);
        }
    }
}

// ============================================================================
// Rule Resolution
// ============================================================================

/// Resolve an attribute tree into a merged CSS ruleset.
///
/// Missing paths and empty values contribute nothing; the result is an
/// empty ruleset (never an error) when no definition matches.
///
/// # Examples
///
/// ```
/// use blockstyle::{resolve_rules, schema};
/// use serde_json::json;
///
/// let tree = json!({ "spacing": { "padding": { "top": "10px", "left": "5px" } } });
/// let rules = resolve_rules(schema(), &tree);
/// assert_eq!(rules.get("padding-top"), Some("10px"));
/// assert_eq!(rules.get("padding-left"), Some("5px"));
/// ```
pub fn resolve_rules(schema: &StyleSchema, tree: &Value) -> Ruleset {
    let mut ruleset = Ruleset::new();
    for definition in schema.definitions() {
        let Some(value) = lookup(tree, definition.path) else {
            continue;
        };
        if is_empty_value(value) {
            continue;
        }
        let fragment = match definition.expand {
            Expand::Default => expand_default(value, definition.property_key),
            Expand::Custom(id) => {
                // Validated at schema construction; a miss here means the
                // schema bypassed `build()`, so skip rather than panic.
                let Some(handler) = expander(id) else {
                    continue;
                };
                handler(value, definition.property_key)
            }
        };
        ruleset.merge(fragment);
    }
    ruleset
}

/// Shape-driven expansion: box-model mappings become one longhand per
/// subkey, scalars become a single rule.
fn expand_default(value: &Value, property_key: &str) -> Ruleset {
    let mut fragment = Ruleset::new();
    match value {
        Value::Object(map) => {
            for (subkey, subvalue) in map {
                if is_empty_value(subvalue) {
                    continue;
                }
                if let Some(text) = scalar_to_string(subvalue) {
                    fragment.insert(format!("{property_key}-{}", to_kebab_case(subkey)), text);
                }
            }
        }
        _ => {
            if let Some(text) = scalar_to_string(value) {
                fragment.insert(property_key, text);
            }
        }
    }
    fragment
}

// ============================================================================
// Expander Registry
// ============================================================================

/// Signature of a registered value expander.
pub(crate) type ExpandFn = fn(&Value, &str) -> Ruleset;

/// Look up a custom expansion handler by id.
pub(crate) fn expander(id: &str) -> Option<ExpandFn> {
    match id {
        "border-radius" => Some(expand_border_radius),
        _ => None,
    }
}

/// Border radius deviates from `{property}-{subkey}` naming: per-corner
/// values map onto the `border-*-radius` longhands.
fn expand_border_radius(value: &Value, property_key: &str) -> Ruleset {
    let mut fragment = Ruleset::new();
    match value {
        Value::Object(map) => {
            for (corner, subvalue) in map {
                if is_empty_value(subvalue) {
                    continue;
                }
                let Some(text) = scalar_to_string(subvalue) else {
                    continue;
                };
                let longhand = match corner.as_str() {
                    "topLeft" => "border-top-left-radius",
                    "topRight" => "border-top-right-radius",
                    "bottomLeft" => "border-bottom-left-radius",
                    "bottomRight" => "border-bottom-right-radius",
                    _ => continue,
                };
                fragment.insert(longhand, text);
            }
        }
        _ => {
            if let Some(text) = scalar_to_string(value) {
                fragment.insert(property_key, text);
            }
        }
    }
    fragment
}

// ============================================================================
// Classname Resolution
// ============================================================================

/// Resolve an attribute tree into an ordered list of utility classnames.
///
/// Only definitions declaring a classname template contribute; the
/// resolved scalar is kebab-cased and substituted for the template's
/// `%s` placeholder. Duplicates are preserved. Box-model values produce
/// no classname.
///
/// # Examples
///
/// ```
/// use blockstyle::{resolve_classnames, schema};
/// use serde_json::json;
///
/// let tree = json!({ "typography": { "fontSize": "2em" } });
/// assert_eq!(resolve_classnames(schema(), &tree), vec!["has-2em-font-size"]);
/// ```
pub fn resolve_classnames(schema: &StyleSchema, tree: &Value) -> Vec<String> {
    let mut classnames = Vec::new();
    for definition in schema.definitions() {
        let Some(template) = definition.classname_template else {
            continue;
        };
        let Some(value) = lookup(tree, definition.path) else {
            continue;
        };
        if is_empty_value(value) {
            continue;
        }
        let Some(text) = scalar_to_string(value) else {
            continue;
        };
        let slug = to_kebab_case(&text);
        if slug.is_empty() {
            continue;
        }
        classnames.push(template.replacen("%s", &slug, 1));
    }
    classnames
}

// ============================================================================
// Tests
// ============================================================================
