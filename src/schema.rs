//! The style schema: a declarative table driving rule and classname
//! resolution.
//!
//! Each [`StyleDefinition`] names one recognized style attribute, the path
//! to its value inside the attribute tree, the CSS property it maps to,
//! and optionally a classname template. Expansion behavior is a tagged
//! strategy ([`Expand`]) resolved through a small handler registry rather
//! than a callable embedded in the table, so a misconfigured entry fails
//! at construction time instead of per call.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::resolve::expander;

// ============================================================================
// Definitions
// ============================================================================

/// Value-expansion strategy for a style definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expand {
    /// Shape-driven expansion: a scalar value emits a single
    /// `property_key -> value` rule; a flat mapping emits one
    /// `{property_key}-{subkey}` rule per entry.
    Default,
    /// Named handler resolved through the expander registry. Unknown ids
    /// are rejected by [`StyleSchema::build`].
    Custom(&'static str),
}

/// One schema entry mapping an attribute path to a CSS property and an
/// optional classname rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDefinition {
    /// Attribute name as it appears in the input tree, e.g. `fontSize`.
    pub name: &'static str,
    /// CSS property the attribute maps to, e.g. `font-size`.
    pub property_key: &'static str,
    /// Ordered keys locating the value inside the attribute tree.
    pub path: &'static [&'static str],
    /// Classname template with a single `%s` placeholder, for attributes
    /// that derive a utility classname.
    pub classname_template: Option<&'static str>,
    /// How the resolved value expands into rules.
    pub expand: Expand,
}

/// A named, ordered group of style definitions.
#[derive(Debug, Clone)]
pub struct StyleCategory {
    pub name: &'static str,
    pub definitions: Vec<StyleDefinition>,
}

// ============================================================================
// Schema
// ============================================================================

/// An ordered collection of style categories.
///
/// Iteration order is significant: it fixes classname concatenation order
/// and rule-merge order. The schema is immutable once built and can be
/// shared across threads freely.
#[derive(Debug, Clone)]
pub struct StyleSchema {
    categories: Vec<StyleCategory>,
}

impl StyleSchema {
    /// Validate a category table and build a schema from it.
    ///
    /// Fails fast on misconfigured entries: empty paths, empty property
    /// keys, classname templates without exactly one `%s`, unknown custom
    /// expander ids, and duplicate attribute names within a category.
    pub fn build(categories: Vec<StyleCategory>) -> Result<Self> {
        for category in &categories {
            let mut seen = HashSet::new();
            for definition in &category.definitions {
                validate_definition(definition)?;
                if !seen.insert(definition.name) {
                    return Err(Error::DuplicateDefinition(
                        category.name.to_string(),
                        definition.name.to_string(),
                    ));
                }
            }
        }
        Ok(Self { categories })
    }

    /// The category table, in declaration order.
    pub fn categories(&self) -> &[StyleCategory] {
        &self.categories
    }

    /// All definitions in schema order, category groups flattened.
    pub fn definitions(&self) -> impl Iterator<Item = &StyleDefinition> {
        self.categories
            .iter()
            .flat_map(|category| category.definitions.iter())
    }

    /// Total number of definitions.
    pub fn len(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.definitions.len())
            .sum()
    }

    /// Check whether the schema has no definitions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validate_definition(definition: &StyleDefinition) -> Result<()> {
    if definition.path.is_empty() {
        return Err(Error::EmptyPath(definition.name.to_string()));
    }
    if definition.property_key.is_empty() {
        return Err(Error::EmptyPropertyKey(definition.name.to_string()));
    }
    if let Some(template) = definition.classname_template
        && template.matches("%s").count() != 1
    {
        return Err(Error::InvalidTemplate(
            definition.name.to_string(),
            template.to_string(),
        ));
    }
    if let Expand::Custom(id) = definition.expand
        && expander(id).is_none()
    {
        return Err(Error::UnknownExpander(
            definition.name.to_string(),
            id.to_string(),
        ));
    }
    Ok(())
}

// ============================================================================
// Builtin Schema
// ============================================================================

/// The builtin style schema, validated once on first access.
///
/// Shared by reference; [`crate::generate`] and callers that do not build
/// their own table resolve against this one.
pub fn schema() -> &'static StyleSchema {
    static SCHEMA: LazyLock<StyleSchema> = LazyLock::new(|| {
        StyleSchema::build(builtin_categories()).expect("builtin style schema is valid")
    });
    &SCHEMA
}

fn builtin_categories() -> Vec<StyleCategory> {
    vec![
        StyleCategory {
            name: "spacing",
            definitions: vec![
                StyleDefinition {
                    name: "margin",
                    property_key: "margin",
                    path: &["spacing", "margin"],
                    classname_template: None,
                    expand: Expand::Default,
                },
                StyleDefinition {
                    name: "padding",
                    property_key: "padding",
                    path: &["spacing", "padding"],
                    classname_template: None,
                    expand: Expand::Default,
                },
            ],
        },
        StyleCategory {
            name: "typography",
            definitions: vec![
                StyleDefinition {
                    name: "fontSize",
                    property_key: "font-size",
                    path: &["typography", "fontSize"],
                    classname_template: Some("has-%s-font-size"),
                    expand: Expand::Default,
                },
                StyleDefinition {
                    name: "fontFamily",
                    property_key: "font-family",
                    path: &["typography", "fontFamily"],
                    classname_template: Some("has-%s-font-family"),
                    expand: Expand::Default,
                },
                StyleDefinition {
                    name: "fontStyle",
                    property_key: "font-style",
                    path: &["typography", "fontStyle"],
                    classname_template: None,
                    expand: Expand::Default,
                },
                StyleDefinition {
                    name: "fontWeight",
                    property_key: "font-weight",
                    path: &["typography", "fontWeight"],
                    classname_template: None,
                    expand: Expand::Default,
                },
                StyleDefinition {
                    name: "letterSpacing",
                    property_key: "letter-spacing",
                    path: &["typography", "letterSpacing"],
                    classname_template: None,
                    expand: Expand::Default,
                },
                StyleDefinition {
                    name: "lineHeight",
                    property_key: "line-height",
                    path: &["typography", "lineHeight"],
                    classname_template: None,
                    expand: Expand::Default,
                },
                StyleDefinition {
                    name: "textDecoration",
                    property_key: "text-decoration",
                    path: &["typography", "textDecoration"],
                    classname_template: None,
                    expand: Expand::Default,
                },
                StyleDefinition {
                    name: "textTransform",
                    property_key: "text-transform",
                    path: &["typography", "textTransform"],
                    classname_template: None,
                    expand: Expand::Default,
                },
            ],
        },
        StyleCategory {
            name: "color",
            definitions: vec![
                StyleDefinition {
                    name: "text",
                    property_key: "color",
                    path: &["color", "text"],
                    classname_template: Some("has-%s-color"),
                    expand: Expand::Default,
                },
                StyleDefinition {
                    name: "background",
                    property_key: "background-color",
                    path: &["color", "background"],
                    classname_template: Some("has-%s-background-color"),
                    expand: Expand::Default,
                },
                StyleDefinition {
                    name: "gradient",
                    property_key: "background",
                    path: &["color", "gradient"],
                    classname_template: Some("has-%s-gradient-background"),
                    expand: Expand::Default,
                },
            ],
        },
        StyleCategory {
            name: "border",
            definitions: vec![
                StyleDefinition {
                    name: "radius",
                    property_key: "border-radius",
                    path: &["border", "radius"],
                    classname_template: None,
                    expand: Expand::Custom("border-radius"),
                },
                StyleDefinition {
                    name: "width",
                    property_key: "border-width",
                    path: &["border", "width"],
                    classname_template: None,
                    expand: Expand::Default,
                },
                StyleDefinition {
                    name: "style",
                    property_key: "border-style",
                    path: &["border", "style"],
                    classname_template: None,
                    expand: Expand::Default,
                },
                StyleDefinition {
                    name: "color",
                    property_key: "border-color",
                    path: &["border", "color"],
                    classname_template: None,
                    expand: Expand::Default,
                },
            ],
        },
    ]
}

// ============================================================================
// Tests
// ============================================================================
