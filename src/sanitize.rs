//! CSS declaration sanitization for safe HTML embedding.
//!
//! Validates a single `"property: value"` declaration against an
//! allow-list posture: the property name must be a plain CSS identifier
//! and the value must tokenize without any of the constructs that smuggle
//! active content into a style attribute (`url()`, `expression()`,
//! at-keywords, extra declarations). Accepted declarations come back
//! HTML-escaped; rejected ones come back as the empty string — rejection
//! is not an error.

use cssparser::{ParseError, Parser, ParserInput, Token};

use crate::util::escape_html;

/// Sanitize one CSS declaration for embedding in an HTML `style` attribute.
///
/// Returns the escaped declaration text, or `""` if the declaration is
/// rejected.
///
/// # Examples
///
/// ```
/// use blockstyle::sanitize_css_declaration;
///
/// assert_eq!(sanitize_css_declaration("margin: 1em"), "margin: 1em");
/// assert_eq!(sanitize_css_declaration("background: url(evil)"), "");
/// ```
pub fn sanitize_css_declaration(declaration: &str) -> String {
    let Some((property, value)) = declaration.split_once(':') else {
        return String::new();
    };
    let property = property.trim();
    let value = value.trim();

    if property.is_empty() || value.is_empty() {
        return String::new();
    }
    if value.chars().any(char::is_control) {
        return String::new();
    }
    if !is_valid_property_name(property) {
        return String::new();
    }
    if !is_safe_value(value) {
        return String::new();
    }

    escape_html(&format!("{property}: {value}")).into_owned()
}

/// CSS property names: ASCII letters, digits, and hyphens, not starting
/// with a digit. Covers custom properties (`--x`) as well.
fn is_valid_property_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'-' => {}
        _ => return false,
    }
    name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

fn is_safe_value(value: &str) -> bool {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    value_tokens_are_safe(&mut parser)
}

/// Walk every token in the value, recursing into nested blocks.
fn value_tokens_are_safe(parser: &mut Parser<'_, '_>) -> bool {
    loop {
        let token = match parser.next() {
            Ok(token) => token.clone(),
            // End of input: everything seen so far was safe
            Err(_) => return true,
        };
        match token {
            Token::Function(ref name) => {
                if !is_allowed_function(name.as_ref()) {
                    return false;
                }
                let nested_ok = parser
                    .parse_nested_block(
                        |nested: &mut Parser<'_, '_>| -> Result<bool, ParseError<'_, ()>> {
                            Ok(value_tokens_are_safe(nested))
                        },
                    )
                    .unwrap_or(false);
                if !nested_ok {
                    return false;
                }
            }
            Token::ParenthesisBlock | Token::SquareBracketBlock => {
                let nested_ok = parser
                    .parse_nested_block(
                        |nested: &mut Parser<'_, '_>| -> Result<bool, ParseError<'_, ()>> {
                            Ok(value_tokens_are_safe(nested))
                        },
                    )
                    .unwrap_or(false);
                if !nested_ok {
                    return false;
                }
            }
            // Anything URL-shaped, malformed, or declaration-smuggling
            Token::UnquotedUrl(_) | Token::BadUrl(_) | Token::BadString(_) => return false,
            Token::CurlyBracketBlock | Token::Semicolon => return false,
            Token::AtKeyword(_) => return false,
            _ => {}
        }
    }
}

/// Functions allowed inside declaration values.
fn is_allowed_function(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "calc"
            | "clamp"
            | "min"
            | "max"
            | "var"
            | "env"
            | "rgb"
            | "rgba"
            | "hsl"
            | "hsla"
            | "hwb"
            | "linear-gradient"
            | "radial-gradient"
            | "conic-gradient"
            | "repeating-linear-gradient"
            | "repeating-radial-gradient"
    )
}

// ============================================================================
// Tests
// ============================================================================
