//! Naming convention utilities for code generation.
//!
//! Schema identifiers are snake_case (functions), SCREAMING_SNAKE_CASE (enum
//! variants) or already PascalCase (enum names). Hybroid expects PascalCase
//! for exported symbols and camelCase for parameters.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `snake_case` | [`to_camel_case`] | `snakeCase` |
//! | `snake_case` | [`to_pascal_case`] | `SnakeCase` |
//! | `SCREAMING_CASE` | [`to_title_case`] | `ScreamingCase` |
//! | `entity_get_x` | [`to_host_case`] | `GetEntityX` |

use once_cell::sync::Lazy;
use regex::Regex;

/// A case-conversion strategy applied on identifier cache misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseConvention {
    /// [`to_title_case`]
    Title,
    /// [`to_pascal_case`]
    Pascal,
    /// [`to_camel_case`]
    Camel,
    /// [`to_host_case`]
    Host,
}

impl CaseConvention {
    pub fn apply(self, s: &str) -> String {
        match self {
            CaseConvention::Title => to_title_case(s),
            CaseConvention::Pascal => to_pascal_case(s),
            CaseConvention::Camel => to_camel_case(s),
            CaseConvention::Host => to_host_case(s),
        }
    }
}

/// Convert snake_case to camelCase.
///
/// # Examples
///
/// ```
/// use hybroid_codegen::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("player_idx"), "playerIdx");
/// assert_eq!(to_camel_case("already"), "already");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;

    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push_str(&c.to_uppercase().to_string());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Convert a string to PascalCase, preserving existing capitals.
///
/// # Examples
///
/// ```
/// use hybroid_codegen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
/// assert_eq!(to_pascal_case("CannonFrequency"), "CannonFrequency");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_'])
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Title-case every word and drop underscores.
///
/// A letter is upper-cased when the preceding character is not a letter and
/// lower-cased otherwise, so digits start a new word.
///
/// # Examples
///
/// ```
/// use hybroid_codegen::naming::to_title_case;
///
/// assert_eq!(to_title_case("PLAYER_BULLET"), "PlayerBullet");
/// assert_eq!(to_title_case("FREQ_7_5"), "Freq75");
/// ```
pub fn to_title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            if c != '_' {
                result.push(c);
            }
            prev_is_letter = false;
        }
    }

    result
}

/// Ordered phrase rewrites applied before title-casing host identifiers.
const HOST_REWRITES: &[(&str, &str)] = &[
    ("customizable_entity_set", "set_entity"),
    ("customizable_entity_get", "get_entity"),
    ("customizable_entity_skip", "skip_entity"),
    ("collision_callback", "collision"),
    ("player_ship", "ship"),
    ("entity_set", "set_entity"),
    ("entity_get", "get_entity"),
    ("fixedpoint", "fixed"),
];

/// Convert a host-library identifier to its Hybroid spelling.
///
/// # Examples
///
/// ```
/// use hybroid_codegen::naming::to_host_case;
///
/// assert_eq!(to_host_case("entity_get_position"), "GetEntityPosition");
/// assert_eq!(to_host_case("customizable_entity_set_mesh"), "SetEntityMesh");
/// ```
pub fn to_host_case(s: &str) -> String {
    let rewritten = HOST_REWRITES
        .iter()
        .fold(s.to_string(), |acc, (from, to)| acc.replace(from, to));

    to_title_case(&rewritten)
}

static REFERENCE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)] // Safe: the pattern is a literal
    Regex::new(r"`(\w+)`").expect("reference pattern is valid")
});

/// Convert every back-tick wrapped identifier in free text to camelCase.
///
/// # Examples
///
/// ```
/// use hybroid_codegen::naming::camel_case_references;
///
/// assert_eq!(
///     camel_case_references("Returns `player_idx`'s score."),
///     "Returns `playerIdx`'s score."
/// );
/// ```
pub fn camel_case_references(text: &str) -> String {
    REFERENCE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            format!("`{}`", to_camel_case(&caps[1]))
        })
        .into_owned()
}

#[cfg(test)]
#[path = "naming/naming_tests.rs"]
mod naming_tests;
