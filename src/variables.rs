//! Design-system variables (`--name` → literal CSS value).
//!
//! Inline previews cannot rely on the site's stylesheet, so any `var(--name)`
//! value is replaced with its literal before it is written into a `style`
//! attribute. Names that are not known are left as `var(...)` text.

use indexmap::IndexMap;
use std::borrow::Cow;

/// Stock design variables, in the order they appear in the site's `colors.css`.
pub const DEFAULT_VARIABLES: &[(&str, &str)] = &[
    ("--u-white", "#FFFFFF"),
    ("--u-black", "#01080F"),
    ("--u-gray-100", "#F9F9F9"),
    ("--u-gray-200", "#F1F1F1"),
    ("--u-gray-300", "#E2E2E2"),
    ("--u-blue", "#1D9BF0"),
    ("--u-dark-blue", "#252476"),
    ("--u-light-blue", "#D9ECFD"),
    ("--bg", "#FFFFFF"),
    ("--text", "#01080F"),
    ("--text-light", "rgba(1, 8, 15, 0.70)"),
    ("--primary", "#1D9BF0"),
    ("--primary-dark", "#252476"),
];

/// A set of design variables, usually the stock set plus config overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignVariables {
    values: IndexMap<String, String>,
}

impl Default for DesignVariables {
    fn default() -> Self {
        Self {
            values: DEFAULT_VARIABLES
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl DesignVariables {
    /// Stock variables with `overrides` applied on top.
    pub fn with_overrides<'a>(overrides: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut vars = Self::default();
        for (name, value) in overrides {
            vars.set(name, value);
        }
        vars
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Resolve a CSS value that may reference a variable.
    ///
    /// A value starting with `var(--` is looked up by the name between `var(`
    /// and the first `)`. On a hit the whole value is replaced by the literal;
    /// on a miss (or with no closing paren) the value is returned as-is.
    pub fn resolve<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if !value.starts_with("var(--") {
            return Cow::Borrowed(value);
        }
        let inner = &value["var(".len()..];
        let resolved = inner
            .find(')')
            .and_then(|end| self.get(&inner[..end]));
        match resolved {
            Some(literal) => Cow::Owned(literal.to_string()),
            None => Cow::Borrowed(value),
        }
    }
}
