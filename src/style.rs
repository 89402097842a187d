//! Style maps: resolving utility classes into CSS declarations and
//! serializing them back into inline `style` attributes.
//!
//! ## Override Precedence
//!
//! A [`StyleMap`] is last-write-wins. Setting a property that is already
//! present replaces its value but keeps its original position, so the
//! serialized order is the order in which each property was *first* set.
//! [`StyleMap::merge`] applies another map on top with the same rule, which is
//! how renderers layer base styles, scale values and class-derived styles.
//!
//! ## Resolution
//!
//! ```text
//! "flex lg:flex-row text-[22px] bogus"   (desktop)
//!   flex         → display: flex
//!   lg:flex-row  → prefix active → flex-direction: row
//!   text-[22px]  → font-size: 22px
//!   bogus        → ignored
//! ```
//!
//! Nothing here can fail: unknown classes, inactive prefixes, malformed
//! brackets and unresolved variables are all silently inert.

use crate::breakpoint::Breakpoint;
use crate::utilities::{self, ClassToken};
use crate::variables::DesignVariables;
use indexmap::IndexMap;
use serde::Serialize;

/// Ordered CSS property → value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleMap {
    properties: IndexMap<String, String>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property. An existing property keeps its position.
    pub fn set(&mut self, property: &str, value: &str) {
        // IndexMap::insert updates in place for an existing key.
        self.properties
            .insert(property.to_string(), value.to_string());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Apply `other` on top of `self`, last write wins.
    pub fn merge(&mut self, other: &StyleMap) {
        for (property, value) in other.iter() {
            self.set(property, value);
        }
    }

    /// Builder form of [`merge`](Self::merge).
    pub fn merged(mut self, other: &StyleMap) -> Self {
        self.merge(other);
        self
    }

    /// Apply a table entry's declarations in order.
    pub fn extend_declarations(&mut self, declarations: &[(&str, &str)]) {
        for (property, value) in declarations {
            self.set(property, value);
        }
    }

    /// Serialize as `prop: value; prop: value`, resolving `var(--name)` values
    /// against `variables`.
    pub fn to_inline(&self, variables: &DesignVariables) -> String {
        self.iter()
            .map(|(property, value)| format!("{}: {}", property, variables.resolve(value)))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (property, value) in iter {
            map.set(property, value);
        }
        map
    }
}

/// Resolve a whitespace-separated class list for one breakpoint.
pub fn resolve(class_list: &str, breakpoint: Breakpoint) -> StyleMap {
    let mut styles = StyleMap::new();
    for token in class_list.split_whitespace() {
        let Some(utility) = breakpoint.unwrap_token(token) else {
            continue;
        };
        match utilities::classify(utility) {
            ClassToken::ArbitraryFontSize(value) => styles.set("font-size", value),
            ClassToken::ArbitraryMarginBottom(value) => styles.set("margin-bottom", value),
            ClassToken::Static(declarations) => styles.extend_declarations(declarations),
            ClassToken::Unknown => {}
        }
    }
    styles
}

/// Serialize with the stock design variables.
pub fn serialize(styles: &StyleMap) -> String {
    styles.to_inline(&DesignVariables::default())
}
