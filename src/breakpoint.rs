//! Viewport breakpoints and responsive class prefixes.
//!
//! A utility class may carry a responsive prefix (`lg:flex-row`). Whether the
//! prefixed class applies depends on the breakpoint being rendered, and that
//! decision is a fixed allow-list per breakpoint:
//!
//! | Breakpoint | Accepted prefixes |
//! |------------|-------------------|
//! | `mobile`   | none (unprefixed classes only) |
//! | `tablet`   | `md`, `lg`, `xl` |
//! | `desktop`  | `lg`, `xl` |
//!
//! This is deliberately not a cumulative min-width cascade: `desktop` does not
//! pick up `sm:` or `md:` classes. Previews only ever compare two widths and the
//! allow-lists reproduce what the site's pages look like at those widths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown breakpoint '{0}' (expected mobile, tablet or desktop)")]
pub struct BreakpointError(pub String);

/// Viewport width tag used to select which responsive classes apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    #[default]
    Mobile,
    Tablet,
    Desktop,
}

/// Tailwind's responsive prefixes and the minimum widths they stand for.
pub const PREFIX_MIN_WIDTHS: &[(&str, u32)] = &[
    ("sm", 640),
    ("md", 768),
    ("lg", 1024),
    ("xl", 1280),
    ("2xl", 1536),
];

/// Minimum viewport width (px) for a responsive prefix, if it is one.
pub fn prefix_min_width(prefix: &str) -> Option<u32> {
    PREFIX_MIN_WIDTHS
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, w)| *w)
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Desktop];

    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        }
    }

    /// Responsive prefixes whose classes apply at this breakpoint.
    pub fn active_prefixes(self) -> &'static [&'static str] {
        match self {
            Breakpoint::Mobile => &[],
            Breakpoint::Tablet => &["md", "lg", "xl"],
            Breakpoint::Desktop => &["lg", "xl"],
        }
    }

    pub fn accepts_prefix(self, prefix: &str) -> bool {
        self.active_prefixes().contains(&prefix)
    }

    /// Strip a responsive prefix from `token` if it applies here.
    ///
    /// Returns the token unchanged when it has no prefix, the bare utility when
    /// the prefix is active, and `None` when the class must be dropped. Only the
    /// segment between the first and second colon is kept, so `lg:hover:flex`
    /// unwraps to `hover`.
    pub fn unwrap_token(self, token: &str) -> Option<&str> {
        match token.split_once(':') {
            None => Some(token),
            Some((prefix, rest)) => {
                if !self.accepts_prefix(prefix) {
                    return None;
                }
                rest.split(':').next()
            }
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = BreakpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mobile" => Ok(Breakpoint::Mobile),
            "tablet" => Ok(Breakpoint::Tablet),
            "desktop" => Ok(Breakpoint::Desktop),
            _ => Err(BreakpointError(s.to_string())),
        }
    }
}
