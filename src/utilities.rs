//! The utility class table and the per-token classifier.
//!
//! Only the handful of utilities the site's slices actually use are known.
//! Anything else is inert: it classifies as [`ClassToken::Unknown`] and
//! contributes nothing.

use phf::phf_map;

/// Ordered CSS declarations contributed by one utility class.
pub type Declarations = &'static [(&'static str, &'static str)];

static UTILITIES: phf::Map<&'static str, Declarations> = phf_map! {
    // Layout
    "flex" => &[("display", "flex")],
    "flex-col" => &[("flex-direction", "column")],
    "flex-row" => &[("flex-direction", "row")],
    "w-full" => &[("width", "100%")],
    "h-full" => &[("height", "100%")],

    // Spacing
    "py-8" => &[("padding-top", "2rem"), ("padding-bottom", "2rem")],
    "py-12" => &[("padding-top", "3rem"), ("padding-bottom", "3rem")],
    "py-24" => &[("padding-top", "6rem"), ("padding-bottom", "6rem")],
    "py-32" => &[("padding-top", "8rem"), ("padding-bottom", "8rem")],
    "mt-8" => &[("margin-top", "2rem")],
    "mb-4" => &[("margin-bottom", "1rem")],
    "gap-4" => &[("gap", "1rem")],

    // Typography
    "font-[500]" => &[("font-weight", "500")],
    "leading-[1.15]" => &[("line-height", "1.15")],
    "tracking-[-0.015em]" => &[("letter-spacing", "-0.015em")],
    "font-geomanist" => &[("font-family", "Geomanist, sans-serif")],

    // Max width
    "max-w-[800px]" => &[("max-width", "800px")],
    "max-w-[600px]" => &[("max-width", "600px")],
    "max-w-sm" => &[("max-width", "24rem")],
    "max-w-md" => &[("max-width", "28rem")],
    "max-w-lg" => &[("max-width", "32rem")],
    "max-w-xl" => &[("max-width", "36rem")],
    "max-w-2xl" => &[("max-width", "42rem")],
    "max-w-3xl" => &[("max-width", "48rem")],
    "max-w-4xl" => &[("max-width", "56rem")],
    "max-w-5xl" => &[("max-width", "64rem")],
    "max-w-6xl" => &[("max-width", "72rem")],
    "max-w-7xl" => &[("max-width", "80rem")],

    // Container
    "mx-auto" => &[("margin-left", "auto"), ("margin-right", "auto")],
    "px-4" => &[("padding-left", "1rem"), ("padding-right", "1rem")],
    "px-6" => &[("padding-left", "1.5rem"), ("padding-right", "1.5rem")],
    "px-8" => &[("padding-left", "2rem"), ("padding-right", "2rem")],
};

/// What a single (already un-prefixed) utility token means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassToken<'a> {
    /// A class from the static table.
    Static(Declarations),
    /// `text-[<value>]`
    ArbitraryFontSize(&'a str),
    /// `mb-[<value>]`
    ArbitraryMarginBottom(&'a str),
    Unknown,
}

/// Look up a class in the static table.
pub fn lookup(class: &str) -> Option<Declarations> {
    UTILITIES.get(class).copied()
}

/// Classify one token.
///
/// Bracket forms win over the table; a malformed bracket (no closing `]`)
/// falls through to the table and, failing that, is [`ClassToken::Unknown`].
pub fn classify(token: &str) -> ClassToken<'_> {
    if let Some(value) = bracket_value(token, "text-[") {
        return ClassToken::ArbitraryFontSize(value);
    }
    if let Some(value) = bracket_value(token, "mb-[") {
        return ClassToken::ArbitraryMarginBottom(value);
    }
    match lookup(token) {
        Some(declarations) => ClassToken::Static(declarations),
        None => ClassToken::Unknown,
    }
}

fn bracket_value<'a>(token: &'a str, open: &str) -> Option<&'a str> {
    token.strip_prefix(open)?.strip_suffix(']')
}
