//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` and a
//! `print_*` wrapper that writes the lines to stdout. Format functions are
//! pure, which keeps the CLI's text testable without capturing stdout.
//!
//! ## Render
//!
//! ```text
//! Generated HomeHero preview
//!     Language: pl
//!     Output: /work/homehero-preview.html
//!     Breakpoints: 375px (mobile) and 1440px (desktop)
//! ```
//!
//! ## List
//!
//! ```text
//! Slices
//! 001 HomeHero
//! 002 HomeAbout (not implemented)
//! ```

use crate::breakpoint::Breakpoint;
use crate::config::PreviewConfig;
use crate::i18n::Lang;
use crate::slices;
use crate::style::StyleMap;
use crate::variables::DesignVariables;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

pub fn format_render_summary(
    slice: &str,
    lang: Lang,
    output: &Path,
    preview: &PreviewConfig,
) -> Vec<String> {
    vec![
        format!("Generated {} preview", slice),
        format!("{}Language: {}", indent(1), lang),
        format!("{}Output: {}", indent(1), output.display()),
        format!(
            "{}Breakpoints: {}px (mobile) and {}px (desktop)",
            indent(1),
            preview.mobile_width,
            preview.desktop_width
        ),
    ]
}

pub fn print_render_summary(slice: &str, lang: Lang, output: &Path, preview: &PreviewConfig) {
    for line in format_render_summary(slice, lang, output, preview) {
        println!("{}", line);
    }
}

pub fn format_slice_list() -> Vec<String> {
    let mut lines = vec!["Slices".to_string()];
    for (i, name) in slices::SLICES.iter().enumerate() {
        if slices::is_implemented(name) {
            lines.push(format!("{} {}", format_index(i + 1), name));
        } else {
            lines.push(format!("{} {} (not implemented)", format_index(i + 1), name));
        }
    }
    lines
}

pub fn print_slice_list() {
    for line in format_slice_list() {
        println!("{}", line);
    }
}

/// One line per property, then the serialized inline style.
pub fn format_resolved(
    classes: &str,
    breakpoint: Breakpoint,
    styles: &StyleMap,
    variables: &DesignVariables,
) -> Vec<String> {
    let mut lines = vec![format!("{} @ {}", classes.trim(), breakpoint)];
    if styles.is_empty() {
        lines.push(format!("{}(no styles)", indent(1)));
        return lines;
    }
    for (property, value) in styles.iter() {
        lines.push(format!("{}{}: {}", indent(1), property, variables.resolve(value)));
    }
    lines.push(format!("{}style=\"{}\"", indent(1), styles.to_inline(variables)));
    lines
}

pub fn print_resolved(
    classes: &str,
    breakpoint: Breakpoint,
    styles: &StyleMap,
    variables: &DesignVariables,
) {
    for line in format_resolved(classes, breakpoint, styles, variables) {
        println!("{}", line);
    }
}
