//! # Slice Preview
//!
//! Inline-style previews of the marketing site's page slices.
//!
//! The site is styled with Tailwind utility classes and a small set of design
//! variables. A preview has neither a build step nor a stylesheet: every class
//! list is resolved into literal CSS declarations and written straight into
//! `style` attributes, once for mobile and once for desktop.
//!
//! # Pipeline
//!
//! ```text
//! class list ──resolve(mobile)──▶ StyleMap ──to_inline──▶ style="…"
//!            └─resolve(desktop)─▶ StyleMap ──to_inline──▶ @media (min-width: 1440px) { .x:last-of-type { … } }
//! ```
//!
//! Renderers layer style maps (base → typography scale → class styles →
//! flags) with an explicit last-write-wins merge, then emit the mobile
//! variant inline and the desktop variant inside a media-gated override.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`breakpoint`] | Breakpoints and their responsive-prefix allow-lists |
//! | [`utilities`] | Static utility table and per-token classifier |
//! | [`style`] | `StyleMap`, class-list resolution and inline serialization |
//! | [`variables`] | Design variables and `var(--name)` resolution |
//! | [`typography`] | Heading size scale and tight-margin values |
//! | [`render`] | Heading and section renderers, media overrides |
//! | [`i18n`] | Polish/English text selection with an explicit language |
//! | [`slices`] | Known slices and their renderers |
//! | [`preview`] | Standalone two-frame preview documents |
//! | [`config`] | Optional `slice-preview.toml` loading and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Failure Policy
//!
//! Style resolution never fails. Unknown classes, inactive prefixes,
//! malformed brackets and unresolved variables are inert. The only errors are
//! at the edges: a slice without a renderer, a bad config file, or an output
//! file that cannot be written.

pub mod breakpoint;
pub mod config;
pub mod i18n;
pub mod output;
pub mod preview;
pub mod render;
pub mod slices;
pub mod style;
pub mod typography;
pub mod utilities;
pub mod variables;

#[cfg(test)]
pub(crate) mod test_helpers;
