//! Standalone preview documents.
//!
//! A preview is a single HTML file that shows one slice twice: inside a
//! mobile-width frame and inside a desktop-width frame. The slice markup
//! carries its own inline styles and media-gated overrides, so the document
//! only adds fonts, a reset and the frame chrome.
//!
//! ```text
//! ┌──────────── Slice Preview: HomeHero ────────────┐
//! │ Mobile View (375px)    ┌─────┐                  │
//! │                        │slice│                  │
//! │                        └─────┘                  │
//! │ Desktop View (1440px)  ┌───────────────────────┐│
//! │                        │         slice         ││
//! │                        └───────────────────────┘│
//! └─────────────────────────────────────────────────┘
//! ```

use crate::config::{Config, PreviewConfig};
use crate::i18n::Lang;
use crate::render::RenderContext;
use crate::slices::{self, SliceError};
use crate::variables::DesignVariables;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Slice(#[from] SliceError),
}

/// Geomanist weights shipped in `public/fonts/`.
const FONT_WEIGHTS: [u16; 3] = [400, 500, 600];

/// Default output file for a slice: `homehero-preview.html`.
pub fn default_output_name(slice: &str) -> PathBuf {
    PathBuf::from(format!("{}-preview.html", slice.to_lowercase()))
}

/// Page-level CSS: font faces, reset and preview frame chrome.
pub fn document_css(preview: &PreviewConfig, variables: &DesignVariables) -> String {
    let mut css = String::new();
    for weight in FONT_WEIGHTS {
        css.push_str(&format!(
            "@font-face {{ font-family: 'Geomanist'; \
             src: url('./public/fonts/geomanist-{weight}.woff2') format('woff2'), \
             url('./public/fonts/geomanist-{weight}.woff') format('woff'); \
             font-weight: {weight}; font-style: normal; font-display: swap; }}\n"
        ));
    }
    css.push_str(&format!(
        r#"* {{ margin: 0; padding: 0; box-sizing: border-box; }}
body {{ font-family: 'Geomanist', sans-serif; line-height: 1.6; color: {text}; background-color: {bg}; }}
.preview-container {{ margin: 2rem auto; max-width: 1200px; padding: 0 1rem; }}
.preview-header {{ text-align: center; margin-bottom: 2rem; font-family: 'Geomanist', sans-serif; }}
.preview-frame {{ border: 2px solid #e2e2e2; margin-bottom: 2rem; border-radius: 8px; overflow: hidden; }}
.preview-frame h3 {{ background: #f1f1f1; padding: 0.5rem 1rem; margin: 0; font-size: 14px; color: #666; font-weight: 500; }}
.frame-mobile {{ width: {mobile}px; margin: 0 auto; }}
.frame-desktop {{ width: 100%; max-width: {desktop}px; margin: 0 auto; }}
"#,
        text = variables.resolve("var(--text)"),
        bg = variables.resolve("var(--bg)"),
        mobile = preview.mobile_width,
        desktop = preview.desktop_width,
    ));
    css
}

/// Wrap rendered slice markup in a full preview document.
pub fn preview_document(
    title: &str,
    lang: Lang,
    slice: &Markup,
    preview: &PreviewConfig,
    variables: &DesignVariables,
) -> Markup {
    let css = document_css(preview, variables);
    html! {
        (DOCTYPE)
        html lang=(lang.as_str()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                div.preview-container {
                    div.preview-header {
                        h1 { "Slice Preview: " (title) }
                        p { "Generated with inline styles for responsive breakpoints" }
                    }
                    div.preview-frame.frame-mobile {
                        h3 { "Mobile View (" (preview.mobile_width) "px)" }
                        div style={ "width: " (preview.mobile_width) "px; overflow-x: auto;" } {
                            (slice)
                        }
                    }
                    div.preview-frame.frame-desktop {
                        h3 { "Desktop View (" (preview.desktop_width) "px)" }
                        div style={ "width: 100%; min-width: " (preview.desktop_width) "px;" } {
                            (slice)
                        }
                    }
                }
            }
        }
    }
}

/// Render `slice` in `lang` and wrap it in a preview document.
pub fn build_preview(slice: &str, lang: Lang, config: &Config) -> Result<Markup, PreviewError> {
    let variables = config.design_variables();
    let ctx = RenderContext {
        lang,
        variables: &variables,
        desktop_min_width: config.preview.media_min_width,
    };
    let markup = slices::render_slice(slice, &ctx)?;
    Ok(preview_document(slice, lang, &markup, &config.preview, &variables))
}

/// Write a preview document, creating parent directories as needed.
pub fn write_preview(path: &Path, document: &Markup) -> Result<(), PreviewError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &document.0)?;
    Ok(())
}
