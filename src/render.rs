//! Inline-style HTML building blocks: headings, sections and the
//! media-gated desktop override they share.
//!
//! Every block is rendered twice in terms of style: the mobile variant goes in
//! the element's `style` attribute, the desktop variant goes in a `<style>`
//! block right after the element:
//!
//! ```html
//! <h1 style="font-size: 38px; ..." class="responsive-heading">…</h1>
//! <style>@media (min-width: 1440px) { .responsive-heading:last-of-type { font-size: 67px; ... } }</style>
//! ```
//!
//! All styles are composed with [`StyleMap::merge`], so later layers win.

use crate::breakpoint::Breakpoint;
use crate::i18n::Lang;
use crate::style::{self, StyleMap};
use crate::typography;
use crate::variables::DesignVariables;
use maud::{Markup, PreEscaped, html};

pub const HEADING_CLASS: &str = "responsive-heading";
pub const SECTION_CLASS: &str = "responsive-section";

/// Default viewport width at which desktop overrides apply.
pub const DESKTOP_MIN_WIDTH: u32 = 1440;

const SECTION_INNER_STYLE: &str = "max-width: 64rem; margin: 0 auto; padding: 0 1rem";

/// Everything a renderer needs besides its own arguments.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub lang: Lang,
    pub variables: &'a DesignVariables,
    /// Viewport width (px) at which desktop overrides kick in.
    pub desktop_min_width: u32,
}

impl<'a> RenderContext<'a> {
    pub fn new(lang: Lang, variables: &'a DesignVariables) -> Self {
        Self {
            lang,
            variables,
            desktop_min_width: DESKTOP_MIN_WIDTH,
        }
    }
}

/// `.class:last-of-type`, the selector desktop overrides target.
pub fn last_of_type(class: &str) -> String {
    format!(".{class}:last-of-type")
}

/// A `<style>` block applying `styles` to `selector` from `min_width` px up.
pub fn media_override(
    min_width: u32,
    selector: &str,
    styles: &StyleMap,
    variables: &DesignVariables,
) -> Markup {
    let css = format!(
        "@media (min-width: {}px) {{ {} {{ {} }} }}",
        min_width,
        selector,
        styles.to_inline(variables)
    );
    html! {
        style { (PreEscaped(css)) }
    }
}

// ============================================================================
// Headings
// ============================================================================

/// A heading to render.
#[derive(Debug, Clone, Copy)]
pub struct Heading<'a> {
    /// HTML heading level; clamped to 1-6.
    pub level: u8,
    /// Typography scale key; unknown sizes use size 1.
    pub size: u8,
    /// Utility classes layered over the scale.
    pub class: &'a str,
    pub content: &'a str,
    /// Add the scale's bottom margin. Applied last, so it beats `mb-[…]`.
    pub tight_margin: bool,
}

fn heading_base() -> StyleMap {
    [
        ("font-weight", "500"),
        ("line-height", "1.15"),
        ("letter-spacing", "-0.015em"),
        ("font-family", "Geomanist, sans-serif"),
    ]
    .into_iter()
    .collect()
}

/// Composed styles for a heading at one breakpoint.
pub fn heading_styles(heading: &Heading, breakpoint: Breakpoint) -> StyleMap {
    let entry = typography::scale_entry(heading.size);
    let mut styles = heading_base();
    styles.set("font-size", entry.font_size(breakpoint));
    styles.merge(&style::resolve(heading.class, breakpoint));
    if heading.tight_margin {
        styles.set("margin-bottom", entry.tight_margin(breakpoint));
    }
    styles
}

pub fn render_heading(heading: &Heading, ctx: &RenderContext) -> Markup {
    let inline = heading_styles(heading, Breakpoint::Mobile).to_inline(ctx.variables);
    let desktop = heading_styles(heading, Breakpoint::Desktop);
    let content = heading.content;

    let element = match heading.level.clamp(1, 6) {
        1 => html! { h1 style=(inline) class=(HEADING_CLASS) { (content) } },
        2 => html! { h2 style=(inline) class=(HEADING_CLASS) { (content) } },
        3 => html! { h3 style=(inline) class=(HEADING_CLASS) { (content) } },
        4 => html! { h4 style=(inline) class=(HEADING_CLASS) { (content) } },
        5 => html! { h5 style=(inline) class=(HEADING_CLASS) { (content) } },
        _ => html! { h6 style=(inline) class=(HEADING_CLASS) { (content) } },
    };

    html! {
        (element)
        (media_override(ctx.desktop_min_width, &last_of_type(HEADING_CLASS), &desktop, ctx.variables))
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Vertical padding presets for sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionPadding {
    None,
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
}

impl SectionPadding {
    /// Parse a padding key. Unrecognized keys mean [`SectionPadding::Lg`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "none" => SectionPadding::None,
            "sm" => SectionPadding::Sm,
            "md" => SectionPadding::Md,
            "lg" => SectionPadding::Lg,
            "xl" => SectionPadding::Xl,
            _ => SectionPadding::Lg,
        }
    }

    /// CSS `padding` value at a breakpoint.
    pub fn value(self, breakpoint: Breakpoint) -> &'static str {
        let (mobile, desktop) = match self {
            SectionPadding::None => ("0", "0"),
            SectionPadding::Sm => ("2rem 0", "2rem 0"),
            SectionPadding::Md => ("3rem 0", "3rem 0"),
            SectionPadding::Lg => ("6rem 0", "6rem 0"),
            SectionPadding::Xl => ("8rem 0", "8rem 0"),
        };
        match breakpoint {
            Breakpoint::Mobile => mobile,
            Breakpoint::Tablet | Breakpoint::Desktop => desktop,
        }
    }
}

pub fn section_styles(padding: SectionPadding, breakpoint: Breakpoint) -> StyleMap {
    [
        ("width", "100%"),
        ("padding", padding.value(breakpoint)),
        ("background-color", "var(--bg)"),
        ("color", "var(--text)"),
    ]
    .into_iter()
    .collect()
}

/// Wrap pre-rendered `content` in a themed, centered section.
pub fn render_section(
    mode: &str,
    padding: SectionPadding,
    content: Markup,
    ctx: &RenderContext,
) -> Markup {
    let mode = if mode.is_empty() { "light" } else { mode };
    let mobile = section_styles(padding, Breakpoint::Mobile);
    let desktop = mobile.clone().merged(&section_styles(padding, Breakpoint::Desktop));

    html! {
        section style=(mobile.to_inline(ctx.variables)) data-theme=(mode) class=(SECTION_CLASS) {
            div style=(SECTION_INNER_STYLE) {
                (content)
            }
        }
        (media_override(ctx.desktop_min_width, &last_of_type(SECTION_CLASS), &desktop, ctx.variables))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn title(class: &'static str, tight_margin: bool) -> Heading<'static> {
        Heading {
            level: 1,
            size: 1,
            class,
            content: "Title",
            tight_margin,
        }
    }

    #[test]
    fn heading_layers_base_scale_and_classes() {
        let styles = heading_styles(&title("max-w-[800px]", false), Breakpoint::Mobile);
        assert_eq!(styles.get("font-weight"), Some("500"));
        assert_eq!(styles.get("font-size"), Some("38px"));
        assert_eq!(styles.get("max-width"), Some("800px"));
        assert_eq!(styles.get("margin-bottom"), None);
    }

    #[test]
    fn heading_class_font_size_beats_scale() {
        let styles = heading_styles(&title("text-[22px]", false), Breakpoint::Desktop);
        assert_eq!(styles.get("font-size"), Some("22px"));
    }

    #[test]
    fn tight_margin_per_breakpoint() {
        let heading = title("", true);
        assert_eq!(
            heading_styles(&heading, Breakpoint::Mobile).get("margin-bottom"),
            Some("16px")
        );
        assert_eq!(
            heading_styles(&heading, Breakpoint::Desktop).get("margin-bottom"),
            Some("20px")
        );
    }

    #[test]
    fn tight_margin_beats_arbitrary_margin_class() {
        let heading = title("mb-[40px] lg:mb-[48px]", true);
        assert_eq!(
            heading_styles(&heading, Breakpoint::Mobile).get("margin-bottom"),
            Some("16px")
        );
        assert_eq!(
            heading_styles(&heading, Breakpoint::Desktop).get("margin-bottom"),
            Some("20px")
        );
    }

    #[test]
    fn arbitrary_margin_class_applies_without_flag() {
        let heading = title("mb-[40px]", false);
        assert_eq!(
            heading_styles(&heading, Breakpoint::Mobile).get("margin-bottom"),
            Some("40px")
        );
    }

    #[test]
    fn unknown_size_uses_size_one() {
        let heading = Heading { size: 9, ..title("", false) };
        assert_eq!(
            heading_styles(&heading, Breakpoint::Desktop).get("font-size"),
            Some("67px")
        );
    }

    #[test]
    fn render_heading_emits_mobile_inline_and_desktop_override() {
        let vars = DesignVariables::default();
        let html = render_heading(&title("", true), &context(&vars)).into_string();
        assert!(html.starts_with("<h1 "));
        assert!(html.contains(r#"class="responsive-heading""#));
        assert!(html.contains("font-size: 38px"));
        assert!(html.contains("margin-bottom: 16px"));
        assert!(html.contains("@media (min-width: 1440px)"));
        assert!(html.contains(".responsive-heading:last-of-type { "));
        assert!(html.contains("font-size: 67px"));
        assert!(html.contains("margin-bottom: 20px"));
    }

    #[test]
    fn render_heading_uses_level_for_tag() {
        let vars = DesignVariables::default();
        let heading = Heading { level: 3, size: 3, ..title("", false) };
        let html = render_heading(&heading, &context(&vars)).into_string();
        assert!(html.starts_with("<h3 "));
        assert!(html.contains("</h3>"));
    }

    #[test]
    fn render_heading_clamps_level() {
        let vars = DesignVariables::default();
        let heading = Heading { level: 9, ..title("", false) };
        let html = render_heading(&heading, &context(&vars)).into_string();
        assert!(html.starts_with("<h6 "));
    }

    #[test]
    fn render_heading_escapes_content() {
        let vars = DesignVariables::default();
        let heading = Heading { content: "<script>x</script>", ..title("", false) };
        let html = render_heading(&heading, &context(&vars)).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn render_heading_respects_desktop_width() {
        let vars = DesignVariables::default();
        let ctx = RenderContext { desktop_min_width: 1200, ..context(&vars) };
        let html = render_heading(&title("", false), &ctx).into_string();
        assert!(html.contains("@media (min-width: 1200px)"));
    }

    #[test]
    fn padding_keys() {
        assert_eq!(SectionPadding::from_key("none").value(Breakpoint::Mobile), "0");
        assert_eq!(SectionPadding::from_key("xl").value(Breakpoint::Desktop), "8rem 0");
        assert_eq!(SectionPadding::from_key("huge"), SectionPadding::Lg);
    }

    #[test]
    fn render_section_resolves_theme_colors() {
        let vars = DesignVariables::default();
        let html = render_section("", SectionPadding::Md, html! { p { "x" } }, &context(&vars))
            .into_string();
        assert!(html.contains(r#"data-theme="light""#));
        assert!(html.contains("padding: 3rem 0"));
        assert!(html.contains("background-color: #FFFFFF"));
        assert!(html.contains("color: #01080F"));
        assert!(html.contains("max-width: 64rem; margin: 0 auto; padding: 0 1rem"));
        assert!(html.contains(".responsive-section:last-of-type"));
        assert!(html.contains("<p>x</p>"));
    }

    #[test]
    fn render_section_keeps_mode_tag() {
        let vars = DesignVariables::default();
        let html = render_section("dark", SectionPadding::Lg, html! {}, &context(&vars)).into_string();
        assert!(html.contains(r#"data-theme="dark""#));
    }

    #[test]
    fn media_override_format() {
        let vars = DesignVariables::default();
        let styles: StyleMap = [("display", "flex")].into_iter().collect();
        let html = media_override(640, ".row", &styles, &vars).into_string();
        assert_eq!(
            html,
            "<style>@media (min-width: 640px) { .row { display: flex } }</style>"
        );
    }
}
