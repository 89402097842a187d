//! Page slices that can be previewed.
//!
//! The site has one slice per home-page section. Only `HomeHero` has a
//! hand-written renderer so far; the others are known names that fail with
//! [`SliceError::NotImplemented`] rather than being treated as typos.

use crate::breakpoint;
use crate::i18n::Localized;
use crate::render::{self, Heading, RenderContext, SectionPadding};
use crate::style::StyleMap;
use maud::{Markup, html};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SliceError {
    #[error("unknown slice '{0}' (run `slice-preview list` for the available slices)")]
    UnknownSlice(String),
    #[error("slice renderer for '{0}' is not yet implemented")]
    NotImplemented(String),
}

/// Every home-page slice, in page order.
pub const SLICES: &[&str] = &[
    "HomeHero",
    "HomeAbout",
    "HomeBaas",
    "HomeCertificates",
    "HomeCloudFeatures",
    "HomeFaq",
];

/// Whether `name` has a renderer.
pub fn is_implemented(name: &str) -> bool {
    name == "HomeHero"
}

/// Render a slice by name.
pub fn render_slice(name: &str, ctx: &RenderContext) -> Result<Markup, SliceError> {
    if !SLICES.contains(&name) {
        return Err(SliceError::UnknownSlice(name.to_string()));
    }
    match name {
        "HomeHero" => Ok(render_home_hero(ctx)),
        _ => Err(SliceError::NotImplemented(name.to_string())),
    }
}

// ============================================================================
// HomeHero
// ============================================================================

const HERO_TITLE: Localized<'static> = Localized::new(
    "Rozwiązania dla ludzi, technologia dla biznesu",
    "Solutions for people, technology for business",
);

const HERO_SUBTITLE: Localized<'static> = Localized::new(
    "Jesteśmy największą firmą informatyczną w Polsce, i jedną z największych w Europie. Tworzymy cyfrową przyszłość.",
    "We are the largest IT company in Poland and one of the largest in Europe. We create the digital future.",
);

const HERO_CTA: Localized<'static> = Localized::new("Poznaj nasze rozwiązania", "Discover our solutions");

const BUTTON_ROW_CLASS: &str = "responsive-button-container";
const HERO_PADDING: &str = "lg";

pub fn render_home_hero(ctx: &RenderContext) -> Markup {
    let heading = render::render_heading(
        &Heading {
            level: 1,
            size: 1,
            class: "max-w-[800px]",
            content: HERO_TITLE.t(ctx.lang),
            tight_margin: true,
        },
        ctx,
    );

    let text: StyleMap = [
        ("max-width", "600px"),
        ("font-family", "Geomanist, sans-serif"),
        ("margin-bottom", "2rem"),
    ]
    .into_iter()
    .collect();

    let row_mobile: StyleMap = [
        ("display", "flex"),
        ("flex-direction", "column"),
        ("gap", "1rem"),
        ("margin-top", "2rem"),
    ]
    .into_iter()
    .collect();
    let row_wide = row_mobile
        .clone()
        .merged(&[("flex-direction", "row")].into_iter().collect::<StyleMap>());
    let row_min_width = breakpoint::prefix_min_width("sm").unwrap_or(640);

    let button: StyleMap = [
        ("background-color", "var(--primary)"),
        ("color", "var(--u-white)"),
        ("padding", "0.75rem 1.5rem"),
        ("border-radius", "0.375rem"),
        ("text-decoration", "none"),
        ("font-family", "Geomanist, sans-serif"),
        ("font-weight", "500"),
        ("display", "inline-block"),
    ]
    .into_iter()
    .collect();

    let vars = ctx.variables;
    let content = html! {
        (heading)
        p style=(text.to_inline(vars)) { (HERO_SUBTITLE.t(ctx.lang)) }
        div style=(row_mobile.to_inline(vars)) class=(BUTTON_ROW_CLASS) {
            a href="#" style=(button.to_inline(vars)) { (HERO_CTA.t(ctx.lang)) }
        }
        (render::media_override(row_min_width, &render::last_of_type(BUTTON_ROW_CLASS), &row_wide, vars))
    };

    render::render_section("light", SectionPadding::from_key(HERO_PADDING), content, ctx)
}
