//! Shared test utilities.

use crate::i18n::Lang;
use crate::render::RenderContext;
use crate::variables::DesignVariables;

/// Polish render context over `variables` with the default desktop width.
pub fn context(variables: &DesignVariables) -> RenderContext<'_> {
    RenderContext::new(Lang::Pl, variables)
}
