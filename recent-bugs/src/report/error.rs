//! Report rendering error types.

/// Report rendering error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Handlebars rendering error.
    #[error("Report rendering error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Template registration error.
    #[error("Report template registration error: {0}")]
    Registration(#[from] handlebars::TemplateError),
}
