//! Report renderer.

use super::field::{assignee_field, title_field};
use super::templates::{HTML, HTML_FOOTER, HTML_HEADER, SHARED, TEXT};
use super::{OutputFormat, RenderError, RenderOptions, Report, ReportEntry, SectionBody};
use handlebars::{no_escape, Handlebars};
use serde_json::json;

/// Creates a registry holding the templates of one output format.
///
/// Both registries run in strict mode; only the HTML one escapes values.
fn create_registry(
    escape: bool,
    templates: &[(&str, &str)],
) -> Result<Handlebars<'static>, RenderError> {
    let mut hbs = Handlebars::new();

    if !escape {
        hbs.register_escape_fn(no_escape);
    }

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    for (name, source) in SHARED.iter().chain(templates) {
        hbs.register_template_string(name, source)?;
    }

    Ok(hbs)
}

/// A rendered report entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    /// The entry's lines, ending with a blank separator line.
    pub text: String,
    /// Number of fields written with a fallback value.
    pub fallbacks: usize,
}

/// Renders reports, whole or piece by piece.
///
/// The piecewise methods let a caller write each part as soon as it is
/// known; concatenating them in document order gives exactly [`render`].
///
/// [`render`]: ReportRenderer::render
pub struct ReportRenderer {
    handlebars: Handlebars<'static>,
    options: RenderOptions,
}

impl ReportRenderer {
    /// Creates a renderer for `options`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Registration`] if a built-in template fails to
    /// compile.
    pub fn new(options: RenderOptions) -> Result<Self, RenderError> {
        let handlebars = match options.format {
            OutputFormat::Text => create_registry(false, TEXT)?,
            OutputFormat::Html => create_registry(true, HTML)?,
        };
        Ok(Self {
            handlebars,
            options,
        })
    }

    /// Returns the options this renderer was built with.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Returns what opens the document.
    #[must_use]
    pub fn document_header(&self) -> &'static str {
        match self.options.format {
            OutputFormat::Text => "",
            OutputFormat::Html => HTML_HEADER,
        }
    }

    /// Returns what closes the document.
    #[must_use]
    pub fn document_footer(&self) -> &'static str {
        match self.options.format {
            OutputFormat::Text => "",
            OutputFormat::Html => HTML_FOOTER,
        }
    }

    /// Renders the heading of a project with `count` recent bugs.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if rendering fails.
    pub fn project_header(&self, project: &str, count: usize) -> Result<String, RenderError> {
        Ok(self.handlebars.render(
            "project_header",
            &json!({ "project": project, "count": count }),
        )?)
    }

    /// Renders the notice for a project the tracker does not know.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if rendering fails.
    pub fn missing_project(&self, project: &str) -> Result<String, RenderError> {
        Ok(self
            .handlebars
            .render("missing_project", &json!({ "project": project }))?)
    }

    /// Renders one bug.
    ///
    /// Lines, in order: title, assignee, tags, targets, web link (text only),
    /// reviews, then a blank line. Optional parts are written only when both
    /// requested in the options and present in the entry.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if rendering fails.
    pub fn entry(&self, entry: &ReportEntry) -> Result<RenderedEntry, RenderError> {
        let encoding = self.options.encoding;
        let bug = &entry.bug;
        let title = title_field(bug, encoding);
        let assignee = assignee_field(entry.assignee.as_ref(), encoding);

        let mut text = self.handlebars.render(
            "title",
            &json!({
                "index": entry.index,
                "importance": bug.importance.as_str(),
                "status": bug.status.as_str(),
                "title": title.value(),
                "web_link": bug.web_link,
            }),
        )?;
        text.push_str(
            &self
                .handlebars
                .render("assignee", &json!({ "assignee": assignee.value() }))?,
        );

        if self.options.include_tags {
            if let Some(tags) = entry.tags.as_ref().filter(|tags| !tags.is_empty()) {
                text.push_str(
                    &self
                        .handlebars
                        .render("tags", &json!({ "tags": tags.join(" ") }))?,
                );
            }
        }

        if self.options.include_targets {
            for target in entry.targets.iter().flatten() {
                text.push_str(&self.handlebars.render(
                    "target",
                    &json!({
                        "name": target.bug_target_name,
                        "status": target.status.as_str(),
                    }),
                )?);
            }
        }

        if self.options.format == OutputFormat::Text {
            text.push_str(
                &self
                    .handlebars
                    .render("web_link", &json!({ "web_link": bug.web_link }))?,
            );
        }

        if self.options.include_reviews {
            for review in entry.reviews.iter().flatten() {
                text.push_str(&self.handlebars.render(
                    "review",
                    &json!({ "link": review.link, "status": review.status.as_str() }),
                )?);
            }
        }

        text.push('\n');

        let fallbacks = [&title, &assignee]
            .iter()
            .filter(|field| field.is_fallback())
            .count();
        Ok(RenderedEntry { text, fallbacks })
    }

    /// Renders a complete report.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if rendering any part fails.
    pub fn render(&self, report: &Report) -> Result<String, RenderError> {
        let mut out = self.document_header().to_string();

        for section in &report.sections {
            match &section.body {
                SectionBody::Missing => out.push_str(&self.missing_project(&section.project)?),
                SectionBody::Entries(entries) => {
                    out.push_str(&self.project_header(&section.project, entries.len())?);
                    for entry in entries {
                        out.push_str(&self.entry(entry)?.text);
                    }
                }
            }
        }

        out.push_str(self.document_footer());
        Ok(out)
    }
}
