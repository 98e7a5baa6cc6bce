//! Report templates.
//!
//! Every template renders whole lines, so output layout never depends on
//! block whitespace handling.

/// Template names and sources registered for both formats.
pub(crate) const SHARED: &[(&str, &str)] = &[
    (
        "missing_project",
        "{{project}} does not exist in Launchpad, client is assumed to be in error\n\n",
    ),
    ("assignee", "\t{{assignee}}\n"),
    ("tags", "\tTags: {{tags}}\n"),
    ("target", "\t({{name}} - {{status}})\n"),
    ("web_link", "\t{{web_link}}\n"),
    ("review", "\t - {{link}} -- {{status}}\n"),
];

/// Plain-text only templates.
pub(crate) const TEXT: &[(&str, &str)] = &[
    ("project_header", "{{project}} bugs:\n\n"),
    (
        "title",
        "{{index}}. [{{importance}}:{{status}}] \"{{title}}\"\n",
    ),
];

/// HTML only templates.
pub(crate) const HTML: &[(&str, &str)] = &[
    ("project_header", "<h1>{{project}} ({{count}})</h1>\n"),
    (
        "title",
        "{{index}}. [{{importance}}:{{status}}] <a href=\"{{web_link}}\" target=\"_blank\">{{title}}</a>\n",
    ),
];

/// Opens an HTML report.
pub(crate) const HTML_HEADER: &str =
    "<!DOCTYPE html>\n<html><body><pre style=\"font-family:verdana;font-size:15px\">\n";

/// Closes an HTML report.
pub(crate) const HTML_FOOTER: &str = "</pre></body></html>\n";
