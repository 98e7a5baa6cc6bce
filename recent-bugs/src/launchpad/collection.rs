//! Tracker API representations that only the client needs.

use serde::Deserialize;

/// One page of a collection resource.
#[derive(Debug, Deserialize)]
pub(crate) struct CollectionPage<T> {
    /// Items on this page.
    pub entries: Vec<T>,

    /// Link to the next page, absent on the last one.
    #[serde(default)]
    pub next_collection_link: Option<String>,
}

/// The parts of a bug resource the report uses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BugResource {
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Link to the bug's comments.
    pub messages_collection_link: String,

    /// Link to every task of the bug across targets.
    pub bug_tasks_collection_link: String,
}

/// A bug comment.
#[derive(Debug, Deserialize)]
pub(crate) struct MessageResource {
    #[serde(default)]
    pub content: String,
}

/// A tracker user.
#[derive(Debug, Deserialize)]
pub(crate) struct PersonResource {
    #[serde(default)]
    pub display_name: Option<String>,
}
