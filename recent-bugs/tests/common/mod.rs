//! In-memory bug tracker and review service.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use recent_bugs::{
    Assignee, BugRecord, BugSource, BugSourceError, BugStatus, Importance, ReviewError,
    ReviewSource, ReviewStatus, TaskTarget,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Evaluation instant shared by the tests.
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2013, 6, 10)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Builds a bug task of `project` numbered `number`.
pub fn bug(
    project: &str,
    number: u64,
    title: &str,
    importance: Importance,
    status: BugStatus,
    created: &str,
) -> BugRecord {
    BugRecord {
        title: Some(title.to_string()),
        importance,
        status,
        date_created: DateTime::parse_from_rfc3339(created).unwrap(),
        web_link: format!("https://bugs.launchpad.net/{project}/+bug/{number}"),
        bug_link: format!("https://api.launchpad.net/1.0/bugs/{number}"),
        assignee_link: None,
        bug_target_name: project.to_string(),
    }
}

/// Bug tracker backed by maps keyed on project name and bug link.
#[derive(Default)]
pub struct FakeTracker {
    pub projects: HashMap<String, Vec<BugRecord>>,
    pub assignees: HashMap<String, Assignee>,
    pub tags: HashMap<String, Vec<String>>,
    pub discussions: HashMap<String, String>,
    pub targets: HashMap<String, Vec<TaskTarget>>,
    /// Status filters the searches were called with, in call order.
    pub searches: Mutex<Vec<(String, Vec<BugStatus>)>>,
}

impl FakeTracker {
    pub fn with_project(mut self, project: &str, bugs: Vec<BugRecord>) -> Self {
        self.projects.insert(project.to_string(), bugs);
        self
    }

    pub fn searched_projects(&self) -> Vec<String> {
        self.searches
            .lock()
            .unwrap()
            .iter()
            .map(|(project, _)| project.clone())
            .collect()
    }
}

#[async_trait]
impl BugSource for FakeTracker {
    async fn search_tasks(
        &self,
        project: &str,
        statuses: &[BugStatus],
    ) -> Result<Vec<BugRecord>, BugSourceError> {
        self.searches
            .lock()
            .unwrap()
            .push((project.to_string(), statuses.to_vec()));

        let bugs = self
            .projects
            .get(project)
            .ok_or_else(|| BugSourceError::UnknownProject {
                project: project.to_string(),
            })?;
        Ok(bugs
            .iter()
            .filter(|bug| statuses.contains(&bug.status))
            .cloned()
            .collect())
    }

    async fn assignee(&self, bug: &BugRecord) -> Result<Option<Assignee>, BugSourceError> {
        Ok(bug
            .assignee_link
            .as_ref()
            .and_then(|link| self.assignees.get(link))
            .cloned())
    }

    async fn tags(&self, bug: &BugRecord) -> Result<Vec<String>, BugSourceError> {
        Ok(self.tags.get(&bug.bug_link).cloned().unwrap_or_default())
    }

    async fn discussion(&self, bug: &BugRecord) -> Result<String, BugSourceError> {
        Ok(self.discussions.get(&bug.bug_link).cloned().unwrap_or_default())
    }

    async fn targets(&self, bug: &BugRecord) -> Result<Vec<TaskTarget>, BugSourceError> {
        Ok(self.targets.get(&bug.bug_link).cloned().unwrap_or_default())
    }
}

/// Review service that knows a fixed set of changes and fails on the rest.
#[derive(Default)]
pub struct FakeReviews {
    pub statuses: HashMap<u64, String>,
    pub lookups: Mutex<Vec<u64>>,
}

impl FakeReviews {
    pub fn with(mut self, review: u64, status: &str) -> Self {
        self.statuses.insert(review, status.to_string());
        self
    }

    pub fn lookups(&self) -> Vec<u64> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReviewSource for FakeReviews {
    async fn review_status(&self, review: u64) -> Result<ReviewStatus, ReviewError> {
        self.lookups.lock().unwrap().push(review);
        self.statuses
            .get(&review)
            .map(ReviewStatus::new)
            .ok_or(ReviewError::Status {
                review,
                status: reqwest::StatusCode::NOT_FOUND,
            })
    }
}
