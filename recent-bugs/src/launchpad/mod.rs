//! Launchpad web service client.
//!
//! Implements [`BugSource`] over the anonymous, read-only part of the
//! Launchpad REST API. Collections are followed page by page and every
//! request is awaited before the next one is sent.

mod cache;
mod collection;

pub use cache::{CachedResponse, ResponseCache};

use crate::bugs::{Assignee, BugRecord, BugSource, BugSourceError, BugStatus, TaskTarget};
use async_trait::async_trait;
use collection::{BugResource, CollectionPage, MessageResource, PersonResource};
use reqwest::header::{ETAG, IF_NONE_MATCH};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Production web service root.
pub const DEFAULT_API_ROOT: &str = "https://api.launchpad.net/1.0/";

const USER_AGENT: &str = concat!("recent-bugs/", env!("CARGO_PKG_VERSION"));

/// Anonymous Launchpad client.
#[derive(Debug)]
pub struct LaunchpadClient {
    client: reqwest::Client,
    api_root: Url,
    cache: Option<ResponseCache>,
    /// Last bug resource fetched, so tags and discussion share one request.
    last_bug: Mutex<Option<(String, BugResource)>>,
}

impl LaunchpadClient {
    /// Creates a client for the web service at `api_root`.
    ///
    /// # Arguments
    ///
    /// * `api_root` - Web service root, e.g. [`DEFAULT_API_ROOT`]
    /// * `cache_dir` - Directory for cached responses; `None` disables caching
    /// * `timeout` - Per-request timeout; `None` keeps the client default
    ///
    /// # Errors
    ///
    /// Returns [`BugSourceError`] if `api_root` is not a URL or the HTTP
    /// client cannot be built.
    pub fn new(
        api_root: &str,
        cache_dir: Option<&Path>,
        timeout: Option<Duration>,
    ) -> Result<Self, BugSourceError> {
        let api_root = parse_api_root(api_root)?;

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(BugSourceError::Client)?;

        Ok(Self {
            client,
            api_root,
            cache: cache_dir.map(ResponseCache::new),
            last_bug: Mutex::new(None),
        })
    }

    /// Returns the web service root.
    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    /// Builds the `searchTasks` URL for `project`.
    ///
    /// The project name is a single path segment below the web service root;
    /// `/`, `?` and `#` in it are percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`BugSourceError::UnknownProject`] for a name that cannot
    /// stand as a path segment (empty, `.` or `..`).
    pub fn search_url(&self, project: &str, statuses: &[BugStatus]) -> Result<Url, BugSourceError> {
        if matches!(project, "" | "." | "..") {
            return Err(BugSourceError::UnknownProject {
                project: project.to_string(),
            });
        }

        let mut url = self.api_root.clone();
        url.path_segments_mut()
            .map_err(|()| BugSourceError::InvalidUrl {
                url: self.api_root.to_string(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            })?
            .pop_if_empty()
            .push(project);

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("ws.op", "searchTasks");
            for status in statuses {
                query.append_pair("status", status.as_str());
            }
            query.append_pair("omit_duplicates", "true");
            query.append_pair("order_by", "-importance");
        }

        Ok(url)
    }

    /// Fetches `url` as text, revalidating against the cache when one is set.
    async fn get_text(&self, url: &str) -> Result<String, BugSourceError> {
        let cached = self.cache.as_ref().and_then(|cache| cache.load(url));

        let mut request = self.client.get(url);
        if let Some(cached) = &cached {
            request = request.header(IF_NONE_MATCH, cached.etag.as_str());
        }

        debug!(url, cached = cached.is_some(), "GET");
        let response = request.send().await.map_err(|source| BugSourceError::Http {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if status == StatusCode::NOT_MODIFIED {
            if let Some(cached) = cached {
                debug!(url, "Serving cached response");
                return Ok(cached.body);
            }
        }
        if !status.is_success() {
            return Err(BugSourceError::Status {
                url: url.to_string(),
                status,
            });
        }

        let etag = response
            .headers()
            .get(ETAG)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await.map_err(|source| BugSourceError::Http {
            url: url.to_string(),
            source,
        })?;

        if let (Some(cache), Some(etag)) = (&self.cache, etag) {
            if let Err(e) = cache.store(url, &etag, &body) {
                warn!(dir = %cache.dir().display(), error = %e, "Failed to write response cache");
            }
        }

        Ok(body)
    }

    /// Fetches and decodes a single resource.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, BugSourceError> {
        let body = self.get_text(url).await?;
        serde_json::from_str(&body).map_err(|source| BugSourceError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Fetches every page of a collection.
    async fn get_collection<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, BugSourceError> {
        let mut items = Vec::new();
        let mut next = Some(url.to_string());

        while let Some(page_url) = next {
            let page: CollectionPage<T> = self.get_json(&page_url).await?;
            items.extend(page.entries);
            next = page.next_collection_link;
        }

        Ok(items)
    }

    /// Fetches the bug resource behind `bug`, reusing the previous fetch of
    /// the same bug.
    async fn bug_resource(&self, bug: &BugRecord) -> Result<BugResource, BugSourceError> {
        if let Some(resource) = self.memoized_bug(&bug.bug_link) {
            return Ok(resource);
        }

        let resource: BugResource = self.get_json(&bug.bug_link).await?;
        if let Ok(mut last) = self.last_bug.lock() {
            *last = Some((bug.bug_link.clone(), resource.clone()));
        }
        Ok(resource)
    }

    fn memoized_bug(&self, bug_link: &str) -> Option<BugResource> {
        let last = self.last_bug.lock().ok()?;
        last.as_ref()
            .filter(|(link, _)| link == bug_link)
            .map(|(_, resource)| resource.clone())
    }
}

#[async_trait]
impl BugSource for LaunchpadClient {
    async fn search_tasks(
        &self,
        project: &str,
        statuses: &[BugStatus],
    ) -> Result<Vec<BugRecord>, BugSourceError> {
        let url = self.search_url(project, statuses)?;
        debug!(project, "Searching tasks");

        match self.get_collection(url.as_str()).await {
            Err(BugSourceError::Status { status, .. }) if status == StatusCode::NOT_FOUND => {
                Err(BugSourceError::UnknownProject {
                    project: project.to_string(),
                })
            }
            other => other,
        }
    }

    async fn assignee(&self, bug: &BugRecord) -> Result<Option<Assignee>, BugSourceError> {
        let Some(link) = &bug.assignee_link else {
            return Ok(None);
        };
        let person: PersonResource = self.get_json(link).await?;
        Ok(Some(Assignee {
            display_name: person.display_name,
        }))
    }

    async fn tags(&self, bug: &BugRecord) -> Result<Vec<String>, BugSourceError> {
        Ok(self.bug_resource(bug).await?.tags)
    }

    async fn discussion(&self, bug: &BugRecord) -> Result<String, BugSourceError> {
        let resource = self.bug_resource(bug).await?;
        let messages: Vec<MessageResource> = self
            .get_collection(&resource.messages_collection_link)
            .await?;

        Ok(messages
            .into_iter()
            .map(|message| message.content)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    async fn targets(&self, bug: &BugRecord) -> Result<Vec<TaskTarget>, BugSourceError> {
        let resource = self.bug_resource(bug).await?;
        self.get_collection(&resource.bug_tasks_collection_link)
            .await
    }
}

/// Parses the web service root, making sure relative joins stay below it.
fn parse_api_root(api_root: &str) -> Result<Url, BugSourceError> {
    let normalized = if api_root.ends_with('/') {
        api_root.to_string()
    } else {
        format!("{api_root}/")
    };
    let url = Url::parse(&normalized).map_err(|source| BugSourceError::InvalidUrl {
        url: api_root.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(BugSourceError::InvalidUrl {
            url: api_root.to_string(),
            source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
        });
    }
    Ok(url)
}
