//! Page-number pagination for listing endpoints.
//!
//! Freshservice list calls take `page` and `per_page` query parameters and
//! return the items under the endpoint's envelope key. No total count is
//! used: a page holding fewer than `per_page` items is the last one.

use std::iter::FusedIterator;

use reqwest::Method;
use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::error::FsError;

impl Endpoint<'_> {
    /// Builds the URL of one listing page.
    ///
    /// `query` is appended verbatim (e.g. `include=type_fields`).
    pub fn paginate_url(&self, query: Option<&str>, page: u32) -> String {
        let mut url = format!(
            "{}?page={}&per_page={}",
            self.base_url(),
            page,
            self.items_per_page
        );
        if let Some(query) = query.map(|q| q.trim_start_matches(['?', '&'])) {
            if !query.is_empty() {
                url.push('&');
                url.push_str(query);
            }
        }
        url
    }

    /// Lazily walks every page of the listing, starting at page 1.
    ///
    /// Each call to `next()` issues one GET. Call `get_all` again to restart.
    ///
    /// # Example
    ///
    /// ```ignore
    /// for page in assets.get_all(Some("include=type_fields")) {
    ///     for asset in page? {
    ///         println!("{}", asset["name"]);
    ///     }
    /// }
    /// ```
    pub fn get_all(&self, query: Option<&str>) -> Pages<'_> {
        Pages {
            endpoint: self,
            query: query.map(str::to_string),
            page: 1,
            done: false,
        }
    }

    /// Collects every page into one vector, stopping at the first error.
    pub fn collect_all(&self, query: Option<&str>) -> Result<Vec<Value>, FsError> {
        let mut items = Vec::new();
        for page in self.get_all(query) {
            items.extend(page?);
        }
        Ok(items)
    }
}

/// Iterator over the pages of a listing.
///
/// Yields `Ok(items)` per page. Ends after the first short page or after
/// yielding an error.
pub struct Pages<'a> {
    endpoint: &'a Endpoint<'a>,
    query: Option<String>,
    page: u32,
    done: bool,
}

impl Pages<'_> {
    /// Number of the page the next call to `next()` will request.
    pub fn next_page(&self) -> u32 {
        self.page
    }

    fn fetch(&self) -> Result<Vec<Value>, FsError> {
        let url = self.endpoint.paginate_url(self.query.as_deref(), self.page);
        let body = self
            .endpoint
            .service
            .send_request(Method::GET, &url, None)?;
        extract_items(body, self.endpoint.resource_key())
    }
}

impl Iterator for Pages<'_> {
    type Item = Result<Vec<Value>, FsError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.fetch() {
            Ok(items) => {
                tracing::debug!(
                    resource = %self.endpoint.resource_key(),
                    page = self.page,
                    count = items.len(),
                    "Fetched page"
                );
                if items.len() < self.endpoint.items_per_page {
                    self.done = true;
                } else {
                    self.page += 1;
                }
                Some(Ok(items))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Pages<'_> {}

/// Takes the array nested under `key` out of a listing response.
pub fn extract_items(body: Value, key: &str) -> Result<Vec<Value>, FsError> {
    match body {
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(FsError::envelope(key)),
        },
        _ => Err(FsError::envelope(key)),
    }
}
