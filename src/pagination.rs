//! Collection of paginated listings following their `next` links.

use crate::{apis::PoyntClientInner, common::scalar, http::RequestSpec, Error};
use serde_json::Value;
use std::{cmp::Ordering, collections::HashMap, fmt};

type SortFn = Box<dyn Fn(&Value, &Value) -> Ordering + Send + Sync>;

/// Options controlling how the pages of a listing are collected.
pub struct PageOptions {
    result_key: String,
    dedupe_key: Option<String>,
    sort_fn: Option<SortFn>,
}

impl PageOptions {
    /// Collects the items found under `result_key` in every page.
    pub fn new(result_key: impl Into<String>) -> Self {
        Self {
            result_key: result_key.into(),
            dedupe_key: None,
            sort_fn: None,
        }
    }

    /// Keeps one item per distinct value of `dedupe_key`, the last one seen.
    ///
    /// Values are compared by their string form, so `1` and `"1"` are the same key.
    ///
    /// The order of the collected items is unspecified afterwards.
    pub fn with_dedupe_key(mut self, dedupe_key: impl Into<String>) -> Self {
        self.dedupe_key = Some(dedupe_key.into());
        self
    }

    /// Sorts the collected items once all the pages have been fetched.
    pub fn with_sort<F>(mut self, sort_fn: F) -> Self
    where
        F: Fn(&Value, &Value) -> Ordering + Send + Sync + 'static,
    {
        self.sort_fn = Some(Box::new(sort_fn));
        self
    }
}

impl fmt::Debug for PageOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageOptions")
            .field("result_key", &self.result_key)
            .field("dedupe_key", &self.dedupe_key)
            .field("sorted", &self.sort_fn.is_some())
            .finish()
    }
}

impl PoyntClientInner {
    /// Fetches `spec.url` and then every page linked as `next`, until a page comes back
    /// without items or without a `next` link.
    ///
    /// Any failure aborts the whole collection.
    #[tracing::instrument(name = "Paged Request", skip_all, fields(url = ?spec.url))]
    pub(crate) async fn paged_request(
        &self,
        mut spec: RequestSpec,
        options: &PageOptions,
    ) -> Result<Vec<Value>, Error> {
        let mut results = Vec::new();

        loop {
            let page = self.request(spec.clone()).await?;

            let items = match page.get(&options.result_key).and_then(Value::as_array) {
                Some(items) if !items.is_empty() => items,
                _ => break,
            };
            results.extend(items.iter().cloned());

            match next_link(&page) {
                Some(href) => {
                    tracing::debug!(%href, "Following next page");
                    spec.url = Some(href);
                }
                None => break,
            }
        }

        if let Some(dedupe_key) = &options.dedupe_key {
            let mut unique = HashMap::new();
            for item in results {
                let key = item
                    .get(dedupe_key)
                    .map(scalar)
                    .unwrap_or_default();
                unique.insert(key, item);
            }
            results = unique.into_values().collect();
        }

        if let Some(sort_fn) = &options.sort_fn {
            results.sort_by(|a, b| sort_fn(a, b));
        }

        Ok(results)
    }
}

fn next_link(page: &Value) -> Option<String> {
    page.get("links")?
        .as_array()?
        .iter()
        .find(|link| link.get("rel").and_then(Value::as_str) == Some("next"))?
        .get("href")?
        .as_str()
        .map(str::to_string)
}
