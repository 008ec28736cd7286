//! Single-page pagination over listing stubs.
//!
//! The provider client library exposes listings through an async iterator of
//! pages. The services this simulator drives are only ever tested against
//! single-page result sets, so the iterator here yields exactly one page and
//! then stops; [`PageIterator::has_next_page`] always reports `false`.

use std::future::Future;
use std::pin::Pin;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::models::Response;

type PageFuture<'a> = Pin<Box<dyn Future<Output = Result<Response<Value>>> + Send + 'a>>;

/// Iterate the pages of a listing stub.
///
/// `call` is the not-yet-awaited stub invocation; it is polled lazily on the
/// first [`PageIterator::next`].
///
/// ```
/// # use github_sim::{pagination, FakeGithubAuth};
/// # #[tokio::main]
/// # async fn main() {
/// let auth = FakeGithubAuth::new();
/// let github = auth.inst(1001);
/// github.set_repositories(&["widgets"]).await;
///
/// let mut pages = pagination::iterator(github.apps().list_repos_accessible_to_installation());
/// while let Some(page) = pages.next().await {
///     let page = page.unwrap();
///     assert_eq!(page.data, serde_json::json!([{"name": "widgets"}]));
/// }
/// # }
/// ```
pub fn iterator<'a, T, F>(call: F) -> PageIterator<'a>
where
    T: Serialize + Send + 'a,
    F: Future<Output = Result<Response<T>>> + Send + 'a,
{
    PageIterator {
        pending: Some(Box::pin(async move {
            let response = call.await?;
            Ok(Response {
                status: response.status,
                data: serde_json::to_value(&response.data)?,
            })
        })),
    }
}

/// Lazy, finite, non-restartable iterator over the pages of one listing
/// call. Produces exactly one page.
pub struct PageIterator<'a> {
    pending: Option<PageFuture<'a>>,
}

impl PageIterator<'_> {
    /// Advance the iterator: the single page first, `None` from then on.
    ///
    /// Known provider quirk: the installation-repos listing wraps its items
    /// in a `repositories` field instead of the page's primary data field.
    /// When that field is present it is hoisted to replace the page data
    /// before the page is yielded, matching the normalization the real
    /// pagination plugin applies. The special case applies to no other
    /// listing.
    pub async fn next(&mut self) -> Option<Result<Response<Value>>> {
        let page = self.pending.take()?;
        Some(page.await.map(|mut response| {
            if let Some(repositories) = response.data.get("repositories") {
                response.data = repositories.clone();
            }
            response
        }))
    }

    /// Whether another page would follow. Always `false`.
    pub fn has_next_page(&self) -> bool {
        false
    }
}
