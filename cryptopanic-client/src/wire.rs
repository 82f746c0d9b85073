//! Response shapes of the posts endpoint. Only the fields the relay renders are read.

use news_core::{NewsBatch, NewsItem};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct PostsResponse {
    pub results: Vec<Post>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Post {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source: Option<PostSource>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostSource {
    #[serde(default)]
    pub title: Option<String>,
}

impl From<Post> for NewsItem {
    fn from(post: Post) -> Self {
        NewsItem::new(post.title, post.url, post.source.and_then(|s| s.title))
    }
}

impl PostsResponse {
    /// Keeps the first `limit` posts, then converts; posts past the limit are never materialized.
    pub fn into_batch(self, limit: usize) -> NewsBatch {
        let items = self.results.into_iter().take(limit).map(NewsItem::from).collect();
        NewsBatch::truncated(items, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_become_placeholders() {
        let response: PostsResponse =
            serde_json::from_str(r#"{"results":[{}, {"title":"t","source":{}}]}"#).unwrap();
        let batch = response.into_batch(5);
        assert_eq!(batch.items()[0], NewsItem::default());
        assert_eq!(batch.items()[1].title, "t");
        assert_eq!(batch.items()[1].url, "#");
        assert_eq!(batch.items()[1].source_name, "Unknown");
    }

    #[test]
    fn test_null_fields_become_placeholders() {
        let response: PostsResponse =
            serde_json::from_str(r#"{"results":[{"title":null,"url":null,"source":null}]}"#)
                .unwrap();
        assert_eq!(response.into_batch(3).items()[0], NewsItem::default());
    }

    #[test]
    fn test_missing_results_is_malformed() {
        assert!(serde_json::from_str::<PostsResponse>(r#"{"count": 0}"#).is_err());
    }
}
