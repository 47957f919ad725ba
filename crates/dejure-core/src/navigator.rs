//! Lazy navigation of the dejure.org document tree.
//!
//! Root page → subject areas and statutes → table of contents → paragraph
//! text. Each step fetches its own page when called and nothing is kept
//! between calls, so loading the same statute twice fetches it twice.

use tracing::{debug, info};

use crate::markup;
use crate::model::{DejureOrg, ParagraphSource, ParagraphText, StatuteSummary, TableOfContents};
use crate::{DejureError, Fetch};

pub const DEFAULT_BASE_URL: &str = "https://dejure.org";

/// Walks the document tree through a [`Fetch`] implementation.
pub struct Navigator<F> {
    fetcher: F,
    base_url: String,
}

impl<F: Fetch> Navigator<F> {
    /// Navigator for the live site.
    pub fn new(fetcher: F) -> Self {
        Self::with_base_url(fetcher, DEFAULT_BASE_URL)
    }

    /// `base_url` should be like `https://dejure.org` (a trailing slash is dropped).
    pub fn with_base_url(fetcher: F, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch a page, wrapping any failure as [`DejureError::Transport`].
    pub async fn fetch(&self, url: &str) -> Result<String, DejureError> {
        info!(url = %url, "fetching page");
        self.fetcher.fetch(url).await.map_err(DejureError::transport)
    }

    /// Load the root page with its subject areas and alphabetical index.
    pub async fn load_root(&self) -> Result<DejureOrg, DejureError> {
        let body = self.fetch(&format!("{}/", self.base_url)).await?;
        let root = markup::parse_root(&body, &self.base_url);
        debug!(
            subject_areas = root.subject_areas.len(),
            statutes = root.statutes.len(),
            "parsed root page"
        );
        Ok(root)
    }

    /// Load the table of contents of `statute` from its own page.
    pub async fn load_table_of_contents(
        &self,
        statute: &StatuteSummary,
    ) -> Result<TableOfContents, DejureError> {
        let body = self.fetch(&statute.url).await?;
        let toc = markup::parse_table_of_contents(&body, &statute.code, &self.base_url);
        debug!(code = %statute.code, entries = toc.entries.len(), "parsed table of contents");
        Ok(toc)
    }

    /// Load the text of a paragraph, either from a table-of-contents entry or
    /// from a bare (code, number) pair.
    pub async fn load_paragraph_text(
        &self,
        source: impl Into<ParagraphSource>,
    ) -> Result<ParagraphText, DejureError> {
        let source = source.into();
        let body = self.fetch(&source.url(&self.base_url)).await?;
        Ok(markup::parse_paragraph_text(&body, source))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::markup::fixtures::{BRAO, BRAO_43E, ROOT};

    #[derive(Debug, thiserror::Error)]
    #[error("no fixture for {0}")]
    struct Missing(String);

    /// Serves captured pages by URL and records every request.
    #[derive(Default)]
    struct FixtureFetch {
        pages: HashMap<String, String>,
        requests: Mutex<Vec<String>>,
    }

    impl FixtureFetch {
        fn with(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetch for FixtureFetch {
        type Error = Missing;

        async fn fetch(&self, url: &str) -> Result<String, Missing> {
            self.requests.lock().unwrap().push(url.to_string());
            self.pages.get(url).cloned().ok_or_else(|| Missing(url.to_string()))
        }
    }

    fn site() -> Navigator<FixtureFetch> {
        let fetch = FixtureFetch::default()
            .with("https://dejure.org/", ROOT)
            .with("https://dejure.org/gesetze/BRAO", BRAO)
            .with("https://dejure.org/gesetze/BRAO/43e.html", BRAO_43E);
        Navigator::new(fetch)
    }

    #[tokio::test]
    async fn root_with_one_subject_area() {
        let page = r#"<html><body>
            <div class="gesetzesliste"><h3>Bürgerliches Recht</h3>
            <a href="/gesetze/BGB">Bürgerliches Gesetzbuch</a></div>
            </body></html>"#;
        let nav = Navigator::new(FixtureFetch::default().with("https://dejure.org/", page));

        let root = nav.load_root().await.unwrap();
        assert_eq!(root.subject_areas.len(), 1);
        assert_eq!(root.subject_areas[0].name, "Bürgerliches Recht");
        assert_eq!(root.subject_areas[0].statutes.len(), 1);
        assert_eq!(root.subject_areas[0].statutes[0].code, "BGB");
    }

    #[tokio::test]
    async fn walk_from_root_to_paragraph_text() {
        let nav = site();
        let root = nav.load_root().await.unwrap();
        let brao = root.statute("BRAO").unwrap();

        let toc = nav.load_table_of_contents(brao).await.unwrap();
        let entry = toc.entries.iter().find(|e| e.number == "43e").unwrap().clone();

        let text = nav.load_paragraph_text(entry.clone()).await.unwrap();
        assert_eq!(text.source, ParagraphSource::Owned { entry });
        assert!(text.content.ends_with("bleiben unberührt."));
    }

    #[tokio::test]
    async fn detached_paragraph_text_matches_owned() {
        let nav = site();
        let root = nav.load_root().await.unwrap();
        let toc = nav
            .load_table_of_contents(root.statute("brao").unwrap())
            .await
            .unwrap();
        let entry = toc.entries[1].clone();

        let owned = nav.load_paragraph_text(entry).await.unwrap();
        let detached = nav
            .load_paragraph_text(ParagraphSource::detached("BRAO", "43e"))
            .await
            .unwrap();
        assert_eq!(owned.intro, detached.intro);
        assert_eq!(owned.heading, detached.heading);
        assert_eq!(owned.content, detached.content);
    }

    #[tokio::test]
    async fn every_load_fetches_again() {
        let nav = site();
        let root = nav.load_root().await.unwrap();
        let brao = root.statute("BRAO").unwrap();

        let first = nav.load_table_of_contents(brao).await.unwrap();
        let second = nav.load_table_of_contents(brao).await.unwrap();
        assert_eq!(first, second);

        let toc_requests = nav
            .fetcher()
            .requests()
            .iter()
            .filter(|u| *u == "https://dejure.org/gesetze/BRAO")
            .count();
        assert_eq!(toc_requests, 2);
    }

    #[tokio::test]
    async fn transport_errors_keep_their_source() {
        let nav = site();
        let err = nav
            .load_paragraph_text(ParagraphSource::detached("BGB", "1"))
            .await
            .unwrap_err();
        match err {
            DejureError::Transport(source) => {
                let missing = source.downcast_ref::<Missing>().unwrap();
                assert_eq!(missing.0, "https://dejure.org/gesetze/BGB/1.html");
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let nav = Navigator::with_base_url(FixtureFetch::default(), "http://localhost:8080/");
        assert_eq!(nav.base_url(), "http://localhost:8080");
    }
}
