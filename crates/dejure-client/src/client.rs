//! Client facade: the operations a tool surface needs, on top of the
//! navigator and the search decoder.

use dejure_core::codec;
use dejure_core::{
    DejureError, DejureOrg, Fetch, Navigator, ParagraphSource, ParagraphText, SearchResult,
    StatuteSummary, SubjectArea, TableOfContents, decode_search,
};
use futures::future::try_join_all;
use tracing::info;

#[cfg(feature = "http")]
use crate::{ClientConfig, FetchError, HttpFetcher};

const SEARCH_PATH: &str = "/cgi-bin/jquery-suche01.fcgi";

/// Strip surrounding whitespace and `§` markers from a paragraph number, so
/// `"§ 43e "` and `"43e"` address the same paragraph.
pub fn normalize_paragraph_number(number: &str) -> &str {
    number.trim_matches(|c: char| c.is_whitespace() || c == '§')
}

/// dejure.org client. Holds no state between calls; every operation
/// fetches what it needs.
pub struct DejureClient<F> {
    navigator: Navigator<F>,
}

#[cfg(feature = "http")]
impl DejureClient<HttpFetcher> {
    /// Client over HTTPS with the given settings.
    pub fn from_config(config: &ClientConfig) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::new(config)?;
        Ok(Self::new(fetcher, config.base_url.clone()))
    }
}

impl<F: Fetch> DejureClient<F> {
    pub fn new(fetcher: F, base_url: impl Into<String>) -> Self {
        Self {
            navigator: Navigator::with_base_url(fetcher, base_url),
        }
    }

    pub fn navigator(&self) -> &Navigator<F> {
        &self.navigator
    }

    /// Load the root page.
    pub async fn load_root(&self) -> Result<DejureOrg, DejureError> {
        self.navigator.load_root().await
    }

    /// Run a free-text search.
    pub async fn search(&self, term: &str) -> Result<SearchResult, DejureError> {
        let url = format!(
            "{}{SEARCH_PATH}?term={}&korrektur=1",
            self.navigator.base_url(),
            codec::encode(term)
        );
        let body = self.navigator.fetch(&url).await?;
        let result = decode_search(&body)?;
        info!(
            term,
            statutes = result.statutes.len(),
            legislative_acts = result.legislative_acts.len(),
            case_law = result.case_law.len(),
            "search complete"
        );
        Ok(result)
    }

    /// All subject areas with their statutes.
    pub async fn subject_areas(&self) -> Result<Vec<SubjectArea>, DejureError> {
        Ok(self.load_root().await?.subject_areas)
    }

    /// The alphabetical statute index.
    pub async fn statutes(&self) -> Result<Vec<StatuteSummary>, DejureError> {
        Ok(self.load_root().await?.statutes)
    }

    /// Table of contents of the statute with the given code.
    ///
    /// The code must match exactly one index entry (case-insensitive).
    pub async fn paragraphs(&self, code: &str) -> Result<TableOfContents, DejureError> {
        let root = self.load_root().await?;
        let statute = root.statute(code)?;
        self.navigator.load_table_of_contents(statute).await
    }

    /// Tables of contents of several statutes, fetched concurrently after a
    /// single root load. Results keep the order of `codes`; the first
    /// failure aborts the batch.
    pub async fn paragraphs_many(
        &self,
        codes: &[&str],
    ) -> Result<Vec<TableOfContents>, DejureError> {
        let root = self.load_root().await?;
        let statutes = codes
            .iter()
            .map(|code| root.statute(code))
            .collect::<Result<Vec<_>, _>>()?;
        try_join_all(
            statutes
                .into_iter()
                .map(|statute| self.navigator.load_table_of_contents(statute)),
        )
        .await
    }

    /// Text of one paragraph addressed by statute code and number.
    ///
    /// The number may carry a `§` marker and surrounding whitespace.
    pub async fn read_paragraph(
        &self,
        code: &str,
        number: &str,
    ) -> Result<ParagraphText, DejureError> {
        let source =
            ParagraphSource::detached(code.trim(), normalize_paragraph_number(number));
        self.navigator.load_paragraph_text(source).await
    }
}
