//! Records produced by reading dejure.org pages and search responses.
//!
//! Every record is a plain value built once from fetched content. Nothing
//! here holds a connection or refers back to the page it came from.

use serde::{Deserialize, Serialize};

use crate::DejureError;

/// Everything the root page lists: the subject areas and the alphabetical
/// statute index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DejureOrg {
    pub subject_areas: Vec<SubjectArea>,
    pub statutes: Vec<StatuteSummary>,
}

impl DejureOrg {
    /// Find the one statute in the alphabetical index with the given code.
    ///
    /// Codes are compared case-insensitively after trimming. Zero or several
    /// matches fail with [`DejureError::AmbiguousOrNotFound`].
    pub fn statute(&self, code: &str) -> Result<&StatuteSummary, DejureError> {
        let wanted = code.trim().to_lowercase();
        let matches: Vec<&StatuteSummary> = self
            .statutes
            .iter()
            .filter(|s| s.code.to_lowercase() == wanted)
            .collect();

        match matches.as_slice() {
            [statute] => Ok(*statute),
            _ => Err(DejureError::AmbiguousOrNotFound {
                code: code.to_string(),
                matches: matches.len(),
            }),
        }
    }
}

/// A field of law (Rechtsgebiet) and the statutes grouped under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectArea {
    pub name: String,
    pub statutes: Vec<StatuteSummary>,
}

/// A statute as linked from the root page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatuteSummary {
    /// Short code (Kürzel), taken from the link target.
    pub code: String,
    pub name: String,
    /// Long title. Only the alphabetical index carries one; empty otherwise.
    pub title: String,
    pub url: String,
}

/// The paragraph index of one statute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOfContents {
    pub statute_code: String,
    pub intro: String,
    pub entries: Vec<ParagraphEntry>,
}

/// One section listed in a table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphEntry {
    pub statute_code: String,
    /// Paragraph number from the link target, e.g. `"43e"`.
    pub number: String,
    pub name: String,
    pub url: String,
}

/// Where a paragraph text was requested from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParagraphSource {
    /// Reached by walking a table of contents.
    Owned { entry: ParagraphEntry },
    /// Addressed directly by statute code and paragraph number.
    Detached { code: String, number: String },
}

impl ParagraphSource {
    pub fn detached(code: impl Into<String>, number: impl Into<String>) -> Self {
        Self::Detached {
            code: code.into(),
            number: number.into(),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Owned { entry } => &entry.statute_code,
            Self::Detached { code, .. } => code,
        }
    }

    pub fn number(&self) -> &str {
        match self {
            Self::Owned { entry } => &entry.number,
            Self::Detached { number, .. } => number,
        }
    }

    /// `{base}/gesetze/{code}/{number}.html`
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/gesetze/{}/{}.html",
            base_url.trim_end_matches('/'),
            self.code(),
            self.number()
        )
    }
}

impl From<ParagraphEntry> for ParagraphSource {
    fn from(entry: ParagraphEntry) -> Self {
        Self::Owned { entry }
    }
}

/// Full text of one paragraph page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphText {
    pub source: ParagraphSource,
    pub intro: String,
    pub heading: String,
    pub content: String,
}

/// A search hit pointing at a statute paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatuteHit {
    pub code: String,
    pub paragraph_number: String,
    pub detail: String,
}

/// A search hit pointing at an enactment or amendment (Gesetzgebung).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegislativeActHit {
    pub number: i64,
    pub act_name: String,
    pub detail: String,
}

/// A search hit pointing at a court decision (Rechtsprechung).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseLawHit {
    pub number: i64,
    pub case_citation: String,
    pub detail: String,
}

/// Decoded search response, one ordered list per hit kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub statutes: Vec<StatuteHit>,
    pub legislative_acts: Vec<LegislativeActHit>,
    pub case_law: Vec<CaseLawHit>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.statutes.is_empty() && self.legislative_acts.is_empty() && self.case_law.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(code: &str) -> StatuteSummary {
        StatuteSummary {
            code: code.into(),
            name: code.into(),
            title: String::new(),
            url: format!("https://dejure.org/gesetze/{code}"),
        }
    }

    fn index(codes: &[&str]) -> DejureOrg {
        DejureOrg {
            subject_areas: vec![],
            statutes: codes.iter().map(|c| summary(c)).collect(),
        }
    }

    #[test]
    fn statute_lookup_exactly_one() {
        let root = index(&["AAG", "BGB", "BRAO"]);
        assert_eq!(root.statute("BRAO").unwrap().code, "BRAO");
    }

    #[test]
    fn statute_lookup_ignores_case_and_whitespace() {
        let root = index(&["BGB", "GüKG"]);
        assert_eq!(root.statute(" bgb ").unwrap().code, "BGB");
        assert_eq!(root.statute("GÜKG").unwrap().code, "GüKG");
    }

    #[test]
    fn statute_lookup_not_found() {
        let root = index(&["BGB"]);
        match root.statute("HGB") {
            Err(DejureError::AmbiguousOrNotFound { code, matches }) => {
                assert_eq!(code, "HGB");
                assert_eq!(matches, 0);
            }
            other => panic!("expected AmbiguousOrNotFound, got {other:?}"),
        }
    }

    #[test]
    fn statute_lookup_ambiguous() {
        let root = index(&["BGB", "bgb", "BGB"]);
        match root.statute("BGB") {
            Err(DejureError::AmbiguousOrNotFound { matches, .. }) => assert_eq!(matches, 3),
            other => panic!("expected AmbiguousOrNotFound, got {other:?}"),
        }
    }

    #[test]
    fn owned_and_detached_sources_build_the_same_url() {
        let entry = ParagraphEntry {
            statute_code: "BRAO".into(),
            number: "43e".into(),
            name: "§ 43e Inanspruchnahme von Dienstleistungen".into(),
            url: "https://dejure.org/gesetze/BRAO/43e.html".into(),
        };
        let owned = ParagraphSource::from(entry);
        let detached = ParagraphSource::detached("BRAO", "43e");
        assert_eq!(owned.url("https://dejure.org/"), detached.url("https://dejure.org"));
        assert_eq!(
            detached.url("https://dejure.org"),
            "https://dejure.org/gesetze/BRAO/43e.html"
        );
    }

    #[test]
    fn paragraph_source_json_is_tagged() {
        let json = serde_json::to_string(&ParagraphSource::detached("BGB", "1")).unwrap();
        assert_eq!(json, r#"{"kind":"detached","code":"BGB","number":"1"}"#);
    }

    #[test]
    fn empty_search_result() {
        assert!(SearchResult::default().is_empty());
    }
}
