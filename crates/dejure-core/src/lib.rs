//! Core of dejure: statute records, the percent/Latin-1 codec, the search
//! envelope decoder and lazy navigation of the dejure.org document tree.

pub mod codec;
mod error;
pub mod fetch;
pub mod markup;
pub mod model;
pub mod navigator;
pub mod search;

pub use error::DejureError;
pub use fetch::Fetch;
pub use model::{
    CaseLawHit, DejureOrg, LegislativeActHit, ParagraphEntry, ParagraphSource, ParagraphText,
    SearchResult, StatuteHit, StatuteSummary, SubjectArea, TableOfContents,
};
pub use navigator::{DEFAULT_BASE_URL, Navigator};
pub use search::decode_search;
