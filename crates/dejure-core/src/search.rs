//! Decoder for the JSON envelope returned by the search endpoint.
//!
//! Each entry in `Treffer` carries a percent-escaped `Value` that unescapes
//! to a colon-delimited token. The first field's prefix says what kind of
//! hit the token is:
//!
//! | prefix                 | hit                                   |
//! |------------------------|---------------------------------------|
//! | `##<int>`              | legislative act                       |
//! | `#!<int>`              | case law                              |
//! | `#~<code>`             | statute paragraph                     |
//! | `#<int>`               | case law (legacy numbering)           |
//! | `#<code>`              | statute paragraph                     |
//!
//! Rules are tried top to bottom and the first match wins, so a numeric
//! remainder after a single `#` is case law and anything else is a statute.
//! Tokens with fewer than three fields or no matching rule are dropped.

use serde::Deserialize;
use tracing::debug;

use crate::codec::{decode, strip_spans};
use crate::model::{CaseLawHit, LegislativeActHit, SearchResult, StatuteHit};
use crate::DejureError;

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "Treffer", default)]
    treffer: Vec<Entry>,
}

#[derive(Deserialize)]
struct Entry {
    #[serde(rename = "Value", default)]
    value: Option<String>,
}

enum Hit {
    Statute(StatuteHit),
    LegislativeAct(LegislativeActHit),
    CaseLaw(CaseLawHit),
}

/// One classification rule. `classify` gets the first field and all fields
/// (at least three) and returns a hit when the prefix applies.
struct Rule {
    name: &'static str,
    classify: fn(&str, &[&str]) -> Option<Hit>,
}

const RULES: [Rule; 5] = [
    Rule {
        name: "legislative_act",
        classify: |head, parts| {
            let number = parse_number(head.strip_prefix("##")?)?;
            Some(Hit::LegislativeAct(LegislativeActHit {
                number,
                act_name: strip_spans(&decode(parts[1])),
                detail: decode(parts[2]),
            }))
        },
    },
    Rule {
        name: "case_law",
        classify: |head, parts| {
            let number = parse_number(head.strip_prefix("#!")?)?;
            Some(case_law(number, parts))
        },
    },
    Rule {
        name: "statute",
        classify: |head, parts| Some(statute(head.strip_prefix("#~")?, parts)),
    },
    Rule {
        name: "case_law_legacy",
        classify: |head, parts| {
            let number = parse_number(head.strip_prefix('#')?)?;
            Some(case_law(number, parts))
        },
    },
    Rule {
        name: "statute_legacy",
        classify: |head, parts| Some(statute(head.strip_prefix('#')?, parts)),
    },
];

fn parse_number(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}

fn case_law(number: i64, parts: &[&str]) -> Hit {
    Hit::CaseLaw(CaseLawHit {
        number,
        case_citation: decode(parts[1]),
        detail: decode(parts[2]),
    })
}

fn statute(code: &str, parts: &[&str]) -> Hit {
    Hit::Statute(StatuteHit {
        code: decode(code),
        paragraph_number: decode(parts[1]),
        detail: decode(parts[2]),
    })
}

/// Classify one raw `Value`. `None` means the token is dropped.
fn classify(raw: &str) -> Option<Hit> {
    let payload = decode(raw);
    let parts: Vec<&str> = payload.split(':').filter(|p| !p.is_empty()).collect();
    if parts.len() < 3 {
        debug!(token = %payload, fields = parts.len(), "dropping short search token");
        return None;
    }

    let found = RULES
        .iter()
        .find_map(|rule| (rule.classify)(parts[0], &parts).map(|hit| (rule.name, hit)));
    match found {
        Some((rule, hit)) => {
            debug!(rule, "classified search token");
            Some(hit)
        }
        None => {
            debug!(token = %payload, "dropping unrecognised search token");
            None
        }
    }
}

/// Decode a search response body into hits, keeping the envelope order
/// within each kind.
pub fn decode_search(json: &str) -> Result<SearchResult, DejureError> {
    let envelope: Envelope = serde_json::from_str(json)?;
    let mut result = SearchResult::default();

    for raw in envelope.treffer.iter().filter_map(|e| e.value.as_deref()) {
        match classify(raw) {
            Some(Hit::Statute(hit)) => result.statutes.push(hit),
            Some(Hit::LegislativeAct(hit)) => result.legislative_acts.push(hit),
            Some(Hit::CaseLaw(hit)) => result.case_law.push(hit),
            None => {}
        }
    }

    debug!(
        statutes = result.statutes.len(),
        legislative_acts = result.legislative_acts.len(),
        case_law = result.case_law.len(),
        "decoded search envelope"
    );
    Ok(result)
}
