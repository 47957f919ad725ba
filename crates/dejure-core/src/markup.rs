//! Extraction of records from dejure.org markup.
//!
//! Every function here is pure: it takes a page body that has already been
//! fetched and returns records. A block or list that is missing from the
//! markup comes back as an empty string or empty list.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::model::{
    DejureOrg, ParagraphEntry, ParagraphSource, ParagraphText, StatuteSummary, SubjectArea,
    TableOfContents,
};

/// Path prefix of every statute link.
pub const STATUTE_PATH: &str = "/gesetze";

/// Page-file suffix of paragraph links.
const PAGE_SUFFIX: &str = ".html";

/// Anchor class dejure.org uses for "see also" links next to an entry.
const CROSS_REFERENCE_CLASS: &str = "zu_paragraph";

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("constant selector must parse")
}

static STATUTE_LIST: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"div[class*="gesetzesliste"]"#));
static HEADING: LazyLock<Selector> = LazyLock::new(|| selector("h3"));
static STATUTE_ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"a[href^="/gesetze/"]"#));
static ALPHABETICAL: LazyLock<Selector> = LazyLock::new(|| selector("div#alphabetisch"));
static LIST_ITEM: LazyLock<Selector> = LazyLock::new(|| selector("li"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| selector("p"));
static HEAD_OF_STATUTE: LazyLock<Selector> = LazyLock::new(|| selector("div#headgesetz"));
static STATUTE_TEXT: LazyLock<Selector> = LazyLock::new(|| selector("div#gesetzestext"));

/// Rendered text of an element, trimmed at both ends only.
fn text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of the first element matching `selector`, or empty.
fn first_text(doc: &Html, selector: &Selector) -> String {
    doc.select(selector).next().map(text).unwrap_or_default()
}

fn href(element: ElementRef<'_>) -> Option<&str> {
    element.value().attr("href")
}

/// Turn a site-relative link into an absolute URL.
pub fn absolute_url(base_url: &str, href: &str) -> String {
    let href = href.trim();
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        href.trim_start_matches('/')
    )
}

/// Short code from a statute link: `/gesetze/BGB` → `BGB`.
pub fn statute_code(href: &str) -> String {
    let href = href.trim();
    href.strip_prefix(STATUTE_PATH)
        .unwrap_or(href)
        .trim_matches(|c: char| c.is_whitespace() || c == '/')
        .to_string()
}

/// Paragraph number from an entry link: `/gesetze/BRAO/43e.html` → `43e`.
///
/// `code` is the statute the link belongs to.
pub fn paragraph_number(href: &str, code: &str) -> String {
    let prefix = format!("{STATUTE_PATH}/{code}/");
    let href = href.trim();
    let rest = href.strip_prefix(prefix.as_str()).unwrap_or(href);
    rest.strip_suffix(PAGE_SUFFIX).unwrap_or(rest).trim().to_string()
}

/// Parse the root page: subject areas and the alphabetical statute index.
pub fn parse_root(html: &str, base_url: &str) -> DejureOrg {
    let doc = Html::parse_document(html);
    DejureOrg {
        subject_areas: subject_areas(&doc, base_url),
        statutes: alphabetical_index(&doc, base_url),
    }
}

fn subject_areas(doc: &Html, base_url: &str) -> Vec<SubjectArea> {
    doc.select(&STATUTE_LIST)
        .map(|block| SubjectArea {
            name: block.select(&HEADING).next().map(text).unwrap_or_default(),
            statutes: block
                .select(&STATUTE_ANCHOR)
                .filter_map(|anchor| {
                    let link = href(anchor)?;
                    let code = statute_code(link);
                    (!code.is_empty()).then(|| StatuteSummary {
                        code,
                        name: text(anchor),
                        title: String::new(),
                        url: absolute_url(base_url, link),
                    })
                })
                .collect(),
        })
        .collect()
}

fn alphabetical_index(doc: &Html, base_url: &str) -> Vec<StatuteSummary> {
    doc.select(&ALPHABETICAL)
        .flat_map(|block| block.select(&LIST_ITEM))
        .map(|item| {
            let link = item.select(&ANCHOR).next().and_then(href);
            StatuteSummary {
                code: link.map(statute_code).unwrap_or_default(),
                name: text(item),
                title: long_title(item),
                url: link
                    .map(|l| absolute_url(base_url, l))
                    .unwrap_or_default(),
            }
        })
        .collect()
}

/// The item's own text nodes, without the anchor text: `AAG (Gesetz über …)`
/// yields `Gesetz über …`.
fn long_title(item: ElementRef<'_>) -> String {
    let own: String = item
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|t| &**t)
        .collect();
    own.trim_matches(|c: char| c.is_whitespace() || c == '(' || c == ')')
        .to_string()
}

/// Parse a statute page into its table of contents.
///
/// Only `p` blocks holding a link into this statute count as entries;
/// cross-reference links (`zu_paragraph`) and links into other statutes
/// are ignored.
pub fn parse_table_of_contents(
    html: &str,
    statute_code: &str,
    base_url: &str,
) -> TableOfContents {
    let doc = Html::parse_document(html);
    let prefix = format!("{STATUTE_PATH}/{statute_code}/");

    let entries = doc
        .select(&PARAGRAPH)
        .filter_map(|block| {
            let anchor = block.select(&ANCHOR).find(|a| {
                href(*a).is_some_and(|h| h.starts_with(prefix.as_str()))
                    && a.value().attr("class") != Some(CROSS_REFERENCE_CLASS)
            })?;
            let link = href(anchor)?;
            Some(ParagraphEntry {
                statute_code: statute_code.to_string(),
                number: paragraph_number(link, statute_code),
                name: text(block),
                url: absolute_url(base_url, link),
            })
        })
        .collect();

    TableOfContents {
        statute_code: statute_code.to_string(),
        intro: first_text(&doc, &HEAD_OF_STATUTE),
        entries,
    }
}

/// The `h1` closest before the statute-text block, at the same level.
fn paragraph_heading(doc: &Html) -> String {
    doc.select(&STATUTE_TEXT)
        .next()
        .and_then(|body| {
            body.prev_siblings()
                .filter_map(ElementRef::wrap)
                .find(|e| e.value().name() == "h1")
        })
        .map(text)
        .unwrap_or_default()
}

/// Parse a paragraph page. `source` records how the page was addressed.
pub fn parse_paragraph_text(html: &str, source: ParagraphSource) -> ParagraphText {
    let doc = Html::parse_document(html);
    ParagraphText {
        source,
        intro: first_text(&doc, &HEAD_OF_STATUTE),
        heading: paragraph_heading(&doc),
        content: first_text(&doc, &STATUTE_TEXT),
    }
}
