//! Plain-text rendering of dejure records.
//!
//! Each record prints as a short card: a `=== title ===` header followed by
//! indented fields. Long lists are cut after `MAX_LIST_ITEMS` with a count of
//! what was left out.

use dejure_core::{ParagraphText, SearchResult, StatuteSummary, SubjectArea, TableOfContents};

const MAX_LIST_ITEMS: usize = 25;

fn header(title: &str) {
    println!("=== {title} ===");
}

fn more(total: usize) {
    if total > MAX_LIST_ITEMS {
        println!("  ... ({} more)", total - MAX_LIST_ITEMS);
    }
}

fn statute_line(statute: &StatuteSummary) -> String {
    if statute.title.is_empty() || statute.title == statute.code {
        format!("{:<12} {}", statute.code, statute.name)
    } else {
        format!("{:<12} {}", statute.code, statute.title)
    }
}

pub fn print_subject_areas(areas: &[SubjectArea]) {
    for area in areas {
        header(&area.name);
        for statute in area.statutes.iter().take(MAX_LIST_ITEMS) {
            println!("  {}", statute_line(statute));
        }
        more(area.statutes.len());
        println!();
    }
}

pub fn print_statutes(statutes: &[StatuteSummary]) {
    for statute in statutes {
        println!("{}", statute_line(statute));
    }
}

pub fn print_tables_of_contents(tocs: &[TableOfContents]) {
    for toc in tocs {
        header(&toc.statute_code);
        if !toc.intro.is_empty() {
            println!("{}", toc.intro);
        }
        for entry in &toc.entries {
            println!("  {:<8} {}", entry.number, entry.name);
        }
        println!();
    }
}

pub fn print_paragraph_text(text: &ParagraphText) {
    header(&format!("{} § {}", text.source.code(), text.source.number()));
    if !text.intro.is_empty() {
        println!("{}", text.intro);
        println!();
    }
    if !text.heading.is_empty() {
        println!("{}", text.heading);
        println!();
    }
    println!("{}", text.content);
}

pub fn print_search_result(result: &SearchResult) {
    if result.is_empty() {
        println!("no hits");
        return;
    }

    if !result.statutes.is_empty() {
        header("Gesetze");
        for hit in result.statutes.iter().take(MAX_LIST_ITEMS) {
            println!("  {} § {}: {}", hit.code, hit.paragraph_number, hit.detail);
        }
        more(result.statutes.len());
        println!();
    }

    if !result.legislative_acts.is_empty() {
        header("Gesetzgebung");
        for hit in result.legislative_acts.iter().take(MAX_LIST_ITEMS) {
            println!("  {}: {}", hit.act_name, hit.detail);
        }
        more(result.legislative_acts.len());
        println!();
    }

    if !result.case_law.is_empty() {
        header("Rechtsprechung");
        for hit in result.case_law.iter().take(MAX_LIST_ITEMS) {
            println!("  {}: {}", hit.case_citation, hit.detail);
        }
        more(result.case_law.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statute(code: &str, name: &str, title: &str) -> StatuteSummary {
        StatuteSummary {
            code: code.into(),
            name: name.into(),
            title: title.into(),
            url: format!("https://dejure.org/gesetze/{code}"),
        }
    }

    #[test]
    fn statute_line_prefers_long_title() {
        let line = statute_line(&statute("BGB", "BGB (Bürgerliches Gesetzbuch)", "Bürgerliches Gesetzbuch"));
        assert_eq!(line, "BGB          Bürgerliches Gesetzbuch");
    }

    #[test]
    fn statute_line_falls_back_to_name() {
        let line = statute_line(&statute("HGB", "Handelsgesetzbuch", ""));
        assert_eq!(line, "HGB          Handelsgesetzbuch");
    }
}
