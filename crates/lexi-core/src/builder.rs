//! Turns a parsed result page into a [`DictionaryEntry`].

use lexi_config::language::LanguagePair;
use lexi_config::site::SiteConfig;

use crate::annotations::parse_words;
use crate::entry::{DictionaryEntry, DictionaryEntryItem, Direction};
use crate::error::LookupError;
use crate::grouper::{Cell, EntryGroup, RawRow, group_rows};
use crate::markup::{Document, NodeRef};

/// Dictionary code to look `word` up in: reverse for reference-script words
pub fn dict_code<'s>(word: &str, site: &'s SiteConfig, pair: &LanguagePair) -> &'s str {
    if pair.is_reference_script(word) {
        &site.reverse_dict
    } else {
        &site.forward_dict
    }
}

pub fn rows_from_table(table: NodeRef<'_>, site: &SiteConfig) -> Vec<RawRow> {
    let known = [
        &site.cells.source_word,
        &site.cells.target_word,
        &site.cells.source_example,
        &site.cells.target_example,
    ];

    table
        .find_by_tag("tr")
        .into_iter()
        .filter_map(|tr| {
            let marker = tr
                .classes()
                .find(|c| site.row_markers.iter().any(|m| m == c))?;

            let cells = tr
                .find_by_tag("td")
                .into_iter()
                .filter_map(|td| {
                    let class = td.classes().find(|c| known.iter().any(|k| k == c))?;
                    Some(Cell {
                        class: class.to_string(),
                        text: td.text_excluding(&site.skip_classes),
                    })
                })
                .collect();

            Some(RawRow {
                marker: marker.to_string(),
                cells,
            })
        })
        .collect()
}

fn examples(group: &EntryGroup, class: &str, audio_marker: &str) -> Vec<String> {
    group
        .cells_of(class)
        .map(str::trim)
        .filter(|t| !t.is_empty() && !t.contains(audio_marker))
        .map(str::to_string)
        .collect()
}

/// Build one sense; None when it has no example pair to show
pub fn build_item(
    group: &EntryGroup,
    site: &SiteConfig,
    pair: &LanguagePair,
) -> Option<DictionaryEntryItem> {
    let cells = &site.cells;

    let source_words = group
        .cells_of(&cells.source_word)
        .flat_map(|text| parse_words(text, pair))
        .collect();
    let target_words = group
        .cells_of(&cells.target_word)
        .flat_map(|text| parse_words(text, pair))
        .collect();

    let item = DictionaryEntryItem::new(
        source_words,
        target_words,
        examples(group, &cells.source_example, &site.audio_marker),
        examples(group, &cells.target_example, &site.audio_marker),
    );

    item.has_examples().then_some(item)
}

pub fn table_direction(table: NodeRef<'_>, site: &SiteConfig) -> Result<Direction, LookupError> {
    match table.attr(&site.direction_attr) {
        Some(code) if code == site.forward_dict => Ok(Direction::Forward),
        Some(code) if code == site.reverse_dict => Ok(Direction::Reverse),
        Some(code) => Err(LookupError::MalformedStructure(format!(
            "unknown dictionary code '{code}'"
        ))),
        None => Err(LookupError::MalformedStructure(format!(
            "table without '{}' attribute",
            site.direction_attr
        ))),
    }
}

/// Items of one word table, in the table's own direction
pub fn items_from_table(
    table: NodeRef<'_>,
    site: &SiteConfig,
    pair: &LanguagePair,
) -> Result<(Direction, Vec<DictionaryEntryItem>), LookupError> {
    let direction = table_direction(table, site)?;

    let rows = rows_from_table(table, site);
    if rows.is_empty() {
        return Err(LookupError::MalformedStructure(
            "table without sense rows".to_string(),
        ));
    }

    let items = group_rows(rows)
        .iter()
        .filter_map(|group| build_item(group, site, pair))
        .collect();

    Ok((direction, items))
}

/// Collect the items of every word table on the page.
///
/// Items of tables stored in the other direction are inverted so that sources
/// are always in the query word's language. A broken table is logged and
/// skipped; the others still count.
pub fn build_entry(
    doc: &Document,
    query_word: &str,
    direction: Direction,
    site: &SiteConfig,
    pair: &LanguagePair,
) -> DictionaryEntry {
    let mut items = Vec::new();

    for (idx, table) in doc
        .find_by_tag_class("table", &site.table_class)
        .into_iter()
        .enumerate()
    {
        match items_from_table(table, site, pair) {
            Ok((table_dir, table_items)) => {
                tracing::debug!(
                    "Table {idx} ({table_dir:?}): {} items",
                    table_items.len()
                );
                if table_dir == direction {
                    items.extend(table_items);
                } else {
                    items.extend(table_items.into_iter().map(DictionaryEntryItem::inverted));
                }
            }
            Err(e) => tracing::warn!("Skipping table {idx} for '{query_word}': {e}"),
        }
    }

    let url = site.word_url(dict_code(query_word, site, pair), query_word);

    DictionaryEntry {
        query_word: query_word.to_string(),
        direction,
        url: Some(url),
        items,
    }
}

/// Canonical (accented) spelling the site resolved the query to: the bold
/// word of the first headword row.
pub fn resolve_headword(doc: &Document, site: &SiteConfig) -> Option<String> {
    let table = doc
        .find_by_tag_class("table", &site.table_class)
        .into_iter()
        .next()?;
    let row = table
        .find_by_tag_class("tr", &site.row_markers[1])
        .into_iter()
        .next()?;
    let cell = row
        .find_by_tag_class("td", &site.cells.source_word)
        .into_iter()
        .next()?;
    let strong = cell.find_by_tag("strong").into_iter().next()?;

    let text = strong.text();
    // "αγαπάω, αγαπώ" resolves to "αγαπάω"
    let word = text.split_whitespace().next()?.trim_end_matches(',');

    (!word.is_empty()).then(|| word.to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeSet;

    use lexi_config::language::LanguageProfile;

    use super::*;

    pub(crate) fn pair() -> LanguagePair {
        LanguagePair {
            native: LanguageProfile::new("el", &["επίθ", "ουσ θηλ"]),
            reference: LanguageProfile::new("en", &["adj", "n"]),
            ..LanguagePair::default()
        }
    }

    type Row<'a> = (&'a str, &'a [(&'a str, &'a str)]);

    pub(crate) fn add_table(doc: &mut Document, dict: Option<&str>, rows: &[Row<'_>]) {
        let root = doc.root_id();
        let attrs: Vec<(&str, &str)> = match dict {
            Some(dict) => vec![("class", "WRD"), ("data-dict", dict)],
            None => vec![("class", "WRD")],
        };
        let table = doc.append_element(root, "table", &attrs);
        let header = doc.append_element(table, "tr", &[("class", "wrtopsection")]);
        doc.append_text(header, "Principal Translations");

        for (marker, cells) in rows {
            let tr = doc.append_element(table, "tr", &[("class", *marker)]);
            for (class, text) in cells.iter() {
                let td = doc.append_element(tr, "td", &[("class", *class)]);
                if *class == "FrWrd" {
                    let strong = doc.append_element(td, "strong", &[]);
                    doc.append_text(strong, text);
                } else {
                    doc.append_text(td, text);
                }
                let tip = doc.append_element(td, "span", &[("class", "tooltip")]);
                doc.append_text(tip, "hover text");
            }
        }
    }

    /// Page shaped like a lookup of "ημερήσιος"
    pub(crate) fn sample_page() -> Document {
        let mut doc = Document::new();
        add_table(
            &mut doc,
            Some("gren"),
            &[
                (
                    "even",
                    &[("FrWrd", "ημερήσιος, ημερήσια, ημερήσιο επίθ"), ("ToWrd", "daily adj")],
                ),
                ("even", &[("FrEx", "Η ημερήσια αποζημίωση είναι μικρή.")]),
                ("even", &[("ToEx", "The daily allowance is small.")]),
                ("even", &[("ToEx", "The allowance per day is small.")]),
                (
                    "odd",
                    &[("FrWrd", "ημερήσιος επίθ"), ("ToWrd", "diurnal, quotidian adj")],
                ),
                ("odd", &[("FrEx", "Τα ημερήσια ζώα κοιμούνται τη νύχτα.")]),
                ("odd", &[("ToEx", "ⓘ Αυτή η πρόταση δεν είναι μετάφραση.")]),
                ("odd", &[("ToEx", "Diurnal animals sleep at night.")]),
                ("even", &[("FrWrd", "ημερήσιος επίθ"), ("ToWrd", "day adj")]),
            ],
        );
        add_table(
            &mut doc,
            Some("engr"),
            &[
                ("even", &[("FrWrd", "daily adj"), ("ToWrd", "καθημερινός επίθ")]),
                ("even", &[("FrEx", "I read the daily news.")]),
                ("even", &[("ToEx", "Διαβάζω τα καθημερινά νέα.")]),
            ],
        );
        doc
    }

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_rows_skip_headers_and_tooltips() {
        let doc = sample_page();
        let site = SiteConfig::default();
        let table = doc.find_by_tag_class("table", "WRD")[0];

        let rows = rows_from_table(table, &site);
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].marker, "even");
        assert_eq!(
            rows[0].cells_of("ToWrd").collect::<Vec<_>>(),
            vec!["daily adj"]
        );
    }

    #[test]
    fn test_build_entry_forward() {
        let doc = sample_page();
        let site = SiteConfig::default();
        let entry = build_entry(&doc, "ημερήσιος", Direction::Forward, &site, &pair());

        assert!(entry.is_valid());
        assert_eq!(entry.url.as_deref(), Some("https://www.wordreference.com/gren/ημερήσιος"));
        // The sense without examples is dropped
        assert_eq!(entry.items.len(), 3);

        let first = &entry.items[0];
        assert!(first.source_words.contains(&"ημερήσιος".to_string()));
        assert!(first.target_words.contains(&"daily".to_string()));
        // Unbalanced examples keep the first listed translation
        assert_eq!(first.target_examples, strings(&["The daily allowance is small."]));

        // The audio note is not an example
        assert_eq!(entry.items[1].target_examples, strings(&["Diurnal animals sleep at night."]));

        let synonyms: BTreeSet<&str> = entry
            .items
            .iter()
            .flat_map(|i| i.target_words.iter().map(String::as_str))
            .collect();
        for word in ["daily", "quotidian", "diurnal"] {
            assert!(synonyms.contains(word), "missing {word}");
        }

        // The engr table was inverted into query direction
        let last = &entry.items[2];
        assert_eq!(last.source_words, strings(&["καθημερινός"]));
        assert_eq!(last.target_words, strings(&["daily"]));
        assert_eq!(last.source_examples, strings(&["Διαβάζω τα καθημερινά νέα."]));
    }

    #[test]
    fn test_build_entry_reverse_inverts_native_tables() {
        let doc = sample_page();
        let site = SiteConfig::default();
        let entry = build_entry(&doc, "daily", Direction::Reverse, &site, &pair());

        assert_eq!(entry.url.as_deref(), Some("https://www.wordreference.com/engr/daily"));
        assert_eq!(entry.items[0].source_words, strings(&["daily"]));
        assert_eq!(entry.items[2].source_words, strings(&["daily"]));
        assert_eq!(entry.items[2].target_words, strings(&["καθημερινός"]));
        for item in &entry.items {
            assert_eq!(item.source_examples.len(), item.target_examples.len());
        }
    }

    #[test]
    fn test_malformed_table_does_not_abort() {
        let mut doc = Document::new();
        add_table(&mut doc, None, &[("odd", &[("FrEx", "x")])]);
        add_table(&mut doc, Some("xxen"), &[("odd", &[("FrEx", "x")])]);
        add_table(&mut doc, Some("gren"), &[]);
        add_table(
            &mut doc,
            Some("gren"),
            &[(
                "odd",
                &[
                    ("FrWrd", "καλός επίθ"),
                    ("ToWrd", "good adj"),
                    ("FrEx", "Καλό παιδί."),
                    ("ToEx", "Good kid."),
                ],
            )],
        );

        let site = SiteConfig::default();
        let tables = doc.find_by_tag_class("table", "WRD");
        assert!(matches!(
            items_from_table(tables[0], &site, &pair()),
            Err(LookupError::MalformedStructure(_))
        ));
        assert!(items_from_table(tables[1], &site, &pair()).is_err());
        assert!(items_from_table(tables[2], &site, &pair()).is_err());

        let entry = build_entry(&doc, "καλός", Direction::Forward, &site, &pair());
        assert_eq!(entry.items.len(), 1);
        assert!(entry.is_valid());
    }

    #[test]
    fn test_empty_page_is_invalid() {
        let entry = build_entry(
            &Document::new(),
            "ασδφ",
            Direction::Forward,
            &SiteConfig::default(),
            &pair(),
        );
        assert!(entry.items.is_empty());
        assert!(!entry.is_valid());
    }

    #[test]
    fn test_resolve_headword() {
        let site = SiteConfig::default();
        assert_eq!(resolve_headword(&sample_page(), &site).as_deref(), Some("ημερήσιος"));

        let mut doc = Document::new();
        add_table(&mut doc, Some("gren"), &[("even", &[("FrWrd", "αγαπάω, αγαπώ ρ μ")])]);
        assert_eq!(resolve_headword(&doc, &site).as_deref(), Some("αγαπάω"));

        assert_eq!(resolve_headword(&Document::new(), &site), None);
    }
}
