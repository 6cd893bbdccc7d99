//! Cell validation rules.
//!
//! Each [`Rule`] is a pure function of a cell's own value and a snapshot of
//! the whole row, so cross-field rules (journal metadata, article vs. book
//! sections) read their sibling columns straight from the snapshot.

use std::sync::LazyLock;

use regex::Regex;

use super::cells::Cells;
use super::column::Column;

// e.g. 2015/01/31, ASCII digits only. Anchored at the start only, trailing
// text is tolerated.
static DATE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}/[0-9]{2}/[0-9]{2}").unwrap());

// One or more ASCII digits for the whole value.
static PAGE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

const SECTION_TYPES: &[&str] = &["a", "c", "p", "article", "chapter", "page range"];
const ARTICLE_TYPES: &[&str] = &["a", "article"];
const EXTRACT_TYPES: &[&str] = &["a", "article", "c", "chapter"];
const SOURCES: &[&str] = &["A", "B", "C", "D"];
const ARTWORK_FLAGS: &[&str] = &["y", "n"];

/// A validation rule attached to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Any value is accepted.
    Trust,
    /// Value must not be blank.
    Mandatory,
    /// Value must be present and formatted `YYYY/MM/DD`.
    Date,
    /// Value must name a known section type, ignoring case.
    SectionType,
    /// Journal year, volume (N) or issue (O) must be present.
    JournalYear,
    /// Journal volume, year (M) or issue (O) must be present.
    JournalVolume,
    /// Mandatory for articles and chapters.
    ExtractTitle,
    /// Mandatory for articles; otherwise required unless the book author (L) is set.
    AuthorOfExtract,
    /// Mandatory for everything except articles.
    Publisher,
    /// Value must be a plain page number, not a range.
    PageNumber,
    /// Value must be one of `A`, `B`, `C` or `D`.
    Source,
    /// Optional, but when present must be `y` or `n`.
    IncidentalArtwork,
}

impl Rule {
    /// Short identifier used in debug logging.
    pub fn id(self) -> &'static str {
        match self {
            Rule::Trust => "trust",
            Rule::Mandatory => "mandatory",
            Rule::Date => "date",
            Rule::SectionType => "section-type",
            Rule::JournalYear => "journal-year",
            Rule::JournalVolume => "journal-volume",
            Rule::ExtractTitle => "extract-title",
            Rule::AuthorOfExtract => "author-of-extract",
            Rule::Publisher => "publisher",
            Rule::PageNumber => "page-number",
            Rule::Source => "source",
            Rule::IncidentalArtwork => "incidental-artwork",
        }
    }

    /// Check `value` against this rule, reading sibling columns from `row`.
    pub fn check(self, value: &str, row: &Cells) -> bool {
        let blank = value.trim().is_empty();
        match self {
            Rule::Trust => true,
            Rule::Mandatory => !blank,
            Rule::Date => !blank && DATE_FORMAT.is_match(value.trim()),
            Rule::SectionType => SECTION_TYPES.contains(&value.to_lowercase().as_str()),
            Rule::JournalYear => {
                !(blank && row.is_blank(Column::N) && row.is_blank(Column::O))
            }
            Rule::JournalVolume => {
                !(blank && row.is_blank(Column::M) && row.is_blank(Column::O))
            }
            Rule::ExtractTitle => !section_is(row, EXTRACT_TYPES) || !blank,
            Rule::AuthorOfExtract => {
                if section_is(row, ARTICLE_TYPES) {
                    !blank
                } else {
                    !(blank && row.is_blank(Column::L))
                }
            }
            Rule::Publisher => section_is(row, ARTICLE_TYPES) || !blank,
            Rule::PageNumber => PAGE_NUMBER.is_match(value),
            Rule::Source => SOURCES.contains(&value.trim()),
            Rule::IncidentalArtwork => blank || ARTWORK_FLAGS.contains(&value),
        }
    }
}

fn section_is(row: &Cells, kinds: &[&str]) -> bool {
    kinds.contains(&row.get(Column::H).to_lowercase().as_str())
}

/// Whether a value already satisfies the date rule's format.
pub fn is_formatted_date(value: &str) -> bool {
    DATE_FORMAT.is_match(value.trim())
}
