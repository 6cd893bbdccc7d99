//! The column rule table.
//!
//! Maps each of the 26 column slots to its display name, its [`Rule`] and the
//! message shown when that rule fails. The table is indexed by
//! [`Column::index`], so every slot has exactly one definition.

use super::column::{Column, COLUMN_COUNT};
use super::rules::Rule;

const MISSING_MANDATORY: &str = "Missing mandatory field";
const BAD_DATE: &str = "Missing mandatory date field, or field is incorrectly formatted";
const MISSING_FOR_ARTICLES: &str = "Missing field for articles";

/// Static description of one column slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDefinition {
    /// Human-readable label.
    pub name: &'static str,
    /// Rule applied to the column's value.
    pub rule: Rule,
    /// Message shown when the rule fails. Empty for trusted columns.
    pub error: &'static str,
}

impl ColumnDefinition {
    const fn checked(name: &'static str, rule: Rule, error: &'static str) -> Self {
        Self { name, rule, error }
    }

    const fn trusted(name: &'static str) -> Self {
        Self {
            name,
            rule: Rule::Trust,
            error: "",
        }
    }

    /// Render the failure message for a given cell value.
    pub fn failure_message(&self, value: &str) -> String {
        format!("{} value: '{}' error: {}", self.name, value, self.error)
    }
}

static DEFINITIONS: [ColumnDefinition; COLUMN_COUNT] = [
    ColumnDefinition::checked("Course Code", Rule::Mandatory, MISSING_MANDATORY),
    ColumnDefinition::checked("Course Description", Rule::Mandatory, MISSING_MANDATORY),
    ColumnDefinition::checked("Student numbers", Rule::Mandatory, MISSING_MANDATORY),
    ColumnDefinition::checked("Request start date", Rule::Date, BAD_DATE),
    ColumnDefinition::checked("Request end date", Rule::Date, BAD_DATE),
    ColumnDefinition::checked("Requester Name", Rule::Mandatory, MISSING_MANDATORY),
    ColumnDefinition::checked("Requester email", Rule::Mandatory, MISSING_MANDATORY),
    ColumnDefinition::checked(
        "Section Type (chapter, article, page range)",
        Rule::SectionType,
        "Field should be 'C', 'Chapter', 'P', 'Page Range', 'Article' or 'A'",
    ),
    ColumnDefinition::trusted("ISBN / ISSN"),
    ColumnDefinition::trusted("DOI"),
    ColumnDefinition::checked("Title of Book/Journal", Rule::Mandatory, MISSING_MANDATORY),
    ColumnDefinition::trusted("Author of Book"),
    ColumnDefinition::checked("Journal Year", Rule::JournalYear, MISSING_FOR_ARTICLES),
    ColumnDefinition::checked("Volume Number", Rule::JournalVolume, MISSING_FOR_ARTICLES),
    ColumnDefinition::trusted("Issue"),
    ColumnDefinition::checked("Extract title", Rule::ExtractTitle, MISSING_MANDATORY),
    ColumnDefinition::checked("Author of Extract", Rule::AuthorOfExtract, MISSING_MANDATORY),
    ColumnDefinition::checked("Publisher", Rule::Publisher, MISSING_MANDATORY),
    ColumnDefinition::trusted("Place of publication"),
    ColumnDefinition::checked(
        "Page No. From",
        Rule::PageNumber,
        "Starting page number either missing mandatory field or contains a page range",
    ),
    ColumnDefinition::checked(
        "Page No. To",
        Rule::PageNumber,
        "Ending page number either missing mandatory field or contains a page range",
    ),
    ColumnDefinition::checked("Source", Rule::Source, "Field should be 'A', 'C' or 'D'"),
    ColumnDefinition::checked("FILENAME", Rule::Mandatory, MISSING_MANDATORY),
    ColumnDefinition::trusted("LIST ITEM URL"),
    ColumnDefinition::trusted("Local URL/Location"),
    ColumnDefinition::checked(
        "Contains incidental artwork",
        Rule::IncidentalArtwork,
        "Must be a value of either 'y' or 'n'",
    ),
];

/// Look up the definition for a column.
pub fn definition(column: Column) -> &'static ColumnDefinition {
    &DEFINITIONS[column.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mandatory_columns_use_mandatory_rule() {
        for column in [
            Column::A,
            Column::B,
            Column::C,
            Column::F,
            Column::G,
            Column::K,
            Column::W,
        ] {
            assert_eq!(definition(column).rule, Rule::Mandatory, "{column}");
        }
    }

    #[test]
    fn untracked_columns_are_trusted() {
        for column in [
            Column::I,
            Column::J,
            Column::L,
            Column::O,
            Column::S,
            Column::X,
            Column::Y,
        ] {
            let def = definition(column);
            assert_eq!(def.rule, Rule::Trust, "{column}");
            assert!(def.error.is_empty());
        }
    }

    #[test]
    fn checked_columns_have_messages() {
        for column in Column::ALL {
            let def = definition(column);
            if def.rule != Rule::Trust {
                assert!(!def.error.is_empty(), "{column} has no error message");
            }
        }
    }

    #[test]
    fn names_line_up_with_slots() {
        assert_eq!(definition(Column::A).name, "Course Code");
        assert_eq!(definition(Column::Q).name, "Author of Extract");
        assert_eq!(definition(Column::Z).name, "Contains incidental artwork");
    }

    #[test]
    fn failure_message_includes_name_value_and_error() {
        let msg = definition(Column::D).failure_message("01/01/2015");
        assert_eq!(
            msg,
            "Request start date value: '01/01/2015' error: \
             Missing mandatory date field, or field is incorrectly formatted"
        );
    }
}
