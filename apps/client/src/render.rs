//! Pure mapping from [`ViewState`] to a displayable [`View`].

use std::fmt;

use crate::models::Record;
use crate::state::ViewState;

pub const TITLE: &str = "CVInsight Resume Parser";
pub const RESPONSE_LABEL: &str = "Parsed Output:";
pub const RECORDS_HEADING: &str = "Parsed Resumes from Database";
pub const EMPTY_PLACEHOLDER: &str = "No resumes found in the database.";

#[derive(Debug, Clone, PartialEq)]
pub struct RecordCard {
    pub id: i64,
    pub heading: String,
    pub fields: Vec<(&'static str, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub selected_file: Option<String>,
    /// Present only once an upload has answered.
    pub response: Option<String>,
    pub cards: Vec<RecordCard>,
    /// Shown instead of cards when the list is empty.
    pub placeholder: Option<&'static str>,
}

pub fn render(state: &ViewState) -> View {
    let cards: Vec<RecordCard> = state.records.iter().map(record_card).collect();
    let placeholder = cards.is_empty().then_some(EMPTY_PLACEHOLDER);

    View {
        selected_file: state.file.as_ref().map(|f| f.name.clone()),
        response: (!state.last_response.is_empty()).then(|| state.last_response.clone()),
        cards,
        placeholder,
    }
}

fn record_card(record: &Record) -> RecordCard {
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    RecordCard {
        id: record.id,
        heading: text(&record.name),
        fields: vec![
            ("Email", text(&record.email)),
            ("Phone", text(&record.phone)),
            ("Education", text(&record.education)),
            ("Work Experience", text(&record.work_experience)),
            ("Skills", text(&record.skills)),
        ],
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{}", "=".repeat(TITLE.len()))?;
        if let Some(name) = &self.selected_file {
            writeln!(f, "Selected file: {name}")?;
        }

        if let Some(response) = &self.response {
            writeln!(f)?;
            writeln!(f, "{RESPONSE_LABEL}")?;
            writeln!(f, "{response}")?;
        }

        writeln!(f)?;
        writeln!(f, "{RECORDS_HEADING}")?;
        writeln!(f, "{}", "-".repeat(RECORDS_HEADING.len()))?;
        if let Some(placeholder) = self.placeholder {
            writeln!(f, "{placeholder}")?;
        }
        for card in &self.cards {
            writeln!(f)?;
            writeln!(f, "{}", card.heading)?;
            for (label, value) in &card.fields {
                writeln!(f, "  {label}: {value}")?;
            }
        }
        Ok(())
    }
}
