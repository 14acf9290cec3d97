//! Note domain model.
//!
//! # Responsibility
//! - Define the note record shown by every view.
//! - Define the closed color palette and its stable string ids.
//!
//! # Invariants
//! - `id` and `created_at` are set once by the board and never change.
//! - `color` is always one of the four palette entries.
//! - Paragraph splitting is literal: no segment is ever dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a note within the live collection.
pub type NoteId = u64;

/// Delimiter between body paragraphs.
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

/// Fixed color tag palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteColor {
    Red,
    /// Draft default.
    #[default]
    Blue,
    Green,
    Pink,
}

impl NoteColor {
    /// All palette entries in display order.
    pub const ALL: [NoteColor; 4] = [Self::Red, Self::Blue, Self::Green, Self::Pink];

    /// Stable lowercase id used on the wire and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Pink => "pink",
        }
    }

    /// User-facing radio label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Pink => "Pink",
        }
    }
}

impl Display for NoteColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses one palette entry from its lowercase id.
pub fn parse_note_color(value: &str) -> Result<NoteColor, NoteColorError> {
    let normalized = value.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return Err(NoteColorError::Empty);
    }

    NoteColor::ALL
        .into_iter()
        .find(|color| color.as_str() == normalized)
        .ok_or(NoteColorError::Unsupported(normalized))
}

/// Color parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteColorError {
    Empty,
    Unsupported(String),
}

impl Display for NoteColorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "note color cannot be empty"),
            Self::Unsupported(value) => write!(
                f,
                "unsupported note color `{value}`; expected red|blue|green|pink"
            ),
        }
    }
}

impl Error for NoteColorError {}

/// Candidate note produced by the composer on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub text: String,
    pub color: NoteColor,
}

impl NewNote {
    pub fn new(title: impl Into<String>, text: impl Into<String>, color: NoteColor) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            color,
        }
    }
}

/// Canonical note record.
///
/// Fields are private so a note cannot be edited after the board creates it.
/// Serialize-only: the board is the sole constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    id: NoteId,
    created_at: DateTime<Utc>,
    title: String,
    text: String,
    color: NoteColor,
}

impl Note {
    /// Builds a note from a candidate plus board-assigned identity.
    pub(crate) fn from_candidate(id: NoteId, created_at: DateTime<Utc>, candidate: NewNote) -> Self {
        Self {
            id,
            created_at,
            title: candidate.title,
            text: candidate.text,
            color: candidate.color,
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> NoteColor {
        self.color
    }

    /// Splits the body on blank lines.
    ///
    /// Runs of three or more line breaks produce empty segments, and an
    /// empty body yields a single empty paragraph.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.text.split(PARAGRAPH_DELIMITER)
    }
}
