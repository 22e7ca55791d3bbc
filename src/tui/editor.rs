//! Editable fields of the details panel and the inline text editor.

/// Editable field of the selected release, in panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    /// Free text
    Title,
    /// Free text
    Artist,
    /// Single / EP / Album selector
    Type,
    /// Status selector
    Status,
    /// `YYYY-MM-DD` text
    Date,
}

impl DetailField {
    /// Fields in panel order. The details cursor indexes this list first,
    /// then the checklist rows of the active tab.
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Artist,
        Self::Type,
        Self::Status,
        Self::Date,
    ];

    /// Field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Artist => "Artist",
            Self::Type => "Type",
            Self::Status => "Status",
            Self::Date => "Date",
        }
    }

    /// Whether Enter opens the text editor for this field.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Title | Self::Artist | Self::Date)
    }
}

/// Inline editor for one text field of the selected release.
///
/// Title and artist edits are applied on every keystroke. The date is only
/// applied on commit because a half-typed date is not a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEditor {
    /// Field being edited
    pub field: DetailField,
    /// Current text
    pub buffer: String,
    /// Value when the editor opened, restored on cancel
    pub original: String,
}

impl FieldEditor {
    /// Opens an editor pre-filled with `value`.
    #[must_use]
    pub fn new(field: DetailField, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            field,
            buffer: value.clone(),
            original: value,
        }
    }

    /// Whether each keystroke is applied immediately.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self.field, DetailField::Title | DetailField::Artist)
    }

    /// Appends a character.
    pub fn insert(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Removes the last character.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Clears the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
