//! Form sub-messages.

/// Messages produced while the form has input focus.
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// Move focus to the next field.
    NextField,
    /// Move focus to the previous field.
    PrevField,
    /// Type a character into the focused field.
    Input(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Cycle the focused select to its next option.
    NextOption,
    /// Cycle the focused select to its previous option.
    PrevOption,
    /// Validate and submit the form.
    Submit,
}
