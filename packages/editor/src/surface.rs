use crate::options::{EditorOptions, KeyChord};

/// The mounted code editor widget, as seen by the controller.
///
/// Key presses matching a bound chord are routed back through
/// `ExpressionEditor::handle_command`; text edits through `handle_edit`.
pub trait EditorSurface {
    fn update_options(&mut self, options: &EditorOptions);

    /// Replace the full editor content
    fn set_value(&mut self, value: &str);

    fn focus(&mut self);

    fn add_command(&mut self, chord: KeyChord);
}
