//! UI port: everything the controller is allowed to do to the page.
//!
//! The controller never touches a document object; all reads and writes go
//! through [`UiPort`], so the same controller drives a real DOM adapter, a
//! terminal front end or the in-memory test double.

use crate::error::ErrorSet;
use crate::snapshot::{Field, FormSnapshot};

/// Placeholder shown on the output field when no translation is in progress.
pub const TRANSLATED_TEXT_PLACEHOLDER: &str = "Translated text";

/// Placeholder shown while a submission cycle is running.
pub const WORKING_PLACEHOLDER: &str = "🔄...";

/// Transient UI state of the latest submission cycle. Not persisted;
/// purely derived from the latest outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiStatus {
    /// No cycle ran, or the last cycle was cleared (empty input).
    #[default]
    Idle,
    /// A cycle is in flight.
    Loading,
    /// The last cycle produced a translation.
    Success,
    /// The last cycle ended in a rendered error set.
    Error,
}

/// Status icon asset for a UI status, or `None` when the icon is hidden.
pub fn status_icon(status: UiStatus) -> Option<&'static str> {
    match status {
        UiStatus::Idle => None,
        UiStatus::Loading => Some("/static/images/status/loading.png"),
        UiStatus::Success => Some("/static/images/status/success.png"),
        UiStatus::Error => Some("/static/images/status/error.png"),
    }
}

/// Adapter over the page the form lives on.
///
/// Implementations are plain state holders; none of these calls may block
/// or fail. Rendering an error set replaces the previous content of the
/// error area, mirroring how the message wrapper is rewritten wholesale.
pub trait UiPort {
    /// Current value of a form field.
    fn field_value(&self, field: Field) -> String;

    /// Write a form field value.
    fn set_field_value(&mut self, field: Field, value: &str);

    /// Set the placeholder text of a field.
    fn set_placeholder(&mut self, field: Field, text: &str);

    /// Reflect the cycle status (icon swap).
    fn set_status(&mut self, status: UiStatus);

    /// Replace the error area content with the given set.
    fn render_errors(&mut self, errors: &ErrorSet);

    /// Empty the error area.
    fn clear_errors(&mut self);

    /// Point a language selector's flag image at `url`.
    fn set_flag_icon(&mut self, field: Field, url: &str);

    /// Enable or disable the reverse-languages control.
    fn set_reverse_enabled(&mut self, enabled: bool);

    /// Snapshot of the current form state.
    fn snapshot(&self) -> FormSnapshot {
        let mut form = FormSnapshot::new();
        for field in Field::ALL {
            form.set(field, self.field_value(field));
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MemoryUi;

    #[test]
    fn test_status_icons() {
        assert_eq!(status_icon(UiStatus::Idle), None);
        assert_eq!(
            status_icon(UiStatus::Loading),
            Some("/static/images/status/loading.png")
        );
        assert_eq!(
            status_icon(UiStatus::Success),
            Some("/static/images/status/success.png")
        );
    }

    #[test]
    fn test_default_snapshot_reads_every_field() {
        let mut ui = MemoryUi::new();
        ui.set_field_value(Field::SourceLanguage, "auto");
        ui.set_field_value(Field::TargetLanguage, "fr");
        ui.set_field_value(Field::TextToTranslate, "Hello");
        let form = ui.snapshot();
        assert_eq!(form.source_language, "auto");
        assert_eq!(form.target_language, "fr");
        assert_eq!(form.text_to_translate, "Hello");
        assert_eq!(form.translated_text, "");
    }
}
