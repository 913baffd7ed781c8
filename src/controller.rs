//! The submission controller: orchestrates one submit cycle end to end and
//! wires form events (change, debounced input, submit, reverse) to it.
//!
//! One cycle runs validate → detect-language → (when detected text is
//! non-empty) translate → render. Translate is only ever issued after
//! detect resolved successfully, never concurrently with it. A cycle's
//! errors are terminal: rendered, then forgotten at the start of the next
//! cycle. The only cancellable resource is the input debounce timer;
//! in-flight requests are never cancelled, so a stale response can still
//! overwrite the UI (no request fencing, by construction a single logical
//! submission is in flight at a time).
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use translate_form::{
//!     FormEvent, HttpApiClient, MemoryUi, SubmissionController,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpApiClient::new("http://127.0.0.1:5000")?;
//!     let controller = Arc::new(SubmissionController::new(client, MemoryUi::new()));
//!     controller.init("fr-FR").await;
//!     controller.clone().handle_event(FormEvent::TextInput).await;
//!     Ok(())
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::client::ApiClient;
use crate::debounce::Debouncer;
use crate::error::{ApiError, ErrorSet};
use crate::flags::flag_icon_url;
use crate::snapshot::{AUTO_DETECT, Field};
use crate::ui::{TRANSLATED_TEXT_PLACEHOLDER, UiPort, UiStatus, WORKING_PLACEHOLDER};
use crate::validate::FormSchema;

/// Discrete form events the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// A field changed (select change, programmatic write). Language
    /// selectors additionally refresh their flag icon.
    FieldChanged(Field),
    /// A keystroke in the free-text input. Debounced.
    TextInput,
    /// Explicit submit action. Runs a cycle immediately.
    SubmitRequested,
    /// The reverse-languages control was activated.
    ReverseRequested,
}

/// Strip region/script/encoding from a locale identifier, keeping the base
/// language: "fr-FR" → "fr", "pt_BR.UTF-8" → "pt".
pub fn base_language(locale: &str) -> String {
    locale
        .split(['-', '_', '.'])
        .next()
        .unwrap_or(locale)
        .to_lowercase()
}

/// Owns one translation form: the API client, the UI port, the validation
/// schema and the input debounce timer.
#[derive(Debug)]
pub struct SubmissionController<C, U> {
    client: C,
    ui: Mutex<U>,
    schema: FormSchema,
    debouncer: Debouncer,
}

impl<C, U> SubmissionController<C, U>
where
    C: ApiClient,
    U: UiPort + Send,
{
    /// Controller with the default language schema and debounce delay.
    pub fn new(client: C, ui: U) -> Self {
        Self::with_schema(client, ui, FormSchema::default())
    }

    pub fn with_schema(client: C, ui: U, schema: FormSchema) -> Self {
        Self {
            client,
            ui: Mutex::new(ui),
            schema,
            debouncer: Debouncer::new(Debouncer::DEFAULT_DELAY),
        }
    }

    /// Override the debounce delay (tests mostly).
    pub fn with_debounce_delay(mut self, delay: Duration) -> Self {
        self.debouncer = Debouncer::new(delay);
        self
    }

    /// Borrow the UI port, e.g. to seed field values or read results.
    pub async fn ui(&self) -> MutexGuard<'_, U> {
        self.ui.lock().await
    }

    /// One-time setup: seed the target language from the caller's locale
    /// (the browser locale, `$LANG`, ...) when it is a supported language,
    /// then bring flag icons and the reverse control up to date.
    pub async fn init(&self, default_locale: &str) {
        let language = base_language(default_locale);
        if self.schema.is_known_language(&language) {
            self.ui
                .lock()
                .await
                .set_field_value(Field::TargetLanguage, &language);
        }
        self.refresh_flag(Field::SourceLanguage).await;
        self.refresh_flag(Field::TargetLanguage).await;
        self.refresh_reverse_enabled().await;
    }

    /// Run one submission cycle against the current form state.
    ///
    /// Empty input short-circuits to a full UI reset without touching the
    /// network. Invalid input renders one error per field and aborts.
    /// Otherwise detect runs first; translate follows only when the
    /// detected text is non-empty, on the snapshot with the detect
    /// response folded in.
    pub async fn submit(&self) {
        let form = self.ui.lock().await.snapshot();

        if form.text_to_translate.is_empty() {
            debug!("empty input, clearing transient state");
            let mut ui = self.ui.lock().await;
            ui.set_status(UiStatus::Idle);
            ui.set_field_value(Field::TranslatedText, "");
            ui.clear_errors();
            ui.set_placeholder(Field::TranslatedText, TRANSLATED_TEXT_PLACEHOLDER);
            return;
        }

        {
            let mut ui = self.ui.lock().await;
            ui.set_placeholder(Field::TranslatedText, WORKING_PLACEHOLDER);
            ui.clear_errors();
            ui.set_status(UiStatus::Loading);
        }

        let errors = self.schema.validate(&form);
        if !errors.is_empty() {
            warn!(count = errors.len(), "form validation failed");
            let mut ui = self.ui.lock().await;
            ui.set_status(UiStatus::Error);
            ui.render_errors(&errors);
            return;
        }

        info!(
            source = %form.source_language,
            target = %form.target_language,
            "detecting language"
        );
        let detected = match self.client.detect_language(&form).await {
            Ok(detected) => detected,
            Err(error) => {
                self.render_failure("detect-language", error).await;
                return;
            }
        };

        if detected.text_to_translate.is_empty() {
            debug!("server returned no text to translate, skipping translation");
            return;
        }

        // Synthetic change on the source selector: refresh its flag before
        // the detect response is folded into the form
        self.refresh_flag(Field::SourceLanguage).await;

        let mut merged = form;
        let changed = merged.merge(&detected);
        {
            let mut ui = self.ui.lock().await;
            for field in changed {
                ui.set_field_value(field, merged.get(field));
            }
        }

        info!(
            source = %merged.source_language,
            target = %merged.target_language,
            "translating"
        );
        match self.client.translate(&merged).await {
            Ok(translated_text) => {
                let mut ui = self.ui.lock().await;
                ui.set_status(UiStatus::Success);
                ui.set_field_value(Field::TranslatedText, &translated_text);
            }
            Err(error) => self.render_failure("translate", error).await,
        }
    }

    /// Swap the source and target languages along with their texts, then
    /// run a full submission cycle.
    ///
    /// Aborts with a rendered error set when the languages are equal or
    /// the source is still on auto-detection (both messages can fire at
    /// once). An unselected target sends the source back to auto.
    pub async fn reverse_languages(&self) {
        let (source, target) = {
            let ui = self.ui.lock().await;
            (
                ui.field_value(Field::SourceLanguage),
                ui.field_value(Field::TargetLanguage),
            )
        };

        let mut errors = ErrorSet::new();
        if source == target {
            errors.insert(
                "same-languages",
                "Source and target language must be different",
            );
        }
        if source == AUTO_DETECT {
            errors.insert(
                "auto-detection",
                "Source language must be different from auto detection",
            );
        }
        if !errors.is_empty() {
            debug!(count = errors.len(), "reverse rejected");
            self.ui.lock().await.render_errors(&errors);
            return;
        }

        {
            let mut ui = self.ui.lock().await;
            if target.is_empty() {
                ui.set_field_value(Field::SourceLanguage, AUTO_DETECT);
            } else {
                ui.set_field_value(Field::SourceLanguage, &target);
            }
            ui.set_field_value(Field::TargetLanguage, &source);

            let translated = ui.field_value(Field::TranslatedText);
            ui.set_field_value(Field::TextToTranslate, &translated);
            ui.set_field_value(Field::TranslatedText, "");
        }

        self.refresh_flag(Field::SourceLanguage).await;
        self.refresh_flag(Field::TargetLanguage).await;
        self.submit().await;
    }

    /// The reverse control is usable exactly when the source language is
    /// not the auto-detect sentinel.
    pub async fn refresh_reverse_enabled(&self) {
        let mut ui = self.ui.lock().await;
        let enabled = ui.field_value(Field::SourceLanguage) != AUTO_DETECT;
        ui.set_reverse_enabled(enabled);
    }

    async fn refresh_flag(&self, field: Field) {
        let mut ui = self.ui.lock().await;
        let url = flag_icon_url(&ui.field_value(field));
        ui.set_flag_icon(field, &url);
    }

    async fn render_failure(&self, operation: &str, error: ApiError) {
        warn!(%error, operation, "request failed");
        let errors = match error {
            ApiError::Rejected(errors) => errors,
            other => {
                let mut errors = ErrorSet::new();
                errors.insert(operation, other.to_string());
                errors
            }
        };
        let mut ui = self.ui.lock().await;
        ui.set_placeholder(Field::TranslatedText, TRANSLATED_TEXT_PLACEHOLDER);
        ui.set_status(UiStatus::Error);
        ui.render_errors(&errors);
    }
}

impl<C, U> SubmissionController<C, U>
where
    C: ApiClient + 'static,
    U: UiPort + Send + 'static,
{
    /// Route a form event.
    ///
    /// Field changes refresh derived state and submit immediately when
    /// there is text; free-text input (re)schedules the debounced submit,
    /// at most one pending at a time; explicit submit and reverse run
    /// immediately.
    pub async fn handle_event(self: Arc<Self>, event: FormEvent) {
        match event {
            FormEvent::FieldChanged(field) => {
                if field.is_language_select() {
                    self.refresh_flag(field).await;
                }
                self.refresh_reverse_enabled().await;
                let text = self.ui.lock().await.field_value(Field::TextToTranslate);
                if !text.is_empty() {
                    self.submit().await;
                }
            }
            FormEvent::TextInput => {
                let controller = Arc::clone(&self);
                self.debouncer
                    .schedule(async move {
                        controller.refresh_reverse_enabled().await;
                        controller.submit().await;
                    })
                    .await;
            }
            FormEvent::SubmitRequested => self.submit().await,
            FormEvent::ReverseRequested => self.reverse_languages().await,
        }
    }
}
