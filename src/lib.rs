//! Form controller for a text-translation page
//!
//! This crate coordinates one translation form: it validates the form
//! state, runs the debounced detect-language → translate submission flow
//! against a remote API, and mirrors the outcome (status icon, translated
//! text, error messages, flag icons) back through a pluggable UI port.
//! It is deliberately not a translation engine and not a UI framework;
//! both ends are trait boundaries.
//!
//! # Workflow Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use translate_form::{
//!     Field, FormEvent, HttpApiClient, MemoryUi, SubmissionController, UiPort,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Connect the controller to the API and a UI adapter
//!     let client = HttpApiClient::new("http://127.0.0.1:5000")?;
//!     let controller = Arc::new(SubmissionController::new(client, MemoryUi::new()));
//!
//!     // 2. Seed defaults (target language from the caller's locale)
//!     controller.init("fr-FR").await;
//!
//!     // 3. Feed it form events; typing is debounced, changes submit now
//!     controller.ui().await.set_field_value(Field::TextToTranslate, "Hello");
//!     controller.clone().handle_event(FormEvent::SubmitRequested).await;
//!
//!     println!("{}", controller.ui().await.field_value(Field::TranslatedText));
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod controller;
pub mod countries;
pub mod debounce;
pub mod error;
pub mod flags;
pub mod mock;
pub mod snapshot;
pub mod ui;
pub mod validate;

// Re-export main types for convenient access
pub use client::{ApiClient, HttpApiClient, TranslateResponse, routes};
pub use controller::{FormEvent, SubmissionController, base_language};
pub use countries::{LANGUAGES, is_known_language, language_to_country};
pub use debounce::Debouncer;
pub use error::{ApiError, ApiResult, ErrorSet};
pub use flags::{AUTO_ICON, flag_icon_url};
pub use mock::{ApiCall, DetectMode, MemoryUi, MockApiClient, TranslateMode};
pub use snapshot::{AUTO_DETECT, Field, FormSnapshot};
pub use ui::{
    TRANSLATED_TEXT_PLACEHOLDER, UiPort, UiStatus, WORKING_PLACEHOLDER, status_icon,
};
pub use validate::FormSchema;
