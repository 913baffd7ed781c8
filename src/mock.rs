//! Test doubles for the API and UI ports.
//!
//! `MockApiClient` scripts the two remote operations and records every call
//! with the snapshot it received, so tests can assert call order and that
//! translate ran on the merged snapshot. `MemoryUi` is a plain in-memory
//! [`UiPort`] holding whatever the controller last wrote.
//!
//! Both doubles are shipped as a public module so downstream crates can
//! drive the controller without a network or a page.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult, ErrorSet};
use crate::snapshot::{Field, FormSnapshot};
use crate::ui::{UiPort, UiStatus};

/// Scripted behavior of the detect-language operation.
#[derive(Debug, Clone)]
pub enum DetectMode {
    /// Echo the snapshot with the source language replaced by the given
    /// detected code.
    Detected(String),
    /// Echo the snapshot unchanged.
    Echo,
    /// Echo the snapshot with an empty `text_to_translate` (the server
    /// found nothing to translate).
    EmptyText,
    /// Reject with the given error set.
    Reject(ErrorSet),
}

/// Scripted behavior of the translate operation.
#[derive(Debug, Clone)]
pub enum TranslateMode {
    /// Append the target language: "Hello" → "Hello_fr".
    Suffix,
    /// Always resolve with a fixed translation.
    Fixed(String),
    /// Reject with the given error set.
    Reject(ErrorSet),
}

/// Which API operation a recorded call hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCall {
    DetectLanguage,
    Translate,
}

/// Scripted [`ApiClient`] with a call log.
#[derive(Debug)]
pub struct MockApiClient {
    detect: DetectMode,
    translate: TranslateMode,
    calls: Mutex<Vec<(ApiCall, FormSnapshot)>>,
}

impl MockApiClient {
    pub fn new(detect: DetectMode, translate: TranslateMode) -> Self {
        Self {
            detect,
            translate,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A client whose detect resolves with source "en" and whose translate
    /// appends the target language.
    pub fn happy() -> Self {
        Self::new(DetectMode::Detected("en".to_string()), TranslateMode::Suffix)
    }

    /// Operations called so far, in order.
    pub async fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().await.iter().map(|(op, _)| *op).collect()
    }

    /// Calls with the snapshot each one received.
    pub async fn recorded(&self) -> Vec<(ApiCall, FormSnapshot)> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn detect_language(&self, form: &FormSnapshot) -> ApiResult<FormSnapshot> {
        self.calls
            .lock()
            .await
            .push((ApiCall::DetectLanguage, form.clone()));
        match &self.detect {
            DetectMode::Detected(language) => {
                let mut detected = form.clone();
                detected.source_language = language.clone();
                Ok(detected)
            }
            DetectMode::Echo => Ok(form.clone()),
            DetectMode::EmptyText => {
                let mut detected = form.clone();
                detected.text_to_translate = String::new();
                Ok(detected)
            }
            DetectMode::Reject(errors) => Err(ApiError::Rejected(errors.clone())),
        }
    }

    async fn translate(&self, form: &FormSnapshot) -> ApiResult<String> {
        self.calls
            .lock()
            .await
            .push((ApiCall::Translate, form.clone()));
        match &self.translate {
            TranslateMode::Suffix => Ok(format!(
                "{}_{}",
                form.text_to_translate, form.target_language
            )),
            TranslateMode::Fixed(text) => Ok(text.clone()),
            TranslateMode::Reject(errors) => Err(ApiError::Rejected(errors.clone())),
        }
    }
}

/// In-memory [`UiPort`] recording everything the controller writes.
#[derive(Debug, Default)]
pub struct MemoryUi {
    pub form: FormSnapshot,
    pub placeholders: HashMap<Field, String>,
    pub status: UiStatus,
    /// Current content of the error area.
    pub errors: ErrorSet,
    /// How many times the error area was (re)rendered with a non-empty set.
    pub render_count: usize,
    pub flag_icons: HashMap<Field, String>,
    pub reverse_enabled: bool,
}

impl MemoryUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// UI pre-filled with the given form values.
    pub fn with_form(form: FormSnapshot) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn placeholder(&self, field: Field) -> Option<&str> {
        self.placeholders.get(&field).map(String::as_str)
    }

    pub fn flag_icon(&self, field: Field) -> Option<&str> {
        self.flag_icons.get(&field).map(String::as_str)
    }
}

impl UiPort for MemoryUi {
    fn field_value(&self, field: Field) -> String {
        self.form.get(field).to_string()
    }

    fn set_field_value(&mut self, field: Field, value: &str) {
        self.form.set(field, value);
    }

    fn set_placeholder(&mut self, field: Field, text: &str) {
        self.placeholders.insert(field, text.to_string());
    }

    fn set_status(&mut self, status: UiStatus) {
        self.status = status;
    }

    fn render_errors(&mut self, errors: &ErrorSet) {
        self.errors = errors.clone();
        self.render_count += 1;
    }

    fn clear_errors(&mut self) {
        self.errors = ErrorSet::new();
    }

    fn set_flag_icon(&mut self, field: Field, url: &str) {
        self.flag_icons.insert(field, url.to_string());
    }

    fn set_reverse_enabled(&mut self, enabled: bool) {
        self.reverse_enabled = enabled;
    }
}
