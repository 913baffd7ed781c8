//! Command-line front end: runs one submission cycle against a live API.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use translate_form::{
    Field, FormSnapshot, HttpApiClient, SubmissionController, UiPort, UiStatus,
    base_language,
};

#[derive(Parser, Debug)]
#[command(
    name = "translate-form",
    about = "Translate a piece of text through the detect-then-translate form flow"
)]
struct Cli {
    /// Base URL of the translation API
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    api: String,

    /// Source language code, or "auto" to let the server detect it
    #[arg(long, default_value = "auto")]
    source: String,

    /// Target language code; defaults to the system locale ($LANG)
    #[arg(long)]
    target: Option<String>,

    /// Text to translate
    text: String,
}

/// Terminal stand-in for the page: holds the form state and the last
/// rendered error set so they can be printed once the cycle is done.
#[derive(Debug, Default)]
struct TerminalUi {
    form: FormSnapshot,
    status: UiStatus,
    errors: translate_form::ErrorSet,
    reverse_enabled: bool,
}

impl UiPort for TerminalUi {
    fn field_value(&self, field: Field) -> String {
        self.form.get(field).to_string()
    }

    fn set_field_value(&mut self, field: Field, value: &str) {
        self.form.set(field, value);
    }

    fn set_placeholder(&mut self, _field: Field, _text: &str) {}

    fn set_status(&mut self, status: UiStatus) {
        self.status = status;
    }

    fn render_errors(&mut self, errors: &translate_form::ErrorSet) {
        self.errors = errors.clone();
    }

    fn clear_errors(&mut self) {
        self.errors = translate_form::ErrorSet::new();
    }

    fn set_flag_icon(&mut self, _field: Field, _url: &str) {}

    fn set_reverse_enabled(&mut self, enabled: bool) {
        self.reverse_enabled = enabled;
    }
}

fn system_locale() -> String {
    std::env::var("LANG").unwrap_or_else(|_| "en".to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let client = match HttpApiClient::new(&cli.api) {
        Ok(client) => client,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    let controller = Arc::new(SubmissionController::new(client, TerminalUi::default()));

    let locale = cli.target.unwrap_or_else(system_locale);
    controller.init(&base_language(&locale)).await;

    {
        let mut ui = controller.ui().await;
        ui.set_field_value(Field::SourceLanguage, &cli.source);
        ui.set_field_value(Field::TextToTranslate, &cli.text);
    }

    controller.submit().await;

    let ui = controller.ui().await;
    if ui.errors.is_empty() && ui.status != UiStatus::Error {
        println!("{}", ui.form.translated_text);
        ExitCode::SUCCESS
    } else {
        for (key, message) in ui.errors.iter() {
            eprintln!("{}: {}", key, message);
        }
        ExitCode::FAILURE
    }
}
