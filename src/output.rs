// ABOUTME: Report formatting for CLI feedback.
// ABOUTME: Supports aligned normal output, quiet (CI) and JSON lines modes.

use crate::commands::{ServiceOutcome, ServiceStatus};
use crate::registry::TagRecord;
use serde::Serialize;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// Human-friendly aligned report, one line per service
    #[default]
    Normal,
    /// Only services with newer tags
    Quiet,
    /// JSON lines for scripting
    Json,
}

/// Column widths shared by every line of one report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    /// Width of the `[service]` column, including trailing padding.
    pub service: usize,
    /// Width of the image column.
    pub image: usize,
}

impl Columns {
    /// Fit the columns to a set of service names and image references.
    pub fn fit<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut columns = Columns::default();
        for (service, image) in rows {
            columns.service = columns.service.max(service.chars().count() + 3);
            columns.image = columns
                .image
                .max(image.map(|i| i.chars().count()).unwrap_or(0));
        }
        columns
    }
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    columns: Columns,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            columns: Columns::default(),
        }
    }

    pub fn with_columns(mut self, columns: Columns) -> Self {
        self.columns = columns;
        self
    }

    /// Print the result for one service.
    pub fn service(&self, outcome: &ServiceOutcome) -> serde_json::Result<()> {
        match self.mode {
            OutputMode::Normal => println!("{}", format_service_line(&self.columns, outcome)),
            OutputMode::Quiet => {
                if outcome.has_newer() {
                    println!("{}", format_service_line(&self.columns, outcome));
                }
            }
            OutputMode::Json => println!("{}", serde_json::to_string(&ServiceEvent::from(outcome))?),
        }
        Ok(())
    }

    /// Print the result for a single image checked outside a compose file.
    pub fn image(&self, image: &str, newer: &[TagRecord]) -> serde_json::Result<()> {
        match self.mode {
            OutputMode::Normal => println!("Current version: {image} {}", format_newer(newer)),
            OutputMode::Quiet => {
                if !newer.is_empty() {
                    println!("{image} {}", format_newer(newer));
                }
            }
            OutputMode::Json => {
                let event = ImageEvent {
                    image,
                    status: status_label(newer),
                    newer,
                };
                println!("{}", serde_json::to_string(&event)?);
            }
        }
        Ok(())
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Error: {message}");
            }
            OutputMode::Json => {
                let event = ErrorEvent {
                    event: "error",
                    message,
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }
}

/// Render one aligned report line.
pub fn format_service_line(columns: &Columns, outcome: &ServiceOutcome) -> String {
    let label = format!("[{}]", outcome.service);
    let mut line = format!("{label:<width$}", width = columns.service);

    let Some(image) = outcome.image.as_deref() else {
        line.push_str("Could not find image name.");
        return line;
    };

    line.push_str(&format!(
        "Current version: {image:<width$} ",
        width = columns.image
    ));

    match &outcome.status {
        ServiceStatus::MissingImage => line.push_str("Could not find image name."),
        ServiceStatus::InvalidImage(message) => {
            line.push_str(&format!("Could not parse image reference: {message}"))
        }
        ServiceStatus::UnsupportedRegistry(registry) => {
            line.push_str(&format!("Registry {registry} is not supported."))
        }
        ServiceStatus::Checked(newer) => line.push_str(&format_newer(newer)),
    }

    line
}

fn format_newer(newer: &[TagRecord]) -> String {
    if newer.is_empty() {
        "No newer version found.".to_string()
    } else {
        let names: Vec<String> = newer.iter().map(|t| format!("'{}'", t.name)).collect();
        format!("The following might be newer: [{}]", names.join(", "))
    }
}

fn status_label(newer: &[TagRecord]) -> &'static str {
    if newer.is_empty() {
        "up_to_date"
    } else {
        "newer_available"
    }
}

#[derive(Serialize)]
struct ServiceEvent<'a> {
    service: &'a str,
    image: Option<&'a str>,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    newer: &'a [TagRecord],
}

impl<'a> From<&'a ServiceOutcome> for ServiceEvent<'a> {
    fn from(outcome: &'a ServiceOutcome) -> Self {
        let none: &[TagRecord] = &[];
        let (status, message, newer) = match &outcome.status {
            ServiceStatus::MissingImage => ("missing_image", None, none),
            ServiceStatus::InvalidImage(m) => ("invalid_image", Some(m.as_str()), none),
            ServiceStatus::UnsupportedRegistry(r) => {
                ("unsupported_registry", Some(r.as_str()), none)
            }
            ServiceStatus::Checked(newer) => (status_label(newer), None, newer.as_slice()),
        };
        Self {
            service: outcome.service.as_str(),
            image: outcome.image.as_deref(),
            status,
            message,
            newer,
        }
    }
}

#[derive(Serialize)]
struct ImageEvent<'a> {
    image: &'a str,
    status: &'static str,
    newer: &'a [TagRecord],
}

#[derive(Serialize)]
struct ErrorEvent<'a> {
    event: &'a str,
    message: &'a str,
}
