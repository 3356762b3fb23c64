//! Detect command - scans text for API keys and secrets.

use std::io::Read as _;

use anyhow::Context;
use keyrelay_core::prelude::*;
use keyrelay_core::UNKNOWN_PROVIDER;

use crate::ui::{self, colors, indicators, pluralise_word, print_command_header};
use crate::{DetectArgs, OutputFormat};

/// Scans the given text (or stdin) and reports detections. Exits with
/// code 1 when secrets are found, unless `--exit-zero` is set.
pub fn run(args: &DetectArgs) -> super::Result {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => read_stdin()?,
    };

    let detector = Detector::new(PatternRegistry::builtin()?);
    let detections = detector.scan_text(&text, args.source_url.as_deref());

    match args.format {
        OutputFormat::Json => print_json(&detections, args.show_values)?,
        OutputFormat::Text => print_text(&detections, args.show_values),
    }

    if !detections.is_empty() && !args.exit_zero {
        std::process::exit(ui::exit::FINDINGS);
    }
    Ok(())
}

fn read_stdin() -> super::Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}

fn print_json(detections: &[DetectedSecret], show_values: bool) -> super::Result {
    let rendered = detections
        .iter()
        .map(|d| to_json(d, show_values))
        .collect::<Result<Vec<_>, _>>()?;
    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(())
}

fn to_json(detection: &DetectedSecret, show_values: bool) -> serde_json::Result<serde_json::Value> {
    let mut value = serde_json::to_value(detection)?;
    if !show_values {
        if let Some(object) = value.as_object_mut() {
            object.insert(
                "value".to_string(),
                serde_json::Value::String(detection.masked_value()),
            );
        }
    }
    Ok(value)
}

fn print_text(detections: &[DetectedSecret], show_values: bool) {
    print_command_header("detect");

    if detections.is_empty() {
        println!(
            "{} {}",
            colors::success().apply_to(indicators::SUCCESS),
            colors::secondary().apply_to("no secrets detected")
        );
        return;
    }

    for detection in detections {
        print_detection(detection, show_values);
    }

    println!();
    println!(
        "{} {} {}",
        colors::error().apply_to(indicators::ERROR),
        colors::secondary().apply_to(detections.len()),
        colors::muted().apply_to(pluralise_word(
            detections.len(),
            "secret detected",
            "secrets detected"
        ))
    );
}

fn print_detection(detection: &DetectedSecret, show_values: bool) {
    // Heuristic-only detections are less certain; flag them differently.
    let indicator = if detection.provider == UNKNOWN_PROVIDER {
        colors::warning().apply_to(indicators::WARNING).to_string()
    } else {
        colors::error().apply_to(indicators::ERROR).to_string()
    };

    let value = if show_values {
        detection.value.clone()
    } else {
        detection.masked_value()
    };

    println!();
    println!(
        "{indicator} {} {}",
        colors::primary().apply_to(&detection.name),
        colors::muted().apply_to(&detection.provider)
    );
    println!("  {}", colors::emphasis().apply_to(value));

    if let Some(env_var_name) = &detection.env_var_name {
        print_field("env var", env_var_name);
    }
    if let Some(dashboard_url) = &detection.dashboard_url {
        print_field("revoke", dashboard_url);
    }
    if let Some(project) = &detection.project {
        print_field("project", project);
    }
    if !detection.tags.is_empty() {
        print_field("tags", &detection.tags.join(", "));
    }
}

fn print_field(label: &str, value: &str) {
    println!(
        "  {} {}",
        colors::muted().apply_to(format!("{label:<8}")),
        colors::secondary().apply_to(value)
    );
}
