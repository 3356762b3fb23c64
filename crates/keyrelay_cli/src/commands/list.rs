//! List command - lists stored API credentials through the native host.

use serde_json::Value;

use crate::client;
use crate::ui::{colors, pluralise_word, print_command_header};
use crate::{ListArgs, OutputFormat};

/// Asks the host for stored API credential summaries and prints them.
pub fn run(args: &ListArgs) -> super::Result {
    let runtime = client::runtime()?;
    let data = runtime.block_on(async {
        let host = client::connect(&args.host).await?;
        anyhow::Ok(host.list(args.vault.as_deref(), args.tags.as_deref()).await?)
    })?;

    if args.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    print_command_header("list");

    let items = data.as_array().map(Vec::as_slice).unwrap_or_default();
    if items.is_empty() {
        println!(
            "{} {}",
            colors::muted().apply_to("○"),
            colors::secondary().apply_to("no stored credentials")
        );
        return Ok(());
    }

    for item in items {
        print_item(item);
    }

    println!();
    println!(
        "{} {}",
        colors::secondary().apply_to(items.len()),
        colors::muted().apply_to(pluralise_word(items.len(), "credential", "credentials"))
    );

    Ok(())
}

fn print_item(item: &Value) {
    let title = item.get("title").and_then(Value::as_str).unwrap_or("(untitled)");
    let vault = item.get("vault").and_then(Value::as_str).unwrap_or("Private");
    let reference = item.get("reference").and_then(Value::as_str).unwrap_or_default();

    println!();
    println!(
        "{} {}",
        colors::primary().apply_to(title),
        colors::muted().apply_to(vault)
    );
    println!("  {}", colors::accent().apply_to(reference));
}
