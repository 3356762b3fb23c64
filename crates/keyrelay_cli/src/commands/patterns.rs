//! Patterns command - lists the built-in detection catalog.

use std::collections::HashMap;

use console::style;
use keyrelay_core::prelude::*;

use crate::ui::{colors, print_command_header, truncate_with_ellipsis};

const NAME_TRUNCATE_WIDTH: usize = 35;

/// Lists built-in detection patterns, optionally filtered by group.
pub fn run(group_filter: Option<&str>, verbose: bool) -> super::Result {
    print_command_header("patterns");

    let registry = PatternRegistry::builtin()?;
    let patterns: Vec<&Pattern> = registry
        .patterns()
        .iter()
        .filter(|p| matches_group(p, group_filter))
        .collect();

    if patterns.is_empty() {
        print_no_matches(group_filter);
        return Ok(());
    }

    print_count(patterns.len());

    if verbose {
        print_verbose(&patterns);
    } else {
        print_table(&patterns);
    }

    Ok(())
}

fn matches_group(pattern: &Pattern, filter: Option<&str>) -> bool {
    filter.is_none_or(|g| pattern.group.as_str().eq_ignore_ascii_case(g))
}

fn print_count(count: usize) {
    println!("{}", colors::muted().apply_to(format!("{count} patterns")));
}

fn print_no_matches(group: Option<&str>) {
    match group {
        None => println!(
            "{} {}",
            colors::muted().apply_to("○"),
            colors::secondary().apply_to("no patterns")
        ),
        Some(g) => println!(
            "{} {} {}",
            colors::muted().apply_to("○"),
            colors::secondary().apply_to("no patterns match"),
            colors::emphasis().apply_to(format!("--group {g}"))
        ),
    }
}

/// Prints patterns grouped by category, preserving catalog order both for
/// the categories and the entries within them.
fn print_table(patterns: &[&Pattern]) {
    let mut order: Vec<Group> = Vec::new();
    let mut grouped: HashMap<Group, Vec<&Pattern>> = HashMap::new();

    for pattern in patterns {
        if !order.contains(&pattern.group) {
            order.push(pattern.group);
        }
        grouped.entry(pattern.group).or_default().push(pattern);
    }

    for group in order {
        print_group(group, &grouped[&group]);
    }
}

fn print_group(group: Group, patterns: &[&Pattern]) {
    println!();
    println!(
        "{} {}",
        style(group.name()).bold(),
        colors::muted().apply_to(format!("({})", patterns.len()))
    );

    for pattern in patterns {
        print_pattern_row(pattern);
    }
}

fn print_pattern_row(pattern: &Pattern) {
    println!(
        "  {}  {}",
        colors::accent().apply_to(&pattern.id),
        colors::secondary().apply_to(truncate_with_ellipsis(&pattern.name, NAME_TRUNCATE_WIDTH))
    );
}

fn print_verbose(patterns: &[&Pattern]) {
    for pattern in patterns {
        print_pattern_detail(pattern);
    }
}

fn print_pattern_detail(pattern: &Pattern) {
    println!();
    println!(
        "{} {} {}",
        style(&pattern.id).bold(),
        colors::muted().apply_to("·"),
        colors::muted().apply_to(pattern.group.name())
    );
    println!("  {}", colors::secondary().apply_to(&pattern.name));
    print_detail_field("regex", pattern.regex.as_str());

    if !pattern.keywords.is_empty() {
        let keywords: Vec<&str> = pattern.keywords.iter().map(AsRef::as_ref).collect();
        print_detail_field("keywords", &keywords.join(", "));
    }
    if let Some(gate) = &pattern.context {
        print_detail_field("context", gate.as_str());
    }
    print_detail_field("revoke", &pattern.dashboard_url);
}

fn print_detail_field(label: &str, value: &str) {
    println!(
        "  {} {}",
        colors::muted().apply_to(format!("{label:<9}")),
        colors::secondary().apply_to(value)
    );
}
