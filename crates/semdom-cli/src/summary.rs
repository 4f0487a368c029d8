//! Console summaries rendered with comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use semdom_core::MappingAnalysis;

use crate::commands::{CoverageResult, MapLexiconResult};

pub fn print_coverage_summary(result: &CoverageResult) {
    println!("Mapping entries: {}", result.mapping_entries);
    println!("Corpus annotations: {}", result.annotations);
    println!("Coverage report: {}", result.coverage_path.display());
    println!("Unmatched listing: {}", result.unmatched_path.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("SemDom"),
        header_cell("Name"),
        header_cell("Codes"),
        header_cell("Words"),
        header_cell("Refs"),
    ]);
    apply_table_style(&mut table);
    for index in 2..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total_words = 0usize;
    let mut total_refs = 0usize;
    for (code, aggregate) in &result.outcome.domains {
        total_words += aggregate.unique_words();
        total_refs += aggregate.unique_references();
        table.add_row(vec![
            Cell::new(code.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(aggregate.display_name()),
            Cell::new(aggregate.raw_codes.len()),
            Cell::new(aggregate.unique_words()),
            Cell::new(aggregate.unique_references()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} domains", result.outcome.attested_domains())),
        Cell::new("-").fg(Color::DarkGrey),
        Cell::new(total_words).add_attribute(Attribute::Bold),
        Cell::new(total_refs).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if !result.outcome.unmatched.is_empty() {
        println!();
        println!("Unmatched codes ({}):", result.outcome.unmatched_count());
        for unmatched in &result.outcome.unmatched {
            println!("  {} -> {}", unmatched.raw, unmatched.canonical);
        }
    }
}

pub fn print_map_lexicon_summary(result: &MapLexiconResult) {
    println!("Top-level domains: {}", result.top_level_domains);
    println!("Louw-Nida codes: {}", result.codes);
    println!("Mapping written: {}", result.output_path.display());
}

pub fn print_analysis(analysis: &MappingAnalysis) {
    println!(
        "Domain numbers found: {} out of {}",
        analysis.numbers_found(),
        semdom_core::DOMAIN_NUMBER_RANGE.count()
    );
    if analysis.missing_numbers.is_empty() {
        println!("All domain numbers are present");
    } else {
        let missing: Vec<String> = analysis
            .missing_numbers
            .iter()
            .map(u32::to_string)
            .collect();
        println!(
            "Missing domain numbers ({}): {}",
            missing.len(),
            missing.join(", ")
        );
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Number"),
        header_cell("Count"),
        header_cell("Subdomains"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (number, codes) in &analysis.by_number {
        let mut joined = codes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        if joined.len() > 50 {
            joined.truncate(47);
            joined.push_str("...");
        }
        table.add_row(vec![
            Cell::new(number),
            Cell::new(codes.len()),
            Cell::new(joined),
        ]);
    }
    println!("{table}");

    println!("Total codes: {}", analysis.total_codes);
    println!(
        "Average subdomains per number: {:.2}",
        analysis.average_subdomains()
    );
    if let Some((number, count)) = analysis.max_subdomains() {
        println!("Maximum subdomains: {count} (number {number})");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
