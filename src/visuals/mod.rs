mod formatters;

use crate::commands::stats::RunStats;
use crate::settings::LoadStatus;
use crate::storage::footer::{FOOTER_MAGIC, FooterReport};
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use formatters::{format_bytes, format_duration, format_word};

pub fn print_cycle_start(cycle: u32, load: LoadStatus) {
    match load {
        LoadStatus::Loaded => println!("Cycle {}: loaded stored settings.", cycle),
        LoadStatus::DefaultInit => println!(
            "Cycle {}: failed to load settings, initialised to defaults.",
            cycle
        ),
    }
}

pub fn print_state(title: &str, text: &str) {
    println!("\n{}\n{}\n\n{}", title, "=".repeat(title.chars().count()), text);
}

pub fn print_summary(stats: &RunStats) {
    let total = stats.cycles.len();
    println!(
        "✓ Ran {} cycles with the {} schema in {} ({}/{} loaded, {}/{} saved, seed 0x{:08X})",
        total,
        stats.schema.label(),
        format_duration(stats.total_duration),
        stats.loaded(),
        total,
        stats.saved(),
        total,
        stats.seed
    );
}

pub fn print_detailed(stats: &RunStats) {
    print_summary(stats);

    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Cycle").add_attribute(Attribute::Bold),
            Cell::new("Load").add_attribute(Attribute::Bold),
            Cell::new("Save").add_attribute(Attribute::Bold),
            Cell::new("Payload").add_attribute(Attribute::Bold),
            Cell::new("CRC").add_attribute(Attribute::Bold),
        ]);

    for cycle in &stats.cycles {
        table.add_row(vec![
            Cell::new(cycle.cycle),
            Cell::new(format!("{:?}", cycle.load)),
            Cell::new(format!("{:?}", cycle.save)),
            Cell::new(
                cycle
                    .data_size
                    .map_or_else(|| "-".to_string(), |s| format_bytes(s as usize)),
            ),
            Cell::new(format_word(cycle.data_crc)),
        ]);
    }

    println!("\n{table}");
}

pub fn print_footer(report: &FooterReport) {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Settings Footer")
                .add_attribute(Attribute::Bold)
                .set_alignment(comfy_table::CellAlignment::Left),
            Cell::new(""),
        ]);

    table.add_row(vec!["Region Size", &format_bytes(report.region_size)]);
    table.add_row(vec![
        "Data Size",
        &report
            .footer
            .map_or_else(|| "-".to_string(), |f| format_bytes(f.data_size as usize)),
    ]);
    table.add_row(vec![
        "Stored CRC",
        &format_word(report.footer.map(|f| f.data_crc)),
    ]);
    table.add_row(vec!["Computed CRC", &format_word(report.computed_crc)]);
    table.add_row(vec![
        "Magic",
        &format!(
            "{} (expected {})",
            format_word(report.footer.map(|f| f.magic)),
            format_word(Some(FOOTER_MAGIC))
        ),
    ]);
    table.add_row(vec![
        "Verdict",
        &match &report.verdict {
            Ok(()) => "valid".to_string(),
            Err(e) => e.to_string(),
        },
    ]);

    println!("{table}");
}
