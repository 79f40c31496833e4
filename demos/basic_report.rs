//! Basic Report Example
//!
//! This example demonstrates the most basic usage of chartzero:
//! summarizing the first column of a workbook and writing a chart report
//! using default settings.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example basic_report -- input.xlsx report.xlsx
//! ```

use chartzero::ReportBuilder;
use std::fs::File;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get input file path from command line arguments or use default
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "survey.xlsx".to_string());

    // Get output file path from command line arguments or use default
    let output_path = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "report.xlsx".to_string());

    println!("Summarizing {} into {}...", input_path, output_path);

    // Create a report with default settings
    let report = ReportBuilder::new().build()?;

    // Open input file
    let input = File::open(&input_path).map_err(|e| {
        eprintln!("Error: Could not open input file '{}'", input_path);
        eprintln!("  {}", e);
        e
    })?;

    // Create output file
    let output = File::create(&output_path)?;

    // Summarize the first column and chart it
    report.generate(input, output)?;

    println!("Done.");
    Ok(())
}
