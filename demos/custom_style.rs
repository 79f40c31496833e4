//! Custom Style Example
//!
//! This example demonstrates chart styling: legend position, data labels,
//! a custom palette, and the "enable everything" canonical style.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example custom_style -- input.xlsx report.xlsx [--all]
//! ```

use chartzero::{
    ChartStyle, ChartStyleBuilder, ColumnSelector, LegendPosition, Region, ReportBuilder,
};
use std::fs::File;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "survey.xlsx".to_string());
    let output_path = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "report.xlsx".to_string());
    let enable_all = std::env::args().any(|arg| arg == "--all");

    let style = if enable_all {
        // The canonical "everything on" configuration
        ChartStyle::Canonical
    } else {
        ChartStyleBuilder::new()
            .with_axis_labels(true)
            .with_major_gridlines(true)
            .with_data_labels(true)
            .with_label_size(14)
            .with_label_color("#333333")
            .with_legend(LegendPosition::Bottom)
            .with_chart_colors(vec![
                "#e74c3c".to_string(),
                "#2ecc71".to_string(),
                "#3498db".to_string(),
                "#f1c40f".to_string(),
            ])
            .build()?
    };

    let report = ReportBuilder::new()
        .add_column(ColumnSelector::Index(0))
        .with_style(style)
        .with_region(Region::new(1.0, 1.0, 6.0, 4.0))
        .build()?;

    report.generate(File::open(&input_path)?, File::create(&output_path)?)?;

    println!("Wrote styled report to {}", output_path);
    Ok(())
}
