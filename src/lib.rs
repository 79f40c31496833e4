//! chartzero - Pure-Rust percentage summaries and styled chart reports for Excel workbooks
//!
//! This crate reads a column of values out of an Excel workbook, summarizes
//! the distinct values as percentages, and writes a workbook containing the
//! summary table and a styled stacked horizontal bar chart. Parsing is
//! delegated to `calamine` and all chart/document generation to
//! `rust_xlsxwriter`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::fs::File;
//! use chartzero::ReportBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a report with default settings (first sheet, first column)
//!     let report = ReportBuilder::new().build()?;
//!
//!     // Open input Excel file
//!     let input = File::open("survey.xlsx")?;
//!
//!     // Create output report file
//!     let output = File::create("report.xlsx")?;
//!
//!     // Summarize the column and chart it
//!     report.generate(input, output)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use std::fs::File;
//! use chartzero::{ChartStyleBuilder, ColumnSelector, LegendPosition, Region, ReportBuilder};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let style = ChartStyleBuilder::new()
//!         .with_data_labels(true)
//!         .with_legend(LegendPosition::Bottom)
//!         .with_chart_colors(vec!["#e74c3c".to_string(), "#2ecc71".to_string(), "#3498db".to_string()])
//!         .build()?;
//!
//!     let report = ReportBuilder::new()
//!         .add_column(ColumnSelector::Header("Answers".to_string()))
//!         .with_style(style)
//!         .with_region(Region::new(1.0, 1.0, 6.0, 4.0))
//!         .build()?;
//!
//!     report.generate(File::open("survey.xlsx")?, File::create("report.xlsx")?)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Summaries Without a Workbook
//!
//! The summarizer itself is a pure function over any stringifiable values:
//!
//! ```rust
//! use chartzero::summarize;
//!
//! let summary = summarize(vec!["c", "4", "c", "c"]);
//! assert_eq!(summary.get("c"), Some(75.0));
//! assert_eq!(summary.get("4"), Some(25.0));
//! ```

mod api;
mod chart;
mod color;
mod error;
mod formatter;
mod options;
mod reader;
mod render;
mod report;
mod security;
mod style;
mod summary;

// 公開API
pub use api::{ColumnSelector, DateFormat, LegendPosition, SheetSelector, SummaryFormat};
pub use chart::{HBarChart, Region};
pub use error::ChartZeroError;
pub use options::{ChartOptions, ChartStyle, ChartStyleBuilder};
pub use render::render_summary;
pub use report::{Report, ReportBuilder};
pub use summary::{summarize, PercentageSummary};

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        // Placeholder test
        // This test always passes
    }
}
