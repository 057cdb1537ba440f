//! Report assembly, formatting and document rendering

pub mod report;
pub mod formatter;
pub mod document;

pub use formatter::{save_report_to_file, OutputFormatter, ReportGenerator};
pub use report::{AnalysisReport, FactsReport};
