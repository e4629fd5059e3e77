mod report_line;
mod reporter;

pub use report_line::ReportLine;
pub use reporter::Reporter;
