mod sessions;
pub use sessions::Sessions;

mod report;
pub use report::SummaryReport;

mod full_report;
pub use full_report::FullReport;
