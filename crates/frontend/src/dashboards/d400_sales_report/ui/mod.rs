mod dashboard;

pub use dashboard::SalesReportPage;
