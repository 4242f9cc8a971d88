mod fetch;
pub use fetch::{FetchState, ReportFetch, RequestToken};

mod view_model;
pub use view_model::{ReportViewModel, RowView, SectionView};

mod summary;
pub use summary::SummaryViewModel;

mod charts;
pub use charts::{ChartOptions, TrendChart};
