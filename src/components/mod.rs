pub mod chart_card;
pub mod csv_table;
pub mod echart;
pub mod footer;
pub mod layout;
pub mod pagination;
pub mod toast;

pub use chart_card::{ChartCard, StatusBanner};
pub use csv_table::CsvTable;
pub use echart::EChart;
pub use footer::Footer;
pub use layout::AppLayout;
pub use pagination::Pagination;
pub use toast::{use_toasts, Notice, ToastHost};
