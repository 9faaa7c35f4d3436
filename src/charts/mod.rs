//! Chart records as the list and detail pages see them.

pub mod list;
pub mod option;
pub mod status;

pub use list::{delete_chart, refresh, retry_chart, ChartApi, ChartList, ServerChartApi};
pub use status::{status_view, Banner, BannerKind, ChartAction};
