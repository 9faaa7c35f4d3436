pub mod add_chart;
pub mod admin;
pub mod chart_detail;
pub mod my_chart;
pub mod not_found;
pub mod user;
pub mod welcome;

pub use add_chart::{AddChart, AddChartAsync};
pub use admin::AdminSubPage;
pub use chart_detail::ChartDetail;
pub use my_chart::MyChart;
pub use not_found::NotFound;
pub use user::{UserLogin, UserRegister};
pub use welcome::Welcome;
