use crate::shared::types::{Chart, ChartStatus};

pub const DEFAULT_WAIT_MESSAGE: &str = "The chart generation queue is busy, please wait";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Warning,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub title: &'static str,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartAction {
    Retry,
    Delete,
    ViewDetails,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub banner: Option<Banner>,
    /// Render the chart and result text.
    pub show_chart: bool,
    pub actions: &'static [ChartAction],
}

pub fn status_view(chart: &Chart) -> StatusView {
    let message = chart.exec_message.clone();
    match chart.status {
        Some(ChartStatus::Wait) => StatusView {
            banner: Some(Banner {
                kind: BannerKind::Warning,
                title: "Waiting to generate",
                message: Some(message.unwrap_or_else(|| DEFAULT_WAIT_MESSAGE.to_string())),
            }),
            show_chart: false,
            actions: &[],
        },
        Some(ChartStatus::Running) => StatusView {
            banner: Some(Banner {
                kind: BannerKind::Info,
                title: "Generating chart",
                message,
            }),
            show_chart: false,
            actions: &[],
        },
        Some(ChartStatus::Succeed) => StatusView {
            banner: None,
            show_chart: true,
            actions: &[ChartAction::Delete, ChartAction::ViewDetails],
        },
        Some(ChartStatus::Failed) => StatusView {
            banner: Some(Banner {
                kind: BannerKind::Error,
                title: "Chart generation failed",
                message,
            }),
            show_chart: false,
            actions: &[ChartAction::Retry, ChartAction::Delete],
        },
        Some(ChartStatus::Unknown) | None => StatusView {
            banner: None,
            show_chart: false,
            actions: &[],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(status: ChartStatus, msg: Option<&str>) -> Chart {
        Chart {
            status: Some(status),
            exec_message: msg.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn wait_falls_back_to_default_message() {
        let v = status_view(&chart(ChartStatus::Wait, None));
        let b = v.banner.unwrap();
        assert_eq!(b.kind, BannerKind::Warning);
        assert_eq!(b.message.as_deref(), Some(DEFAULT_WAIT_MESSAGE));
        assert!(v.actions.is_empty());

        let v = status_view(&chart(ChartStatus::Wait, Some("3 ahead of you")));
        assert_eq!(v.banner.unwrap().message.as_deref(), Some("3 ahead of you"));
    }

    #[test]
    fn running_shows_server_message_only() {
        let v = status_view(&chart(ChartStatus::Running, None));
        let b = v.banner.unwrap();
        assert_eq!(b.kind, BannerKind::Info);
        assert_eq!(b.message, None);
        assert!(!v.show_chart);
    }

    #[test]
    fn succeed_offers_delete_and_details() {
        let v = status_view(&chart(ChartStatus::Succeed, None));
        assert!(v.banner.is_none());
        assert!(v.show_chart);
        assert_eq!(v.actions, &[ChartAction::Delete, ChartAction::ViewDetails]);
    }

    #[test]
    fn failed_offers_retry_and_delete() {
        let v = status_view(&chart(ChartStatus::Failed, Some("AI timeout")));
        let b = v.banner.unwrap();
        assert_eq!(b.kind, BannerKind::Error);
        assert_eq!(b.message.as_deref(), Some("AI timeout"));
        assert_eq!(v.actions, &[ChartAction::Retry, ChartAction::Delete]);
    }

    #[test]
    fn unknown_status_renders_nothing() {
        let v = status_view(&Chart::default());
        assert_eq!(
            v,
            StatusView {
                banner: None,
                show_chart: false,
                actions: &[]
            }
        );
    }
}
