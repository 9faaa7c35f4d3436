use dioxus::prelude::ServerFnError;
use serde_json::Value;

use crate::charts::option::prepare_records;
use crate::components::toast::Notice;
use crate::shared::types::{
    ApiResponse, BiResponse, Chart, ChartPage, ChartQuery, GenChartRequest,
};

pub const FETCH_FAILED: &str = "Failed to fetch my charts";

impl ChartQuery {
    /// New search: back to page 1 with the current page size and sort.
    pub fn search(&self, name: &str) -> Self {
        let name = name.trim();
        Self {
            current: 1,
            name: (!name.is_empty()).then(|| name.to_string()),
            ..self.clone()
        }
    }

    pub fn paginate(&self, page: u32, page_size: u32) -> Self {
        Self {
            current: page.max(1),
            page_size: page_size.max(1),
            ..self.clone()
        }
    }

    pub fn page_count(&self, total: u64) -> u32 {
        let size = u64::from(self.page_size.max(1));
        total.div_ceil(size).max(1) as u32
    }
}

/// Remote operations the chart pages need.
#[allow(async_fn_in_trait)]
pub trait ChartApi {
    async fn list(&self, query: &ChartQuery) -> Result<ApiResponse<ChartPage>, ServerFnError>;
    async fn get(&self, id: i64) -> Result<ApiResponse<Chart>, ServerFnError>;
    async fn delete(&self, id: i64) -> Result<ApiResponse<Value>, ServerFnError>;
    async fn retry(&self, id: i64) -> Result<ApiResponse<Value>, ServerFnError>;
    async fn generate(&self, req: GenChartRequest)
        -> Result<ApiResponse<BiResponse>, ServerFnError>;
    async fn generate_async(
        &self,
        req: GenChartRequest,
    ) -> Result<ApiResponse<BiResponse>, ServerFnError>;
}

/// Server functions as a `ChartApi`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerChartApi;

impl ChartApi for ServerChartApi {
    async fn list(&self, query: &ChartQuery) -> Result<ApiResponse<ChartPage>, ServerFnError> {
        crate::api::list_my_charts(query.clone()).await
    }

    async fn get(&self, id: i64) -> Result<ApiResponse<Chart>, ServerFnError> {
        crate::api::get_chart(id).await
    }

    async fn delete(&self, id: i64) -> Result<ApiResponse<Value>, ServerFnError> {
        crate::api::delete_chart(id).await
    }

    async fn retry(&self, id: i64) -> Result<ApiResponse<Value>, ServerFnError> {
        crate::api::retry_chart(id).await
    }

    async fn generate(
        &self,
        req: GenChartRequest,
    ) -> Result<ApiResponse<BiResponse>, ServerFnError> {
        crate::api::gen_chart(req).await
    }

    async fn generate_async(
        &self,
        req: GenChartRequest,
    ) -> Result<ApiResponse<BiResponse>, ServerFnError> {
        crate::api::gen_chart_async(req).await
    }
}

/// What the "my charts" page currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartList {
    pub records: Vec<Chart>,
    pub total: u64,
    pub loading: bool,
}

impl ChartList {
    /// Applies a list response. Failures keep the previous page and
    /// return the toast to show.
    pub fn apply(
        &mut self,
        result: Result<ApiResponse<ChartPage>, ServerFnError>,
    ) -> Option<Notice> {
        self.loading = false;
        match result {
            Ok(ApiResponse {
                data: Some(page), ..
            }) => {
                self.records = prepare_records(page.records.unwrap_or_default());
                self.total = page.total.unwrap_or(0).max(0) as u64;
                None
            }
            Ok(_) => Some(Notice::error(FETCH_FAILED)),
            Err(e) => Some(Notice::error(format!("{FETCH_FAILED}, {e}"))),
        }
    }
}

pub async fn refresh<A: ChartApi>(
    api: &A,
    list: &mut ChartList,
    query: &ChartQuery,
) -> Option<Notice> {
    list.loading = true;
    let result = api.list(query).await;
    list.apply(result)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub notice: Notice,
    pub reload: bool,
}

fn outcome(
    result: Result<ApiResponse<Value>, ServerFnError>,
    ok: &str,
    failed: &str,
) -> ActionOutcome {
    match result {
        Ok(res) if res.succeeded() => ActionOutcome {
            notice: Notice::success(ok),
            reload: true,
        },
        Ok(_) => ActionOutcome {
            notice: Notice::error(failed),
            reload: false,
        },
        Err(e) => ActionOutcome {
            notice: Notice::error(format!("{failed}, {e}")),
            reload: false,
        },
    }
}

pub async fn delete_chart<A: ChartApi>(api: &A, id: i64) -> ActionOutcome {
    outcome(api.delete(id).await, "Deleted", "Delete failed")
}

pub async fn retry_chart<A: ChartApi>(api: &A, id: i64) -> ActionOutcome {
    outcome(api.retry(id).await, "Submitted", "Submit failed")
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use crate::shared::types::ChartStatus;
    use std::cell::RefCell;

    /// In-memory backend with the same paging and filtering rules.
    #[derive(Default)]
    pub struct FakeApi {
        pub charts: RefCell<Vec<Chart>>,
        pub fail_deletes: bool,
        pub offline: bool,
        pub calls: RefCell<Vec<String>>,
    }

    impl FakeApi {
        pub fn with(charts: Vec<Chart>) -> Self {
            Self {
                charts: RefCell::new(charts),
                ..Default::default()
            }
        }

        fn check(&self, call: String) -> Result<(), ServerFnError> {
            self.calls.borrow_mut().push(call);
            if self.offline {
                return Err(ServerFnError::new("connection refused"));
            }
            Ok(())
        }
    }

    pub fn chart(id: i64, name: &str, status: ChartStatus) -> Chart {
        Chart {
            id: Some(id),
            name: Some(name.to_string()),
            status: Some(status),
            gen_chart: Some(r#"{"title":{"text":"x"},"series":[]}"#.to_string()),
            ..Default::default()
        }
    }

    impl ChartApi for FakeApi {
        async fn list(
            &self,
            query: &ChartQuery,
        ) -> Result<ApiResponse<ChartPage>, ServerFnError> {
            self.check(format!("list {} {}", query.current, query.page_size))?;
            let all: Vec<Chart> = self
                .charts
                .borrow()
                .iter()
                .filter(|c| match &query.name {
                    Some(n) => c.name.as_deref().unwrap_or("").contains(n.as_str()),
                    None => true,
                })
                .cloned()
                .collect();
            let size = query.page_size as usize;
            let skip = (query.current as usize - 1) * size;
            Ok(ApiResponse::ok(ChartPage {
                total: Some(all.len() as i64),
                records: Some(all.into_iter().skip(skip).take(size).collect()),
                ..Default::default()
            }))
        }

        async fn get(&self, id: i64) -> Result<ApiResponse<Chart>, ServerFnError> {
            self.check(format!("get {id}"))?;
            let found = self.charts.borrow().iter().find(|c| c.id == Some(id)).cloned();
            Ok(match found {
                Some(c) => ApiResponse::ok(c),
                None => ApiResponse::empty(40400, "not found"),
            })
        }

        async fn delete(&self, id: i64) -> Result<ApiResponse<Value>, ServerFnError> {
            self.check(format!("delete {id}"))?;
            if self.fail_deletes {
                return Ok(ApiResponse::ok(Value::Bool(false)));
            }
            let mut charts = self.charts.borrow_mut();
            let before = charts.len();
            charts.retain(|c| c.id != Some(id));
            Ok(ApiResponse::ok(Value::Bool(charts.len() < before)))
        }

        async fn retry(&self, id: i64) -> Result<ApiResponse<Value>, ServerFnError> {
            self.check(format!("retry {id}"))?;
            let mut charts = self.charts.borrow_mut();
            match charts.iter_mut().find(|c| c.id == Some(id)) {
                Some(c) => {
                    c.status = Some(ChartStatus::Wait);
                    Ok(ApiResponse::ok(serde_json::json!({ "chartId": id })))
                }
                None => Ok(ApiResponse::empty(40400, "not found")),
            }
        }

        async fn generate(
            &self,
            req: GenChartRequest,
        ) -> Result<ApiResponse<BiResponse>, ServerFnError> {
            self.check(format!("generate {}", req.name))?;
            Ok(ApiResponse::ok(BiResponse {
                chart_id: Some(99),
                gen_chart: Some(r#"{"series":[]}"#.to_string()),
                gen_result: Some(format!("analysis of {}", req.goal)),
            }))
        }

        async fn generate_async(
            &self,
            req: GenChartRequest,
        ) -> Result<ApiResponse<BiResponse>, ServerFnError> {
            self.check(format!("generate_async {}", req.name))?;
            let id = self.charts.borrow().len() as i64 + 100;
            let mut c = chart(id, &req.name, ChartStatus::Wait);
            c.gen_chart = None;
            self.charts.borrow_mut().push(c);
            Ok(ApiResponse::ok(BiResponse {
                chart_id: Some(id),
                ..Default::default()
            }))
        }
    }
}
