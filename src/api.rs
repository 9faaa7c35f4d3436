use dioxus::prelude::*;
use serde_json::Value;

use crate::shared::types::{ApiResponse, BiResponse, Chart, ChartPage, ChartQuery, GenChartRequest};

#[cfg(feature = "server")]
fn to_server_err(context: &str, e: anyhow::Error) -> ServerFnError {
    dioxus::logger::tracing::error!("{context}: {e:#}");
    ServerFnError::new(format!("{e}"))
}

#[server(ListMyCharts)]
pub async fn list_my_charts(query: ChartQuery) -> Result<ApiResponse<ChartPage>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        crate::backend::bi_api::list_my_charts(&query)
            .await
            .map_err(|e| to_server_err("list_my_charts", e))
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = query;
        Ok(ApiResponse::empty(-1, "server unavailable"))
    }
}

#[server(GetChart)]
pub async fn get_chart(id: i64) -> Result<ApiResponse<Chart>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        crate::backend::bi_api::get_chart(id)
            .await
            .map_err(|e| to_server_err("get_chart", e))
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = id;
        Ok(ApiResponse::empty(-1, "server unavailable"))
    }
}

#[server(DeleteChart)]
pub async fn delete_chart(id: i64) -> Result<ApiResponse<Value>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        crate::backend::bi_api::delete_chart(id)
            .await
            .map_err(|e| to_server_err("delete_chart", e))
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = id;
        Ok(ApiResponse::empty(-1, "server unavailable"))
    }
}

#[server(RetryChart)]
pub async fn retry_chart(id: i64) -> Result<ApiResponse<Value>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        crate::backend::bi_api::retry_chart(id)
            .await
            .map_err(|e| to_server_err("retry_chart", e))
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = id;
        Ok(ApiResponse::empty(-1, "server unavailable"))
    }
}

#[server(GenChart)]
pub async fn gen_chart(req: GenChartRequest) -> Result<ApiResponse<BiResponse>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        crate::backend::bi_api::gen_chart(&req)
            .await
            .map_err(|e| to_server_err("gen_chart", e))
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = req;
        Ok(ApiResponse::empty(-1, "server unavailable"))
    }
}

#[server(GenChartAsync)]
pub async fn gen_chart_async(
    req: GenChartRequest,
) -> Result<ApiResponse<BiResponse>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        crate::backend::bi_api::gen_chart_async(&req)
            .await
            .map_err(|e| to_server_err("gen_chart_async", e))
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = req;
        Ok(ApiResponse::empty(-1, "server unavailable"))
    }
}
