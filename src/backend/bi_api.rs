#![cfg(feature = "server")]
use anyhow::{anyhow, Context, Result};
use dioxus::logger::tracing::{debug, info, warn};
use once_cell::sync::Lazy;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::error::Error as _;
use std::time::Duration;

use crate::backend::config::{BiApiConfig, CONFIG};
use crate::shared::types::{
    ApiResponse, BiResponse, Chart, ChartPage, ChartQuery, GenChartRequest, IdRequest,
};

static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .connect_timeout(Duration::from_secs(2))
        .build()
        .unwrap_or_else(|e| {
            warn!("[bi-api] falling back to default client: {e}");
            Client::new()
        })
});

pub const LIST_MY_CHARTS: &str = "/api/chart/my/list/page";
pub const GET_CHART: &str = "/api/chart/get";
pub const DELETE_CHART: &str = "/api/chart/delete";
pub const RETRY_CHART: &str = "/api/chart/gen/async/mq/retry";
pub const GEN_CHART: &str = "/api/chart/gen";
pub const GEN_CHART_ASYNC: &str = "/api/chart/gen/async/mq";

enum Body {
    Json(Value),
    Multipart(Form),
}

fn timeout_for(config: &BiApiConfig, path: &str) -> Duration {
    if path == GEN_CHART {
        config.gen_timeout
    } else {
        config.timeout
    }
}

fn with_session(req: RequestBuilder) -> RequestBuilder {
    match &CONFIG.cookie {
        Some(cookie) => req.header("Cookie", cookie),
        None => req,
    }
}

async fn call_bi_api<T: DeserializeOwned>(
    path: &str,
    method: Method,
    query: &[(&str, String)],
    body: Option<Body>,
) -> Result<ApiResponse<T>> {
    let url = format!("{}{}", CONFIG.base_url()?, path);
    info!("[bi-api] {} {}", method.as_str(), url);
    let method_s = method.as_str().to_string();
    let timeout = timeout_for(&CONFIG, path);
    let mut req = with_session(CLIENT.request(method, &url))
        .timeout(timeout)
        .header("Accept", "application/json")
        .header("Cache-Control", "no-store");
    if !query.is_empty() {
        req = req.query(query);
    }
    req = match body {
        Some(Body::Json(v)) => req.json(&v),
        Some(Body::Multipart(form)) => req.multipart(form),
        None => req,
    };
    let res = match req.send().await {
        Ok(r) => r,
        Err(e) => {
            warn!("[bi-api] request error on {} {}: {}", method_s, url, e);
            if e.is_timeout() {
                warn!("[bi-api] hint: request timed out ({:?})", timeout);
            }
            if e.is_connect() {
                warn!("[bi-api] hint: connection failed. Check BI_API_URL and that the backend is up");
            }
            let mut chain = Vec::new();
            let mut src: Option<&dyn std::error::Error> = e.source();
            while let Some(s) = src {
                chain.push(s.to_string());
                src = s.source();
            }
            if !chain.is_empty() {
                warn!("[bi-api] error chain: {}", chain.join(" -> "));
            }
            return Err(anyhow!("sending {} {}: {}", method_s, url, e));
        }
    };
    if !res.status().is_success() {
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        warn!("[bi-api] request failed: status={} body=\n{}", status, text);
        return Err(anyhow!("{} {} failed with status {}", method_s, url, status));
    }
    let bytes = res
        .bytes()
        .await
        .with_context(|| format!("reading body from {} {}", method_s, url))?;
    let data: ApiResponse<T> = serde_json::from_slice(&bytes).map_err(|e| {
        let snip = String::from_utf8_lossy(&bytes);
        let snip = snip.chars().take(300).collect::<String>();
        anyhow!(
            "decoding JSON from {} {} failed: {}\nBody snippet: {}",
            method_s,
            url,
            e,
            snip
        )
    })?;
    if data.data.is_none() {
        debug!(
            "[bi-api] {} {} answered code={} without data: {:?}",
            method_s, url, data.code, data.message
        );
    }
    Ok(data)
}

fn json_body<T: serde::Serialize>(value: &T) -> Result<Option<Body>> {
    Ok(Some(Body::Json(
        serde_json::to_value(value).context("encoding request body")?,
    )))
}

fn gen_form(req: &GenChartRequest) -> Result<Form> {
    let file = Part::text(req.csv.clone())
        .file_name("data.csv")
        .mime_str("text/csv")
        .context("building upload part")?;
    Ok(Form::new()
        .part("file", file)
        .text("name", req.name.clone())
        .text("goal", req.goal.clone())
        .text("chartType", req.chart_type.clone()))
}

pub async fn list_my_charts(query: &ChartQuery) -> Result<ApiResponse<ChartPage>> {
    call_bi_api(LIST_MY_CHARTS, Method::POST, &[], json_body(query)?).await
}

pub async fn get_chart(id: i64) -> Result<ApiResponse<Chart>> {
    call_bi_api(GET_CHART, Method::GET, &[("id", id.to_string())], None).await
}

pub async fn delete_chart(id: i64) -> Result<ApiResponse<Value>> {
    call_bi_api(DELETE_CHART, Method::POST, &[], json_body(&IdRequest { id })?).await
}

pub async fn retry_chart(id: i64) -> Result<ApiResponse<Value>> {
    call_bi_api(RETRY_CHART, Method::POST, &[], json_body(&IdRequest { id })?).await
}

pub async fn gen_chart(req: &GenChartRequest) -> Result<ApiResponse<BiResponse>> {
    let form = gen_form(req)?;
    call_bi_api(GEN_CHART, Method::POST, &[], Some(Body::Multipart(form))).await
}

pub async fn gen_chart_async(req: &GenChartRequest) -> Result<ApiResponse<BiResponse>> {
    let form = gen_form(req)?;
    call_bi_api(GEN_CHART_ASYNC, Method::POST, &[], Some(Body::Multipart(form))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_sync_generation_gets_the_long_timeout() {
        let config = BiApiConfig::from_vars(|k| match k {
            "BI_API_TIMEOUT_SECS" => Some("5".into()),
            "BI_API_GEN_TIMEOUT_SECS" => Some("90".into()),
            _ => None,
        });
        assert_eq!(timeout_for(&config, GEN_CHART), Duration::from_secs(90));
        assert_eq!(timeout_for(&config, GEN_CHART_ASYNC), Duration::from_secs(5));
        assert_eq!(timeout_for(&config, LIST_MY_CHARTS), Duration::from_secs(5));
    }
}
