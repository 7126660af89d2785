//! REST API Client
//!
//! Frontend bindings to the JaayBaan location API over browser fetch.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::models::{
    BreadcrumbItem, BulkOperationData, BulkOperationResult, CreateLocationData, Location,
    MoveLocationData, PaginatedResponse, SearchParams, Statistics, TreeNode, UpdateLocationData,
};

const API_BASE_URL: &str = "/api/v1";

fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

async fn request_raw(method: &str, path: &str, body: Option<String>) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{}{}", API_BASE_URL, path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_err)?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: Response = resp.dyn_into().map_err(|_| "not a Response".to_string())?;

    if !resp.ok() {
        return Err(format!("{} {} -> HTTP {}", method, path, resp.status()));
    }
    Ok(resp)
}

async fn request_json<T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: Option<String>,
) -> Result<T, String> {
    let resp = request_raw(method, path, body).await?;
    let json = JsFuture::from(resp.json().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

fn to_body<T: Serialize>(data: &T) -> Result<Option<String>, String> {
    serde_json::to_string(data).map(Some).map_err(|e| e.to_string())
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

/// Build the query string shared by the list and search endpoints
fn search_query(params: &SearchParams) -> String {
    let mut pairs: Vec<String> = Vec::new();
    if let Some(query) = &params.query {
        pairs.push(format!("query={}", encode(query)));
    }
    if let Some(ty) = params.location_type {
        pairs.push(format!("location_type={}", ty.as_str()));
    }
    if let Some(needs_cleaning) = params.needs_cleaning {
        pairs.push(format!("needs_cleaning={}", needs_cleaning));
    }
    if let Some(has_barcode) = params.has_barcode {
        pairs.push(format!("has_barcode={}", has_barcode));
    }
    match params.parent_id {
        Some(Some(id)) => pairs.push(format!("parent_id={}", id)),
        Some(None) => pairs.push("parent_id=root".to_string()),
        None => {}
    }
    if let Some(page) = params.page {
        pairs.push(format!("page={}", page));
    }
    if let Some(page_size) = params.page_size {
        pairs.push(format!("page_size={}", page_size));
    }
    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

// ========================
// Location Endpoints
// ========================

pub async fn list_locations(params: &SearchParams) -> Result<PaginatedResponse<Location>, String> {
    let path = format!("/locations/{}", search_query(params));
    request_json("GET", &path, None).await
}

pub async fn get_location(id: u32) -> Result<Location, String> {
    request_json("GET", &format!("/locations/{}/", id), None).await
}

pub async fn create_location(data: &CreateLocationData) -> Result<Location, String> {
    request_json("POST", "/locations/", to_body(data)?).await
}

pub async fn update_location(id: u32, data: &UpdateLocationData) -> Result<Location, String> {
    request_json("PATCH", &format!("/locations/{}/", id), to_body(data)?).await
}

pub async fn delete_location(id: u32) -> Result<(), String> {
    request_raw("DELETE", &format!("/locations/{}/", id), None).await?;
    Ok(())
}

pub async fn move_location(id: u32, data: &MoveLocationData) -> Result<Location, String> {
    request_json("POST", &format!("/locations/{}/move/", id), to_body(data)?).await
}

pub async fn mark_cleaned(id: u32) -> Result<Location, String> {
    request_json("POST", &format!("/locations/{}/mark-cleaned/", id), None).await
}

/// Fetch one level of the location tree. `None` returns the roots.
///
/// A childless parent yields `Ok(vec![])`, never an error.
pub async fn fetch_tree(parent_id: Option<u32>) -> Result<Vec<TreeNode>, String> {
    let path = match parent_id {
        Some(id) => format!("/locations/tree/?parent_id={}", id),
        None => "/locations/tree/".to_string(),
    };
    request_json("GET", &path, None).await
}

pub async fn get_breadcrumb(id: u32) -> Result<Vec<BreadcrumbItem>, String> {
    request_json("GET", &format!("/locations/{}/breadcrumb/", id), None).await
}

pub async fn search_locations(params: &SearchParams) -> Result<PaginatedResponse<Location>, String> {
    let path = format!("/locations/search/{}", search_query(params));
    request_json("GET", &path, None).await
}

pub async fn needing_cleaning() -> Result<PaginatedResponse<Location>, String> {
    request_json("GET", "/locations/needing-cleaning/", None).await
}

pub async fn get_statistics() -> Result<Statistics, String> {
    request_json("GET", "/locations/statistics/", None).await
}

pub async fn bulk_operations(data: &BulkOperationData) -> Result<BulkOperationResult, String> {
    request_json("POST", "/locations/bulk-operations/", to_body(data)?).await
}

/// Full data export as raw text; the caller turns it into a download.
pub async fn export_data() -> Result<String, String> {
    let resp = request_raw("GET", "/locations/export/", None).await?;
    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    text.as_string().ok_or_else(|| "export was not text".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocationType;

    #[test]
    fn search_query_is_empty_for_default_params() {
        assert_eq!(search_query(&SearchParams::default()), "");
    }

    #[test]
    fn search_query_joins_set_fields() {
        let params = SearchParams {
            query: Some("جعبه ابزار".to_string()),
            location_type: Some(LocationType::Box),
            needs_cleaning: Some(true),
            parent_id: Some(Some(12)),
            page_size: Some(50),
            ..Default::default()
        };
        let q = search_query(&params);
        assert!(q.starts_with('?'));
        assert!(q.contains("location_type=box"));
        assert!(q.contains("needs_cleaning=true"));
        assert!(q.contains("parent_id=12"));
        assert!(q.contains("page_size=50"));
        // Persian text and the space are percent-encoded
        assert!(!q.contains(' '));
        assert!(q.contains("query=%D8%AC"));
    }

    #[test]
    fn root_parent_serializes_as_root() {
        let params = SearchParams {
            parent_id: Some(None),
            ..Default::default()
        };
        assert_eq!(search_query(&params), "?parent_id=root");
    }
}
