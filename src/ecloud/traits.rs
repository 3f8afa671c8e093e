//! Common traits for eCloud API responses

use serde::Deserialize;

/// Pagination metadata from the eCloud API
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationMeta {
    pub pagination: Option<Pagination>,
}

/// Pagination details
#[derive(Deserialize, Debug, Clone)]
pub struct Pagination {
    pub total: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub per_page: u32,
    pub current_page: u32,
    pub total_pages: u32,
}

/// Trait for API responses that contain paginated data
///
/// Implement this trait for any list response to enable use with
/// `EcloudClient::fetch_all_pages()`.
pub trait PaginatedResponse<T> {
    /// Consume self and return the data items
    fn into_data(self) -> Vec<T>;
    /// Get reference to pagination metadata
    fn meta(&self) -> Option<&PaginationMeta>;
}

/// Generic API list response wrapper for paginated endpoints
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
}

impl<T> PaginatedResponse<T> for ApiListResponse<T> {
    fn into_data(self) -> Vec<T> {
        self.data
    }

    fn meta(&self) -> Option<&PaginationMeta> {
        self.meta.as_ref()
    }
}

/// Single-resource response wrapper (`{"data": {...}}`)
#[derive(Deserialize, Debug)]
pub struct ApiItemResponse<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_list_response_meta() {
        let response: ApiListResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({
                "data": [{"id": "item-1"}],
                "meta": {
                    "pagination": {
                        "total": 5,
                        "count": 1,
                        "per_page": 1,
                        "current_page": 1,
                        "total_pages": 5
                    }
                }
            }))
            .unwrap();
        let pagination = response.meta().unwrap().pagination.as_ref().unwrap();
        assert_eq!(pagination.total_pages, 5);
        assert_eq!(pagination.total, 5);
        assert_eq!(response.into_data().len(), 1);
    }

    #[test]
    fn test_api_list_response_without_meta() {
        let response: ApiListResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({
                "data": [{"id": "item-1"}, {"id": "item-2"}]
            }))
            .unwrap();
        assert!(response.meta().is_none());
        assert_eq!(response.into_data().len(), 2);
    }

    #[test]
    fn test_api_item_response() {
        let response: ApiItemResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({"data": {"id": "task-1"}})).unwrap();
        assert_eq!(response.data["id"], "task-1");
    }
}
