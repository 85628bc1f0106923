//! Pagination request and result types.

use serde::{Deserialize, Serialize};

use super::user::User;
use crate::constants::{DEFAULT_PAGE_SIZE, FIRST_PAGE, ROLE_ALL};

/// Body of a `list_users` request.
///
/// `search` and `role` are omitted from the serialized body when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl PageRequest {
    /// Request a page at the fixed page size. Page `0` is treated as the first page.
    pub fn new(page: u32) -> Self {
        Self {
            page: page.max(FIRST_PAGE),
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
            role: None,
        }
    }

    /// Set the search term; an empty term leaves the request unfiltered.
    pub fn search(mut self, term: Option<&str>) -> Self {
        self.search = term.filter(|t| !t.is_empty()).map(str::to_string);
        self
    }

    /// Set the role filter. Empty and `"all"` mean no filter; anything else is sent verbatim.
    pub fn role(mut self, role: Option<&str>) -> Self {
        self.role = role
            .filter(|r| !r.is_empty() && *r != ROLE_ALL)
            .map(str::to_string);
        self
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(FIRST_PAGE)
    }
}

/// Body of a `list_users_by_filter` request. `filter` is always sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterRequest {
    pub page: u32,
    pub page_size: u32,
    pub filter: String,
}

impl FilterRequest {
    /// Page `0` becomes the first page and page size `0` becomes the default.
    pub fn new(page: u32, filter: impl Into<String>, page_size: u32) -> Self {
        Self {
            page: page.max(FIRST_PAGE),
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
            filter: filter.into(),
        }
    }
}

impl Default for FilterRequest {
    fn default() -> Self {
        Self::new(FIRST_PAGE, String::new(), DEFAULT_PAGE_SIZE)
    }
}

/// Normalized pagination envelope.
///
/// Decoding keeps exactly these four fields; anything else the server
/// sends alongside them is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    pub users: Vec<User>,
    pub total_pages: u64,
    pub current_page: u64,
    pub total_users: u64,
}

impl PageResult {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Whether a page after `current_page` exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn page_request_always_uses_fixed_page_size() {
        for page in [1, 2, 17, u32::MAX] {
            let body = serde_json::to_value(PageRequest::new(page)).unwrap();
            assert_eq!(body["page_size"], 5);
            assert_eq!(body["page"], page);
        }
    }

    #[test]
    fn page_zero_is_normalized_to_first_page() {
        assert_eq!(PageRequest::new(0).page, 1);
        assert_eq!(FilterRequest::new(0, "", 5).page, 1);
    }

    #[test]
    fn unset_optionals_are_omitted() {
        let body = serde_json::to_value(PageRequest::default()).unwrap();
        assert_eq!(body, json!({"page": 1, "page_size": 5}));
    }

    #[test]
    fn role_all_and_empty_are_dropped() {
        assert_eq!(PageRequest::new(1).role(Some("all")).role, None);
        assert_eq!(PageRequest::new(1).role(Some("")).role, None);
        assert_eq!(PageRequest::new(1).role(None).role, None);
        assert_eq!(
            PageRequest::new(1).role(Some("supervisor")).role.as_deref(),
            Some("supervisor")
        );
        // Matching is exact, so only the literal "all" is special.
        assert_eq!(PageRequest::new(1).role(Some("All")).role.as_deref(), Some("All"));
    }

    #[test]
    fn empty_search_is_dropped() {
        assert_eq!(PageRequest::new(1).search(Some("")).search, None);
        assert_eq!(
            PageRequest::new(1).search(Some("ana")).search.as_deref(),
            Some("ana")
        );
    }

    #[test]
    fn filter_request_defaults() {
        let body = serde_json::to_value(FilterRequest::default()).unwrap();
        assert_eq!(body, json!({"page": 1, "page_size": 5, "filter": ""}));
        assert_eq!(FilterRequest::new(3, "x", 0).page_size, 5);
        assert_eq!(FilterRequest::new(3, "x", 20).page_size, 20);
    }

    #[test]
    fn page_result_drops_unknown_fields() {
        let raw = json!({
            "users": [{"id": 1}],
            "total_pages": 3,
            "current_page": 1,
            "total_users": 11,
            "debug": "ignored",
        });
        let page: PageResult = serde_json::from_value(raw).unwrap();
        let back = serde_json::to_value(&page).unwrap();
        let keys: Vec<_> = back.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 4);
        assert!(back.get("debug").is_none());
        assert!(page.has_next());
    }
}
