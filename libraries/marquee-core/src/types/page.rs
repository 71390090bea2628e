//! Pagination envelope types

use serde::{Deserialize, Serialize};

/// Pagination envelope returned by the listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// One page worth of records
    pub data: Vec<T>,
    /// Server-reported pagination state
    #[serde(default)]
    pub metadata: PageMetadata,
}

/// Pagination metadata attached to a `Page`.
///
/// The upstream API is loose about which keys appear on which
/// endpoint, so every field defaults to zero rather than failing the
/// whole envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMetadata {
    /// 1-based index of this page
    #[serde(default)]
    pub current_page: u32,

    /// Records per page
    #[serde(default)]
    pub per_page: u32,

    /// Total number of pages
    #[serde(default)]
    pub page_count: u32,

    /// Total number of records across all pages
    #[serde(default)]
    pub total_count: u32,
}
