use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Limit/offset query parameters accepted by every collection endpoint.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct Pagination {
    /// Maximum number of items to return (default 100)
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Number of items to skip (default 0)
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    100
}

impl Pagination {
    pub fn limit(&self) -> i64 {
        self.limit.clamp(0, 1000)
    }

    pub fn offset(&self) -> i64 {
        self.offset.max(0)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
        }
    }
}

/// One page of items together with the total row count.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub count: i64,
}
