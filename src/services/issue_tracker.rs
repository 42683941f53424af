use async_trait::async_trait;

use crate::domain::issue::{SearchPage, SearchRequest};
use crate::error::AppResult;

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> AppResult<SearchPage>;
}
