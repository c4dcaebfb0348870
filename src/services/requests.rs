//! Borrow request board service

use chrono::Utc;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        request::{CreateRequest, ItemRequest, RequestOut},
        PageParams,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct RequestsService {
    repository: Repository,
}

impl RequestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Post a new borrow request
    pub async fn create(&self, request: CreateRequest, user_id: i64) -> AppResult<RequestOut> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.users.get_by_id(user_id).await?;
        let created = self
            .repository
            .requests
            .create(&request.description, user_id, Utc::now())
            .await?;
        tracing::info!("Request {} created by user {}", created.id, user_id);
        Ok(RequestOut {
            id: created.id,
            description: created.description,
            created: created.created,
            items: Vec::new(),
        })
    }

    /// List the acting user's own requests, newest first, with fulfilling items
    pub async fn list_by_requestor(&self, user_id: i64) -> AppResult<Vec<RequestOut>> {
        self.repository.users.get_by_id(user_id).await?;
        let requests = self.repository.requests.list_by_requestor(user_id).await?;
        self.add_items(requests).await
    }

    /// List everyone else's requests, newest first, paginated, with fulfilling items
    pub async fn list_others(&self, page: PageParams, user_id: i64) -> AppResult<Vec<RequestOut>> {
        page.validate()?;
        self.repository.users.get_by_id(user_id).await?;
        let requests = self
            .repository
            .requests
            .list_others(user_id, page.limit(), page.offset())
            .await?;
        self.add_items(requests).await
    }

    /// Get one request with its fulfilling items, visible to any known user
    pub async fn get_by_id(&self, request_id: i64, user_id: i64) -> AppResult<RequestOut> {
        self.repository.users.get_by_id(user_id).await?;
        let request = self.repository.requests.get_by_id(request_id).await?;
        let items = self.repository.items.find_by_request(request.id).await?;
        Ok(RequestOut {
            id: request.id,
            description: request.description,
            created: request.created,
            items,
        })
    }

    async fn add_items(&self, requests: Vec<ItemRequest>) -> AppResult<Vec<RequestOut>> {
        let mut out = Vec::with_capacity(requests.len());
        for request in requests {
            let items = self.repository.items.find_by_request(request.id).await?;
            out.push(RequestOut {
                id: request.id,
                description: request.description,
                created: request.created,
                items,
            });
        }
        Ok(out)
    }
}
