//! Item catalog service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        item::{CreateItem, Item, ItemDetails, ItemOut, UpdateItem},
        PageParams,
    },
    repository::Repository,
};

/// Apply a partial update to an item. Blank or absent strings are no-ops;
/// `available` is applied on presence, regardless of its value.
fn apply_patch(item: &mut Item, patch: UpdateItem) {
    if let Some(name) = patch.name {
        if !name.trim().is_empty() {
            item.name = name;
        }
    }
    if let Some(description) = patch.description {
        if !description.trim().is_empty() {
            item.description = description;
        }
    }
    if let Some(available) = patch.available {
        item.available = available;
    }
}

#[derive(Clone)]
pub struct ItemsService {
    repository: Repository,
}

impl ItemsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List an item for sharing
    pub async fn create(&self, item: CreateItem, user_id: i64) -> AppResult<ItemOut> {
        item.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.users.get_by_id(user_id).await?;
        if let Some(request_id) = item.request_id {
            self.repository.requests.get_by_id(request_id).await?;
        }
        let created = self.repository.items.create(&item, user_id).await?;
        tracing::info!("Item {} created by user {}", created.id, user_id);
        self.repository.items.get_with_owner(created.id).await
    }

    /// Partially update an item, owner only
    pub async fn update(
        &self,
        item_id: i64,
        patch: UpdateItem,
        user_id: i64,
    ) -> AppResult<ItemOut> {
        self.repository.users.get_by_id(user_id).await?;
        let mut item = self.repository.items.get_by_id(item_id).await?;
        if item.owner_id != user_id {
            return Err(AppError::NotOwner(format!(
                "User {} does not own item {}",
                user_id, item_id
            )));
        }
        apply_patch(&mut item, patch);
        self.repository.items.update(&item).await?;
        tracing::info!("Item {} updated", item.id);
        self.repository.items.get_with_owner(item.id).await
    }

    /// Get an item with its comments; booking outlook is attached for the owner
    pub async fn get_by_id(&self, item_id: i64, user_id: i64) -> AppResult<ItemDetails> {
        let item = self.repository.items.get_with_owner(item_id).await?;
        let comments = self.repository.comments.find_by_item(item_id).await?;
        let (last_booking, next_booking) = if item.owner.id == user_id {
            (
                self.repository.bookings.last_for_item(item_id).await?,
                self.repository.bookings.next_for_item(item_id).await?,
            )
        } else {
            (None, None)
        };
        Ok(ItemDetails {
            id: item.id,
            name: item.name,
            description: item.description,
            available: item.available,
            owner: item.owner,
            request_id: item.request_id,
            last_booking,
            next_booking,
            comments,
        })
    }

    /// List the acting user's items, paginated
    pub async fn list_by_owner(&self, page: PageParams, user_id: i64) -> AppResult<Vec<ItemOut>> {
        page.validate()?;
        self.repository.users.get_by_id(user_id).await?;
        self.repository
            .items
            .list_by_owner(user_id, page.limit(), page.offset())
            .await
    }

    /// Search available items by name or description.
    /// Blank text short-circuits to an empty result without a query.
    pub async fn search(&self, page: PageParams, text: &str) -> AppResult<Vec<ItemOut>> {
        page.validate()?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        self.repository
            .items
            .search(text, page.limit(), page.offset())
            .await
    }
}
