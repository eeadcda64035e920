pub mod in_memory;
pub mod record_tags;
pub mod tag_query;

use async_trait::async_trait;

pub use self::{in_memory::InMemoryRecordStore, record_tags::RecordTags, tag_query::TagQuery};
use crate::errors::error::{ExchangeError, ExchangeResult};

/// A value that can be persisted in a [`RecordStore`].
pub trait StorageRecord: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;

    /// Lookup tags. They are derived from the record's fields on every call.
    fn tags(&self) -> RecordTags;

    /// Version used for optimistic concurrency on update.
    fn version(&self) -> u64;

    fn set_version(&mut self, version: u64);

    /// Key that no two records of a category may share, checked on save alongside the id.
    fn unique_key(&self) -> Option<String> {
        None
    }
}

#[async_trait]
pub trait RecordStore<T: StorageRecord>: Send + Sync {
    /// Name of the record category, used in diagnostics.
    fn category(&self) -> &str;

    async fn save(&self, record: &T) -> ExchangeResult<()>;

    /// Persists `record` if its version matches the stored one, then bumps the version
    /// on both the stored and the given record.
    async fn update(&self, record: &mut T) -> ExchangeResult<()>;

    async fn delete(&self, id: &str) -> ExchangeResult<()>;

    async fn find_by_id(&self, id: &str) -> ExchangeResult<Option<T>>;

    async fn find_by_query(&self, query: &TagQuery) -> ExchangeResult<Vec<T>>;

    async fn get_all(&self) -> ExchangeResult<Vec<T>>;

    async fn get_by_id(&self, id: &str) -> ExchangeResult<T> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| ExchangeError::not_found(self.category(), format!("id: {id}")))
    }

    async fn find_single_by_query(&self, query: &TagQuery) -> ExchangeResult<Option<T>> {
        let mut records = self.find_by_query(query).await?;
        if records.len() > 1 {
            return Err(ExchangeError::duplicate(
                self.category(),
                format!("{} records match query {query}", records.len()),
            ));
        }
        Ok(records.pop())
    }

    async fn get_single_by_query(&self, query: &TagQuery) -> ExchangeResult<T> {
        self.find_single_by_query(query)
            .await?
            .ok_or_else(|| ExchangeError::not_found(self.category(), format!("query: {query}")))
    }
}
