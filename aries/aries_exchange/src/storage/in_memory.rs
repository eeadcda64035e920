use std::{
    collections::HashMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use async_trait::async_trait;

use super::{RecordStore, StorageRecord, TagQuery};
use crate::errors::error::{ExchangeError, ExchangeResult};

/// Record store kept in process memory, one instance per record category.
#[derive(Debug)]
pub struct InMemoryRecordStore<T> {
    category: String,
    store: RwLock<HashMap<String, T>>,
}

impl<T> InMemoryRecordStore<T>
where
    T: StorageRecord,
{
    pub fn new(category: &str) -> Self {
        Self {
            store: Default::default(),
            category: category.to_string(),
        }
    }

    fn lock_store_read(&self) -> ExchangeResult<RwLockReadGuard<'_, HashMap<String, T>>> {
        match self.store.read() {
            Ok(g) => Ok(g),
            Err(e) => {
                error!("Unable to read-lock record store: {:?}", e);
                Err(ExchangeError::LockError(format!(
                    "[InMemoryRecordStore: {}] {e}",
                    self.category
                )))
            }
        }
    }

    fn lock_store_write(&self) -> ExchangeResult<RwLockWriteGuard<'_, HashMap<String, T>>> {
        match self.store.write() {
            Ok(g) => Ok(g),
            Err(e) => {
                error!("Unable to write-lock record store: {:?}", e);
                Err(ExchangeError::LockError(format!(
                    "[InMemoryRecordStore: {}] {e}",
                    self.category
                )))
            }
        }
    }
}

#[async_trait]
impl<T> RecordStore<T> for InMemoryRecordStore<T>
where
    T: StorageRecord,
{
    fn category(&self) -> &str {
        &self.category
    }

    async fn save(&self, record: &T) -> ExchangeResult<()> {
        let mut store = self.lock_store_write()?;
        if store.contains_key(record.id()) {
            return Err(ExchangeError::duplicate(
                &self.category,
                format!("record with id {} already saved", record.id()),
            ));
        }
        if let Some(key) = record.unique_key() {
            let holder = store
                .values()
                .find(|stored| stored.unique_key().as_deref() == Some(key.as_str()));
            if let Some(holder) = holder {
                return Err(ExchangeError::UniqueKeyTaken {
                    category: self.category.clone(),
                    key,
                    record_id: holder.id().to_string(),
                });
            }
        }
        trace!(
            "[InMemoryRecordStore: {}] saving record {}",
            self.category,
            record.id()
        );
        store.insert(record.id().to_string(), record.clone());
        Ok(())
    }

    async fn update(&self, record: &mut T) -> ExchangeResult<()> {
        let mut store = self.lock_store_write()?;
        let stored = store.get_mut(record.id()).ok_or_else(|| {
            ExchangeError::not_found(&self.category, format!("id: {}", record.id()))
        })?;

        if stored.version() != record.version() {
            warn!(
                "[InMemoryRecordStore: {}] rejecting stale update of record {}",
                self.category,
                record.id()
            );
            return Err(ExchangeError::Conflict {
                record_id: record.id().to_string(),
                stored: stored.version(),
                given: record.version(),
            });
        }

        record.set_version(record.version() + 1);
        *stored = record.clone();
        Ok(())
    }

    async fn delete(&self, id: &str) -> ExchangeResult<()> {
        let mut store = self.lock_store_write()?;
        match store.remove(id) {
            Some(_) => Ok(()),
            None => Err(ExchangeError::not_found(&self.category, format!("id: {id}"))),
        }
    }

    async fn find_by_id(&self, id: &str) -> ExchangeResult<Option<T>> {
        let store = self.lock_store_read()?;
        Ok(store.get(id).cloned())
    }

    async fn find_by_query(&self, query: &TagQuery) -> ExchangeResult<Vec<T>> {
        let store = self.lock_store_read()?;
        Ok(store
            .values()
            .filter(|record| query.matches(&record.tags()))
            .cloned()
            .collect())
    }

    async fn get_all(&self) -> ExchangeResult<Vec<T>> {
        let store = self.lock_store_read()?;
        Ok(store.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RecordTags;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: String,
        topic: String,
        slug: Option<String>,
        version: u64,
    }

    impl Note {
        fn new(id: &str, topic: &str) -> Self {
            Self {
                id: id.to_owned(),
                topic: topic.to_owned(),
                slug: None,
                version: 0,
            }
        }

        fn with_slug(mut self, slug: &str) -> Self {
            self.slug = Some(slug.to_owned());
            self
        }
    }

    impl StorageRecord for Note {
        fn id(&self) -> &str {
            &self.id
        }

        fn tags(&self) -> RecordTags {
            RecordTags::new(vec![("topic".to_owned(), self.topic.clone())])
        }

        fn version(&self) -> u64 {
            self.version
        }

        fn set_version(&mut self, version: u64) {
            self.version = version;
        }

        fn unique_key(&self) -> Option<String> {
            self.slug.clone()
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_save_rejects_duplicate_id() {
        let store = InMemoryRecordStore::new("notes");
        store.save(&Note::new("1", "a")).await.unwrap();

        let err = store.save(&Note::new("1", "b")).await.unwrap_err();
        assert!(matches!(err, ExchangeError::Duplicate { .. }));
    }

    #[test_log::test(tokio::test)]
    async fn test_save_rejects_taken_unique_key() {
        let store = InMemoryRecordStore::new("notes");
        store
            .save(&Note::new("1", "a").with_slug("intro"))
            .await
            .unwrap();
        store.save(&Note::new("2", "a")).await.unwrap();
        store.save(&Note::new("3", "a")).await.unwrap();

        let err = store
            .save(&Note::new("4", "b").with_slug("intro"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ExchangeError::UniqueKeyTaken { ref key, ref record_id, .. }
                if key == "intro" && record_id == "1"
        ));
        assert!(store.find_by_id("4").await.unwrap().is_none());
    }

    #[test_log::test(tokio::test)]
    async fn test_get_and_find_by_id() {
        let store = InMemoryRecordStore::new("notes");
        store.save(&Note::new("1", "a")).await.unwrap();

        assert_eq!(store.get_by_id("1").await.unwrap().topic, "a");
        assert!(store.find_by_id("2").await.unwrap().is_none());
        assert!(matches!(
            store.get_by_id("2").await.unwrap_err(),
            ExchangeError::NotFound(_)
        ));
    }

    #[test_log::test(tokio::test)]
    async fn test_update_bumps_version_and_detects_conflicts() {
        let store = InMemoryRecordStore::new("notes");
        let mut first = Note::new("1", "a");
        store.save(&first).await.unwrap();
        let mut stale = first.clone();

        first.topic = "b".to_owned();
        store.update(&mut first).await.unwrap();
        assert_eq!(first.version, 1);

        stale.topic = "c".to_owned();
        let err = store.update(&mut stale).await.unwrap_err();
        assert!(matches!(
            err,
            ExchangeError::Conflict {
                stored: 1,
                given: 0,
                ..
            }
        ));
        assert_eq!(store.get_by_id("1").await.unwrap().topic, "b");
    }

    #[test_log::test(tokio::test)]
    async fn test_update_missing_record() {
        let store = InMemoryRecordStore::new("notes");

        let err = store.update(&mut Note::new("1", "a")).await.unwrap_err();
        assert!(matches!(err, ExchangeError::NotFound(_)));
    }

    #[test_log::test(tokio::test)]
    async fn test_single_by_query() {
        let store = InMemoryRecordStore::new("notes");
        store.save(&Note::new("1", "a")).await.unwrap();
        store.save(&Note::new("2", "b")).await.unwrap();
        store.save(&Note::new("3", "b")).await.unwrap();

        let single = store
            .get_single_by_query(&TagQuery::eq("topic", "a"))
            .await
            .unwrap();
        assert_eq!(single.id, "1");

        assert!(store
            .find_single_by_query(&TagQuery::eq("topic", "c"))
            .await
            .unwrap()
            .is_none());
        assert!(matches!(
            store
                .get_single_by_query(&TagQuery::eq("topic", "c"))
                .await
                .unwrap_err(),
            ExchangeError::NotFound(_)
        ));
        assert!(matches!(
            store
                .find_single_by_query(&TagQuery::eq("topic", "b"))
                .await
                .unwrap_err(),
            ExchangeError::Duplicate { .. }
        ));
    }

    #[test_log::test(tokio::test)]
    async fn test_delete() {
        let store = InMemoryRecordStore::new("notes");
        store.save(&Note::new("1", "a")).await.unwrap();

        store.delete("1").await.unwrap();
        assert!(store.get_all().await.unwrap().is_empty());
        assert!(matches!(
            store.delete("1").await.unwrap_err(),
            ExchangeError::NotFound(_)
        ));
    }
}
