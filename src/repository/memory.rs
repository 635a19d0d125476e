//! In-memory book storage
//!
//! Keeps records in a map guarded by a lock. Ids are assigned from a
//! counter and never reused, matching a SERIAL column.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

use super::BookStore;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, NewBook, UpdateBook},
};

#[derive(Default)]
struct Inner {
    books: BTreeMap<i32, Book>,
    last_id: i32,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored books; still counts after a writer panicked
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|inner| inner.books.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().books.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::Internal("book store lock poisoned".to_string())
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.books.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> AppResult<Option<Book>> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.books.get(&id).cloned())
    }

    async fn insert(&self, book: &NewBook) -> AppResult<Book> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("book id sequence exhausted".to_string()))?;
        inner.last_id = id;
        let book = Book {
            id,
            title: book.title.clone(),
            author: book.author.clone(),
            published_year: book.published_year,
        };
        inner.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update(&self, id: i32, changes: &UpdateBook) -> AppResult<Option<Book>> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        Ok(inner.books.get_mut(&id).map(|book| {
            changes.apply_to(book);
            book.clone()
        }))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        Ok(inner.books.remove(&id).is_some())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book(title: &str) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: "Herbert".to_string(),
            published_year: 1965,
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential_and_not_reused() {
        let store = MemoryStore::new();
        let first = store.insert(&new_book("Dune")).await.unwrap();
        let second = store.insert(&new_book("Dune Messiah")).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        assert!(store.delete(second.id).await.unwrap());
        let third = store.insert(&new_book("Children of Dune")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let store = MemoryStore::new();
        for title in ["c", "a", "b"] {
            store.insert(&new_book(title)).await.unwrap();
        }
        let ids: Vec<i32> = store.list().await.unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() {
        let store = MemoryStore::new();
        let changes = UpdateBook {
            title: Some("x".into()),
            ..Default::default()
        };
        assert_eq!(store.update(42, &changes).await.unwrap(), None);
        assert!(!store.delete(42).await.unwrap());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_update_is_partial() {
        let store = MemoryStore::new();
        let book = store.insert(&new_book("Dune")).await.unwrap();
        let changes = UpdateBook {
            published_year: Some(1966),
            ..Default::default()
        };
        let updated = store.update(book.id, &changes).await.unwrap().unwrap();
        assert_eq!(updated.title, "Dune");
        assert_eq!(updated.published_year, 1966);
        assert_eq!(store.get(book.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_exhausted_id_sequence_is_an_error() {
        let store = MemoryStore::new();
        store.inner.write().unwrap().last_id = i32::MAX;

        let err = store.insert(&new_book("Dune")).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_len_survives_poisoned_lock() {
        let store = MemoryStore::new();
        store.insert(&new_book("Dune")).await.unwrap();

        std::thread::scope(|scope| {
            let writer = scope.spawn(|| {
                let _guard = store.inner.write().unwrap();
                panic!("writer died holding the lock");
            });
            assert!(writer.join().is_err());
        });

        assert!(store.inner.is_poisoned());
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }
}
