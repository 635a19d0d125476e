//! PostgreSQL repository tests
//!
//! Need a reachable database:
//! DATABASE_URL=postgres://... cargo test --test postgres_store -- --ignored

use book_service::{
    config::DatabaseConfig,
    models::{NewBook, UpdateBook},
    repository::{BookStore, Repository},
};

async fn repository() -> Repository {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for database tests");
    let config = DatabaseConfig {
        url,
        max_connections: 2,
        min_connections: 1,
    };
    let repository = Repository::connect(&config)
        .await
        .expect("Failed to connect to database");
    repository
        .ensure_schema()
        .await
        .expect("Failed to create books table");
    repository
}

fn new_book(title: &str) -> NewBook {
    NewBook {
        title: title.to_string(),
        author: "Le Guin".to_string(),
        published_year: 1969,
    }
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_insert_get_delete() {
    let repo = repository().await;

    let book = repo.insert(&new_book("The Left Hand of Darkness")).await.unwrap();
    assert!(book.id > 0);
    assert_eq!(repo.get(book.id).await.unwrap(), Some(book.clone()));

    assert!(repo.delete(book.id).await.unwrap());
    assert_eq!(repo.get(book.id).await.unwrap(), None);
    assert!(!repo.delete(book.id).await.unwrap());
}

#[tokio::test]
#[ignore]
async fn test_partial_update() {
    let repo = repository().await;
    let book = repo.insert(&new_book("The Dispossessed")).await.unwrap();

    let changes = UpdateBook {
        published_year: Some(1974),
        ..Default::default()
    };
    let updated = repo.update(book.id, &changes).await.unwrap().unwrap();
    assert_eq!(updated.title, "The Dispossessed");
    assert_eq!(updated.author, "Le Guin");
    assert_eq!(updated.published_year, 1974);

    repo.delete(book.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_update_missing_book() {
    let repo = repository().await;
    let changes = UpdateBook {
        title: Some("Nothing".into()),
        ..Default::default()
    };
    assert_eq!(repo.update(i32::MAX, &changes).await.unwrap(), None);
}

#[tokio::test]
#[ignore]
async fn test_list_contains_inserted() {
    let repo = repository().await;
    let a = repo.insert(&new_book("A Wizard of Earthsea")).await.unwrap();
    let b = repo.insert(&new_book("The Tombs of Atuan")).await.unwrap();

    let books = repo.list().await.unwrap();
    assert!(books.contains(&a));
    assert!(books.contains(&b));
    assert!(books.windows(2).all(|w| w[0].id < w[1].id));

    repo.delete(a.id).await.unwrap();
    repo.delete(b.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_ping() {
    repository().await.ping().await.unwrap();
}
