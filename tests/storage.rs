mod common;

use pretty_assertions::assert_eq;
use quotecard::{models::quotes::SeedQuote, storage};

fn seeds(n: usize) -> Vec<SeedQuote> {
    (0..n)
        .map(|i| SeedQuote {
            text: format!("quote number {i}"),
            author: (i % 2 == 0).then(|| format!("author {i}")),
        })
        .collect()
}

#[tokio::test]
async fn seeds_an_empty_table_in_batches() {
    let db = common::memory_db().await;

    let written = storage::seed_if_empty(&db, &seeds(120)).await.unwrap();
    assert_eq!(written, 120);
    assert_eq!(storage::count_quotes(&db).await.unwrap(), 120);

    let quotes = storage::list_quotes(&db).await.unwrap();
    assert_eq!(quotes[0].text, "quote number 0");
    assert_eq!(quotes[0].author, "author 0");
    assert_eq!(quotes[1].author, "Unknown");
    assert_eq!(quotes[119].text, "quote number 119");
}

#[tokio::test]
async fn seeding_skips_a_populated_table() {
    let db = common::memory_db().await;
    storage::insert_quote(&db, "already here", "me").await.unwrap();

    let written = storage::seed_if_empty(&db, &seeds(10)).await.unwrap();

    assert_eq!(written, 0);
    assert_eq!(storage::count_quotes(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn bundled_seed_parses_and_loads() {
    let db = common::memory_db().await;
    let seed = storage::bundled_seed().unwrap();
    assert!(!seed.is_empty());

    storage::seed_if_empty(&db, &seed).await.unwrap();

    assert_eq!(
        storage::count_quotes(&db).await.unwrap(),
        seed.len() as i64
    );
}

#[tokio::test]
async fn null_authors_read_back_as_unknown() {
    let db = common::memory_db().await;
    sqlx::query("INSERT INTO quotes (text, author) VALUES ('orphan', NULL);")
        .execute(&db)
        .await
        .unwrap();

    let quote = storage::get_quote(&db, 1).await.unwrap().unwrap();
    assert_eq!(quote.author, "Unknown");
}

#[tokio::test]
async fn ids_keep_increasing_after_deletes() {
    let db = common::memory_db().await;
    let first = storage::insert_quote(&db, "one", "a").await.unwrap();
    let second = storage::insert_quote(&db, "two", "b").await.unwrap();

    assert_eq!(storage::delete_quote(&db, second.id).await.unwrap(), Some(second.clone()));
    assert_eq!(storage::delete_quote(&db, second.id).await.unwrap(), None);

    let third = storage::insert_quote(&db, "three", "c").await.unwrap();
    assert!(third.id > second.id);
    assert!(second.id > first.id);
}

#[tokio::test]
async fn updates_in_place() {
    let db = common::memory_db().await;
    let quote = storage::insert_quote(&db, "draft", "a").await.unwrap();

    let updated = storage::update_quote(&db, quote.id, "final", "b").await.unwrap();

    assert_eq!(storage::get_quote(&db, quote.id).await.unwrap(), Some(updated));
}

#[tokio::test]
async fn delete_hands_back_the_removed_row() {
    let db = common::memory_db().await;
    sqlx::query("INSERT INTO quotes (text, author) VALUES ('anonymous', NULL);")
        .execute(&db)
        .await
        .unwrap();

    let removed = storage::delete_quote(&db, 1).await.unwrap().unwrap();

    assert_eq!(removed.text, "anonymous");
    assert_eq!(removed.author, "Unknown");
    assert_eq!(storage::get_quote(&db, 1).await.unwrap(), None);
    assert_eq!(storage::count_quotes(&db).await.unwrap(), 0);
}
