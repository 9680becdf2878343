//! Single-statement access to the `quotes` table.

use sqlx::{migrate::Migrator, Pool, QueryBuilder, Sqlite};

use crate::models::quotes::{Quote, SeedQuote};

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Bound parameters per seed statement stay well below SQLite's limit at this size.
const SEED_BATCH_SIZE: usize = 50;

static SEED_QUOTES: &str = include_str!("../data/quotes.json");

pub async fn list_quotes(db: &Pool<Sqlite>) -> Result<Vec<Quote>, sqlx::Error> {
    sqlx::query_as::<_, Quote>(
        r#"
            SELECT
                id, text, COALESCE(author, 'Unknown') AS author
            FROM quotes
            ORDER BY id;
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn random_quote(db: &Pool<Sqlite>) -> Result<Option<Quote>, sqlx::Error> {
    sqlx::query_as::<_, Quote>(
        r#"
            SELECT
                id, text, COALESCE(author, 'Unknown') AS author
            FROM quotes
            ORDER BY RANDOM()
            LIMIT 1;
        "#,
    )
    .fetch_optional(db)
    .await
}

pub async fn get_quote(db: &Pool<Sqlite>, id: i64) -> Result<Option<Quote>, sqlx::Error> {
    sqlx::query_as::<_, Quote>(
        r#"
            SELECT
                id, text, COALESCE(author, 'Unknown') AS author
            FROM quotes
            WHERE id = $1;
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn count_quotes(db: &Pool<Sqlite>) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM quotes;")
        .fetch_one(db)
        .await
}

pub async fn insert_quote(
    db: &Pool<Sqlite>,
    text: &str,
    author: &str,
) -> Result<Quote, sqlx::Error> {
    let result = sqlx::query(
        r#"
            INSERT INTO
                quotes (text, author)
            VALUES
                ($1, $2);
        "#,
    )
    .bind(text)
    .bind(author)
    .execute(db)
    .await?;

    Ok(Quote {
        id: result.last_insert_rowid(),
        text: text.to_string(),
        author: author.to_string(),
    })
}

/// Overwrites both columns of an existing row. Callers check that the row exists first.
pub async fn update_quote(
    db: &Pool<Sqlite>,
    id: i64,
    text: &str,
    author: &str,
) -> Result<Quote, sqlx::Error> {
    sqlx::query(
        r#"
            UPDATE quotes
            SET text = $1, author = $2
            WHERE id = $3;
        "#,
    )
    .bind(text)
    .bind(author)
    .bind(id)
    .execute(db)
    .await?;

    Ok(Quote {
        id,
        text: text.to_string(),
        author: author.to_string(),
    })
}

/// Removes the row and hands it back, or `None` when nothing had that id.
pub async fn delete_quote(db: &Pool<Sqlite>, id: i64) -> Result<Option<Quote>, sqlx::Error> {
    sqlx::query_as::<_, Quote>(
        r#"
            DELETE FROM quotes
            WHERE id = $1
            RETURNING id, text, COALESCE(author, 'Unknown') AS author;
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

/// The quote set bundled into the binary.
pub fn bundled_seed() -> Result<Vec<SeedQuote>, serde_json::Error> {
    serde_json::from_str(SEED_QUOTES)
}

/// Inserts `quotes` in batches when the table is empty. Returns how many rows were written.
pub async fn seed_if_empty(
    db: &Pool<Sqlite>,
    quotes: &[SeedQuote],
) -> Result<usize, sqlx::Error> {
    let count = count_quotes(db).await?;
    if count > 0 {
        tracing::info!(count, "database already contains quotes, skipping seed.");
        return Ok(0);
    }

    tracing::info!("seeding database with {} quotes...", quotes.len());

    for batch in quotes.chunks(SEED_BATCH_SIZE) {
        let mut builder = QueryBuilder::<Sqlite>::new("INSERT INTO quotes (text, author) ");
        builder.push_values(batch, |mut row, quote| {
            row.push_bind(quote.text.as_str()).push_bind(quote.author());
        });

        builder
            .build()
            .execute(db)
            .await
            .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when seeding quotes"))?;
    }

    tracing::info!("seeded {} quotes.", quotes.len());
    Ok(quotes.len())
}
