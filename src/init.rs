use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
};

use anyhow::Context as _;
use axum::Router;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use tokio::net::TcpListener;

use crate::{routes, storage, Data};

const DEFAULT_DATABASE_URL: &str = "sqlite://quotes.db?mode=rwc";
const DEFAULT_PORT: u16 = 3000;

async fn init_database() -> anyhow::Result<Pool<Sqlite>> {
    let db_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        tracing::info!("no DATABASE_URL set, using {}.", DEFAULT_DATABASE_URL);
        DEFAULT_DATABASE_URL.to_string()
    });

    tracing::info!("initializing database connection...");
    let opts = SqliteConnectOptions::from_str(&db_url)
        .with_context(|| format!("invalid DATABASE_URL {db_url:?}"))?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);
    let db = SqlitePoolOptions::new()
        .max_connections(20)
        .connect_with(opts)
        .await?;

    tracing::info!("running migrations...");
    storage::MIGRATOR.run(&db).await?;
    tracing::info!("finished running migrations!");

    Ok(db)
}

/// Seeding stays on unless `SEED_QUOTES` holds one of the usual "off" words.
fn seed_enabled(raw: Option<&str>) -> bool {
    raw.map(|value| !matches!(value.trim(), "0" | "false" | "no" | "off"))
        .unwrap_or(true)
}

async fn init_seed(db: &Pool<Sqlite>) -> anyhow::Result<()> {
    if !seed_enabled(std::env::var("SEED_QUOTES").ok().as_deref()) {
        tracing::info!("SEED_QUOTES is disabled, skipping seed.");
        return Ok(());
    }

    let seed = storage::bundled_seed().context("bundled seed quotes are malformed")?;
    storage::seed_if_empty(db, &seed).await?;

    Ok(())
}

fn resolve_api_password(raw: Option<String>) -> Option<String> {
    raw.filter(|password| !password.is_empty())
}

fn init_api_password() -> Option<String> {
    let password = resolve_api_password(std::env::var("API_PASSWORD").ok());

    if password.is_none() {
        tracing::warn!("API_PASSWORD is not set! protected endpoints will reject every request.");
    }

    password
}

/// `BIND_ADDRESS` wins outright; otherwise listen on every interface at `PORT`.
fn resolve_bind_address(
    bind_address: Option<String>,
    port: Option<String>,
) -> anyhow::Result<SocketAddr> {
    if let Some(addr) = bind_address {
        return addr
            .parse()
            .with_context(|| format!("invalid BIND_ADDRESS {addr:?}"));
    }

    let port = match port {
        Some(port) => port
            .parse::<u16>()
            .with_context(|| format!("invalid PORT {port:?}"))?,
        None => DEFAULT_PORT,
    };

    Ok(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port))
}

fn init_bind_address() -> anyhow::Result<SocketAddr> {
    resolve_bind_address(
        std::env::var("BIND_ADDRESS").ok(),
        std::env::var("PORT").ok(),
    )
}

pub async fn init() -> anyhow::Result<(TcpListener, Router)> {
    tracing::info!("initializing... please wait warmly.");

    let db = init_database().await?;
    init_seed(&db).await?;
    let api_password = init_api_password();
    let bind_address = init_bind_address()?;

    let app = routes::build_router(Data::new(db, api_password));
    let listener = TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("could not bind {bind_address}"))?;

    tracing::info!("finished initializing! listening at http://{}", bind_address);
    Ok((listener, app))
}
