use sqlx::SqlitePool;

/// Full bootstrap: health check, schema creation, every table present.
#[sqlx::test(migrations = false)]
async fn test_full_bootstrap(pool: SqlitePool) {
    marquee_db::health_check(&pool).await.unwrap();
    assert!(!marquee_db::schema_ready(&pool).await.unwrap());

    marquee_db::init_schema(&pool).await.unwrap();
    assert!(marquee_db::schema_ready(&pool).await.unwrap());

    for table in marquee_db::schema::TABLES {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Running the bootstrap twice must not fail or drop rows.
#[sqlx::test(migrations = false)]
async fn test_init_schema_is_idempotent(pool: SqlitePool) {
    marquee_db::init_schema(&pool).await.unwrap();
    sqlx::query("INSERT INTO genre (name) VALUES ('Noir')")
        .execute(&pool)
        .await
        .unwrap();

    marquee_db::init_schema(&pool).await.unwrap();

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM genre")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

/// `create_pool` creates a missing database file.
#[tokio::test]
async fn test_create_pool_creates_missing_file() {
    let path = std::env::temp_dir().join(format!("marquee-bootstrap-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let url = format!("sqlite://{}", path.display());
    let pool = marquee_db::create_pool(&url, 1).await.unwrap();
    marquee_db::health_check(&pool).await.unwrap();
    pool.close().await;

    assert!(path.exists());
    let _ = std::fs::remove_file(&path);
}
