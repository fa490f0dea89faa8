use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    qazyna_db::health_check(&pool).await.unwrap();

    // Verify all content tables exist and start empty.
    let tables = [
        "events",
        "media_publications",
        "projects",
        "videos",
        "music_tracks",
        "articles",
        "interesting_tags",
        "article_tags",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Running the embedded migrator against a bare database creates the
/// schema, and running it again is a no-op.
#[sqlx::test]
async fn test_run_migrations_on_bare_database(pool: PgPool) {
    qazyna_db::run_migrations(&pool).await.unwrap();

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);

    // Already-applied migrations are skipped, not re-run.
    qazyna_db::run_migrations(&pool).await.unwrap();
}

/// The env-driven pool constructor reads DATABASE_URL and yields a
/// working connection.
#[sqlx::test]
async fn test_create_pool_from_env(_pool: PgPool) {
    let pool = qazyna_db::create_pool_from_env().await.unwrap();
    qazyna_db::health_check(&pool).await.unwrap();
}
