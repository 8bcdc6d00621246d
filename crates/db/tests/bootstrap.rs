use sqlx::SqlitePool;

/// Full bootstrap: migrate, health check, verify both tables exist and are empty.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: SqlitePool) {
    flashcard_db::health_check(&pool).await.unwrap();

    for table in ["cards", "meta"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Running the embedded migrations again on a migrated database is a no-op.
#[sqlx::test(migrations = "./migrations")]
async fn test_migrations_are_idempotent(pool: SqlitePool) {
    flashcard_db::run_migrations(&pool).await.unwrap();
    flashcard_db::run_migrations(&pool).await.unwrap();
}

/// The meta table rejects any id other than the singleton key.
#[sqlx::test(migrations = "./migrations")]
async fn test_meta_singleton_constraint(pool: SqlitePool) {
    let result = sqlx::query(
        "INSERT INTO meta (id, groups, tags, updated_at) VALUES (2, '[]', '[]', '2024-01-01')",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err(), "meta row with id 2 must be rejected");
}
