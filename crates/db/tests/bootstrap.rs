use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    tourwise_db::health_check(&pool).await.unwrap();

    // Verify all entity tables exist.
    let tables = [
        "users",
        "tours",
        "bookings",
        "payments",
        "guides",
        "guide_assignments",
        "gift_cards",
        "reconciliation_runs",
    ];

    for table in tables {
        let count: Option<(i64,)> =
            sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_optional(&pool)
                .await
                .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert!(count.is_some(), "{table} should exist");
    }
}

/// All status columns are backed by PostgreSQL enum types, not free text.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_enum_types_exist(pool: PgPool) {
    let types = [
        ("booking_status", 4),
        ("payment_status", 4),
        ("guide_status", 2),
        ("assignment_status", 3),
    ];

    for (type_name, expected_labels) in types {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*)
             FROM pg_enum e
             JOIN pg_type t ON t.oid = e.enumtypid
             WHERE t.typname = $1",
        )
        .bind(type_name)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(
            count.0, expected_labels,
            "{type_name} should have {expected_labels} labels"
        );
    }
}

/// Unique constraints follow the `uq_` naming convention, which the error
/// classifier relies on to map violations to 409.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unique_constraints_use_uq_prefix(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, constraint_name
         FROM information_schema.table_constraints
         WHERE constraint_type = 'UNIQUE'
           AND table_schema = 'public'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty(), "expected unique constraints in the schema");
    for (table, constraint) in &rows {
        assert!(
            constraint.starts_with("uq_"),
            "Constraint {constraint} on {table} should start with uq_"
        );
    }
}

/// Duplicate booking references are rejected by the database.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_booking_reference_is_unique(pool: PgPool) {
    let (user_id,): (i64,) = sqlx::query_as(
        "INSERT INTO users (email, password_hash, full_name) VALUES ('u@t.io', 'x', 'U')
         RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    let (tour_id,): (i64,) = sqlx::query_as(
        "INSERT INTO tours (name, destination, duration_days, price)
         VALUES ('T', 'D', 1, 10) RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let insert = "INSERT INTO bookings (reference, user_id, tour_id, travel_date, total_amount)
                  VALUES ('BK-SAME', $1, $2, '2026-09-01', 100)";
    sqlx::query(insert)
        .bind(user_id)
        .bind(tour_id)
        .execute(&pool)
        .await
        .unwrap();

    let err = sqlx::query(insert)
        .bind(user_id)
        .bind(tour_id)
        .execute(&pool)
        .await
        .unwrap_err();
    let db_err = err.as_database_error().unwrap();
    assert_eq!(db_err.code().as_deref(), Some("23505"));
}
