//! Shared fixtures for service tests.
//!
//! Every test gets its own in-memory SQLite database with the full migration
//! set applied. The pool is capped at a single connection because each
//! `sqlite::memory:` connection is a separate database.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    pool
}

pub async fn insert_shop(pool: &SqlitePool, slug: &str, name: &str, category: &str) -> i64 {
    let result = sqlx::query(
        r#"
        INSERT INTO coffee_shops (slug, name, description, address, category, latitude, longitude, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(slug)
    .bind(name)
    .bind(format!("{name} test description"))
    .bind("1 Test Street, Larnaca")
    .bind(category)
    .bind(34.9156)
    .bind(33.6323)
    .bind(chrono::Utc::now().to_rfc3339())
    .execute(pool)
    .await
    .expect("insert shop");

    result.last_insert_rowid()
}

pub async fn insert_user(pool: &SqlitePool, name: &str, email: &str) -> i64 {
    let result = sqlx::query("INSERT INTO users (name, email, created_at) VALUES (?, ?, ?)")
        .bind(name)
        .bind(email)
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(pool)
        .await
        .expect("insert user");

    result.last_insert_rowid()
}

pub async fn insert_review(pool: &SqlitePool, shop_id: i64, user_id: i64, rating: i64, comment: &str) -> i64 {
    let result = sqlx::query(
        "INSERT INTO reviews (shop_id, user_id, rating, comment, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(shop_id)
    .bind(user_id)
    .bind(rating)
    .bind(comment)
    .bind(chrono::Utc::now().to_rfc3339())
    .execute(pool)
    .await
    .expect("insert review");

    result.last_insert_rowid()
}

pub async fn insert_interview(
    pool: &SqlitePool,
    shop_id: i64,
    owner_name: &str,
    display_order: i64,
    is_published: bool,
) -> i64 {
    let result = sqlx::query(
        r#"
        INSERT INTO owner_interviews (shop_id, owner_name, owner_title, question, quote, is_published, display_order, created_at)
        VALUES (?, ?, 'Owner', 'What makes your coffee special?', 'Every cup tells a story.', ?, ?, ?)
        "#,
    )
    .bind(shop_id)
    .bind(owner_name)
    .bind(is_published)
    .bind(display_order)
    .bind(chrono::Utc::now().to_rfc3339())
    .execute(pool)
    .await
    .expect("insert interview");

    result.last_insert_rowid()
}

pub async fn set_shop_rating(pool: &SqlitePool, shop_id: i64, avg_rating: f64, total_reviews: i64) {
    sqlx::query("UPDATE coffee_shops SET avg_rating = ?, total_reviews = ? WHERE id = ?")
        .bind(avg_rating)
        .bind(total_reviews)
        .bind(shop_id)
        .execute(pool)
        .await
        .expect("set shop rating");
}
