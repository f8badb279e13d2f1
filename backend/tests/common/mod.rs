//! Shared setup for the API tests: a fresh in-memory database per test and
//! the full route tree the server binary mounts.

use actix_web::web::{self, Data};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use coffee_guide_backend::error;
use coffee_guide_backend::handlers;
use coffee_guide_backend::services::{BookingService, ReviewService, ShopService};

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

/// Mirror of the route tree in main.rs, minus CORS.
pub fn configure(cfg: &mut web::ServiceConfig, pool: &SqlitePool) {
    let shop_service = ShopService::new(pool.clone());
    let booking_service = BookingService::new(pool.clone());
    let review_service = ReviewService::new(pool.clone());

    cfg.app_data(Data::new(shop_service))
        .app_data(Data::new(booking_service))
        .app_data(Data::new(review_service))
        .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(
            web::scope("/api")
                .service(handlers::health::health_check)
                .service(
                    web::scope("/shops")
                        .route("", web::get().to(handlers::shops::list_shops))
                        .route("/{slug}", web::get().to(handlers::shops::get_shop)),
                )
                .service(
                    web::scope("/bookings")
                        .route(
                            "/availability/{shop_id}",
                            web::get().to(handlers::bookings::availability),
                        )
                        .route("", web::post().to(handlers::bookings::create_booking))
                        .route("/{code}", web::get().to(handlers::bookings::get_booking))
                        .route("/{code}", web::delete().to(handlers::bookings::cancel_booking)),
                )
                .service(
                    web::scope("/reviews")
                        .route("", web::post().to(handlers::reviews::create_review))
                        .route("/{shop_id}", web::get().to(handlers::reviews::list_reviews)),
                )
                .route("/user/bookings", web::get().to(handlers::users::user_bookings))
                .route("/interviews", web::get().to(handlers::interviews::list_interviews)),
        )
        .route("/", web::get().to(handlers::pages::index))
        .route("/my-bookings", web::get().to(handlers::pages::my_bookings))
        .route("/shop/{slug}", web::get().to(handlers::pages::shop_page));
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

pub async fn insert_interview(
    pool: &SqlitePool,
    shop_id: i64,
    owner_name: &str,
    display_order: i64,
    is_published: bool,
) {
    sqlx::query(
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
