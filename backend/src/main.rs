use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::{info, Level};

use coffee_guide_backend::config::AppConfig;
use coffee_guide_backend::database::Database;
use coffee_guide_backend::error::{self, AppError};
use coffee_guide_backend::handlers;
use coffee_guide_backend::services::{BookingService, ReviewService, ShopService};

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Starting Larnaca Coffee Guide backend on {}:{}", config.host, config.port);

    // Initialize database and run migrations
    let database = Database::new(&config.database_url).await?;
    database.migrate().await?;

    // Initialize services
    let shop_service = ShopService::new(database.pool().clone());
    let booking_service = BookingService::new(database.pool().clone());
    let review_service = ReviewService::new(database.pool().clone());

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(shop_service.clone()))
            .app_data(web::Data::new(booking_service.clone()))
            .app_data(web::Data::new(review_service.clone()))
            .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
            .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
            .service(
                web::scope("/api")
                    .wrap(Cors::permissive())
                    .service(handlers::health::health_check)
                    .service(
                        web::scope("/shops")
                            .route("", web::get().to(handlers::shops::list_shops))
                            .route("/{slug}", web::get().to(handlers::shops::get_shop)),
                    )
                    .service(
                        web::scope("/bookings")
                            // The availability route must sit above the {code} routes.
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
            .route("/shop/{slug}", web::get().to(handlers::pages::shop_page))
    })
    .bind(format!("{}:{}", config.host, config.port))?
    .run()
    .await
    .map_err(AppError::from)
}
