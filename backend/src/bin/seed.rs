use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::env;
use tracing::info;

use coffee_guide_backend::database::Database;

struct ShopSeed {
    slug: &'static str,
    name: &'static str,
    description: &'static str,
    address: &'static str,
    phone: &'static str,
    category: &'static str,
    specialty: &'static str,
    latitude: f64,
    longitude: f64,
    images: &'static [&'static str],
    features: &'static [&'static str],
    opening_hours: &'static str,
}

struct InterviewSeed {
    shop_slug: &'static str,
    owner_name: &'static str,
    owner_title: &'static str,
    portrait_url: &'static str,
    question: &'static str,
    quote: &'static str,
    signature_drink: &'static str,
    philosophy: &'static str,
    display_order: i64,
}

const SHOPS: &[ShopSeed] = &[
    ShopSeed {
        slug: "pauls-coffee-roasters",
        name: "Paul's Coffee Roasters",
        description: "In-house roastery on Ermou street. Paul roasts single-origin lots every \
                      morning and the brew bar runs V60 and Kalita pours all day.",
        address: "Ermou 83, 6022 Larnaca",
        phone: "+357 24 655001",
        category: "specialty",
        specialty: "Ethiopian single-origin pour-over",
        latitude: 34.9182,
        longitude: 33.6201,
        images: &[
            "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=1200",
            "https://images.unsplash.com/photo-1442512595331-e89e73853f31?w=1200",
        ],
        features: &[
            "In-house roastery",
            "Pour-over bar",
            "Beans to take home",
            "WiFi",
        ],
        opening_hours: r#"{"monday":"07:30-19:00","tuesday":"07:30-19:00","wednesday":"07:30-19:00","thursday":"07:30-19:00","friday":"07:30-19:00","saturday":"08:00-19:00","sunday":"09:00-14:00"}"#,
    },
    ShopSeed {
        slug: "to-kafe-tis-chrysanthis",
        name: "To Kafe Tis Chrysanthi's",
        description: "Third-generation kafeneio a street back from Finikoudes. Cypriot coffee is \
                      brewed slowly on hot sand and every cup arrives with cold water and a sweet.",
        address: "Pavlou Valsamaki 7, 6021 Larnaca",
        phone: "+357 24 628412",
        category: "traditional",
        specialty: "Cypriot coffee from the hovoli",
        latitude: 34.9134,
        longitude: 33.6352,
        images: &[
            "https://images.unsplash.com/photo-1453614512568-c4024d13c247?w=1200",
            "https://images.unsplash.com/photo-1521017432531-fbd92d768814?w=1200",
        ],
        features: &[
            "Hovoli sand brewing",
            "Homemade loukoumades",
            "Backgammon tables",
            "Shaded courtyard",
        ],
        opening_hours: r#"{"monday":"06:30-18:00","tuesday":"06:30-18:00","wednesday":"06:30-18:00","thursday":"06:30-18:00","friday":"06:30-18:00","saturday":"06:30-18:00","sunday":"07:00-13:00"}"#,
    },
    ShopSeed {
        slug: "menta-specialty",
        name: "Menta Specialty Coffee",
        description: "A tight espresso bar run by licensed Q graders. The menu lists the farm, \
                      varietal and process for every coffee on the grinder.",
        address: "Zinonos Kitieos 42, 6023 Larnaca",
        phone: "+357 24 819302",
        category: "specialty",
        specialty: "Competition-grade espresso",
        latitude: 34.9201,
        longitude: 33.6310,
        images: &["https://images.unsplash.com/photo-1511920170033-f8396924c348?w=1200"],
        features: &["Single-origin espresso", "Brew classes", "Oat milk", "WiFi"],
        opening_hours: r#"{"monday":"07:00-17:00","tuesday":"07:00-17:00","wednesday":"07:00-17:00","thursday":"07:00-17:00","friday":"07:00-17:00","saturday":"08:00-17:00"}"#,
    },
    ShopSeed {
        slug: "mingle-cafe",
        name: "Mingle Cafe",
        description: "Bright corner cafe with plants in every window. Flat whites, iced lattes \
                      and an all-day brunch menu keep it busy from morning to late afternoon.",
        address: "Grigori Afxentiou 12, 6023 Larnaca",
        phone: "+357 24 664018",
        category: "modern",
        specialty: "All-day brunch and flat whites",
        latitude: 34.9178,
        longitude: 33.6289,
        images: &["https://images.unsplash.com/photo-1554118811-1e0d58224f24?w=1200"],
        features: &[
            "All-day brunch",
            "Laptop friendly",
            "Vegan options",
            "Outdoor seating",
        ],
        opening_hours: r#"{"monday":"08:00-18:00","tuesday":"08:00-18:00","wednesday":"08:00-18:00","thursday":"08:00-18:00","friday":"08:00-18:00","saturday":"08:00-18:00","sunday":"09:00-16:00"}"#,
    },
    ShopSeed {
        slug: "lazaris-bakery",
        name: "Lazaris Bakery & Coffee",
        description: "Family bakery by the church of Saint Lazarus. The ovens run from five in \
                      the morning and the counter pairs filter coffee with warm tahinopita.",
        address: "Agiou Lazarou 3, 6021 Larnaca",
        phone: "+357 24 652230",
        category: "traditional",
        specialty: "Fresh pastries with filter coffee",
        latitude: 34.9112,
        longitude: 33.6338,
        images: &["https://images.unsplash.com/photo-1509440159596-0249088772ff?w=1200"],
        features: &["Fresh pastries", "Early opening", "Takeaway", "Local recipes"],
        opening_hours: r#"{"monday":"05:30-15:00","tuesday":"05:30-15:00","wednesday":"05:30-15:00","thursday":"05:30-15:00","friday":"05:30-15:00","saturday":"05:30-15:00","sunday":"06:00-12:00"}"#,
    },
    ShopSeed {
        slug: "costa-coffee-finikoudes",
        name: "Costa Coffee Finikoudes",
        description: "Seafront branch of the international chain on the Finikoudes promenade. \
                      Air-conditioned seating and the same menu you know from home.",
        address: "Athinon Avenue 21, 6026 Larnaca",
        phone: "+357 24 817744",
        category: "chain",
        specialty: "Reliable espresso by the beach",
        latitude: 34.9119,
        longitude: 33.6370,
        images: &["https://images.unsplash.com/photo-1525610553991-2bede1a236e2?w=1200"],
        features: &["Sea view", "Air conditioning", "Loyalty program", "Open late"],
        opening_hours: r#"{"monday":"07:00-22:00","tuesday":"07:00-22:00","wednesday":"07:00-22:00","thursday":"07:00-22:00","friday":"07:00-23:00","saturday":"07:00-23:00","sunday":"08:00-22:00"}"#,
    },
];

const INTERVIEWS: &[InterviewSeed] = &[
    InterviewSeed {
        shop_slug: "pauls-coffee-roasters",
        owner_name: "Paul Georgiou",
        owner_title: "Owner",
        portrait_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=800",
        question: "Why specialty coffee?",
        quote: "For me, coffee is more than a drink: it's a craft. Every bean tells a story of \
                its origin, and I want our customers to taste that journey in every cup. We \
                roast in-house because freshness makes all the difference.",
        signature_drink: "Ethiopian Single-Origin Pour-Over",
        philosophy: "Quality over quantity. Every cup we serve must meet our high standards.",
        display_order: 1,
    },
    InterviewSeed {
        shop_slug: "to-kafe-tis-chrysanthis",
        owner_name: "Chrysanthi Papadopoulos",
        owner_title: "Owner",
        portrait_url: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=800",
        question: "What keeps the kafeneio alive?",
        quote: "We've been serving traditional Cypriot coffee for three generations. My \
                grandmother taught me that coffee is about community: bringing people together, \
                sharing stories, and creating memories.",
        signature_drink: "Cypriot coffee with homemade loukoumades",
        philosophy: "Our rustic atmosphere and authentic recipes passed down through generations.",
        display_order: 2,
    },
];

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://coffee_guide.db".to_string());

    let database = Database::new(&database_url)
        .await
        .context("Failed to open database")?;
    database
        .migrate()
        .await
        .context("Failed to run migrations")?;

    let shops = seed_shops(database.pool()).await?;
    let interviews = seed_interviews(database.pool()).await?;
    let reviews = seed_reviews(database.pool()).await?;

    info!(
        "Seed finished: {} shops, {} interviews and {} reviews inserted",
        shops, interviews, reviews
    );
    Ok(())
}

async fn seed_shops(pool: &SqlitePool) -> Result<u64> {
    let mut inserted = 0;

    for shop in SHOPS {
        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO coffee_shops
                (slug, name, description, address, phone, category, specialty,
                 latitude, longitude, images, features, opening_hours, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(shop.slug)
        .bind(shop.name)
        .bind(shop.description)
        .bind(shop.address)
        .bind(shop.phone)
        .bind(shop.category)
        .bind(shop.specialty)
        .bind(shop.latitude)
        .bind(shop.longitude)
        .bind(serde_json::to_string(&shop.images)?)
        .bind(serde_json::to_string(&shop.features)?)
        .bind(shop.opening_hours)
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(pool)
        .await
        .with_context(|| format!("Failed to seed shop {}", shop.slug))?;

        if result.rows_affected() == 0 {
            info!("Shop {} already present, skipping", shop.slug);
        } else {
            inserted += 1;
        }
    }

    Ok(inserted)
}

async fn seed_interviews(pool: &SqlitePool) -> Result<u64> {
    let mut inserted = 0;

    for interview in INTERVIEWS {
        let shop_id: i64 = sqlx::query_scalar("SELECT id FROM coffee_shops WHERE slug = ?")
            .bind(interview.shop_slug)
            .fetch_one(pool)
            .await
            .with_context(|| format!("Shop {} missing for interview", interview.shop_slug))?;

        let existing: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM owner_interviews WHERE shop_id = ? AND owner_name = ?",
        )
        .bind(shop_id)
        .bind(interview.owner_name)
        .fetch_one(pool)
        .await?;

        if existing > 0 {
            info!("Interview with {} already present, skipping", interview.owner_name);
            continue;
        }

        sqlx::query(
            r#"
            INSERT INTO owner_interviews
                (shop_id, owner_name, owner_title, portrait_url, question, quote,
                 signature_drink, philosophy, is_published, display_order, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, 1, ?, ?)
            "#,
        )
        .bind(shop_id)
        .bind(interview.owner_name)
        .bind(interview.owner_title)
        .bind(interview.portrait_url)
        .bind(interview.question)
        .bind(interview.quote)
        .bind(interview.signature_drink)
        .bind(interview.philosophy)
        .bind(interview.display_order)
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(pool)
        .await
        .with_context(|| format!("Failed to seed interview with {}", interview.owner_name))?;

        inserted += 1;
    }

    Ok(inserted)
}

async fn seed_reviews(pool: &SqlitePool) -> Result<u64> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        info!("Reviews already present, skipping");
        return Ok(0);
    }

    let users = [
        ("Maria Ioannou", "maria@example.com"),
        ("Andreas Christou", "andreas@example.com"),
        ("Elena Georgiou", "elena@example.com"),
    ];
    let mut user_ids = Vec::new();
    for (name, email) in users {
        sqlx::query("INSERT OR IGNORE INTO users (name, email, created_at) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(chrono::Utc::now().to_rfc3339())
            .execute(pool)
            .await?;
        let id: i64 = sqlx::query_scalar("SELECT id FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(pool)
            .await?;
        user_ids.push(id);
    }

    let reviews: &[(&str, usize, i64, &str)] = &[
        (
            "pauls-coffee-roasters",
            0,
            5,
            "The Ethiopian pour-over is worth the walk up Ermou. You can taste the difference fresh roasting makes.",
        ),
        (
            "pauls-coffee-roasters",
            1,
            5,
            "Paul talked us through the roast profiles and ground beans for us to take home. Great spot.",
        ),
        (
            "to-kafe-tis-chrysanthis",
            0,
            5,
            "Proper Cypriot coffee from the sand, served the way my grandfather drank it.",
        ),
        (
            "to-kafe-tis-chrysanthis",
            2,
            4,
            "Come on a Sunday for the loukoumades. Seating fills up fast in the courtyard.",
        ),
        (
            "menta-specialty",
            1,
            5,
            "Best espresso in town. Ask what is on the grinder, the lineup changes weekly.",
        ),
        (
            "mingle-cafe",
            2,
            4,
            "Good flat white and a brunch menu that actually runs all day. Gets loud around noon.",
        ),
        (
            "lazaris-bakery",
            1,
            4,
            "Tahinopita straight from the oven with filter coffee at seven in the morning. Simple and right.",
        ),
        (
            "costa-coffee-finikoudes",
            0,
            3,
            "It is a Costa, you know what you get. The sea view terrace is the reason to come.",
        ),
    ];

    let mut inserted = 0;
    for (slug, user_index, rating, comment) in reviews {
        let shop_id: i64 = sqlx::query_scalar("SELECT id FROM coffee_shops WHERE slug = ?")
            .bind(slug)
            .fetch_one(pool)
            .await
            .with_context(|| format!("Shop {} missing for review", slug))?;

        sqlx::query(
            "INSERT INTO reviews (shop_id, user_id, rating, comment, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(shop_id)
        .bind(user_ids[*user_index])
        .bind(rating)
        .bind(comment)
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(pool)
        .await?;
        inserted += 1;
    }

    // Bring the denormalized rating columns in line with the seeded reviews.
    sqlx::query(
        r#"
        UPDATE coffee_shops SET
            avg_rating = COALESCE((SELECT AVG(rating) FROM reviews WHERE shop_id = coffee_shops.id), 0),
            total_reviews = (SELECT COUNT(*) FROM reviews WHERE shop_id = coffee_shops.id)
        "#,
    )
    .execute(pool)
    .await?;

    Ok(inserted)
}
