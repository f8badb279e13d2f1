//! HTML page handlers.
//!
//! The index and my-bookings pages are static shells that pull their data
//! from the JSON API. The shop detail page is rendered server-side so every
//! shop gets a crawlable URL under /shop/{slug}.

use actix_web::{web, HttpResponse};
use tracing::debug;

use crate::error::AppError;
use crate::models::review::ReviewWithAuthor;
use crate::models::shop::ShopDetail;
use crate::services::shop_service::ShopService;
use coffee_guide_shared::types::ShopCategory;

const INDEX_PAGE: &str = include_str!("../../assets/index.html");
const MY_BOOKINGS_PAGE: &str = include_str!("../../assets/my-bookings.html");
const FALLBACK_IMAGE: &str = "https://images.unsplash.com/photo-1501339847302-ac426a4a7cbb?w=1200";

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// GET /
pub async fn index() -> HttpResponse {
    html_response(INDEX_PAGE.to_string())
}

/// GET /my-bookings
pub async fn my_bookings() -> HttpResponse {
    html_response(MY_BOOKINGS_PAGE.to_string())
}

/// GET /shop/{slug}
pub async fn shop_page(
    path: web::Path<String>,
    shop_service: web::Data<ShopService>,
) -> Result<HttpResponse, AppError> {
    let slug = path.into_inner();
    debug!(%slug, "rendering shop page");

    match shop_service.shop_detail(&slug).await {
        Ok(detail) => Ok(html_response(render_shop_page(&detail))),
        Err(AppError::NotFound(_)) => Ok(HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(render_not_found_page())),
        Err(err) => Err(err),
    }
}

fn html_response(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Escape text for interpolation into HTML. Ampersand goes first so the
/// entities introduced below are not escaped twice.
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn category_presentation(category: ShopCategory) -> (&'static str, &'static str) {
    match category {
        ShopCategory::Specialty => ("Specialty", "bg-blue-100 text-blue-800"),
        ShopCategory::Traditional => ("Traditional", "bg-amber-100 text-amber-800"),
        ShopCategory::Modern => ("Modern", "bg-emerald-100 text-emerald-800"),
        ShopCategory::Chain => ("Chain", "bg-violet-100 text-violet-800"),
    }
}

fn render_shop_page(detail: &ShopDetail) -> String {
    let shop = &detail.shop;
    let name = escape_html(&shop.name);
    let hero = shop
        .images
        .first()
        .map(|url| escape_html(url))
        .unwrap_or_else(|| FALLBACK_IMAGE.to_string());
    let (category_label, category_badge) = category_presentation(shop.category);

    let specialty_line = shop
        .specialty
        .as_deref()
        .map(|specialty| {
            format!(
                r#"<p class="text-amber-700 font-medium mt-3"><i class="fa-solid fa-mug-saucer mr-1"></i>Known for: {}</p>"#,
                escape_html(specialty)
            )
        })
        .unwrap_or_default();

    let phone_line = shop
        .phone
        .as_deref()
        .map(|phone| {
            format!(
                r#"<p class="flex items-center gap-2 text-sm"><i class="fa-solid fa-phone text-amber-700 w-4"></i>{}</p>"#,
                escape_html(phone)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{name} - Larnaca Coffee Guide</title>
  <script src="https://cdn.tailwindcss.com"></script>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css">
</head>
<body class="bg-stone-50 text-stone-800">
  <header class="bg-white shadow-sm sticky top-0 z-40">
    <div class="max-w-6xl mx-auto px-4 py-3 flex items-center justify-between">
      <a href="/" class="flex items-center gap-2 text-xl font-bold text-amber-800">
        <i class="fa-solid fa-mug-hot"></i>
        <span>Larnaca Coffee Guide</span>
      </a>
      <nav class="flex items-center gap-6 text-sm font-medium">
        <a href="/" class="hover:text-amber-700"><i class="fa-solid fa-arrow-left mr-1"></i>All shops</a>
        <a href="/my-bookings" class="bg-amber-700 text-white px-4 py-2 rounded-lg hover:bg-amber-800">My Bookings</a>
      </nav>
    </div>
  </header>

  <div class="relative h-72 md:h-96">
    <img src="{hero}" alt="{name}" class="absolute inset-0 w-full h-full object-cover">
    <div class="absolute inset-0 bg-gradient-to-t from-black/70 to-transparent"></div>
    <div class="absolute bottom-0 left-0 right-0 max-w-6xl mx-auto px-4 pb-6 text-white">
      <span class="text-xs px-3 py-1 rounded-full {category_badge}">{category_label}</span>
      <h1 class="text-3xl md:text-4xl font-bold mt-2">{name}</h1>
      <p class="text-amber-300 mt-1">
        <i class="fa-solid fa-star"></i> {rating:.1} <span class="text-stone-300">({review_count} reviews)</span>
      </p>
    </div>
  </div>

  <main class="max-w-6xl mx-auto px-4 py-10 grid grid-cols-1 lg:grid-cols-3 gap-8">
    <div class="lg:col-span-2 space-y-8">
      <section class="bg-white rounded-xl shadow p-6">
        <h2 class="text-xl font-bold mb-3">About</h2>
        <p class="text-stone-600 leading-relaxed">{description}</p>
        {specialty_line}
      </section>

      <section class="bg-white rounded-xl shadow p-6">
        <h2 class="text-xl font-bold mb-3"><i class="fa-regular fa-clock text-amber-700 mr-2"></i>Opening Hours</h2>
        {hours}
      </section>

      <section class="bg-white rounded-xl shadow p-6">
        <h2 class="text-xl font-bold mb-4"><i class="fa-solid fa-star text-amber-500 mr-2"></i>Reviews</h2>
        {reviews}
      </section>
    </div>

    <aside>
      <div class="bg-white rounded-xl shadow p-6 sticky top-20 space-y-4">
        <h2 class="text-lg font-bold">Visit us</h2>
        <p class="flex items-start gap-2 text-sm"><i class="fa-solid fa-location-dot text-amber-700 w-4 mt-0.5"></i>{address}</p>
        {phone_line}
        <div class="flex flex-wrap gap-2 pt-2">{features}</div>
        <a href="/" class="block text-center bg-amber-700 text-white font-semibold py-3 rounded-lg hover:bg-amber-800">
          <i class="fa-regular fa-calendar-plus mr-1"></i>Book a table
        </a>
        <p class="text-xs text-stone-400 text-center">Bookings open from the guide's home page.</p>
      </div>
    </aside>
  </main>

  <footer class="bg-stone-900 text-stone-400 text-sm">
    <div class="max-w-6xl mx-auto px-4 py-8 text-center">
      <i class="fa-solid fa-mug-hot mr-1"></i>Larnaca Coffee Guide
    </div>
  </footer>
</body>
</html>
"#,
        name = name,
        hero = hero,
        category_badge = category_badge,
        category_label = category_label,
        rating = shop.avg_rating,
        review_count = shop.total_reviews,
        description = escape_html(&shop.description),
        specialty_line = specialty_line,
        hours = render_hours(&shop.opening_hours),
        reviews = render_reviews(&detail.reviews),
        address = escape_html(&shop.address),
        phone_line = phone_line,
        features = render_features(&shop.features),
    )
}

fn render_hours(hours: &serde_json::Value) -> String {
    let mut rows = String::new();
    if let Some(map) = hours.as_object() {
        for day in WEEKDAYS {
            if let Some(times) = map.get(day).and_then(|value| value.as_str()) {
                rows.push_str(&format!(
                    r#"<div class="flex justify-between py-1 border-b border-stone-100 last:border-0"><span class="capitalize text-stone-500">{}</span><span class="font-medium">{}</span></div>"#,
                    day,
                    escape_html(times)
                ));
            }
        }
    }

    if rows.is_empty() {
        return r#"<p class="text-stone-500">Opening hours not listed yet.</p>"#.to_string();
    }
    rows
}

fn render_reviews(reviews: &[ReviewWithAuthor]) -> String {
    if reviews.is_empty() {
        return r#"<p class="text-stone-500">No reviews yet. Be the first to share your visit.</p>"#
            .to_string();
    }

    reviews
        .iter()
        .map(|entry| {
            let review = &entry.review;
            let filled = review.rating.clamp(0, 5) as usize;
            let stars = format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled));
            let date = review.created_at.get(..10).unwrap_or(&review.created_at);
            let title = review
                .title
                .as_deref()
                .map(|title| format!(r#"<p class="font-semibold mt-1">{}</p>"#, escape_html(title)))
                .unwrap_or_default();

            format!(
                r#"<div class="border-b border-stone-100 last:border-0 py-4 first:pt-0 last:pb-0">
          <div class="flex items-center justify-between">
            <span class="font-medium">{author}</span>
            <span class="text-xs text-stone-400">{date}</span>
          </div>
          <p class="text-amber-500 text-sm">{stars}</p>
          {title}
          <p class="text-sm text-stone-600 mt-1">{comment}</p>
        </div>"#,
                author = escape_html(&entry.user_name),
                date = date,
                stars = stars,
                title = title,
                comment = escape_html(&review.comment),
            )
        })
        .collect()
}

fn render_features(features: &[String]) -> String {
    features
        .iter()
        .map(|feature| {
            format!(
                r#"<span class="text-xs bg-stone-100 text-stone-600 px-2 py-1 rounded-full">{}</span>"#,
                escape_html(feature)
            )
        })
        .collect()
}

fn render_not_found_page() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Shop not found - Larnaca Coffee Guide</title>
  <script src="https://cdn.tailwindcss.com"></script>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css">
</head>
<body class="bg-stone-50 text-stone-800 min-h-screen flex items-center justify-center">
  <div class="text-center px-4">
    <i class="fa-solid fa-mug-hot text-6xl text-stone-300 mb-6"></i>
    <h1 class="text-3xl font-bold mb-2">Shop not found</h1>
    <p class="text-stone-500 mb-6">This coffee shop is not in the guide, or it is no longer listed.</p>
    <a href="/" class="bg-amber-700 text-white font-semibold px-6 py-3 rounded-lg hover:bg-amber-800">Back to the guide</a>
  </div>
</body>
</html>
"#
    .to_string()
}
