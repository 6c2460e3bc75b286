use chrono::{Duration, Local, NaiveTime};
use dorkar_api::{
    config::AppConfig,
    db::{create_pool, run_migrations},
    models::BookingStatus,
    password::hash_password,
};
use sqlx::PgPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config).await?;
    run_migrations(&pool).await?;

    let provider_id = ensure_provider(
        &pool,
        "Rahim Electric",
        "provider@example.com",
        "+8801711000000",
        "Electrician",
        "provider123",
    )
    .await?;
    let user_id = ensure_user(&pool, "karim", "user@example.com", "01811000000", "Dhaka").await?;
    let service_id = ensure_service(&pool, provider_id, "Fan installation", "450.00", 60).await?;
    seed_bookings(&pool, user_id, provider_id, service_id).await?;

    println!("Seed completed. Provider ID: {provider_id}, User ID: {user_id}");
    Ok(())
}

async fn ensure_provider(
    pool: &PgPool,
    name: &str,
    email: &str,
    phone: &str,
    service: &str,
    password: &str,
) -> anyhow::Result<i64> {
    let password_hash = hash_password(password)?;

    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO providers (name, email, phone, service, password)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (email) DO UPDATE SET password = EXCLUDED.password
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(service)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    println!("Ensured provider {email}");
    Ok(id)
}

async fn ensure_user(
    pool: &PgPool,
    username: &str,
    email: &str,
    phone_no: &str,
    address: &str,
) -> anyhow::Result<i64> {
    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    if let Some((id,)) = existing {
        return Ok(id);
    }

    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO users (username, email, phone_no, address) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(username)
    .bind(email)
    .bind(phone_no)
    .bind(address)
    .fetch_one(pool)
    .await?;

    println!("Ensured user {email}");
    Ok(id)
}

async fn ensure_service(
    pool: &PgPool,
    provider_id: i64,
    name: &str,
    price: &str,
    duration: i32,
) -> anyhow::Result<i64> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO services (name, price, duration, provider_id) VALUES ($1, $2::NUMERIC, $3, $4) RETURNING id",
    )
    .bind(name)
    .bind(price)
    .bind(duration)
    .bind(provider_id)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

// One booking per status, a day apart, so every client label shows up.
async fn seed_bookings(
    pool: &PgPool,
    user_id: i64,
    provider_id: i64,
    service_id: i64,
) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let slot = NaiveTime::from_hms_opt(10, 30, 0).unwrap_or_default();

    for (offset, status) in (0i64..).zip(BookingStatus::ALL) {
        sqlx::query(
            r#"
            INSERT INTO bookings
                (user_id, provider_id, service_id, booking_date, booking_time, status, username, phone_no)
            SELECT $1, $2, $3, $4, $5, $6, u.username, u.phone_no
            FROM users u WHERE u.id = $1
            "#,
        )
        .bind(user_id)
        .bind(provider_id)
        .bind(service_id)
        .bind(today + Duration::days(offset))
        .bind(slot)
        .bind(status.as_str())
        .execute(pool)
        .await?;
    }

    println!("Seeded bookings");
    Ok(())
}
