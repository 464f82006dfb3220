use bcrypt::{hash, DEFAULT_COST};
use dotenvy::dotenv;
use sqlx::{postgres::PgPoolOptions, Row};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Portfolio Backend - Create Admin User");
    println!("=====================================");

    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in .env file");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    print!("Username: ");
    io::stdout().flush()?;
    let mut username = String::new();
    io::stdin().read_line(&mut username)?;
    let username = username.trim().to_string();

    if username.is_empty() {
        eprintln!("Username cannot be empty");
        return Ok(());
    }

    print!("Email address: ");
    io::stdout().flush()?;
    let mut email = String::new();
    io::stdin().read_line(&mut email)?;
    let email = email.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        eprintln!("Invalid email address");
        return Ok(());
    }

    let existing_user = sqlx::query("SELECT id FROM users WHERE email = $1 OR username = $2")
        .bind(&email)
        .bind(&username)
        .fetch_optional(&pool)
        .await?;

    if existing_user.is_some() {
        eprintln!("User with this email or username already exists");
        return Ok(());
    }

    print!("Password: ");
    io::stdout().flush()?;
    let password = rpassword::read_password()?;

    if password.len() < 6 {
        eprintln!("Password must be at least 6 characters long");
        return Ok(());
    }

    print!("Password (again): ");
    io::stdout().flush()?;
    let password_confirm = rpassword::read_password()?;

    if password != password_confirm {
        eprintln!("Passwords don't match");
        return Ok(());
    }

    let password_hash = hash(&password, DEFAULT_COST)?;

    let row = sqlx::query(
        "INSERT INTO users (username, email, password_hash, created_at, updated_at)
         VALUES ($1, $2, $3, NOW(), NOW())
         RETURNING id, username",
    )
    .bind(&username)
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(&pool)
    .await?;

    let id: i32 = row.get("id");
    let username: String = row.get("username");

    println!();
    println!("Admin user created successfully!");
    println!("   ID: {}", id);
    println!("   Username: {}", username);
    println!();
    println!("This account can now call the admin session listing endpoint.");

    pool.close().await;
    Ok(())
}
