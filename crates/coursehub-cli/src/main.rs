use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use sqlx::PgPool;

use coursehub_cli::admin::create_admin;
use coursehub_cli::seeder::{self, CoursesPerCategory, SeedConfig};
use coursehub_config::DatabaseConfig;
use coursehub_db::init_db_pool;

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "coursehub-cli")]
#[command(about = "CourseHub CLI - Administrative tools for CourseHub", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an administrator account
    CreateAdmin {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Username used to sign in
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Display name
        #[arg(short = 'n', long)]
        nickname: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with categories, fake users, courses and chapters
    Seed {
        /// Number of users to create
        #[arg(short = 'u', long, default_value = "50")]
        users: usize,

        /// Number of courses per category
        #[arg(short = 'c', long, default_value = "8")]
        courses: usize,

        /// Number of chapters per course
        #[arg(long, default_value = "6")]
        chapters: usize,
    },
    /// Clear all seeded data (keeps administrators and settings)
    ClearSeed,
}

#[tokio::main]
async fn main() -> CliResult {
    dotenv().ok();

    let cli = Cli::parse();

    let config = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&config).await?;

    let result = match cli.command {
        Commands::CreateAdmin {
            email,
            username,
            nickname,
            password,
        } => handle_create_admin(&pool, email, username, nickname, password).await,
        Commands::Seed {
            users,
            courses,
            chapters,
        } => handle_seed(&pool, users, courses, chapters).await,
        Commands::ClearSeed => seeder::clear_all(&pool).await,
    };

    if let Err(e) = result {
        eprintln!("\n❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn prompt(value: Option<String>, label: &str) -> Result<String, dialoguer::Error> {
    match value {
        Some(value) => Ok(value),
        None => Input::new().with_prompt(label).interact_text(),
    }
}

async fn handle_create_admin(
    pool: &PgPool,
    email: Option<String>,
    username: Option<String>,
    nickname: Option<String>,
    password: Option<String>,
) -> CliResult {
    let email = prompt(email, "Email address")?;
    let username = prompt(username, "Username")?;
    let nickname = prompt(nickname, "Nickname")?;
    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let id = create_admin(pool, &email, &username, &nickname, &password).await?;

    println!("\n✅ Administrator created successfully!");
    println!("   Id: {}", id);
    println!("   Email: {}", email);
    println!("   Username: {}", username);

    Ok(())
}

async fn handle_seed(pool: &PgPool, users: usize, courses: usize, chapters: usize) -> CliResult {
    let config = SeedConfig::new(users).with_courses(CoursesPerCategory {
        courses,
        chapters_per_course: chapters,
    });

    seeder::seed_all(pool, config).await
}
