use anyhow::Result;
use clap::{Parser, Subcommand};
use glowbook_application::AppContext;

mod commands;

#[derive(Parser)]
#[command(name = "glowbook")]
#[command(about = "Glowbook CLI - beauty-studio storefront client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the service catalog
    Services,
    /// Show a single service
    Service {
        /// Service id, e.g. s1
        id: String,
    },
    /// List current offers
    Offers,
    /// Show the previous-work gallery
    Gallery,
    /// Show customer feedback
    Feedbacks,
    /// List bookable slots for a date
    Slots {
        /// Date in YYYY-MM-DD form
        date: String,
    },
    /// Register a new account with name, mobile number, and PIN
    Register {
        name: String,
        mobile: String,
        pin: String,
    },
    /// Sign in with mobile number and PIN
    Login { mobile: String, pin: String },
    /// OTP flows for mobile verification
    Otp {
        #[command(subcommand)]
        action: OtpAction,
    },
    /// Register with an OTP-verified mobile number
    Signup {
        name: String,
        mobile: String,
        pin: String,
        /// The OTP code received for this number
        code: String,
        /// Verification token from `glowbook otp verify`
        #[arg(long)]
        otp_token: Option<String>,
    },
    /// Show the signed-in user
    Whoami,
    /// Sign out and clear the stored session
    Logout,
    /// Book one or more services
    Book {
        /// Start time, e.g. 2026-09-01T11:00:00
        #[arg(long)]
        at: String,
        /// Service ids to include
        #[arg(required = true)]
        service_ids: Vec<String>,
    },
    /// List your bookings
    Bookings,
}

#[derive(Subcommand)]
enum OtpAction {
    /// Send an OTP to a mobile number
    Request { mobile: String },
    /// Verify a received OTP code
    Verify { mobile: String, code: String },
}

fn init_tracing() {
    // Default to warnings only; GLOWBOOK_LOG overrides, e.g.
    // GLOWBOOK_LOG=glowbook_client=debug for endpoint fallback traces.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("GLOWBOOK_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let context = AppContext::init()?;
    context.auth.hydrate().await?;

    match cli.command {
        Commands::Services => commands::catalog::services(&context).await?,
        Commands::Service { id } => commands::catalog::service(&context, &id).await?,
        Commands::Offers => commands::catalog::offers(&context).await?,
        Commands::Gallery => commands::catalog::gallery(&context).await?,
        Commands::Feedbacks => commands::catalog::feedbacks(&context).await?,
        Commands::Slots { date } => commands::booking::slots(&date)?,
        Commands::Register { name, mobile, pin } => {
            commands::auth::register(&context, &name, &mobile, &pin).await?
        }
        Commands::Login { mobile, pin } => commands::auth::login(&context, &mobile, &pin).await?,
        Commands::Otp { action } => match action {
            OtpAction::Request { mobile } => commands::auth::request_otp(&context, &mobile).await?,
            OtpAction::Verify { mobile, code } => {
                commands::auth::verify_otp(&context, &mobile, &code).await?
            }
        },
        Commands::Signup {
            name,
            mobile,
            pin,
            code,
            otp_token,
        } => commands::auth::signup(&context, &name, &mobile, &pin, &code, otp_token).await?,
        Commands::Whoami => commands::auth::whoami(&context).await?,
        Commands::Logout => commands::auth::logout(&context).await?,
        Commands::Book { at, service_ids } => {
            commands::booking::book(&context, service_ids, &at).await?
        }
        Commands::Bookings => commands::booking::bookings(&context).await?,
    }

    Ok(())
}
