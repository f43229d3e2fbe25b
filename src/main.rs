use std::net::SocketAddr;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use gvp::analytics::TracingSink;
use gvp::config;
use gvp::models::AppState;
use gvp::page::{layout, PageController};
use gvp::pricing::{CardVariant, PlanCard, PricingClient, PricingOutcome};
use gvp::routes::build_router;

fn build_client() -> reqwest::Client {
    match reqwest::Client::builder()
        .user_agent(format!("gvp/{}", env!("CARGO_PKG_VERSION")))
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", yansi::Paint::red("Failed to create HTTP client"), e);
            process::exit(1);
        }
    }
}

/// Resolve the card variant: CLI flag first, then `PRICING_CARD_VARIANT`.
fn resolve_variant(flag: Option<String>) -> CardVariant {
    let parsed = match flag {
        Some(raw) => raw.parse(),
        None => config::get_card_variant(),
    };
    match parsed {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(%e, "Invalid card variant");
            eprintln!("{}", yansi::Paint::red(&e.to_string()));
            process::exit(1);
        }
    }
}

fn build_state(env_file: Option<&str>, variant: Option<String>) -> AppState {
    config::load_env_file(env_file);
    let variant = resolve_variant(variant);
    let pricing = PricingClient::new(build_client(), &config::get_pricing_api_base_url());
    AppState::new(pricing, variant)
}

async fn start_server(state: AppState, host: &str, port: u16) {
    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    tracing::info!(%addr, endpoint = %state.pricing.endpoint(), variant = %state.variant, "Starting pricing page server");
    println!(
        "{} {}",
        yansi::Paint::new("Web server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    let app = build_router(state);
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

fn plan_table(cards: &[PlanCard]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table.set_header(vec!["Plan", "Monthly (Toman)", "Daily (Toman)", "CPU", "RAM GB", "SSD GB", "Traffic", "Popular"]);
    for c in cards {
        table.add_row(vec![
            c.name.clone(),
            c.monthly_price.clone(),
            c.daily_price.clone().unwrap_or_else(|| "-".to_string()),
            c.cpu.clone(),
            c.ram_gb.clone(),
            c.ssd_gb.clone(),
            c.traffic.clone(),
            if c.popular { "★".to_string() } else { String::new() },
        ]);
    }
    table
}

async fn render_once(state: AppState) {
    let mut page = PageController::new(layout::landing_page(), Arc::new(TracingSink), state.variant);
    let outcome = match page.ready(&state.pricing).await {
        Ok(o) => o,
        Err(e) => {
            tracing::error!(%e, "Failed to render pricing container");
            eprintln!("{}: {}", yansi::Paint::red("Failed to render pricing container"), e);
            process::exit(1);
        }
    };
    println!("{}", page.pricing_html().unwrap_or_default());
    match outcome {
        Some(PricingOutcome::Loaded(plans)) => {
            let cards: Vec<PlanCard> = plans.iter().map(PlanCard::from).collect();
            println!("\n{}\n", plan_table(&cards));
            println!(
                "{} {} {}",
                yansi::Paint::new("Rendered").green(),
                page.card_ids().len(),
                yansi::Paint::new("cards").green()
            );
        }
        Some(PricingOutcome::Empty) => println!("{}", yansi::Paint::new("No plans returned").yellow()),
        Some(PricingOutcome::Failed(e)) => {
            eprintln!("{}: {}", yansi::Paint::new("Pricing fetch failed").red(), e);
            process::exit(1);
        }
        None => {}
    }
}

async fn check_config(state: AppState) {
    println!("{} {}", yansi::Paint::new("Pricing endpoint:").bold(), state.pricing.endpoint());
    println!("{} {}", yansi::Paint::new("Card variant:").bold(), state.variant);
    if let Err(e) = config::get_port() {
        eprintln!("{}", yansi::Paint::new(e.to_string()).red());
        process::exit(1);
    }
    match state.pricing.fetch_plans().await {
        Ok(plans) => println!(
            "{} ({} plans)",
            yansi::Paint::new("Pricing endpoint reachable").green(),
            plans.len()
        ),
        Err(e) => {
            eprintln!("{}: {}", yansi::Paint::new("Pricing endpoint check failed").red(), e);
            process::exit(1);
        }
    }
}

#[derive(Parser)]
#[command(
    name = "gvp",
    author,
    version,
    about = "GrandVPS pricing page server",
    long_about = "Fetches the GrandVPS pricing list from the backend and renders the landing page pricing cards."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to (defaults to HOST or 127.0.0.1)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (defaults to PORT or 8080)
        #[arg(long)]
        port: Option<u16>,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Card template variant (classic|provider)
        #[arg(long)]
        variant: Option<String>,
    },
    /// Fetch the pricing list once and print the rendered container
    #[command(long_about = "Run the page-ready sequence against the configured endpoint, print the pricing container HTML and a table of the plans.")]
    Render {
        #[arg(long)]
        env_file: Option<String>,
        #[arg(long)]
        variant: Option<String>,
    },
    /// Validate configuration and ensure the pricing endpoint answers
    CheckConfig {
        #[arg(long)]
        env_file: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // No subcommand: serve with environment defaults
    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        env_file: None,
        variant: None,
    });

    match command {
        Commands::Serve { host, port, env_file, variant } => {
            let state = build_state(env_file.as_deref(), variant);
            let host = host.unwrap_or_else(config::get_host);
            let port = match port.map(Ok).unwrap_or_else(config::get_port) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("{}", yansi::Paint::new(e.to_string()).red());
                    process::exit(1);
                }
            };
            start_server(state, &host, port).await;
        }
        Commands::Render { env_file, variant } => {
            let state = build_state(env_file.as_deref(), variant);
            render_once(state).await;
        }
        Commands::CheckConfig { env_file } => {
            let state = build_state(env_file.as_deref(), None);
            check_config(state).await;
        }
    }
}
