//! # Stockroom Console Library
//!
//! The consuming layer of Stockroom: session state, commands, and a
//! terminal front-end that prints the dashboard and one table page.
//!
//! ## Module Organization
//! ```text
//! stockroom_console/
//! ├── lib.rs           ◄─── You are here (startup & run)
//! ├── cli.rs           ◄─── Flag parsing
//! ├── render.rs        ◄─── Text output
//! ├── state/
//! │   ├── mod.rs       ◄─── State type exports
//! │   ├── store.rs     ◄─── Product store wrapper
//! │   ├── session.rs   ◄─── Inventory load state + search/filter/page
//! │   └── config.rs    ◄─── Console configuration
//! ├── commands/
//! │   ├── mod.rs       ◄─── Command exports
//! │   ├── product.rs   ◄─── Load, page, details, save, delete
//! │   ├── view.rs      ◄─── Search, filter, page navigation
//! │   └── dashboard.rs ◄─── Summary and chart data
//! └── error.rs         ◄─── API error type for commands
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use std::process::ExitCode;

use serde_json::json;
use stockroom_core::StatusFilter;
use stockroom_store::StoreConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::Args;
use commands::{dashboard, product, view};
use error::ApiError;
use state::{ConsoleConfig, SessionState, StoreState};

/// Runs the console.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Console Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,stockroom=debug, override with RUST_LOG             │
/// │                                                                         │
/// │  2. Parse Flags ──────────────────────────────────────────────────────► │
/// │                                                                         │
/// │  3. Build State ──────────────────────────────────────────────────────► │
/// │     • StoreState: sample or generated products, env latency             │
/// │     • SessionState: Loading, page 1                                     │
/// │     • ConsoleConfig: page size, currency symbol                         │
/// │                                                                         │
/// │  4. Run Commands ─────────────────────────────────────────────────────► │
/// │     • load_products → search/filter/page → dashboard                    │
/// │     • Print text or JSON to stdout                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    init_tracing();

    let args = match cli::parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}\n\n{}", cli::USAGE);
            return ExitCode::from(2);
        }
    };
    if args.help {
        println!("{}", cli::USAGE);
        return ExitCode::SUCCESS;
    }

    info!("Starting Stockroom console");

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("error: could not start async runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    let config = ConsoleConfig::from_env();
    let store = StoreState::from_config(StoreConfig::from_env(), args.count);
    let session = SessionState::new();

    match runtime.block_on(execute(&store, &session, &config, &args)) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err.message);
            ExitCode::FAILURE
        }
    }
}

/// Loads the products, applies the flags and renders the output.
///
/// Returns the text (or JSON) the binary prints.
pub async fn execute(
    store: &StoreState,
    session: &SessionState,
    config: &ConsoleConfig,
    args: &Args,
) -> Result<String, ApiError> {
    product::load_products(store, session).await?;

    if let Some(term) = &args.search {
        view::set_search(session, config, term)?;
    }
    if args.status != StatusFilter::All {
        view::set_status_filter(session, config, args.status)?;
    }

    let page = if args.page == 1 {
        product::product_page(session, config)?
    } else {
        let page = view::go_to_page(session, config, args.page)?;
        if page.current_page != args.page {
            warn!(
                requested = args.page,
                total_pages = page.total_pages,
                "Requested page does not exist, showing page {}",
                page.current_page
            );
        }
        page
    };
    let dashboard = dashboard::dashboard(session)?;

    if args.json {
        let body = json!({ "dashboard": dashboard, "page": page });
        let mut text =
            serde_json::to_string_pretty(&body).map_err(|e| ApiError::internal(e.to_string()))?;
        text.push('\n');
        return Ok(text);
    }

    Ok(format!(
        "{}\n{}",
        render::render_dashboard(&dashboard, config),
        render::render_page(&page, config)
    ))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_store=trace` - Trace the store only
/// - Default: info, debug for stockroom crates
///
/// Logs go to stderr so `--json` output stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockroom=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
