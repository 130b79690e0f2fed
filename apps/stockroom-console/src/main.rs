//! # Stockroom Console Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Console                                │
//! │                                                                         │
//! │  main.rs ────► Hands off to stockroom_console::run()                   │
//! │                                                                         │
//! │  lib.rs ─────► Logging, flags, runtime, output                         │
//! │                                                                         │
//! │  commands/ ──► load_products, product_page, save_product, dashboard    │
//! │                                                                         │
//! │  state/ ─────► StoreState, SessionState, ConsoleConfig                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    stockroom_console::run()
}
