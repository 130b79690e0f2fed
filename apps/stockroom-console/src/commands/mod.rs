//! # Commands Module
//!
//! All commands a front-end calls into.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── product.rs    ◄─── Load, page, details, save, delete
//! ├── view.rs       ◄─── Search, status filter, page navigation
//! └── dashboard.rs  ◄─── Summary cards and chart data
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Front-end action (type in search box)                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  set_search(&session, &config, "lamp")                                  │
//! │      session: &SessionState   ◄── Only the state it needs               │
//! │      config:  &ConsoleConfig                                            │
//! │  ) -> Result<ProductPage, ApiError>                                     │
//! │         │                                                               │
//! │         │ (serde, camelCase)                                            │
//! │         ▼                                                               │
//! │  Front-end receives: { rows: [...], currentPage: 1, totalPages: 1 }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands that touch the store are async and wait out its latency.
//! Commands that only read the session are synchronous.

pub mod dashboard;
pub mod product;
pub mod view;
