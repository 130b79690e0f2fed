//! # State Module
//!
//! Manages console state.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌────────────────────────┐  ┌──────────────────┐    │
//! │  │  StoreState  │  │     SessionState       │  │  ConsoleConfig   │    │
//! │  │              │  │                        │  │                  │    │
//! │  │  Store       │  │  Arc<Mutex<Session>>   │  │  page_size       │    │
//! │  │  (async      │  │  ├── InventoryState    │  │  currency_symbol │    │
//! │  │   CRUD)      │  │  └── ViewState         │  │                  │    │
//! │  └──────────────┘  └────────────────────────┘  └──────────────────┘    │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: Store has an internal async mutex                       │
//! │  • SessionState: Protected by Arc<Mutex<T>>, never held across .await  │
//! │  • ConsoleConfig: Read-only after initialization                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;
mod store;

pub use config::ConsoleConfig;
pub use session::{InventoryState, Session, SessionState, ViewState, LOAD_FAILED_MESSAGE};
pub use store::StoreState;
