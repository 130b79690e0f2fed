//! # Repository Module
//!
//! Store operations grouped by entity.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Console command                                                        │
//! │       │                                                                 │
//! │       │  store.products().list()                                       │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list(&self)                                                       │
//! │  ├── get(&self, id)                                                    │
//! │  ├── create(&self, fields)                                             │
//! │  ├── update(&self, product)                                            │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  sleep(latency), then lock                                     │
//! │       ▼                                                                 │
//! │  Shared Vec<Product>                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD

pub mod product;
