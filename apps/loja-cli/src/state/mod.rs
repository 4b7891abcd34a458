//! # State Module
//!
//! State handed to commands. Each command takes only the pieces it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  StoreState  │  │  FormState   │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Storage     │  │  Mutex<      │  │  db_path         │              │
//! │  │  (store +    │  │   Product    │  │  in_memory       │              │
//! │  │   policy)    │  │   Form>      │  │  failure_policy  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: the store handle is Send + Sync                         │
//! │  • FormState: Mutex for exclusive edits                                │
//! │  • ConfigState: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod form;
mod store;

pub use config::ConfigState;
pub use form::{FormField, FormState};
pub use store::StoreState;
