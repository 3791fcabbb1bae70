//! # Core Application Logic
//!
//! This module contains chamberdesk's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Repositories (data)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │  Catalog   │          │   Admin    │
//!             │   page     │          │ dashboard  │
//!             └────────────┘          └────────────┘
//!                   (both rendered by the TUI adapter)
//! ```
//!
//! ## Modules
//!
//! - [`model`]: antennas, bookings, drafts, status enums
//! - [`antennas`] / [`bookings`]: the repositories that own the collections
//! - [`request`]: the public booking request (validated, never stored)
//! - [`state`]: the `App` struct that holds both repositories
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: settings file, env and CLI resolution

pub mod action;
pub mod antennas;
pub mod bookings;
pub mod config;
pub mod error;
pub mod features;
pub mod model;
pub mod request;
pub mod seed;
pub mod state;
