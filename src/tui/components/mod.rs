//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow three patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar with the page tabs
//! - `Toast`: Latest notification in the top-right corner
//!
//! ### Pages (Persistent State + Transient Wrapper)
//!
//! `CatalogState` and `AdminState` live in `TuiState` and survive between
//! frames. `Catalog` and `AdminDashboard` are built each frame around a
//! borrowed state and the data they show.
//!
//! ### Forms (Event-Driven)
//!
//! `AntennaForm`, `BookingForm` and `RequestForm` own their fields and emit
//! a `FormEvent` when submitted or dismissed. The shared focus handling and
//! modal rendering live in `form.rs`; the field widgets in `text_field.rs`
//! and `select_field.rs`.
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (function parameters), not by
//! directly accessing global state. This makes dependencies explicit and
//! components testable.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! Catalog::new(&mut tui.catalog, app.antennas.list()).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! catalog.render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status bar)
//! ├── toast.rs          (Notification popup)
//! ├── catalog.rs        (Public antenna cards)
//! ├── admin.rs          (Stat cards + management tables)
//! ├── form.rs           (Shared modal form plumbing)
//! ├── antenna_form.rs   (Add / edit antenna)
//! ├── booking_form.rs   (Add / edit booking)
//! ├── request_form.rs   (Public booking request)
//! ├── text_field.rs     (Single-line input)
//! ├── select_field.rs   (Option cycler)
//! ├── badge.rs          (Status colors)
//! └── overlay.rs        (Centering and truncation helpers)
//! ```

mod badge;
mod overlay;
mod select_field;
mod text_field;
mod title_bar;
mod toast;

pub mod admin;
pub mod antenna_form;
pub mod booking_form;
pub mod catalog;
pub mod form;
pub mod request_form;

pub use admin::{AdminDashboard, AdminEvent, AdminState};
pub use antenna_form::AntennaForm;
pub use booking_form::BookingForm;
pub use catalog::{Catalog, CatalogEvent, CatalogState};
pub use form::{FormEvent, FormLayout, render_form};
pub use request_form::RequestForm;
pub use title_bar::TitleBar;
pub use toast::Toast;
