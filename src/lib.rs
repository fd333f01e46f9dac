//! # Stint - Session Time Tracker
//!
//! A command-line utility that measures how long a user is actively working,
//! distinguishes genuine interaction from automated event floods, and
//! synchronizes the accumulated active time to a leaderboard service over a
//! signed protocol — or to local encrypted storage when offline.
//!
//! ## Features
//!
//! - **Activity Classification**: Sliding-window filtering of monotonic
//!   single-category event floods
//! - **Idle & Render Detection**: Active/Idle/Rendering state machine with
//!   separate duration accounting per state
//! - **Periodic Reporting**: Delta-based sync with a validity window,
//!   at-least-once semantics and retry-next-cycle on failure
//! - **Offline Mode**: Local persistence with double-count-free handoff
//!   between online and offline accounting
//! - **Account Binding**: Signed browser flow binding the installation to a
//!   remote user account
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stint::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
