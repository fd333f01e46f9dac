//! Core library modules for the stint application.
//!
//! Serves as the entry point for all stint library components.
//!
//! ## Features
//!
//! - **Activity Classification**: Monotonic-repetition filtering of host events
//! - **State Machine**: Active/Idle/Rendering tracking with atomic accounting
//! - **Duration Accumulators**: Pausable monotonic counters and report cursors
//! - **Periodic Reporting**: Signed online sync and offline persistence
//! - **Core Infrastructure**: Configuration, encrypted storage, messaging

pub mod activity;
pub mod config;
pub mod data_storage;
pub mod engine;
pub mod formatter;
pub mod messages;
pub mod secure_file;
pub mod status;
pub mod stopwatch;
pub mod tracker;
pub mod view;
