//! Bootunpack library exports for testing.
//!
//! This module exposes internal components for integration testing.

pub mod commands;
pub mod config;
pub mod error;
pub mod launcher;
pub mod listing;
pub mod preflight;
pub mod process;
pub mod runlog;
