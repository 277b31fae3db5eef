//! Core types and definitions for the STARFALL progression core.
//!
//! This crate defines the vocabulary shared across all other crates:
//! zone configuration, spawn entries and instructions, wave phases,
//! announcement events, and tuning constants.
//! It has no dependency on any rendering or runtime framework.

pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod spawn;
pub mod types;
