//! # motorpool-contracts
//!
//! Shared types and error definitions for the motorpool workspace.
//!
//! All crates in the workspace import from here. No vehicle behavior lives in
//! this crate, only data definitions and error types.

pub mod engine;
pub mod error;
pub mod notice;
pub mod vehicle;
