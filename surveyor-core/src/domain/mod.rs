//! Core domain types
//!
//! This module contains the domain structures shared between the trigger
//! client, the CLI, and the remote job entry point.

pub mod region;
pub mod run;
pub mod target;
