//! Surveyor Core
//!
//! Core types and validation for the survey-processing job invocation system.
//!
//! This crate contains:
//! - Domain types: Run parameters, job targets, and run identifiers
//! - DTOs: Wire-format bodies for the control-plane jobs API

pub mod domain;
pub mod dto;
pub mod error;
