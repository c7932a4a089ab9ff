//! Core library components.
//!
//! This module contains the reusable logic for parsing, arranging, comparing
//! and transforming env files. Nothing here prompts or prints.

pub mod arrange;
pub mod config;
pub mod constants;
pub mod convert;
pub mod crypto;
pub mod diff;
pub mod discover;
pub mod domain;
pub mod files;
pub mod report;
pub mod schema;
