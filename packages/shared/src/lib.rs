//! Shared utilities for Missive binaries.

pub mod logger;
