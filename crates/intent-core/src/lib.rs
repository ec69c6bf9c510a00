// ABOUTME: Core types and constants for the workout intent classifier
// ABOUTME: Foundation crate with the data model, error handling and threshold defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Intent Core
//!
//! Foundation crate shared by the classification engine and its callers.
//!
//! ## Modules
//!
//! - **models**: activities, laps, splits, heart-rate zones, baselines and verdicts
//! - **errors**: `AppError`, `ErrorCode` and `AppResult` for fallible boundaries
//! - **constants**: default thresholds for every decision the engine makes

/// Default thresholds organized by domain
pub mod constants;

/// Unified error handling with standard error codes
pub mod errors;

/// Core data model
pub mod models;
