// ABOUTME: Configuration module for the intent engine
// ABOUTME: Re-exports classifier threshold configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Classifier thresholds grouped by component
pub mod classifier;
/// Configuration validation errors
pub mod error;

pub use classifier::{ClassifierConfig, PaceAnalysisConfig, ResolverConfig, StructuralConfig};
pub use error::ConfigError;
