//! Container Comprehensive Test Suite
//!
//! Cross-crate tests for the container guarantees.
//!
//! ## Test Tier Structure
//!
//! - **Tier 1: Scenarios** (fixed inputs, exact outputs)
//!   One test per documented container scenario.
//!
//! - **Tier 2: Invariants** (property-based)
//!   Key shape, dense keys, copy independence, read-only and inverse-pair
//!   guarantees over random inputs and operation sequences.
//!
//! - **Tier 3: Collation** (global state discipline)
//!   Locale-aware sorts restore the previous collation on success, error
//!   and panic.
//!
//! - **Tier 4: Configuration** (TOML to container)
//!   Containers built from config files behave like hand-built ones.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test container_comprehensive
//!
//! # Run only the property tests
//! cargo test --test container_comprehensive fuzz
//! ```

// Test utilities
mod test_utils;

// Tier 1: Scenarios
mod scenario_tests;

// Tier 2: Invariants
mod invariant_tests;

// Tier 3: Collation
mod collation_tests;

// Tier 4: Configuration
mod config_tests;
