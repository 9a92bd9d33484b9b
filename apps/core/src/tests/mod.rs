//! Test Module
//!
//! Cross-module test suite for MindCare core.
//!
//! ## Test Categories
//! - `brain_tests`: Stress classification, topic detection, dialogue selection, analyzer
//! - `integration_tests`: Multi-turn conversations, lexicon files, dashboard summary

pub mod brain_tests;
pub mod integration_tests;
