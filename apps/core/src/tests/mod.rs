//! Test Module
//!
//! Integration test suite for the Clarify+ backend.
//!
//! ## Test Categories
//! - `scraper_tests`: URL fetching, HTML extraction, image downloading
//! - `api_tests`: HTTP endpoints and the full processing pipeline

pub mod scraper_tests;
