//! Video showcase library.
//!
//! A public video listing and an admin panel in front of an external video
//! REST API. Controllers keep an explicit in-memory projection of the last
//! API response and render it to HTML with maud; the web module serves the
//! pages with axum.

pub mod admin;
pub mod api;
pub mod components;
pub mod config;
pub mod constants;
pub mod listing;
pub mod models;
pub mod notice;
pub mod store;
pub mod web;
