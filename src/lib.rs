// src/lib.rs
//! Core types for the FoodLens scanner backend.
//!
//! This crate provides:
//! - An async [`ImageEncodingService`] trait and a filesystem-backed
//!   implementation that turns an image locator into its base64 text
//! - [`FoodItem`] and [`BoundingBox`], the serializable detection results

pub mod errors;
pub mod models;
pub mod services;

pub use errors::EncodeError;
pub use models::{BoundingBox, FoodItem};
pub use services::{FileImageEncoder, ImageEncodingService};
