// src/services/mod.rs
pub mod image_encoder;

pub use image_encoder::{FileImageEncoder, ImageEncodingService};
