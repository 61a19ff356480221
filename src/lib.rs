//! Skintotem - turn a player skin into a totem of undying texture
//!
//! This library provides functionality to:
//! - Extract the head, arms and body from a skin and lay them out on a 32x32 canvas
//! - Composite the optional head overlay layer and a decorative outline
//! - Export the result as PNG or as a resource pack
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use skintotem::pipeline::TotemGenerator;
//!
//! let skin = RgbaImage::from_pixel(64, 64, Rgba([200, 150, 100, 255]));
//! let totem = TotemGenerator::default().generate(&skin);
//! assert_eq!(totem.dimensions(), (32, 32));
//! ```

pub mod blend;
pub mod canvas;
pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod finish;
pub mod mask;
pub mod outline;
pub mod output;
pub mod pack;
pub mod pipeline;
pub mod regions;
#[cfg(feature = "remote")]
pub mod remote;
pub mod resample;
pub mod skin;

pub use error::TotemError;
pub use pipeline::{TotemGenerator, TotemOptions};
