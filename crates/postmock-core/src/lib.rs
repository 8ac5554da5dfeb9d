pub mod consts;
pub mod crop;
pub mod error;
pub mod export;
pub mod mockup;
pub mod post;
pub mod settings;
pub mod transform;

pub use image::RgbaImage;
