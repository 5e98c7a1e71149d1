pub mod error;
pub mod formats;
pub mod models;
pub mod raster;
pub mod vector;

pub use error::ConvertError;
pub use formats::{Normalization, TargetFormat};
pub use models::{Dimensions, ImageBuffer};
pub use raster::{convert, probe_size};
pub use vector::{probe_intrinsic_size, rasterize};
