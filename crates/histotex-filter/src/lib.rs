//! histotex-filter - Custom spatial filters
//!
//! Pure image-to-image transforms on normalized-float arrays: naive and
//! fast Gaussian smoothing, gamma correction, a scaled Laplacian, per-
//! channel histogram equalization, the opponent color rotation, channel
//! standardization, and global intensity adjustment. The `SpatialTransform`
//! enum names the transforms the dataset-mirroring tool applies.

pub mod equalize;
pub mod error;
pub mod gamma;
pub mod gaussian;
pub mod intensity;
pub mod laplace;
pub mod opponent;
mod plane;
pub mod transform;

pub use equalize::equalize_hist;
pub use error::{FilterError, FilterResult};
pub use gamma::adjust_gamma;
pub use gaussian::{gaussian_density, smooth_fast, smooth_naive, GaussianKernel};
pub use intensity::{adjust_intensity, IntensityMode, CHANGE_SCALE, SHIFT_DELTA};
pub use laplace::laplace;
pub use opponent::{normalize_channels, opponent_color};
pub use transform::SpatialTransform;
