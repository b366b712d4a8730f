pub mod annotation;
pub mod config;
pub mod coverage;
pub mod error;
pub mod geometry;
pub mod pass;
pub mod scale;
pub mod series;

pub use config::TrackConfig;
pub use coverage::{Bp, CoverageMatrix, GenomeBin, ReferenceHitMatrix, References};
pub use error::{Result, TrackError};
pub use geometry::{ChartGeometry, ContainerBox};
pub use pass::{DisplayMode, Layer, RenderPass, TrackInputs, Trigger};
pub use scale::LinearScale;
pub use series::{normalize, Series, StackedBand};
