pub mod annotations;
pub mod axes;
pub mod color;
pub mod curves;
pub mod plot;
pub mod render;
pub mod style;
pub mod surface;

pub use plot::{CoveragePlot, Title, TrackData};
pub use surface::{DisplayList, Surface};

