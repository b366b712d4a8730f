use crate::annotation::{layout_annotations, Annotation, AnnotationLayout};
use crate::config::TrackConfig;
use crate::coverage::{CoverageMatrix, ReferenceHitMatrix, References};
use crate::error::{Result, TrackError};
use crate::geometry::{ChartGeometry, ContainerBox};
use crate::scale::{depth_ceiling, x_scale, y_scale, LinearScale};
use crate::series::{normalize, Series};

/// What the data layer shows. The two modes draw structurally
/// different geometry, so switching always means a full redraw.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// Read depth per sample, as step lines.
    #[default]
    Absolute,
    /// Share of reads per reference panel, as a stream graph.
    Normalized,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Absolute => DisplayMode::Normalized,
            DisplayMode::Normalized => DisplayMode::Absolute,
        }
    }
}

/// Events that start a new render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    DataChanged,
    GeometryChanged(ContainerBox),
    ModeToggled,
}

/// Everything a pass reads, borrowed from the host for its duration.
#[derive(Debug, Clone, Copy)]
pub struct TrackInputs<'a> {
    pub coverage: &'a CoverageMatrix,
    pub hits: &'a ReferenceHitMatrix,
    pub references: &'a References,
    pub annotation: &'a Annotation,
}

impl<'a> TrackInputs<'a> {
    /// Checks that the matrices agree with each other. Returns the
    /// dataset's bin count.
    pub fn validate(&self) -> Result<usize> {
        if self.hits.reference_count() != self.references.len() {
            return Err(TrackError::ReferenceCountMismatch {
                expected: self.references.len(),
                found: self.hits.reference_count(),
            });
        }

        let has_coverage = self.coverage.sample_count() > 0;
        let has_hits = self.hits.reference_count() > 0;

        if has_coverage
            && has_hits
            && self.coverage.bin_count() != self.hits.bin_count()
        {
            return Err(TrackError::ShapeMismatch {
                what: "hit matrix vs coverage",
                row: 0,
                expected: self.coverage.bin_count(),
                found: self.hits.bin_count(),
            });
        }

        if has_coverage {
            Ok(self.coverage.bin_count())
        } else {
            Ok(self.hits.bin_count())
        }
    }
}

pub enum Layer<'a> {
    Steps {
        coverage: &'a CoverageMatrix,
        resolution: u64,
    },
    Stream(Series),
}

impl<'a> Layer<'a> {
    pub fn mode(&self) -> DisplayMode {
        match self {
            Layer::Steps { .. } => DisplayMode::Absolute,
            Layer::Stream(_) => DisplayMode::Normalized,
        }
    }
}

/// The derived state of one render pass. Built from scratch on every
/// trigger and dropped when the next pass replaces it.
pub struct RenderPass<'a> {
    pub mode: DisplayMode,
    pub bin_count: usize,
    pub geometry: ChartGeometry,
    pub x: LinearScale,
    pub y: LinearScale,
    pub ceiling: f64,
    pub layer: Layer<'a>,
    pub annotations: AnnotationLayout,
}

impl<'a> RenderPass<'a> {
    pub fn build(
        inputs: &TrackInputs<'a>,
        container: ContainerBox,
        mode: DisplayMode,
        config: &TrackConfig,
    ) -> Result<Self> {
        let bin_count = inputs.validate()?;

        let geometry = ChartGeometry::compute(container, config);
        let x = x_scale(&geometry, inputs.annotation.genome_length);

        let (ceiling, layer) = match mode {
            DisplayMode::Absolute => {
                let max = inputs.coverage.max_depth();
                let ceiling = depth_ceiling(max, config.depth_ceiling_step);
                let layer = Layer::Steps {
                    coverage: inputs.coverage,
                    resolution: config.genome_resolution,
                };
                (ceiling, layer)
            }
            DisplayMode::Normalized => {
                let series =
                    normalize(inputs.hits, inputs.references.len(), config)?;
                (1.0, Layer::Stream(series))
            }
        };

        let y = y_scale(&geometry, ceiling);

        let annotations =
            layout_annotations(&geometry, &x, inputs.annotation, config);

        log::debug!(
            "render pass: {:?}, {} bins, y ceiling {}",
            mode,
            bin_count,
            ceiling
        );

        Ok(Self {
            mode,
            bin_count,
            geometry,
            x,
            y,
            ceiling,
            layer,
            annotations,
        })
    }
}
