use anyhow::{Context, Result};

use coverage_track_core::annotation::Annotation;
use coverage_track_core::{
    ContainerBox, CoverageMatrix, DisplayMode, ReferenceHitMatrix, References,
    RenderPass, TrackConfig, TrackInputs, Trigger,
};

use crate::annotations::{AnnotationHit, AnnotationIndex};
use crate::color::SampleColors;
use crate::render::draw_pass;
use crate::style::StyleConfig;
use crate::surface::Surface;

pub const READ_DEPTH_LABEL: &str = "Read Depth";
pub const REFERENCE_MATCHES_LABEL: &str = "Reference Matches";

/// Everything the host hands to the plot, fully loaded.
#[derive(Debug, Clone, Default)]
pub struct TrackData {
    pub coverage: CoverageMatrix,
    pub hits: ReferenceHitMatrix,
    pub references: References,
    pub annotation: Annotation,
    pub sample_colors: SampleColors,
}

impl TrackData {
    pub fn inputs(&self) -> TrackInputs<'_> {
        TrackInputs {
            coverage: &self.coverage,
            hits: &self.hits,
            references: &self.references,
            annotation: &self.annotation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Title {
    ReadDepth,
    /// Both labels with a switch between them; `mode` is the side
    /// currently shown.
    Toggle { mode: DisplayMode },
}

impl Title {
    pub fn labels(&self) -> (&'static str, Option<&'static str>) {
        match self {
            Title::ReadDepth => (READ_DEPTH_LABEL, None),
            Title::Toggle { .. } => {
                (READ_DEPTH_LABEL, Some(REFERENCE_MATCHES_LABEL))
            }
        }
    }
}

/// The stateful side of the coverage track: holds the data, the
/// container size and the display mode, and redraws the whole track
/// whenever one of them changes.
pub struct CoveragePlot {
    data: TrackData,
    config: TrackConfig,
    style: StyleConfig,

    container: ContainerBox,
    mode: DisplayMode,
    reference_matches_enabled: bool,

    annotation_index: Option<AnnotationIndex>,
}

impl CoveragePlot {
    pub fn new(
        data: TrackData,
        container: ContainerBox,
        config: TrackConfig,
    ) -> Self {
        Self {
            data,
            config,
            style: StyleConfig::default(),

            container,
            mode: DisplayMode::default(),
            reference_matches_enabled: false,

            annotation_index: None,
        }
    }

    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    pub fn with_reference_matches(mut self, enabled: bool) -> Self {
        self.reference_matches_enabled = enabled;
        self
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn container(&self) -> ContainerBox {
        self.container
    }

    pub fn data(&self) -> &TrackData {
        &self.data
    }

    pub fn title(&self) -> Title {
        if self.reference_matches_enabled {
            Title::Toggle { mode: self.mode }
        } else {
            Title::ReadDepth
        }
    }

    /// First draw after the surface exists.
    pub fn mount<S: Surface>(&mut self, surface: &mut S) -> Result<()> {
        self.redraw(surface)
    }

    /// Redraws for `trigger`. The new container or mode is only kept
    /// when its pass draws; on error the plot stays as it was.
    pub fn handle<S: Surface>(
        &mut self,
        trigger: Trigger,
        surface: &mut S,
    ) -> Result<()> {
        match trigger {
            Trigger::DataChanged => self.redraw(surface),
            Trigger::GeometryChanged(container) => {
                let index =
                    self.draw(&self.data, container, self.mode, surface)?;
                self.container = container;
                self.annotation_index = Some(index);
                Ok(())
            }
            Trigger::ModeToggled => {
                if !self.reference_matches_enabled {
                    log::warn!("reference matches are disabled, ignoring toggle");
                    return Ok(());
                }
                let mode = self.mode.toggled();
                let index =
                    self.draw(&self.data, self.container, mode, surface)?;
                self.mode = mode;
                self.annotation_index = Some(index);
                Ok(())
            }
        }
    }

    /// Replaces the data if it draws; otherwise the previous data and
    /// pointer index are kept.
    pub fn set_data<S: Surface>(
        &mut self,
        data: TrackData,
        surface: &mut S,
    ) -> Result<()> {
        let index = self.draw(&data, self.container, self.mode, surface)?;
        self.data = data;
        self.annotation_index = Some(index);
        Ok(())
    }

    pub fn resize<S: Surface>(
        &mut self,
        container: ContainerBox,
        surface: &mut S,
    ) -> Result<()> {
        self.handle(Trigger::GeometryChanged(container), surface)
    }

    pub fn toggle_mode<S: Surface>(&mut self, surface: &mut S) -> Result<()> {
        self.handle(Trigger::ModeToggled, surface)
    }

    pub fn redraw<S: Surface>(&mut self, surface: &mut S) -> Result<()> {
        let index = self.draw(&self.data, self.container, self.mode, surface)?;
        self.annotation_index = Some(index);
        Ok(())
    }

    // the surface is only touched once the pass has been built
    fn draw<S: Surface>(
        &self,
        data: &TrackData,
        container: ContainerBox,
        mode: DisplayMode,
        surface: &mut S,
    ) -> Result<AnnotationIndex> {
        let inputs = data.inputs();
        let pass = RenderPass::build(&inputs, container, mode, &self.config)
            .with_context(|| format!("building {:?} render pass", mode))?;

        draw_pass(surface, &pass, &data.sample_colors, &self.style);

        Ok(AnnotationIndex::new(&pass.annotations))
    }

    /// Annotations under the pointer, empty before the first draw.
    pub fn annotations_at(&self, x: f64, y: f64) -> Vec<&AnnotationHit> {
        self.annotation_index
            .as_ref()
            .map(|index| index.locate(x, y))
            .unwrap_or_default()
    }
}
