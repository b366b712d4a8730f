/// Base pairs covered by a single bin.
pub const GENOME_RESOLUTION: u64 = 100;

/// A bin needs strictly more reads than this, summed over all
/// references, before it gets a stream band.
pub const MIN_READ_SUPPORT: f64 = 10.0;

/// Gene names longer than this are drawn without a label.
pub const MAX_LABEL_LEN: usize = 3;

pub const TITLE_HEIGHT: f64 = 20.0;

pub const DEPTH_CEILING_STEP: f64 = 50.0;

pub const AMPLICON_OFFSET: f64 = 20.0;
pub const AMPLICON_HEIGHT: f64 = 8.0;
pub const GENE_GAP: f64 = 5.0;
pub const GENE_HEIGHT: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl std::default::Default for Margins {
    fn default() -> Self {
        Self {
            // axis labels
            left: 40.0,
            right: 10.0,
            top: 10.0,
            // x-axis plus the amplicon & gene bands
            bottom: 60.0,
        }
    }
}

/// Tunables shared by every stage of a render pass.
///
/// The threshold and label cutoff are not derived from anything, they
/// are kept here so hosts can adjust them without touching the layout
/// code.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackConfig {
    pub genome_resolution: u64,
    pub min_read_support: f64,
    pub max_label_len: usize,

    pub title_height: f64,
    pub margins: Margins,
    pub depth_ceiling_step: f64,

    pub amplicon_offset: f64,
    pub amplicon_height: f64,
    pub gene_gap: f64,
    pub gene_height: f64,
}

impl std::default::Default for TrackConfig {
    fn default() -> Self {
        Self {
            genome_resolution: GENOME_RESOLUTION,
            min_read_support: MIN_READ_SUPPORT,
            max_label_len: MAX_LABEL_LEN,

            title_height: TITLE_HEIGHT,
            margins: Margins::default(),
            depth_ceiling_step: DEPTH_CEILING_STEP,

            amplicon_offset: AMPLICON_OFFSET,
            amplicon_height: AMPLICON_HEIGHT,
            gene_gap: GENE_GAP,
            gene_height: GENE_HEIGHT,
        }
    }
}

impl TrackConfig {
    pub fn with_resolution(mut self, genome_resolution: u64) -> Self {
        self.genome_resolution = genome_resolution;
        self
    }

    pub fn with_min_read_support(mut self, min_read_support: f64) -> Self {
        self.min_read_support = min_read_support;
        self
    }
}
