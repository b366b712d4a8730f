use std::collections::BTreeMap;

use crate::coverage::Bp;

pub mod layout;

pub use layout::{
    layout_annotations, AmpliconBox, AmpliconRow, AnnotationLayout, GeneBox,
    GeneLabel, GeneRow, PixelRect,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gene {
    pub start: Bp,
    pub end: Bp,
    /// `1` for the forward strand; anything else is drawn on the
    /// second gene row.
    pub strand: i8,
}

impl Gene {
    pub fn new(start: u64, end: u64, strand: i8) -> Self {
        Self {
            start: Bp(start),
            end: Bp(end),
            strand,
        }
    }

    pub fn is_forward(&self) -> bool {
        self.strand == 1
    }
}

/// Genome annotation shown beneath the coverage data. Supplied once
/// per chart and never modified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotation {
    pub genome_length: Bp,
    /// Primer/amplicon intervals, as `(start, end)`.
    pub amplicons: Option<Vec<(Bp, Bp)>>,
    pub genes: BTreeMap<String, Gene>,
}

impl Annotation {
    pub fn new(genome_length: u64) -> Self {
        Self {
            genome_length: Bp(genome_length),
            amplicons: None,
            genes: BTreeMap::default(),
        }
    }

    pub fn with_amplicons(
        mut self,
        amplicons: impl IntoIterator<Item = (u64, u64)>,
    ) -> Self {
        let amplicons = amplicons
            .into_iter()
            .map(|(s, e)| (Bp(s), Bp(e)))
            .collect();
        self.amplicons = Some(amplicons);
        self
    }

    pub fn with_gene(mut self, name: impl Into<String>, gene: Gene) -> Self {
        self.genes.insert(name.into(), gene);
        self
    }
}
