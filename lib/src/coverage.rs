use bimap::BiMap;

use crate::error::{Result, TrackError};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
pub struct Bp(pub u64);

/// Bin `i` covers `[i * resolution, (i + 1) * resolution)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
pub struct GenomeBin(pub u32);

impl GenomeBin {
    #[inline]
    pub fn ix(&self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn start_bp(&self, resolution: u64) -> Bp {
        Bp(self.0 as u64 * resolution)
    }

    #[inline]
    pub fn end_bp(&self, resolution: u64) -> Bp {
        Bp((self.0 as u64 + 1) * resolution)
    }

    pub fn range(&self, resolution: u64) -> std::ops::Range<Bp> {
        self.start_bp(resolution)..self.end_bp(resolution)
    }
}

/// Bins `0..count`. `count` must have passed matrix validation.
pub(crate) fn bins(count: usize) -> impl Iterator<Item = GenomeBin> {
    (0u32..).map(GenomeBin).take(count)
}

impl TryFrom<usize> for GenomeBin {
    type Error = std::num::TryFromIntError;

    fn try_from(u: usize) -> std::result::Result<GenomeBin, Self::Error> {
        u32::try_from(u).map(GenomeBin)
    }
}

// every row must have as many bins as the first one, and bins must be
// addressable as a `GenomeBin`
fn check_rows<T>(what: &'static str, rows: &[Vec<T>]) -> Result<usize> {
    let expected = rows.first().map(|r| r.len()).unwrap_or_default();

    if u32::try_from(expected).is_err() {
        return Err(TrackError::TooManyBins(expected));
    }

    for (row, values) in rows.iter().enumerate() {
        if values.len() != expected {
            return Err(TrackError::ShapeMismatch {
                what,
                row,
                expected,
                found: values.len(),
            });
        }
    }

    Ok(expected)
}

/// Read depth per sample, per bin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverageMatrix {
    samples: Vec<Vec<f64>>,
    bin_count: usize,
}

impl CoverageMatrix {
    pub fn new(samples: Vec<Vec<f64>>) -> Result<Self> {
        let bin_count = check_rows("sample", &samples)?;
        Ok(Self { samples, bin_count })
    }

    pub fn bin_count(&self) -> usize {
        self.bin_count
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[Vec<f64>] {
        &self.samples
    }

    pub fn sample(&self, ix: usize) -> Option<&[f64]> {
        self.samples.get(ix).map(|s| s.as_slice())
    }

    /// Largest depth over all samples and bins, 0 when empty.
    pub fn max_depth(&self) -> f64 {
        self.samples
            .iter()
            .flatten()
            .copied()
            .fold(0.0, f64::max)
    }
}

/// Hits per reference panel (rows) per bin (columns).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceHitMatrix {
    rows: Vec<Vec<u32>>,
    bin_count: usize,
}

impl ReferenceHitMatrix {
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self> {
        let bin_count = check_rows("reference", &rows)?;
        Ok(Self { rows, bin_count })
    }

    pub fn bin_count(&self) -> usize {
        self.bin_count
    }

    pub fn reference_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, reference: usize) -> Option<&[u32]> {
        self.rows.get(reference).map(|r| r.as_slice())
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    pub fn hits(&self, reference: usize, bin: GenomeBin) -> u32 {
        self.rows[reference][bin.ix()]
    }

    pub fn bins(&self) -> impl Iterator<Item = GenomeBin> {
        bins(self.bin_count)
    }

    pub fn bin_total(&self, bin: GenomeBin) -> u64 {
        self.rows.iter().map(|row| row[bin.ix()] as u64).sum()
    }
}

/// Reference panel identifiers in declaration order, which is also
/// the stacking order of the stream bands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct References {
    names: BiMap<String, usize>,
}

impl References {
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map = BiMap::new();

        for (ix, name) in names.into_iter().enumerate() {
            let name = name.into();
            if let Err((name, _)) = map.insert_no_overwrite(name, ix) {
                return Err(TrackError::DuplicateReference(name));
            }
        }

        Ok(Self { names: map })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.get_by_left(name).copied()
    }

    pub fn name(&self, ix: usize) -> Option<&str> {
        self.names.get_by_right(&ix).map(|s| s.as_str())
    }

    /// Names in stacking order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.len()).filter_map(move |ix| self.name(ix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_bp_ranges() {
        let bin = GenomeBin(3);
        assert_eq!(bin.range(100), Bp(300)..Bp(400));
        assert_eq!(GenomeBin(0).start_bp(100), Bp(0));
    }

    #[test]
    fn default_annotation_has_empty_genome() {
        let annotation = crate::annotation::Annotation::default();
        assert_eq!(annotation.genome_length, Bp(0));
        assert!(annotation.amplicons.is_none());
        assert!(annotation.genes.is_empty());
    }

    #[test]
    fn bin_index_must_fit_u32() {
        assert_eq!(GenomeBin::try_from(7usize), Ok(GenomeBin(7)));
        if usize::BITS > 32 {
            assert!(GenomeBin::try_from(usize::MAX).is_err());
        }

        let hits = ReferenceHitMatrix::new(vec![vec![0; 3]]).unwrap();
        let bins: Vec<_> = hits.bins().collect();
        assert_eq!(bins, vec![GenomeBin(0), GenomeBin(1), GenomeBin(2)]);
    }

    #[test]
    fn ragged_hit_matrix_is_rejected() {
        let err = ReferenceHitMatrix::new(vec![vec![1, 2, 3], vec![1, 2]])
            .unwrap_err();
        assert_eq!(
            err,
            TrackError::ShapeMismatch {
                what: "reference",
                row: 1,
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn ragged_coverage_is_rejected() {
        let res = CoverageMatrix::new(vec![vec![1.0], vec![]]);
        assert!(matches!(res, Err(TrackError::ShapeMismatch { row: 1, .. })));
    }

    #[test]
    fn empty_matrices() {
        let hits = ReferenceHitMatrix::new(Vec::new()).unwrap();
        assert_eq!(hits.bin_count(), 0);
        assert_eq!(hits.reference_count(), 0);

        let cov = CoverageMatrix::new(Vec::new()).unwrap();
        assert_eq!(cov.max_depth(), 0.0);
    }

    #[test]
    fn bin_totals() {
        let hits = ReferenceHitMatrix::new(vec![vec![5, 0], vec![5, 20]])
            .unwrap();
        assert_eq!(hits.bin_total(GenomeBin(0)), 10);
        assert_eq!(hits.bin_total(GenomeBin(1)), 20);
        assert_eq!(hits.hits(1, GenomeBin(1)), 20);
    }

    #[test]
    fn max_depth_over_samples() {
        let cov =
            CoverageMatrix::new(vec![vec![1.0, 7.5], vec![3.0, 2.0]]).unwrap();
        assert_eq!(cov.max_depth(), 7.5);
        assert_eq!(cov.bin_count(), 2);
    }

    #[test]
    fn references_keep_declaration_order() {
        let refs = References::new(["B", "A", "C"]).unwrap();
        assert_eq!(refs.iter().collect::<Vec<_>>(), vec!["B", "A", "C"]);
        assert_eq!(refs.index_of("A"), Some(1));
        assert_eq!(refs.name(2), Some("C"));
        assert_eq!(refs.name(3), None);
    }

    #[test]
    fn duplicate_reference() {
        let err = References::new(["A", "B", "A"]).unwrap_err();
        assert_eq!(err, TrackError::DuplicateReference("A".to_string()));
    }
}
