use roaring::RoaringBitmap;

use crate::config::TrackConfig;
use crate::coverage::{Bp, GenomeBin, ReferenceHitMatrix};
use crate::error::{Result, TrackError};

/// Vertical extent of one reference at one bin, as fractions of the
/// total read support at that bin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StackedBand {
    pub start: f64,
    pub end: f64,
}

impl StackedBand {
    pub const EMPTY: Self = Self {
        start: 0.0,
        end: 0.0,
    };

    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn height(&self) -> f64 {
        self.end - self.start
    }
}

/// Stacked stream bands, indexed `[reference][bin]`.
///
/// Stacking order is the reference order of the hit matrix, so a
/// reference keeps its layer across all bins.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    bands: Vec<Vec<StackedBand>>,
    bin_count: usize,
    resolution: u64,

    // bins whose total read support passed the gate
    supported: RoaringBitmap,
}

/// Converts per-reference hit counts into stacked proportional bands.
///
/// Bins with a total of `config.min_read_support` reads or fewer get
/// `(0, 0)` for every reference.
pub fn normalize(
    hits: &ReferenceHitMatrix,
    reference_count: usize,
    config: &TrackConfig,
) -> Result<Series> {
    if hits.reference_count() != reference_count {
        return Err(TrackError::ReferenceCountMismatch {
            expected: reference_count,
            found: hits.reference_count(),
        });
    }

    let bin_count = hits.bin_count();
    let mut bands = vec![vec![StackedBand::EMPTY; bin_count]; reference_count];
    let mut supported = RoaringBitmap::new();

    for bin in hits.bins() {
        let total = hits.bin_total(bin);

        if total as f64 <= config.min_read_support {
            continue;
        }

        let total = total as f64;
        let mut cursor = 0.0;

        for (ref_ix, ref_bands) in bands.iter_mut().enumerate() {
            let frac = hits.hits(ref_ix, bin) as f64 / total;
            ref_bands[bin.ix()] = StackedBand::new(cursor, cursor + frac);
            cursor += frac;
        }

        supported.insert(bin.0);
    }

    log::trace!(
        "normalized {} bins over {} references, {} below read support",
        bin_count,
        reference_count,
        bin_count as u64 - supported.len()
    );

    Ok(Series {
        bands,
        bin_count,
        resolution: config.genome_resolution,
        supported,
    })
}

impl Series {
    pub fn reference_count(&self) -> usize {
        self.bands.len()
    }

    pub fn bin_count(&self) -> usize {
        self.bin_count
    }

    pub fn resolution(&self) -> u64 {
        self.resolution
    }

    pub fn reference(&self, ref_ix: usize) -> Option<&[StackedBand]> {
        self.bands.get(ref_ix).map(|b| b.as_slice())
    }

    pub fn band(&self, ref_ix: usize, bin: GenomeBin) -> Option<StackedBand> {
        self.bands.get(ref_ix)?.get(bin.ix()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[StackedBand]> + '_ {
        self.bands.iter().map(|b| b.as_slice())
    }

    pub fn is_supported(&self, bin: GenomeBin) -> bool {
        self.supported.contains(bin.0)
    }

    pub fn supported_bins(&self) -> &RoaringBitmap {
        &self.supported
    }

    pub fn bins(&self) -> impl Iterator<Item = GenomeBin> {
        crate::coverage::bins(self.bin_count)
    }

    /// Genome position the stream is drawn at for this bin.
    pub fn bin_position(&self, bin: GenomeBin) -> Bp {
        bin.start_bp(self.resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn series(rows: Vec<Vec<u32>>) -> Series {
        let n = rows.len();
        let hits = ReferenceHitMatrix::new(rows).unwrap();
        normalize(&hits, n, &TrackConfig::default()).unwrap()
    }

    #[test]
    fn two_reference_example() {
        let s = series(vec![vec![5, 0], vec![5, 20]]);

        assert_eq!(s.band(0, GenomeBin(0)), Some(StackedBand::EMPTY));
        assert_eq!(s.band(1, GenomeBin(0)), Some(StackedBand::EMPTY));

        assert_eq!(s.band(0, GenomeBin(1)), Some(StackedBand::new(0.0, 0.0)));
        assert_eq!(s.band(1, GenomeBin(1)), Some(StackedBand::new(0.0, 1.0)));

        assert!(!s.is_supported(GenomeBin(0)));
        assert!(s.is_supported(GenomeBin(1)));
    }

    #[test]
    fn quarter_split() {
        let s = series(vec![vec![5], vec![15]]);
        let a = s.band(0, GenomeBin(0)).unwrap();
        let b = s.band(1, GenomeBin(0)).unwrap();

        assert!((a.start - 0.0).abs() < EPS);
        assert!((a.end - 0.25).abs() < EPS);
        assert!((b.start - 0.25).abs() < EPS);
        assert!((b.end - 1.0).abs() < EPS);
    }

    #[test]
    fn threshold_is_strict() {
        // total 10: not enough
        let s = series(vec![vec![4], vec![6]]);
        for r in 0..2 {
            assert_eq!(s.band(r, GenomeBin(0)), Some(StackedBand::EMPTY));
        }

        // total 11: stacked to 1
        let s = series(vec![vec![4], vec![7]]);
        let last = s.band(1, GenomeBin(0)).unwrap();
        assert!((last.end - 1.0).abs() < EPS);
    }

    #[test]
    fn stacking_is_contiguous_and_sums_to_one() {
        let rows = vec![
            vec![3, 0, 100, 1],
            vec![0, 0, 7, 2],
            vec![9, 11, 13, 3],
            vec![1, 0, 0, 4],
        ];
        let totals: Vec<u32> =
            (0..4).map(|b| rows.iter().map(|r| r[b]).sum()).collect();
        let s = series(rows);

        for (bin, total) in crate::coverage::bins(4).zip(totals) {
            let bands: Vec<_> =
                (0..4).map(|r| s.band(r, bin).unwrap()).collect();

            if total > 10 {
                assert!((bands[3].end - 1.0).abs() < EPS);
                assert_eq!(bands[0].start, 0.0);
                for pair in bands.windows(2) {
                    assert_eq!(pair[0].end, pair[1].start);
                    assert!(pair[0].start <= pair[0].end);
                }
            } else {
                assert!(bands.iter().all(|b| *b == StackedBand::EMPTY));
            }
        }
    }

    #[test]
    fn zero_hit_reference_keeps_its_slot() {
        let s = series(vec![vec![6], vec![0], vec![6]]);
        let mid = s.band(1, GenomeBin(0)).unwrap();

        assert_eq!(mid.height(), 0.0);
        assert!((mid.start - 0.5).abs() < EPS);
    }

    #[test]
    fn reference_count_must_match() {
        let hits = ReferenceHitMatrix::new(vec![vec![1, 2]]).unwrap();
        let err = normalize(&hits, 2, &TrackConfig::default()).unwrap_err();
        assert_eq!(
            err,
            TrackError::ReferenceCountMismatch {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn empty_hit_matrix() {
        let s = series(Vec::new());
        assert_eq!(s.reference_count(), 0);
        assert_eq!(s.bin_count(), 0);
        assert!(s.supported_bins().is_empty());
    }

    #[test]
    fn configurable_gate() {
        let hits = ReferenceHitMatrix::new(vec![vec![1], vec![1]]).unwrap();
        let cfg = TrackConfig::default().with_min_read_support(0.0);
        let s = normalize(&hits, 2, &cfg).unwrap();
        assert_eq!(s.band(0, GenomeBin(0)), Some(StackedBand::new(0.0, 0.5)));
    }

    #[test]
    fn bin_positions_use_resolution() {
        let hits = ReferenceHitMatrix::new(vec![vec![0; 4]]).unwrap();
        let cfg = TrackConfig::default().with_resolution(50);
        let s = normalize(&hits, 1, &cfg).unwrap();
        assert_eq!(s.bin_position(GenomeBin(3)), Bp(150));
    }
}
