use crate::config::TrackConfig;
use crate::geometry::ChartGeometry;
use crate::scale::LinearScale;

use super::Annotation;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmpliconRow {
    Upper,
    Lower,
}

impl AmpliconRow {
    /// Neighbouring amplicons usually overlap, so they alternate
    /// between the two rows; even indices go on the lower one.
    pub fn for_index(ix: usize) -> Self {
        if ix % 2 == 1 {
            AmpliconRow::Upper
        } else {
            AmpliconRow::Lower
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneRow {
    Forward,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmpliconBox {
    pub index: usize,
    pub row: AmpliconRow,
    pub rect: PixelRect,
}

/// Label text is empty when the name is too long to fit. Anchored at
/// the horizontal center and the top edge of the gene box.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneBox {
    pub name: String,
    pub row: GeneRow,
    pub rect: PixelRect,
    pub label: GeneLabel,
}

/// Pixel boxes for the two annotation bands below the plot region.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationLayout {
    pub amplicon_roof: f64,
    pub gene_roof: f64,
    pub amplicon_boxes: Vec<AmpliconBox>,
    pub gene_boxes: Vec<GeneBox>,
}

pub fn layout_annotations(
    geometry: &ChartGeometry,
    x: &LinearScale,
    annotation: &Annotation,
    config: &TrackConfig,
) -> AnnotationLayout {
    let amplicon_roof = geometry.plot_bottom() + config.amplicon_offset;
    let amplicon_height = config.amplicon_height;

    let gene_roof = amplicon_roof + 2.0 * amplicon_height + config.gene_gap;
    let gene_height = config.gene_height;

    let mut amplicon_boxes = Vec::new();

    if let Some(amplicons) = annotation.amplicons.as_ref() {
        amplicon_boxes.reserve(amplicons.len());

        for (index, &(start, end)) in amplicons.iter().enumerate() {
            let row = AmpliconRow::for_index(index);
            let y = match row {
                AmpliconRow::Upper => amplicon_roof,
                AmpliconRow::Lower => amplicon_roof + amplicon_height,
            };

            let x0 = x.map_bp(start);
            let x1 = x.map_bp(end);

            if x1 < x0 {
                log::warn!("amplicon {index} ends before it starts");
            }

            amplicon_boxes.push(AmpliconBox {
                index,
                row,
                rect: PixelRect {
                    x: x0,
                    y,
                    width: x1 - x0,
                    height: amplicon_height,
                },
            });
        }
    }

    let mut gene_boxes = Vec::with_capacity(annotation.genes.len());

    for (name, gene) in annotation.genes.iter() {
        if gene.strand != 1 && gene.strand != -1 {
            log::warn!("gene {name} has unknown strand {}", gene.strand);
        }

        let (row, y) = if gene.is_forward() {
            (GeneRow::Forward, gene_roof)
        } else {
            (GeneRow::Other, gene_roof + gene_height)
        };

        let x0 = x.map_bp(gene.start);
        let x1 = x.map_bp(gene.end);

        let rect = PixelRect {
            x: x0,
            y,
            width: x1 - x0,
            height: gene_height,
        };

        let text = if name.chars().count() > config.max_label_len {
            String::new()
        } else {
            name.clone()
        };

        let label = GeneLabel {
            text,
            x: rect.center_x(),
            y,
        };

        gene_boxes.push(GeneBox {
            name: name.clone(),
            row,
            rect,
            label,
        });
    }

    AnnotationLayout {
        amplicon_roof,
        gene_roof,
        amplicon_boxes,
        gene_boxes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Gene;
    use crate::coverage::Bp;
    use crate::geometry::ContainerBox;
    use crate::scale::x_scale;

    fn setup() -> (ChartGeometry, LinearScale, TrackConfig) {
        let cfg = TrackConfig::default();
        let geom =
            ChartGeometry::compute(ContainerBox::new(1010.0, 320.0), &cfg);
        // 10 bp per pixel over [40, 1000]
        let x = x_scale(&geom, Bp(9600));
        (geom, x, cfg)
    }

    #[test]
    fn band_origins() {
        let (geom, x, cfg) = setup();
        let layout = layout_annotations(&geom, &x, &Annotation::new(9600), &cfg);

        // 300 - 60 + 20
        assert_eq!(layout.amplicon_roof, 260.0);
        // 260 + 16 + 5
        assert_eq!(layout.gene_roof, 281.0);
        assert!(layout.amplicon_boxes.is_empty());
        assert!(layout.gene_boxes.is_empty());
    }

    #[test]
    fn amplicons_alternate_rows() {
        let (geom, x, cfg) = setup();
        let annotation = Annotation::new(9600).with_amplicons([
            (0, 400),
            (300, 700),
            (600, 1000),
            (900, 1300),
        ]);
        let layout = layout_annotations(&geom, &x, &annotation, &cfg);

        let rows: Vec<_> = layout.amplicon_boxes.iter().map(|b| b.row).collect();
        assert_eq!(
            rows,
            vec![
                AmpliconRow::Lower,
                AmpliconRow::Upper,
                AmpliconRow::Lower,
                AmpliconRow::Upper
            ]
        );

        let ys: Vec<_> =
            layout.amplicon_boxes.iter().map(|b| b.rect.y).collect();
        assert_eq!(ys, vec![268.0, 260.0, 268.0, 260.0]);

        let first = layout.amplicon_boxes[0].rect;
        assert_eq!(first.x, 40.0);
        assert_eq!(first.width, 40.0);
        assert_eq!(first.height, 8.0);
    }

    #[test]
    fn genes_placed_by_strand() {
        let (geom, x, cfg) = setup();
        let annotation = Annotation::new(9600)
            .with_gene("E1", Gene::new(1000, 2000, 1))
            .with_gene("E2", Gene::new(2000, 3000, -1))
            .with_gene("E3", Gene::new(3000, 4000, 0));
        let layout = layout_annotations(&geom, &x, &annotation, &cfg);

        let e1 = &layout.gene_boxes[0];
        assert_eq!(e1.name, "E1");
        assert_eq!(e1.row, GeneRow::Forward);
        assert_eq!(e1.rect.y, 281.0);
        assert_eq!(e1.rect.x, 140.0);
        assert_eq!(e1.rect.right(), 240.0);

        assert_eq!(layout.gene_boxes[1].row, GeneRow::Other);
        assert_eq!(layout.gene_boxes[1].rect.y, 296.0);

        // unknown strand values fall back to the second row
        assert_eq!(layout.gene_boxes[2].row, GeneRow::Other);
    }

    #[test]
    fn long_gene_names_lose_their_label() {
        let (geom, x, cfg) = setup();
        let annotation = Annotation::new(9600)
            .with_gene("E1", Gene::new(0, 1000, 1))
            .with_gene("ORF", Gene::new(1000, 2000, 1))
            .with_gene("ORF1ab", Gene::new(2000, 9000, 1));
        let layout = layout_annotations(&geom, &x, &annotation, &cfg);

        let label = |name: &str| {
            layout
                .gene_boxes
                .iter()
                .find(|g| g.name == name)
                .map(|g| g.label.clone())
                .unwrap()
        };

        assert_eq!(label("E1").text, "E1");
        assert_eq!(label("ORF").text, "ORF");
        assert_eq!(label("ORF1ab").text, "");

        let e1 = label("E1");
        assert_eq!(e1.x, 90.0);
        assert_eq!(e1.y, 281.0);
    }

    #[test]
    fn amplicon_and_gene_bands_do_not_overlap() {
        let (geom, x, cfg) = setup();
        let annotation = Annotation::new(9600)
            .with_amplicons([(0, 100), (50, 150)])
            .with_gene("N", Gene::new(0, 100, 1));
        let layout = layout_annotations(&geom, &x, &annotation, &cfg);

        let lowest_amplicon = layout
            .amplicon_boxes
            .iter()
            .map(|b| b.rect.bottom())
            .fold(f64::MIN, f64::max);
        assert!(lowest_amplicon < layout.gene_boxes[0].rect.y);
    }
}
