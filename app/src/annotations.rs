use lyon::math::{point, Box2D};
use rstar::{
    primitives::{GeomWithData, Rectangle},
    RTree,
};

use coverage_track_core::annotation::{AnnotationLayout, PixelRect};

use crate::style::StyleConfig;
use crate::surface::{Baseline, RectStyle, Surface, TextAnchor, TextStyle};

fn to_box(rect: &PixelRect) -> Box2D {
    let (x0, x1) = (rect.x.min(rect.right()), rect.x.max(rect.right()));
    let (y0, y1) = (rect.y.min(rect.bottom()), rect.y.max(rect.bottom()));
    Box2D::new(
        point(x0 as f32, y0 as f32),
        point(x1 as f32, y1 as f32),
    )
}

/// Draws the amplicon band and the gene band below the plot.
pub fn draw_annotations<S: Surface>(
    surface: &mut S,
    layout: &AnnotationLayout,
    style: &StyleConfig,
) {
    let amplicon_style = RectStyle {
        fill: Some(style.amplicon_fill),
        stroke: None,
    };

    for amplicon in layout.amplicon_boxes.iter() {
        surface.rect(to_box(&amplicon.rect), amplicon_style);
    }

    let gene_style = RectStyle {
        fill: None,
        stroke: Some(style.gene_stroke),
    };

    let label_style = TextStyle {
        anchor: TextAnchor::Middle,
        baseline: Baseline::Hanging,
        font_size: style.label_font_size,
        dy: style.label_dy,
        color: style.label_color,
    };

    for gene in layout.gene_boxes.iter() {
        surface.rect(to_box(&gene.rect), gene_style);

        let at = point(gene.label.x as f32, gene.label.y as f32);
        surface.text(at, &gene.label.text, label_style);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationHit {
    Amplicon(usize),
    Gene(String),
}

type AnnotsTreeObj = GeomWithData<Rectangle<[f64; 2]>, usize>;

/// Spatial index over the laid-out annotation boxes, for resolving
/// pointer positions to annotations.
pub struct AnnotationIndex {
    tree: RTree<AnnotsTreeObj>,
    hits: Vec<AnnotationHit>,
}

impl AnnotationIndex {
    pub fn new(layout: &AnnotationLayout) -> Self {
        let mut hits = Vec::new();
        let mut objs = Vec::new();

        let mut push = |rect: &PixelRect, hit: AnnotationHit| {
            let geom = Rectangle::from_corners(
                [rect.x, rect.y],
                [rect.right(), rect.bottom()],
            );
            objs.push(GeomWithData::new(geom, hits.len()));
            hits.push(hit);
        };

        for amplicon in layout.amplicon_boxes.iter() {
            push(&amplicon.rect, AnnotationHit::Amplicon(amplicon.index));
        }

        for gene in layout.gene_boxes.iter() {
            push(&gene.rect, AnnotationHit::Gene(gene.name.clone()));
        }

        Self {
            tree: RTree::bulk_load(objs),
            hits,
        }
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// All annotations whose box contains the point, in layout order.
    pub fn locate(&self, x: f64, y: f64) -> Vec<&AnnotationHit> {
        let mut ids = self
            .tree
            .locate_all_at_point(&[x, y])
            .map(|obj| obj.data)
            .collect::<Vec<_>>();
        ids.sort_unstable();
        ids.into_iter().map(|id| &self.hits[id]).collect()
    }
}
