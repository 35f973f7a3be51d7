use crate::pudelko::model::Pudelko;
use std::cmp::Ordering;

/// Order by volume, then surface area, then total edge length (all ascending).
///
/// Equal boxes always compare `Equal`; the converse does not hold, since
/// different shapes can tie on all three measures.
pub fn by_volume_area_edges(lhs: &Pudelko, rhs: &Pudelko) -> Ordering {
    lhs.volume()
        .total_cmp(&rhs.volume())
        .then_with(|| lhs.surface_area().total_cmp(&rhs.surface_area()))
        .then_with(|| lhs.edge_sum().total_cmp(&rhs.edge_sum()))
}

/// Stable sort using [`by_volume_area_edges`]
pub fn sort_boxes(boxes: &mut [Pudelko]) {
    boxes.sort_by(by_volume_area_edges);
}
