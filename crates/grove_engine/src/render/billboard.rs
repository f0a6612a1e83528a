//! Billboard anchors and view-space depth ordering
//!
//! Translucent billboards composite correctly only when drawn back to
//! front. Each frame the sorter projects the fixed anchor set through the
//! current view transform and orders the resulting samples by view-space
//! depth, farthest first. Anchors themselves are never reordered; identity
//! travels with the per-frame samples.

use std::cmp::Ordering;

use crate::foundation::math::{self, Mat4, Vec3};

/// Identity of a billboard anchor, stable across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorId(pub u32);

/// Fixed world-space position a billboard is drawn at.
#[derive(Debug, Clone, Copy)]
pub struct BillboardAnchor {
    /// Stable identity
    pub id: AnchorId,
    /// World position, immutable after scene setup
    pub world_position: Vec3,
}

impl BillboardAnchor {
    /// Create an anchor.
    #[must_use]
    pub fn new(id: AnchorId, world_position: Vec3) -> Self {
        Self { id, world_position }
    }
}

/// Per-frame view-space sample derived from an anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSample {
    /// Identity of the source anchor
    pub id: AnchorId,
    /// Anchor position in view space
    pub view_position: Vec3,
}

impl ViewSample {
    /// Distance along the camera forward axis.
    ///
    /// View space is right-handed with the camera looking down -Z, so depth
    /// grows with `-z`.
    #[must_use]
    pub fn depth(&self) -> f32 {
        -self.view_position.z
    }
}

/// Depth-orders billboard anchors back-to-front for alpha-blended drawing.
///
/// Keeps the last ordering it produced; when the view transform is
/// ill-formed (non-finite entries, or projections that come out non-finite)
/// the previous ordering is returned instead of feeding NaN to the
/// comparator.
#[derive(Debug, Default)]
pub struct DepthSorter {
    ordered: Vec<ViewSample>,
}

impl DepthSorter {
    /// Create a sorter with no prior ordering.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Project `anchors` through `view` and return them ordered by
    /// non-increasing view-space depth (farthest from the camera first).
    ///
    /// Returns exactly one sample per anchor, a permutation of the input
    /// identities. Equal depths compare as equal; their relative order is
    /// unspecified. On a degenerate view transform the last-known-good
    /// ordering is returned unchanged.
    pub fn sort(&mut self, anchors: &[BillboardAnchor], view: &Mat4) -> &[ViewSample] {
        if !view.iter().all(|entry| entry.is_finite()) {
            log::warn!("view transform has non-finite entries, keeping previous billboard order");
            return &self.ordered;
        }

        let samples: Vec<ViewSample> = anchors
            .iter()
            .map(|anchor| ViewSample {
                id: anchor.id,
                view_position: math::transform_point(view, anchor.world_position),
            })
            .collect();

        if samples
            .iter()
            .any(|sample| !sample.view_position.iter().all(|c| c.is_finite()))
        {
            log::warn!("billboard projection produced non-finite depth, keeping previous order");
            return &self.ordered;
        }

        self.ordered = samples;
        self.ordered.sort_by(|a, b| {
            b.depth()
                .partial_cmp(&a.depth())
                .unwrap_or(Ordering::Equal)
        });
        &self.ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors_at(depths: &[f32]) -> Vec<BillboardAnchor> {
        // With an identity view transform, world -z is view depth
        depths
            .iter()
            .enumerate()
            .map(|(i, &d)| BillboardAnchor::new(AnchorId(i as u32), Vec3::new(0.0, 1.0, -d)))
            .collect()
    }

    #[test]
    fn test_orders_back_to_front() {
        let anchors = anchors_at(&[5.0, 1.0, 3.0]);
        let mut sorter = DepthSorter::new();
        let ordered = sorter.sort(&anchors, &Mat4::identity());
        let depths: Vec<f32> = ordered.iter().map(ViewSample::depth).collect();
        assert_eq!(depths, vec![5.0, 3.0, 1.0]);
    }

    #[test]
    fn test_returns_permutation_of_identities() {
        let anchors = anchors_at(&[2.0, 9.0, 4.0, 7.0, 1.0]);
        let mut sorter = DepthSorter::new();
        let ordered = sorter.sort(&anchors, &Mat4::identity());
        assert_eq!(ordered.len(), anchors.len());
        let mut ids: Vec<u32> = ordered.iter().map(|s| s.id.0).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_anchor_set_yields_empty_order() {
        let mut sorter = DepthSorter::new();
        assert!(sorter.sort(&[], &Mat4::identity()).is_empty());
    }

    #[test]
    fn test_single_anchor_passes_through() {
        let anchors = anchors_at(&[4.0]);
        let mut sorter = DepthSorter::new();
        let ordered = sorter.sort(&anchors, &Mat4::identity());
        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered[0].id, AnchorId(0));
    }

    #[test]
    fn test_equal_depths_keep_full_count() {
        let anchors = anchors_at(&[3.0, 3.0, 3.0]);
        let mut sorter = DepthSorter::new();
        assert_eq!(sorter.sort(&anchors, &Mat4::identity()).len(), 3);
    }

    #[test]
    fn test_degenerate_view_keeps_previous_order() {
        let anchors = anchors_at(&[5.0, 1.0, 3.0]);
        let mut sorter = DepthSorter::new();
        let before: Vec<ViewSample> = sorter.sort(&anchors, &Mat4::identity()).to_vec();

        let broken = Mat4::identity() * f32::NAN;
        let after = sorter.sort(&anchors, &broken);
        assert_eq!(after, before.as_slice());
    }

    #[test]
    fn test_degenerate_view_before_any_good_frame_is_empty() {
        let anchors = anchors_at(&[5.0]);
        let mut sorter = DepthSorter::new();
        let broken = Mat4::identity() * f32::NAN;
        assert!(sorter.sort(&anchors, &broken).is_empty());
    }
}
