//! Pure geometry for the drag-and-drop canvas.
//!
//! Two drag protocols share the canvas as a drop target and both reduce to
//! midpoint comparisons against the hovered blocks' bounding boxes:
//!
//! - reordering an existing block fires a live `move_block` the moment the
//!   pointer crosses the hovered block's vertical midpoint in the direction
//!   of travel (hysteresis that prevents reorder flicker between blocks of
//!   near-equal height);
//! - inserting a palette block computes an insertion index by scanning block
//!   midpoints top to bottom.
//!
//! The functions here are free of DOM types so the update logic stays
//! testable on the host; the view layer feeds them `getBoundingClientRect`
//! numbers.

use serde::{Deserialize, Serialize};

use common::model::block::BlockKind;

/// What is being dragged. Mirrors the in-process drag item shapes: an
/// existing block carries `{id, index}`, a palette item only a type. The
/// canvas discriminates the two purely by the presence of an id.
#[derive(Debug, Clone, PartialEq)]
pub enum DragSource {
    Existing { id: String, index: usize },
    New(BlockKind),
}

/// The wire form written into the browser `DataTransfer` for completeness;
/// hover handling reads the mirrored component state instead, since
/// `getData` is unreadable during dragover.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl DragSource {
    pub fn payload(&self) -> DragPayload {
        match self {
            DragSource::Existing { id, index } => DragPayload {
                id: Some(id.clone()),
                index: Some(*index),
                kind: None,
            },
            DragSource::New(kind) => DragPayload {
                id: None,
                index: None,
                kind: Some(kind.as_str().to_string()),
            },
        }
    }
}

/// Vertical midpoint of a hovered block's bounding box.
pub fn midpoint(rect_top: f64, rect_height: f64) -> f64 {
    rect_top + rect_height / 2.0
}

/// Reorder hysteresis: dragging downward only triggers once the pointer
/// crosses the hovered block's midpoint going down, dragging upward likewise
/// going up. Hovering the dragged block itself never reorders.
pub fn should_reorder(drag_index: usize, hover_index: usize, pointer_y: f64, hover_mid: f64) -> bool {
    if drag_index < hover_index {
        pointer_y > hover_mid
    } else if drag_index > hover_index {
        pointer_y < hover_mid
    } else {
        false
    }
}

/// Insertion index for a palette drag: the index of the first block whose
/// vertical midpoint lies below the pointer, or the end of the list if none
/// do. `midpoints` is in block order, top to bottom.
pub fn insertion_index(pointer_y: f64, midpoints: &[f64]) -> usize {
    midpoints
        .iter()
        .position(|mid| pointer_y < *mid)
        .unwrap_or(midpoints.len())
}

/// Insertion index derived from a single hovered block, used when dragover
/// events arrive per block rather than for the whole canvas: above the
/// midpoint inserts before the block, below inserts after it.
pub fn insertion_index_at_block(hover_index: usize, pointer_y: f64, hover_mid: f64) -> usize {
    if pointer_y < hover_mid {
        hover_index
    } else {
        hover_index + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dragging_down_waits_for_the_midpoint() {
        // Block 1 spans y=100..200, midpoint 150.
        let mid = midpoint(100.0, 100.0);
        assert!(!should_reorder(0, 1, 140.0, mid));
        assert!(should_reorder(0, 1, 151.0, mid));
    }

    #[test]
    fn dragging_up_waits_for_the_midpoint() {
        let mid = midpoint(0.0, 100.0);
        assert!(!should_reorder(2, 1, 60.0, mid));
        assert!(should_reorder(2, 1, 49.0, mid));
    }

    #[test]
    fn hovering_the_dragged_block_never_reorders() {
        assert!(!should_reorder(1, 1, 0.0, 50.0));
        assert!(!should_reorder(1, 1, 100.0, 50.0));
    }

    #[test]
    fn insertion_index_picks_first_midpoint_below_pointer() {
        // Two equal-height blocks A (0..100) and B (100..200).
        let mids = [50.0, 150.0];
        // Pointer above B's midpoint but below A's: index 1 -> [A, new, B].
        assert_eq!(insertion_index(120.0, &mids), 1);
        // Above A's midpoint: inserts at the top.
        assert_eq!(insertion_index(10.0, &mids), 0);
        // Below every midpoint: appends.
        assert_eq!(insertion_index(190.0, &mids), 2);
    }

    #[test]
    fn insertion_index_on_empty_canvas_is_zero() {
        assert_eq!(insertion_index(42.0, &[]), 0);
    }

    #[test]
    fn hovering_canvas_whitespace_scans_midpoints_like_a_block_hover() {
        // Blocks at 100..200 and 200..300, canvas padding above and below.
        let mids = [150.0, 250.0];
        // In the padding above the first block: index 0, not an append.
        assert_eq!(insertion_index(40.0, &mids), 0);
        // In the area below the last block: append.
        assert_eq!(insertion_index(290.0, &mids), 2);
    }

    #[test]
    fn per_block_insertion_splits_on_the_midpoint() {
        assert_eq!(insertion_index_at_block(1, 120.0, 150.0), 1);
        assert_eq!(insertion_index_at_block(1, 160.0, 150.0), 2);
    }

    #[test]
    fn payload_shapes_discriminate_by_id_presence() {
        let existing = DragSource::Existing {
            id: "text-1".to_string(),
            index: 3,
        };
        let json = serde_json::to_value(existing.payload()).unwrap();
        assert_eq!(json["id"], "text-1");
        assert_eq!(json["index"], 3);
        assert!(json.get("type").is_none());

        let fresh = DragSource::New(BlockKind::Button);
        let json = serde_json::to_value(fresh.payload()).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["type"], "button");
    }
}
