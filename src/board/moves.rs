//! Drag-and-drop reconciliation over the flat task sequence.
//!
//! The sequence is globally ordered but only the order among tasks sharing a
//! lane is meaningful. A drop therefore arrives as a position inside one
//! lane's filtered view and has to be mapped back onto the flat sequence.

use super::types::{Lane, MoveRequest, Task};

/// Applies a drop gesture to the task sequence.
///
/// `request.target_index` counts positions inside the target lane's view
/// *after* the dragged task has been lifted out of it: an index of `n` means
/// exactly `n` tasks of that lane will precede the dropped one. For a
/// same-lane drop the UI reports positions against the view that still
/// contains the task, so an index past the task's own rank is pulled back by
/// one before it is applied.
///
/// Returns `None` when there is nothing to commit: the task no longer
/// exists, or the drop would land it back at its current rank (dropping a
/// card onto the slot just before or just after itself, or past the end of
/// its own lane, changes nothing). Tasks not involved in the move keep
/// their relative order, within their lanes and across the flat sequence.
pub fn resolve_move(tasks: &[Task], request: &MoveRequest) -> Option<Vec<Task>> {
    let source_pos = tasks.iter().position(|task| task.id == request.task_id)?;
    let source = &tasks[source_pos];

    let mut target_index = request.target_index;

    if source.lane == request.target_lane {
        let original_rank = tasks[..source_pos]
            .iter()
            .filter(|task| task.lane == source.lane)
            .count();

        // Lifting the card out shifts every later rank in its lane down by one.
        if target_index > original_rank {
            target_index -= 1;
        }

        let remaining = tasks.iter().filter(|task| task.lane == source.lane).count() - 1;
        if target_index.min(remaining) == original_rank {
            return None;
        }
    }

    let mut updated = tasks.to_vec();
    let mut moved = updated.remove(source_pos);
    moved.lane = request.target_lane;

    match insertion_point(&updated, request.target_lane, target_index) {
        Some(flat_pos) => updated.insert(flat_pos, moved),
        None => updated.push(moved),
    }

    Some(updated)
}

/// Flat position where the moved task has to be inserted so that
/// `target_index` tasks of `lane` precede it, or `None` for an append at the
/// end of the sequence (empty lane, or an index at or past the lane's end).
fn insertion_point(tasks: &[Task], lane: Lane, target_index: usize) -> Option<usize> {
    if target_index == 0 {
        return tasks.iter().position(|task| task.lane == lane);
    }

    let lane_len = tasks.iter().filter(|task| task.lane == lane).count();
    if target_index >= lane_len {
        return None;
    }

    // Insert right after the task currently holding rank target_index - 1.
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| task.lane == lane)
        .nth(target_index - 1)
        .map(|(pos, _)| pos + 1)
}
