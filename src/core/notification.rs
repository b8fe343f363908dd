// Notification rule for the grid's "needs attention" marker.
//
// A pre-construction note only matters while the unit is still open; once
// construction is marked complete the note is treated as resolved.

/// True iff the trimmed note is non-empty and the unit is not completed.
pub fn should_notify(pre_construction_note: &str, is_completed: bool) -> bool {
    !is_completed && !pre_construction_note.trim().is_empty()
}
