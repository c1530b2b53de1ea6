//! Mutation operations on [`BoardStore`].
//!
//! Every operation either commits fully (persist, then notify) or leaves the
//! store untouched. Validation failures and stale ids resolve to silent
//! no-ops; only a tag-name conflict and persistence failures surface as
//! errors. Tag cascades are computed into fresh collections before being
//! swapped in, so an observer reading after the event never sees a
//! half-applied rename or delete.

use super::errors::BoardError;
use super::helpers::{find_task, find_task_mut};
use super::moves::resolve_move;
use super::storage::KeyValueStore;
use super::types::{Lane, MoveRequest, Task};
use super::BoardStore;
use uuid::Uuid;

impl<S: KeyValueStore> BoardStore<S> {
    /// Creates a task at the end of the todo lane, carrying the given tags
    /// (deduplicated and filtered to registry members). Clears the tag
    /// selection working set on success. Empty trimmed text is a no-op.
    pub fn add_task(&mut self, text: &str, tags: &[String]) -> Result<Option<Task>, BoardError> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!(target: "board", "Ignoring add_task with empty text");
            return Ok(None);
        }

        let mut task_tags: Vec<String> = Vec::new();
        for tag in tags {
            if self.data.tags.contains(tag) && !task_tags.contains(tag) {
                task_tags.push(tag.clone());
            }
        }

        let task = Task {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            lane: Lane::Todo,
            tags: task_tags,
        };

        self.data.tasks.push(task.clone());
        self.selected_tags.clear();
        self.commit()?;

        tracing::info!(target: "board", id = %task.id, "Task created");
        Ok(Some(task))
    }

    /// Stores the trimmed text in place. Empty text or an unknown id is a
    /// no-op, leaving the prior text standing.
    pub fn rename_task(&mut self, id: &str, text: &str) -> Result<bool, BoardError> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!(target: "board", id, "Ignoring rename_task with empty text");
            return Ok(false);
        }

        match find_task_mut(&mut self.data, id) {
            Some(task) => task.text = text.to_string(),
            None => {
                tracing::debug!(target: "board", id, "rename_task on unknown task");
                return Ok(false);
            }
        }

        self.commit()?;
        Ok(true)
    }

    /// Removes the task. Also clears the drag source if it referenced it,
    /// so a drop landing after the delete resolves to a no-op.
    pub fn delete_task(&mut self, id: &str) -> Result<bool, BoardError> {
        let Some(pos) = self.data.tasks.iter().position(|task| task.id == id) else {
            tracing::debug!(target: "board", id, "delete_task on unknown task");
            return Ok(false);
        };

        self.data.tasks.remove(pos);
        if self.dragging.as_deref() == Some(id) {
            self.dragging = None;
        }

        self.commit()?;
        tracing::info!(target: "board", id, "Task deleted");
        Ok(true)
    }

    /// Adds the tag to the task if absent, removes it if present. A task id
    /// or tag name that does not exist is a no-op.
    pub fn toggle_task_tag(&mut self, id: &str, tag: &str) -> Result<bool, BoardError> {
        if !self.data.tags.iter().any(|t| t == tag) {
            tracing::debug!(target: "board", tag, "toggle_task_tag on unknown tag");
            return Ok(false);
        }

        match find_task_mut(&mut self.data, id) {
            Some(task) => {
                if task.tags.iter().any(|t| t == tag) {
                    task.tags.retain(|t| t != tag);
                } else {
                    task.tags.push(tag.to_string());
                }
            }
            None => {
                tracing::debug!(target: "board", id, "toggle_task_tag on unknown task");
                return Ok(false);
            }
        }

        self.commit()?;
        Ok(true)
    }

    /// Registers a new tag name. Empty trimmed names and exact (case
    /// sensitive) duplicates are no-ops.
    pub fn add_tag(&mut self, name: &str) -> Result<bool, BoardError> {
        let name = name.trim();
        if name.is_empty() || self.data.tags.iter().any(|t| t == name) {
            return Ok(false);
        }

        self.data.tags.push(name.to_string());
        self.commit()?;

        tracing::info!(target: "board", tag = name, "Tag created");
        Ok(true)
    }

    /// Renames a tag across the registry, every task, and the selection
    /// working set, atomically from the observers' perspective.
    ///
    /// Renaming onto an existing different name fails with
    /// [`BoardError::DuplicateTag`] and changes nothing; merging two tags
    /// silently would lose the distinction the user drew between them.
    pub fn rename_tag(&mut self, old: &str, new: &str) -> Result<bool, BoardError> {
        let new = new.trim();
        if new.is_empty() || new == old {
            return Ok(false);
        }
        if !self.data.tags.iter().any(|t| t == old) {
            tracing::debug!(target: "board", tag = old, "rename_tag on unknown tag");
            return Ok(false);
        }
        if self.data.tags.iter().any(|t| t == new) {
            return Err(BoardError::DuplicateTag(new.to_string()));
        }

        // Full cascade computed before anything is published.
        let mut data = self.data.clone();
        for tag in data.tags.iter_mut() {
            if tag == old {
                *tag = new.to_string();
            }
        }
        for task in data.tasks.iter_mut() {
            for tag in task.tags.iter_mut() {
                if tag == old {
                    *tag = new.to_string();
                }
            }
        }
        let mut selected = self.selected_tags.clone();
        for tag in selected.iter_mut() {
            if tag == old {
                *tag = new.to_string();
            }
        }

        self.data = data;
        self.selected_tags = selected;
        self.commit()?;

        tracing::info!(target: "board", from = old, to = new, "Tag renamed");
        Ok(true)
    }

    /// Deletes a tag, cascading removal through every task and the selection
    /// working set. Unknown names are a no-op.
    pub fn delete_tag(&mut self, name: &str) -> Result<bool, BoardError> {
        if !self.data.tags.iter().any(|t| t == name) {
            tracing::debug!(target: "board", tag = name, "delete_tag on unknown tag");
            return Ok(false);
        }

        let mut data = self.data.clone();
        data.tags.retain(|t| t != name);
        for task in data.tasks.iter_mut() {
            task.tags.retain(|t| t != name);
        }
        let mut selected = self.selected_tags.clone();
        selected.retain(|t| t != name);

        self.data = data;
        self.selected_tags = selected;
        self.commit()?;

        tracing::info!(target: "board", tag = name, "Tag deleted");
        Ok(true)
    }

    /// Applies a drop gesture. Returns `Ok(false)` without persisting or
    /// notifying when the id is stale or the drop is a positional no-op.
    pub fn move_task(
        &mut self,
        id: &str,
        target_lane: Lane,
        target_index: usize,
    ) -> Result<bool, BoardError> {
        let request = MoveRequest {
            task_id: id.to_string(),
            target_lane,
            target_index,
        };

        let Some(updated) = resolve_move(&self.data.tasks, &request) else {
            tracing::debug!(
                target: "board::moves",
                id,
                lane = target_lane.as_str(),
                index = target_index,
                "Move resolved to a no-op"
            );
            return Ok(false);
        };

        self.data.tasks = updated;
        self.commit()?;

        tracing::info!(
            target: "board::moves",
            id,
            lane = target_lane.as_str(),
            index = target_index,
            "Task moved"
        );
        Ok(true)
    }

    /// Toggles a tag in the "selected for the next task" working set.
    /// Transient state: publishes an event so the UI re-renders the chips,
    /// but nothing is persisted.
    pub fn toggle_tag_selection(&mut self, name: &str) -> bool {
        if !self.data.tags.iter().any(|t| t == name) {
            return false;
        }

        if self.selected_tags.iter().any(|t| t == name) {
            self.selected_tags.retain(|t| t != name);
        } else {
            self.selected_tags.push(name.to_string());
        }

        self.publish();
        true
    }

    /// Records the drag source. Hover events during the drag never reach the
    /// store; only the drop commits.
    pub fn drag_start(&mut self, id: &str) {
        if find_task(&self.data, id).is_some() {
            self.dragging = Some(id.to_string());
        }
    }

    /// Cancellation path: the drag ended without a drop. Only the transient
    /// drag state is cleared; the sequence is untouched.
    pub fn drag_end(&mut self) {
        self.dragging = None;
    }

    /// Completes an active drag by moving the recorded source to the given
    /// lane position. No-op when no drag is active or the source was deleted
    /// mid-drag.
    pub fn drop_task(&mut self, lane: Lane, index: usize) -> Result<bool, BoardError> {
        let Some(id) = self.dragging.take() else {
            return Ok(false);
        };
        self.move_task(&id, lane, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::storage::MemoryStore;

    fn empty_store() -> BoardStore<MemoryStore> {
        BoardStore::open(MemoryStore::new()).unwrap()
    }

    fn store_with_tags(tags: &[&str]) -> BoardStore<MemoryStore> {
        let mut store = empty_store();
        for tag in tags {
            store.add_tag(tag).unwrap();
        }
        store
    }

    #[test]
    fn test_add_task_trims_and_defaults_to_todo() {
        let mut store = empty_store();

        let task = store.add_task("  write docs  ", &[]).unwrap().unwrap();

        assert_eq!(task.text, "write docs");
        assert_eq!(task.lane, Lane::Todo);
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn test_add_task_empty_text_is_noop() {
        let mut store = empty_store();
        let before = store.version();

        assert!(store.add_task("   ", &[]).unwrap().is_none());

        assert!(store.tasks().is_empty());
        assert_eq!(store.version(), before);
    }

    #[test]
    fn test_add_task_filters_tags_to_registry_and_dedupes() {
        let mut store = store_with_tags(&["urgent"]);
        let tags = vec![
            "urgent".to_string(),
            "urgent".to_string(),
            "ghost".to_string(),
        ];

        let task = store.add_task("fix", &tags).unwrap().unwrap();

        assert_eq!(task.tags, vec!["urgent".to_string()]);
    }

    #[test]
    fn test_add_task_clears_tag_selection() {
        let mut store = store_with_tags(&["urgent"]);
        store.toggle_tag_selection("urgent");
        assert_eq!(store.selected_tags(), ["urgent".to_string()]);

        store.add_task("fix", &["urgent".to_string()]).unwrap();

        assert!(store.selected_tags().is_empty());
    }

    #[test]
    fn test_rename_task_empty_text_keeps_prior_text() {
        let mut store = empty_store();
        let task = store.add_task("original", &[]).unwrap().unwrap();

        assert!(!store.rename_task(&task.id, "  ").unwrap());

        assert_eq!(store.tasks()[0].text, "original");
    }

    #[test]
    fn test_rename_task_unknown_id_is_noop() {
        let mut store = empty_store();
        let before = store.version();

        assert!(!store.rename_task("ghost", "new text").unwrap());
        assert_eq!(store.version(), before);
    }

    #[test]
    fn test_delete_task_clears_matching_drag_source() {
        let mut store = empty_store();
        let task = store.add_task("doomed", &[]).unwrap().unwrap();
        store.drag_start(&task.id);

        store.delete_task(&task.id).unwrap();

        assert!(store.dragging().is_none());
        assert!(!store.drop_task(Lane::Done, 0).unwrap());
    }

    #[test]
    fn test_toggle_task_tag_adds_then_removes() {
        let mut store = store_with_tags(&["urgent"]);
        let task = store.add_task("fix", &[]).unwrap().unwrap();

        assert!(store.toggle_task_tag(&task.id, "urgent").unwrap());
        assert_eq!(store.tasks()[0].tags, vec!["urgent".to_string()]);

        assert!(store.toggle_task_tag(&task.id, "urgent").unwrap());
        assert!(store.tasks()[0].tags.is_empty());
    }

    #[test]
    fn test_toggle_task_tag_unknown_tag_is_noop() {
        let mut store = empty_store();
        let task = store.add_task("fix", &[]).unwrap().unwrap();

        assert!(!store.toggle_task_tag(&task.id, "ghost").unwrap());
        assert!(store.tasks()[0].tags.is_empty());
    }

    #[test]
    fn test_add_tag_rejects_duplicates_and_empty() {
        let mut store = empty_store();

        assert!(store.add_tag("urgent").unwrap());
        assert!(!store.add_tag("urgent").unwrap());
        assert!(!store.add_tag("  ").unwrap());
        // Case-sensitive registry: a different casing is a different tag.
        assert!(store.add_tag("Urgent").unwrap());

        assert_eq!(store.tags(), ["urgent".to_string(), "Urgent".to_string()]);
    }

    #[test]
    fn test_rename_tag_cascades_everywhere() {
        let mut store = store_with_tags(&["urgent", "done-soon"]);
        let task = store.add_task("fix", &["urgent".to_string()]).unwrap().unwrap();
        store.toggle_tag_selection("urgent");

        assert!(store.rename_tag("urgent", "blocked").unwrap());

        assert_eq!(
            store.tags(),
            ["blocked".to_string(), "done-soon".to_string()]
        );
        let task = store.tasks().iter().find(|t| t.id == task.id).unwrap();
        assert_eq!(task.tags, vec!["blocked".to_string()]);
        assert_eq!(store.selected_tags(), ["blocked".to_string()]);
    }

    #[test]
    fn test_rename_tag_to_existing_name_fails_and_changes_nothing() {
        let mut store = store_with_tags(&["urgent", "done-soon"]);
        store.add_task("fix", &["done-soon".to_string()]).unwrap();
        let before = store.version();

        let err = store.rename_tag("done-soon", "urgent").unwrap_err();

        assert!(matches!(err, BoardError::DuplicateTag(name) if name == "urgent"));
        assert_eq!(store.tags(), ["urgent".to_string(), "done-soon".to_string()]);
        assert_eq!(store.tasks()[0].tags, vec!["done-soon".to_string()]);
        assert_eq!(store.version(), before);
    }

    #[test]
    fn test_rename_tag_noop_cases() {
        let mut store = store_with_tags(&["urgent"]);

        assert!(!store.rename_tag("urgent", "urgent").unwrap());
        assert!(!store.rename_tag("urgent", "  ").unwrap());
        assert!(!store.rename_tag("ghost", "anything").unwrap());
    }

    #[test]
    fn test_delete_tag_cascades_everywhere() {
        let mut store = store_with_tags(&["urgent", "later"]);
        store
            .add_task("fix", &["urgent".to_string(), "later".to_string()])
            .unwrap();
        store.toggle_tag_selection("urgent");

        assert!(store.delete_tag("urgent").unwrap());

        assert_eq!(store.tags(), ["later".to_string()]);
        assert_eq!(store.tasks()[0].tags, vec!["later".to_string()]);
        assert!(store.selected_tags().is_empty());
    }

    #[test]
    fn test_move_task_unknown_id_is_noop() {
        let mut store = empty_store();
        store.add_task("a", &[]).unwrap();
        let before = store.version();

        assert!(!store.move_task("ghost", Lane::Done, 0).unwrap());
        assert_eq!(store.version(), before);
    }

    #[test]
    fn test_toggle_tag_selection_requires_registered_tag() {
        let mut store = store_with_tags(&["urgent"]);

        assert!(!store.toggle_tag_selection("ghost"));
        assert!(store.toggle_tag_selection("urgent"));
        assert_eq!(store.selected_tags(), ["urgent".to_string()]);
        assert!(store.toggle_tag_selection("urgent"));
        assert!(store.selected_tags().is_empty());
    }

    #[test]
    fn test_drag_start_ignores_unknown_task() {
        let mut store = empty_store();

        store.drag_start("ghost");

        assert!(store.dragging().is_none());
    }

    #[test]
    fn test_drag_end_leaves_sequence_untouched() {
        let mut store = empty_store();
        let task = store.add_task("a", &[]).unwrap().unwrap();
        let before = store.version();

        store.drag_start(&task.id);
        store.drag_end();

        assert!(store.dragging().is_none());
        assert_eq!(store.version(), before);
        assert_eq!(store.tasks().len(), 1);
    }
}
