//! The task board core: a flat ordered task sequence, a tag registry, and
//! the drag-and-drop reconciliation that reorders them.
//!
//! [`BoardStore`] owns the canonical state. The UI collaborator calls its
//! mutation methods, reads back the per-lane views, and subscribes to the
//! event channel to know when to re-render. Every committed mutation is
//! written through to the [`storage::KeyValueStore`] collaborator before
//! subscribers are notified.

pub mod commands;
pub mod errors;
pub mod helpers;
pub mod moves;
pub mod storage;
pub mod types;

use crossbeam_channel::{Receiver, Sender};
use errors::BoardError;
use storage::{FileStore, KeyValueStore};
use types::{BoardData, BoardEvent, Lane, LaneView, Task};

/// Single-owner in-memory store with write-through file persistence.
///
/// All methods run to completion synchronously; the store is driven from one
/// UI thread, so exclusive access comes from `&mut self` rather than a lock.
pub struct BoardStore<S: KeyValueStore> {
    data: BoardData,
    /// Tags pre-selected for the next created task. Transient, never persisted.
    selected_tags: Vec<String>,
    /// Id of the task currently being dragged, if any. Transient.
    dragging: Option<String>,
    version: u64,
    subscribers: Vec<Sender<BoardEvent>>,
    storage: S,
}

impl<S: KeyValueStore> BoardStore<S> {
    /// Loads both collections from the given store. Absent keys start empty;
    /// malformed JSON is fatal and propagates.
    pub fn open(storage: S) -> Result<Self, BoardError> {
        let data = storage::load_board(&storage)?;
        Ok(Self {
            data,
            selected_tags: Vec::new(),
            dragging: None,
            version: 0,
            subscribers: Vec::new(),
            storage,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.data.tasks
    }

    pub fn tags(&self) -> &[String] {
        &self.data.tags
    }

    pub fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    pub fn dragging(&self) -> Option<&str> {
        self.dragging.as_deref()
    }

    /// Monotonic counter, bumped once per published change.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Tasks of one lane, in flat-sequence relative order. Recomputed on
    /// every call; task counts are bounded by manual entry.
    pub fn tasks_in(&self, lane: Lane) -> Vec<&Task> {
        helpers::lane_tasks(&self.data.tasks, lane)
    }

    /// All three lanes at once, each preserving flat-sequence relative order.
    pub fn by_lane(&self) -> LaneView<'_> {
        LaneView {
            todo: self.tasks_in(Lane::Todo),
            doing: self.tasks_in(Lane::Doing),
            done: self.tasks_in(Lane::Done),
        }
    }

    /// Registers an observer. One [`BoardEvent`] arrives per published
    /// change; dropped receivers are pruned on the next publish.
    pub fn subscribe(&mut self) -> Receiver<BoardEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Persists the current collections, then notifies subscribers. Called
    /// only after a mutation has fully landed in `self.data`.
    fn commit(&mut self) -> Result<(), BoardError> {
        storage::save_board(&mut self.storage, &self.data)?;
        self.publish();
        Ok(())
    }

    /// Bumps the version and fans the event out. Transient-state changes
    /// (tag selection) publish without persisting.
    fn publish(&mut self) {
        self.version += 1;
        let event = BoardEvent {
            version: self.version,
        };
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }
}

/// Opens the board store over the default file-backed storage and logs the
/// loaded counts.
pub fn init_board_store() -> Result<BoardStore<FileStore>, BoardError> {
    let store = BoardStore::open(FileStore::open_default())?;
    tracing::info!(
        target: "board",
        tasks = store.tasks().len(),
        tags = store.tags().len(),
        "Board store initialized"
    );
    Ok(store)
}
