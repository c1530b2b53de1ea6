use serde::{Deserialize, Serialize};

/// The three fixed columns a task can live in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    #[default]
    Todo,
    Doing,
    Done,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Todo, Lane::Doing, Lane::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Lane::Todo => "todo",
            Lane::Doing => "doing",
            Lane::Done => "done",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    #[serde(rename = "status")]
    pub lane: Lane,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The persisted board collections: the flat ordered task sequence and the
/// tag registry. A task's rank inside its lane is its position here after
/// filtering the sequence to that lane.
#[derive(Clone, Debug, Default)]
pub struct BoardData {
    pub tasks: Vec<Task>,
    pub tags: Vec<String>,
}

/// A drop gesture reported by the UI.
///
/// `target_index` is the insertion position inside the target lane as the
/// user sees it once the dragged card has been lifted out: an index of `n`
/// asks for exactly `n` tasks of that lane to end up before the dropped one.
#[derive(Clone, Debug)]
pub struct MoveRequest {
    pub task_id: String,
    pub target_lane: Lane,
    pub target_index: usize,
}

/// Payload delivered to subscribers after every published change.
/// The version is monotonic and can be used for cache invalidation.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardEvent {
    pub version: u64,
}

/// Tasks partitioned by lane, in flat-sequence relative order.
#[derive(Debug)]
pub struct LaneView<'a> {
    pub todo: Vec<&'a Task>,
    pub doing: Vec<&'a Task>,
    pub done: Vec<&'a Task>,
}

impl<'a> LaneView<'a> {
    pub fn lane(&self, lane: Lane) -> &[&'a Task] {
        match lane {
            Lane::Todo => &self.todo,
            Lane::Doing => &self.doing,
            Lane::Done => &self.done,
        }
    }
}
