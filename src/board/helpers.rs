use super::types::{BoardData, Lane, Task};

pub fn find_task<'a>(data: &'a BoardData, id: &str) -> Option<&'a Task> {
    data.tasks.iter().find(|task| task.id == id)
}

pub fn find_task_mut<'a>(data: &'a mut BoardData, id: &str) -> Option<&'a mut Task> {
    data.tasks.iter_mut().find(|task| task.id == id)
}

pub fn lane_tasks(tasks: &[Task], lane: Lane) -> Vec<&Task> {
    tasks.iter().filter(|task| task.lane == lane).collect()
}
