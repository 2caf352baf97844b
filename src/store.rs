use crate::types::Task;
use log::debug;

/// The single user of the process and the ordered list of their tasks.
///
/// A task's position in the list is its index for [`User::mark_complete`].
/// Tasks are only ever appended, so an index stays valid once handed out.
#[derive(Debug, Default)]
pub(crate) struct User {
    name: String,
    tasks: Vec<Task>,
}

impl User {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        User {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn add_task(&mut self, task: Task) {
        debug!("Adding task {} for {}", self.tasks.len(), self.name);
        self.tasks.push(task);
    }

    /// Marks the task at `index` as completed. An index past the end is
    /// ignored. Returns whether a task was found.
    pub(crate) fn mark_complete(&mut self, index: usize) -> bool {
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.mark_complete();
                true
            }
            None => {
                debug!("Ignoring completion of task {index}, only {} exist", self.tasks.len());
                false
            }
        }
    }

    pub(crate) fn all_tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks not yet completed, in list order, each paired with its index in
    /// [`User::all_tasks`].
    pub(crate) fn incomplete_tasks(&self) -> Vec<(usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_completed())
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.tasks.len()
    }

    pub(crate) fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed()).count()
    }
}
