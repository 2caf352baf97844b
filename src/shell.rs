use crate::{
    store::User,
    types::{Category, Task},
};
use log::{debug, info};

pub(crate) const TYPE_PROMPT: &str = "Select task type:";
pub(crate) const TITLE_PROMPT: &str = "Title:";
pub(crate) const DESCRIPTION_PROMPT: &str = "Description:";
pub(crate) const DUE_DATE_PROMPT: &str = "Due date (yyyy-mm-dd):";
pub(crate) const NO_SELECTION_NOTICE: &str = "Select a task first.";

/// Blocking modal dialogs. Each call returns once the user answers, with
/// `None` when the dialog was cancelled.
pub(crate) trait Prompter {
    /// Offers `options` with `default` preselected and returns the chosen index.
    fn choose(&mut self, message: &str, options: &[&str], default: usize) -> Option<usize>;
    fn input(&mut self, message: &str) -> Option<String>;
    fn notify(&mut self, message: &str);
}

/// Which read projection of the store is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Projection {
    #[default]
    All,
    Incomplete,
}

struct Row {
    task_index: usize,
    text: String,
}

/// The visible list of task strings and the highlighted row, if any.
#[derive(Default)]
pub(crate) struct ListView {
    rows: Vec<Row>,
    selected: Option<usize>,
}

impl ListView {
    fn clear(&mut self) {
        self.rows.clear();
        self.selected = None;
    }

    fn push(&mut self, task_index: usize, task: &Task) {
        self.rows.push(Row {
            task_index,
            text: task.to_string(),
        });
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn lines(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.text.as_str())
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Highlights `row`. Rows that don't exist clear the selection.
    pub(crate) fn select(&mut self, row: Option<usize>) {
        self.selected = row.filter(|r| *r < self.rows.len());
    }

    pub(crate) fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(r) => (r + 1).min(self.rows.len() - 1),
            None => 0,
        });
    }

    pub(crate) fn select_previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(r) => r.saturating_sub(1),
            None => 0,
        });
    }

    /// Store index of the task shown in the selected row.
    fn selected_task(&self) -> Option<usize> {
        self.selected
            .and_then(|r| self.rows.get(r))
            .map(|r| r.task_index)
    }
}

/// Event handlers for the four window commands. The shell owns the user's
/// task list and the list view that mirrors it.
pub(crate) struct Shell {
    user: User,
    view: ListView,
    projection: Projection,
}

impl Shell {
    pub(crate) fn new(user: User) -> Self {
        let mut shell = Shell {
            user,
            view: ListView::default(),
            projection: Projection::All,
        };
        shell.show_all();
        shell
    }

    pub(crate) fn user(&self) -> &User {
        &self.user
    }

    pub(crate) fn view(&self) -> &ListView {
        &self.view
    }

    pub(crate) fn view_mut(&mut self) -> &mut ListView {
        &mut self.view
    }

    /// The task behind the highlighted row.
    pub(crate) fn selected_task(&self) -> Option<&Task> {
        self.view
            .selected_task()
            .and_then(|i| self.user.all_tasks().get(i))
    }

    pub(crate) fn projection(&self) -> Projection {
        self.projection
    }

    pub(crate) fn add_task(&mut self, prompter: &mut dyn Prompter) {
        let labels = Category::ALL.map(|c| c.label());
        let Some(category) = prompter
            .choose(TYPE_PROMPT, &labels, 0)
            .and_then(|i| Category::ALL.get(i).copied())
        else {
            debug!("Add task cancelled at type selection");
            return;
        };

        let title = prompter.input(TITLE_PROMPT);
        let description = prompter.input(DESCRIPTION_PROMPT);
        let due_date = prompter.input(DUE_DATE_PROMPT);

        let (Some(title), Some(due_date)) = (title, due_date) else {
            debug!("Add task cancelled, title or due date missing");
            return;
        };

        let task = Task::new(category, title, description.unwrap_or_default(), due_date);
        info!("Added {task}");
        self.user.add_task(task);
        self.show_all();
    }

    pub(crate) fn mark_selected_complete(&mut self, prompter: &mut dyn Prompter) {
        let Some(index) = self.view.selected_task() else {
            prompter.notify(NO_SELECTION_NOTICE);
            return;
        };
        if self.user.mark_complete(index) {
            info!("Completed task {index}");
        }
        self.show_all();
    }

    pub(crate) fn show_incomplete(&mut self) {
        self.projection = Projection::Incomplete;
        self.view.clear();
        for (i, task) in self.user.incomplete_tasks() {
            self.view.push(i, task);
        }
    }

    pub(crate) fn show_all(&mut self) {
        self.projection = Projection::All;
        self.view.clear();
        for (i, task) in self.user.all_tasks().iter().enumerate() {
            self.view.push(i, task);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;

    pub(crate) enum Answer {
        Choice(Option<usize>),
        Text(Option<&'static str>),
    }

    /// Replays canned answers and records every dialog it was shown.
    #[derive(Default)]
    pub(crate) struct Scripted {
        answers: VecDeque<Answer>,
        pub(crate) asked: Vec<String>,
        pub(crate) notices: Vec<String>,
    }

    impl Scripted {
        pub(crate) fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
            Scripted {
                answers: answers.into_iter().collect(),
                ..Default::default()
            }
        }
    }

    impl Prompter for Scripted {
        fn choose(&mut self, message: &str, options: &[&str], default: usize) -> Option<usize> {
            assert_eq!(options, ["Work", "Personal"]);
            assert_eq!(default, 0);
            self.asked.push(message.to_string());
            match self.answers.pop_front() {
                Some(Answer::Choice(c)) => c,
                _ => panic!("unexpected choice prompt {message}"),
            }
        }

        fn input(&mut self, message: &str) -> Option<String> {
            self.asked.push(message.to_string());
            match self.answers.pop_front() {
                Some(Answer::Text(t)) => t.map(str::to_string),
                _ => panic!("unexpected input prompt {message}"),
            }
        }

        fn notify(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }
    }

    fn add(shell: &mut Shell, category: usize, title: &'static str, due: &'static str) {
        let mut p = Scripted::new([
            Answer::Choice(Some(category)),
            Answer::Text(Some(title)),
            Answer::Text(Some("")),
            Answer::Text(Some(due)),
        ]);
        shell.add_task(&mut p);
    }

    fn lines(shell: &Shell) -> Vec<&str> {
        shell.view().lines().collect()
    }

    fn sample() -> Shell {
        let mut shell = Shell::new(User::new("User"));
        add(&mut shell, 0, "Buy milk", "2024-01-01");
        add(&mut shell, 1, "Call mom", "2024-01-02");
        shell
    }

    #[test]
    fn add_prompts_in_order_and_renders_all() {
        let mut shell = Shell::new(User::new("User"));
        let mut p = Scripted::new([
            Answer::Choice(Some(0)),
            Answer::Text(Some("Buy milk")),
            Answer::Text(Some("2%")),
            Answer::Text(Some("2024-01-01")),
        ]);
        shell.add_task(&mut p);
        assert_eq!(
            p.asked,
            [TYPE_PROMPT, TITLE_PROMPT, DESCRIPTION_PROMPT, DUE_DATE_PROMPT]
        );
        assert_eq!(shell.user().all_tasks()[0].description, "2%");
        assert_eq!(lines(&shell), ["[Work] Buy milk (Due: 2024-01-01) - Not Completed"]);
    }

    #[test]
    fn two_tasks_render_in_order() {
        let shell = sample();
        assert_eq!(
            lines(&shell),
            [
                "[Work] Buy milk (Due: 2024-01-01) - Not Completed",
                "[Personal] Call mom (Due: 2024-01-02) - Not Completed",
            ]
        );
    }

    #[test]
    fn cancelling_type_aborts_before_other_prompts() {
        let mut shell = sample();
        let mut p = Scripted::new([Answer::Choice(None)]);
        shell.add_task(&mut p);
        assert_eq!(p.asked, [TYPE_PROMPT]);
        assert_eq!(shell.user().len(), 2);
    }

    #[test]
    fn cancelling_title_or_due_date_aborts_after_all_prompts() {
        let mut shell = sample();
        let mut p = Scripted::new([
            Answer::Choice(Some(1)),
            Answer::Text(None),
            Answer::Text(Some("desc")),
            Answer::Text(Some("2024-02-02")),
        ]);
        shell.add_task(&mut p);
        assert_eq!(p.asked.len(), 4);
        assert_eq!(shell.user().len(), 2);

        let mut p = Scripted::new([
            Answer::Choice(Some(1)),
            Answer::Text(Some("title")),
            Answer::Text(Some("desc")),
            Answer::Text(None),
        ]);
        shell.add_task(&mut p);
        assert_eq!(shell.user().len(), 2);
    }

    #[test]
    fn cancelled_description_is_accepted() {
        let mut shell = Shell::new(User::new("User"));
        let mut p = Scripted::new([
            Answer::Choice(Some(1)),
            Answer::Text(Some("Call mom")),
            Answer::Text(None),
            Answer::Text(Some("soon")),
        ]);
        shell.add_task(&mut p);
        assert_eq!(shell.user().len(), 1);
        assert_eq!(shell.user().all_tasks()[0].description, "");
    }

    #[test]
    fn mark_without_selection_notifies() {
        let mut shell = sample();
        let mut p = Scripted::default();
        shell.mark_selected_complete(&mut p);
        assert_eq!(p.notices, [NO_SELECTION_NOTICE]);
        assert_eq!(shell.user().completed_count(), 0);
    }

    #[test]
    fn mark_selected_completes_and_shows_all() {
        let mut shell = sample();
        shell.view_mut().select(Some(0));
        shell.mark_selected_complete(&mut Scripted::default());
        assert_eq!(
            lines(&shell),
            [
                "[Work] Buy milk (Due: 2024-01-01) - Completed",
                "[Personal] Call mom (Due: 2024-01-02) - Not Completed",
            ]
        );
        assert_eq!(shell.view().selected(), None);

        shell.show_incomplete();
        assert_eq!(shell.projection(), Projection::Incomplete);
        assert_eq!(lines(&shell), ["[Personal] Call mom (Due: 2024-01-02) - Not Completed"]);
    }

    #[test]
    fn selection_in_incomplete_view_completes_the_selected_task() {
        let mut shell = sample();
        add(&mut shell, 0, "File taxes", "2024-04-15");
        shell.user.mark_complete(0);
        shell.show_incomplete();
        // Row 0 here is "Call mom", store index 1.
        shell.view_mut().select(Some(0));
        assert_eq!(shell.selected_task().map(|t| t.title.as_str()), Some("Call mom"));
        shell.mark_selected_complete(&mut Scripted::default());
        let done: Vec<bool> = shell.user().all_tasks().iter().map(|t| t.is_completed()).collect();
        assert_eq!(done, [true, true, false]);
        assert_eq!(shell.projection(), Projection::All);
    }

    #[test]
    fn show_all_and_incomplete_swap_projections() {
        let mut shell = sample();
        shell.show_incomplete();
        assert_eq!(shell.view().len(), 2);
        shell.show_all();
        assert_eq!(shell.projection(), Projection::All);
        assert_eq!(shell.view().len(), 2);
    }

    #[test]
    fn selection_moves_within_bounds() {
        let mut shell = sample();
        let view = shell.view_mut();
        view.select_previous();
        assert_eq!(view.selected(), Some(0));
        view.select_next();
        view.select_next();
        assert_eq!(view.selected(), Some(1));
        view.select(Some(7));
        assert_eq!(view.selected(), None);

        let mut empty = Shell::new(User::new("User"));
        empty.view_mut().select_next();
        assert_eq!(empty.view().len(), 0);
        assert_eq!(empty.view().selected(), None);
    }
}
