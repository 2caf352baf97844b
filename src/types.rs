use std::fmt::Display;

/// The label a task is filed under. Only affects the display prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Category {
    #[default]
    Work,
    Personal,
}

impl Category {
    /// Every category, in the order the type prompt offers them.
    pub(crate) const ALL: [Category; 2] = [Category::Work, Category::Personal];

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Task {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) due_date: String,
    pub(crate) category: Category,
    completed: bool,
}

impl Task {
    pub(crate) fn new(
        category: Category,
        title: String,
        description: String,
        due_date: String,
    ) -> Self {
        Task {
            title,
            description,
            due_date,
            category,
            completed: false,
        }
    }

    pub(crate) fn is_completed(&self) -> bool {
        self.completed
    }

    /// Completion is one-way; calling this again changes nothing.
    pub(crate) fn mark_complete(&mut self) {
        self.completed = true;
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.completed {
            "Completed"
        } else {
            "Not Completed"
        };
        write!(
            f,
            "[{}] {} (Due: {}) - {state}",
            self.category, self.title, self.due_date
        )
    }
}
