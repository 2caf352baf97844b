use chrono::Local;

const APP_TITLE: &str = "To-Do List Application";
const DEFAULT_USER: &str = "User";
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Startup settings for the application. Nothing is read from disk; every
/// process starts from these defaults.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) user_name: String,
    pub(crate) window_title: String,
    pub(crate) due_date_format: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            user_name: DEFAULT_USER.to_string(),
            window_title: APP_TITLE.to_string(),
            due_date_format: DUE_DATE_FORMAT,
        }
    }
}

impl Config {
    /// Today's date rendered in the due date format, used as prompt placeholder.
    pub(crate) fn due_date_hint(&self) -> String {
        Local::now().format(self.due_date_format).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn defaults_match_window_and_user() {
        let config = Config::default();
        assert_eq!(config.user_name, "User");
        assert_eq!(config.window_title, "To-Do List Application");
    }

    #[test]
    fn due_date_hint_is_a_calendar_date() {
        let hint = Config::default().due_date_hint();
        assert!(NaiveDate::parse_from_str(&hint, "%Y-%m-%d").is_ok());
    }
}
