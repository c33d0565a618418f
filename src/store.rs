use crate::errors::AppError;
use crate::models::{AppData, TaskLists};

/// The task catalog a day starts from when it has no config of its own.
pub fn default_tasks() -> TaskLists {
    let mut tasks = TaskLists::new();
    tasks.insert(
        "Chinese".to_string(),
        vec!["Recitation".to_string(), "Handwriting".to_string(), "Reading".to_string()],
    );
    tasks.insert(
        "Math".to_string(),
        vec!["Mental math".to_string(), "Olympiad worksheet".to_string()],
    );
    tasks.insert(
        "English".to_string(),
        vec!["Homework app".to_string(), "Read aloud".to_string()],
    );
    tasks.insert(
        "Sports".to_string(),
        vec!["Running".to_string(), "Jump rope".to_string()],
    );
    tasks
}

impl AppData {
    /// The task lists in effect for `day`: its explicit config if present,
    /// otherwise the default catalog.
    pub fn task_config(&self, day: &str) -> TaskLists {
        self.daily_tasks
            .get(day)
            .cloned()
            .unwrap_or_else(default_tasks)
    }

    /// First config edit on a day materializes a copy of the default
    /// catalog, so edits never leak into other days.
    fn day_tasks_mut(&mut self, day: &str) -> &mut TaskLists {
        self.daily_tasks
            .entry(day.to_string())
            .or_insert_with(default_tasks)
    }

    pub fn set_task_list(&mut self, day: &str, category: &str, tasks: Vec<String>) {
        self.day_tasks_mut(day).insert(category.to_string(), tasks);
    }

    /// Returns the task count for a category on a day without materializing
    /// anything, so rejected commands leave `daily_tasks` untouched.
    fn task_count(&self, day: &str, category: &str) -> Option<usize> {
        match self.daily_tasks.get(day) {
            Some(tasks) => tasks.get(category).map(Vec::len),
            None => default_tasks().get(category).map(Vec::len),
        }
    }

    pub fn add_category(&mut self, day: &str, name: &str) -> Result<(), AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::bad_request("category name must not be empty"));
        }
        if self.task_count(day, name).is_some() {
            return Err(AppError::conflict(format!(
                "category '{name}' already exists on {day}"
            )));
        }
        self.day_tasks_mut(day).insert(name.to_string(), Vec::new());
        Ok(())
    }

    /// Removes the category from this day's config and purges this day's
    /// record for it. Other days keep both their config and their history.
    pub fn delete_category(&mut self, day: &str, name: &str) -> Result<(), AppError> {
        if self.task_count(day, name).is_none() {
            return Err(AppError::not_found(format!("no category '{name}' on {day}")));
        }
        self.day_tasks_mut(day).remove(name);
        if let Some(record) = self.records.get_mut(day) {
            record.remove(name);
        }
        Ok(())
    }

    pub fn add_task(&mut self, day: &str, category: &str, name: &str) -> Result<(), AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::bad_request("task name must not be empty"));
        }
        if self.task_count(day, category).is_none() {
            return Err(AppError::not_found(format!("no category '{category}' on {day}")));
        }
        if let Some(list) = self.day_tasks_mut(day).get_mut(category) {
            list.push(name.to_string());
        }
        Ok(())
    }

    /// Removes the task at `index`. Record entries are positional and are
    /// deliberately left untouched: later positions now refer to the next
    /// task over, and any trailing entry becomes stale (ignored by reads).
    pub fn delete_task(&mut self, day: &str, category: &str, index: usize) -> Result<(), AppError> {
        let Some(count) = self.task_count(day, category) else {
            return Err(AppError::not_found(format!("no category '{category}' on {day}")));
        };
        if index >= count {
            return Err(AppError::bad_request(format!(
                "task index {index} out of range for '{category}'"
            )));
        }
        if let Some(list) = self.day_tasks_mut(day).get_mut(category) {
            list.remove(index);
        }
        Ok(())
    }

    /// Flips one checkbox. The record is padded with `false` up to the
    /// current task count before flipping; stale entries past the task count
    /// are never truncated.
    pub fn toggle(&mut self, day: &str, category: &str, index: usize) -> Result<(), AppError> {
        let config = self.task_config(day);
        let Some(list) = config.get(category) else {
            return Err(AppError::not_found(format!("no category '{category}' on {day}")));
        };
        if index >= list.len() {
            return Err(AppError::bad_request(format!(
                "task index {index} out of range for '{category}'"
            )));
        }

        let record = self
            .records
            .entry(day.to_string())
            .or_default()
            .entry(category.to_string())
            .or_default();
        if record.len() < list.len() {
            record.resize(list.len(), false);
        }
        record[index] = !record[index];
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = AppData::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: &str = "2024-01-01";

    #[test]
    fn default_catalog_has_nine_tasks() {
        let total: usize = default_tasks().values().map(Vec::len).sum();
        assert_eq!(total, 9);
    }

    #[test]
    fn toggle_twice_is_involution() {
        let mut data = AppData::default();
        data.toggle(DAY, "Math", 0).unwrap();
        assert!(data.records[DAY]["Math"][0]);
        data.toggle(DAY, "Math", 0).unwrap();
        assert!(!data.records[DAY]["Math"][0]);
    }

    #[test]
    fn toggle_pads_short_record_without_truncating() {
        let mut data = AppData::default();
        data.records
            .entry(DAY.to_string())
            .or_default()
            .insert("Chinese".to_string(), vec![true]);

        data.toggle(DAY, "Chinese", 2).unwrap();
        assert_eq!(data.records[DAY]["Chinese"], vec![true, false, true]);
    }

    #[test]
    fn toggle_rejects_out_of_range_index() {
        let mut data = AppData::default();
        assert!(data.toggle(DAY, "Math", 5).is_err());
        assert!(data.records.is_empty());
    }

    #[test]
    fn add_category_rejects_duplicates() {
        let mut data = AppData::default();
        data.add_category(DAY, "Piano").unwrap();
        let err = data.add_category(DAY, "Piano").unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::CONFLICT);
        // Existing state untouched.
        assert!(data.daily_tasks[DAY].contains_key("Piano"));
    }

    #[test]
    fn add_category_conflicts_with_defaults_too() {
        let mut data = AppData::default();
        assert!(data.add_category(DAY, "Math").is_err());
    }

    #[test]
    fn add_task_trims_and_rejects_blank_names() {
        let mut data = AppData::default();
        assert!(data.add_task(DAY, "Math", "   ").is_err());
        data.add_task(DAY, "Math", "  Fractions ").unwrap();
        assert_eq!(
            data.daily_tasks[DAY]["Math"],
            vec!["Mental math", "Olympiad worksheet", "Fractions"]
        );
    }

    #[test]
    fn rejected_commands_do_not_materialize_a_day_config() {
        let mut data = AppData::default();
        assert!(data.add_category(DAY, "Math").is_err());
        assert!(data.add_task(DAY, "Violin", "Scales").is_err());
        assert!(data.add_task(DAY, "Math", "   ").is_err());
        assert!(data.delete_task(DAY, "Math", 9).is_err());
        assert!(data.delete_category(DAY, "Violin").is_err());

        assert!(data.daily_tasks.is_empty());
        assert!(data.records.is_empty());
    }

    #[test]
    fn config_edits_do_not_leak_into_other_days() {
        let mut data = AppData::default();
        data.add_task(DAY, "Math", "Fractions").unwrap();
        assert_eq!(data.task_config("2024-01-02")["Math"].len(), 2);
        assert_eq!(data.task_config(DAY)["Math"].len(), 3);
    }

    #[test]
    fn delete_category_purges_only_that_days_record() {
        let mut data = AppData::default();
        data.toggle(DAY, "Sports", 0).unwrap();
        data.toggle("2024-01-02", "Sports", 0).unwrap();

        data.delete_category(DAY, "Sports").unwrap();
        assert!(!data.records[DAY].contains_key("Sports"));
        assert!(data.records["2024-01-02"].contains_key("Sports"));
        // The other day still sees the default config.
        assert!(data.task_config("2024-01-02").contains_key("Sports"));
    }

    #[test]
    fn delete_task_leaves_record_positions_alone() {
        let mut data = AppData::default();
        data.toggle(DAY, "Chinese", 0).unwrap();
        data.toggle(DAY, "Chinese", 2).unwrap();
        assert_eq!(data.records[DAY]["Chinese"], vec![true, false, true]);

        data.delete_task(DAY, "Chinese", 0).unwrap();
        assert_eq!(data.daily_tasks[DAY]["Chinese"], vec!["Handwriting", "Reading"]);
        // Stale tail entry stays in storage.
        assert_eq!(data.records[DAY]["Chinese"], vec![true, false, true]);
    }
}
