use anyhow::Result;
use chrono::NaiveDate;
use std::path::PathBuf;

use crate::model::Task;
use crate::storage;

/// Owns the canonical task list and the id counter. Ids are assigned
/// monotonically and never reused within a store's lifetime; every
/// mutation re-persists the full list as one snapshot.
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    /// Loads the persisted list, or seeds the example tasks when the
    /// slot is absent or unreadable. The seed is persisted right away.
    pub fn open(path: PathBuf) -> Result<Self> {
        match storage::load_tasks(&path) {
            Some(tasks) => {
                let next_id = tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
                Ok(Self {
                    path,
                    tasks,
                    next_id,
                })
            }
            None => {
                let store = Self {
                    path,
                    tasks: seed_tasks(),
                    next_id: 4,
                };
                store.persist()?;
                Ok(store)
            }
        }
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Rejects empty text by returning `Ok(None)` without touching the
    /// list. The due date is already validated at the CLI boundary.
    pub fn add(&mut self, text: &str, due: NaiveDate) -> Result<Option<&Task>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        self.tasks.push(Task {
            id: self.next_id,
            text: text.to_string(),
            due,
            completed: false,
        });
        self.next_id += 1;
        self.persist()?;
        Ok(self.tasks.last())
    }

    /// One-way flip; there is no way to un-complete a task. Returns
    /// `false` for an unknown id or an already completed task.
    pub fn complete(&mut self, id: u64) -> Result<bool> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        if task.completed {
            return Ok(false);
        }

        task.completed = true;
        self.persist()?;
        Ok(true)
    }

    /// Returns `false` (not an error) when no task matches.
    pub fn remove(&mut self, id: u64) -> Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<()> {
        storage::save_tasks(&self.path, &self.tasks)
    }
}

fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            text: "Review the history chapter for the exam".to_string(),
            due: ymd(2025, 8, 15),
            completed: false,
        },
        Task {
            id: 2,
            text: "Finish the maths exercise sheet".to_string(),
            due: ymd(2025, 8, 12),
            completed: true,
        },
        Task {
            id: 3,
            text: "Read the assigned literature chapter".to_string(),
            due: ymd(2025, 8, 20),
            completed: false,
        },
    ]
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn open_in(dir: &tempfile::TempDir) -> TaskStore {
        TaskStore::open(dir.path().join("tasks.json")).expect("open store")
    }

    #[test]
    fn seeds_three_tasks_on_first_run() {
        let dir = tempdir().expect("tempdir");
        let store = open_in(&dir);

        let ids: Vec<u64> = store.all().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(dir.path().join("tasks.json").exists());
    }

    #[test]
    fn add_appends_with_monotonic_id() {
        let dir = tempdir().expect("tempdir");
        let mut store = open_in(&dir);
        let max_before = store.all().iter().map(|t| t.id).max().unwrap_or(0);
        let len_before = store.all().len();

        let task = store
            .add("Buy groceries", ymd(2025, 9, 1))
            .expect("persist")
            .expect("task created")
            .clone();

        assert_eq!(store.all().len(), len_before + 1);
        assert!(task.id > max_before);
        assert!(!task.completed);
    }

    #[test]
    fn add_rejects_empty_text() {
        let dir = tempdir().expect("tempdir");
        let mut store = open_in(&dir);
        let len_before = store.all().len();

        assert!(store.add("", ymd(2025, 1, 1)).expect("persist").is_none());
        assert!(store.add("   ", ymd(2025, 1, 1)).expect("persist").is_none());
        assert_eq!(store.all().len(), len_before);
    }

    #[test]
    fn complete_is_idempotent() {
        let dir = tempdir().expect("tempdir");
        let mut store = open_in(&dir);

        assert!(store.complete(1).expect("persist"));
        assert!(!store.complete(1).expect("persist"));
        assert!(store.get(1).expect("task exists").completed);
    }

    #[test]
    fn complete_unknown_id_is_noop() {
        let dir = tempdir().expect("tempdir");
        let mut store = open_in(&dir);

        assert!(!store.complete(999).expect("persist"));
    }

    #[test]
    fn remove_twice_is_safe() {
        let dir = tempdir().expect("tempdir");
        let mut store = open_in(&dir);
        let len_before = store.all().len();

        assert!(store.remove(2).expect("persist"));
        assert!(!store.remove(2).expect("persist"));
        assert_eq!(store.all().len(), len_before - 1);
        assert!(store.get(2).is_none());
    }

    #[test]
    fn next_id_resumes_from_max_on_load() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("tasks.json");
        let tasks = vec![
            Task {
                id: 7,
                text: "A".to_string(),
                due: ymd(2025, 8, 15),
                completed: false,
            },
            Task {
                id: 2,
                text: "B".to_string(),
                due: ymd(2025, 8, 12),
                completed: true,
            },
        ];
        storage::save_tasks(&path, &tasks).expect("save");

        let mut store = TaskStore::open(path).expect("open store");
        let task = store
            .add("C", ymd(2025, 8, 10))
            .expect("persist")
            .expect("task created");
        assert_eq!(task.id, 8);
    }

    #[test]
    fn persisted_list_round_trips() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("tasks.json");

        let mut store = TaskStore::open(path.clone()).expect("open store");
        store.add("Water the plants", ymd(2025, 9, 3)).expect("persist");
        store.complete(1).expect("persist");
        let snapshot: Vec<Task> = store.all().to_vec();

        let reloaded = TaskStore::open(path).expect("reopen store");
        assert_eq!(reloaded.all(), snapshot.as_slice());
    }

    #[test]
    fn corrupt_slot_falls_back_to_seed() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, b"{not json").expect("write garbage");

        let store = TaskStore::open(path.clone()).expect("open store");
        assert_eq!(store.all().len(), 3);
        // The seed replaced the corrupt slot on disk.
        assert!(storage::load_tasks(&path).is_some());
    }
}
