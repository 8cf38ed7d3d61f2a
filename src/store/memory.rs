//! In-process store for `STORE_BACKEND=memory` and tests.

use crate::error::StoreError;
use crate::model::Tutorial;
use crate::store::{title_contains, TutorialStore};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Tutorial>,
    last_id: i64,
}

/// Rows keyed by id in a `BTreeMap`, so iteration is already id-ordered.
#[derive(Default)]
pub struct InMemoryTutorialStore {
    table: RwLock<Table>,
}

impl InMemoryTutorialStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, f: impl FnOnce(&Table) -> T) -> Result<T, StoreError> {
        let guard = self
            .table
            .read()
            .map_err(|_| StoreError::Unavailable("tutorial table lock poisoned".into()))?;
        Ok(f(&guard))
    }

    fn write<T>(&self, f: impl FnOnce(&mut Table) -> T) -> Result<T, StoreError> {
        let mut guard = self
            .table
            .write()
            .map_err(|_| StoreError::Unavailable("tutorial table lock poisoned".into()))?;
        Ok(f(&mut guard))
    }

    fn select(&self, pred: impl Fn(&Tutorial) -> bool) -> Result<Vec<Tutorial>, StoreError> {
        self.read(|t| t.rows.values().filter(|r| pred(*r)).cloned().collect())
    }
}

#[async_trait]
impl TutorialStore for InMemoryTutorialStore {
    async fn find_all(&self) -> Result<Vec<Tutorial>, StoreError> {
        self.select(|_| true)
    }

    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Tutorial>, StoreError> {
        self.select(|r| title_contains(r.title.as_deref(), title))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Tutorial>, StoreError> {
        self.read(|t| t.rows.get(&id).cloned())
    }

    async fn save(&self, mut tutorial: Tutorial) -> Result<Tutorial, StoreError> {
        self.write(|t| match tutorial.id {
            None => {
                t.last_id += 1;
                tutorial.id = Some(t.last_id);
                t.rows.insert(t.last_id, tutorial.clone());
                Ok(tutorial)
            }
            Some(id) => match t.rows.get_mut(&id) {
                Some(row) => {
                    *row = tutorial.clone();
                    Ok(tutorial)
                }
                None => Err(StoreError::Missing(id)),
            },
        })?
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        self.write(|t| {
            t.rows.remove(&id);
        })
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        self.write(|t| t.rows.clear())
    }

    async fn find_by_published(&self, published: bool) -> Result<Vec<Tutorial>, StoreError> {
        self.select(|r| r.published == published)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.read(|_| ())
    }
}
