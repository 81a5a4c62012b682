use std::cell::RefCell;

use super::HistoryStore;
use crate::core::HistoryList;
use crate::error::AppError;

/// History that lives only as long as the process
#[derive(Debug, Default)]
pub(crate) struct MemoryHistoryStore {
    saved: RefCell<HistoryList>,
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> HistoryList {
        self.saved.borrow().clone()
    }

    fn save(&self, history: &HistoryList) -> Result<(), AppError> {
        *self.saved.borrow_mut() = HistoryList::from_records(history.records().to_vec());
        Ok(())
    }
}
