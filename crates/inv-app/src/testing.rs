//! Port doubles shared by the use case tests.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use inv_core::ports::{ClockPort, ItemStorePort, StoreError};
use inv_core::{InventoryItem, ItemCode, Timestamp};

/// Table kept in memory; counts `save` calls so tests can assert "no write happened".
#[derive(Default)]
pub struct InMemoryItemStore {
    items: Mutex<Vec<InventoryItem>>,
    saves: AtomicUsize,
    fail_load: bool,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<InventoryItem>) -> Self {
        Self {
            items: Mutex::new(items),
            ..Self::default()
        }
    }

    pub fn unreadable() -> Self {
        Self {
            fail_load: true,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Vec<InventoryItem> {
        self.items.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemStorePort for InMemoryItemStore {
    async fn load(&self) -> Result<Vec<InventoryItem>, StoreError> {
        if self.fail_load {
            return Err(StoreError::Malformed {
                line: Some(2),
                message: "found record with 2 fields, but the previous record has 7 fields"
                    .to_string(),
            });
        }
        Ok(self.items.lock().unwrap().clone())
    }

    async fn save(&self, items: &[InventoryItem]) -> Result<(), StoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.items.lock().unwrap() = items.to_vec();
        Ok(())
    }
}

/// Clock that advances one second per reading.
pub struct SteppingClock {
    start: NaiveDateTime,
    ticks: AtomicUsize,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2024, 5, 20)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
            ticks: AtomicUsize::new(0),
        }
    }
}

impl ClockPort for SteppingClock {
    fn now(&self) -> Timestamp {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst) as i64;
        Timestamp::new(self.start + Duration::seconds(tick))
    }
}

pub fn item(code: &str, name: &str, location: &str, status: &str) -> InventoryItem {
    InventoryItem {
        code: ItemCode::from(code),
        name: name.to_string(),
        location: location.to_string(),
        status: status.to_string(),
        created_at: "01/01/2024 09:00:00".to_string(),
        updated_at: String::new(),
        comment: String::new(),
        extra: Vec::new(),
    }
}
