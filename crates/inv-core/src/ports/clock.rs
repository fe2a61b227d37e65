use crate::item::Timestamp;

pub trait ClockPort: Send + Sync {
    /// Local wall-clock time used for `created_at` / `updated_at`.
    fn now(&self) -> Timestamp;
}
