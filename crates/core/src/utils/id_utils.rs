use chrono::Utc;

/// Issues record ids from the creation-time millisecond timestamp.
///
/// Ids are strictly increasing for a given generator: two records created in
/// the same millisecond, or after a clock step backwards, get `last + 1`.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes sure future ids sort after `id`. Used when records are seeded
    /// with externally chosen ids.
    pub fn observe(&mut self, id: i64) {
        self.last = self.last.max(id);
    }

    pub fn next_id(&mut self) -> i64 {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    fn next_id_at(&mut self, now_millis: i64) -> i64 {
        let id = if now_millis > self.last {
            now_millis
        } else {
            self.last + 1
        };
        self.last = id;
        id
    }
}
