//! Timestamp-derived id allocation.

use chrono::Utc;

/// Issues opaque string ids derived from the current Unix-millisecond
/// timestamp.
///
/// Back-to-back calls within the same millisecond bump past the last
/// issued value, so ids are unique and strictly increasing in issue
/// order.
#[derive(Debug, Default)]
pub(crate) struct IdSource {
    last_issued: i64,
}

impl IdSource {
    /// Returns the next id.
    pub(crate) fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last_issued = if now > self.last_issued {
            now
        } else {
            self.last_issued + 1
        };
        self.last_issued.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_increasing_within_one_millisecond() {
        let mut ids = IdSource::default();
        let issued: Vec<i64> = (0..100)
            .map(|_| ids.next_id().parse().unwrap())
            .collect();

        for pair in issued.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }
}
