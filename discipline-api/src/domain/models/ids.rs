use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use time::OffsetDateTime;

/// Identifier of a violator.
///
/// Generated ids are millisecond timestamps; imported ids are the
/// employee numbers from the sheet, e.g. "EMP001".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViolatorId(String);

impl ViolatorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ViolatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ViolatorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ViolatorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ViolatorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Identifier of a recorded violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViolationId(String);

impl ViolationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ViolationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ViolationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ViolationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ViolationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Hands out process-unique ids based on the wall clock in milliseconds.
///
/// Two requests in the same millisecond (or a clock step backwards) get the
/// previous value plus one, so values are strictly increasing.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_raw(&self) -> u64 {
        let now = now_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self.last.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(current) => last = current,
            }
        }
    }

    pub fn next_violator_id(&self) -> ViolatorId {
        ViolatorId::new(self.next_raw().to_string())
    }

    pub fn next_violation_id(&self) -> ViolationId {
        ViolationId::new(self.next_raw().to_string())
    }
}

fn now_millis() -> u64 {
    let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
    u64::try_from(nanos / 1_000_000).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_strictly_increasing() {
        let ids = IdGenerator::new();

        let values: Vec<u64> = (0..1_000).map(|_| ids.next_raw()).collect();

        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn generated_ids_are_unique_across_threads() {
        let ids = std::sync::Arc::new(IdGenerator::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = ids.clone();
                std::thread::spawn(move || {
                    (0..500)
                        .map(|_| ids.next_violation_id())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let all: Vec<ViolationId> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        let unique: HashSet<_> = all.iter().cloned().collect();

        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = ViolatorId::new("EMP001");

        assert_eq!(serde_json::to_string(&id).unwrap(), "\"EMP001\"");
    }
}
