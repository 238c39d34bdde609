//! Bounded in-memory log buffer
//!
//! Keeps the most recent records for crash dumps and for asserting on log
//! output in tests. When full, the oldest record is dropped.

use crate::logger::LogSink;
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RingBufferStats {
    pub record_count: usize,
    /// Records evicted because the buffer was full
    pub dropped_count: usize,
    pub capacity: usize,
}

pub struct LogRingBuffer {
    inner: Mutex<VecDeque<Record>>,
    capacity: usize,
    dropped: AtomicUsize,
}

impl LogRingBuffer {
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(LogRingBuffer {
            inner: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            dropped: AtomicUsize::new(0),
        })
    }

    fn records(&self) -> MutexGuard<'_, VecDeque<Record>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, record: Record) {
        if self.capacity == 0 {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return;
        }
        let mut inner = self.records();
        if inner.len() >= self.capacity {
            inner.pop_front();
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
        inner.push_back(record);
    }

    /// All buffered records, oldest first
    pub fn dump_records(&self) -> Vec<Record> {
        self.records().iter().cloned().collect()
    }

    /// Buffered records formatted one per line
    pub fn dump(&self) -> String {
        self.records()
            .iter()
            .map(Record::format)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn clear(&self) {
        self.records().clear();
        self.dropped.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> RingBufferStats {
        RingBufferStats {
            record_count: self.len(),
            dropped_count: self.dropped_count(),
            capacity: self.capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn dropped_count(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl LogSink for LogRingBuffer {
    fn write(&self, record: &Record) {
        self.push(record.clone());
    }
}

impl LogSink for Arc<LogRingBuffer> {
    fn write(&self, record: &Record) {
        self.push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    fn record(message: &str) -> Record {
        Record::new(Level::Info, "test", message)
    }

    #[test]
    fn test_ring_buffer_overwrites_oldest() {
        let ring = LogRingBuffer::new(2);
        ring.write(&record("one"));
        ring.write(&record("two"));
        ring.write(&record("three"));

        let messages: Vec<_> = ring.dump_records().into_iter().map(|r| r.message).collect();
        assert_eq!(messages, vec!["two", "three"]);
        assert_eq!(
            ring.stats(),
            RingBufferStats {
                record_count: 2,
                dropped_count: 1,
                capacity: 2,
            }
        );
    }

    #[test]
    fn test_ring_buffer_clear() {
        let ring = LogRingBuffer::new(1);
        ring.write(&record("one"));
        ring.write(&record("two"));
        ring.clear();

        assert!(ring.is_empty());
        assert_eq!(ring.dropped_count(), 0);
        assert_eq!(ring.capacity(), 1);
    }

    #[test]
    fn test_ring_buffer_zero_capacity() {
        let ring = LogRingBuffer::new(0);
        ring.write(&record("lost"));
        assert!(ring.is_empty());
        assert_eq!(ring.dropped_count(), 1);
    }

    #[test]
    fn test_dump_joins_lines() {
        let ring = LogRingBuffer::new(4);
        ring.write(&record("first"));
        ring.write(&record("second"));

        let dump = ring.dump();
        assert_eq!(dump.lines().count(), 2);
        assert!(dump.contains("INFO test: first"));
    }
}
