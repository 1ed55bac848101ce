//! Transactional key-value engine
//!
//! Combines the data map, the derived value-count index and the
//! transaction stack behind a single mutation path, so the three can
//! never be observed out of step with each other.

use super::error::{EngineError, EngineResult};
use super::index::ValueIndex;
use super::txn::TransactionStack;
use bytes::Bytes;
use siphasher::sip::SipHasher13;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;

/// Type alias for the data map with SipHasher
type StoreMap = HashMap<Bytes, Bytes, BuildHasherDefault<SipHasher13>>;

/// In-memory key-value engine with nested transactions.
///
/// Each instance exclusively owns its data map, value-count index and
/// transaction stack; nothing is shared between instances. All
/// operations are synchronous and run to completion — callers that
/// need shared access must wrap the whole engine in their own lock,
/// the engine defines no locking policy of its own.
pub struct Engine {
    /// The current key -> value mapping
    data: StoreMap,

    /// Derived value -> count index over `data`
    index: ValueIndex,

    /// Pre-image frames for the transactions in progress
    txns: TransactionStack,
}

impl Engine {
    /// Create a new engine with default capacity
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a new engine with specified initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Engine {
            data: HashMap::with_capacity_and_hasher(
                capacity,
                BuildHasherDefault::<SipHasher13>::default(),
            ),
            index: ValueIndex::with_capacity(capacity),
            txns: TransactionStack::new(),
        }
    }

    /// Set `key` to `value`.
    ///
    /// Fails with `InvalidInput` if the key or the value is empty (the
    /// empty byte string is the absent sentinel and cannot be stored).
    /// Validation happens before any mutation, so the engine state is
    /// unchanged on error.
    pub fn set(&mut self, key: impl Into<Bytes>, value: impl Into<Bytes>) -> EngineResult<()> {
        let key = key.into();
        let value = value.into();

        if key.is_empty() || value.is_empty() {
            return Err(EngineError::InvalidInput);
        }

        self.txns.capture(&key, self.data.get(&key));
        self.insert_entry(key, value);
        Ok(())
    }

    /// Remove `key`; a no-op if it is absent.
    pub fn unset(&mut self, key: &Bytes) {
        if !self.data.contains_key(key) {
            return;
        }

        self.txns.capture(key, self.data.get(key));
        self.remove_entry(key);
    }

    /// Current value of `key`.
    ///
    /// Fails with `InvalidName` if the key holds no value. No side
    /// effects, no validation — any byte string is an acceptable probe.
    pub fn get(&self, key: &[u8]) -> EngineResult<Bytes> {
        self.data.get(key).cloned().ok_or(EngineError::InvalidName)
    }

    /// Number of keys currently set to `value` (0 if none).
    ///
    /// Constant-time index lookup; no side effects, no validation —
    /// the probe may be a value that was never stored.
    pub fn numequalto(&self, value: &[u8]) -> usize {
        self.index.count(value)
    }

    /// Open a new transaction level. Nesting is unbounded.
    pub fn begin(&mut self) {
        self.txns.push();
    }

    /// Undo every mutation made since the innermost `begin`.
    ///
    /// Fails with `NoTransaction` when no transaction is active.
    /// Restores go through the public `set`/`unset` entry points: when
    /// another transaction level remains below, the restore itself is
    /// captured as a first-touch pre-image in that outer frame, which
    /// keeps an inner rollback undoable by an outer one.
    pub fn rollback(&mut self) -> EngineResult<()> {
        let frame = self.txns.pop().ok_or(EngineError::NoTransaction)?;

        for (key, pre_image) in frame.into_entries() {
            match pre_image {
                Some(value) => self.set(key, value)?,
                None => self.unset(&key),
            }
        }
        Ok(())
    }

    /// Finalize the current data state.
    ///
    /// Fails with `NoTransaction` when no transaction is active.
    /// Discards the entire transaction stack — commit collapses all
    /// pending nested transactions at once; the data is untouched.
    pub fn commit(&mut self) -> EngineResult<()> {
        if !self.txns.is_active() {
            return Err(EngineError::NoTransaction);
        }

        self.txns.clear();
        Ok(())
    }

    /// Drop all data, counts and pending transactions atomically,
    /// leaving fresh empty containers.
    pub fn reset(&mut self) {
        self.data.clear();
        self.index.clear();
        self.txns.clear();
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the engine stores no keys
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current transaction nesting depth (0 = no transaction)
    pub fn depth(&self) -> usize {
        self.txns.depth()
    }

    /// Write `key = value`, keeping the value index in step.
    ///
    /// Together with `remove_entry`, this is the only place where the
    /// data map and the index change.
    fn insert_entry(&mut self, key: Bytes, value: Bytes) {
        if let Some(old) = self.data.insert(key, value.clone()) {
            self.index.decrement(&old);
        }
        self.index.increment(value);
    }

    /// Remove `key`, keeping the value index in step.
    fn remove_entry(&mut self, key: &Bytes) {
        if let Some(old) = self.data.remove(key) {
            self.index.decrement(&old);
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
