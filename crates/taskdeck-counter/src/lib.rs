//! Companion counter exercise: bounded arithmetic with guard errors, an
//! operation history, and an explicit subscriber list. Pure in-memory state;
//! unrelated to the task tracker runtime.

use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CounterError {
    #[error("maximum value reached")]
    AboveMax,

    #[error("minimum value reached")]
    BelowMin,

    #[error("arithmetic overflow")]
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Increment,
    Decrement,
    Transform,
}

/// One successful mutation, recorded with the value it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub operation: Operation,
    pub value: i64,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterConfig {
    pub initial: i64,
    pub step: i64,
    pub min: i64,
    pub max: i64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial: 0,
            step: 1,
            min: i64::MIN,
            max: i64::MAX,
        }
    }
}

/// A counter with checked mutation.
///
/// Failed mutations leave the value, history, and subscribers untouched.
/// `add`/`subtract`/`multiply` are the immutable face: they return a fresh
/// counter and never modify the receiver.
pub struct Counter {
    value: i64,
    config: CounterConfig,
    history: Vec<HistoryEntry>,
    observers: Vec<Box<dyn FnMut(i64, Operation)>>,
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("value", &self.value)
            .field("config", &self.config)
            .field("history", &self.history)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Counter {
    pub fn new(initial: i64) -> Self {
        Self::with_config(CounterConfig {
            initial,
            ..CounterConfig::default()
        })
    }

    pub fn with_config(config: CounterConfig) -> Self {
        Self {
            value: config.initial,
            config,
            history: Vec::new(),
            observers: Vec::new(),
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn config(&self) -> CounterConfig {
        self.config
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn increment(&mut self) -> Result<i64, CounterError> {
        let next = self
            .value
            .checked_add(self.config.step)
            .ok_or(CounterError::Overflow)?;
        self.apply(next, Operation::Increment)
    }

    pub fn decrement(&mut self) -> Result<i64, CounterError> {
        let next = self
            .value
            .checked_sub(self.config.step)
            .ok_or(CounterError::Overflow)?;
        self.apply(next, Operation::Decrement)
    }

    /// Apply an arbitrary function to the value, subject to the same bounds
    /// as increment/decrement.
    pub fn transform(&mut self, f: impl FnOnce(i64) -> i64) -> Result<i64, CounterError> {
        let next = f(self.value);
        self.apply(next, Operation::Transform)
    }

    /// Restore the initial value. Not recorded in the history.
    pub fn reset(&mut self) {
        self.value = self.config.initial;
    }

    /// Register a subscriber notified with `(new_value, operation)` after
    /// every successful mutation.
    pub fn on_change(&mut self, callback: impl FnMut(i64, Operation) + 'static) {
        self.observers.push(Box::new(callback));
    }

    /// A predicate over the value captured at call time: later mutations of
    /// this counter do not affect it.
    pub fn threshold_check(&self) -> impl Fn(i64) -> bool {
        let value = self.value;
        move |threshold| value >= threshold
    }

    pub fn add(&self, n: i64) -> Result<Counter, CounterError> {
        self.value
            .checked_add(n)
            .map(Counter::new)
            .ok_or(CounterError::Overflow)
    }

    pub fn subtract(&self, n: i64) -> Result<Counter, CounterError> {
        self.value
            .checked_sub(n)
            .map(Counter::new)
            .ok_or(CounterError::Overflow)
    }

    pub fn multiply(&self, n: i64) -> Result<Counter, CounterError> {
        self.value
            .checked_mul(n)
            .map(Counter::new)
            .ok_or(CounterError::Overflow)
    }

    /// A fresh counter holding the current value, with no shared state.
    pub fn snapshot(&self) -> Counter {
        Counter::new(self.value)
    }

    fn apply(&mut self, next: i64, operation: Operation) -> Result<i64, CounterError> {
        if next > self.config.max {
            return Err(CounterError::AboveMax);
        }
        if next < self.config.min {
            return Err(CounterError::BelowMin);
        }
        self.value = next;
        self.history.push(HistoryEntry {
            operation,
            value: next,
            time: Utc::now(),
        });
        for observer in &mut self.observers {
            observer(next, operation);
        }
        Ok(next)
    }
}
