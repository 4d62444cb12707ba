//! Bounded Priority Queue
//!
//! Fixed-capacity, array-backed priority queue that keeps its occupied slots
//! fully ordered. The extreme element always sits in slot 0.
//!
//! # Design
//!
//! Insertion walks the occupied slots from the tail towards the head,
//! shifting every element the new value ranks before by one slot, and drops
//! the value into the gap. Extraction removes slot 0 and compacts the rest.
//!
//! - Peek: O(1)
//! - Insert: O(n)
//! - Extract: O(n)
//!
//! Linear placement keeps every intermediate state a plain ordered list,
//! which is what a step-by-step trace wants to show.
//!
//! # Critical Invariants
//!
//! 1. **Contiguity**: occupied slots are `0..len`, free slots follow
//! 2. **Ordering**: occupied slots are sorted by the configured [`Order`]
//! 3. **Stability**: a new value never jumps ahead of an equal existing value
//! 4. **Bounded**: `len <= capacity`, and capacity never changes
//!
//! # Example
//!
//! ```rust
//! use sort_tracer_core_rs::{Order, PriorityQueue};
//!
//! let mut queue = PriorityQueue::new(5, Order::Descending).unwrap();
//! for value in [3, 1, 4, 1, 5] {
//!     queue.insert(value).unwrap();
//! }
//! assert_eq!(queue.as_slice(), &[5, 4, 3, 1, 1]);
//! assert_eq!(queue.extract_extreme().unwrap(), 5);
//! assert!(!queue.is_full());
//! ```

use crate::core::order::Order;
use crate::core::value::{Comparable, Incomparable};
use std::fmt;
use thiserror::Error;

/// Errors raised by [`PriorityQueue`] operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Capacity exceeded: queue already holds {capacity} elements")]
    CapacityExceeded { capacity: usize },

    #[error("Cannot extract from an empty queue")]
    EmptyContainer,

    #[error("Type mismatch: {0}")]
    TypeMismatch(#[from] Incomparable),
}

impl QueueError {
    /// Name of the error kind, as reported in failed traces
    pub fn kind(&self) -> &'static str {
        match self {
            QueueError::InvalidConfiguration(_) => "InvalidConfigurationError",
            QueueError::CapacityExceeded { .. } => "CapacityExceededError",
            QueueError::EmptyContainer => "EmptyContainerError",
            QueueError::TypeMismatch(_) => "TypeMismatchError",
        }
    }
}

/// Fixed-capacity priority queue with linear placement
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityQueue<T> {
    /// Occupied slots, ordered by `order`; `items.len()` is the slot counter
    items: Vec<T>,

    /// Number of slots, fixed at construction
    capacity: usize,

    /// Descending keeps the maximum at the head (max-queue)
    order: Order,
}

impl<T: Comparable> PriorityQueue<T> {
    /// Create an empty queue with `capacity` slots
    ///
    /// # Errors
    /// `InvalidConfiguration` if `capacity` is zero.
    pub fn new(capacity: usize, order: Order) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::InvalidConfiguration(
                "capacity must be positive".to_string(),
            ));
        }

        Ok(Self {
            items: Vec::with_capacity(capacity),
            capacity,
            order,
        })
    }

    /// Insert `value` at its ordered position
    ///
    /// The slot is located before anything moves, so a failed comparison
    /// leaves the queue exactly as it was.
    ///
    /// # Errors
    /// - `CapacityExceeded` if every slot is occupied
    /// - `TypeMismatch` if `value` cannot be compared with a held element
    pub fn insert(&mut self, value: T) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let slot = self.insertion_slot(&value)?;
        self.items.insert(slot, value);
        Ok(())
    }

    /// Remove and return the element in slot 0
    ///
    /// # Errors
    /// `EmptyContainer` if no slot is occupied.
    pub fn extract_extreme(&mut self) -> Result<T, QueueError> {
        if self.items.is_empty() {
            return Err(QueueError::EmptyContainer);
        }
        Ok(self.items.remove(0))
    }

    /// Walk from the tail towards the head while `value` ranks before the
    /// occupant; ties stop the walk.
    fn insertion_slot(&self, value: &T) -> Result<usize, Incomparable> {
        let mut slot = self.items.len();
        while slot > 0 {
            let ordering = value.try_compare(&self.items[slot - 1])?;
            if !self.order.ranks_before(ordering) {
                break;
            }
            slot -= 1;
        }
        Ok(slot)
    }
}

impl<T> PriorityQueue<T> {
    /// Current extreme element, if any
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// True if no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True if every slot is occupied
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Configured order
    pub fn order(&self) -> Order {
        self.order
    }

    /// Occupied slots, head first
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over occupied slots, head first
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for PriorityQueue<T> {
    /// Occupied slots separated by single spaces
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
