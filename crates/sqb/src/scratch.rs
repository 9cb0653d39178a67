//! Reusable scratch buffers for rendering.
//!
//! Each build takes exclusive ownership of one [`Scratch`] from a pool and
//! hands it back, reset, when the [`PooledScratch`] guard is dropped. Buffers
//! whose text and argument storage together grew past the configured capacity
//! are dropped instead so one huge query does not pin memory in the pool.

use crate::config::{BuildConfig, PlaceholderStyle};
use crate::render::Sink;
use crate::value::Value;
use std::fmt::Write;
use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, PoisonError};

/// Maximum number of idle buffers kept by the global pool.
const MAX_POOLED: usize = 32;

static GLOBAL: ScratchPool = ScratchPool::new(MAX_POOLED);

/// Take a scratch buffer from the global pool.
pub fn acquire(config: &BuildConfig) -> PooledScratch<'static> {
    GLOBAL.acquire(config)
}

/// A text buffer plus the arguments collected alongside it.
#[derive(Debug, Default)]
pub struct Scratch {
    sql: String,
    args: Vec<Value>,
    placeholders: usize,
    style: PlaceholderStyle,
}

impl Scratch {
    /// Create an empty buffer writing placeholders in `style`.
    pub fn new(style: PlaceholderStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.sql
    }

    /// The arguments appended so far.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.sql.len()
    }

    /// Check if no text has been written.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Capacity of the text buffer in bytes.
    pub fn capacity(&self) -> usize {
        self.sql.capacity()
    }

    /// Capacity of the argument buffer, in values.
    pub fn args_capacity(&self) -> usize {
        self.args.capacity()
    }

    /// Bytes held by both buffers, counted against the pool retention cap.
    pub fn retained_bytes(&self) -> usize {
        self.sql.capacity() + self.args.capacity() * size_of::<Value>()
    }

    /// Clear text, arguments and the placeholder counter, keeping allocations.
    pub fn reset(&mut self) {
        self.sql.clear();
        self.args.clear();
        self.placeholders = 0;
    }

    /// Copy out the text and move out the arguments.
    ///
    /// The text allocation stays for reuse; the argument vector is handed over
    /// whole, so nothing sized by the last build is left behind.
    pub(crate) fn finish(&mut self) -> (String, Vec<Value>) {
        (self.sql.clone(), std::mem::take(&mut self.args))
    }
}

impl Sink for Scratch {
    fn push_str(&mut self, s: &str) {
        self.sql.push_str(s);
    }

    fn push_placeholder(&mut self) {
        self.placeholders += 1;
        match self.style {
            PlaceholderStyle::Question => self.sql.push('?'),
            PlaceholderStyle::Numbered => {
                let _ = write!(self.sql, "${}", self.placeholders);
            }
        }
    }

    fn push_arg(&mut self, value: Value) {
        self.args.push(value);
    }

    fn push_args(&mut self, values: Vec<Value>) {
        self.args.extend(values);
    }

    fn placeholder_count(&self) -> usize {
        self.placeholders
    }

    fn arg_count(&self) -> usize {
        self.args.len()
    }
}

/// A bounded free list of [`Scratch`] buffers.
#[derive(Debug)]
pub struct ScratchPool {
    idle: Mutex<Vec<Scratch>>,
    max_idle: usize,
}

impl ScratchPool {
    /// Create a pool keeping at most `max_idle` buffers.
    pub const fn new(max_idle: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            max_idle,
        }
    }

    /// Take a buffer, allocating a fresh one if the pool is empty.
    pub fn acquire(&self, config: &BuildConfig) -> PooledScratch<'_> {
        let mut scratch = self.lock().pop().unwrap_or_default();
        scratch.style = config.placeholder;
        PooledScratch {
            pool: self,
            scratch,
            max_retained_capacity: config.max_retained_capacity,
        }
    }

    /// Number of idle buffers.
    pub fn idle(&self) -> usize {
        self.lock().len()
    }

    fn release(&self, mut scratch: Scratch, max_retained_capacity: usize) {
        if scratch.retained_bytes() > max_retained_capacity {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                target: "sqb.scratch",
                retained_bytes = scratch.retained_bytes(),
                max_retained_capacity,
                "dropping oversized scratch buffer"
            );
            return;
        }
        scratch.reset();
        let mut idle = self.lock();
        if idle.len() < self.max_idle {
            idle.push(scratch);
        }
    }

    // Buffers are reset on release, so a poisoned lock holds nothing stale.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Scratch>> {
        self.idle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Exclusive use of one pooled [`Scratch`]; returns it to the pool on drop.
#[derive(Debug)]
pub struct PooledScratch<'a> {
    pool: &'a ScratchPool,
    scratch: Scratch,
    max_retained_capacity: usize,
}

impl Deref for PooledScratch<'_> {
    type Target = Scratch;

    fn deref(&self) -> &Scratch {
        &self.scratch
    }
}

impl DerefMut for PooledScratch<'_> {
    fn deref_mut(&mut self) -> &mut Scratch {
        &mut self.scratch
    }
}

impl Drop for PooledScratch<'_> {
    fn drop(&mut self) {
        let scratch = std::mem::take(&mut self.scratch);
        self.pool.release(scratch, self.max_retained_capacity);
    }
}
