// Copyright (c) 2020 kprotty
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use core::fmt;

use crate::raw::RawLock;

/// Serializes all access to a copyable value behind one critical section.
///
/// Reads copy the value out; writes replace it wholesale through a transform
/// run under the lock, so compound read-modify-write updates are atomic with
/// respect to every other operation on the same guard.
pub struct ValueGuard<T> {
    lock: RawLock<T>,
}

impl<T: Copy + fmt::Debug> fmt::Debug for ValueGuard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self
            .lock
            .try_with(|value| f.debug_struct("ValueGuard").field("value", &*value).finish())
        {
            Some(result) => result,
            None => f
                .debug_struct("ValueGuard")
                .field("state", &"<locked>")
                .finish(),
        }
    }
}

impl<T: Copy + Default> Default for ValueGuard<T> {
    fn default() -> Self {
        Self::from(T::default())
    }
}

impl<T: Copy> From<T> for ValueGuard<T> {
    fn from(initial: T) -> Self {
        Self::new(initial)
    }
}

impl<T: Copy> ValueGuard<T> {
    pub const fn new(initial: T) -> Self {
        Self {
            lock: RawLock::new(initial),
        }
    }

    pub fn into_inner(self) -> T {
        self.lock.into_inner()
    }

    /// Exclusive access through `&mut` needs no locking.
    pub fn get_mut(&mut self) -> &mut T {
        self.lock.as_mut()
    }

    /// Returns a copy of the current value, taken as a single consistent
    /// snapshot. Blocks while another thread is inside the critical section.
    #[inline]
    pub fn get(&self) -> T {
        self.lock.with(|value| *value)
    }

    /// Applies `project` to a consistent snapshot of the value and returns
    /// the result. No mutation can occur while `project` runs; the critical
    /// section is held for its entire duration, so keep it fast. If
    /// `project` panics the lock is still released before the panic
    /// propagates.
    #[inline]
    pub fn get_with<K, F>(&self, project: F) -> K
    where
        F: FnOnce(&T) -> K,
    {
        self.lock.with(|value| project(value))
    }

    /// Replaces the stored value with `transform(old)` as one atomic
    /// read-transform-write: no other thread can observe or produce an
    /// intermediate state. If `transform` panics the stored value is left
    /// unchanged and the lock is released before the panic propagates.
    #[inline]
    pub fn set<F>(&self, transform: F)
    where
        F: FnOnce(T) -> T,
    {
        self.lock.with(|value| *value = transform(*value))
    }
}
