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

/// Serializes all access to a shared mutable instance, running
/// caller-supplied operations against it in place, under the lock, without
/// copying.
///
/// The guard owns the instance and is the sole mutation gateway for it;
/// share the guard itself (for example through an `Arc`) rather than handing
/// out references to the wrapped instance.
pub struct ObjectGuard<T> {
    lock: RawLock<T>,
}

impl<T: fmt::Debug> fmt::Debug for ObjectGuard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lock.try_with(|instance| {
            f.debug_struct("ObjectGuard")
                .field("value", &*instance)
                .finish()
        }) {
            Some(result) => result,
            None => f
                .debug_struct("ObjectGuard")
                .field("state", &"<locked>")
                .finish(),
        }
    }
}

impl<T: Default> Default for ObjectGuard<T> {
    fn default() -> Self {
        Self::from(T::default())
    }
}

impl<T> From<T> for ObjectGuard<T> {
    fn from(instance: T) -> Self {
        Self::new(instance)
    }
}

impl<T> ObjectGuard<T> {
    pub const fn new(instance: T) -> Self {
        Self {
            lock: RawLock::new(instance),
        }
    }

    pub fn into_inner(self) -> T {
        self.lock.into_inner()
    }

    /// Exclusive access through `&mut` needs no locking.
    pub fn get_mut(&mut self) -> &mut T {
        self.lock.as_mut()
    }

    /// Runs `action` on the wrapped instance with the lock held. No other
    /// thread can enter [`apply`] or [`get_with`] on the same guard until
    /// `action` returns; the critical section lasts exactly as long as
    /// `action` does. If `action` panics the lock is released and the panic
    /// propagates; any mutation made before the panic remains in place (no
    /// rollback).
    ///
    /// [`apply`]: ObjectGuard::apply
    /// [`get_with`]: ObjectGuard::get_with
    #[inline]
    pub fn apply<F>(&self, action: F)
    where
        F: FnOnce(&mut T),
    {
        self.lock.with(|instance| action(instance))
    }

    /// Applies `project` to the live instance and returns the result. Unlike
    /// [`ValueGuard::get_with`] the closure receives the instance itself,
    /// not a copy, so any mutation it performs is visible afterward exactly
    /// as if done via [`apply`].
    ///
    /// Returning anything that aliases the instance past the end of the
    /// closure (a raw pointer, a handle cloned out of it that shares
    /// interior state) defeats the mutual-exclusion guarantee; keeping
    /// projections self-contained is a caller responsibility the type does
    /// not enforce.
    ///
    /// [`ValueGuard::get_with`]: crate::ValueGuard::get_with
    /// [`apply`]: ObjectGuard::apply
    #[inline]
    pub fn get_with<K, F>(&self, project: F) -> K
    where
        F: FnOnce(&mut T) -> K,
    {
        self.lock.with(project)
    }
}
