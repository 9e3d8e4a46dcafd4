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

use core::cell::UnsafeCell;

use parking_lot::{lock_api::RawMutex as _, RawMutex};

/// The critical-section core shared by both guard variants: one mutex and
/// the value it protects. Every access to `value` goes through [`with`] or
/// [`try_with`] while `mutex` is held.
///
/// [`with`]: RawLock::with
/// [`try_with`]: RawLock::try_with
pub struct RawLock<T> {
    mutex: RawMutex,
    value: UnsafeCell<T>,
}

unsafe impl<T: Send> Send for RawLock<T> {}
unsafe impl<T: Send> Sync for RawLock<T> {}

impl<T> RawLock<T> {
    pub const fn new(value: T) -> Self {
        Self {
            mutex: RawMutex::INIT,
            value: UnsafeCell::new(value),
        }
    }

    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }

    pub fn as_mut(&mut self) -> &mut T {
        unsafe { &mut *self.value.get() }
    }

    /// Runs `f` on the protected value with the mutex held, blocking until
    /// the mutex is acquired. The mutex is released on every exit path,
    /// including an unwind out of `f`.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        self.mutex.lock();
        let _release = Release(&self.mutex);
        f(unsafe { &mut *self.value.get() })
    }

    // Only used by the Debug impls; try-acquire is not part of the public
    // guard contract.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        if !self.mutex.try_lock() {
            return None;
        }
        let _release = Release(&self.mutex);
        Some(f(unsafe { &mut *self.value.get() }))
    }
}

struct Release<'a>(&'a RawMutex);

impl<'a> Drop for Release<'a> {
    fn drop(&mut self) {
        unsafe { self.0.unlock() }
    }
}
