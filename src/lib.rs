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

//! Mutually exclusive, closure-funneled containers for shared mutable state.
//!
//! A guard wraps a value together with its own mutex and funnels every read
//! and mutation through a single critical section, so compound updates
//! ("read the count, add one, store it back") are atomic and torn reads are
//! impossible. Exactly one thread is inside a guard's critical section at a
//! time.
//!
//! Two variants cover the two ownership shapes:
//!
//! - [`ValueGuard`] wraps a [`Copy`] value; operations copy it out or
//!   replace it wholesale through a transform.
//! - [`ObjectGuard`] wraps a shared mutable instance; operations run in
//!   place against it without copying.
//!
//! Both are constructed through [`wrap_value`] and [`wrap_instance`], which
//! select the variant at compile time from the type's classification.
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! let counter = Arc::new(uguard::wrap_value(0u32));
//! let threads: Vec<_> = (0..4)
//!     .map(|_| {
//!         let counter = counter.clone();
//!         thread::spawn(move || counter.set(|x| x + 1))
//!     })
//!     .collect();
//! for thread in threads {
//!     thread.join().unwrap();
//! }
//! assert_eq!(counter.get(), 4);
//! ```
//!
//! # Blocking and hazards
//!
//! Every operation may block the calling thread for an unbounded time while
//! waiting for the mutex; there is no timeout, try-acquire, or cancellation.
//! Once acquired, the critical section runs the supplied closure to
//! completion, so its duration equals the closure's execution time: a slow
//! or blocking closure stalls every other operation on the same guard. The
//! lock is not reentrant — calling back into the same guard from inside its
//! own closure deadlocks the calling thread against itself. Neither hazard
//! is detected at runtime.
//!
//! A closure that panics propagates the panic to the caller; the lock is
//! released first on every exit path, and the guard remains usable
//! afterward. [`ValueGuard::set`] leaves the stored value unchanged when its
//! transform panics; an [`ObjectGuard`] action that panics mid-mutation
//! leaves its partial mutation in place.

mod object;
mod raw;
mod value;

pub use object::ObjectGuard;
pub use value::ValueGuard;

/// Wraps a copyable value in a [`ValueGuard`].
pub fn wrap_value<T: Copy>(initial: T) -> ValueGuard<T> {
    ValueGuard::new(initial)
}

/// Wraps a shared mutable instance in an [`ObjectGuard`].
pub fn wrap_instance<T>(initial: T) -> ObjectGuard<T> {
    ObjectGuard::new(initial)
}
