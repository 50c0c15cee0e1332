//! Shared heap handles
//!
//! Every heap value in a graph is reached through a [`GcRef`]. Cloning a
//! handle shares the allocation; two handles are the *same* value only when
//! they point at the same allocation. Deep copy and structural equality both
//! key their bookkeeping on that identity, never on contents.
//!
//! Handles are reference counted. A cyclic graph keeps itself alive until one
//! of its edges is cleared (see [`JsObject::clear`](crate::object::JsObject::clear)
//! and [`JsArray::clear`](crate::array::JsArray::clear)).

use std::fmt;
use std::sync::Arc;

/// Handle to a shared heap value
pub struct GcRef<T: ?Sized> {
    inner: Arc<T>,
}

impl<T> GcRef<T> {
    /// Allocate a new value and return a handle to it
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl<T: ?Sized> GcRef<T> {
    /// Whether both handles point at the same allocation
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// Address of the allocation, usable as an identity key
    #[inline]
    pub fn addr(&self) -> usize {
        Arc::as_ptr(&self.inner) as *const () as usize
    }

    /// Number of live handles to this allocation
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl<T: ?Sized> Clone for GcRef<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> std::ops::Deref for GcRef<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

// Contents may be cyclic, so Debug only shows the address.
impl<T: ?Sized> fmt::Debug for GcRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GcRef({:#x})", self.addr())
    }
}
