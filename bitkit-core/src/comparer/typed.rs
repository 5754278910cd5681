//! Comparers pinned to one buffer representation
//!
//! Generic entry points cannot receive mismatched input. The object-level
//! entry points take `&dyn Any` and report [`BitkitError::TypeMismatch`]
//! when an operand is not the pinned representation.

use core::any::Any;
use core::cmp::Ordering;
use core::marker::PhantomData;

use super::buffer::BufferComparer;
use super::source::ByteSource;
use crate::traits::{MemCompare, NativeMemCompare};
use crate::{BitkitError, Result};

/// A [`BufferComparer`] specialized to representation `R`
pub struct TypedComparer<'c, R, M = NativeMemCompare> {
    comparer: &'c BufferComparer<M>,
    _repr: PhantomData<fn(&R)>,
}

impl<'c, R, M> Clone for TypedComparer<'c, R, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'c, R, M> Copy for TypedComparer<'c, R, M> {}

impl<'c, R, M> TypedComparer<'c, R, M>
where
    R: ByteSource + 'static,
    M: MemCompare,
{
    pub(crate) fn new(comparer: &'c BufferComparer<M>) -> Self {
        Self {
            comparer,
            _repr: PhantomData,
        }
    }

    /// Underlying comparer
    pub fn comparer(&self) -> &'c BufferComparer<M> {
        self.comparer
    }

    /// Order two buffers
    #[inline]
    pub fn compare(&self, x: &R, y: &R) -> Ordering {
        self.comparer.compare(x, y)
    }

    /// Equality of two buffers
    #[inline]
    pub fn equals(&self, x: &R, y: &R) -> bool {
        self.comparer.equals(x, y)
    }

    /// Hash code of a buffer
    #[inline]
    pub fn hash(&self, x: &R) -> i32 {
        self.comparer.hash(x)
    }

    /// Order two type-erased operands
    pub fn compare_object(&self, x: &dyn Any, y: &dyn Any) -> Result<Ordering> {
        Ok(self.compare(downcast::<R>(x)?, downcast::<R>(y)?))
    }

    /// Equality of two type-erased operands
    pub fn equals_object(&self, x: &dyn Any, y: &dyn Any) -> Result<bool> {
        Ok(self.equals(downcast::<R>(x)?, downcast::<R>(y)?))
    }

    /// Hash code of a type-erased operand
    pub fn hash_object(&self, x: &dyn Any) -> Result<i32> {
        Ok(self.hash(downcast::<R>(x)?))
    }
}

fn downcast<R: Any>(value: &dyn Any) -> Result<&R> {
    value
        .downcast_ref::<R>()
        .ok_or(BitkitError::TypeMismatch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparer::Fidelity;

    #[test]
    fn test_object_entry_points() {
        let comparer = BufferComparer::fnv(Fidelity::UNLIMITED);
        let typed = comparer.typed::<[u8; 3]>();

        let a = [1u8, 2, 3];
        let b = [1u8, 2, 4];
        assert_eq!(typed.compare_object(&a, &b), Ok(Ordering::Less));
        assert_eq!(typed.equals_object(&a, &a), Ok(true));
        assert_eq!(typed.hash_object(&a), Ok(typed.hash(&a)));
    }

    #[test]
    fn test_type_mismatch() {
        let comparer = BufferComparer::DEFAULT;
        let typed = comparer.typed::<[u8; 3]>();

        let a = [1u8, 2, 3];
        let wrong_len = [1u8, 2];
        let not_bytes = 42u32;
        assert_eq!(
            typed.compare_object(&a, &wrong_len),
            Err(BitkitError::TypeMismatch)
        );
        assert_eq!(
            typed.equals_object(&not_bytes, &a),
            Err(BitkitError::TypeMismatch)
        );
        assert_eq!(typed.hash_object(&"text"), Err(BitkitError::TypeMismatch));
    }
}
