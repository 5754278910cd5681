//! Buffer representations the comparers accept
//!
//! A [`ByteSource`] knows how to iterate its bytes, may know its length up
//! front, and may expose a contiguous view. The comparers take the native
//! compare path only when both operands expose a contiguous view.

use core::iter::{Copied, Flatten};
use core::slice;

use crate::validation::validate_window;
use crate::Result;

/// Something that holds an ordered run of bytes
pub trait ByteSource {
    /// Forward iterator over the bytes
    type Bytes<'a>: Iterator<Item = u8>
    where
        Self: 'a;

    /// Iterate the bytes front to back
    fn bytes(&self) -> Self::Bytes<'_>;

    /// Length in bytes, when known without iterating
    fn byte_len(&self) -> Option<usize>;

    /// Contiguous view of the bytes, when the representation has one
    fn as_contiguous(&self) -> Option<&[u8]> {
        None
    }

    /// Whether this is an absent buffer (orders before every present one)
    fn is_absent(&self) -> bool {
        false
    }
}

impl ByteSource for [u8] {
    type Bytes<'a> = Copied<slice::Iter<'a, u8>>;

    #[inline]
    fn bytes(&self) -> Self::Bytes<'_> {
        self.iter().copied()
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        Some(self.len())
    }

    #[inline]
    fn as_contiguous(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl<const N: usize> ByteSource for [u8; N] {
    type Bytes<'a> = Copied<slice::Iter<'a, u8>>;

    #[inline]
    fn bytes(&self) -> Self::Bytes<'_> {
        self.iter().copied()
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        Some(N)
    }

    #[inline]
    fn as_contiguous(&self) -> Option<&[u8]> {
        Some(self.as_slice())
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &S {
    type Bytes<'a> = S::Bytes<'a> where Self: 'a;

    #[inline]
    fn bytes(&self) -> Self::Bytes<'_> {
        (**self).bytes()
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        (**self).byte_len()
    }

    #[inline]
    fn as_contiguous(&self) -> Option<&[u8]> {
        (**self).as_contiguous()
    }

    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

/// `None` is the absent buffer
impl<S: ByteSource> ByteSource for Option<S> {
    type Bytes<'a> = Flatten<core::option::IntoIter<S::Bytes<'a>>> where Self: 'a;

    #[inline]
    fn bytes(&self) -> Self::Bytes<'_> {
        self.as_ref().map(|s| s.bytes()).into_iter().flatten()
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        match self {
            Some(s) => s.byte_len(),
            None => Some(0),
        }
    }

    #[inline]
    fn as_contiguous(&self) -> Option<&[u8]> {
        self.as_ref().and_then(|s| s.as_contiguous())
    }

    #[inline]
    fn is_absent(&self) -> bool {
        match self {
            Some(s) => s.is_absent(),
            None => true,
        }
    }
}

/// A `(offset, count)` window over a backing byte array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    array: &'a [u8],
    offset: usize,
    count: usize,
}

impl<'a> Segment<'a> {
    /// Window `array[offset..offset + count]`, validated against the array
    pub fn new(array: &'a [u8], offset: usize, count: usize) -> Result<Self> {
        validate_window(array.len(), offset, count)?;
        Ok(Self {
            array,
            offset,
            count,
        })
    }

    /// Window covering the whole array
    pub fn whole(array: &'a [u8]) -> Self {
        Self {
            array,
            offset: 0,
            count: array.len(),
        }
    }

    /// Backing array
    pub fn array(&self) -> &'a [u8] {
        self.array
    }

    /// Start of the window within the backing array
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bytes in the window
    pub fn count(&self) -> usize {
        self.count
    }

    /// The windowed bytes
    pub fn as_slice(&self) -> &'a [u8] {
        &self.array[self.offset..self.offset + self.count]
    }
}

impl<'s> ByteSource for Segment<'s> {
    type Bytes<'a> = Copied<slice::Iter<'a, u8>> where Self: 'a;

    #[inline]
    fn bytes(&self) -> Self::Bytes<'_> {
        self.as_slice().iter().copied()
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        Some(self.count)
    }

    #[inline]
    fn as_contiguous(&self) -> Option<&[u8]> {
        Some(self.as_slice())
    }
}

/// Byte view over a slice of plain-old-data values
///
/// The bytes are the values' in-memory representation, so results depend
/// on host endianness for multi-byte `T`.
#[derive(Debug, Clone, Copy)]
pub struct PodView<'a, T: bytemuck::Pod> {
    values: &'a [T],
}

impl<'a, T: bytemuck::Pod> PodView<'a, T> {
    /// View `values` as bytes
    pub fn new(values: &'a [T]) -> Self {
        Self { values }
    }

    /// The underlying bytes
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.values)
    }
}

impl<'v, T: bytemuck::Pod> ByteSource for PodView<'v, T> {
    type Bytes<'a> = Copied<slice::Iter<'a, u8>> where Self: 'a;

    #[inline]
    fn bytes(&self) -> Self::Bytes<'_> {
        self.as_bytes().iter().copied()
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        Some(core::mem::size_of_val(self.values))
    }

    #[inline]
    fn as_contiguous(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

/// Arbitrary forward-only byte sequence
///
/// The iterator is cloned for every pass, so it should be cheap to clone
/// (an adapter over borrowed data, a range, and so on).
#[derive(Debug, Clone)]
pub struct Sequence<I> {
    iter: I,
    len: Option<usize>,
}

impl<I> Sequence<I>
where
    I: Iterator<Item = u8> + Clone,
{
    /// Sequence of unknown length
    pub fn new(iter: I) -> Self {
        Self { iter, len: None }
    }
}

impl<I> Sequence<I>
where
    I: ExactSizeIterator<Item = u8> + Clone,
{
    /// Sequence whose length is known up front
    pub fn exact(iter: I) -> Self {
        let len = iter.len();
        Self {
            iter,
            len: Some(len),
        }
    }
}

impl<I> ByteSource for Sequence<I>
where
    I: Iterator<Item = u8> + Clone,
{
    type Bytes<'a> = I where Self: 'a;

    #[inline]
    fn bytes(&self) -> Self::Bytes<'_> {
        self.iter.clone()
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        self.len
    }
}

#[cfg(feature = "alloc")]
mod owned {
    use super::*;
    use alloc::boxed::Box;
    use alloc::collections::{vec_deque, VecDeque};
    use alloc::vec::Vec;

    impl ByteSource for Vec<u8> {
        type Bytes<'a> = Copied<slice::Iter<'a, u8>>;

        #[inline]
        fn bytes(&self) -> Self::Bytes<'_> {
            self.iter().copied()
        }

        #[inline]
        fn byte_len(&self) -> Option<usize> {
            Some(self.len())
        }

        #[inline]
        fn as_contiguous(&self) -> Option<&[u8]> {
            Some(self.as_slice())
        }
    }

    impl ByteSource for Box<[u8]> {
        type Bytes<'a> = Copied<slice::Iter<'a, u8>>;

        #[inline]
        fn bytes(&self) -> Self::Bytes<'_> {
            self.iter().copied()
        }

        #[inline]
        fn byte_len(&self) -> Option<usize> {
            Some(self.len())
        }

        #[inline]
        fn as_contiguous(&self) -> Option<&[u8]> {
            Some(&self[..])
        }
    }

    /// Ring buffers are contiguous only while they have not wrapped
    impl ByteSource for VecDeque<u8> {
        type Bytes<'a> = Copied<vec_deque::Iter<'a, u8>>;

        #[inline]
        fn bytes(&self) -> Self::Bytes<'_> {
            self.iter().copied()
        }

        #[inline]
        fn byte_len(&self) -> Option<usize> {
            Some(self.len())
        }

        #[inline]
        fn as_contiguous(&self) -> Option<&[u8]> {
            match self.as_slices() {
                (front, []) => Some(front),
                ([], back) => Some(back),
                _ => None,
            }
        }
    }
}
