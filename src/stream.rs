//! Iterator adapters for masking values as they arrive.
//!
//! Handy for piping lines from a file or socket through a mask without
//! collecting them first.
//!
//! # Example
//!
//! ```
//! use keymask::stream::FormatExt;
//! use keymask::FormatId;
//!
//! let lines = "4111111111111111\n5500 0000 0000 0004\n";
//! let masked: Vec<String> = lines.lines().mask_with(FormatId::CreditCard).collect();
//!
//! assert_eq!(masked, vec!["4111 1111 1111 1111", "5500 0000 0000 0004"]);
//! ```

use crate::engine::format;
use crate::FormatId;

/// Masks each value of the wrapped iterator.
///
/// Created by [`FormatExt::mask_with`].
#[derive(Debug, Clone)]
pub struct MaskStream<I> {
    inner: I,
    id: FormatId,
}

impl<I> MaskStream<I> {
    /// Wraps `inner`.
    #[inline]
    pub fn new(inner: I, id: FormatId) -> Self {
        Self { inner, id }
    }

    /// Consumes the stream and returns the inner iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, S> Iterator for MaskStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = String;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| format(self.id, s.as_ref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, S> ExactSizeIterator for MaskStream<I>
where
    I: ExactSizeIterator<Item = S>,
    S: AsRef<str>,
{
}

impl<I, S> DoubleEndedIterator for MaskStream<I>
where
    I: DoubleEndedIterator<Item = S>,
    S: AsRef<str>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|s| format(self.id, s.as_ref()))
    }
}

/// Masks each value and yields it with its position.
///
/// Created by [`FormatExt::mask_indexed`].
#[derive(Debug, Clone)]
pub struct IndexedMaskStream<I> {
    inner: I,
    id: FormatId,
    index: usize,
}

impl<I> IndexedMaskStream<I> {
    /// Wraps `inner`.
    #[inline]
    pub fn new(inner: I, id: FormatId) -> Self {
        Self { inner, id, index: 0 }
    }
}

impl<I, S> Iterator for IndexedMaskStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = (usize, String);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| {
            let masked = format(self.id, s.as_ref());
            let index = self.index;
            self.index += 1;
            (index, masked)
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Adds masking to any iterator over string-like values.
pub trait FormatExt: Iterator + Sized {
    /// Masks each value with `id`.
    fn mask_with(self, id: FormatId) -> MaskStream<Self>;

    /// Masks each value with `id`, yielding `(index, masked)`.
    ///
    /// # Example
    ///
    /// ```
    /// use keymask::stream::FormatExt;
    /// use keymask::FormatId;
    ///
    /// let cards = ["12345678901", "1234"];
    /// for (idx, masked) in cards.iter().mask_indexed(FormatId::Cpf) {
    ///     println!("row {}: {}", idx, masked);
    /// }
    /// ```
    fn mask_indexed(self, id: FormatId) -> IndexedMaskStream<Self>;
}

impl<I: Iterator + Sized> FormatExt for I {
    #[inline]
    fn mask_with(self, id: FormatId) -> MaskStream<Self> {
        MaskStream::new(self, id)
    }

    #[inline]
    fn mask_indexed(self, id: FormatId) -> IndexedMaskStream<Self> {
        IndexedMaskStream::new(self, id)
    }
}
