//! Masking many values at once.
//!
//! Useful for normalizing an imported column of phone numbers or IDs. With
//! the `parallel` feature the work is spread over a rayon thread pool; the
//! engine holds no state, so no locking is involved.

use crate::engine::format;
use crate::FormatId;

/// Masks batches of values with one format.
///
/// # Example
///
/// ```
/// use keymask::{BatchFormatter, FormatId};
///
/// let batch = BatchFormatter::new(FormatId::Cep);
/// let masked = batch.format_all(&["01310100", "20040-020", "123"]);
/// assert_eq!(masked, vec!["01310-100", "20040-020", "123"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchFormatter {
    id: FormatId,
}

impl BatchFormatter {
    /// Creates a batch formatter for `id`.
    #[inline]
    pub fn new(id: FormatId) -> Self {
        Self { id }
    }

    /// The format applied to every value.
    #[inline]
    pub fn format_id(&self) -> FormatId {
        self.id
    }

    /// Masks every value, in order.
    pub fn format_all<S: AsRef<str>>(&self, values: &[S]) -> Vec<String> {
        format_batch(self.id, values)
    }

    /// Masks every value and pairs it with its input.
    pub fn format_pairs<'a, S: AsRef<str>>(&self, values: &'a [S]) -> Vec<(&'a str, String)> {
        values
            .iter()
            .map(|v| (v.as_ref(), format(self.id, v.as_ref())))
            .collect()
    }

    /// Masks values in parallel using rayon.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn format_parallel<S: AsRef<str> + Sync>(&self, values: &[S]) -> Vec<String> {
        format_batch_parallel(self.id, values)
    }
}

/// Masks a slice of values without creating a [`BatchFormatter`].
///
/// # Example
///
/// ```
/// use keymask::batch::format_batch;
/// use keymask::FormatId;
///
/// let masked = format_batch(FormatId::Ssn, &["123456789", "98765"]);
/// assert_eq!(masked, vec!["123-45-6789", "987-65"]);
/// ```
#[inline]
pub fn format_batch<S: AsRef<str>>(id: FormatId, values: &[S]) -> Vec<String> {
    values.iter().map(|v| format(id, v.as_ref())).collect()
}

/// Masks a slice of values in parallel. Output order matches input order.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn format_batch_parallel<S: AsRef<str> + Sync>(id: FormatId, values: &[S]) -> Vec<String> {
    use rayon::prelude::*;
    values.par_iter().map(|v| format(id, v.as_ref())).collect()
}

/// Counts values that already equal their own mask.
///
/// # Returns
///
/// Tuple of (already_masked, changed)
///
/// # Example
///
/// ```
/// use keymask::batch::count_masked;
/// use keymask::FormatId;
///
/// let (masked, changed) = count_masked(FormatId::Cpf, &["123.456.789-01", "12345678901"]);
/// assert_eq!((masked, changed), (1, 1));
/// ```
pub fn count_masked<S: AsRef<str>>(id: FormatId, values: &[S]) -> (usize, usize) {
    let masked = values
        .iter()
        .filter(|v| format(id, v.as_ref()) == v.as_ref())
        .count();
    (masked, values.len() - masked)
}
