//! Partitioning of a statement list into request-sized batches.

use std::iter::FusedIterator;
use std::slice::Chunks;

use crate::error::{ConnectorError, Result};

/// Split `items` into contiguous batches of at most `batch_size` elements.
///
/// With `batch_size == None` exactly one batch holding all of `items` is
/// produced, even when `items` is empty. With `Some(n)` the batches are
/// `items[0..n]`, `items[n..2n]`, ... and only the last one may be shorter;
/// an empty input then yields no batches at all.
///
/// A batch size of zero is rejected up front with
/// [`InvalidConfiguration`](ConnectorError::InvalidConfiguration).
///
/// The returned iterator is lazy and borrows `items`; clone it (or call this
/// function again) to start over.
///
/// ```rust
/// # use connector_core::batch::batches;
/// let items = [1, 2, 3, 4, 5];
/// let parts: Vec<&[i32]> = batches(&items, Some(2)).unwrap().collect();
/// assert_eq!(parts, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
///
/// let whole: Vec<&[i32]> = batches(&items, None).unwrap().collect();
/// assert_eq!(whole, vec![&items[..]]);
/// ```
pub fn batches<T>(items: &[T], batch_size: Option<usize>) -> Result<Batches<'_, T>> {
    let inner = match batch_size {
        None => Inner::Whole(Some(items)),
        Some(0) => {
            return Err(ConnectorError::invalid_configuration(
                "batch size must be >= 1",
            ))
        }
        Some(n) => Inner::Chunked(items.chunks(n)),
    };
    Ok(Batches { inner })
}

/// Lazy sequence of batches, see [`batches`].
#[derive(Debug)]
pub struct Batches<'a, T> {
    inner: Inner<'a, T>,
}

#[derive(Debug)]
enum Inner<'a, T> {
    Whole(Option<&'a [T]>),
    Chunked(Chunks<'a, T>),
}

// Manual impl: cloning only copies slice references, so `T: Clone` is not needed.
impl<T> Clone for Batches<'_, T> {
    fn clone(&self) -> Self {
        let inner = match &self.inner {
            Inner::Whole(slot) => Inner::Whole(*slot),
            Inner::Chunked(chunks) => Inner::Chunked(chunks.clone()),
        };
        Self { inner }
    }
}

impl<'a, T> Iterator for Batches<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Whole(slot) => slot.take(),
            Inner::Chunked(chunks) => chunks.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Inner::Whole(slot) => {
                let n = usize::from(slot.is_some());
                (n, Some(n))
            }
            Inner::Chunked(chunks) => chunks.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for Batches<'_, T> {}

impl<T> FusedIterator for Batches<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_hint_matches_batch_count() {
        let items = [0u8; 7];
        assert_eq!(batches(&items, Some(3)).unwrap().len(), 3);
        assert_eq!(batches(&items, None).unwrap().len(), 1);
        assert_eq!(batches::<u8>(&[], Some(3)).unwrap().len(), 0);
    }

    #[test]
    fn clone_restarts_from_the_same_position() {
        let items = [1, 2, 3];
        let mut it = batches(&items, Some(1)).unwrap();
        let snapshot = it.clone();
        assert_eq!(it.next(), Some(&[1][..]));
        assert_eq!(snapshot.count(), 3);
    }
}
