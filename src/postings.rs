use crate::error::CodecError;
use crate::SeriesRef;

/// Ordered sequence of series references.
///
/// The codec consumes and produces postings through this trait rather than
/// through materialized vectors, so blocks can be encoded straight from any
/// index structure and decoded blocks can be intersected or merged lazily.
pub trait Postings {
    /// Advances to the next entry. Returns false when the sequence is
    /// exhausted or has failed; [`Postings::last_error`] tells which.
    fn advance(&mut self) -> bool;

    /// The entry the cursor is positioned on. Only meaningful after a
    /// successful [`Postings::advance`].
    fn current(&self) -> SeriesRef;

    /// Advances until the current entry is `>= target`. Returns false when
    /// the sequence exhausts (or fails) first.
    ///
    /// A cursor already positioned at or past `target` is left untouched.
    /// The scan is forward only and linear.
    fn seek_to(&mut self, target: SeriesRef) -> bool {
        if self.current() >= target {
            return true;
        }
        while self.advance() {
            if self.current() >= target {
                return true;
            }
        }
        false
    }

    /// The error that stopped the sequence, if any. Sticky: once set, every
    /// later call reports the same error.
    fn last_error(&self) -> Option<&CodecError>;
}

impl<P: Postings + ?Sized> Postings for &mut P {
    #[inline]
    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    #[inline]
    fn current(&self) -> SeriesRef {
        (**self).current()
    }

    #[inline]
    fn seek_to(&mut self, target: SeriesRef) -> bool {
        (**self).seek_to(target)
    }

    #[inline]
    fn last_error(&self) -> Option<&CodecError> {
        (**self).last_error()
    }
}

impl<P: Postings + ?Sized> Postings for Box<P> {
    #[inline]
    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    #[inline]
    fn current(&self) -> SeriesRef {
        (**self).current()
    }

    #[inline]
    fn seek_to(&mut self, target: SeriesRef) -> bool {
        (**self).seek_to(target)
    }

    #[inline]
    fn last_error(&self) -> Option<&CodecError> {
        (**self).last_error()
    }
}

/// [`Postings`] over an in-memory, already sorted list.
#[derive(Debug, Clone)]
pub struct ListPostings<'a> {
    list: &'a [SeriesRef],
    cur: SeriesRef,
}

impl<'a> ListPostings<'a> {
    pub fn new(list: &'a [SeriesRef]) -> Self {
        Self { list, cur: 0 }
    }
}

impl Postings for ListPostings<'_> {
    #[inline]
    fn advance(&mut self) -> bool {
        match self.list.split_first() {
            Some((&first, rest)) => {
                self.cur = first;
                self.list = rest;
                true
            }
            None => false,
        }
    }

    #[inline]
    fn current(&self) -> SeriesRef {
        self.cur
    }

    fn last_error(&self) -> Option<&CodecError> {
        None
    }
}
