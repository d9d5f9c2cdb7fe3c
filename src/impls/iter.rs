use std::cell::Ref;
use std::fmt;
use std::iter::FusedIterator;

use crate::error::{fatal, GenResult};
use crate::{Body, Generator};

/// End sentinel: a [`Cursor`] equals it once its generator is exhausted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct End;

/// All cursors of one generator share its single position.
pub struct Cursor<'g, T, B> {
    gen: &'g Generator<T, B>,
}

impl<T: 'static, B: Body> Generator<T, B> {
    pub fn begin(&self) -> Cursor<'_, T, B> {
        Cursor { gen: self }
    }

    pub fn end(&self) -> End {
        End
    }
}

impl<'g, T: 'static, B: Body> Cursor<'g, T, B> {
    /// # Panics
    ///
    /// Panics if the generator is exhausted.
    #[track_caller]
    pub fn get(&self) -> Ref<'g, T> {
        self.gen.current()
    }

    pub fn try_get(&self) -> GenResult<Ref<'g, T>> {
        self.gen.try_current()
    }

    /// # Panics
    ///
    /// Panics if the generator is exhausted.
    #[track_caller]
    pub fn advance(&mut self) -> &mut Self {
        self.gen.resume();
        self
    }

    pub fn is_end(&self) -> bool {
        self.gen.is_exhausted()
    }
}

impl<T, B> Clone for Cursor<'_, T, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, B> Copy for Cursor<'_, T, B> {}

impl<T: 'static, B: Body> PartialEq<End> for Cursor<'_, T, B> {
    fn eq(&self, _: &End) -> bool {
        self.is_end()
    }
}

impl<T, B> fmt::Debug for Cursor<'_, T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(self.gen).finish()
    }
}

fn next_or_die<T: 'static, B: Body>(gen: &Generator<T, B>) -> Option<T> {
    match gen.try_next() {
        Ok(value) => value,
        Err(err) => fatal(err),
    }
}

impl<T: 'static, B: Body> Iterator for Cursor<'_, T, B> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        next_or_die(self.gen)
    }
}

impl<T: 'static, B: Body> FusedIterator for Cursor<'_, T, B> {}

impl<T: 'static, B: Body> Iterator for Generator<T, B> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        next_or_die(self)
    }
}

impl<T: 'static, B: Body> FusedIterator for Generator<T, B> {}

impl<'g, T: 'static, B: Body> IntoIterator for &'g Generator<T, B> {
    type Item = T;
    type IntoIter = Cursor<'g, T, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}
