use std::fmt;
use std::ops::ControlFlow;

use crate::{Body, Generator, Yielder};

/// A [`Body`] made from a closure: `Continue` suspends, `Break` completes.
pub struct FnBody<F> {
    f: F,
    done: bool,
}

impl<F> Body for FnBody<F>
where
    F: FnMut() -> ControlFlow<()>,
{
    fn step(&mut self) {
        if (self.f)().is_break() {
            self.done = true;
        }
    }

    fn is_complete(&self) -> bool {
        self.done
    }
}

impl<F> fmt::Debug for FnBody<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnBody").field("done", &self.done).finish()
    }
}

pub fn from_fn<F>(f: F) -> FnBody<F>
where
    F: FnMut() -> ControlFlow<()>,
{
    FnBody { f, done: false }
}

pub fn generator<T, B>(body: B) -> Generator<T, B>
where
    T: 'static,
    B: Body,
{
    Generator::new(body)
}

pub fn generator_with<T, B, F>(f: F) -> Generator<T, B>
where
    T: 'static,
    B: Body,
    F: FnOnce(Yielder<T>) -> B,
{
    Generator::with(f)
}
