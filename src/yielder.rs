use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::channel::{self, Slot};
use crate::error::{fatal, GenResult};

/// # Panics
///
/// Panics when no generator is being resumed, when its element type is not
/// `T`, or when the current step already yielded.
#[track_caller]
pub fn yield_<T: 'static>(value: T) {
    if let Err(err) = try_yield(value) {
        fatal(err)
    }
}

pub fn try_yield<T: 'static>(value: T) -> GenResult<()> {
    let slot = channel::current_result_slot::<T>()?;
    channel::fill(&slot, value)
}

pub struct Yielder<T> {
    target: Target<T>,
}

enum Target<T> {
    Ambient(PhantomData<fn(T)>),
    Bound(Rc<Slot<T>>),
}

impl<T: 'static> Yielder<T> {
    pub fn new() -> Self {
        Self {
            target: Target::Ambient(PhantomData),
        }
    }

    pub(crate) fn bound(slot: Rc<Slot<T>>) -> Self {
        Self {
            target: Target::Bound(slot),
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.target, Target::Bound(_))
    }

    #[track_caller]
    pub fn yield_(&mut self, value: T) {
        if let Err(err) = self.try_yield(value) {
            fatal(err)
        }
    }

    pub fn try_yield(&mut self, value: T) -> GenResult<()> {
        match &self.target {
            Target::Ambient(_) => try_yield(value),
            Target::Bound(slot) => channel::fill(slot, value),
        }
    }
}

impl<T: 'static> Default for Yielder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Yielder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = match self.target {
            Target::Ambient(_) => "ambient",
            Target::Bound(_) => "bound",
        };
        f.debug_struct("Yielder").field("target", &target).finish()
    }
}
