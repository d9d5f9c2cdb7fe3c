//! Thread-scoped yield channel. A generator's channel is current only for the
//! duration of one of its steps.

use std::any::{type_name, Any, TypeId};
use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{GenError, GenResult};

pub(crate) type Slot<T> = RefCell<Option<T>>;

#[derive(Clone)]
pub(crate) struct Channel {
    marker: TypeId,
    type_name: &'static str,
    slot: Rc<dyn Any>,
}

thread_local! {
    static CURRENT: RefCell<Option<Channel>> = const { RefCell::new(None) };
}

impl Channel {
    pub(crate) fn new<T: 'static>(slot: Rc<Slot<T>>) -> Self {
        Self {
            marker: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            slot,
        }
    }

    pub(crate) fn enter(self) -> Scope {
        let prev = CURRENT.with(|current| current.replace(Some(self)));
        Scope { prev }
    }
}

#[must_use]
pub(crate) struct Scope {
    prev: Option<Channel>,
}

impl Drop for Scope {
    fn drop(&mut self) {
        let prev = self.prev.take();
        let _ = CURRENT.try_with(|current| *current.borrow_mut() = prev);
    }
}

pub(crate) fn fill<T>(slot: &Slot<T>, value: T) -> GenResult<()> {
    let mut slot = slot.borrow_mut();
    if slot.is_some() {
        return Err(GenError::AlreadyYielded);
    }
    *slot = Some(value);
    Ok(())
}

pub fn current_type_marker() -> Option<TypeId> {
    CURRENT.with(|current| current.borrow().as_ref().map(|c| c.marker))
}

pub fn has_active_generator() -> bool {
    current_type_marker().is_some()
}

pub(crate) fn current_result_slot<T: 'static>() -> GenResult<Rc<Slot<T>>> {
    CURRENT.with(|current| {
        let current = current.borrow();
        let channel = current.as_ref().ok_or(GenError::NoActiveGenerator)?;
        let mismatch = GenError::TypeMismatch {
            expected: channel.type_name,
            found: type_name::<T>(),
        };
        if channel.marker != TypeId::of::<T>() {
            return Err(mismatch);
        }
        Rc::clone(&channel.slot)
            .downcast::<Slot<T>>()
            .map_err(|_| mismatch)
    })
}
