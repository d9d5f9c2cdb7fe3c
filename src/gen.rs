use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::channel::Slot;
use crate::entry::EntryPoint;
use crate::error::{fatal, GenError, GenResult};
use crate::resumable::{Body, Resumable};
use crate::yielder::Yielder;

pub struct Generator<T, B> {
    slot: Rc<Slot<T>>,
    resumable: RefCell<Resumable<EntryPoint<T, B>>>,
}

impl<T: 'static, B: Body> Generator<T, B> {
    pub fn new(body: B) -> Self {
        Self::start(Rc::default(), body)
    }

    /// The body gets a [`Yielder`] bound to this generator.
    pub fn with<F>(f: F) -> Self
    where
        F: FnOnce(Yielder<T>) -> B,
    {
        let slot: Rc<Slot<T>> = Rc::default();
        let body = f(Yielder::bound(Rc::clone(&slot)));
        Self::start(slot, body)
    }

    fn start(slot: Rc<Slot<T>>, body: B) -> Self {
        let mut resumable = Resumable::new(EntryPoint::new(Rc::clone(&slot), body));
        resumable.resume();
        log::debug!(
            "generator of `{}` started, exhausted: {}",
            std::any::type_name::<T>(),
            resumable.ready()
        );

        Generator {
            slot,
            resumable: RefCell::new(resumable),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.resumable.borrow().ready()
    }

    /// # Panics
    ///
    /// Panics if the generator is already exhausted.
    #[track_caller]
    pub fn resume(&self) {
        if let Err(err) = self.try_resume() {
            fatal(err)
        }
    }

    pub fn try_resume(&self) -> GenResult<()> {
        self.resumable.borrow_mut().try_resume()
    }

    /// # Panics
    ///
    /// Panics if the generator is exhausted or the last step yielded nothing.
    #[track_caller]
    pub fn current(&self) -> Ref<'_, T> {
        match self.try_current() {
            Ok(value) => value,
            Err(err) => fatal(err),
        }
    }

    pub fn try_current(&self) -> GenResult<Ref<'_, T>> {
        if self.is_exhausted() {
            return Err(GenError::Exhausted);
        }
        Ref::filter_map(self.slot.borrow(), Option::as_ref).map_err(|_| GenError::MissingValue)
    }

    pub(crate) fn try_next(&self) -> GenResult<Option<T>> {
        if self.is_exhausted() {
            return Ok(None);
        }
        let value = self.slot.borrow_mut().take().ok_or(GenError::MissingValue)?;
        self.try_resume()?;
        Ok(Some(value))
    }
}

impl<T, B> fmt::Debug for Generator<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let exhausted = self
            .resumable
            .try_borrow()
            .map(|r| r.body().is_finished())
            .ok();
        f.debug_struct("Generator")
            .field("element", &std::any::type_name::<T>())
            .field("exhausted", &exhausted)
            .finish()
    }
}
