use std::rc::Rc;

use crate::channel::{Channel, Slot};
use crate::resumable::Body;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Stage {
    Uninit,
    Running,
    Complete,
}

/// Outer body of a generator: installs the generator's channel around every
/// step and drives the user body one inner step per outer step.
pub(crate) struct EntryPoint<T, B> {
    stage: Stage,
    slot: Rc<Slot<T>>,
    body: B,
}

impl<T, B> EntryPoint<T, B> {
    pub(crate) fn new(slot: Rc<Slot<T>>, body: B) -> Self {
        Self {
            stage: Stage::Uninit,
            slot,
            body,
        }
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.stage == Stage::Complete
    }
}

impl<T: 'static, B: Body> Body for EntryPoint<T, B> {
    fn step(&mut self) {
        match self.stage {
            Stage::Uninit => {
                log::trace!("entering generator body of `{}`", std::any::type_name::<T>());
                self.stage = Stage::Running;
            }
            Stage::Running => {}
            Stage::Complete => return,
        }

        // a value is only readable until the next resume
        self.slot.borrow_mut().take();

        if !self.body.is_complete() {
            let _scope = Channel::new(Rc::clone(&self.slot)).enter();
            self.body.step();
        }

        // a final yield is handed out first, completion follows on the next step
        if self.body.is_complete() && self.slot.borrow().is_none() {
            log::trace!("generator body of `{}` completed", std::any::type_name::<T>());
            self.stage = Stage::Complete;
        }
    }

    fn is_complete(&self) -> bool {
        self.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yielder::yield_;

    struct Upto {
        next: u8,
        end: u8,
    }

    impl Body for Upto {
        fn step(&mut self) {
            if self.next < self.end {
                yield_(self.next);
                self.next += 1;
            } else {
                self.end = 0;
                self.next = 0;
            }
        }

        fn is_complete(&self) -> bool {
            self.end == 0
        }
    }

    #[test]
    fn walks_uninit_running_complete() {
        let slot: Rc<Slot<u8>> = Rc::default();
        let mut entry = EntryPoint::new(Rc::clone(&slot), Upto { next: 1, end: 3 });
        assert_eq!(entry.stage, Stage::Uninit);

        entry.step();
        assert_eq!(entry.stage, Stage::Running);
        assert_eq!(*slot.borrow(), Some(1));

        entry.step();
        assert_eq!(*slot.borrow(), Some(2));

        entry.step();
        assert!(entry.is_complete());
        assert_eq!(*slot.borrow(), None);
    }

    #[test]
    fn value_yielded_on_the_last_step_is_kept() {
        struct Last(bool);

        impl Body for Last {
            fn step(&mut self) {
                yield_(5u8);
                self.0 = true;
            }

            fn is_complete(&self) -> bool {
                self.0
            }
        }

        let slot: Rc<Slot<u8>> = Rc::default();
        let mut entry = EntryPoint::new(Rc::clone(&slot), Last(false));
        entry.step();
        assert!(!entry.is_complete());
        assert_eq!(*slot.borrow(), Some(5));

        entry.step();
        assert!(entry.is_complete());
        assert_eq!(*slot.borrow(), None);
    }

    #[test]
    fn complete_body_is_never_stepped() {
        let slot: Rc<Slot<u8>> = Rc::default();
        let mut entry = EntryPoint::new(slot, Upto { next: 9, end: 0 });
        entry.step();
        assert!(entry.is_complete());
        assert_eq!(entry.body.next, 9);
    }
}
