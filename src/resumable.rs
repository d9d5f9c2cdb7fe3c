use crate::error::{fatal, GenError, GenResult};

/// A step function, resumed from where the previous step stopped.
pub trait Body {
    fn step(&mut self);

    fn is_complete(&self) -> bool;
}

impl<B: Body + ?Sized> Body for Box<B> {
    fn step(&mut self) {
        (**self).step()
    }

    fn is_complete(&self) -> bool {
        (**self).is_complete()
    }
}

impl<B: Body + ?Sized> Body for &mut B {
    fn step(&mut self) {
        (**self).step()
    }

    fn is_complete(&self) -> bool {
        (**self).is_complete()
    }
}

#[derive(Debug)]
pub struct Resumable<B> {
    body: B,
}

impl<B: Body> Resumable<B> {
    pub fn new(body: B) -> Self {
        Self { body }
    }

    /// # Panics
    ///
    /// Panics if the body has already completed.
    #[track_caller]
    pub fn resume(&mut self) {
        if let Err(err) = self.try_resume() {
            fatal(err)
        }
    }

    pub fn try_resume(&mut self) -> GenResult<()> {
        if self.ready() {
            return Err(GenError::Exhausted);
        }
        self.body.step();
        Ok(())
    }

    pub fn ready(&self) -> bool {
        self.body.is_complete()
    }

    // bodies only hand out values through yields
    pub fn result(&self) {}
}

impl<B> Resumable<B> {
    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn into_inner(self) -> B {
        self.body
    }
}

impl<B: Body> From<B> for Resumable<B> {
    fn from(body: B) -> Self {
        Self::new(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown {
        left: u32,
        steps: u32,
    }

    impl Body for Countdown {
        fn step(&mut self) {
            self.steps += 1;
            self.left = self.left.saturating_sub(1);
        }

        fn is_complete(&self) -> bool {
            self.left == 0
        }
    }

    #[test]
    fn resume_runs_one_step_at_a_time() {
        let mut r = Resumable::new(Countdown { left: 3, steps: 0 });
        assert!(!r.ready());
        r.resume();
        assert_eq!(r.body().steps, 1);
        r.resume();
        assert!(!r.ready());
        r.resume();
        assert!(r.ready());
        assert_eq!(r.into_inner().steps, 3);
    }

    #[test]
    fn try_resume_after_completion_is_rejected() {
        let mut r = Resumable::from(Countdown { left: 1, steps: 0 });
        assert_eq!(r.try_resume(), Ok(()));
        assert_eq!(r.try_resume(), Err(GenError::Exhausted));
        assert_eq!(r.body().steps, 1);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn resume_after_completion_panics() {
        let mut r = Resumable::new(Countdown { left: 0, steps: 0 });
        r.resume();
    }

    #[test]
    fn boxed_body_is_a_body() {
        let body: Box<dyn Body> = Box::new(Countdown { left: 2, steps: 0 });
        let mut r = Resumable::new(body);
        r.resume();
        r.resume();
        assert!(r.ready());
        r.result();
    }
}
