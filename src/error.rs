use thiserror::Error;

pub type GenResult<T> = Result<T, GenError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenError {
    #[error("generator is exhausted")]
    Exhausted,

    #[error("yield of `{found}` inside a generator of `{expected}`")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("yield called while no generator is being resumed")]
    NoActiveGenerator,

    /// The last step suspended without yielding anything.
    #[error("generator suspended without yielding a value")]
    MissingValue,

    #[error("generator yielded twice in one step")]
    AlreadyYielded,
}

#[cold]
#[track_caller]
pub(crate) fn fatal(err: GenError) -> ! {
    log::error!("{}, aborting.", err);
    panic!("{}", err)
}
