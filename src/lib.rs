//! Stackless generators driven one step at a time.
//!
//! ```
//! use std::ops::ControlFlow;
//! use resumable_gen::{from_fn, generator, yield_};
//!
//! let mut chars = "Hi".chars();
//! let gen = generator::<char, _>(from_fn(move || match chars.next() {
//!     Some(c) => {
//!         yield_(c);
//!         ControlFlow::Continue(())
//!     }
//!     None => ControlFlow::Break(()),
//! }));
//! assert_eq!(gen.collect::<String>(), "Hi");
//! ```

mod channel;
mod entry;
mod error;
mod gen;
mod impls;
mod resumable;
mod yielder;

pub use channel::{current_type_marker, has_active_generator};
pub use error::{GenError, GenResult};
pub use gen::Generator;
pub use impls::helper::{from_fn, generator, generator_with, FnBody};
pub use impls::iter::{Cursor, End};
pub use resumable::{Body, Resumable};
pub use yielder::{try_yield, yield_, Yielder};
