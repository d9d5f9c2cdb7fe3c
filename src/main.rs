use std::ffi::CStr;
use std::io::{self, Write};

use resumable_gen::{generator, Body, Generator, Yielder};

/// Walks a NUL-terminated byte string, yielding one byte per step.
struct Hello<'a> {
    p: &'a [u8],
    done: bool,
    out: Yielder<u8>,
}

impl<'a> Hello<'a> {
    fn new(s: &'a CStr) -> Self {
        Hello {
            p: s.to_bytes_with_nul(),
            done: false,
            out: Yielder::new(),
        }
    }
}

impl Body for Hello<'_> {
    fn step(&mut self) {
        match self.p.split_first() {
            Some((&c, rest)) if c != 0 => {
                self.p = rest;
                self.out.yield_(c);
            }
            _ => self.done = true,
        }
    }

    fn is_complete(&self) -> bool {
        self.done
    }
}

fn hello(s: &CStr) -> Generator<u8, Hello<'_>> {
    generator(Hello::new(s))
}

fn main() -> io::Result<()> {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for c in &hello(c"Hello, wörld\n") {
        out.write_all(&[c])?;
    }
    out.flush()
}
