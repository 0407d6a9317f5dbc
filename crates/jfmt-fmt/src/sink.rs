//! Output sink that latches the first write failure.
//!
//! The renderer writes through a [`Sink`] as if output could never fail.
//! When the underlying writer reports an error, the sink remembers it and
//! drops every later write; [`Sink::finish`] hands the error back once the
//! whole tree has been walked.
//!
//! ```rust
//! use jfmt_fmt::Sink;
//!
//! let mut sink = Sink::new(Vec::new());
//! sink.write("class A {");
//! sink.write("\n}\n");
//! let bytes = sink.finish().unwrap();
//! assert_eq!(bytes, b"class A {\n}\n");
//! ```

use std::io::{self, Write};

enum State {
    Recording,
    Failed(io::Error),
}

/// Fire-and-forget text writer over any [`io::Write`].
pub struct Sink<W: Write> {
    inner: W,
    state: State,
}

impl<W: Write> Sink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            state: State::Recording,
        }
    }

    /// Appends `text`, or does nothing if an earlier write already failed.
    pub fn write(&mut self, text: &str) {
        if let State::Recording = self.state {
            if let Err(e) = self.inner.write_all(text.as_bytes()) {
                self.state = State::Failed(e);
            }
        }
    }

    #[cfg(test)]
    fn has_failed(&self) -> bool {
        matches!(self.state, State::Failed(_))
    }

    /// Flushes the writer and returns it, or the first error seen.
    ///
    /// A latched write error wins over any error the flush would report.
    pub fn finish(self) -> io::Result<W> {
        let Sink { mut inner, state } = self;
        match state {
            State::Failed(e) => Err(e),
            State::Recording => {
                inner.flush()?;
                Ok(inner)
            }
        }
    }
}
