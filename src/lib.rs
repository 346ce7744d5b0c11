//! Reversible redirection of console output streams.
//!
//! Command-line tools often want everything written through the conventional
//! console output APIs to flow somewhere else while a unit of work runs — into
//! a log pipeline, a captured buffer, or a secondary channel — and then have
//! the original console behavior come back, without the code producing the
//! output ever knowing.
//!
//! The crate is built from three pieces:
//! - [`stream`]: the console stream handles (narrow and wide, stdout and
//!   stderr) and the [`stream::Sink`] trait their buffers implement.
//! - [`redirect`]: the buffer-swapping primitive
//!   [`StreamRedirector`](redirect::StreamRedirector) and the dual-stream
//!   wrapper [`StandardOutputRedirection`](redirect::StandardOutputRedirection).
//! - [`sink`]: ready-made sinks to install while redirected (capture, tracing
//!   forwarding, file, null).
//!
//! Typical usage brackets a unit of work:
//!
//! ```
//! use console_redirect::StandardOutputRedirection;
//!
//! let (mut redirection, narrow, _wide) = StandardOutputRedirection::capturing();
//! redirection.enable();
//! console_redirect::stream::narrow_stdout().write_str("diverted\n").unwrap();
//! redirection.disable();
//! assert_eq!(narrow.contents(), "diverted\n");
//! ```

pub mod redirect;
pub mod sink;
pub mod stream;

pub use redirect::{StandardOutputRedirection, StreamRedirector};
pub use sink::SinkError;
