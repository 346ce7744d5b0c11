//! The redirection/restoration lifecycle.
//!
//! [`StreamRedirector`] is the single-stream primitive: it swaps one
//! stream's active buffer for a replacement and swaps it back later.
//! [`StandardOutputRedirection`] applies the primitive to the narrow and
//! wide standard output streams as one logical unit, which is the surface
//! command orchestration code actually uses: construct, `enable()` before
//! a unit of work, `disable()` (or drop) afterward.

mod console;
mod redirector;

pub use console::StandardOutputRedirection;
pub use redirector::StreamRedirector;
