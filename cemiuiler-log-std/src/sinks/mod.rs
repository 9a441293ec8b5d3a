//! Standard sink implementations.

mod fn_sink;
#[cfg(feature = "tracing")]
mod tracing;
mod writer;

pub use fn_sink::{FnSink, sink_fn};
#[cfg(feature = "tracing")]
pub use self::tracing::TracingSink;
pub use writer::WriterSink;
