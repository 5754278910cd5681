//! Buffer comparers: total order, equality and hash codes over bytes
//!
//! Every representation implementing [`ByteSource`] orders, compares and
//! hashes identically for identical content. `equals(x, y)` holds exactly
//! when `compare(x, y)` is `Equal`, and equal buffers always hash equal,
//! whatever the [`Fidelity`].

pub mod buffer;
pub mod fidelity;
pub mod source;
pub mod typed;

pub use buffer::{BufferComparer, ComparerConfig, HashKind};
pub use fidelity::Fidelity;
pub use source::{ByteSource, PodView, Segment, Sequence};
pub use typed::TypedComparer;
