//! ADIF tag-length-value codec.

/// Tag scanner and record decoder.
pub mod decode;
/// Tagged text serialization.
pub mod encode;

pub use decode::{DecodeError, Tag, decode, next_tag};
pub use encode::{encode, encode_record};

/// End-of-header marker token, matched case-insensitively on read.
pub const EOH: &str = "<eoh>";
/// End-of-record marker token, matched case-insensitively on read.
pub const EOR: &str = "<eor>";
