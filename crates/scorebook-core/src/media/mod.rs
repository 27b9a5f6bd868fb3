//! Image thumbnailing for dropped or chosen files
//!
//! Decoding, scaling and encoding are delegated to the `image` crate; this
//! module only supplies the sizing policy and the batch bookkeeping.

mod thumbnail;

pub use thumbnail::{scaled_dimensions, ThumbnailResult, Thumbnailer};
