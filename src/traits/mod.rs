//! Extension traits bridging `Option` and `Result` into [`Outcome`](crate::Outcome).
//!
//! These traits put the conversion boundaries of [`crate::convert`] on the
//! source types themselves, so pipelines can stay in method-chaining style
//! from the first expression onward.

pub mod option_ext;
pub mod result_ext;

pub use option_ext::OptionExt;
pub use result_ext::ResultExt;
