pub mod ecmascript;
pub mod indexmap;
pub mod rustc_hash;

pub use concat_string::concat_string;
