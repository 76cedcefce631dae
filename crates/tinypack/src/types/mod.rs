pub mod build_state;
pub mod bundle_output;
pub mod linking_metadata;

use std::sync::Arc;

use tinypack_common::NormalizedBundlerOptions;

pub type SharedOptions = Arc<NormalizedBundlerOptions>;
