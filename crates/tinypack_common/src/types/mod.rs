pub mod build_order;
pub mod bundle_artifact;
pub mod entry_point;
pub mod lint_diagnostic;
pub mod module_id;
pub mod module_table;
pub mod output_asset;
pub mod raw_idx;
pub mod side_effects;
pub mod source;
pub mod source_joiner;
pub mod used_export_set;
