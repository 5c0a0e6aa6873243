//! Pure domain rules: naming, repository derivation, shared value types.

mod error;
mod names;
mod repository;
mod service_ref;

pub use error::AppError;
pub use names::{
    DNS1123_LABEL_MAX, STAGE_SUFFIX, complete_prefix, dns1123_label_violations, validate_name,
};
pub use repository::repo_full_name;
pub use service_ref::NamespacedService;
