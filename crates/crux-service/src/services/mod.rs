//! Service layer
//!
//! Business logic for redemption, unlock queries, code administration, and
//! the identity/scan bridges. Services borrow a [`ServiceContext`] and talk
//! to storage only through the repository traits.

pub mod code_admin;
pub mod context;
pub mod error;
pub mod gym;
pub mod identity;
pub mod profile;
pub mod redemption;
pub mod scan;
pub mod unlock;

#[cfg(test)]
pub(crate) mod test_support;

pub use code_admin::CodeAdminService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use gym::GymService;
pub use identity::resolve_identity;
pub use profile::ProfileService;
pub use redemption::RedemptionService;
pub use scan::{start_scan, FrameSource, ScanEvent, ScanHandle, ScanOutcome};
pub use unlock::UnlockService;
