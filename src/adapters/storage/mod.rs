//! Object storage layer

pub mod s3;
pub mod traits;

pub use s3::S3ObjectPutter;
pub use traits::{ObjectPutter, CSV_CONTENT_TYPE};
