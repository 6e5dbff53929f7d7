mod completed_object;
mod completed_part;
mod multipart_upload;
mod presign_target;

pub use completed_object::CompletedObject;
pub use completed_part::CompletedPart;
pub use multipart_upload::MultipartUploadHandle;
pub use presign_target::{PartTarget, PresignTarget};
