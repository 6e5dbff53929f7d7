mod bucket_name;
mod client_method;
mod object_key;
mod part_number;
mod upload_id;

pub use bucket_name::BucketName;
pub use client_method::ClientMethod;
pub use object_key::ObjectKey;
pub use part_number::PartNumber;
pub use upload_id::UploadId;
