mod abort_multipart_upload;
mod complete_multipart_upload;
mod create_multipart_upload;
mod generate_presigned_urls;

pub use abort_multipart_upload::AbortMultipartUploadUseCase;
pub use complete_multipart_upload::CompleteMultipartUploadUseCase;
pub use create_multipart_upload::CreateMultipartUploadUseCase;
pub use generate_presigned_urls::GeneratePresignedUrlsUseCase;
