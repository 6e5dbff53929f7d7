pub mod health;
pub mod multipart;
pub mod presigned_urls;


pub use health::ping_handler;
pub use multipart::{
    abort_multipart_upload_handler, complete_multipart_upload_handler,
    create_multipart_upload_handler,
};
pub use presigned_urls::generate_presigned_urls_handler;
