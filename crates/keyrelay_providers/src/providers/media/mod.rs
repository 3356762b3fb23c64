//! Media upload and storage providers.

mod cloudinary;
mod uploadthing;

pub use cloudinary::CloudinaryProvider;
pub use uploadthing::UploadThingProvider;
