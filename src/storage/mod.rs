//! Almacenamiento de archivos
//!
//! Adaptador de blobs sobre el sistema de archivos local.

pub mod blob_store;

pub use blob_store::BlobStore;
