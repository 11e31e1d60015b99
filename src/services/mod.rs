pub mod adapters;

pub use adapters::local_filesystem::LocalFilesystem;
