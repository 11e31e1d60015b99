pub mod local_filesystem;
