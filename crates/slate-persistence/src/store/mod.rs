pub mod atomic_writer;
pub mod json_file_store;
