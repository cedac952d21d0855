pub mod store;
pub mod traits;

pub use store::json_file_store::JsonFileStore;
pub use traits::BoardStore;
