mod json;
mod memory;

pub use json::JsonFilePersistence;
pub use memory::MemoryPersistence;
