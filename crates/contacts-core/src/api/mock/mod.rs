mod memory;

pub use memory::MockContactApi;
