mod contact;

pub use contact::ContactService;
