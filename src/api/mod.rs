pub mod contracts;

pub use contracts::{AddressCreate, AddressFind, AddressUpdate, ListQuery, Pagination};
