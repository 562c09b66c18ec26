pub mod address;
pub mod cidr;
pub mod target;
