pub mod entities;
pub mod phone;
pub mod ports;
pub mod value_objects;
