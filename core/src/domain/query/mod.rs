pub mod normalizers;
pub mod value_objects;
