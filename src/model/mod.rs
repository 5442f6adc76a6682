pub mod compound;
pub mod element;
pub mod table;
