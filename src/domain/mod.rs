pub mod duplicate;
pub mod track;
