pub mod console;
pub mod sort;
