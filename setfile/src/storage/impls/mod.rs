pub mod fs;
pub mod mem;
