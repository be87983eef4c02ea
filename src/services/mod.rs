pub mod directory;
pub mod locks;
