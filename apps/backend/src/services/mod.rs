pub mod sessions;
pub mod timer;
