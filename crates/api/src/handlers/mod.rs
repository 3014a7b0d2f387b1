pub mod phase_type;
pub mod preset;
pub mod timeline;
