//! Input processing: file type detection and text extraction

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::InputManager;
