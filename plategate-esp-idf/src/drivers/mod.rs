pub mod button;
pub mod indicator;
pub mod plate_recognizer;
pub mod servo;
pub mod wifi;
