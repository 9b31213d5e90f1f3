pub use recognizer::PlateRecognizer;
pub use recognizer::Recognition;

pub mod plate_recognizer;
mod recognizer;
