pub mod cli;
pub mod image;
pub mod imgproc;
pub mod sink;
pub mod source;
