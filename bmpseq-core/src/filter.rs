pub mod blur;
pub mod kernel;
pub mod sobel;
