#[derive(Debug)]
pub enum ImageError {
    Codec(image::ImageError),
    TaskFailed,
}

impl std::error::Error for ImageError {}

impl std::fmt::Display for ImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageError::Codec(e) => write!(f, "Image codec error: {}", e),
            ImageError::TaskFailed => write!(f, "Image processing task failed"),
        }
    }
}

impl From<image::ImageError> for ImageError {
    fn from(e: image::ImageError) -> Self {
        ImageError::Codec(e)
    }
}
