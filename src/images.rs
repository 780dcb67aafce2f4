pub mod errors;
pub mod optimizer;
pub mod resolver;
pub mod sources;
pub mod uploader;

pub use optimizer::ImageOptimizer;
pub use resolver::ImageResolver;
pub use sources::{HasImageSources, ImageSources};
pub use uploader::ImageUploader;
