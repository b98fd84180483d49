use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("Failed to read font {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse font {path}: {reason}")]
    Parse { path: String, reason: String },
}

#[derive(Error, Debug)]
pub enum FaviconError {
    #[error("Favicon is not a PNG data URI")]
    UnsupportedFormat,

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid image data: {0}")]
    Image(#[from] image::ImageError),

    #[error("Favicon box has zero size")]
    EmptyBox,
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
