/// Service-independent storefront error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    /// An image asset reference did not match the `image-<id>-<dims>-<ext>` shape.
    InvalidImageRef(String),
}

impl std::fmt::Display for StorefrontError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidImageRef(r) => write!(f, "invalid image asset reference: {r}"),
        }
    }
}

impl std::error::Error for StorefrontError {}
