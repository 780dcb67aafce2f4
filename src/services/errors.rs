use crate::pricing::PromotionError;

#[derive(Debug, PartialEq)]
pub enum CatalogServiceError {
    CategoryNotFound,
    ProductNotFound,
    DatabaseError,
}

impl std::error::Error for CatalogServiceError {}

impl std::fmt::Display for CatalogServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogServiceError::CategoryNotFound => write!(f, "Category not found"),
            CatalogServiceError::ProductNotFound => write!(f, "Product not found"),
            CatalogServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum CatalogAdminServiceError {
    CategoryNotFound,
    ProductNotFound,
    SlugTaken,
    InvalidForm(Vec<String>),
    DatabaseError,
}

impl std::error::Error for CatalogAdminServiceError {}

impl std::fmt::Display for CatalogAdminServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogAdminServiceError::CategoryNotFound => write!(f, "Category not found"),
            CatalogAdminServiceError::ProductNotFound => write!(f, "Product not found"),
            CatalogAdminServiceError::SlugTaken => write!(f, "Slug is already in use"),
            CatalogAdminServiceError::InvalidForm(fields) => {
                write!(f, "Invalid catalog form: {}", fields.join(", "))
            }
            CatalogAdminServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum CartServiceError {
    ProductNotFound,
    ProductUnavailable,
    InvalidQuantity,
    ItemNotFound,
    DatabaseError,
}

impl std::error::Error for CartServiceError {}

impl std::fmt::Display for CartServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartServiceError::ProductNotFound => write!(f, "Product not found"),
            CartServiceError::ProductUnavailable => write!(f, "Product is not available"),
            CartServiceError::InvalidQuantity => write!(f, "Quantity must be positive"),
            CartServiceError::ItemNotFound => write!(f, "Item is not in the cart"),
            CartServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum CheckoutServiceError {
    EmptyCart,
    InvalidForm(Vec<String>),
    OrderCreationFailed,
    OrderNotFound,
    InvalidStatusTransition,
    DatabaseError,
}

impl std::error::Error for CheckoutServiceError {}

impl std::fmt::Display for CheckoutServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckoutServiceError::EmptyCart => write!(f, "Cart is empty"),
            CheckoutServiceError::InvalidForm(fields) => {
                write!(f, "Invalid checkout form: {}", fields.join(", "))
            }
            CheckoutServiceError::OrderCreationFailed => write!(f, "Order creation failed"),
            CheckoutServiceError::OrderNotFound => write!(f, "Order not found"),
            CheckoutServiceError::InvalidStatusTransition => write!(f, "Invalid status transition"),
            CheckoutServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum PromotionServiceError {
    PromotionNotFound,
    ProductNotFound,
    PromotionAlreadyExists,
    LinkNotFound,
    Invalid(PromotionError),
    DatabaseError,
}

impl std::error::Error for PromotionServiceError {}

impl std::fmt::Display for PromotionServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromotionServiceError::PromotionNotFound => write!(f, "Promotion not found"),
            PromotionServiceError::ProductNotFound => write!(f, "Product not found"),
            PromotionServiceError::PromotionAlreadyExists => write!(f, "Promotion already exists"),
            PromotionServiceError::LinkNotFound => {
                write!(f, "Product is not linked to this promotion")
            }
            PromotionServiceError::Invalid(e) => write!(f, "{}", e),
            PromotionServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

impl From<PromotionError> for PromotionServiceError {
    fn from(e: PromotionError) -> Self {
        PromotionServiceError::Invalid(e)
    }
}

#[derive(Debug, PartialEq)]
pub enum ImageServiceError {
    NotFound,
    EmptyUpload,
    UploadFailed,
    DatabaseError,
}

impl std::error::Error for ImageServiceError {}

impl std::fmt::Display for ImageServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageServiceError::NotFound => write!(f, "Image owner not found"),
            ImageServiceError::EmptyUpload => write!(f, "No image data received"),
            ImageServiceError::UploadFailed => write!(f, "Image upload failed"),
            ImageServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum AccountServiceError {
    UsernameTaken,
    InvalidCredentials,
    UserNotFound,
    OrderNotFound,
    InvalidForm(Vec<String>),
    HashingFailed,
    DatabaseError,
}

impl std::error::Error for AccountServiceError {}

impl std::fmt::Display for AccountServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountServiceError::UsernameTaken => write!(f, "Username is already taken"),
            AccountServiceError::InvalidCredentials => write!(f, "Invalid username or password"),
            AccountServiceError::UserNotFound => write!(f, "User not found"),
            AccountServiceError::OrderNotFound => write!(f, "Order not found"),
            AccountServiceError::InvalidForm(fields) => {
                write!(f, "Invalid account form: {}", fields.join(", "))
            }
            AccountServiceError::HashingFailed => write!(f, "Password hashing failed"),
            AccountServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}
