use crate::api::response::ErrorResponse;
use crate::pricing::PromotionError;
use crate::services::errors::{
    AccountServiceError, CartServiceError, CatalogAdminServiceError, CatalogServiceError,
    CheckoutServiceError, ImageServiceError, PromotionServiceError,
};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, PartialEq)]
pub enum APIErrors {
    Unauthorized,
    NotFound(String),
    BadRequest(String),
    Validation(Vec<String>),
    Conflict(String),
    BadGateway(String),
    Internal,
}

impl std::error::Error for APIErrors {}

impl std::fmt::Display for APIErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            APIErrors::Unauthorized => write!(f, "Unauthorized"),
            APIErrors::NotFound(what) => write!(f, "{}", what),
            APIErrors::BadRequest(why) => write!(f, "{}", why),
            APIErrors::Validation(_) => write!(f, "Validation failed"),
            APIErrors::Conflict(why) => write!(f, "{}", why),
            APIErrors::BadGateway(why) => write!(f, "{}", why),
            APIErrors::Internal => write!(f, "Internal server error"),
        }
    }
}

impl APIErrors {
    pub fn status(&self) -> StatusCode {
        match self {
            APIErrors::Unauthorized => StatusCode::UNAUTHORIZED,
            APIErrors::NotFound(_) => StatusCode::NOT_FOUND,
            APIErrors::BadRequest(_) => StatusCode::BAD_REQUEST,
            APIErrors::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            APIErrors::Conflict(_) => StatusCode::CONFLICT,
            APIErrors::BadGateway(_) => StatusCode::BAD_GATEWAY,
            APIErrors::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for APIErrors {
    fn into_response(self) -> Response {
        let status = self.status();
        let fields = match &self {
            APIErrors::Validation(fields) => Some(fields.clone()),
            _ => None,
        };
        let body = ErrorResponse {
            error: self.to_string(),
            fields,
        };

        (status, Json(body)).into_response()
    }
}

impl From<CatalogServiceError> for APIErrors {
    fn from(e: CatalogServiceError) -> Self {
        match e {
            CatalogServiceError::CategoryNotFound | CatalogServiceError::ProductNotFound => {
                APIErrors::NotFound(e.to_string())
            }
            CatalogServiceError::DatabaseError => APIErrors::Internal,
        }
    }
}

impl From<CatalogAdminServiceError> for APIErrors {
    fn from(e: CatalogAdminServiceError) -> Self {
        match e {
            CatalogAdminServiceError::CategoryNotFound
            | CatalogAdminServiceError::ProductNotFound => APIErrors::NotFound(e.to_string()),
            CatalogAdminServiceError::SlugTaken => APIErrors::Conflict(e.to_string()),
            CatalogAdminServiceError::InvalidForm(fields) => APIErrors::Validation(fields),
            CatalogAdminServiceError::DatabaseError => APIErrors::Internal,
        }
    }
}

impl From<CartServiceError> for APIErrors {
    fn from(e: CartServiceError) -> Self {
        match e {
            CartServiceError::ProductNotFound | CartServiceError::ItemNotFound => {
                APIErrors::NotFound(e.to_string())
            }
            CartServiceError::ProductUnavailable => APIErrors::Conflict(e.to_string()),
            CartServiceError::InvalidQuantity => {
                APIErrors::Validation(vec!["quantity".to_string()])
            }
            CartServiceError::DatabaseError => APIErrors::Internal,
        }
    }
}

impl From<CheckoutServiceError> for APIErrors {
    fn from(e: CheckoutServiceError) -> Self {
        match e {
            CheckoutServiceError::EmptyCart => APIErrors::BadRequest(e.to_string()),
            CheckoutServiceError::InvalidForm(fields) => APIErrors::Validation(fields),
            CheckoutServiceError::OrderNotFound => APIErrors::NotFound(e.to_string()),
            CheckoutServiceError::InvalidStatusTransition => APIErrors::Conflict(e.to_string()),
            CheckoutServiceError::OrderCreationFailed | CheckoutServiceError::DatabaseError => {
                APIErrors::Internal
            }
        }
    }
}

impl From<PromotionServiceError> for APIErrors {
    fn from(e: PromotionServiceError) -> Self {
        match e {
            PromotionServiceError::PromotionNotFound
            | PromotionServiceError::ProductNotFound
            | PromotionServiceError::LinkNotFound => APIErrors::NotFound(e.to_string()),
            PromotionServiceError::PromotionAlreadyExists => APIErrors::Conflict(e.to_string()),
            PromotionServiceError::Invalid(invalid) => APIErrors::from(invalid),
            PromotionServiceError::DatabaseError => APIErrors::Internal,
        }
    }
}

impl From<PromotionError> for APIErrors {
    fn from(e: PromotionError) -> Self {
        let field = match e {
            PromotionError::EmptyName => "name",
            PromotionError::EndBeforeStart => "end_date",
            PromotionError::PercentageOutOfRange | PromotionError::NegativeDiscount => {
                "discount_value"
            }
            PromotionError::PriorityOutOfRange(_) => "priority",
            PromotionError::UnknownDiscountType(_) => "discount_type",
        };
        APIErrors::Validation(vec![field.to_string()])
    }
}

impl From<ImageServiceError> for APIErrors {
    fn from(e: ImageServiceError) -> Self {
        match e {
            ImageServiceError::NotFound => APIErrors::NotFound(e.to_string()),
            ImageServiceError::EmptyUpload => APIErrors::BadRequest(e.to_string()),
            ImageServiceError::UploadFailed => APIErrors::BadGateway(e.to_string()),
            ImageServiceError::DatabaseError => APIErrors::Internal,
        }
    }
}

impl From<AccountServiceError> for APIErrors {
    fn from(e: AccountServiceError) -> Self {
        match e {
            AccountServiceError::UsernameTaken => APIErrors::Conflict(e.to_string()),
            AccountServiceError::InvalidCredentials | AccountServiceError::UserNotFound => {
                APIErrors::Unauthorized
            }
            AccountServiceError::OrderNotFound => APIErrors::NotFound(e.to_string()),
            AccountServiceError::InvalidForm(fields) => APIErrors::Validation(fields),
            AccountServiceError::HashingFailed | AccountServiceError::DatabaseError => {
                APIErrors::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_422() {
        let err = APIErrors::from(CheckoutServiceError::InvalidForm(vec!["email".into()]));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err, APIErrors::Validation(vec!["email".into()]));
    }

    #[test]
    fn promotion_errors_name_the_field() {
        let err = APIErrors::from(PromotionServiceError::Invalid(
            PromotionError::PriorityOutOfRange(11),
        ));
        assert_eq!(err, APIErrors::Validation(vec!["priority".into()]));
    }

    #[test]
    fn taken_slug_is_a_conflict() {
        assert_eq!(
            APIErrors::from(CatalogAdminServiceError::SlugTaken).status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn failed_upload_is_bad_gateway() {
        assert_eq!(
            APIErrors::from(ImageServiceError::UploadFailed).status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
