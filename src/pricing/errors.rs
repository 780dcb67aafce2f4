#[derive(Debug, PartialEq)]
pub enum PromotionError {
    EmptyName,
    EndBeforeStart,
    PercentageOutOfRange,
    NegativeDiscount,
    PriorityOutOfRange(i32),
    UnknownDiscountType(String),
}

impl std::error::Error for PromotionError {}

impl std::fmt::Display for PromotionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromotionError::EmptyName => write!(f, "Promotion name is required"),
            PromotionError::EndBeforeStart => write!(f, "End date must be after start date"),
            PromotionError::PercentageOutOfRange => {
                write!(f, "Percentage discount must be between 0 and 100")
            }
            PromotionError::NegativeDiscount => write!(f, "Discount value cannot be negative"),
            PromotionError::PriorityOutOfRange(p) => {
                write!(f, "Priority {} is outside 1..=10", p)
            }
            PromotionError::UnknownDiscountType(t) => write!(f, "Unknown discount type: {}", t),
        }
    }
}
