use crate::data::database::Database;
use crate::data::models::order::{NewOrder, Order, OrderItem, UpdateOrder};
use crate::data::repos::implementors::order_repo::{OrderRepo, PlacedLine};
use crate::images::ImageResolver;
use crate::services::cart_service::CartService;
use crate::services::errors::CheckoutServiceError;
use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, Utc};
use std::str::FromStr;

/// Flat fee for courier delivery.
pub const COURIER_DELIVERY_COST: i64 = 300;

pub const PICKUP_POINTS: [(&str, &str); 3] = [
    ("1", "ул. Ленина, 10, ежедневно 9:00-21:00"),
    ("2", "ул. Промышленная, 25, пн-пт 10:00-19:00"),
    ("3", "пр. Строителей, 15, ТЦ \"Строймаркет\", 3 этаж"),
];

pub const UNKNOWN_PICKUP_POINT: &str = "Не указан";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryType {
    Courier,
    Pickup,
}

impl DeliveryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryType::Courier => "courier",
            DeliveryType::Pickup => "pickup",
        }
    }
}

impl FromStr for DeliveryType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "courier" => Ok(DeliveryType::Courier),
            "pickup" => Ok(DeliveryType::Pickup),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentType {
    Cash,
    Card,
    CardCourier,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Cash => "cash",
            PaymentType::Card => "card",
            PaymentType::CardCourier => "card_courier",
        }
    }
}

impl FromStr for PaymentType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cash" => Ok(PaymentType::Cash),
            "card" => Ok(PaymentType::Card),
            "card_courier" => Ok(PaymentType::CardCourier),
            _ => Err(()),
        }
    }
}

/// Order statuses for workflow management
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Delivered and cancelled orders are final.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        !matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled) && *self != next
    }
}

impl FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(()),
        }
    }
}

/// Raw checkout input as submitted by the customer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub delivery_type: String,
    pub payment_type: String,
    pub address_street: Option<String>,
    pub address_apartment: Option<String>,
    pub address_entrance: Option<String>,
    pub address_floor: Option<String>,
    pub address_comment: Option<String>,
    pub pickup_point: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryDetails {
    pub delivery_type: DeliveryType,
    pub cost: BigDecimal,
    pub address: Option<String>,
    pub comment: Option<String>,
    pub pickup_point: Option<String>,
}

impl CheckoutForm {
    /// Checks every field and returns the names of the bad ones together.
    pub fn validate(&self) -> Result<(DeliveryType, PaymentType), CheckoutServiceError> {
        let mut invalid = Vec::new();

        if self.first_name.trim().is_empty() || self.first_name.chars().count() > 50 {
            invalid.push("first_name".to_string());
        }
        if self.last_name.trim().is_empty() || self.last_name.chars().count() > 50 {
            invalid.push("last_name".to_string());
        }
        if !looks_like_email(self.email.trim()) {
            invalid.push("email".to_string());
        }
        if self.phone.trim().is_empty() || self.phone.chars().count() > 20 {
            invalid.push("phone".to_string());
        }

        let delivery = DeliveryType::from_str(&self.delivery_type).ok();
        match delivery {
            None => invalid.push("delivery_type".to_string()),
            Some(DeliveryType::Courier) if non_blank(&self.address_street).is_none() => {
                invalid.push("address_street".to_string())
            }
            Some(_) => {}
        }

        let payment = PaymentType::from_str(&self.payment_type).ok();
        if payment.is_none() {
            invalid.push("payment_type".to_string());
        }

        match (delivery, payment) {
            (Some(delivery), Some(payment)) if invalid.is_empty() => Ok((delivery, payment)),
            _ => Err(CheckoutServiceError::InvalidForm(invalid)),
        }
    }

    /// Cost and destination for the chosen delivery type.
    pub fn delivery_details(&self, delivery_type: DeliveryType) -> DeliveryDetails {
        match delivery_type {
            DeliveryType::Courier => DeliveryDetails {
                delivery_type,
                cost: BigDecimal::from(COURIER_DELIVERY_COST),
                address: Some(self.full_address()),
                comment: non_blank(&self.address_comment).map(str::to_string),
                pickup_point: None,
            },
            DeliveryType::Pickup => {
                let point = pickup_point_label(self.pickup_point.as_deref().unwrap_or_default());
                DeliveryDetails {
                    delivery_type,
                    cost: BigDecimal::zero(),
                    address: Some(point.to_string()),
                    comment: None,
                    pickup_point: Some(point.to_string()),
                }
            }
        }
    }

    /// Street followed by whichever of apartment, entrance, floor and comment
    /// were given.
    pub fn full_address(&self) -> String {
        let mut address = non_blank(&self.address_street).unwrap_or_default().to_string();
        if let Some(apartment) = non_blank(&self.address_apartment) {
            address.push_str(&format!(", кв. {}", apartment));
        }
        if let Some(entrance) = non_blank(&self.address_entrance) {
            address.push_str(&format!(", подъезд {}", entrance));
        }
        if let Some(floor) = non_blank(&self.address_floor) {
            address.push_str(&format!(", этаж {}", floor));
        }
        if let Some(comment) = non_blank(&self.address_comment) {
            address.push_str(&format!(" ({})", comment));
        }
        address
    }
}

pub fn pickup_point_label(id: &str) -> &'static str {
    PICKUP_POINTS
        .iter()
        .find(|(key, _)| *key == id.trim())
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN_PICKUP_POINT)
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub order: Order,
    pub items: Vec<OrderItem>,
    pub items_total: BigDecimal,
    pub total: BigDecimal,
}

pub struct CheckoutService {
    orders: OrderRepo,
    cart: CartService,
}

impl CheckoutService {
    pub fn new(db: &Database, resolver: ImageResolver) -> Self {
        CheckoutService {
            orders: OrderRepo::new(db.clone()),
            cart: CartService::new(db, resolver),
        }
    }

    /// Turns the session's cart into an order.
    ///
    /// Each line keeps the sale price in effect at `now`. The order, its
    /// lines and the emptied cart are committed together.
    pub async fn place_order(
        &self,
        session: &str,
        form: &CheckoutForm,
        now: DateTime<Utc>,
    ) -> Result<PlacedOrder, CheckoutServiceError> {
        let (delivery_type, payment_type) = form.validate()?;

        let cart = self
            .cart
            .view(session, now)
            .await
            .map_err(|_| CheckoutServiceError::DatabaseError)?;
        if cart.is_empty() {
            return Err(CheckoutServiceError::EmptyCart);
        }

        let delivery = form.delivery_details(delivery_type);
        let items_total = cart.total();
        let total = &items_total + &delivery.cost;

        let new_order = NewOrder {
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            delivery_type: delivery.delivery_type.as_str().to_string(),
            delivery_cost: delivery.cost,
            delivery_address: delivery.address,
            delivery_comment: delivery.comment,
            pickup_point: delivery.pickup_point,
            payment_type: payment_type.as_str().to_string(),
            status: OrderStatus::Pending.as_str().to_string(),
            note: form.note.clone().unwrap_or_default(),
        };

        let lines: Vec<PlacedLine> = cart
            .lines
            .iter()
            .map(|line| (line.product.id, line.quote.sale_price.clone(), line.quantity))
            .collect();

        let (order, items) = self
            .orders
            .place_order(new_order, lines, session)
            .await
            .map_err(|e| {
                tracing::error!("Failed to place order: {}", e);
                CheckoutServiceError::OrderCreationFailed
            })?;

        tracing::info!(order_id = order.id, total = %total, "Order placed");

        Ok(PlacedOrder {
            order,
            items,
            items_total,
            total,
        })
    }

    pub async fn update_status(
        &self,
        order_id: i32,
        next: OrderStatus,
        now: DateTime<Utc>,
    ) -> Result<Order, CheckoutServiceError> {
        let order = self
            .orders
            .get_by_id(order_id)
            .await
            .map_err(|_| CheckoutServiceError::DatabaseError)?
            .ok_or(CheckoutServiceError::OrderNotFound)?;

        let current = OrderStatus::from_str(&order.status).unwrap_or(OrderStatus::Pending);
        if !current.can_transition_to(next) {
            return Err(CheckoutServiceError::InvalidStatusTransition);
        }

        self.orders
            .update_status(
                order_id,
                UpdateOrder {
                    status: Some(next.as_str()),
                    note: None,
                    updated: now,
                },
            )
            .await
            .map_err(|_| CheckoutServiceError::DatabaseError)
    }
}
