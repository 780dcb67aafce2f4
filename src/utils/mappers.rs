use crate::api::controllers::dto::account_dto::{ProfileResponse, UserResponse};
use crate::api::controllers::dto::cart_dto::{CartLineResponse, CartResponse};
use crate::api::controllers::dto::catalog_dto::{
    CategoryDetailResponse, CategoryResponse, GalleryImageResponse, HomeResponse, PriceResponse,
    ProductDetailResponse, ProductRecordResponse, ProductResponse,
};
use crate::api::controllers::dto::order_dto::{OrderItemResponse, OrderResponse};
use crate::api::controllers::dto::promotion_dto::{
    LinkedProductResponse, ProductPromotionResponse, PromotionDetailResponse, PromotionResponse,
};
use crate::api::request::{
    CategoryRequest, ChangePasswordRequest, CheckoutRequest, CreatePromotionRequest,
    ProductRequest, RegisterRequest, UpdateProfileRequest,
};
use crate::data::models::order::{Order, OrderItem};
use crate::data::models::product::Product;
use crate::data::models::product_promotion::ProductPromotion;
use crate::data::models::promotion::Promotion;
use crate::data::models::user::{User, UserProfile};
use crate::pricing::{DiscountType, PriceQuote, PromotionError};
use crate::services::account_service::{
    OrderHistory, PasswordChangeForm, ProfileForm, RegistrationForm,
};
use crate::services::cart_service::CartView;
use crate::services::catalog_admin_service::{CategoryDraft, ProductDraft};
use crate::services::catalog_service::{
    CategoryDetail, CategoryView, GalleryImage, HomePage, ProductCard, ProductDetail,
};
use crate::services::checkout_service::{CheckoutForm, PlacedOrder};
use crate::services::promotion_service::{PromotionDetail, PromotionDraft};
use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, Utc};
use diesel::deserialize::FromSql;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{deserialize, serialize};
use std::io::Write;
use std::str::FromStr;

impl ToSql<Text, Pg> for DiscountType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for DiscountType {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        let raw = std::str::from_utf8(bytes.as_bytes())?;
        Ok(DiscountType::from_str(raw)?)
    }
}

fn format_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339()
}

impl From<&PriceQuote> for PriceResponse {
    fn from(quote: &PriceQuote) -> Self {
        PriceResponse {
            price: quote.price.clone(),
            old_price: quote.old_price.clone(),
            sale_price: quote.sale_price.clone(),
            discount_amount: quote.discount_amount.clone(),
            discount_percentage: quote.discount_percentage.clone(),
            has_promotion: quote.has_promotion(),
            promotion_name: quote.promotion.as_ref().map(|p| p.name.clone()),
            promotion_slug: quote.promotion.as_ref().map(|p| p.slug.clone()),
        }
    }
}

impl From<&ProductCard> for ProductResponse {
    fn from(card: &ProductCard) -> Self {
        let product = &card.product;
        ProductResponse {
            id: product.id,
            category_id: product.category_id,
            name: product.name.clone(),
            slug: product.slug.clone(),
            brand: product.brand.clone(),
            unit: product.unit.clone(),
            stock: product.stock,
            available: product.available,
            image_url: card.image_url.clone(),
            pricing: PriceResponse::from(&card.quote),
        }
    }
}

impl From<ProductCard> for ProductResponse {
    fn from(card: ProductCard) -> Self {
        ProductResponse::from(&card)
    }
}

impl From<CategoryView> for CategoryResponse {
    fn from(view: CategoryView) -> Self {
        CategoryResponse {
            id: view.category.id,
            name: view.category.name,
            slug: view.category.slug,
            description: view.category.description,
            image_url: view.image_url,
        }
    }
}

impl From<GalleryImage> for GalleryImageResponse {
    fn from(gallery: GalleryImage) -> Self {
        GalleryImageResponse {
            id: gallery.image.id,
            url: gallery.url,
            alt_text: gallery.image.alt_text,
            sort_order: gallery.image.sort_order,
        }
    }
}

impl From<ProductDetail> for ProductDetailResponse {
    fn from(detail: ProductDetail) -> Self {
        let product = ProductResponse::from(&detail.card);
        let Product {
            description,
            weight,
            dimensions,
            color,
            material,
            ..
        } = detail.card.product;

        ProductDetailResponse {
            product,
            description,
            weight,
            dimensions,
            color,
            material,
            category: CategoryResponse::from(detail.category),
            gallery: detail.gallery.into_iter().map(GalleryImageResponse::from).collect(),
            related: detail.related.into_iter().map(ProductResponse::from).collect(),
        }
    }
}

impl From<CategoryDetail> for CategoryDetailResponse {
    fn from(detail: CategoryDetail) -> Self {
        CategoryDetailResponse {
            category: CategoryResponse::from(detail.category),
            products: detail.products.into_iter().map(ProductResponse::from).collect(),
        }
    }
}

impl From<(HomePage, DateTime<Utc>)> for HomeResponse {
    fn from((home, now): (HomePage, DateTime<Utc>)) -> Self {
        HomeResponse {
            categories: home.categories.into_iter().map(CategoryResponse::from).collect(),
            featured: home.featured.into_iter().map(ProductResponse::from).collect(),
            newest: home.newest.into_iter().map(ProductResponse::from).collect(),
            promotions: home
                .promotions
                .into_iter()
                .map(|p| PromotionResponse::from((p, now)))
                .collect(),
            available_count: home.available_count,
        }
    }
}

impl From<CartView> for CartResponse {
    fn from(cart: CartView) -> Self {
        let total = cart.total();
        let item_count = cart.item_count();
        let items = cart
            .lines
            .into_iter()
            .map(|line| CartLineResponse {
                line_total: line.line_total(),
                quantity: line.quantity,
                product: ProductResponse::from(&ProductCard {
                    product: line.product,
                    quote: line.quote,
                    image_url: line.image_url,
                }),
            })
            .collect();

        CartResponse {
            items,
            item_count,
            total,
        }
    }
}

impl From<&OrderItem> for OrderItemResponse {
    fn from(item: &OrderItem) -> Self {
        OrderItemResponse {
            product_id: item.product_id,
            product_name: None,
            price: item.price.clone(),
            quantity: item.quantity,
            cost: item.cost(),
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id,
            full_name: order.full_name(),
            destination: order.destination().map(str::to_string),
            email: order.email,
            phone: order.phone,
            status: order.status,
            delivery_type: order.delivery_type,
            delivery_cost: order.delivery_cost,
            payment_type: order.payment_type,
            items: Vec::new(),
            total: None,
            created: format_date(order.created),
        }
    }
}

impl From<(Order, Vec<(OrderItem, Product)>)> for OrderResponse {
    fn from((order, items): (Order, Vec<(OrderItem, Product)>)) -> Self {
        let items_total = items
            .iter()
            .fold(BigDecimal::zero(), |acc, (item, _)| acc + item.cost());
        let total = items_total + &order.delivery_cost;

        let items = items
            .into_iter()
            .map(|(item, product)| OrderItemResponse {
                product_name: Some(product.name),
                ..OrderItemResponse::from(&item)
            })
            .collect();

        OrderResponse {
            items,
            total: Some(total),
            ..OrderResponse::from(order)
        }
    }
}

impl From<PlacedOrder> for OrderResponse {
    fn from(placed: PlacedOrder) -> Self {
        OrderResponse {
            items: placed.items.iter().map(OrderItemResponse::from).collect(),
            total: Some(placed.total),
            ..OrderResponse::from(placed.order)
        }
    }
}

impl From<(Promotion, DateTime<Utc>)> for PromotionResponse {
    fn from((promotion, now): (Promotion, DateTime<Utc>)) -> Self {
        PromotionResponse {
            is_current: promotion.is_current(now),
            is_upcoming: promotion.is_upcoming(now),
            is_expired: promotion.is_expired(now),
            days_left: promotion.days_left(now),
            time_left: promotion.time_left_display(now),
            id: promotion.id,
            name: promotion.name,
            slug: promotion.slug,
            short_description: promotion.short_description,
            discount_type: promotion.discount_type.to_string(),
            discount_value: promotion.discount_value,
            start_date: promotion.start_date.map(format_date),
            end_date: promotion.end_date.map(format_date),
            is_active: promotion.is_active,
        }
    }
}

impl From<ProductPromotion> for ProductPromotionResponse {
    fn from(link: ProductPromotion) -> Self {
        ProductPromotionResponse {
            id: link.id,
            product_id: link.product_id,
            promotion_id: link.promotion_id,
            priority: link.priority,
        }
    }
}

impl From<(PromotionDetail, DateTime<Utc>)> for PromotionDetailResponse {
    fn from((detail, now): (PromotionDetail, DateTime<Utc>)) -> Self {
        let description = detail.promotion.description.clone();
        PromotionDetailResponse {
            promotion: PromotionResponse::from((detail.promotion, now)),
            description,
            products: detail
                .products
                .into_iter()
                .map(|(link, product)| LinkedProductResponse {
                    product_id: product.id,
                    name: product.name,
                    slug: product.slug,
                    priority: link.priority,
                })
                .collect(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            date_joined: format_date(user.date_joined),
        }
    }
}

impl From<(User, Option<UserProfile>, OrderHistory)> for ProfileResponse {
    fn from((user, profile, orders): (User, Option<UserProfile>, OrderHistory)) -> Self {
        let non_empty = |value: String| Some(value).filter(|v| !v.is_empty());
        let (phone, address, email_confirmed) = match profile {
            Some(profile) => (
                non_empty(profile.phone),
                non_empty(profile.address),
                profile.email_confirmed,
            ),
            None => (None, None, false),
        };

        ProfileResponse {
            user: UserResponse::from(user),
            phone,
            address,
            email_confirmed,
            orders: orders.into_iter().map(OrderResponse::from).collect(),
        }
    }
}

impl From<CheckoutRequest> for CheckoutForm {
    fn from(request: CheckoutRequest) -> Self {
        CheckoutForm {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            delivery_type: request.delivery_type,
            payment_type: request.payment_type,
            address_street: request.address_street,
            address_apartment: request.address_apartment,
            address_entrance: request.address_entrance,
            address_floor: request.address_floor,
            address_comment: request.address_comment,
            pickup_point: request.pickup_point,
            note: request.note,
        }
    }
}

impl From<RegisterRequest> for RegistrationForm {
    fn from(request: RegisterRequest) -> Self {
        RegistrationForm {
            username: request.username,
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            password: request.password,
            password_confirm: request.password_confirm,
        }
    }
}

impl From<UpdateProfileRequest> for ProfileForm {
    fn from(request: UpdateProfileRequest) -> Self {
        ProfileForm {
            email: request.email,
            first_name: request.first_name.unwrap_or_default(),
            last_name: request.last_name.unwrap_or_default(),
            phone: request.phone.unwrap_or_default(),
            address: request.address.unwrap_or_default(),
        }
    }
}

impl From<ChangePasswordRequest> for PasswordChangeForm {
    fn from(request: ChangePasswordRequest) -> Self {
        PasswordChangeForm {
            old_password: request.old_password,
            new_password: request.new_password,
            new_password_confirm: request.new_password_confirm,
        }
    }
}

impl TryFrom<CreatePromotionRequest> for PromotionDraft {
    type Error = PromotionError;

    fn try_from(request: CreatePromotionRequest) -> Result<Self, Self::Error> {
        let discount_type = match request.discount_type.as_deref() {
            Some(raw) => DiscountType::from_str(raw)?,
            None => DiscountType::Percentage,
        };

        Ok(PromotionDraft {
            name: request.name,
            slug: request.slug,
            description: request.description.unwrap_or_default(),
            short_description: request.short_description.unwrap_or_default(),
            discount_type,
            discount_value: request.discount_value,
            start_date: request.start_date,
            end_date: request.end_date,
            is_active: request.is_active.unwrap_or(true),
        })
    }
}

impl From<CategoryRequest> for CategoryDraft {
    fn from(request: CategoryRequest) -> Self {
        CategoryDraft {
            name: request.name,
            slug: request.slug,
            description: request.description.unwrap_or_default(),
            image_url: request.image_url.filter(|url| !url.trim().is_empty()),
        }
    }
}

impl From<ProductRequest> for ProductDraft {
    fn from(request: ProductRequest) -> Self {
        let defaults = ProductDraft::default();

        ProductDraft {
            category_id: request.category_id,
            name: request.name,
            slug: request.slug,
            brand: request.brand.unwrap_or_default(),
            description: request.description.unwrap_or_default(),
            price: request.price,
            old_price: request.old_price,
            unit: request.unit.unwrap_or(defaults.unit),
            stock: request.stock.unwrap_or(defaults.stock),
            available: request.available.unwrap_or(defaults.available),
            weight: request.weight,
            dimensions: request.dimensions.unwrap_or_default(),
            color: request.color.unwrap_or_default(),
            material: request.material.unwrap_or_default(),
            image_url: request.image_url.filter(|url| !url.trim().is_empty()),
        }
    }
}

impl From<(Product, Option<String>)> for ProductRecordResponse {
    fn from((product, image_url): (Product, Option<String>)) -> Self {
        ProductRecordResponse {
            id: product.id,
            category_id: product.category_id,
            name: product.name,
            slug: product.slug,
            brand: product.brand,
            description: product.description,
            price: product.price,
            old_price: product.old_price,
            unit: product.unit,
            stock: product.stock,
            available: product.available,
            weight: product.weight,
            dimensions: product.dimensions,
            color: product.color,
            material: product.material,
            image_url,
        }
    }
}
