//! Needs a migrated Postgres database in `DATABASE_URL`. Run with
//! `cargo test --test store_db_tests -- --ignored`.

mod common;

use bigdecimal::BigDecimal;
use chrono::{Duration, Utc};
use common::RecordingStorage;
use construction_store_lib::data::database::Database;
use construction_store_lib::data::models::category::NewCategory;
use construction_store_lib::data::models::product::NewProduct;
use construction_store_lib::data::repos::implementors::category_repo::CategoryRepo;
use construction_store_lib::data::repos::implementors::product_repo::ProductRepo;
use construction_store_lib::data::repos::traits::repository::Repository;
use construction_store_lib::images::ImageResolver;
use construction_store_lib::pricing::DiscountType;
use construction_store_lib::services::cart_service::CartService;
use construction_store_lib::security::jwt::{AccessClaims, JwtService};
use construction_store_lib::services::account_service::{
    AccountService, PasswordChangeForm, ProfileForm, RegistrationForm,
};
use construction_store_lib::services::catalog_admin_service::{
    CatalogAdminService, CategoryDraft, ProductDraft,
};
use construction_store_lib::services::catalog_service::CatalogService;
use construction_store_lib::services::checkout_service::{
    CheckoutForm, CheckoutService, OrderStatus,
};
use construction_store_lib::services::errors::{
    AccountServiceError, CartServiceError, CatalogAdminServiceError, CatalogServiceError,
    CheckoutServiceError,
};
use construction_store_lib::services::promotion_service::{PromotionDraft, PromotionService};
use diesel::result;
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use std::str::FromStr;
use std::sync::Arc;

const SESSION: &str = "0123456789abcdef0123456789abcdef";

async fn setup() -> Result<Database, result::Error> {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db = Database::new(&url).expect("Failed to build the pool");

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    use construction_store_lib::data::models::schema::{
        cart_items, categories, order_items, orders, product_images, product_promotions, products,
        promotions, user_profiles, users,
    };

    // Children first because of foreign keys
    diesel::delete(order_items::table).execute(&mut conn).await?;
    diesel::delete(orders::table).execute(&mut conn).await?;
    diesel::delete(cart_items::table).execute(&mut conn).await?;
    diesel::delete(product_promotions::table).execute(&mut conn).await?;
    diesel::delete(product_images::table).execute(&mut conn).await?;
    diesel::delete(promotions::table).execute(&mut conn).await?;
    diesel::delete(products::table).execute(&mut conn).await?;
    diesel::delete(categories::table).execute(&mut conn).await?;
    diesel::delete(user_profiles::table).execute(&mut conn).await?;
    diesel::delete(users::table).execute(&mut conn).await?;

    Ok(db)
}

fn resolver() -> ImageResolver {
    ImageResolver::new(
        Arc::new(RecordingStorage::remote("https://xyz.supabase.co")),
        Arc::new(RecordingStorage::local("/media")),
    )
}

async fn create_product(db: &Database, slug: &str, price: &str) -> i32 {
    let categories = CategoryRepo::new(db.clone());
    let category = match categories.get_by_slug("cement").await.unwrap() {
        Some(category) => category,
        None => categories
            .add(NewCategory {
                name: "Цемент",
                slug: "cement",
                description: "",
                image_url: None,
            })
            .await
            .expect("Failed to add category"),
    };

    ProductRepo::new(db.clone())
        .add(NewProduct {
            category_id: category.id,
            name: slug,
            slug,
            brand: "Holcim",
            description: "",
            price: BigDecimal::from_str(price).unwrap(),
            old_price: None,
            unit: "pcs",
            stock: 10,
            available: true,
            weight: None,
            dimensions: "",
            color: "",
            material: "",
            image_url: None,
        })
        .await
        .expect("Failed to add product")
        .id
}

async fn create_promotion(db: &Database, name: &str, percent: i32) -> i32 {
    let now = Utc::now();
    let draft = PromotionDraft {
        name: name.to_string(),
        slug: None,
        description: String::new(),
        short_description: String::new(),
        discount_type: DiscountType::Percentage,
        discount_value: BigDecimal::from(percent),
        start_date: Some(now - Duration::days(1)),
        end_date: Some(now + Duration::days(1)),
        is_active: true,
    };

    PromotionService::new(db)
        .create(draft, now)
        .await
        .expect("Failed to create promotion")
        .id
}

#[tokio::test]
#[ignore]
#[serial_test::serial]
async fn highest_priority_promotion_prices_the_product() {
    let db = setup().await.expect("Setup failed");
    let product = create_product(&db, "m500", "1000.00").await;
    let small = create_promotion(&db, "Small", 10).await;
    let big = create_promotion(&db, "Big", 20).await;

    let promotions = PromotionService::new(&db);
    promotions.link(product, small, 3).await.unwrap();
    promotions.link(product, big, 7).await.unwrap();

    let detail = CatalogService::new(&db, resolver())
        .product_detail("m500", Utc::now())
        .await
        .unwrap();

    assert_eq!(detail.card.quote.promotion.map(|p| p.id), Some(big));
    assert_eq!(detail.card.quote.sale_price, BigDecimal::from_str("800.00").unwrap());
    assert_eq!(detail.card.quote.old_price, Some(BigDecimal::from_str("1000.00").unwrap()));
}

#[tokio::test]
#[ignore]
#[serial_test::serial]
async fn relinking_updates_priority_instead_of_duplicating() {
    let db = setup().await.expect("Setup failed");
    let product = create_product(&db, "m400", "500.00").await;
    let promotion = create_promotion(&db, "Week", 5).await;

    let promotions = PromotionService::new(&db);
    let first = promotions.link(product, promotion, 2).await.unwrap();
    let second = promotions.link(product, promotion, 9).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.priority, 9);

    promotions.unlink(product, promotion).await.unwrap();
    assert!(promotions.unlink(product, promotion).await.is_err());
}

#[tokio::test]
#[ignore]
#[serial_test::serial]
async fn cart_merges_lines_and_totals_at_sale_price() {
    let db = setup().await.expect("Setup failed");
    let product = create_product(&db, "sand", "100.00").await;
    let promotion = create_promotion(&db, "Sand sale", 10).await;
    PromotionService::new(&db).link(product, promotion, 1).await.unwrap();

    let cart = CartService::new(&db, resolver());
    cart.add(SESSION, product, 2).await.unwrap();
    cart.add(SESSION, product, 1).await.unwrap();

    let view = cart.view(SESSION, Utc::now()).await.unwrap();
    assert_eq!(view.item_count(), 3);
    assert_eq!(view.total(), BigDecimal::from_str("270.00").unwrap());

    assert_eq!(cart.add(SESSION, product, 0).await, Err(CartServiceError::InvalidQuantity));
    cart.update(SESSION, product, 0).await.unwrap();
    assert!(cart.view(SESSION, Utc::now()).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore]
#[serial_test::serial]
async fn checkout_snapshots_prices_and_empties_the_cart() {
    let db = setup().await.expect("Setup failed");
    let product = create_product(&db, "brick", "25.50").await;

    let cart = CartService::new(&db, resolver());
    cart.add(SESSION, product, 4).await.unwrap();

    let form = CheckoutForm {
        first_name: "Олег".to_string(),
        last_name: "Смирнов".to_string(),
        email: "oleg@example.ru".to_string(),
        phone: "+79001112233".to_string(),
        delivery_type: "courier".to_string(),
        payment_type: "cash".to_string(),
        address_street: Some("ул. Садовая, 3".to_string()),
        ..Default::default()
    };

    let checkout = CheckoutService::new(&db, resolver());
    let placed = checkout.place_order(SESSION, &form, Utc::now()).await.unwrap();

    assert_eq!(placed.items.len(), 1);
    assert_eq!(placed.items[0].price, BigDecimal::from_str("25.50").unwrap());
    assert_eq!(placed.items_total, BigDecimal::from_str("102.00").unwrap());
    assert_eq!(placed.total, BigDecimal::from_str("402.00").unwrap());
    assert!(cart.view(SESSION, Utc::now()).await.unwrap().is_empty());

    assert_eq!(
        checkout.place_order(SESSION, &form, Utc::now()).await.map(|_| ()),
        Err(CheckoutServiceError::EmptyCart)
    );

    let order_id = placed.order.id;
    checkout
        .update_status(order_id, OrderStatus::Delivered, Utc::now())
        .await
        .unwrap();
    assert_eq!(
        checkout
            .update_status(order_id, OrderStatus::Pending, Utc::now())
            .await
            .map(|_| ()),
        Err(CheckoutServiceError::InvalidStatusTransition)
    );
}

async fn hide_product(db: &Database, slug: &str) {
    use construction_store_lib::data::models::schema::products::dsl;

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");
    diesel::update(dsl::products.filter(dsl::slug.eq(slug)))
        .set(dsl::available.eq(false))
        .execute(&mut conn)
        .await
        .expect("Failed to hide product");
}

#[tokio::test]
#[ignore]
#[serial_test::serial]
async fn unavailable_product_has_no_detail_page() {
    let db = setup().await.expect("Setup failed");
    create_product(&db, "hidden-brick", "40.00").await;
    hide_product(&db, "hidden-brick").await;

    let detail = CatalogService::new(&db, resolver())
        .product_detail("hidden-brick", Utc::now())
        .await;

    assert_eq!(detail.map(|_| ()), Err(CatalogServiceError::ProductNotFound));
}

#[tokio::test]
#[ignore]
#[serial_test::serial]
async fn blank_search_lists_every_available_product() {
    let db = setup().await.expect("Setup failed");
    create_product(&db, "gravel", "90.00").await;
    create_product(&db, "putty", "300.00").await;
    create_product(&db, "old-stock", "10.00").await;
    hide_product(&db, "old-stock").await;

    let catalog = CatalogService::new(&db, resolver());
    for query in ["", "   "] {
        let slugs: Vec<String> = catalog
            .search(query, Utc::now())
            .await
            .unwrap()
            .into_iter()
            .map(|card| card.product.slug)
            .collect();
        assert_eq!(slugs, vec!["gravel".to_string(), "putty".to_string()]);
    }
}

#[tokio::test]
#[ignore]
#[serial_test::serial]
async fn admin_catalog_derives_slugs_and_rejects_duplicates() {
    let db = setup().await.expect("Setup failed");
    let admin = CatalogAdminService::new(&db);

    let category = admin
        .create_category(&CategoryDraft {
            name: "Сухие смеси".to_string(),
            ..CategoryDraft::default()
        })
        .await
        .unwrap();
    assert_eq!(category.slug, "suhie-smesi");

    let draft = ProductDraft {
        category_id: category.id,
        name: "Штукатурка гипсовая".to_string(),
        slug: Some("  ".to_string()),
        price: BigDecimal::from_str("450.00").unwrap(),
        unit: "kg".to_string(),
        stock: 25,
        ..ProductDraft::default()
    };
    let product = admin.create_product(&draft).await.unwrap();
    assert_eq!(product.slug, "shtukaturka-gipsovaya");
    assert_eq!(product.unit, "kg");

    assert_eq!(
        admin.create_product(&draft).await.map(|_| ()),
        Err(CatalogAdminServiceError::SlugTaken)
    );

    let renamed = ProductDraft {
        name: "Штукатурка цементная".to_string(),
        slug: None,
        old_price: Some(BigDecimal::from_str("500.00").unwrap()),
        ..draft.clone()
    };
    let updated = admin
        .update_product(product.id, &renamed, Utc::now())
        .await
        .unwrap();
    assert_eq!(updated.slug, "shtukaturka-tsementnaya");
    assert_eq!(updated.old_price, Some(BigDecimal::from_str("500.00").unwrap()));

    let orphan = ProductDraft {
        category_id: category.id + 1000,
        name: "Orphan".to_string(),
        ..draft
    };
    assert_eq!(
        admin.create_product(&orphan).await.map(|_| ()),
        Err(CatalogAdminServiceError::CategoryNotFound)
    );
}

#[tokio::test]
#[ignore]
#[serial_test::serial]
async fn signed_in_customer_sees_only_their_own_orders() {
    let db = setup().await.expect("Setup failed");
    let product = create_product(&db, "rebar", "60.00").await;

    let accounts = AccountService::new(&db);
    let (user, _) = accounts
        .register(&RegistrationForm {
            username: "mason".to_string(),
            email: "mason@example.ru".to_string(),
            first_name: "Пётр".to_string(),
            last_name: "Каменщиков".to_string(),
            password: "concrete-mix".to_string(),
            password_confirm: "concrete-mix".to_string(),
        })
        .await
        .unwrap();

    let logged_in = accounts.login("mason", "concrete-mix").await.unwrap();
    let jwt = JwtService::new("test-secret", 60);
    let claims: AccessClaims = jwt
        .decode_token(&jwt.generate_token(&logged_in).unwrap())
        .unwrap();
    let me = accounts.current_user(claims.user_id().unwrap()).await.unwrap();
    assert_eq!(me.id, user.id);

    let cart = CartService::new(&db, resolver());
    let checkout = CheckoutService::new(&db, resolver());
    let mut order_ids = Vec::new();
    for email in ["mason@example.ru", "someone@example.ru"] {
        cart.add(SESSION, product, 1).await.unwrap();
        let form = CheckoutForm {
            first_name: "Пётр".to_string(),
            last_name: "Каменщиков".to_string(),
            email: email.to_string(),
            phone: "+79001112233".to_string(),
            delivery_type: "pickup".to_string(),
            payment_type: "cash".to_string(),
            pickup_point: Some("1".to_string()),
            ..Default::default()
        };
        let placed = checkout.place_order(SESSION, &form, Utc::now()).await.unwrap();
        order_ids.push(placed.order.id);
    }

    let (own, lines) = accounts.order_detail(&me.email, order_ids[0]).await.unwrap();
    assert_eq!(own.id, order_ids[0]);
    assert_eq!(lines.len(), 1);
    assert_eq!(
        accounts.order_detail(&me.email, order_ids[1]).await.map(|_| ()),
        Err(AccountServiceError::OrderNotFound)
    );
    assert_eq!(accounts.order_history(&me.email, None).await.unwrap().len(), 1);

    let (updated, profile) = accounts
        .update_profile(
            me.id,
            &ProfileForm {
                email: "someone@example.ru".to_string(),
                phone: "+79005556677".to_string(),
                ..ProfileForm::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.email, "someone@example.ru");
    assert_eq!(profile.phone, "+79005556677");
    assert!(accounts.order_detail(&updated.email, order_ids[1]).await.is_ok());

    let wrong_old = PasswordChangeForm {
        old_password: "not-my-password".to_string(),
        new_password: "rebar-steel".to_string(),
        new_password_confirm: "rebar-steel".to_string(),
    };
    assert_eq!(
        accounts.change_password(me.id, &wrong_old).await,
        Err(AccountServiceError::InvalidForm(vec!["old_password".to_string()]))
    );

    let change = PasswordChangeForm {
        old_password: "concrete-mix".to_string(),
        ..wrong_old
    };
    accounts.change_password(me.id, &change).await.unwrap();
    assert!(accounts.login("mason", "rebar-steel").await.is_ok());
    assert_eq!(
        accounts.login("mason", "concrete-mix").await.map(|_| ()),
        Err(AccountServiceError::InvalidCredentials)
    );
}
