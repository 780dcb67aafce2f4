use bigdecimal::BigDecimal;
use construction_store_lib::services::checkout_service::{
    CheckoutForm, DeliveryType, OrderStatus, PaymentType, UNKNOWN_PICKUP_POINT, pickup_point_label,
};
use construction_store_lib::services::errors::CheckoutServiceError;
use std::str::FromStr;

fn courier_form() -> CheckoutForm {
    CheckoutForm {
        first_name: "Иван".to_string(),
        last_name: "Петров".to_string(),
        email: "ivan@example.ru".to_string(),
        phone: "+7 900 123-45-67".to_string(),
        delivery_type: "courier".to_string(),
        payment_type: "card_courier".to_string(),
        address_street: Some("ул. Мира, 5".to_string()),
        ..Default::default()
    }
}

fn invalid_fields(form: &CheckoutForm) -> Vec<String> {
    match form.validate() {
        Err(CheckoutServiceError::InvalidForm(fields)) => fields,
        other => panic!("expected invalid form, got {:?}", other),
    }
}

#[test]
fn complete_courier_form_is_accepted() {
    assert_eq!(
        courier_form().validate(),
        Ok((DeliveryType::Courier, PaymentType::CardCourier))
    );
}

#[test]
fn pickup_does_not_need_a_street() {
    let form = CheckoutForm {
        delivery_type: "pickup".to_string(),
        payment_type: "cash".to_string(),
        address_street: None,
        pickup_point: Some("2".to_string()),
        ..courier_form()
    };

    assert_eq!(form.validate(), Ok((DeliveryType::Pickup, PaymentType::Cash)));
}

#[test]
fn every_bad_field_is_reported_in_form_order() {
    let form = CheckoutForm {
        first_name: "   ".to_string(),
        email: "not-an-email".to_string(),
        delivery_type: "courier".to_string(),
        address_street: Some("  ".to_string()),
        payment_type: "bitcoin".to_string(),
        ..courier_form()
    };

    assert_eq!(
        invalid_fields(&form),
        vec!["first_name", "email", "address_street", "payment_type"]
    );
}

#[test]
fn empty_form_reports_everything() {
    assert_eq!(
        invalid_fields(&CheckoutForm::default()),
        vec![
            "first_name",
            "last_name",
            "email",
            "phone",
            "delivery_type",
            "payment_type"
        ]
    );
}

#[test]
fn length_limits() {
    let form = CheckoutForm {
        last_name: "я".repeat(51),
        phone: "1".repeat(21),
        ..courier_form()
    };
    assert_eq!(invalid_fields(&form), vec!["last_name", "phone"]);

    let form = CheckoutForm {
        last_name: "я".repeat(50),
        phone: "1".repeat(20),
        ..courier_form()
    };
    assert!(form.validate().is_ok());
}

#[test]
fn email_shapes() {
    for bad in ["a@b", "@example.com", "a@.com", "a@example.", "a b@example.com"] {
        let form = CheckoutForm {
            email: bad.to_string(),
            ..courier_form()
        };
        assert_eq!(invalid_fields(&form), vec!["email"], "{}", bad);
    }
}

#[test]
fn courier_delivery_costs_a_flat_fee() {
    let form = CheckoutForm {
        address_apartment: Some("12".to_string()),
        address_comment: Some("домофон не работает".to_string()),
        ..courier_form()
    };

    let details = form.delivery_details(DeliveryType::Courier);

    assert_eq!(details.cost, BigDecimal::from(300));
    assert_eq!(
        details.address.as_deref(),
        Some("ул. Мира, 5, кв. 12 (домофон не работает)")
    );
    assert_eq!(details.comment.as_deref(), Some("домофон не работает"));
    assert_eq!(details.pickup_point, None);
}

#[test]
fn pickup_is_free_and_uses_the_point_label() {
    let form = CheckoutForm {
        delivery_type: "pickup".to_string(),
        pickup_point: Some("1".to_string()),
        ..courier_form()
    };

    let details = form.delivery_details(DeliveryType::Pickup);

    assert_eq!(details.cost, BigDecimal::from(0));
    assert_eq!(
        details.pickup_point.as_deref(),
        Some("ул. Ленина, 10, ежедневно 9:00-21:00")
    );
    assert_eq!(details.address, details.pickup_point);
}

#[test]
fn full_address_lists_every_part_given() {
    let form = CheckoutForm {
        address_street: Some("пр. Победы, 1".to_string()),
        address_apartment: Some("7".to_string()),
        address_entrance: Some("2".to_string()),
        address_floor: Some("3".to_string()),
        address_comment: None,
        ..courier_form()
    };

    assert_eq!(form.full_address(), "пр. Победы, 1, кв. 7, подъезд 2, этаж 3");
}

#[test]
fn unknown_pickup_points() {
    assert_eq!(pickup_point_label("3"), "пр. Строителей, 15, ТЦ \"Строймаркет\", 3 этаж");
    assert_eq!(pickup_point_label("9"), UNKNOWN_PICKUP_POINT);
    assert_eq!(pickup_point_label(""), UNKNOWN_PICKUP_POINT);
}

#[test]
fn final_statuses_cannot_change() {
    use OrderStatus::*;

    assert!(Pending.can_transition_to(Processing));
    assert!(Shipped.can_transition_to(Cancelled));
    assert!(!Pending.can_transition_to(Pending));
    assert!(!Delivered.can_transition_to(Pending));
    assert!(!Cancelled.can_transition_to(Processing));
}

#[test]
fn statuses_parse_case_insensitively() {
    assert_eq!(OrderStatus::from_str("Shipped"), Ok(OrderStatus::Shipped));
    assert_eq!(OrderStatus::from_str("lost"), Err(()));
    assert_eq!(OrderStatus::Cancelled.as_str(), "cancelled");
}
