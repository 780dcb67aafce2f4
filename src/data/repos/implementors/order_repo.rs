use crate::data::database::Database;
use crate::data::models::order::{NewOrder, NewOrderItem, Order, OrderItem, UpdateOrder};
use crate::data::models::product::Product;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use std::collections::HashMap;

/// A line to be written with a new order: product id, unit price, quantity.
pub type PlacedLine = (i32, bigdecimal::BigDecimal, i32);

pub struct OrderRepo {
    db: Database,
}

impl OrderRepo {
    pub fn new(db: Database) -> Self {
        OrderRepo { db }
    }

    /// Writes the order and its lines and empties the session's cart, all in
    /// one transaction.
    pub async fn place_order(
        &self,
        new_order: NewOrder,
        lines: Vec<PlacedLine>,
        session: &str,
    ) -> Result<(Order, Vec<OrderItem>), result::Error> {
        use crate::data::models::schema::cart_items::dsl::{cart_items, session_key};
        use crate::data::models::schema::order_items::dsl::order_items;
        use crate::data::models::schema::orders::dsl::orders;

        let mut conn = self.db.connection().await?;
        let session = session.to_string();

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                let order: Order = diesel::insert_into(orders)
                    .values(&new_order)
                    .returning(Order::as_returning())
                    .get_result(connection)
                    .await?;

                let new_items: Vec<NewOrderItem> = lines
                    .into_iter()
                    .map(|(product_id, price, quantity)| NewOrderItem {
                        order_id: order.id,
                        product_id,
                        price,
                        quantity,
                    })
                    .collect();

                let items: Vec<OrderItem> = diesel::insert_into(order_items)
                    .values(&new_items)
                    .returning(OrderItem::as_returning())
                    .get_results(connection)
                    .await?;

                diesel::delete(cart_items.filter(session_key.eq(&session)))
                    .execute(connection)
                    .await?;

                Ok((order, items))
            }
            .scope_boxed()
        })
        .await
    }

    /// Orders placed with `email`, newest first. `None` returns all of them.
    pub async fn get_by_email(
        &self,
        email_query: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Order>, result::Error> {
        use crate::data::models::schema::orders::dsl::{created, email, orders};

        let mut conn = self.db.connection().await?;

        orders
            .filter(email.eq(email_query))
            .order(created.desc())
            .limit(limit.unwrap_or(i64::MAX))
            .select(Order::as_select())
            .load(&mut conn)
            .await
    }

    pub async fn get_by_id(&self, order: i32) -> Result<Option<Order>, result::Error> {
        use crate::data::models::schema::orders::dsl::orders;

        let mut conn = self.db.connection().await?;

        orders
            .find(order)
            .select(Order::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    /// The order only if it was placed with `email`.
    pub async fn get_for_email(
        &self,
        order: i32,
        email_query: &str,
    ) -> Result<Option<Order>, result::Error> {
        use crate::data::models::schema::orders::dsl::{email, orders};

        let mut conn = self.db.connection().await?;

        orders
            .find(order)
            .filter(email.eq(email_query))
            .select(Order::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    pub async fn update_status(
        &self,
        order: i32,
        form: UpdateOrder<'_>,
    ) -> Result<Order, result::Error> {
        use crate::data::models::schema::orders::dsl::orders;

        let mut conn = self.db.connection().await?;

        diesel::update(orders.find(order))
            .set(&form)
            .returning(Order::as_returning())
            .get_result(&mut conn)
            .await
    }

    pub async fn attach_items(
        &self,
        orders_list: Vec<Order>,
    ) -> Result<Vec<(Order, Vec<(OrderItem, Product)>)>, result::Error> {
        use crate::data::models::schema::order_items::dsl::{order_id, order_items};
        use crate::data::models::schema::products;

        if orders_list.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.connection().await?;

        let ids: Vec<i32> = orders_list.iter().map(|o| o.id).collect();

        let items_data: Vec<(OrderItem, Product)> = order_items
            .inner_join(products::table)
            .filter(order_id.eq_any(ids))
            .select((OrderItem::as_select(), Product::as_select()))
            .load(&mut conn)
            .await?;

        let mut map: HashMap<i32, Vec<(OrderItem, Product)>> = HashMap::new();
        for item in items_data {
            map.entry(item.0.order_id).or_default().push(item);
        }

        let result = orders_list
            .into_iter()
            .map(|o| {
                let items = map.remove(&o.id).unwrap_or_default();
                (o, items)
            })
            .collect();

        Ok(result)
    }
}
