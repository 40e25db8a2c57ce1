//! # PedeAí demo
//!
//! Walks one customer through the app against the in-process services:
//!
//! 1. Phone + code sign-in ([`UserClient`](pedeai::clients::UserClient)).
//! 2. Browsing a category and filling a cart, including a restaurant switch.
//! 3. Checkout, then the restaurant dashboard moving the order along while
//!    the tracker renders each status.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use pedeai::cart_actor::CartError;
use pedeai::config::AppConfig;
use pedeai::lifecycle::{setup_tracing, AppSystem};
use pedeai::model::catalog::{can_add, search};
use pedeai::model::money::format_brl;
use pedeai::model::{Address, PaymentMethod, Product, Restaurant};
use pedeai::tracker::StatusView;
use pedeai::user_actor::UserError;
use rust_decimal::Decimal;
use tracing::{error, info, warn, Instrument};

fn catalog() -> (Vec<Restaurant>, Vec<Product>) {
    let restaurants = vec![
        Restaurant::new("r1", "Burger House", "Lanches", Decimal::from(5)),
        Restaurant::new("r2", "Pizzaria Napoli", "Pizza", Decimal::new(799, 2))
            .with_minimum_order(Decimal::from(30)),
        Restaurant::new("r3", "Sushi Zen", "Japonesa", Decimal::new(999, 2)).closed(),
    ];
    let products = vec![
        Product::new("p1", "X-Burger", Decimal::from(12), "r1"),
        Product::new("p2", "Batata Frita", Decimal::from(9), "r1"),
        Product::new("p3", "Refrigerante Lata", Decimal::from(5), "r1"),
        Product::new("p4", "Pizza Margherita", Decimal::new(4590, 2), "r2"),
    ];
    (restaurants, products)
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    info!("Starting PedeAí demo");

    let system = AppSystem::new(AppConfig::from_env());
    let (restaurants, products) = catalog();

    let span = tracing::info_span!("sign_in");
    let user = async {
        let phone = "(75) 99999-9999";
        let user = if system.user_client.is_registered(phone).await? {
            system.user_client.login(phone, "123456").await?
        } else {
            system.user_client.register("Ana", phone, "123456").await?
        };
        Ok::<_, UserError>(user)
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;
    let user = system
        .user_client
        .set_default_address(
            user.id,
            Address {
                street: "Rua das Flores".into(),
                number: "123".into(),
                neighborhood: Some("Centro".into()),
                reference: None,
            },
        )
        .await
        .map_err(|e| e.to_string())?;
    info!(user_id = %user.id, phone = %user.phone, "Signed in");

    let listing = search(&restaurants, "  PIZZA ");
    info!(open = listing.open.len(), closed = listing.closed.len(), "Searched for pizza");

    let span = tracing::info_span!("cart");
    let cart_id = async {
        let cart_id = system.cart_client.open().await?;
        let [burger_house, pizzaria, sushi] = [&restaurants[0], &restaurants[1], &restaurants[2]];

        let snapshot = system
            .cart_client
            .add_item(cart_id, products[3].clone(), pizzaria.clone(), 1)
            .await?;
        info!(total = %format_brl(snapshot.total), "Pizza added");

        // Switching restaurants starts a new cart.
        system
            .cart_client
            .add_one(cart_id, products[0].clone(), burger_house.clone())
            .await?;
        system
            .cart_client
            .add_item(cart_id, products[1].clone(), burger_house.clone(), 1)
            .await?;
        system
            .cart_client
            .update_quantity(cart_id, products[0].id.clone(), 2)
            .await?;
        let snapshot = system
            .cart_client
            .add_one(cart_id, products[2].clone(), burger_house.clone())
            .await?;
        info!(
            items = snapshot.item_count,
            subtotal = %format_brl(snapshot.subtotal),
            total = %format_brl(snapshot.total),
            "Cart ready"
        );

        let sushi_roll = Product::new("p9", "Combo Sushi", Decimal::from(60), "r3");
        if !can_add(&sushi_roll, sushi) {
            warn!(restaurant = %sushi.name, "Restaurant closed, not adding");
        }
        Ok::<_, CartError>(cart_id)
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("checkout");
    let order_result = async {
        system
            .checkout(
                user.id,
                cart_id,
                PaymentMethod::Cash,
                Some(Decimal::from(50)),
                Some("Sem cebola".into()),
            )
            .await
    }
    .instrument(span)
    .await;

    let order_id = match order_result {
        Ok(order_id) => {
            info!(%order_id, "Order placed");
            order_id
        }
        Err(e) => {
            error!(error = %e, "Checkout failed");
            system.shutdown().await?;
            return Err(e.to_string());
        }
    };

    let span = tracing::info_span!("dashboard");
    async {
        let steps = [
            system.order_client.accept(order_id).await,
            system.order_client.start_preparing(order_id).await,
            system.order_client.mark_ready(order_id).await,
        ];
        for step in steps {
            match step {
                Ok(status) => {
                    let view = StatusView::for_status(status);
                    info!(%status, headline = view.headline(), "Tracker updated");
                }
                Err(e) => error!(error = %e, "Status change refused"),
            }
        }
    }
    .instrument(span)
    .await;

    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
