use pedeai::clients::actor_client::ActorClient;
use pedeai::config::AppConfig;
use pedeai::lifecycle::AppSystem;
use pedeai::model::payment::PaymentError;
use pedeai::model::{Address, OrderStatus, PaymentMethod, Product, ProductId, Restaurant, RestaurantId, UserId};
use pedeai::order_actor::OrderError;
use pedeai::tracker::{StatusView, StepState};
use pedeai::user_actor::UserError;
use rust_decimal::Decimal;
use std::time::Duration;

fn burger_house() -> Restaurant {
    Restaurant::new("r1", "Burger House", "Lanches", Decimal::from(5))
}

fn pizzaria() -> Restaurant {
    Restaurant::new("r2", "Pizzaria Napoli", "Pizza", Decimal::from(2))
}

fn product(id: &str, price: i64, restaurant: &str) -> Product {
    Product::new(id, format!("Product {id}"), Decimal::from(price), restaurant)
}

/// Full end-to-end test with all real actors: sign-in, cart, checkout and the
/// dashboard walking the order to ready.
#[tokio::test]
async fn test_full_checkout_flow() {
    let system = AppSystem::new(AppConfig::instant());

    // Sign in: unknown phone goes to registration.
    assert!(!system.user_client.is_registered("75999999999").await.unwrap());
    let user = system
        .user_client
        .register("Ana", "(75) 99999-9999", "123456")
        .await
        .expect("Failed to register");
    assert!(system.user_client.is_registered("75999999999").await.unwrap());
    let logged_in = system
        .user_client
        .login("75 99999 9999", "654321")
        .await
        .expect("Failed to log in");
    assert_eq!(logged_in.id, user.id);

    let address = Address {
        street: "Rua das Flores".into(),
        number: "123".into(),
        neighborhood: Some("Centro".into()),
        reference: None,
    };
    system
        .user_client
        .set_default_address(user.id, address.clone())
        .await
        .expect("Failed to set address");

    // Cart: the worked example, through the service.
    let cart_id = system.cart_client.open().await.expect("Failed to open cart");
    let snapshot = system
        .cart_client
        .add_item(cart_id, product("p1", 10, "r1"), burger_house(), 1)
        .await
        .unwrap();
    assert_eq!(snapshot.total, Decimal::from(15));

    let snapshot = system
        .cart_client
        .add_item(cart_id, product("p2", 7, "r1"), burger_house(), 2)
        .await
        .unwrap();
    assert_eq!(snapshot.subtotal, Decimal::from(24));
    assert_eq!(snapshot.total, Decimal::from(29));
    assert_eq!(snapshot.item_count, 3);

    let snapshot = system
        .cart_client
        .add_item(cart_id, product("p3", 3, "r2"), pizzaria(), 1)
        .await
        .unwrap();
    assert_eq!(snapshot.total, Decimal::from(5));
    let cart = snapshot.cart.as_ref().unwrap();
    assert_eq!(cart.restaurant().id, RestaurantId::from("r2"));
    assert_eq!(cart.items().len(), 1);

    // Back to the burger place and bump a quantity.
    system
        .cart_client
        .add_item(cart_id, product("p1", 10, "r1"), burger_house(), 1)
        .await
        .unwrap();
    let snapshot = system
        .cart_client
        .update_quantity(cart_id, ProductId::from("p1"), 3)
        .await
        .unwrap();
    assert_eq!(snapshot.subtotal, Decimal::from(30));
    assert_eq!(snapshot.total, Decimal::from(35));

    // Checkout clears the session but the order keeps its own copy.
    let order_id = system
        .checkout(
            user.id,
            cart_id,
            PaymentMethod::Cash,
            Some(Decimal::from(50)),
            Some("  ".into()),
        )
        .await
        .expect("Failed to check out");

    let after = system.cart_client.snapshot(cart_id).await.unwrap();
    assert!(after.is_empty());
    assert_eq!(after.total, Decimal::ZERO);

    let order = system
        .order_client
        .get(order_id)
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.user_id, user.id);
    assert_eq!(order.total(), Decimal::from(35));
    assert_eq!(order.change_due(), Some(Decimal::from(15)));
    assert_eq!(order.cart.item(&ProductId::from("p1")).unwrap().quantity, 3);
    assert_eq!(order.delivery_address, Some(address));
    assert_eq!(order.notes, None);

    // Dashboard.
    assert_eq!(system.order_client.accept(order_id).await, Ok(OrderStatus::Accepted));
    assert_eq!(
        system.order_client.mark_ready(order_id).await,
        Err(OrderError::InvalidTransition {
            from: OrderStatus::Accepted,
            to: OrderStatus::Ready,
        })
    );
    assert_eq!(
        system.order_client.start_preparing(order_id).await,
        Ok(OrderStatus::Preparing)
    );
    let status = system.order_client.mark_ready(order_id).await.unwrap();

    match StatusView::for_status(status) {
        StatusView::Progress {
            steps,
            progress_percent,
            ..
        } => {
            assert_eq!(progress_percent, 100);
            assert_eq!(steps.last().unwrap().state, StepState::Current);
        }
        StatusView::Rejected { .. } => panic!("ready order shown as rejected"),
    }

    let mine = system.order_client.orders_for_user(user.id).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].status, OrderStatus::Ready);
    let queue = system
        .order_client
        .orders_for_restaurant(&RestaurantId::from("r1"))
        .await
        .unwrap();
    assert_eq!(queue.len(), 1);
    assert!(system
        .order_client
        .orders_for_restaurant(&RestaurantId::from("r2"))
        .await
        .unwrap()
        .is_empty());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_identity_errors() {
    let system = AppSystem::new(AppConfig::instant());

    assert_eq!(
        system.user_client.login("75988887777", "123456").await,
        Err(UserError::NotRegistered("(75) 98888-7777".into()))
    );
    assert!(matches!(
        system.user_client.register("   ", "75988887777", "123456").await,
        Err(UserError::ValidationError(_))
    ));
    assert!(matches!(
        system.user_client.register("Bia", "7598888", "123456").await,
        Err(UserError::ValidationError(_))
    ));

    system
        .user_client
        .register("Bia", "75988887777", "123456")
        .await
        .unwrap();
    assert_eq!(
        system.user_client.register("Bia again", "75988887777", "123456").await,
        Err(UserError::AlreadyExists("(75) 98888-7777".into()))
    );

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_rejected_checkouts_keep_the_cart() {
    let system = AppSystem::new(AppConfig::instant());
    let user = system
        .user_client
        .register("Caio", "75977776666", "123456")
        .await
        .unwrap();
    let cart_id = system.cart_client.open().await.unwrap();

    assert_eq!(
        system
            .checkout(user.id, cart_id, PaymentMethod::Pix, None, None)
            .await,
        Err(OrderError::EmptyCart)
    );

    let strict = pizzaria().with_minimum_order(Decimal::from(30));
    system
        .cart_client
        .add_item(cart_id, product("p4", 12, "r2"), strict.clone(), 2)
        .await
        .unwrap();
    assert_eq!(
        system
            .checkout(user.id, cart_id, PaymentMethod::Pix, None, None)
            .await,
        Err(OrderError::BelowMinimumOrder {
            minimum: Decimal::from(30),
            subtotal: Decimal::from(24),
        })
    );

    system
        .cart_client
        .add_one(cart_id, product("p4", 12, "r2"), strict)
        .await
        .unwrap();
    assert_eq!(
        system
            .checkout(user.id, cart_id, PaymentMethod::Cash, Some(Decimal::from(20)), None)
            .await,
        Err(OrderError::Payment(PaymentError::InsufficientChange {
            change_for: Decimal::from(20),
            total: Decimal::from(38),
        }))
    );
    assert_eq!(
        system
            .checkout(user.id, cart_id, PaymentMethod::Online, None, None)
            .await,
        Err(OrderError::Payment(PaymentError::Unavailable(PaymentMethod::Online)))
    );
    assert!(matches!(
        system
            .checkout(UserId(99), cart_id, PaymentMethod::Card, None, None)
            .await,
        Err(OrderError::InvalidUser(_))
    ));

    let snapshot = system.cart_client.snapshot(cart_id).await.unwrap();
    assert_eq!(snapshot.item_count, 3);
    assert!(system.order_client.list().await.unwrap().is_empty());

    // A rejected order is terminal.
    let order_id = system
        .checkout(user.id, cart_id, PaymentMethod::Card, None, None)
        .await
        .unwrap();
    assert_eq!(system.order_client.reject(order_id).await, Ok(OrderStatus::Rejected));
    assert!(system.order_client.accept(order_id).await.is_err());
    assert!(StatusView::for_status(OrderStatus::Rejected).is_rejected());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_unknown_ids() {
    let system = AppSystem::new(AppConfig::instant());

    assert!(system.user_client.get(UserId(42)).await.unwrap().is_none());
    assert!(system
        .order_client
        .accept(pedeai::model::OrderId(7))
        .await
        .is_err());
    assert!(system
        .cart_client
        .snapshot(pedeai::model::CartId(3))
        .await
        .is_err());

    system.shutdown().await.expect("Shutdown failed");
}

/// Items added while checkout is still waiting end up in the order, not lost.
#[tokio::test]
async fn test_items_added_during_checkout_delay() {
    let config = AppConfig {
        checkout_latency: Duration::from_millis(200),
        ..AppConfig::instant()
    };
    let system = AppSystem::new(config);
    let user = system
        .user_client
        .register("Duda", "75966665555", "123456")
        .await
        .unwrap();
    let cart_id = system.cart_client.open().await.unwrap();
    system
        .cart_client
        .add_item(cart_id, product("p1", 10, "r1"), burger_house(), 1)
        .await
        .unwrap();

    let (placed, added) = tokio::join!(
        system.checkout(user.id, cart_id, PaymentMethod::Pix, None, None),
        async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            system
                .cart_client
                .add_item(cart_id, product("p2", 7, "r1"), burger_house(), 1)
                .await
        }
    );
    added.unwrap();
    let order_id = placed.expect("Failed to check out");

    let order = system.order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.cart.items().len(), 2);
    assert_eq!(order.total(), Decimal::from(22));
    assert!(system.cart_client.snapshot(cart_id).await.unwrap().is_empty());

    system.shutdown().await.expect("Shutdown failed");
}
