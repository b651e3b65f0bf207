//! End-to-end choreography: order service → transport → payment service
//! → transport, with the compensation loop on failure.
//!
//! Plays the role of the two orchestrators: invoke a domain service,
//! hand the event to the dispatcher, then consume the published payload
//! on the other side exactly as a remote service would.

use chrono::{TimeZone, Utc};
use common::{
    CreditHistoryId, CustomerId, FixedClock, Money, OrderId, PaymentId, ProductId, RestaurantId,
};
use messaging::{EventDispatcher, InMemoryPublisher, TopicConfig};
use order_domain::{
    Order, OrderCreatedEvent, OrderDomainService, OrderItem, OrderStatus, Product, Restaurant,
};
use payment_domain::{
    CreditEntry, CreditHistory, Payment, PaymentDomainService, PaymentEvent, TransactionKind,
};

struct World {
    dispatcher: EventDispatcher<InMemoryPublisher>,
    publisher: InMemoryPublisher,
    order_service: OrderDomainService<FixedClock>,
    payment_service: PaymentDomainService<FixedClock>,
    restaurant: Restaurant,
    product: Product,
}

impl World {
    fn new() -> Self {
        let instant = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let publisher = InMemoryPublisher::new();
        let product = Product::new(ProductId::new(), "Margherita", Money::from_cents(1200));
        Self {
            dispatcher: EventDispatcher::new(publisher.clone(), TopicConfig::default()),
            publisher,
            order_service: OrderDomainService::with_clock(FixedClock(instant)),
            payment_service: PaymentDomainService::with_clock(FixedClock(instant)),
            restaurant: Restaurant::new(RestaurantId::new(), true, vec![product.clone()]),
            product,
        }
    }

    fn submitted_order(&self) -> Order {
        Order::new(
            OrderId::new(),
            CustomerId::new(),
            self.restaurant.id(),
            vec![OrderItem::new(
                self.product.id,
                "pizza",
                Money::from_cents(1200),
                1,
                Money::from_cents(1200),
            )],
            Money::from_cents(1200),
        )
    }

    fn funded_ledger(&self, customer_id: CustomerId, balance: i64) -> (CreditEntry, Vec<CreditHistory>) {
        (
            CreditEntry::new(customer_id, Money::from_cents(balance)),
            vec![CreditHistory::new(
                CreditHistoryId::new(),
                customer_id,
                TransactionKind::Credit,
                Money::from_cents(balance),
            )],
        )
    }
}

#[tokio::test]
async fn order_created_flows_to_payment_and_completes() {
    let w = World::new();
    let mut order = w.submitted_order();

    // Order side: validate, persist (elided), dispatch.
    let created = w
        .order_service
        .validate_and_initiate_order(&mut order, &w.restaurant)
        .unwrap();
    w.dispatcher.dispatch(created).await.unwrap();

    // Payment side: consume the published payload like a remote service.
    let records = w.publisher.records_for("payment-request");
    assert_eq!(records.len(), 1);
    let consumed: OrderCreatedEvent = serde_json::from_slice(&records[0].payload).unwrap();
    assert_eq!(consumed.order.id(), order.id());

    let customer_id = consumed.order.customer_id();
    let (mut entry, mut histories) = w.funded_ledger(customer_id, 10_000);
    let mut payment = Payment::new(
        PaymentId::new(),
        consumed.order.id(),
        customer_id,
        consumed.order.price(),
    );
    let mut messages = Vec::new();

    let outcome = w.payment_service.validate_and_initialize_payment(
        &mut payment,
        &mut entry,
        &mut histories,
        &mut messages,
    );
    assert!(matches!(outcome, PaymentEvent::Completed(_)));
    w.dispatcher.dispatch(outcome).await.unwrap();

    // Order side reacts to the completed payment.
    let responses = w.publisher.records_for("payment-response");
    assert_eq!(responses.len(), 1);
    let response: PaymentEvent = serde_json::from_slice(&responses[0].payload).unwrap();
    assert!(!response.is_failed());

    w.order_service.pay_order(&mut order).unwrap();
    assert_eq!(order.status(), Some(OrderStatus::Paid));
    assert_eq!(entry.total_credit_amount(), Money::from_cents(8800));
}

#[tokio::test]
async fn failed_payment_drives_the_compensation_loop() {
    let w = World::new();
    let mut order = w.submitted_order();

    let created = w
        .order_service
        .validate_and_initiate_order(&mut order, &w.restaurant)
        .unwrap();
    w.dispatcher.dispatch(created).await.unwrap();
    w.order_service.pay_order(&mut order).unwrap();

    // Payment side: not enough credit.
    let customer_id = order.customer_id();
    let (mut entry, mut histories) = w.funded_ledger(customer_id, 500);
    let mut payment = Payment::new(PaymentId::new(), order.id(), customer_id, order.price());
    let mut messages = Vec::new();

    let outcome = w.payment_service.validate_and_initialize_payment(
        &mut payment,
        &mut entry,
        &mut histories,
        &mut messages,
    );
    assert!(outcome.is_failed());
    let reasons = outcome.failure_messages().to_vec();
    w.dispatcher.dispatch(outcome).await.unwrap();

    // Order orchestrator consumes the failure and begins cancelling.
    let responses = w.publisher.records_for("payment-response");
    let response: PaymentEvent = serde_json::from_slice(&responses[0].payload).unwrap();
    assert!(response.is_failed());

    let cancelled = w
        .order_service
        .cancel_order_payment(&mut order, reasons.clone())
        .unwrap();
    assert_eq!(order.status(), Some(OrderStatus::Cancelling));
    w.dispatcher.dispatch(cancelled).await.unwrap();

    // Both order messages went out over the payment request topic, in
    // order, under the same partition key.
    let requests = w.publisher.records_for("payment-request");
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].partition_key, requests[1].partition_key);

    // Compensation finishes: order cancelled with the recorded reasons.
    w.order_service
        .cancel_order(&mut order, vec![])
        .unwrap();
    assert_eq!(order.status(), Some(OrderStatus::Cancelled));
    assert_eq!(order.failure_messages(), &reasons[..]);
}
