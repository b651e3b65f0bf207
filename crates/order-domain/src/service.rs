//! Order saga entry points.

use common::{Clock, SystemClock};

use crate::error::OrderDomainError;
use crate::events::{OrderCancelledEvent, OrderCreatedEvent, OrderPaidEvent};
use crate::order::Order;
use crate::restaurant::Restaurant;

/// Drives the order state machine and decides which event comes next.
///
/// All methods are synchronous and mutate only the aggregates passed in.
/// The caller owns persistence and event delivery: after a successful
/// call, persist the aggregate and hand the returned event to the
/// messaging layer. After an `Err`, persist and publish nothing.
pub struct OrderDomainService<C = SystemClock> {
    clock: C,
}

impl OrderDomainService<SystemClock> {
    /// Creates a service stamping events with the system clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for OrderDomainService<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> OrderDomainService<C> {
    /// Creates a service with an explicit time source.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Validates an order against the restaurant and initiates it.
    ///
    /// Pricing is reconciled before structural validation: every item's
    /// name and unit price are overwritten with the catalog's values, so
    /// client-submitted pricing is never trusted past this point.
    pub fn validate_and_initiate_order(
        &self,
        order: &mut Order,
        restaurant: &Restaurant,
    ) -> Result<OrderCreatedEvent, OrderDomainError> {
        if !restaurant.is_active() {
            return Err(OrderDomainError::RestaurantNotActive {
                restaurant_id: restaurant.id(),
            });
        }

        Self::confirm_order_pricing(order, restaurant)?;

        order.validate()?;
        order.initialize();

        Ok(OrderCreatedEvent::new(order.clone(), self.clock.now()))
    }

    /// Marks the order as paid.
    pub fn pay_order(&self, order: &mut Order) -> Result<OrderPaidEvent, OrderDomainError> {
        order.pay()?;
        Ok(OrderPaidEvent::new(order.clone(), self.clock.now()))
    }

    /// Approves a paid order.
    ///
    /// Deliberately returns no event: approval is a terminal, locally
    /// observable state change with nothing downstream to trigger.
    pub fn approve_order(&self, order: &mut Order) -> Result<(), OrderDomainError> {
        order.approve()
    }

    /// Begins cancellation after a failed payment.
    ///
    /// The returned event is the trigger for the remote payment service's
    /// compensating cancellation.
    pub fn cancel_order_payment(
        &self,
        order: &mut Order,
        failure_messages: Vec<String>,
    ) -> Result<OrderCancelledEvent, OrderDomainError> {
        order.init_cancel(failure_messages)?;
        Ok(OrderCancelledEvent::new(order.clone(), self.clock.now()))
    }

    /// Finalizes cancellation.
    ///
    /// End of the compensation chain: no event, nothing downstream needs
    /// to react further.
    pub fn cancel_order(
        &self,
        order: &mut Order,
        failure_messages: Vec<String>,
    ) -> Result<(), OrderDomainError> {
        order.cancel(failure_messages)
    }

    fn confirm_order_pricing(
        order: &mut Order,
        restaurant: &Restaurant,
    ) -> Result<(), OrderDomainError> {
        let catalog = restaurant.products_by_id();
        for item in order.items_mut() {
            let product = catalog.get(&item.product_id).ok_or(
                OrderDomainError::ProductNotInCatalog {
                    product_id: item.product_id,
                },
            )?;
            item.confirm_name_and_price(&product.name, product.price);
        }
        Ok(())
    }
}
