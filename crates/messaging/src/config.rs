//! Destination topic naming.

/// Topic names for the saga's three destinations.
#[derive(Debug, Clone)]
pub struct TopicConfig {
    /// Order service → payment service (created / cancelled orders).
    pub payment_request_topic: String,

    /// Payment service → order service (completed / cancelled / failed).
    pub payment_response_topic: String,

    /// Order service → restaurant service (paid orders awaiting approval).
    pub restaurant_approval_request_topic: String,
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self {
            payment_request_topic: "payment-request".to_string(),
            payment_response_topic: "payment-response".to_string(),
            restaurant_approval_request_topic: "restaurant-approval-request".to_string(),
        }
    }
}
