//! Shared mock gateway for handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{
    GatewayCustomer, GatewayError, NewCustomer, PaymentGateway, PaymentSession, Plan,
    SubscriptionRecord,
};

/// In-memory [`PaymentGateway`] that records calls and returns canned data.
pub(crate) struct MockGateway {
    pub subscriptions: Mutex<Option<Vec<SubscriptionRecord>>>,
    pub created_customers: Mutex<Vec<NewCustomer>>,
    pub created_subscriptions: Mutex<Vec<(String, String)>>,
    pub cancelled_subscriptions: Mutex<Vec<(String, String)>>,
    pub initialized_transactions: Mutex<Vec<(String, String, String)>>,
    pub fail_create_customer: bool,
    pub fail_list_subscriptions: bool,
    pub fail_create_subscription: bool,
    pub fail_cancel_subscription: bool,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            subscriptions: Mutex::new(None),
            created_customers: Mutex::new(Vec::new()),
            created_subscriptions: Mutex::new(Vec::new()),
            cancelled_subscriptions: Mutex::new(Vec::new()),
            initialized_transactions: Mutex::new(Vec::new()),
            fail_create_customer: false,
            fail_list_subscriptions: false,
            fail_create_subscription: false,
            fail_cancel_subscription: false,
        }
    }

    pub fn with_subscriptions(subscriptions: Vec<SubscriptionRecord>) -> Self {
        let gateway = Self::new();
        *gateway.subscriptions.lock().unwrap() = Some(subscriptions);
        gateway
    }

    pub fn failing_create_customer() -> Self {
        Self {
            fail_create_customer: true,
            ..Self::new()
        }
    }

    pub fn failing_list_subscriptions() -> Self {
        Self {
            fail_list_subscriptions: true,
            ..Self::new()
        }
    }

    pub fn failing_create_subscription() -> Self {
        Self {
            fail_create_subscription: true,
            ..Self::new()
        }
    }

    pub fn failing_cancel_subscription() -> Self {
        Self {
            fail_cancel_subscription: true,
            ..Self::new()
        }
    }
}

pub(crate) fn subscription(code: &str, token: &str) -> SubscriptionRecord {
    SubscriptionRecord {
        subscription_code: code.to_string(),
        email_token: token.to_string(),
        status: Some("active".to_string()),
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn create_customer(
        &self,
        customer: &NewCustomer,
    ) -> Result<GatewayCustomer, GatewayError> {
        if self.fail_create_customer {
            return Err(GatewayError::upstream("Customer creation failed"));
        }
        self.created_customers.lock().unwrap().push(customer.clone());
        Ok(GatewayCustomer {
            customer_code: "CUS_mock".to_string(),
            email: customer.email.clone(),
            subscriptions: Vec::new(),
        })
    }

    async fn find_customer_by_email(
        &self,
        email: &str,
    ) -> Result<GatewayCustomer, GatewayError> {
        Ok(GatewayCustomer {
            customer_code: "CUS_mock".to_string(),
            email: email.to_string(),
            subscriptions: self
                .subscriptions
                .lock()
                .unwrap()
                .clone()
                .unwrap_or_default(),
        })
    }

    async fn list_subscriptions(
        &self,
        _email: &str,
    ) -> Result<Option<Vec<SubscriptionRecord>>, GatewayError> {
        if self.fail_list_subscriptions {
            return Err(GatewayError::upstream("Customer retrieval failed"));
        }
        Ok(self.subscriptions.lock().unwrap().clone())
    }

    async fn initialize_transaction(
        &self,
        email: &str,
        plan_id: &str,
        transaction_id: &str,
    ) -> Result<PaymentSession, GatewayError> {
        self.initialized_transactions.lock().unwrap().push((
            email.to_string(),
            plan_id.to_string(),
            transaction_id.to_string(),
        ));
        Ok(PaymentSession {
            authorization_url: "https://checkout.paystack.com/mock".to_string(),
            access_code: "mock_access".to_string(),
            reference: format!("{plan_id}__{transaction_id}"),
        })
    }

    async fn initialize_subscription(
        &self,
        _email: &str,
        _plan_id: &str,
        transaction_id: &str,
    ) -> Result<PaymentSession, GatewayError> {
        Ok(PaymentSession {
            authorization_url: "https://checkout.paystack.com/mock".to_string(),
            access_code: "mock_access".to_string(),
            reference: transaction_id.to_string(),
        })
    }

    async fn get_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<SubscriptionRecord, GatewayError> {
        self.subscriptions
            .lock()
            .unwrap()
            .as_deref()
            .and_then(|subs| {
                subs.iter()
                    .find(|s| s.subscription_code == subscription_id)
                    .cloned()
            })
            .ok_or_else(|| GatewayError::upstream("Subscription not found"))
    }

    async fn create_subscription(
        &self,
        customer_code: &str,
        plan_id: &str,
    ) -> Result<(), GatewayError> {
        if self.fail_create_subscription {
            return Err(GatewayError::upstream("Subscription creation failed"));
        }
        self.created_subscriptions
            .lock()
            .unwrap()
            .push((customer_code.to_string(), plan_id.to_string()));
        Ok(())
    }

    async fn cancel_subscription(
        &self,
        subscription_code: &str,
        email_token: &str,
    ) -> Result<(), GatewayError> {
        if self.fail_cancel_subscription {
            return Err(GatewayError::upstream("Subscription disable failed"));
        }
        self.cancelled_subscriptions
            .lock()
            .unwrap()
            .push((subscription_code.to_string(), email_token.to_string()));
        Ok(())
    }

    async fn get_plan(&self, plan_id: &str) -> Result<Plan, GatewayError> {
        Ok(Plan {
            plan_code: plan_id.to_string(),
            name: "Mock Plan".to_string(),
            amount: 500_000,
        })
    }
}
