use actix_web::web;
use std::sync::Arc;

use crate::contact::application::ports::outgoing::message_store::MockMessageStore;
use crate::contact::application::ports::outgoing::MessageStore;
use crate::portfolio::application::ports::outgoing::portfolio_store::MockPortfolioStore;
use crate::portfolio::application::ports::outgoing::PortfolioStore;
use crate::AppState;

/// Builds an `AppState` for route tests. Stores not supplied default to
/// mocks with no expectations, so touching them fails the test.
#[derive(Default)]
pub struct TestAppStateBuilder {
    messages: Option<Arc<dyn MessageStore>>,
    portfolio: Option<Arc<dyn PortfolioStore>>,
}

impl TestAppStateBuilder {
    pub fn with_message_store(mut self, store: impl MessageStore + 'static) -> Self {
        self.messages = Some(Arc::new(store));
        self
    }

    pub fn with_portfolio_store(mut self, store: impl PortfolioStore + 'static) -> Self {
        self.portfolio = Some(Arc::new(store));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            messages: self
                .messages
                .unwrap_or_else(|| Arc::new(MockMessageStore::new())),
            portfolio: self
                .portfolio
                .unwrap_or_else(|| Arc::new(MockPortfolioStore::new())),
        })
    }
}
