// Copyright 2018-2022 Cargill Incorporated
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use crate::erp::store::ErpStore;
use crate::quote::store::QuoteStore;
#[cfg(feature = "sqlite")]
use crate::store::sqlite::{SqlitePool, SqliteStoreFactory};
use crate::store::StoreFactory;
use crate::summarizer::Summarizer;

/// Application state shared by every route
#[derive(Clone)]
pub struct State {
    pub quote_store: Arc<dyn QuoteStore>,
    pub erp_store: Arc<dyn ErpStore>,
    pub summarizer: Arc<dyn Summarizer>,
}

impl State {
    pub fn new(
        quote_store: Arc<dyn QuoteStore>,
        erp_store: Arc<dyn ErpStore>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        Self {
            quote_store,
            erp_store,
            summarizer,
        }
    }

    /// Creates the state from the stores of one factory.
    pub fn from_store_factory(
        store_factory: &dyn StoreFactory,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        Self::new(
            Arc::from(store_factory.get_quote_store()),
            Arc::from(store_factory.get_erp_store()),
            summarizer,
        )
    }

    #[cfg(feature = "sqlite")]
    pub fn with_sqlite_pool(pool: SqlitePool, summarizer: Arc<dyn Summarizer>) -> Self {
        Self::from_store_factory(&SqliteStoreFactory::new(pool), summarizer)
    }
}
