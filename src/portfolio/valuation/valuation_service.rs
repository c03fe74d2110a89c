use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use crate::accounts::AccountRepositoryTrait;
use crate::customers::CustomerRepositoryTrait;
use crate::errors::Result;
use crate::holdings::HoldingRepositoryTrait;
use crate::market_data::{DailyPrice, MarketDataRepositoryTrait};
use crate::portfolio::portfolio_model::AnalyticsRequest;
use crate::securities::{normalize_asset_class, Security, SecurityRepositoryTrait};

use super::valuation_model::DailyHoldingValuation;

/// Joins customers, accounts, holdings, the security master and daily
/// pricing into the per-holding-per-day valuation rows every downstream
/// stage consumes.
pub struct ValuationService {
    customer_repository: Arc<dyn CustomerRepositoryTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
    holding_repository: Arc<dyn HoldingRepositoryTrait>,
    security_repository: Arc<dyn SecurityRepositoryTrait>,
    market_data_repository: Arc<dyn MarketDataRepositoryTrait>,
}

impl ValuationService {
    /// Creates a new ValuationService instance
    pub fn new(
        customer_repository: Arc<dyn CustomerRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        holding_repository: Arc<dyn HoldingRepositoryTrait>,
        security_repository: Arc<dyn SecurityRepositoryTrait>,
        market_data_repository: Arc<dyn MarketDataRepositoryTrait>,
    ) -> Self {
        Self {
            customer_repository,
            account_repository,
            holding_repository,
            security_repository,
            market_data_repository,
        }
    }

    /// Builds the joined valuation rows for the requested customers, date
    /// window and price type.
    ///
    /// Inner-join semantics throughout: holdings without a security-master
    /// entry or without prices of the requested type in the window are
    /// excluded, never an error. Unknown customers produce an empty set.
    pub fn build_holding_valuations(
        &self,
        request: &AnalyticsRequest,
    ) -> Result<Vec<DailyHoldingValuation>> {
        let customers = self.customer_repository.list_by_ids(&request.customer_ids)?;
        if customers.is_empty() {
            debug!(
                "No customers matched {:?}; returning empty valuation set",
                request.customer_ids
            );
            return Ok(Vec::new());
        }
        let customer_names: HashMap<String, String> = customers
            .into_iter()
            .map(|c| (c.customer_id, c.full_name))
            .collect();

        let accounts = self
            .account_repository
            .list_by_customer_ids(&request.customer_ids)?;
        if accounts.is_empty() {
            return Ok(Vec::new());
        }
        let account_ids: Vec<String> = accounts.iter().map(|a| a.account_id.clone()).collect();
        let accounts_by_id: HashMap<String, _> = accounts
            .into_iter()
            .map(|a| (a.account_id.clone(), a))
            .collect();

        let holdings = self.holding_repository.list_by_account_ids(&account_ids)?;
        if holdings.is_empty() {
            return Ok(Vec::new());
        }

        let mut tickers: Vec<String> = holdings.iter().map(|h| h.ticker.clone()).collect();
        tickers.sort();
        tickers.dedup();

        let securities: HashMap<String, Security> = self
            .security_repository
            .list_by_tickers(&tickers)?
            .into_iter()
            .map(|s| (s.ticker.clone(), s))
            .collect();

        let prices = self.market_data_repository.get_prices(
            &tickers,
            request.start_date,
            request.end_date,
            &request.price_type,
        )?;
        let mut prices_by_ticker: HashMap<String, Vec<DailyPrice>> = HashMap::new();
        for price in prices {
            prices_by_ticker
                .entry(price.ticker.clone())
                .or_default()
                .push(price);
        }
        // The lag below depends on strict date order within each ticker;
        // sort here instead of trusting the repository ordering.
        for series in prices_by_ticker.values_mut() {
            series.sort_by_key(|p| p.date);
        }

        let mut rows = Vec::new();
        for holding in &holdings {
            let account = match accounts_by_id.get(&holding.account_id) {
                Some(account) => account,
                None => continue,
            };
            let full_name = match customer_names.get(&account.client_id) {
                Some(name) => name,
                None => continue,
            };
            let security = match securities.get(&holding.ticker) {
                Some(security) => security,
                None => {
                    debug!(
                        "Holding {}/{} has no security-master entry; excluded",
                        holding.account_id, holding.ticker
                    );
                    continue;
                }
            };
            let series = match prices_by_ticker.get(&holding.ticker) {
                Some(series) if !series.is_empty() => series,
                _ => {
                    debug!(
                        "No '{}' prices for {} between {} and {}; excluded",
                        request.price_type, holding.ticker, request.start_date, request.end_date
                    );
                    continue;
                }
            };

            let major_asset_class = normalize_asset_class(&security.major_asset_class);

            let mut prior_value: Option<Decimal> = None;
            for price in series {
                rows.push(DailyHoldingValuation {
                    customer_id: account.client_id.clone(),
                    full_name: full_name.clone(),
                    account_open_date: account.acct_open_date,
                    major_asset_class: major_asset_class.clone(),
                    minor_asset_class: security.minor_asset_class.clone(),
                    ticker: holding.ticker.clone(),
                    security_name: security.security_name.clone(),
                    quantity: holding.quantity,
                    date: price.date,
                    value: price.value,
                    prior_value,
                    position_value: holding.quantity * price.value,
                });
                prior_value = Some(price.value);
            }
        }

        rows.sort_by(|a, b| a.ticker.cmp(&b.ticker).then(a.date.cmp(&b.date)));

        Ok(rows)
    }
}
