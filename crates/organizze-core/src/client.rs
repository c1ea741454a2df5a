//! HTTP client for the Organizze REST API
//!
//! Each logical query maps to exactly one authenticated GET. Addressing is
//! fixed per operation: id-addressed resources go into the path, range and
//! account filters go into the query string. Failures are classified into
//! status, network, and decode errors; there are no retries and no timeout
//! beyond whatever reqwest provides by default.

use chrono::NaiveDate;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::Credentials;
use crate::error::{Error, Result};
use crate::models::{
    BankAccount, Budget, Category, CreditCard, CreditCardInvoice, DetailedInvoice, Transaction,
};

/// Production endpoint of the Organizze REST API
pub const DEFAULT_BASE_URL: &str = "https://api.organizze.com.br/rest/v2";

/// Result of an id-optional lookup.
///
/// Callers branch on the variant instead of duck-typing on array-ness; the
/// untagged serialization keeps the payload identical to the upstream body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fetched<T> {
    /// Every row the listing endpoint returned
    Collection(Vec<T>),
    /// The entity addressed by id; `None` when upstream answers a null body
    Single(Option<T>),
}

impl<T> Fetched<T> {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Collection(items) => items.is_empty(),
            Self::Single(entity) => entity.is_none(),
        }
    }
}

/// Client for the Organizze API
///
/// Holds only the immutable base URL and the precomputed authorization
/// header; safe to share across concurrent tool invocations.
#[derive(Clone)]
pub struct OrganizzeClient {
    http: reqwest::Client,
    base_url: String,
    auth_header: String,
}

impl OrganizzeClient {
    pub fn new(base_url: &str, credentials: &Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header: credentials.authorization_header(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List bank accounts, or fetch one when `account_id` is given
    pub async fn bank_accounts(&self, account_id: Option<i64>) -> Result<Fetched<BankAccount>> {
        match account_id {
            Some(id) => Ok(Fetched::Single(
                self.fetch(&format!("/accounts/{id}"), &[]).await?,
            )),
            None => Ok(Fetched::Collection(self.fetch("/accounts", &[]).await?)),
        }
    }

    /// List credit cards, or fetch one when `credit_card_id` is given
    pub async fn credit_cards(&self, credit_card_id: Option<i64>) -> Result<Fetched<CreditCard>> {
        match credit_card_id {
            Some(id) => Ok(Fetched::Single(
                self.fetch(&format!("/credit_cards/{id}"), &[]).await?,
            )),
            None => Ok(Fetched::Collection(self.fetch("/credit_cards", &[]).await?)),
        }
    }

    /// List the invoices of one credit card, optionally restricted to a range
    pub async fn credit_card_invoices(
        &self,
        credit_card_id: i64,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<CreditCardInvoice>> {
        let query = date_query(start_date, end_date);
        self.fetch(&format!("/credit_cards/{credit_card_id}/invoices"), &query)
            .await
    }

    /// Fetch one invoice with its purchase and payment transactions
    pub async fn invoice_details(
        &self,
        credit_card_id: i64,
        invoice_id: i64,
    ) -> Result<Option<DetailedInvoice>> {
        self.fetch(
            &format!("/credit_cards/{credit_card_id}/invoices/{invoice_id}"),
            &[],
        )
        .await
    }

    /// List transactions, optionally filtered by account and date range
    pub async fn transactions(
        &self,
        account_id: Option<i64>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Transaction>> {
        let mut query = Vec::new();
        if let Some(id) = account_id {
            query.push(("account_id", id.to_string()));
        }
        query.extend(date_query(start_date, end_date));
        self.fetch("/transactions", &query).await
    }

    /// Fetch one transaction by id
    pub async fn transaction(&self, transaction_id: i64) -> Result<Option<Transaction>> {
        self.fetch(&format!("/transactions/{transaction_id}"), &[])
            .await
    }

    /// List budgets, optionally scoped to a year or a year/month.
    ///
    /// The period goes into the path as segments; a month is only ever
    /// appended under a year.
    pub async fn budgets(&self, year: Option<&str>, month: Option<&str>) -> Result<Vec<Budget>> {
        let mut path = String::from("/budgets");
        if let Some(year) = year {
            path.push('/');
            path.push_str(year);
            if let Some(month) = month {
                path.push('/');
                path.push_str(month);
            }
        }
        self.fetch(&path, &[]).await
    }

    /// List categories, or fetch one when `category_id` is given
    pub async fn categories(&self, category_id: Option<i64>) -> Result<Fetched<Category>> {
        match category_id {
            Some(id) => Ok(Fetched::Single(
                self.fetch(&format!("/categories/{id}"), &[]).await?,
            )),
            None => Ok(Fetched::Collection(self.fetch("/categories", &[]).await?)),
        }
    }

    /// Issue one GET and decode the JSON body.
    ///
    /// Query pairs are purely additive; absent optional filters never reach
    /// the wire.
    async fn fetch<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let mut request = self
            .http
            .get(&url)
            .header(AUTHORIZATION, self.auth_header.as_str());
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn date_query(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(date) = start_date {
        query.push(("start_date", date.to_string()));
    }
    if let Some(date) = end_date {
        query.push(("end_date", date.to_string()));
    }
    query
}
