//! MCP tool implementations for Organizze lookups
//!
//! Each tool validates its arguments, delegates one query to the
//! [`OrganizzeClient`], and shapes the outcome into the three-part reply
//! contract: empty, success with a pretty-printed payload, or failure. All
//! tools are read-only and safe for LLM invocation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::client::{Fetched, OrganizzeClient};
use crate::error::{Error, Result};

// =============================================================================
// Reply contract (shared by every tool)
// =============================================================================

/// The three-shape result of a tool invocation.
///
/// Every invocation produces exactly one of these; errors never escape a
/// tool's boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolReply {
    /// Nothing matched upstream: `"No {noun} found"`, no payload
    Empty { label: String },
    /// `"{Noun} found"` plus the decoded payload as pretty-printed JSON
    Success { label: String, payload: String },
    /// `"Failed to get {noun}: {error}"`, caught at the tool boundary
    Failure { label: String },
}

impl ToolReply {
    fn failure(noun: &str, err: &Error) -> Self {
        Self::Failure {
            label: format!("Failed to get {noun}: {err}"),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Empty { label } | Self::Failure { label } => label,
            Self::Success { label, .. } => label,
        }
    }

    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Success { payload, .. } => Some(payload),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

/// Emptiness test behind the `Empty` reply shape: listing endpoints answer
/// (possibly empty) arrays, id-addressed endpoints can answer a null body.
trait NoneFound {
    fn none_found(&self) -> bool;
}

impl<T> NoneFound for Vec<T> {
    fn none_found(&self) -> bool {
        self.is_empty()
    }
}

impl<T> NoneFound for Option<T> {
    fn none_found(&self) -> bool {
        self.is_none()
    }
}

impl<T> NoneFound for Fetched<T> {
    fn none_found(&self) -> bool {
        self.is_empty()
    }
}

/// Shape one outcome into the reply contract. Applied uniformly so no tool
/// re-derives the envelope rules.
fn reply<T>(noun: &str, outcome: Result<T>) -> ToolReply
where
    T: Serialize + NoneFound,
{
    let found = match outcome {
        Ok(found) => found,
        Err(err) => return ToolReply::failure(noun, &err),
    };

    if found.none_found() {
        return ToolReply::Empty {
            label: format!("No {noun} found"),
        };
    }

    match serde_json::to_string_pretty(&found) {
        Ok(payload) => ToolReply::Success {
            label: format!("{} found", capitalize(noun)),
            payload,
        },
        Err(err) => ToolReply::failure(noun, &Error::Decode(err)),
    }
}

fn capitalize(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Argument validation helpers
// =============================================================================

fn require<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(Error::MissingArgument(name))
}

fn parse_date_opt(value: Option<&str>, name: &str) -> Result<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                Error::InvalidArgument(format!("{name} must be YYYY-MM-DD, got {raw:?}"))
            }),
    }
}

/// Years and months travel as path segments, so they must be digit strings.
/// Zero-padding is preserved verbatim ("03" stays "03").
fn numeric_segment(value: Option<&str>, name: &str) -> Result<Option<String>> {
    match value {
        None => Ok(None),
        Some(raw) if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => {
            Ok(Some(raw.to_string()))
        }
        Some(raw) => Err(Error::InvalidArgument(format!(
            "{name} must be numeric, got {raw:?}"
        ))),
    }
}

// =============================================================================
// get-bank-accounts
// =============================================================================

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct BankAccountsParams {
    /// Fetch one account instead of the full listing
    #[schemars(
        description = "Bank account id. When given, fetches that single account instead of listing all accounts"
    )]
    pub account_id: Option<i64>,
}

pub async fn get_bank_accounts(
    client: &OrganizzeClient,
    params: BankAccountsParams,
) -> ToolReply {
    reply(
        "bank accounts",
        client.bank_accounts(params.account_id).await,
    )
}

// =============================================================================
// get-credit-cards
// =============================================================================

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct CreditCardsParams {
    /// Fetch one card instead of the full listing
    #[schemars(
        description = "Credit card id. When given, fetches that single card instead of listing all cards"
    )]
    pub credit_card_id: Option<i64>,
}

pub async fn get_credit_cards(client: &OrganizzeClient, params: CreditCardsParams) -> ToolReply {
    reply(
        "credit cards",
        client.credit_cards(params.credit_card_id).await,
    )
}

// =============================================================================
// get-credit-card-invoices
// =============================================================================

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct CreditCardInvoicesParams {
    /// Card whose invoices are listed
    #[schemars(description = "Required. Credit card id whose invoices are listed")]
    pub credit_card_id: Option<i64>,

    /// Start of the date range (YYYY-MM-DD)
    #[schemars(description = "Only invoices from this date on, YYYY-MM-DD")]
    pub start_date: Option<String>,

    /// End of the date range (YYYY-MM-DD)
    #[schemars(description = "Only invoices up to this date, YYYY-MM-DD")]
    pub end_date: Option<String>,
}

pub async fn get_credit_card_invoices(
    client: &OrganizzeClient,
    params: CreditCardInvoicesParams,
) -> ToolReply {
    let outcome = async {
        let credit_card_id = require(params.credit_card_id, "credit_card_id")?;
        let start_date = parse_date_opt(params.start_date.as_deref(), "start_date")?;
        let end_date = parse_date_opt(params.end_date.as_deref(), "end_date")?;
        client
            .credit_card_invoices(credit_card_id, start_date, end_date)
            .await
    }
    .await;
    reply("credit card invoices", outcome)
}

// =============================================================================
// get-invoice-details
// =============================================================================

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct InvoiceDetailsParams {
    /// Card the invoice belongs to
    #[schemars(description = "Required. Credit card id the invoice belongs to")]
    pub credit_card_id: Option<i64>,

    /// Invoice to fetch
    #[schemars(description = "Required. Invoice id to fetch")]
    pub invoice_id: Option<i64>,
}

pub async fn get_invoice_details(
    client: &OrganizzeClient,
    params: InvoiceDetailsParams,
) -> ToolReply {
    let outcome = async {
        let credit_card_id = require(params.credit_card_id, "credit_card_id")?;
        let invoice_id = require(params.invoice_id, "invoice_id")?;
        client.invoice_details(credit_card_id, invoice_id).await
    }
    .await;
    reply("invoice details", outcome)
}

// =============================================================================
// get-transactions
// =============================================================================

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct TransactionsParams {
    /// Restrict to one account
    #[schemars(description = "Only transactions of this bank account or card")]
    pub account_id: Option<i64>,

    /// Start of the date range (YYYY-MM-DD)
    #[schemars(description = "Only transactions from this date on, YYYY-MM-DD")]
    pub start_date: Option<String>,

    /// End of the date range (YYYY-MM-DD)
    #[schemars(description = "Only transactions up to this date, YYYY-MM-DD")]
    pub end_date: Option<String>,
}

pub async fn get_transactions(client: &OrganizzeClient, params: TransactionsParams) -> ToolReply {
    let outcome = async {
        let start_date = parse_date_opt(params.start_date.as_deref(), "start_date")?;
        let end_date = parse_date_opt(params.end_date.as_deref(), "end_date")?;
        client
            .transactions(params.account_id, start_date, end_date)
            .await
    }
    .await;
    reply("transactions", outcome)
}

// =============================================================================
// get-transaction
// =============================================================================

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct TransactionParams {
    /// Transaction to fetch
    #[schemars(description = "Required. Transaction id to fetch")]
    pub transaction_id: Option<i64>,
}

pub async fn get_transaction(client: &OrganizzeClient, params: TransactionParams) -> ToolReply {
    let outcome = async {
        let transaction_id = require(params.transaction_id, "transaction_id")?;
        client.transaction(transaction_id).await
    }
    .await;
    reply("transaction", outcome)
}

// =============================================================================
// get-budgets
// =============================================================================

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct BudgetsParams {
    /// Budget year, e.g. "2024"
    #[schemars(description = "Budget year as digits, e.g. 2024")]
    pub year: Option<String>,

    /// Budget month, e.g. "03"; requires year
    #[schemars(description = "Budget month as digits, e.g. 03. Only valid together with year")]
    pub month: Option<String>,
}

pub async fn get_budgets(client: &OrganizzeClient, params: BudgetsParams) -> ToolReply {
    let outcome = async {
        let year = numeric_segment(params.year.as_deref(), "year")?;
        let month = numeric_segment(params.month.as_deref(), "month")?;
        if month.is_some() && year.is_none() {
            return Err(Error::InvalidArgument(
                "month requires a year".to_string(),
            ));
        }
        client.budgets(year.as_deref(), month.as_deref()).await
    }
    .await;
    reply("budgets", outcome)
}

// =============================================================================
// get-categories
// =============================================================================

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct CategoriesParams {
    /// Fetch one category instead of the full listing
    #[schemars(
        description = "Category id. When given, fetches that single category instead of listing all categories"
    )]
    pub category_id: Option<i64>,
}

pub async fn get_categories(client: &OrganizzeClient, params: CategoriesParams) -> ToolReply {
    reply("categories", client.categories(params.category_id).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_success_capitalizes_label() {
        let outcome: Result<Vec<i64>> = Ok(vec![1, 2, 3]);
        let reply = reply("bank accounts", outcome);
        assert_eq!(reply.label(), "Bank accounts found");
        let payload: Vec<i64> = serde_json::from_str(reply.payload().unwrap()).unwrap();
        assert_eq!(payload, vec![1, 2, 3]);
    }

    #[test]
    fn test_reply_empty_collection() {
        let outcome: Result<Vec<i64>> = Ok(vec![]);
        let reply = reply("budgets", outcome);
        assert_eq!(
            reply,
            ToolReply::Empty {
                label: "No budgets found".to_string()
            }
        );
        assert!(reply.payload().is_none());
    }

    #[test]
    fn test_reply_null_single_entity() {
        let outcome: Result<Option<i64>> = Ok(None);
        let reply = reply("transaction", outcome);
        assert_eq!(reply.label(), "No transaction found");
    }

    #[test]
    fn test_reply_failure_carries_error_text() {
        let outcome: Result<Vec<i64>> = Err(Error::Status(404));
        let reply = reply("credit cards", outcome);
        assert!(reply.is_failure());
        assert_eq!(
            reply.label(),
            "Failed to get credit cards: HTTP error! status: 404"
        );
    }

    #[test]
    fn test_require_missing_argument() {
        let missing: Result<i64> = require(None, "transaction_id");
        assert!(matches!(
            missing,
            Err(Error::MissingArgument("transaction_id"))
        ));
        assert_eq!(require(Some(7), "transaction_id").unwrap(), 7);
    }

    #[test]
    fn test_parse_date_opt() {
        assert_eq!(parse_date_opt(None, "start_date").unwrap(), None);
        assert_eq!(
            parse_date_opt(Some("2024-01-31"), "start_date").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31)
        );
        assert!(parse_date_opt(Some("Jan 31"), "start_date").is_err());
        assert!(parse_date_opt(Some("2024-13-01"), "start_date").is_err());
    }

    #[test]
    fn test_numeric_segment_preserves_zero_padding() {
        assert_eq!(
            numeric_segment(Some("03"), "month").unwrap(),
            Some("03".to_string())
        );
        assert_eq!(numeric_segment(None, "month").unwrap(), None);
        assert!(numeric_segment(Some(""), "month").is_err());
        assert!(numeric_segment(Some("march"), "month").is_err());
    }

    #[test]
    fn test_capitalize_first_letter_only() {
        assert_eq!(capitalize("bank accounts"), "Bank accounts");
        assert_eq!(capitalize("transaction"), "Transaction");
        assert_eq!(capitalize(""), "");
    }
}
