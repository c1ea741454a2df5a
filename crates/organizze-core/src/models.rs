//! Entity models for the Organizze API
//!
//! All entities are read-only snapshots decoded from upstream JSON and passed
//! through unchanged. Monetary fields are integer cents; there is no
//! floating-point money anywhere in the API.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// A bank account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub archived: bool,
    pub default: bool,
    #[serde(rename = "type")]
    pub kind: BankAccountKind,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankAccountKind {
    Checking,
    Savings,
    Other,
}

/// A credit card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub card_network: String,
    pub closing_day: u32,
    pub due_day: u32,
    pub limit_cents: i64,
    pub archived: bool,
    pub default: bool,
    pub institution_id: Option<String>,
    pub institution_name: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

/// One billing cycle of a credit card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCardInvoice {
    pub id: i64,
    pub date: NaiveDate,
    pub starting_date: NaiveDate,
    pub closing_date: NaiveDate,
    pub amount_cents: i64,
    pub payment_amount_cents: i64,
    pub balance_cents: i64,
    pub previous_balance_cents: i64,
    pub credit_card_id: i64,
}

/// An invoice plus its purchase and payment transactions, as returned by the
/// single-invoice detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedInvoice {
    #[serde(flatten)]
    pub invoice: CreditCardInvoice,
    pub transactions: Vec<Transaction>,
    pub payments: Vec<Transaction>,
}

/// A single ledger movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub description: String,
    pub date: NaiveDate,
    pub paid: bool,
    pub amount_cents: i64,
    pub total_installments: i64,
    pub installment: i64,
    pub recurring: bool,
    pub account_id: i64,
    pub account_type: AccountType,
    pub category_id: Option<i64>,
    pub notes: Option<String>,
    pub credit_card_id: Option<i64>,
    pub credit_card_invoice_id: Option<i64>,
    // upstream spells it "oposite"
    pub oposite_transaction_id: Option<i64>,
    pub oposite_account_id: Option<i64>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

/// Discriminator for the account a transaction settles against.
///
/// A `CreditCard` transaction always carries a non-null `credit_card_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    Account,
    CreditCard,
}

/// Free-form label attached to a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

/// Reference to a file attached to a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: i64,
    pub name: Option<String>,
    pub url: Option<String>,
}

/// Budgeted amount for one category in one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub amount_in_cents: i64,
    pub category_id: i64,
    pub date: NaiveDate,
    pub activity_type: i64,
    pub total: i64,
    pub predicted_total: i64,
    pub percentage: String,
}

/// A spending or earning category. Categories form a tree via `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub parent_id: Option<i64>,
    pub group_id: Option<i64>,
    pub fixed: bool,
    pub essential: bool,
    pub default: bool,
    pub archived: bool,
    pub uuid: String,
    pub kind: CategoryKind,
}

impl Category {
    /// Upstream marks root categories with a null or zero `parent_id`.
    pub fn is_root(&self) -> bool {
        matches!(self.parent_id, None | Some(0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Expenses,
    Earnings,
    None,
}
