//! MCP server for Organizze
//!
//! Registers one read-only tool per Organizze lookup. The tool
//! implementations live in organizze-core; this layer only declares names,
//! descriptions, and parameter schemas, and maps the three-part reply onto
//! MCP content.
//!
//! # Available Tools
//!
//! - `get-bank-accounts` - all bank accounts, or one by id
//! - `get-credit-cards` - all credit cards, or one by id
//! - `get-credit-card-invoices` - invoices of a card, optional date range
//! - `get-invoice-details` - one invoice with purchases and payments
//! - `get-transactions` - transactions, optional account and date filters
//! - `get-transaction` - one transaction by id
//! - `get-budgets` - budgets, optionally per year or year/month
//! - `get-categories` - all categories, or one by id

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};

use organizze_core::tools::{
    self, BankAccountsParams, BudgetsParams, CategoriesParams, CreditCardInvoicesParams,
    CreditCardsParams, InvoiceDetailsParams, ToolReply, TransactionParams, TransactionsParams,
};
use organizze_core::OrganizzeClient;

/// Organizze MCP server state
#[derive(Clone)]
pub struct OrganizzeMcpServer {
    /// Upstream client shared across concurrent tool invocations
    client: Arc<OrganizzeClient>,
    /// Tool router for MCP operations
    tool_router: ToolRouter<Self>,
}

impl OrganizzeMcpServer {
    /// Create a new MCP server around an already-configured client
    pub fn new(client: OrganizzeClient) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }
}

/// Map the three-shape reply onto MCP content.
///
/// Empty and failure replies carry one text segment, success carries the
/// label followed by the pretty-printed payload. Failures set the error flag
/// but still travel as results, never as protocol faults.
pub(crate) fn call_tool_result(reply: ToolReply) -> CallToolResult {
    match reply {
        ToolReply::Empty { label } => CallToolResult::success(vec![Content::text(label)]),
        ToolReply::Success { label, payload } => {
            CallToolResult::success(vec![Content::text(label), Content::text(payload)])
        }
        ToolReply::Failure { label } => CallToolResult::error(vec![Content::text(label)]),
    }
}

#[tool_handler]
impl ServerHandler for OrganizzeMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "organizze-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("Organizze".to_string()),
                website_url: None,
                icons: None,
            },
            instructions: Some(
                "Read-only access to an Organizze account. Use the available tools to look up \
                 bank accounts, credit cards and their invoices, transactions, budgets, and \
                 categories. All monetary amounts are integer cents."
                    .to_string(),
            ),
        }
    }
}

#[tool_router(vis = "pub(crate)")]
impl OrganizzeMcpServer {
    #[tool(
        name = "get-bank-accounts",
        description = "Get bank accounts. Returns every account, or a single account when account_id is given."
    )]
    pub(crate) async fn get_bank_accounts(
        &self,
        Parameters(params): Parameters<BankAccountsParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(call_tool_result(
            tools::get_bank_accounts(&self.client, params).await,
        ))
    }

    #[tool(
        name = "get-credit-cards",
        description = "Get credit cards. Returns every card, or a single card when credit_card_id is given."
    )]
    async fn get_credit_cards(
        &self,
        Parameters(params): Parameters<CreditCardsParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(call_tool_result(
            tools::get_credit_cards(&self.client, params).await,
        ))
    }

    #[tool(
        name = "get-credit-card-invoices",
        description = "List the invoices of a credit card, optionally restricted to a start_date/end_date range."
    )]
    async fn get_credit_card_invoices(
        &self,
        Parameters(params): Parameters<CreditCardInvoicesParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(call_tool_result(
            tools::get_credit_card_invoices(&self.client, params).await,
        ))
    }

    #[tool(
        name = "get-invoice-details",
        description = "Get one credit card invoice with its purchase and payment transactions."
    )]
    async fn get_invoice_details(
        &self,
        Parameters(params): Parameters<InvoiceDetailsParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(call_tool_result(
            tools::get_invoice_details(&self.client, params).await,
        ))
    }

    #[tool(
        name = "get-transactions",
        description = "List transactions, optionally filtered by account_id and a start_date/end_date range."
    )]
    async fn get_transactions(
        &self,
        Parameters(params): Parameters<TransactionsParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(call_tool_result(
            tools::get_transactions(&self.client, params).await,
        ))
    }

    #[tool(
        name = "get-transaction",
        description = "Get a single transaction by id."
    )]
    async fn get_transaction(
        &self,
        Parameters(params): Parameters<TransactionParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(call_tool_result(
            tools::get_transaction(&self.client, params).await,
        ))
    }

    #[tool(
        name = "get-budgets",
        description = "List budgets, optionally for a given year or year/month."
    )]
    async fn get_budgets(
        &self,
        Parameters(params): Parameters<BudgetsParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(call_tool_result(
            tools::get_budgets(&self.client, params).await,
        ))
    }

    #[tool(
        name = "get-categories",
        description = "Get categories. Returns every category, or a single category when category_id is given."
    )]
    async fn get_categories(
        &self,
        Parameters(params): Parameters<CategoriesParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(call_tool_result(
            tools::get_categories(&self.client, params).await,
        ))
    }
}
