use crate::application::AppError;
use crate::domain::AccountMapping;

/// Employee account mapping (account name -> AWS account ID), bundled at build time
pub const EMPLOYEE_ACCOUNTS: &str = include_str!("employee_accounts.json");

/// Parse the bundled employee account mapping
pub fn employee_accounts() -> Result<AccountMapping, AppError> {
    AccountMapping::from_json_str(EMPLOYEE_ACCOUNTS)
}
