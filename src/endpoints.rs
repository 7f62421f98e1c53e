//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/transactions/{transaction_id}',
//! use [format_endpoint].

/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/api/transactions";
/// The route to update or delete a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";
/// The route to list and upsert budgets.
pub const BUDGETS: &str = "/api/budgets";
/// The route to update or delete a single budget.
pub const BUDGET: &str = "/api/budgets/{budget_id}";
/// The route for the income/expense/net summary.
pub const SUMMARY: &str = "/api/summary";
/// The route for per-category expense totals.
pub const CATEGORY_TOTALS: &str = "/api/reports/category-totals";
/// The route for the trailing six months of expense totals.
pub const MONTHLY_EXPENSES: &str = "/api/reports/monthly-expenses";
/// The route for budget-vs-actual comparisons for the current month.
pub const BUDGET_COMPARISON: &str = "/api/reports/budget-comparison";
/// The route for heuristic spending insights.
pub const INSIGHTS: &str = "/api/insights";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/budgets/{budget_id}',
/// '{budget_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII
/// characters and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::BUDGETS);
        assert_endpoint_is_valid_uri(endpoints::BUDGET);
        assert_endpoint_is_valid_uri(endpoints::SUMMARY);
        assert_endpoint_is_valid_uri(endpoints::CATEGORY_TOTALS);
        assert_endpoint_is_valid_uri(endpoints::MONTHLY_EXPENSES);
        assert_endpoint_is_valid_uri(endpoints::BUDGET_COMPARISON);
        assert_endpoint_is_valid_uri(endpoints::INSIGHTS);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/api/budgets/{budget_id}", 1);

        assert_eq!(formatted_path, "/api/budgets/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/api/budgets", 1);

        assert_eq!(formatted_path, "/api/budgets");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
