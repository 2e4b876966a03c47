use contracts::projections::p900_sales_report::{ReportQuery, SalesReport, SALES_REPORT_PATH};
use contracts::shared::api::ApiError;

use crate::shared::api_client::ApiClient;

/// Sales summary for a period, optionally narrowed to one branch
pub async fn get_sales_report(client: &ApiClient, query: &ReportQuery) -> Result<SalesReport, ApiError> {
    client.get::<SalesReport, _>(SALES_REPORT_PATH, query).await
}
