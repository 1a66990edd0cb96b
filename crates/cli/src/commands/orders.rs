use clap::Args;
use serde_json::json;

use noctis_core::config::AppConfig;
use noctis_core::domain::order::OrderStatus;
use noctis_core::orders::OrderHistory;

use crate::commands::CommandResult;

#[derive(Debug, Args)]
pub struct OrdersArgs {
    #[arg(
        long,
        help = "Only orders with this status: awaiting-payment|packing|shipping|complete"
    )]
    pub status: Option<OrderStatus>,

    #[arg(long, help = "Case-insensitive substring match on the order id")]
    pub search: Option<String>,
}

pub fn run(_config: &AppConfig, args: OrdersArgs) -> CommandResult {
    let history = OrderHistory::seed();

    let selected: Vec<_> = match (&args.status, &args.search) {
        (Some(status), None) => history.by_status(*status),
        (None, Some(query)) => history.search(query),
        (Some(status), Some(query)) => history
            .search(query)
            .into_iter()
            .filter(|order| order.status == *status)
            .collect(),
        (None, None) => history.all().iter().collect(),
    };

    let counts: serde_json::Map<String, serde_json::Value> = history
        .status_counts()
        .into_iter()
        .map(|(status, count)| (status.to_string(), json!(count)))
        .collect();

    match serde_json::to_value(&selected) {
        Ok(orders) => CommandResult::success_with(
            "orders",
            format!("{} of {} orders match", selected.len(), history.all().len()),
            Some(json!({ "status_counts": counts, "orders": orders })),
        ),
        Err(error) => CommandResult::failure(
            "orders",
            "serialization",
            format!("could not serialize orders: {error}"),
            3,
        ),
    }
}
