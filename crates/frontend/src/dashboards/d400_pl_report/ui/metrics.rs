use contracts::dashboards::d400_pl_report::ReportData;
use leptos::prelude::*;
use thaw::*;

use crate::dashboards::d400_pl_report::context::use_report;
use crate::shared::components::stat_card::StatCard;

/// One stat card: label, icon, amount, share of revenue
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: f64,
    pub margin: Option<f64>,
}

/// Headline figures of a generated report, revenue first
pub fn metric_cards(data: &ReportData) -> Vec<MetricCard> {
    let body = &data.data;
    let m = body.metrics;
    let card = |label, icon, value: f64, with_margin: bool| MetricCard {
        label,
        icon,
        value,
        margin: if with_margin { body.margin(value) } else { None },
    };

    vec![
        card("Revenue", "money", body.total_revenue(), false),
        card("Total costs", "trending-down", body.total_cost(), true),
        card("Gross profit", "trending-up", m.gross_profit, true),
        card("Profit after selling", "trending-up", m.profit_after_selling, true),
        card("EBITDA", "report", m.ebitda, true),
        card("EBIT", "report", m.ebit, true),
        card("EBT", "report", m.ebt, true),
        card("Net profit", "money", m.net_profit, true),
    ]
}

#[component]
pub fn MetricsSummary() -> impl IntoView {
    let report = use_report();
    let data = Memo::new(move |_| report.with(|s| s.report_data.clone()));

    move || {
        data.get().map(|data| {
            let meta = &data.metadata;
            let caption = format!(
                "{} / months {} / {} / generated {}",
                meta.year,
                meta.months
                    .iter()
                    .map(|m| m.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
                meta.business_groups.label(),
                meta.generated_at
            );
            let cards = metric_cards(&data);

            view! {
                <Card class="report-metrics">
                    <div class="report-metrics__caption">{caption}</div>
                    <div class="report-metrics__grid">
                        {cards.into_iter().map(|c| view! {
                            <StatCard
                                label=c.label.to_string()
                                icon_name=c.icon.to_string()
                                value=Signal::derive(move || Some(c.value))
                                margin=Signal::derive(move || c.margin)
                            />
                        }).collect_view()}
                    </div>
                </Card>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ReportData {
        serde_json::from_value(serde_json::json!({
            "metadata": {
                "year": 2025,
                "months": [1, 2],
                "business_groups": "All",
                "view_type": "monthly",
                "display_type": "amount",
                "show_common_size": false,
                "generated_at": "2025-03-01T10:00:00"
            },
            "data": {
                "revenue": {"Total": 1000.0},
                "cost_of_service": {"Total": 600.0},
                "selling_expense": {"Total": 100.0},
                "admin_expense": {"Total": 50.0},
                "metrics": {
                    "gross_profit": 400.0,
                    "profit_after_selling": 300.0,
                    "ebit": 250.0,
                    "ebitda": 280.0,
                    "ebt": 240.0,
                    "net_profit": 200.0
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_metric_cards() {
        let cards = metric_cards(&report());
        assert_eq!(cards.len(), 8);

        assert_eq!(cards[0].label, "Revenue");
        assert_eq!(cards[0].value, 1000.0);
        assert_eq!(cards[0].margin, None);

        assert_eq!(cards[1].value, 750.0);
        let net = cards.iter().find(|c| c.label == "Net profit").unwrap();
        assert!((net.margin.unwrap() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_revenue_has_no_margins() {
        let mut data = report();
        data.data.revenue.clear();
        let cards = metric_cards(&data);
        assert!(cards.iter().all(|c| c.margin.is_none()));
    }
}
