use super::model;
use crate::shared::components::StatCard;
use crate::shared::date_utils::format_money;
use contracts::dashboards::d400_sales_summary::dto::{MonthlyRevenueRow, SalesSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn SalesSummaryDashboard() -> impl IntoView {
    let (summary, set_summary) = signal(None::<SalesSummary>);
    let (monthly, set_monthly) = signal(Vec::<MonthlyRevenueRow>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        match model::fetch_summary().await {
            Ok(s) => set_summary.set(Some(s)),
            Err(e) => set_error.set(Some(e)),
        }
        match model::fetch_monthly_revenue().await {
            Ok(rows) => set_monthly.set(rows),
            Err(e) => set_error.set(Some(e)),
        }
        set_loading.set(false);
    });

    let orders_today = Signal::derive(move || {
        summary
            .get()
            .map(|s| s.orders_today.to_string())
            .unwrap_or_else(|| "—".to_string())
    });
    let revenue_today = Signal::derive(move || {
        summary
            .get()
            .map(|s| format_money(s.revenue_today))
            .unwrap_or_else(|| "—".to_string())
    });
    let pending_returns = Signal::derive(move || {
        summary
            .get()
            .map(|s| s.pending_returns.to_string())
            .unwrap_or_else(|| "—".to_string())
    });
    let active_customers = Signal::derive(move || {
        summary
            .get()
            .map(|s| s.active_customers.to_string())
            .unwrap_or_else(|| "—".to_string())
    });

    view! {
        <div class="dashboard sales-summary">
            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="dashboard__cards">
                <StatCard title="Orders today" value=orders_today icon_name="orders" />
                <StatCard title="Revenue today" value=revenue_today icon_name="bar-chart" />
                <StatCard
                    title="Pending returns"
                    value=pending_returns
                    icon_name="package-x"
                />
                <StatCard
                    title="Active customers"
                    value=active_customers
                    icon_name="customers"
                />
            </div>

            <div class="dashboard__table">
                <h4>"Monthly revenue"</h4>
                <Show
                    when=move || !loading.get()
                    fallback=|| {
                        view! {
                            <div class="list-loading">
                                <Spinner size=SpinnerSize::Small />
                            </div>
                        }
                    }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Month"</th>
                                <th class="data-table__num">"Orders"</th>
                                <th class="data-table__num">"Revenue"</th>
                                <th class="data-table__num">"Returns"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || monthly.get()
                                key=|row| row.month.clone()
                                children=move |row| {
                                    view! {
                                        <tr>
                                            <td>{row.month.clone()}</td>
                                            <td class="data-table__num">{row.order_count}</td>
                                            <td class="data-table__num">
                                                {format_money(row.revenue)}
                                            </td>
                                            <td class="data-table__num">{row.return_count}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>

                    {move || {
                        if monthly.get().is_empty() {
                            Some(view! { <div class="list-empty">"No data yet"</div> })
                        } else {
                            None
                        }
                    }}
                </Show>
            </div>
        </div>
    }
}
