//! Tab content registry: the single mapping from tab key to view.

use super::tab_labels::{parse_company_route_details_key, COMPANY_ROUTE_NEW};
use crate::dashboards::d100_sales_analytics::ui::dashboard::SalesAnalyticsDashboard;
use crate::dashboards::d101_sales_summary::ui::dashboard::SalesSummaryDashboard;
use crate::domain::a001_region::ui::list::RegionList;
use crate::domain::a002_company_route::ui::details::CompanyRouteDetails;
use crate::domain::a002_company_route::ui::list::CompanyRouteList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::users::ui::list::UsersListPage;
use leptos::prelude::*;

/// Content for `key`; detail views get an `on_close` that closes their tab.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let close_self = Callback::new(move |_| tabs_store.close_tab(&key_for_close));

    match key {
        // Dashboards
        "d100_sales_analytics" => view! { <SalesAnalyticsDashboard /> }.into_any(),
        "d101_sales_summary" => view! { <SalesSummaryDashboard /> }.into_any(),

        // Catalogs
        "a001_region" => view! { <RegionList /> }.into_any(),
        "a002_company_route" => view! { <CompanyRouteList /> }.into_any(),
        COMPANY_ROUTE_NEW => view! { <CompanyRouteDetails id=None on_close=close_self /> }.into_any(),
        k if parse_company_route_details_key(k).is_some() => {
            let id = parse_company_route_details_key(k);
            view! { <CompanyRouteDetails id=id on_close=close_self /> }.into_any()
        }

        // System
        "sys_users" => view! { <UsersListPage /> }.into_any(),

        _ => {
            log::warn!("unknown tab key: {}", key);
            view! { <div class="placeholder">{"Page not found"}</div> }.into_any()
        }
    }
}
