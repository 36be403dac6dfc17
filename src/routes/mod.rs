mod analytics;
mod announcements;
mod dashboard;
mod health;
mod inventory;
mod login;
mod not_found;
mod orders;
mod payments;
mod signup;

pub(crate) use analytics::AnalyticsPage;
pub(crate) use announcements::AnnouncementsPage;
pub(crate) use dashboard::DashboardPage;
pub(crate) use health::HealthPage;
pub(crate) use inventory::InventoryPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use orders::OrdersPage;
pub(crate) use payments::PaymentsPage;
pub(crate) use signup::SignupPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route constants shared by navigation and guards.
pub(crate) mod paths {
    pub const DASHBOARD: &str = "/";
    pub const INVENTORY: &str = "/inventory";
    pub const ORDERS: &str = "/orders";
    pub const PAYMENTS: &str = "/payments";
    pub const ANNOUNCEMENTS: &str = "/announcements";
    pub const ANALYTICS: &str = "/analytics";
    pub const SIGNUP: &str = "/signup";
    pub const LOGIN: &str = "/login";
    pub const HEALTH: &str = "/health";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=DashboardPage />
            <Route path=path!("/inventory") view=InventoryPage />
            <Route path=path!("/orders") view=OrdersPage />
            <Route path=path!("/payments") view=PaymentsPage />
            <Route path=path!("/announcements") view=AnnouncementsPage />
            <Route path=path!("/analytics") view=AnalyticsPage />
            <Route path=path!("/signup") view=SignupPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
