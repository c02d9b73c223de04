use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_store::ui::list::StoreList;
use crate::domain::a002_sale::ui::list::SaleList;
use crate::domain::a003_inventory::ui::list::InventoryList;
use crate::domain::a004_supplier::ui::list::SupplierList;
use crate::layout::Shell;
use crate::system::auth::guard::{PrivateRoute, PublicRoute};
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::usecases::u501_classify_fruit::view::ClassifyFruitPage;

/// Screens reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Stores,
    Sales,
    Inventory,
    Suppliers,
    Classify,
}

impl AppRoute {
    /// Sidebar order
    pub const NAV: [AppRoute; 6] = [
        AppRoute::Home,
        AppRoute::Stores,
        AppRoute::Sales,
        AppRoute::Inventory,
        AppRoute::Suppliers,
        AppRoute::Classify,
    ];

    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Stores => "/stores",
            AppRoute::Sales => "/sales",
            AppRoute::Inventory => "/inventory",
            AppRoute::Suppliers => "/suppliers",
            AppRoute::Classify => "/classify",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppRoute::Home => "Home",
            AppRoute::Stores => "Lojas",
            AppRoute::Sales => "Vendas",
            AppRoute::Inventory => "Estoque",
            AppRoute::Suppliers => "Fornecedores",
            AppRoute::Classify => "Verificar Fruta",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AppRoute::Home => "home",
            AppRoute::Stores => "stores",
            AppRoute::Sales => "sales",
            AppRoute::Inventory => "inventory",
            AppRoute::Suppliers => "suppliers",
            AppRoute::Classify => "classify",
        }
    }

    /// Route owning `pathname`; a trailing slash is ignored
    pub fn from_path(pathname: &str) -> Option<Self> {
        let trimmed = pathname.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::NAV.into_iter().find(|r| r.path() == normalized)
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route
                    path=path!("/login")
                    view=|| view! { <PublicRoute><LoginPage /></PublicRoute> }
                />
                <Route
                    path=path!("/")
                    view=|| view! { <PrivateRoute><Shell><HomePage /></Shell></PrivateRoute> }
                />
                <Route
                    path=path!("/stores")
                    view=|| view! { <PrivateRoute><Shell><StoreList /></Shell></PrivateRoute> }
                />
                <Route
                    path=path!("/sales")
                    view=|| view! { <PrivateRoute><Shell><SaleList /></Shell></PrivateRoute> }
                />
                <Route
                    path=path!("/inventory")
                    view=|| view! { <PrivateRoute><Shell><InventoryList /></Shell></PrivateRoute> }
                />
                <Route
                    path=path!("/suppliers")
                    view=|| view! { <PrivateRoute><Shell><SupplierList /></Shell></PrivateRoute> }
                />
                <Route
                    path=path!("/classify")
                    view=|| view! { <PrivateRoute><Shell><ClassifyFruitPage /></Shell></PrivateRoute> }
                />
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_paths_are_unique() {
        for (i, a) in AppRoute::NAV.iter().enumerate() {
            for b in &AppRoute::NAV[i + 1..] {
                assert_ne!(a.path(), b.path());
            }
        }
    }

    #[test]
    fn test_from_path() {
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path(""), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path("/inventory/"), Some(AppRoute::Inventory));
        assert_eq!(AppRoute::from_path("/classify"), Some(AppRoute::Classify));
        assert_eq!(AppRoute::from_path("/login"), None);
        assert_eq!(AppRoute::from_path("/stores/7"), None);
    }

    #[test]
    fn test_every_route_round_trips() {
        for route in AppRoute::NAV {
            assert_eq!(AppRoute::from_path(route.path()), Some(route));
        }
    }
}
