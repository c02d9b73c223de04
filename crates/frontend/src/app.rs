use crate::routes::AppRoutes;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The session check starts here, once per page load.
    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
