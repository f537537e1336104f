use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::api::ApiClient;
use crate::system::auth::session::Session;

#[component]
pub fn App() -> impl IntoView {
    // The persisted token is read exactly once here; every page receives
    // the same client through context.
    let session = Session::load();
    provide_context(ApiClient::new(&session));
    provide_context(session);

    view! {
        <AppRoutes />
    }
}
