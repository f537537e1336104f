use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::impact::ImpactDashboard;
use crate::domain::blacklist::ui::BlacklistedList;
use crate::domain::event::ui::EventList;
use crate::domain::ngo::ui::{NgoDetails, NgoList};
use crate::domain::volunteer::ui::VolunteerList;
use crate::layout::{Footer, Navbar};
use crate::pages::{Home, NotFound};
use crate::system::pages::LoginPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main class="content">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/ngos") view=NgoList />
                    <Route path=path!("/ngos/:id") view=NgoDetails />
                    <Route path=path!("/volunteer") view=VolunteerList />
                    <Route path=path!("/events") view=EventList />
                    <Route path=path!("/impact") view=ImpactDashboard />
                    <Route path=path!("/blacklisted") view=BlacklistedList />
                    <Route path=path!("/login") view=LoginPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
