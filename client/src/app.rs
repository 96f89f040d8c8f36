//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    coming_soon::ComingSoonPage, fact_check::FactCheckPage, home::HomePage, innovation_news::InnovationNewsPage,
    login::LoginPage, progress_tracking::ProgressTrackingPage, register::RegisterPage,
};
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing. The server
/// always renders a logged-out session; the stored token is restored once
/// the client has hydrated, and session-aware views re-run from there.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    provide_context(session);

    Effect::new(move || {
        let restored = Session::restore();
        if restored.is_logged_in() {
            session.set(restored);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/flow-innovation.css"/>
        <Title text="Flow Innovation"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("fact-check") view=FactCheckPage/>
                    <Route path=StaticSegment("innovation-news") view=InnovationNewsPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("coming-soon") view=ComingSoonPage/>
                    <Route path=StaticSegment("progress-tracking") view=ProgressTrackingPage/>
                </Routes>
            </main>
        </Router>
    }
}
