//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the one `ApiClient` for the page, hands it down through
//! context, and bridges its session stream into a `RwSignal<SessionState>`
//! that the header and route guards read. The startup session check runs
//! once, after hydration.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos_meta::{MetaTags, Script, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::protected::Protected;
use crate::config::{ClientConfig, SESSION_HINT_KEY};
use crate::net::client::ApiClient;
use crate::net::transport::BrowserTransport;
use crate::pages::{
    catalog::CatalogPage, change_password::ChangePasswordPage, forgot_password::ForgotPasswordPage, login::LoginPage, not_found::NotFoundPage,
    register::RegisterPage, reset_password::ResetPasswordPage, watch::WatchPage,
};
use crate::state::session::SessionState;
use crate::util::session_hint::LocalStorageHint;

pub type AppClient = ApiClient<BrowserTransport, LocalStorageHint>;

/// Copyable context handle to the page's `ApiClient`.
#[derive(Clone, Copy)]
pub struct ClientHandle(StoredValue<AppClient, LocalStorage>);

impl ClientHandle {
    /// `None` once the owning root has been disposed.
    pub fn get(self) -> Option<AppClient> {
        self.0.try_get_value()
    }
}

pub fn use_client() -> ClientHandle {
    expect_context::<ClientHandle>()
}

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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let client: AppClient = ApiClient::new(
        BrowserTransport::new(config.api_base_url.clone()),
        LocalStorageHint::new(SESSION_HINT_KEY),
    );
    let session = RwSignal::new(SessionState::default());

    #[cfg(feature = "hydrate")]
    bridge_session(client.clone(), session);

    provide_context(ClientHandle(StoredValue::new_local(client)));
    provide_context(config);
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/streamhall.css"/>
        <Script src="https://cdn.jsdelivr.net/npm/hls.js@1"/>
        <Title text="Streamhall"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route
                        path=(StaticSegment("reset-password"), ParamSegment("uid"), ParamSegment("token"))
                        view=ResetPasswordPage
                    />
                    <Route path=StaticSegment("") view=ProtectedCatalog/>
                    <Route path=StaticSegment("videos") view=ProtectedCatalog/>
                    <Route path=(StaticSegment("watch"), ParamSegment("slug")) view=ProtectedWatch/>
                    <Route
                        path=(StaticSegment("account"), StaticSegment("password"))
                        view=ProtectedChangePassword
                    />
                    <Route path=StaticSegment("not-found") view=NotFoundPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ProtectedCatalog() -> impl IntoView {
    view! { <Protected><CatalogPage/></Protected> }
}

#[component]
fn ProtectedWatch() -> impl IntoView {
    view! { <Protected><WatchPage/></Protected> }
}

#[component]
fn ProtectedChangePassword() -> impl IntoView {
    view! { <Protected><ChangePasswordPage/></Protected> }
}

/// Mirror login-state changes into `session` and run the startup check.
#[cfg(feature = "hydrate")]
fn bridge_session(client: AppClient, session: RwSignal<SessionState>) {
    use futures::StreamExt as _;

    let mut logins = client.session().observe_login_state();
    leptos::task::spawn_local(async move {
        while let Some(logged_in) = logins.next().await {
            if session.try_set(SessionState { logged_in, initial_check_complete: true }).is_some() {
                break;
            }
        }
    });
    leptos::task::spawn_local(async move {
        client.start().await;
    });
}
