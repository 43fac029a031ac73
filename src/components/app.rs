use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Layout;
use crate::hooks::dispatch_check;
use crate::routes::{decide, Route, RouteDecision};
use crate::stores::{AuthContext, AuthStore};
use crate::views::{
    DashboardView, ExperiencesView, LoginView, NotFoundView, ProjectsView,
    SocialNetworksView, TechnologiesView, UsersView,
};

#[function_component(App)]
pub fn app() -> Html {
    let store = use_reducer(AuthStore::default);

    // Resolve the ambient session cookie once, on application start.
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            dispatch_check(&store);
            || ()
        });
    }

    html! {
        <ContextProvider<AuthContext> context={store}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<AuthContext>>
    }
}

fn switch(route: Route) -> Html {
    html! { <Guard {route} /> }
}

#[derive(Properties, PartialEq)]
struct GuardProps {
    route: Route,
}

/// Route guard: every navigation target passes through here, and the
/// decision is re-taken whenever the session store changes.
#[function_component(Guard)]
fn guard(props: &GuardProps) -> Html {
    let store = use_context::<AuthContext>().expect("AuthContext not provided");

    match decide(&store, &props.route) {
        RouteDecision::Loading => html! {
            <div class="d-flex justify-content-center align-items-center vh-100">
                <div class="spinner-border text-primary" role="status">
                    <span class="visually-hidden">{"Loading..."}</span>
                </div>
            </div>
        },
        RouteDecision::Redirect(to) => html! { <Redirect<Route> to={to} /> },
        RouteDecision::Render => render_route(&props.route),
    }
}

fn render_route(route: &Route) -> Html {
    match route {
        Route::Login => html! { <LoginView /> },
        Route::NotFound => html! { <NotFoundView /> },
        // Home always redirects in the guard.
        Route::Home => Html::default(),
        Route::Dashboard => in_layout(html! { <DashboardView /> }),
        Route::Projects => in_layout(html! { <ProjectsView /> }),
        Route::Experiences => in_layout(html! { <ExperiencesView /> }),
        Route::Technologies => in_layout(html! { <TechnologiesView /> }),
        Route::SocialNetworks => in_layout(html! { <SocialNetworksView /> }),
        Route::Users => in_layout(html! { <UsersView /> }),
    }
}

fn in_layout(inner: Html) -> Html {
    html! { <Layout>{inner}</Layout> }
}
