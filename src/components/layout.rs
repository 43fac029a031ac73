use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Navbar plus content container wrapping every authenticated view.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let auth = use_auth();

    let fullname = auth
        .store
        .user
        .as_ref()
        .map(|user| user.fullname.clone())
        .unwrap_or_default();

    let on_logout = {
        let logout = auth.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    html! {
        <>
            <nav class="navbar navbar-expand-lg bg-light mb-2">
                <div class="container-fluid">
                    <Link<Route> classes="navbar-brand" to={Route::Dashboard}>
                        {"Portfolio Admin"}
                    </Link<Route>>
                    <div class="navbar-collapse">
                        <ul class="navbar-nav me-auto">
                            <NavItem to={Route::Dashboard} label="Dashboard" />
                            <NavItem to={Route::Projects} label="Projects" />
                            <NavItem to={Route::Experiences} label="Experiences" />
                            <NavItem to={Route::Technologies} label="Technologies" />
                            <NavItem to={Route::Users} label="Users" />
                            <NavItem to={Route::SocialNetworks} label="Social Networks" />
                        </ul>
                        <span class="navbar-text me-2">{fullname}</span>
                        <button class="btn btn-outline-danger" onclick={on_logout}>
                            {"Logout"}
                        </button>
                    </div>
                </div>
            </nav>

            <div class="container">
                { for props.children.iter() }
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct NavItemProps {
    to: Route,
    label: AttrValue,
}

#[function_component(NavItem)]
fn nav_item(props: &NavItemProps) -> Html {
    let current = use_route::<Route>();
    let active = current.as_ref() == Some(&props.to);

    let classes = if active {
        "nav-link active fw-bold"
    } else {
        "nav-link"
    };

    html! {
        <li class="nav-item">
            <Link<Route> classes={classes} to={props.to.clone()}>
                {props.label.clone()}
            </Link<Route>>
        </li>
    }
}
