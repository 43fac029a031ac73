use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundView)]
pub fn not_found_view() -> Html {
    html! {
        <div class="container text-center mt-5">
            <h1>{"404 - Page Not Found"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<Route> classes="btn btn-primary" to={Route::Home}>
                {"Go to Home"}
            </Link<Route>>
        </div>
    }
}
