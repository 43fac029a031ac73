use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::views::AboutMeView;

struct Section {
    title: &'static str,
    text: &'static str,
    route: Route,
}

const SECTIONS: &[Section] = &[
    Section {
        title: "Projects",
        text: "Manage your portfolio projects. Add, edit, or remove projects.",
        route: Route::Projects,
    },
    Section {
        title: "Experiences",
        text: "Update your work experiences. Add new roles or edit existing ones.",
        route: Route::Experiences,
    },
    Section {
        title: "Technologies",
        text: "Manage the technologies and skills you're proficient in.",
        route: Route::Technologies,
    },
    Section {
        title: "Social Networks",
        text: "Manage your social network profiles and links.",
        route: Route::SocialNetworks,
    },
    Section {
        title: "Users",
        text: "Manage user accounts for the admin panel.",
        route: Route::Users,
    },
];

#[function_component(DashboardView)]
pub fn dashboard_view() -> Html {
    html! {
        <div class="container mt-4">
            <h1 class="text-center mb-4">{"Portfolio Dashboard"}</h1>
            <div class="row">
                <div class="col-md-12">
                    <AboutMeView />
                </div>
            </div>
            <div class="row">
                { for SECTIONS.iter().map(section_card) }
            </div>
        </div>
    }
}

fn section_card(section: &Section) -> Html {
    html! {
        <div class="col-md-4">
            <div class="card mb-4">
                <div class="card-body">
                    <h5 class="card-title">{section.title}</h5>
                    <p class="card-text">{section.text}</p>
                    <Link<Route> classes="btn btn-primary" to={section.route.clone()}>
                        {format!("Go to {}", section.title)}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
