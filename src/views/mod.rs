pub mod about_me_view;
pub mod dashboard_view;
pub mod experiences_view;
pub mod login_view;
pub mod not_found_view;
pub mod projects_view;
pub mod social_networks_view;
pub mod technologies_view;
pub mod users_view;

pub use about_me_view::AboutMeView;
pub use dashboard_view::DashboardView;
pub use experiences_view::ExperiencesView;
pub use login_view::LoginView;
pub use not_found_view::NotFoundView;
pub use projects_view::ProjectsView;
pub use social_networks_view::SocialNetworksView;
pub use technologies_view::TechnologiesView;
pub use users_view::UsersView;
