use web_sys::{FormData, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::Modal;
use crate::config::CONFIG;
use crate::hooks::use_resource;
use crate::models::{Project, Technology};

/// Projects carry an uploaded image, so saves always go through
/// multipart form data rather than the JSON path.
#[function_component(ProjectsView)]
pub fn projects_view() -> Html {
    let projects = use_resource::<Project>();
    let technologies = use_resource::<Technology>();
    let show_modal = use_state(|| false);
    let current = use_state(Project::default);
    let image_ref = use_node_ref();

    let open_new = {
        let show_modal = show_modal.clone();
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            current.set(Project::default());
            show_modal.set(true);
        })
    };

    let open_edit = {
        let show_modal = show_modal.clone();
        let current = current.clone();
        Callback::from(move |project: Project| {
            current.set(project);
            show_modal.set(true);
        })
    };

    let close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(false))
    };

    let on_submit = {
        let current = current.clone();
        let image_ref = image_ref.clone();
        let save_form = projects.save_form.clone();
        let close_modal = close_modal.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let project = (*current).clone();
            let Ok(form) = FormData::new() else { return };
            let _ = form.append_with_str("title", &project.title);
            let _ = form.append_with_str("description", &project.description);
            let _ = form.append_with_str(
                "technologies",
                &serde_json::to_string(&project.technologies).unwrap_or_default(),
            );

            if let Some(image) = image_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            {
                let _ = form.append_with_blob("image", &image);
            }

            save_form.emit((project.id.clone(), form, close_modal.clone()));
        })
    };

    let on_title = {
        let current = current.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut project = (*current).clone();
            project.title = input.value();
            current.set(project);
        })
    };

    let on_description = {
        let current = current.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut project = (*current).clone();
            project.description = area.value();
            current.set(project);
        })
    };

    let toggle_technology = {
        let current = current.clone();
        Callback::from(move |name: String| {
            let mut project = (*current).clone();
            if let Some(position) = project.technologies.iter().position(|t| t == &name) {
                project.technologies.remove(position);
            } else {
                project.technologies.push(name);
            }
            current.set(project);
        })
    };

    if projects.state.loading {
        return html! { <div>{"Loading projects..."}</div> };
    }

    let rows = projects.state.items.iter().map(|project| {
        let edit = {
            let open_edit = open_edit.clone();
            let project = project.clone();
            Callback::from(move |_: MouseEvent| open_edit.emit(project.clone()))
        };
        let delete = {
            let delete = projects.delete.clone();
            let id = project.id.clone().unwrap_or_default();
            Callback::from(move |_: MouseEvent| delete.emit(id.clone()))
        };

        html! {
            <tr key={project.id.clone().unwrap_or_default()}>
                <td>
                    if !project.image_url.is_empty() {
                        <img
                            src={format!("{}{}", CONFIG.backend_url(), project.image_url)}
                            alt={project.title.clone()}
                            width="60"
                        />
                    }
                </td>
                <td>{&project.title}</td>
                <td>{project.technologies.join(", ")}</td>
                <td>
                    <div class="btn-group">
                        <button class="btn btn-sm btn-outline-primary" onclick={edit}>{"Edit"}</button>
                        <button class="btn btn-sm btn-outline-danger" onclick={delete}>{"Delete"}</button>
                    </div>
                </td>
            </tr>
        }
    });

    let technology_checkboxes = technologies.state.items.iter().map(|tech| {
        let name = tech.name.clone();
        let checked = current.technologies.contains(&name);
        let on_toggle = {
            let toggle_technology = toggle_technology.clone();
            let name = name.clone();
            Callback::from(move |_: InputEvent| toggle_technology.emit(name.clone()))
        };

        html! {
            <div class="form-check" key={name.clone()}>
                <input
                    type="checkbox"
                    class="form-check-input"
                    id={format!("tech-{}", name)}
                    {checked}
                    oninput={on_toggle}
                />
                <label class="form-check-label" for={format!("tech-{}", name)}>
                    {name.clone()}
                </label>
            </div>
        }
    });

    html! {
        <div>
            <h2>{"Projects"}</h2>
            if let Some(error) = &projects.state.error {
                <div class="alert alert-danger">{error}</div>
            }
            <button class="btn btn-primary mb-3" onclick={open_new}>{"Add Project"}</button>
            <table class="table table-striped">
                <thead>
                    <tr>
                        <th>{"Image"}</th>
                        <th>{"Title"}</th>
                        <th>{"Technologies"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>{ for rows }</tbody>
            </table>

            if *show_modal {
                <Modal
                    title={if current.id.is_some() { "Edit Project" } else { "Add Project" }}
                    on_close={close_modal.clone()}
                >
                    <form onsubmit={on_submit}>
                        <div class="mb-3">
                            <label class="form-label">{"Title"}</label>
                            <input
                                type="text"
                                class="form-control"
                                value={current.title.clone()}
                                oninput={on_title}
                                required=true
                            />
                        </div>
                        <div class="mb-3">
                            <label class="form-label">{"Description"}</label>
                            <textarea
                                class="form-control"
                                rows="3"
                                value={current.description.clone()}
                                oninput={on_description}
                                required=true
                            />
                        </div>
                        <div class="mb-3">
                            <label class="form-label">{"Image"}</label>
                            <input
                                type="file"
                                class="form-control"
                                accept="image/*"
                                ref={image_ref.clone()}
                            />
                        </div>
                        <div class="mb-3">
                            <label class="form-label">{"Technologies"}</label>
                            { for technology_checkboxes }
                        </div>
                        <button type="submit" class="btn btn-primary" disabled={projects.state.saving}>
                            { if projects.state.saving { "Saving..." } else { "Save" } }
                        </button>
                    </form>
                </Modal>
            }
        </div>
    }
}
