use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::Modal;
use crate::hooks::use_resource;
use crate::models::Experience;

#[function_component(ExperiencesView)]
pub fn experiences_view() -> Html {
    let resource = use_resource::<Experience>();
    let show_modal = use_state(|| false);
    let show_description = use_state(|| false);
    let current = use_state(Experience::default);

    let open_new = {
        let show_modal = show_modal.clone();
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            current.set(Experience::default());
            show_modal.set(true);
        })
    };

    let open_edit = {
        let show_modal = show_modal.clone();
        let current = current.clone();
        Callback::from(move |experience: Experience| {
            current.set(experience);
            show_modal.set(true);
        })
    };

    let open_description = {
        let show_description = show_description.clone();
        let current = current.clone();
        Callback::from(move |experience: Experience| {
            current.set(experience);
            show_description.set(true);
        })
    };

    let close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(false))
    };

    let close_description = {
        let show_description = show_description.clone();
        Callback::from(move |_| show_description.set(false))
    };

    let on_submit = {
        let current = current.clone();
        let save = resource.save.clone();
        let close_modal = close_modal.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            save.emit(((*current).clone(), close_modal.clone()));
        })
    };

    let on_company = field_setter(&current, |exp, value| exp.company = value);
    let on_role = field_setter(&current, |exp, value| exp.role = value);
    let on_start = field_setter(&current, |exp, value| exp.start_date = value);
    let on_end = field_setter(&current, |exp, value| exp.end_date = value);

    let on_description = {
        let current = current.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut exp = (*current).clone();
            exp.description = area.value();
            current.set(exp);
        })
    };

    if resource.state.loading {
        return html! { <div>{"Loading experiences..."}</div> };
    }

    let rows = resource.state.items.iter().map(|experience| {
        let edit = {
            let open_edit = open_edit.clone();
            let experience = experience.clone();
            Callback::from(move |_: MouseEvent| open_edit.emit(experience.clone()))
        };
        let view = {
            let open_description = open_description.clone();
            let experience = experience.clone();
            Callback::from(move |_: MouseEvent| open_description.emit(experience.clone()))
        };
        let delete = {
            let delete = resource.delete.clone();
            let id = experience.id.clone().unwrap_or_default();
            Callback::from(move |_: MouseEvent| delete.emit(id.clone()))
        };

        html! {
            <tr key={experience.id.clone().unwrap_or_default()}>
                <td>{&experience.company}</td>
                <td>{&experience.role}</td>
                <td>{&experience.start_date}</td>
                <td>{ if experience.end_date.is_empty() { "Present" } else { experience.end_date.as_str() } }</td>
                <td>
                    <div class="btn-group">
                        <button class="btn btn-sm btn-outline-secondary" onclick={view}>{"Description"}</button>
                        <button class="btn btn-sm btn-outline-primary" onclick={edit}>{"Edit"}</button>
                        <button class="btn btn-sm btn-outline-danger" onclick={delete}>{"Delete"}</button>
                    </div>
                </td>
            </tr>
        }
    });

    html! {
        <div>
            <h2>{"Experiences"}</h2>
            if let Some(error) = &resource.state.error {
                <div class="alert alert-danger">{error}</div>
            }
            <button class="btn btn-primary mb-3" onclick={open_new}>{"Add Experience"}</button>
            <table class="table table-striped">
                <thead>
                    <tr>
                        <th>{"Company"}</th>
                        <th>{"Role"}</th>
                        <th>{"Start Date"}</th>
                        <th>{"End Date"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>{ for rows }</tbody>
            </table>

            if *show_modal {
                <Modal
                    title={if current.id.is_some() { "Edit Experience" } else { "Add Experience" }}
                    on_close={close_modal.clone()}
                >
                    <form onsubmit={on_submit}>
                        <div class="mb-3">
                            <label class="form-label">{"Company"}</label>
                            <input
                                type="text"
                                class="form-control"
                                value={current.company.clone()}
                                oninput={on_company}
                                required=true
                            />
                        </div>
                        <div class="mb-3">
                            <label class="form-label">{"Role"}</label>
                            <input
                                type="text"
                                class="form-control"
                                value={current.role.clone()}
                                oninput={on_role}
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
                            <label class="form-label">{"Start Date"}</label>
                            <input
                                type="date"
                                class="form-control"
                                value={current.start_date.clone()}
                                oninput={on_start}
                                required=true
                            />
                        </div>
                        <div class="mb-3">
                            <label class="form-label">{"End Date"}</label>
                            <input
                                type="date"
                                class="form-control"
                                value={current.end_date.clone()}
                                oninput={on_end}
                            />
                        </div>
                        <button type="submit" class="btn btn-primary" disabled={resource.state.saving}>
                            { if resource.state.saving { "Saving..." } else { "Save" } }
                        </button>
                    </form>
                </Modal>
            }

            if *show_description {
                <Modal
                    title={format!("{} at {}", current.role, current.company)}
                    on_close={close_description.clone()}
                >
                    <p>{&current.description}</p>
                </Modal>
            }
        </div>
    }
}

fn field_setter(
    current: &UseStateHandle<Experience>,
    apply: fn(&mut Experience, String),
) -> Callback<InputEvent> {
    let current = current.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut exp = (*current).clone();
        apply(&mut exp, input.value());
        current.set(exp);
    })
}
