use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::Modal;
use crate::hooks::use_resource;
use crate::models::Technology;

#[function_component(TechnologiesView)]
pub fn technologies_view() -> Html {
    let resource = use_resource::<Technology>();
    let show_modal = use_state(|| false);
    let current = use_state(Technology::default);

    let open_new = {
        let show_modal = show_modal.clone();
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            current.set(Technology::default());
            show_modal.set(true);
        })
    };

    let open_edit = {
        let show_modal = show_modal.clone();
        let current = current.clone();
        Callback::from(move |tech: Technology| {
            current.set(tech);
            show_modal.set(true);
        })
    };

    let close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(false))
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

    let on_name = field_setter(&current, |tech, value| tech.name = value);
    let on_icon_url = field_setter(&current, |tech, value| tech.icon_url = value);

    if resource.state.loading {
        return html! { <div>{"Loading technologies..."}</div> };
    }

    let rows = resource.state.items.iter().map(|tech| {
        let edit = {
            let open_edit = open_edit.clone();
            let tech = tech.clone();
            Callback::from(move |_: MouseEvent| open_edit.emit(tech.clone()))
        };
        let delete = {
            let delete = resource.delete.clone();
            let id = tech.id.clone().unwrap_or_default();
            Callback::from(move |_: MouseEvent| delete.emit(id.clone()))
        };

        html! {
            <tr key={tech.id.clone().unwrap_or_default()}>
                <td>
                    if !tech.icon_url.is_empty() {
                        <img src={tech.icon_url.clone()} alt={tech.name.clone()} width="30" />
                    }
                </td>
                <td>{&tech.name}</td>
                <td>
                    <div class="btn-group">
                        <button class="btn btn-sm btn-outline-primary" onclick={edit}>{"Edit"}</button>
                        <button class="btn btn-sm btn-outline-danger" onclick={delete}>{"Delete"}</button>
                    </div>
                </td>
            </tr>
        }
    });

    html! {
        <div>
            <h2>{"Technologies"}</h2>
            if let Some(error) = &resource.state.error {
                <div class="alert alert-danger">{error}</div>
            }
            <button class="btn btn-primary mb-3" onclick={open_new}>{"Add Technology"}</button>
            <table class="table table-striped">
                <thead>
                    <tr>
                        <th>{"Icon"}</th>
                        <th>{"Name"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>{ for rows }</tbody>
            </table>

            if *show_modal {
                <Modal
                    title={if current.id.is_some() { "Edit Technology" } else { "Add Technology" }}
                    on_close={close_modal.clone()}
                >
                    <form onsubmit={on_submit}>
                        <div class="mb-3">
                            <label class="form-label">{"Name"}</label>
                            <input
                                type="text"
                                class="form-control"
                                value={current.name.clone()}
                                oninput={on_name}
                                required=true
                            />
                        </div>
                        <div class="mb-3">
                            <label class="form-label">{"Icon URL"}</label>
                            <input
                                type="text"
                                class="form-control"
                                value={current.icon_url.clone()}
                                oninput={on_icon_url}
                            />
                        </div>
                        <button type="submit" class="btn btn-primary" disabled={resource.state.saving}>
                            { if resource.state.saving { "Saving..." } else { "Save" } }
                        </button>
                    </form>
                </Modal>
            }
        </div>
    }
}

fn field_setter(
    current: &UseStateHandle<Technology>,
    apply: fn(&mut Technology, String),
) -> Callback<InputEvent> {
    let current = current.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut tech = (*current).clone();
        apply(&mut tech, input.value());
        current.set(tech);
    })
}
