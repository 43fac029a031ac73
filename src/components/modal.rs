use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Bootstrap-style modal dialog used by the resource editors.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <>
            <div class="modal d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog" role="document">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{props.title.clone()}</h5>
                            <button type="button" class="btn-close" onclick={on_close}></button>
                        </div>
                        <div class="modal-body">
                            { for props.children.iter() }
                        </div>
                    </div>
                </div>
            </div>
            <div class="modal-backdrop show"></div>
        </>
    }
}
