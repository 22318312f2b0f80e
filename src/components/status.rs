use crate::hooks::use_regions::RegionsState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: RegionsState,
}

/// Loading/error display for the region-list request. Renders nothing once
/// the list is loaded; the error message is coarse on purpose.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.state {
        RegionsState::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Carregando estados..."}</p>
            </div>
        },
        RegionsState::Loaded(_) => html! {},
        RegionsState::Error(_) => html! {
            <div class="status error">
                <p>{"Erro ao carregar estados"}</p>
            </div>
        },
    }
}
