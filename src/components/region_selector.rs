use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::simulation::Region;

#[derive(Properties, PartialEq)]
pub struct RegionSelectorProps {
    pub regions: Rc<Vec<Region>>,
    pub selected: String,
    pub on_change: Callback<String>,
}

/// Region selector dropdown component
#[function_component(RegionSelector)]
pub fn region_selector(props: &RegionSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            callback.emit(target.value());
        })
    };

    html! {
        <select
            id="estado"
            class="select"
            onchange={on_change}
            aria-label="Selecione seu estado"
            title="Selecione seu estado"
        >
            <option value="" selected={props.selected.is_empty()}>
                {"Escolha um estado"}
            </option>
            {
                props.regions.iter().map(|region| {
                    let code = region.code.clone();
                    let selected = code == props.selected;
                    html! {
                        <option value={code} {selected}>{region.label()}</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
