use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::region_selector::RegionSelector;
use crate::components::results::SimulationResults;
use crate::hooks::use_region_choice::use_region_choice;
use crate::hooks::use_simulation::{SimulationRequest, can_submit, use_simulation};
use crate::models::simulation::Region;

#[derive(Properties, PartialEq)]
pub struct SimulatorProps {
    pub regions: Rc<Vec<Region>>,
}

/// Form controller: owns the selected region, the consumption input and the
/// simulation request lifecycle.
#[function_component(Simulator)]
pub fn simulator(props: &SimulatorProps) -> Html {
    let region_choice = use_region_choice();
    let consumption = use_state(String::new);
    let simulation = use_simulation();

    // A persisted choice only counts if the server still lists that region
    let selected = if props.regions.iter().any(|r| r.code == region_choice.code) {
        region_choice.code.clone()
    } else {
        String::new()
    };

    let on_consumption_input = {
        let consumption = consumption.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            consumption.set(target.value());
        })
    };

    let on_submit = {
        let submit = simulation.submit.clone();
        let selected = selected.clone();
        let consumption = consumption.clone();
        Callback::from(move |_: MouseEvent| {
            submit.emit(SimulationRequest {
                region_code: selected.clone(),
                consumption_input: (*consumption).clone(),
            });
        })
    };

    let disabled = !can_submit(&selected, consumption.as_str(), simulation.state.in_flight);

    html! {
        <>
            <div class="form-container">
                <div class="form-group">
                    <label for="estado">{"Selecione seu estado:"}</label>
                    <RegionSelector
                        regions={props.regions.clone()}
                        selected={selected.clone()}
                        on_change={region_choice.set_code.clone()}
                    />
                </div>

                <div class="form-group">
                    <label for="consumo">{"Consumo mensal (kWh):"}</label>
                    <input
                        id="consumo"
                        class="input"
                        type="number"
                        min="1"
                        placeholder="Ex: 30000"
                        value={(*consumption).clone()}
                        oninput={on_consumption_input}
                    />
                </div>

                <button class="btn-simular" {disabled} onclick={on_submit}>
                    { if simulation.state.in_flight { "Simulando..." } else { "Simular Economia" } }
                </button>

                if let Some(error) = &simulation.state.error {
                    <p class="form-error">{error}</p>
                }
            </div>

            if let Some(result) = &simulation.state.result {
                <SimulationResults result={result.clone()} />
            }
        </>
    }
}
