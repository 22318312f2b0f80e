use std::rc::Rc;
use yew::prelude::*;

use crate::components::solution_section::SolutionSection;
use crate::models::simulation::SimulationResult;

#[derive(Properties, PartialEq)]
pub struct SimulationResultsProps {
    pub result: Rc<SimulationResult>,
}

/// Pure view over one simulation result: current-cost summary followed by
/// the solution categories in the order the server returned them.
#[function_component(SimulationResults)]
pub fn simulation_results(props: &SimulationResultsProps) -> Html {
    let result = &props.result;

    html! {
        <section class="results">
            <h2>{"Resultado da Simulação"}</h2>

            <div class="summary-grid">
                <div class="summary-item">
                    <h3>{"Estado"}</h3>
                    <p class="summary-value">{result.region.label()}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Tarifa base"}</h3>
                    <p class="summary-value">
                        {format!("R$ {:.2}/kWh", result.region.base_tariff_per_kwh)}
                    </p>
                </div>
                <div class="summary-item">
                    <h3>{"Consumo mensal"}</h3>
                    <p class="summary-value">{format!("{:.0} kWh", result.consumption_kwh)}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Custo mensal atual"}</h3>
                    <p class="summary-value">{format!("R$ {:.2}", result.current_monthly_cost)}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Custo anual atual"}</h3>
                    <p class="summary-value">{format!("R$ {:.2}", result.current_annual_cost)}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Fornecedores"}</h3>
                    <p class="summary-value">{result.total_suppliers}</p>
                </div>
            </div>

            {
                result.available_solutions.iter().map(|solution| html! {
                    <SolutionSection key={solution.category.clone()} solution={solution.clone()} />
                }).collect::<Html>()
            }
        </section>
    }
}
