use yew::prelude::*;

use crate::components::supplier_card::SupplierCard;
use crate::models::simulation::Solution;

#[derive(Properties, PartialEq)]
pub struct SolutionSectionProps {
    pub solution: Solution,
}

/// One solution category: the optional best-saving highlight followed by the
/// full supplier list for that category.
#[function_component(SolutionSection)]
pub fn solution_section(props: &SolutionSectionProps) -> Html {
    let solution = &props.solution;

    html! {
        <div class="solution-section">
            <h3 class="solution-category">{&solution.category}</h3>

            if let Some(best) = &solution.best_saving {
                <div class="best-saving">
                    <h4>{"Melhor economia: "}{&best.supplier.name}</h4>
                    <div class="saving-figures">
                        <span>{format!("R$ {:.2}/mês", best.monthly_saving)}</span>
                        <span>{format!("R$ {:.2}/ano", best.annual_saving)}</span>
                        <span>{format!("{:.1}%", best.saving_percent)}</span>
                    </div>
                </div>
            }

            <div class="supplier-list">
                {
                    solution.suppliers.iter().map(|supplier| html! {
                        <SupplierCard key={supplier.id.clone()} supplier={supplier.clone()} />
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
