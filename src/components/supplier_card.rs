use yew::prelude::*;

use crate::models::simulation::Supplier;

#[derive(Properties, PartialEq)]
pub struct SupplierCardProps {
    pub supplier: Supplier,
}

/// Card for one supplier offer. Cost fields the supplier does not offer are
/// omitted entirely rather than rendered as zero.
#[function_component(SupplierCard)]
pub fn supplier_card(props: &SupplierCardProps) -> Html {
    let supplier = &props.supplier;

    html! {
        <div class="supplier-card">
            <img
                class="supplier-logo"
                src={supplier.logo_url.clone()}
                alt={supplier.name.clone()}
            />
            <h4 class="supplier-name">{&supplier.name}</h4>
            <div class="supplier-details">
                <span>{format!("\u{2b50} {:.1}", supplier.average_rating)}</span>
                <span>{format!("{} clientes", supplier.total_customers)}</span>
                if let Some(cost) = supplier.cost_per_kwh_mode_a {
                    <span>{format!("GD: R$ {cost:.2}/kWh")}</span>
                }
                if let Some(cost) = supplier.cost_per_kwh_mode_b {
                    <span>{format!("Mercado Livre: R$ {cost:.2}/kWh")}</span>
                }
            </div>
        </div>
    }
}
