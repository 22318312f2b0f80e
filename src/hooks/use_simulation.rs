use std::rc::Rc;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::models::simulation::SimulationResult;
use crate::services::graphql::simulate_savings;
use wasm_bindgen_futures::spawn_local;

/// Raw form values as submitted; validated before any network call.
#[derive(Clone, PartialEq, Debug)]
pub struct SimulationRequest {
    pub region_code: String,
    pub consumption_input: String,
}

/// Simulation axis of the form state machine.
///
/// `result` survives a failed request, so the previous simulation stays
/// visible next to the error message.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SimulationState {
    pub in_flight: bool,
    pub result: Option<Rc<SimulationResult>>,
    pub error: Option<String>,
}

/// Handle returned by `use_simulation` hook
#[derive(Clone, PartialEq)]
pub struct SimulationHandle {
    pub state: SimulationState,
    pub submit: Callback<SimulationRequest>,
}

/// Validates form input, returning the consumption in kWh.
pub fn validate_request(request: &SimulationRequest) -> Result<f64, AppError> {
    if request.region_code.is_empty() {
        return Err(AppError::ValidationError("Selecione um estado".to_string()));
    }

    let consumption: f64 = request
        .consumption_input
        .trim()
        .parse()
        .map_err(|_| AppError::ValidationError("Informe um consumo válido".to_string()))?;

    if consumption <= 0.0 {
        return Err(AppError::ValidationError(
            "O consumo deve ser maior que zero".to_string(),
        ));
    }

    Ok(consumption)
}

/// Whether the submit control is enabled: region picked, consumption typed,
/// and no request currently in flight.
pub fn can_submit(region_code: &str, consumption_input: &str, in_flight: bool) -> bool {
    !region_code.is_empty() && !consumption_input.is_empty() && !in_flight
}

#[hook]
pub fn use_simulation() -> SimulationHandle {
    let state = use_state(SimulationState::default);
    let latest_request = use_mut_ref(|| 0u32);

    let submit = {
        let state = state.clone();
        let latest_request = latest_request.clone();

        Callback::from(move |request: SimulationRequest| {
            let previous = (*state).result.clone();

            let consumption_kwh = match validate_request(&request) {
                Ok(value) => value,
                Err(e) => {
                    state.set(SimulationState {
                        in_flight: false,
                        result: previous,
                        error: Some(e.to_string()),
                    });
                    return;
                }
            };

            // Tag this request; only the latest tag may apply its response
            let request_id = {
                let mut latest = latest_request.borrow_mut();
                *latest += 1;
                *latest
            };

            state.set(SimulationState {
                in_flight: true,
                result: previous.clone(),
                error: None,
            });

            let state = state.clone();
            let latest_request = latest_request.clone();
            spawn_local(async move {
                let outcome = simulate_savings(&request.region_code, consumption_kwh).await;

                // A newer request superseded this one; drop the response
                if *latest_request.borrow() != request_id {
                    return;
                }

                match outcome {
                    Ok(result) => state.set(SimulationState {
                        in_flight: false,
                        result: Some(Rc::new(result)),
                        error: None,
                    }),
                    Err(e) => {
                        gloo::console::warn!(format!("Simulation failed: {e}"));
                        state.set(SimulationState {
                            in_flight: false,
                            result: previous,
                            error: Some("Erro ao simular economia".to_string()),
                        });
                    }
                }
            });
        })
    };

    SimulationHandle {
        state: (*state).clone(),
        submit,
    }
}
