#[cfg(test)]
mod tests {
    use economia_simulator::hooks::use_regions::RegionsState;
    use economia_simulator::hooks::use_simulation::{
        SimulationRequest, SimulationState, can_submit, validate_request,
    };
    use economia_simulator::models::{
        error::AppError,
        simulation::{
            Region, SavingHighlight, SimulationResult, Solution, Supplier, SupplierRef,
        },
    };
    use std::rc::Rc;

    // Helper function to create test regions
    fn create_test_regions() -> Vec<Region> {
        vec![
            Region {
                code: "SP".to_string(),
                name: "São Paulo".to_string(),
                base_tariff_per_kwh: 0.92,
            },
            Region {
                code: "RJ".to_string(),
                name: "Rio de Janeiro".to_string(),
                base_tariff_per_kwh: 0.98,
            },
        ]
    }

    // Helper function to create a simulation result with one GD solution
    fn create_test_result() -> SimulationResult {
        let supplier = Supplier {
            id: "f1".to_string(),
            name: "Energia Solar SP".to_string(),
            logo_url: "https://example.com/solar.svg".to_string(),
            offered_modes: serde_json::json!(["GD"]),
            cost_per_kwh_mode_a: Some(0.65),
            cost_per_kwh_mode_b: None,
            total_customers: 1523,
            average_rating: 4.7,
        };

        SimulationResult {
            region: create_test_regions().remove(0),
            consumption_kwh: 30000.0,
            current_monthly_cost: 27600.0,
            current_annual_cost: 331200.0,
            total_suppliers: 3,
            available_solutions: vec![Solution {
                category: "GD".to_string(),
                best_saving: Some(SavingHighlight {
                    supplier: SupplierRef {
                        id: "f1".to_string(),
                        name: "Energia Solar SP".to_string(),
                    },
                    monthly_saving: 8100.0,
                    annual_saving: 97200.0,
                    saving_percent: 29.35,
                }),
                suppliers: vec![supplier],
            }],
        }
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_validation_display_has_no_prefix() {
        let error = AppError::ValidationError("Selecione um estado".to_string());
        assert_eq!(error.to_string(), "Selecione um estado");
    }

    // ===== Region Model Tests =====

    #[test]
    fn test_region_label_format() {
        let regions = create_test_regions();
        assert_eq!(regions[0].label(), "São Paulo (SP)");
        assert_eq!(regions[1].label(), "Rio de Janeiro (RJ)");
        assert_eq!(regions[0].to_string(), regions[0].label());
    }

    #[test]
    fn test_region_deserialization() {
        let json = r#"{
            "code": "MG",
            "name": "Minas Gerais",
            "baseTariffPerKwh": 0.87
        }"#;

        let region: Region = serde_json::from_str(json).unwrap();
        assert_eq!(region.code, "MG");
        assert_eq!(region.name, "Minas Gerais");
        assert_eq!(region.base_tariff_per_kwh, 0.87);
    }

    // ===== SimulationResult Model Tests =====

    #[test]
    fn test_simulation_result_deserialization() {
        let json = r#"{
            "region": {"code": "SP", "name": "São Paulo", "baseTariffPerKwh": 0.92},
            "consumptionKwh": 30000,
            "currentMonthlyCost": 27600,
            "currentAnnualCost": 331200,
            "totalSuppliers": 3,
            "availableSolutions": [
                {
                    "category": "GD",
                    "bestSaving": {
                        "supplier": {"id": "f1", "name": "Energia Solar SP"},
                        "monthlySaving": 8100,
                        "annualSaving": 97200,
                        "savingPercent": 29.35
                    },
                    "suppliers": [
                        {
                            "id": "f1",
                            "name": "Energia Solar SP",
                            "logoUrl": "https://example.com/solar.svg",
                            "offeredModes": ["GD"],
                            "costPerKwhModeA": 0.65,
                            "costPerKwhModeB": null,
                            "totalCustomers": 1523,
                            "averageRating": 4.7
                        }
                    ]
                }
            ]
        }"#;

        let result: SimulationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.region.code, "SP");
        assert_eq!(result.consumption_kwh, 30000.0);
        assert_eq!(result.total_suppliers, 3);
        assert_eq!(result.available_solutions.len(), 1);

        let solution = &result.available_solutions[0];
        assert_eq!(solution.category, "GD");

        let best = solution.best_saving.as_ref().unwrap();
        assert_eq!(best.supplier.name, "Energia Solar SP");
        assert_eq!(best.saving_percent, 29.35);

        let supplier = &solution.suppliers[0];
        assert_eq!(supplier.cost_per_kwh_mode_a, Some(0.65));
        assert_eq!(supplier.cost_per_kwh_mode_b, None);
    }

    #[test]
    fn test_solution_without_best_saving() {
        let json = r#"{
            "category": "Mercado Livre",
            "suppliers": []
        }"#;

        let solution: Solution = serde_json::from_str(json).unwrap();
        assert_eq!(solution.category, "Mercado Livre");
        assert!(solution.best_saving.is_none());
        assert!(solution.suppliers.is_empty());
    }

    #[test]
    fn test_supplier_absent_cost_fields() {
        let json = r#"{
            "id": "f2",
            "name": "PowerTrade Brasil",
            "logoUrl": "https://example.com/power.svg",
            "offeredModes": ["Mercado Livre"],
            "totalCustomers": 892,
            "averageRating": 4.5
        }"#;

        let supplier: Supplier = serde_json::from_str(json).unwrap();
        assert!(supplier.cost_per_kwh_mode_a.is_none());
        assert!(supplier.cost_per_kwh_mode_b.is_none());
    }

    #[test]
    fn test_simulation_result_equality() {
        // Equal payloads compare equal, which backs the render-idempotence
        // property: the view is a pure function of this value
        assert_eq!(create_test_result(), create_test_result());
    }

    // ===== RegionsState Tests =====

    #[test]
    fn test_regions_state_data_extraction() {
        let regions = Rc::new(create_test_regions());
        let loaded = RegionsState::Loaded(regions.clone());

        assert!(loaded.data().is_some());
        assert_eq!(loaded.data().unwrap(), &regions);
        assert!(!loaded.is_loading());

        let loading = RegionsState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        let error = RegionsState::Error("Test error".to_string());
        assert!(error.data().is_none());
    }

    #[test]
    fn test_regions_state_equality() {
        assert_eq!(RegionsState::Loading, RegionsState::Loading);
        assert_eq!(
            RegionsState::Error("Test error".to_string()),
            RegionsState::Error("Test error".to_string())
        );
        assert_eq!(
            RegionsState::Loaded(Rc::new(create_test_regions())),
            RegionsState::Loaded(Rc::new(create_test_regions()))
        );
    }

    // ===== SimulationState Tests =====

    #[test]
    fn test_simulation_state_default() {
        let state = SimulationState::default();
        assert!(!state.in_flight);
        assert!(state.result.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_simulation_state_keeps_result_alongside_error() {
        // Stale-data-on-error: a failed request leaves the old result in place
        let state = SimulationState {
            in_flight: false,
            result: Some(Rc::new(create_test_result())),
            error: Some("Erro ao simular economia".to_string()),
        };

        assert!(state.result.is_some());
        assert!(state.error.is_some());
    }

    // ===== Validation Tests =====

    fn request(region: &str, consumption: &str) -> SimulationRequest {
        SimulationRequest {
            region_code: region.to_string(),
            consumption_input: consumption.to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_positive_consumption() {
        assert_eq!(validate_request(&request("SP", "30000")).unwrap(), 30000.0);
        assert_eq!(validate_request(&request("SP", " 250.5 ")).unwrap(), 250.5);
    }

    #[test]
    fn test_validate_rejects_missing_region() {
        assert!(validate_request(&request("", "30000")).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_consumption() {
        assert!(validate_request(&request("SP", "")).is_err());
        assert!(validate_request(&request("SP", "abc")).is_err());
        assert!(validate_request(&request("SP", "0")).is_err());
        assert!(validate_request(&request("SP", "-5")).is_err());
    }

    #[test]
    fn test_validate_error_messages_are_user_facing() {
        let error = validate_request(&request("", "30000")).unwrap_err();
        assert_eq!(error.to_string(), "Selecione um estado");

        let error = validate_request(&request("SP", "abc")).unwrap_err();
        assert_eq!(error.to_string(), "Informe um consumo válido");

        let error = validate_request(&request("SP", "0")).unwrap_err();
        assert_eq!(error.to_string(), "O consumo deve ser maior que zero");
    }

    // ===== Submit Predicate Tests =====

    #[test]
    fn test_can_submit_requires_all_inputs() {
        assert!(can_submit("SP", "30000", false));
        assert!(!can_submit("", "30000", false));
        assert!(!can_submit("SP", "", false));
        assert!(!can_submit("", "", false));
    }

    #[test]
    fn test_can_submit_blocked_while_in_flight() {
        assert!(!can_submit("SP", "30000", true));
    }
}
