//! JavaScript surface: mount the dashboard and feed it indicator data.

use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::AppConfig;
use crate::domain::{
    chart::ChartDataset,
    errors::{AppError, AppResult, InfrastructureError, RepositoryError},
    logging::{LogComponent, get_logger},
    token::TokenId,
};

/// Parse `[{"timestamps_ms": [...], "prices": [...]}, ...]`, rejecting series of unequal length
pub fn parse_datasets(raw: &str) -> AppResult<Vec<ChartDataset>> {
    let parsed: Vec<ChartDataset> = serde_json::from_str(raw).map_err(|e| {
        AppError::Infrastructure(InfrastructureError::Repository(RepositoryError::ParseError(e.to_string())))
    })?;
    parsed
        .into_iter()
        .map(|dataset| ChartDataset::new(dataset.timestamps_ms, dataset.prices).map_err(AppError::from))
        .collect()
}

/// Handle returned to the host page after mounting
#[wasm_bindgen]
pub struct DashboardHandle {
    datasets: RwSignal<Vec<ChartDataset>>,
    chart_token: RwSignal<Option<TokenId>>,
}

#[wasm_bindgen]
impl DashboardHandle {
    /// Replace the charted indicator series
    #[wasm_bindgen(js_name = setIndicatorDatasets)]
    pub fn set_indicator_datasets(&self, json: &str) -> Result<usize, JsValue> {
        let datasets = parse_datasets(json).map_err(|error| {
            get_logger().warn(LogComponent::Presentation("DashboardHandle"), &format!("Rejected datasets: {}", error));
            JsValue::from_str(&error.to_string())
        })?;
        let count = datasets.len();
        self.datasets.set(datasets);
        Ok(count)
    }

    /// Id of the token last clicked in the watchlist
    #[wasm_bindgen(js_name = chartToken)]
    pub fn chart_token(&self) -> Option<String> {
        self.chart_token.get_untracked().map(|token| token.value().to_string())
    }
}

/// Mount the dashboard into `<body>` with the page config
#[wasm_bindgen(js_name = mountDashboard)]
pub fn mount_dashboard() -> DashboardHandle {
    let config = AppConfig::load_from_document();
    let datasets = create_rw_signal(Vec::<ChartDataset>::new());
    let chart_token = create_rw_signal::<Option<TokenId>>(None);

    mount_to_body(move || view! { <App config=config.clone() datasets=datasets chart_token=chart_token /> });
    DashboardHandle { datasets, chart_token }
}
