use serde::Deserialize;
use utoipa::IntoParams;

fn default_max_results() -> u32 {
    20
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    pub subject: String,
    /// Accepted for API compatibility but never forwarded upstream.
    pub year: Option<i32>,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}
