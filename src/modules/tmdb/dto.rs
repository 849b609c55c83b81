use serde::Deserialize;
use utoipa::IntoParams;

fn default_language() -> String {
    "en-US".to_string()
}

fn default_page() -> u32 {
    1
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenreQuery {
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DiscoverQuery {
    pub genre_id: i64,
    pub year: i32,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_language")]
    pub language: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn genre_query_defaults_language() {
        let query: GenreQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(query.language, "en-US");
    }

    #[test]
    fn discover_query_defaults_page_and_language() {
        let query: DiscoverQuery =
            serde_json::from_value(json!({ "genre_id": 28, "year": 2001 })).unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.language, "en-US");
    }

    #[test]
    fn discover_query_requires_genre_id_and_year() {
        assert!(serde_json::from_value::<DiscoverQuery>(json!({ "year": 2001 })).is_err());
        assert!(serde_json::from_value::<DiscoverQuery>(json!({ "genre_id": 28 })).is_err());
    }
}
