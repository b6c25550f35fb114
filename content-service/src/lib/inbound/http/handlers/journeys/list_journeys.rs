use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::content::models::JourneyFilter;
use crate::domain::content::models::JourneyPage;
use crate::domain::content::models::JourneyStatus;
use crate::domain::content::models::Pagination;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JourneyData;
use crate::inbound::http::router::AppState;

pub async fn list_journeys(
    State(state): State<AppState>,
    Query(query): Query<ListJourneysQuery>,
) -> Result<ApiSuccess<JourneyListResponseData>, ApiError> {
    let (filter, pagination) = query.try_into_parts()?;

    state
        .content_service
        .list_journeys(filter, pagination)
        .await
        .map_err(ApiError::from)
        .map(|ref page| ApiSuccess::new(StatusCode::OK, page.into()))
}

/// Raw query string. Paging values that do not parse fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListJourneysQuery {
    status: Option<String>,
    created_by: Option<String>,
    page: Option<String>,
    limit: Option<String>,
}

impl ListJourneysQuery {
    fn try_into_parts(self) -> Result<(JourneyFilter, Pagination), ApiError> {
        let status = non_empty(self.status)
            .map(|s| s.parse::<JourneyStatus>())
            .transpose()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        let created_by = non_empty(self.created_by)
            .map(|s| UserId::from_string(&s))
            .transpose()
            .map_err(|e| ApiError::BadRequest(format!("Invalid createdBy: {}", e)))?;

        let pagination = Pagination::new(number(self.page), number(self.limit));

        Ok((JourneyFilter { status, created_by }, pagination))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn number(value: Option<String>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneyListResponseData {
    pub journeys: Vec<JourneyData>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl From<&JourneyPage> for JourneyListResponseData {
    fn from(page: &JourneyPage) -> Self {
        Self {
            journeys: page.journeys.iter().map(JourneyData::from).collect(),
            total: page.total,
            page: page.pagination.page(),
            limit: page.pagination.limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(status: Option<&str>, page: Option<&str>, limit: Option<&str>) -> ListJourneysQuery {
        ListJourneysQuery {
            status: status.map(str::to_string),
            created_by: None,
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults() {
        let (filter, pagination) = ListJourneysQuery::default().try_into_parts().unwrap();
        assert_eq!(filter, JourneyFilter::default());
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.limit(), 20);
    }

    #[test]
    fn test_lenient_paging() {
        let (_, pagination) = query(None, Some("abc"), Some("500"))
            .try_into_parts()
            .unwrap();
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.limit(), 20);

        let (_, pagination) = query(None, Some("3"), Some("5")).try_into_parts().unwrap();
        assert_eq!(pagination.page(), 3);
        assert_eq!(pagination.limit(), 5);
        assert_eq!(pagination.offset(), 10);
    }

    #[test]
    fn test_status_filter() {
        let (filter, _) = query(Some("published"), None, None)
            .try_into_parts()
            .unwrap();
        assert_eq!(filter.status, Some(JourneyStatus::Published));

        let (filter, _) = query(Some(""), None, None).try_into_parts().unwrap();
        assert_eq!(filter.status, None);

        assert!(query(Some("bogus"), None, None).try_into_parts().is_err());
    }
}
