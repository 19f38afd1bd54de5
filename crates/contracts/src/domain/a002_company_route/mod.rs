use serde::{Deserialize, Serialize};

use crate::domain::a001_region::Region;
use crate::shared::validation::{FormErrors, ValidationRules};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRoute {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub route_name: Option<String>,
    pub rif: String,
    #[serde(default)]
    pub description: Option<String>,
    pub fiscal_address: String,
    pub region_id: i64,
    pub db_name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl CompanyRoute {
    pub fn region_label(&self) -> String {
        self.region
            .as_ref()
            .map(|r| r.cit_name.clone())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn route_label(&self) -> &str {
        self.route_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("-")
    }
}

/// Body of `POST /company-routes` and `PUT /company-routes/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyRouteForm {
    pub code: String,
    pub name: String,
    pub route_name: Option<String>,
    pub rif: String,
    pub description: Option<String>,
    pub fiscal_address: String,
    /// `None` until a region is picked in the form.
    pub region_id: Option<i64>,
    pub db_name: String,
}

impl CompanyRouteForm {
    const REQUIRED: ValidationRules = ValidationRules::required();

    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.check("code", Self::REQUIRED.validate_string(&self.code, "code"));
        errors.check("name", Self::REQUIRED.validate_string(&self.name, "name"));
        errors.check("rif", Self::REQUIRED.validate_string(&self.rif, "RIF"));
        errors.check(
            "fiscal_address",
            Self::REQUIRED.validate_string(&self.fiscal_address, "fiscal address"),
        );
        errors.check("db_name", Self::REQUIRED.validate_string(&self.db_name, "database name"));
        if self.region_id.is_none() {
            errors.insert("region_id", "The field region is required");
        }
        errors.into_result()
    }

    /// Trims text fields; blank optional fields become `None`.
    pub fn normalized(&self) -> Self {
        fn opt(value: &Option<String>) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        }

        Self {
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
            route_name: opt(&self.route_name),
            rif: self.rif.trim().to_string(),
            description: opt(&self.description),
            fiscal_address: self.fiscal_address.trim().to_string(),
            region_id: self.region_id,
            db_name: self.db_name.trim().to_string(),
        }
    }
}

impl From<&CompanyRoute> for CompanyRouteForm {
    fn from(route: &CompanyRoute) -> Self {
        Self {
            code: route.code.clone(),
            name: route.name.clone(),
            route_name: route.route_name.clone(),
            rif: route.rif.clone(),
            description: route.description.clone(),
            fiscal_address: route.fiscal_address.clone(),
            region_id: Some(route.region_id),
            db_name: route.db_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": 12, "code": "R-012", "name": "Distribuidora Centro", "route_name": null,
            "rif": "J-12345678-9", "description": null, "fiscal_address": "Av. Bolivar",
            "region_id": 3, "db_name": "dist_centro", "is_active": true,
            "region": {"id": 3, "citCode": "VAL", "citName": "Valencia", "staCode": "CA"}
        }"#
    }

    #[test]
    fn test_parse_with_nested_region() {
        let route: CompanyRoute = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(route.region_label(), "Valencia");
        assert_eq!(route.route_label(), "-");

        let form = CompanyRouteForm::from(&route);
        assert_eq!(form.region_id, Some(3));
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        let errors = CompanyRouteForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get("rif"), Some("The field RIF is required"));
        assert_eq!(errors.get("region_id"), Some("The field region is required"));
    }

    #[test]
    fn test_normalized_blanks_become_null() {
        let form = CompanyRouteForm {
            code: " R-1 ".to_string(),
            route_name: Some("   ".to_string()),
            description: Some(" north ".to_string()),
            ..Default::default()
        };
        let normalized = form.normalized();
        assert_eq!(normalized.code, "R-1");
        assert_eq!(normalized.route_name, None);
        assert_eq!(normalized.description.as_deref(), Some("north"));

        let json = serde_json::to_value(&normalized).unwrap();
        assert!(json["route_name"].is_null());
    }
}
