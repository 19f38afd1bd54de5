use serde::{Deserialize, Serialize};

use crate::shared::validation::{FormErrors, ValidationRules};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    #[serde(rename = "citCode")]
    pub cit_code: String,
    #[serde(rename = "citName")]
    pub cit_name: String,
    #[serde(rename = "staCode")]
    pub sta_code: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Region {
    /// "CCS - Caracas"
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.cit_code, self.cit_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionForm {
    #[serde(rename = "citCode")]
    pub cit_code: String,
    #[serde(rename = "citName")]
    pub cit_name: String,
    #[serde(rename = "staCode")]
    pub sta_code: String,
}

impl RegionForm {
    pub const CIT_CODE: ValidationRules = ValidationRules::required().min_length(2);
    pub const CIT_NAME: ValidationRules = ValidationRules::required().min_length(3);
    pub const STA_CODE: ValidationRules = ValidationRules::required().min_length(2);

    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.check("citCode", Self::CIT_CODE.validate_string(&self.cit_code, "city code"));
        errors.check("citName", Self::CIT_NAME.validate_string(&self.cit_name, "city"));
        errors.check("staCode", Self::STA_CODE.validate_string(&self.sta_code, "state code"));
        errors.into_result()
    }

    /// Values are sent trimmed.
    pub fn normalized(&self) -> Self {
        Self {
            cit_code: self.cit_code.trim().to_string(),
            cit_name: self.cit_name.trim().to_string(),
            sta_code: self.sta_code.trim().to_string(),
        }
    }
}

impl From<&Region> for RegionForm {
    fn from(region: &Region) -> Self {
        Self {
            cit_code: region.cit_code.clone(),
            cit_name: region.cit_name.clone(),
            sta_code: region.sta_code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_wire_names() {
        let region: Region = serde_json::from_str(
            r#"{"id": 3, "citCode": "VAL", "citName": "Valencia", "staCode": "CA",
                "created_at": "2025-01-10T12:00:00Z", "updated_at": null}"#,
        )
        .unwrap();
        assert_eq!(region.cit_name, "Valencia");
        assert_eq!(region.display_name(), "VAL - Valencia");

        let form = RegionForm::from(&region);
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["citCode"], "VAL");
        assert_eq!(json["staCode"], "CA");
    }

    #[test]
    fn test_validate_lengths() {
        let form = RegionForm {
            cit_code: "V".to_string(),
            cit_name: "Va".to_string(),
            sta_code: "".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("citCode"),
            Some("The field city code must have at least 2 characters")
        );
        assert_eq!(
            errors.get("citName"),
            Some("The field city must have at least 3 characters")
        );
        assert_eq!(errors.get("staCode"), Some("The field state code is required"));
    }

    #[test]
    fn test_validate_ok_and_normalized() {
        let form = RegionForm {
            cit_code: " MAR ".to_string(),
            cit_name: "Maracaibo".to_string(),
            sta_code: "ZU".to_string(),
        };
        assert!(form.validate().is_ok());
        assert_eq!(form.normalized().cit_code, "MAR");
    }
}
