use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRequest {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub consultation_type: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_page_field_names() {
        let request = ConsultationRequest {
            full_name: "Ada Lovelace".to_string(),
            mobile: "+44 7700 900123".to_string(),
            email: "ada@example.com".to_string(),
            consultation_type: "nutrition".to_string(),
            message: String::new(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "fullName": "Ada Lovelace",
                "mobile": "+44 7700 900123",
                "email": "ada@example.com",
                "consultationType": "nutrition",
                "message": ""
            })
        );
    }
}
