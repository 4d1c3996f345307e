use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde::Serialize;
use std::collections::BTreeMap;

/// Every message a field failed with, keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// `data` of the envelope: one object, a list, or an empty `{}`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Item(T),
    List(Vec<T>),
    Empty {},
}

impl<T> Default for Payload<T> {
    fn default() -> Self {
        Payload::Empty {}
    }
}

#[derive(Debug, Serialize)]
pub struct JsonResponse<T> {
    pub message: String,
    pub data: Payload<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl<T> JsonResponse<T>
where
    T: Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}

#[derive(Debug)]
pub struct JsonResponseBuilder<T> {
    data: Payload<T>,
    errors: Option<FieldErrors>,
}

impl<T> Default for JsonResponseBuilder<T> {
    fn default() -> Self {
        Self {
            data: Payload::default(),
            errors: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: Serialize,
{
    pub fn set_item(mut self, item: T) -> Self {
        self.data = Payload::Item(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.data = Payload::List(list);
        self
    }

    pub fn set_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn to_json_response<S: Into<String>>(self, message: S) -> JsonResponse<T> {
        JsonResponse {
            message: message.into(),
            data: self.data,
            errors: self.errors,
        }
    }

    pub fn respond<S: Into<String>>(self, status: StatusCode, message: S) -> HttpResponse {
        HttpResponse::build(status).json(self.to_json_response(message))
    }

    pub fn ok<S: Into<String>>(self, message: S) -> HttpResponse {
        self.respond(StatusCode::OK, message)
    }

    pub fn created<S: Into<String>>(self, message: S) -> HttpResponse {
        self.respond(StatusCode::CREATED, message)
    }

    fn error<S: Into<String>>(self, status: StatusCode, message: S) -> Error {
        let message = message.into();
        let response = self.respond(status, message.clone());
        InternalError::from_response(message, response).into()
    }

    pub fn not_found<S: Into<String>>(self, message: S) -> Error {
        self.error(StatusCode::NOT_FOUND, message)
    }

    pub fn form_error<S: Into<String>>(self, message: S) -> Error {
        self.error(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn internal_server_error<S: Into<String>>(self, message: S) -> Error {
        self.error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Item {
        id: i64,
    }

    fn body<T: Serialize>(builder: JsonResponseBuilder<T>, message: &str) -> serde_json::Value {
        serde_json::to_value(builder.to_json_response(message)).unwrap()
    }

    #[test]
    fn empty_data_is_an_object() {
        assert_eq!(
            body(JsonResponse::<Item>::build(), "Product not found"),
            json!({"message": "Product not found", "data": {}})
        );
    }

    #[test]
    fn item_and_list() {
        assert_eq!(
            body(JsonResponse::build().set_item(Item { id: 7 }), "ok"),
            json!({"message": "ok", "data": {"id": 7}})
        );
        assert_eq!(
            body(
                JsonResponse::build().set_list(vec![Item { id: 1 }, Item { id: 2 }]),
                "ok"
            ),
            json!({"message": "ok", "data": [{"id": 1}, {"id": 2}]})
        );
        assert_eq!(
            body(JsonResponse::<Item>::build().set_list(vec![]), "invalid"),
            json!({"message": "invalid", "data": []})
        );
    }

    #[test]
    fn errors_only_when_set() {
        let mut fields = FieldErrors::new();
        fields.insert("status".into(), vec!["The status field is required.".into()]);

        assert_eq!(
            body(JsonResponse::<Item>::build().set_errors(fields), "The status field is required."),
            json!({
                "message": "The status field is required.",
                "data": {},
                "errors": {"status": ["The status field is required."]}
            })
        );
    }

    #[test]
    fn error_responses_carry_status() {
        let err = JsonResponse::<Item>::build().form_error("bad");
        assert_eq!(err.as_response_error().status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let err = JsonResponse::<Item>::build().not_found("missing");
        assert_eq!(err.error_response().status(), StatusCode::NOT_FOUND);

        let response = JsonResponse::<Item>::build().created("made");
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
