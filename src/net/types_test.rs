use super::*;

#[test]
fn login_response_reads_password_change_flag() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"token":"t1","require_password_change":true}"#).unwrap();
    assert_eq!(resp.token, "t1");
    assert!(resp.require_password_change);
}

#[test]
fn login_response_flag_defaults_to_false() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"t1"}"#).unwrap();
    assert!(!resp.require_password_change);
}

#[test]
fn register_request_uses_server_field_names() {
    let req = RegisterRequest {
        username: "alice".to_owned(),
        email: "a@example.com".to_owned(),
        password: "secret1".to_owned(),
        password2: "secret1".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["password2"], "secret1");
    assert_eq!(value["email"], "a@example.com");
}

#[test]
fn change_password_request_uses_snake_case_fields() {
    let req = ChangePasswordRequest {
        username: "alice".to_owned(),
        old_password: "old".to_owned(),
        new_password: "newpass".to_owned(),
        repeat_new_password: "newpass".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["old_password"], "old");
    assert_eq!(value["repeat_new_password"], "newpass");
}

#[test]
fn empty_response_accepts_empty_object_and_extra_fields() {
    assert_eq!(serde_json::from_str::<EmptyResponse>("{}").unwrap(), EmptyResponse {});
    assert!(serde_json::from_str::<EmptyResponse>(r#"{"message":"ok"}"#).is_ok());
}

#[test]
fn search_result_content_is_optional() {
    let resp: SearchResponse = serde_json::from_str(
        r#"{"data":[{"title":"Rust","url":"https://rust-lang.org"},
                    {"title":"Go","url":"https://go.dev","content":"Go is"}]}"#,
    )
    .unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[0].content, None);
    assert_eq!(resp.data[1].content.as_deref(), Some("Go is"));
}

#[test]
fn weather_response_ignores_unused_fields() {
    let resp: WeatherResponse = serde_json::from_str(
        r#"{"data":{
            "base":"stations","cod":200,"name":"Copenhagen",
            "main":{"temp":283.15,"humidity":81},
            "weather":[{"id":800,"main":"Clear","description":"clear sky","icon":"01d"}],
            "sys":{"country":"DK","sunrise":1,"sunset":2},
            "wind":{"speed":4.1,"deg":250}
        }}"#,
    )
    .unwrap();
    assert_eq!(resp.data.name, "Copenhagen");
    assert_eq!(resp.data.sys.country, "DK");
    assert_eq!(resp.data.primary_condition().map(|c| c.description.as_str()), Some("clear sky"));
}
