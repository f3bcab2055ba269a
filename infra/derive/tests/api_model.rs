use folio_derive::api_model;

#[api_model]
struct StrictModel {
    display_name: String,
}

#[api_model(deny_unknown_fields = false)]
struct LenientModel {
    display_name: String,
}

#[api_model(rename_all = "camelCase")]
struct CamelModel {
    display_name: String,
}

#[test]
fn defaults_to_snake_case_and_strict_fields() {
    let model: StrictModel = serde_json::from_str(r#"{"display_name":"Ada"}"#).unwrap();
    assert_eq!(model.display_name, "Ada");

    let err = serde_json::from_str::<StrictModel>(r#"{"display_name":"Ada","id":"x"}"#);
    assert!(err.is_err());
}

#[test]
fn lenient_models_drop_unknown_fields() {
    let model: LenientModel =
        serde_json::from_str(r#"{"display_name":"Ada","id":"spoofed"}"#).unwrap();
    assert_eq!(model.display_name, "Ada");
}

#[test]
fn rename_policy_can_be_overridden() {
    let json = serde_json::to_value(CamelModel { display_name: "Ada".to_owned() }).unwrap();
    assert_eq!(json["displayName"], "Ada");
}
