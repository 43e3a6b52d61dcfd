use super::*;

// =============================================================
// AskResponse deserialization
// =============================================================

#[test]
fn response_with_answer_and_sources() {
    let resp: AskResponse =
        serde_json::from_str(r#"{"answer":"Paris","sources":["doc1","doc2"]}"#).unwrap();
    assert_eq!(resp.answer, "Paris");
    assert_eq!(resp.sources, vec!["doc1", "doc2"]);
}

#[test]
fn missing_sources_defaults_to_empty() {
    let resp: AskResponse = serde_json::from_str(r#"{"answer":"Paris"}"#).unwrap();
    assert!(resp.sources.is_empty());
}

#[test]
fn null_sources_coerces_to_empty() {
    let resp: AskResponse =
        serde_json::from_str(r#"{"answer":"Paris","sources":null}"#).unwrap();
    assert!(resp.sources.is_empty());
}

#[test]
fn non_array_sources_coerces_to_empty() {
    let resp: AskResponse =
        serde_json::from_str(r#"{"answer":"Paris","sources":"doc1"}"#).unwrap();
    assert!(resp.sources.is_empty());

    let resp: AskResponse =
        serde_json::from_str(r#"{"answer":"Paris","sources":7}"#).unwrap();
    assert!(resp.sources.is_empty());
}

#[test]
fn non_string_source_items_are_skipped() {
    let resp: AskResponse =
        serde_json::from_str(r#"{"answer":"Paris","sources":["doc1",2,null,"doc2"]}"#).unwrap();
    assert_eq!(resp.sources, vec!["doc1", "doc2"]);
}

#[test]
fn missing_answer_is_a_shape_error() {
    let result = serde_json::from_str::<AskResponse>(r#"{"sources":["doc1"]}"#);
    assert!(result.is_err());
}

// =============================================================
// AskRequest serialization
// =============================================================

#[test]
fn request_carries_the_question_field() {
    let body = AskRequest {
        question: "capital of France?".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({"question": "capital of France?"})
    );
}

// =============================================================
// Message constructors
// =============================================================

#[test]
fn user_messages_carry_no_sources() {
    let msg = Message::user("hello");
    assert_eq!(msg.role, Role::User);
    assert!(msg.sources.is_empty());
}

#[test]
fn roles_serialize_lowercase() {
    let value = serde_json::to_value(Message::assistant("hi", Vec::new())).unwrap();
    assert_eq!(value["role"], "assistant");
}
