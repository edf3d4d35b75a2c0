use digest_llm::{AssistantRequest, ChatOptions, ChatRequest, Message, ThreadRequest};
use serde_json::json;

#[test]
fn test_chat_request_creation() {
    let messages = vec![Message::human("Hello")];
    let request = ChatRequest::new("gpt-4o-mini", messages);

    assert_eq!(request.model, "gpt-4o-mini");
    assert_eq!(request.messages.len(), 1);
    assert_eq!(request.options, ChatOptions::default());
}

#[test]
fn test_chat_request_with_options() {
    let options = ChatOptions::new().temperature(0.2).max_tokens(400);
    let request = ChatRequest::new("gpt-4o-mini", vec![Message::human("Hello")]).with_options(options);

    assert_eq!(request.options.temperature, Some(0.2));
    assert_eq!(request.options.max_tokens, Some(400));
}

#[test]
fn test_message_roles() {
    assert_eq!(Message::system("s").role(), "system");
    assert_eq!(Message::human("h").role(), "user");
    assert_eq!(Message::human("h").content(), "h");
}

#[test]
fn test_message_serialization_human() {
    let json = serde_json::to_string(&Message::human("Hello")).unwrap();
    assert!(json.contains("\"role\":\"user\""));
    assert!(json.contains("Hello"));
}

#[test]
fn test_assistant_request_payload() {
    let request = AssistantRequest::new("gpt-4o-mini", "Summarise")
        .name("Paper summarizer")
        .with_file_search("vs_1");

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({
            "model": "gpt-4o-mini",
            "instructions": "Summarise",
            "name": "Paper summarizer",
            "tools": [{"type": "file_search"}],
            "tool_resources": {"file_search": {"vector_store_ids": ["vs_1"]}}
        })
    );
}

#[test]
fn test_thread_request_without_resources() {
    let value = serde_json::to_value(ThreadRequest::new().user_message("Hi")).unwrap();

    assert_eq!(value, json!({"messages": [{"role": "user", "content": "Hi"}]}));
}
