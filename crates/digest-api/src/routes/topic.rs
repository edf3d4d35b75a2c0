use axum::{
    extract::{Form, State},
    response::Html,
};
use digest_workflow::GenerationError;
use serde::Deserialize;
use std::sync::Arc;

use crate::{state::AppState, views};

#[derive(Debug, Deserialize)]
pub struct TopicForm {
    #[serde(default)]
    pub topic: String,
}

/// Echo the topic, or turn it into an abstract when generation is enabled
pub async fn submit_topic(State(state): State<Arc<AppState>>, Form(form): Form<TopicForm>) -> Html<String> {
    let topic = form.topic.trim();
    if topic.is_empty() {
        return Html(views::topic_warning_page(&GenerationError::EmptyTopic.to_string()));
    }

    let Some(generator) = &state.generator else {
        return Html(views::topic_echo_page(topic));
    };

    match generator.generate(topic).await {
        Ok(text) => Html(views::abstract_page(topic, &text)),
        Err(e) => {
            tracing::error!(error = %e, "abstract generation failed");
            Html(views::topic_error_page(topic, &e.to_string()))
        }
    }
}
