use async_trait::async_trait;
use inspector_core::{
    ClassificationRequest, Fragment, FragmentStream, InferenceGateway, InspectorError, Result,
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Scripted gateway for tests: replays configured fragments, optionally
/// failing outright or mid-stream, and records every invocation.
pub struct MockGateway {
    model_id: String,
    fragments: Vec<String>,
    failure: Option<String>,
    interrupt_after: Option<usize>,
    calls: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<ClassificationRequest>>>,
}

impl MockGateway {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            fragments: vec![],
            failure: None,
            interrupt_after: None,
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_fragment(mut self, text: impl Into<String>) -> Self {
        self.fragments.push(text.into());
        self
    }

    pub fn with_fragments<I, T>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.fragments.extend(texts.into_iter().map(Into::into));
        self
    }

    /// Fail every `classify` call outright with the given cause.
    pub fn with_failure(mut self, cause: impl Into<String>) -> Self {
        self.failure = Some(cause.into());
        self
    }

    /// Yield the first `count` fragments, then interrupt the stream.
    pub fn with_interruption_after(mut self, count: usize) -> Self {
        self.interrupt_after = Some(count);
        self
    }

    /// How many times `classify` has been invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request passed to `classify`, if any.
    pub fn last_request(&self) -> Option<ClassificationRequest> {
        self.last_request.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl InferenceGateway for MockGateway {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn classify(&self, request: ClassificationRequest) -> Result<FragmentStream> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(request);
        }

        if let Some(cause) = &self.failure {
            return Err(InspectorError::Inference {
                model_id: self.model_id.clone(),
                cause: cause.clone(),
            });
        }

        let fragments = self.fragments.clone();
        let interrupt_after = self.interrupt_after;
        let stream = async_stream::stream! {
            for (index, text) in fragments.into_iter().enumerate() {
                if interrupt_after.is_some_and(|count| index >= count) {
                    yield Err(InspectorError::StreamInterrupted {
                        cause: "mock interruption".to_string(),
                    });
                    return;
                }
                yield Ok(Fragment::new(text));
            }
        };
        Ok(Box::pin(stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use inspector_core::{ImageFormat, UploadedImage};

    fn request() -> ClassificationRequest {
        ClassificationRequest::new(UploadedImage::new(ImageFormat::Png, vec![1, 2, 3]))
    }

    #[tokio::test]
    async fn test_mock_replays_fragments_and_counts_calls() {
        let mock = MockGateway::new("test-model").with_fragments(["Good", ", 95% confident"]);
        assert_eq!(mock.call_count(), 0);

        let mut stream = mock.classify(request()).await.unwrap();
        let mut texts = vec![];
        while let Some(fragment) = stream.next().await {
            texts.push(fragment.unwrap().text);
        }

        assert_eq!(texts, vec!["Good", ", 95% confident"]);
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.last_request().unwrap().image.format, ImageFormat::Png);
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let mock = MockGateway::new("test-model").with_failure("ThrottlingException");
        let err = match mock.classify(request()).await {
            Ok(_) => panic!("expected classify to fail"),
            Err(e) => e,
        };
        assert!(matches!(err, InspectorError::Inference { .. }));
        assert!(err.to_string().contains("ThrottlingException"));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_interruption_mid_stream() {
        let mock = MockGateway::new("test-model")
            .with_fragments(["Good", ", 95%"])
            .with_interruption_after(1);

        let mut stream = mock.classify(request()).await.unwrap();
        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(first.text, "Good");

        let second = stream.next().await.unwrap();
        assert!(matches!(second, Err(InspectorError::StreamInterrupted { .. })));
        assert!(stream.next().await.is_none());
    }
}
