//! ReadmeAgent -- the externally visible generation operation.
//!
//! Wires credential resolution, the prompt builder, and the generation
//! client into one call: analysis in, markdown out. The environment
//! fallback credential is injected at construction rather than read
//! mid-call, so tests can substitute it.

use secrecy::{ExposeSecret, SecretString};

use docforge_types::analysis::ProjectAnalysis;
use docforge_types::error::GenerationError;

use crate::llm::{GenerationClient, GenerativeBackend};
use crate::prompt::ReadmePromptBuilder;

/// Creates a backend bound to one credential.
///
/// Implementations live in docforge-infra (e.g. `GeminiBackendFactory`);
/// tests substitute factories that record the credential they were handed.
pub trait BackendFactory: Send + Sync {
    type Backend: GenerativeBackend;

    fn create(&self, api_key: SecretString) -> Self::Backend;
}

/// Orchestrates one README generation request.
pub struct ReadmeAgent<F: BackendFactory> {
    factory: F,
    fallback_key: Option<SecretString>,
}

impl<F: BackendFactory> ReadmeAgent<F> {
    /// Create an agent with an optional environment fallback credential.
    pub fn new(factory: F, fallback_key: Option<SecretString>) -> Self {
        Self {
            factory,
            fallback_key,
        }
    }

    /// Generate a README for `analysis`.
    ///
    /// A fresh backend is constructed and the model re-resolved on every
    /// call; requests stay fully independent at the cost of one extra
    /// listing round trip.
    ///
    /// # Errors
    ///
    /// [`GenerationError::MissingCredential`] before any network activity
    /// when neither the request nor the fallback supplies a key; otherwise
    /// whatever [`GenerationClient`] raises.
    pub async fn generate(&self, analysis: &ProjectAnalysis) -> Result<String, GenerationError> {
        let api_key = self.resolve_credential(analysis)?;
        let prompt = ReadmePromptBuilder::build(analysis);

        let client = GenerationClient::connect(self.factory.create(api_key)).await?;
        client.generate(&prompt).await
    }

    /// Request key if present and non-blank, else the injected fallback.
    fn resolve_credential(
        &self,
        analysis: &ProjectAnalysis,
    ) -> Result<SecretString, GenerationError> {
        analysis
            .api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .or(self.fallback_key.as_ref())
            .cloned()
            .ok_or(GenerationError::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docforge_types::llm::{BackendError, GenerationConfig, ModelInfo};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Observes every interaction the agent has with the backend layer.
    #[derive(Default)]
    struct Recorder {
        keys: Mutex<Vec<String>>,
        list_calls: AtomicUsize,
        generate_calls: AtomicUsize,
    }

    struct MockFactory {
        recorder: Arc<Recorder>,
        models: Vec<ModelInfo>,
        response: String,
    }

    impl MockFactory {
        fn new(models: Vec<ModelInfo>, response: &str) -> (Self, Arc<Recorder>) {
            let recorder = Arc::new(Recorder::default());
            (
                Self {
                    recorder: Arc::clone(&recorder),
                    models,
                    response: response.to_string(),
                },
                recorder,
            )
        }
    }

    impl BackendFactory for MockFactory {
        type Backend = MockBackend;

        fn create(&self, api_key: SecretString) -> MockBackend {
            self.recorder
                .keys
                .lock()
                .unwrap()
                .push(api_key.expose_secret().to_string());
            MockBackend {
                recorder: Arc::clone(&self.recorder),
                models: self.models.clone(),
                response: self.response.clone(),
            }
        }
    }

    struct MockBackend {
        recorder: Arc<Recorder>,
        models: Vec<ModelInfo>,
        response: String,
    }

    impl GenerativeBackend for MockBackend {
        async fn list_models(&self) -> Result<Vec<ModelInfo>, BackendError> {
            self.recorder.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.models.clone())
        }

        async fn generate(
            &self,
            _model: &str,
            _prompt: &str,
            _config: &GenerationConfig,
        ) -> Result<String, BackendError> {
            self.recorder.generate_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    fn capable_model() -> ModelInfo {
        ModelInfo {
            name: "models/gemini-2.0-flash".to_string(),
            supported_generation_methods: vec!["generateContent".to_string()],
        }
    }

    fn embeddings_model() -> ModelInfo {
        ModelInfo {
            name: "models/text-embedding-004".to_string(),
            supported_generation_methods: vec!["embedContent".to_string()],
        }
    }

    fn demo_analysis(api_key: Option<&str>) -> ProjectAnalysis {
        ProjectAnalysis {
            name: "demo".to_string(),
            structure: vec!["a.py".to_string(), "b.py".to_string()],
            languages: vec!["Python".to_string()],
            frameworks: vec![],
            file_count: 2,
            estimated_loc: 50,
            description: None,
            dependencies: None,
            scripts: None,
            api_key: api_key.map(SecretString::from),
        }
    }

    #[tokio::test]
    async fn returns_mocked_text_unmodified_after_trim() {
        let (factory, _) = MockFactory::new(vec![capable_model()], "# demo\n\nGenerated.\n");
        let agent = ReadmeAgent::new(factory, None);

        let readme = agent.generate(&demo_analysis(Some("sk-req"))).await.unwrap();
        assert_eq!(readme, "# demo\n\nGenerated.");
    }

    #[tokio::test]
    async fn supplied_credential_takes_precedence_over_fallback() {
        let (factory, recorder) = MockFactory::new(vec![capable_model()], "# demo");
        let agent = ReadmeAgent::new(factory, Some(SecretString::from("sk-env")));

        agent.generate(&demo_analysis(Some("sk-req"))).await.unwrap();

        assert_eq!(*recorder.keys.lock().unwrap(), vec!["sk-req".to_string()]);
    }

    #[tokio::test]
    async fn fallback_credential_used_when_request_omits_key() {
        let (factory, recorder) = MockFactory::new(vec![capable_model()], "# demo");
        let agent = ReadmeAgent::new(factory, Some(SecretString::from("sk-env")));

        agent.generate(&demo_analysis(None)).await.unwrap();

        assert_eq!(*recorder.keys.lock().unwrap(), vec!["sk-env".to_string()]);
    }

    #[tokio::test]
    async fn blank_request_key_falls_back_to_environment() {
        let (factory, recorder) = MockFactory::new(vec![capable_model()], "# demo");
        let agent = ReadmeAgent::new(factory, Some(SecretString::from("sk-env")));

        agent.generate(&demo_analysis(Some("   "))).await.unwrap();

        assert_eq!(*recorder.keys.lock().unwrap(), vec!["sk-env".to_string()]);
    }

    #[tokio::test]
    async fn missing_credential_fails_before_any_network_activity() {
        let (factory, recorder) = MockFactory::new(vec![capable_model()], "# demo");
        let agent = ReadmeAgent::new(factory, None);

        let err = agent.generate(&demo_analysis(None)).await.unwrap_err();

        assert!(matches!(err, GenerationError::MissingCredential));
        assert!(recorder.keys.lock().unwrap().is_empty());
        assert_eq!(recorder.list_calls.load(Ordering::SeqCst), 0);
        assert_eq!(recorder.generate_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn no_capable_model_means_no_generation_attempt() {
        let (factory, recorder) = MockFactory::new(vec![embeddings_model()], "# demo");
        let agent = ReadmeAgent::new(factory, None);

        let err = agent.generate(&demo_analysis(Some("sk-req"))).await.unwrap_err();

        assert!(matches!(err, GenerationError::NoCapableModel));
        assert_eq!(recorder.list_calls.load(Ordering::SeqCst), 1);
        assert_eq!(recorder.generate_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_payload_surfaces_as_empty_generation() {
        let (factory, recorder) = MockFactory::new(vec![capable_model()], "");
        let agent = ReadmeAgent::new(factory, None);

        let err = agent.generate(&demo_analysis(Some("sk-req"))).await.unwrap_err();

        assert!(matches!(err, GenerationError::EmptyGeneration));
        assert_eq!(recorder.generate_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn each_call_constructs_a_fresh_backend() {
        let (factory, recorder) = MockFactory::new(vec![capable_model()], "# demo");
        let agent = ReadmeAgent::new(factory, None);
        let analysis = demo_analysis(Some("sk-req"));

        agent.generate(&analysis).await.unwrap();
        agent.generate(&analysis).await.unwrap();

        assert_eq!(recorder.keys.lock().unwrap().len(), 2);
        assert_eq!(recorder.list_calls.load(Ordering::SeqCst), 2);
    }
}
