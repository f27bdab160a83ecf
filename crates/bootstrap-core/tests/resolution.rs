//! End-to-end resolution scenarios
//!
//! Drives the full flow (quickstart gating, catalog, questions, answers, merge,
//! dispatch) with a scripted prompter, a counting catalog and a recording generator.

use async_trait::async_trait;
use bootstrap_core::resolve::{
    resolve, Answer, Prompter, Question, QuestionId, QuestionKind, ResolutionFlow,
};
use bootstrap_core::{
    dispatch, run, CatalogSource, Generator, InstallMode, InvocationArgs, ManifestFetchResult,
    OfferingKind, PassthroughFlags, ProductConfig, RemoteManifestEntry, ResolveError,
    ResolvedConfig, EXIT_FAILURE, EXIT_SUCCESS,
};
use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Answers questions from a script and records what was asked
struct ScriptedPrompter {
    replies: VecDeque<Answer>,
    asked: Vec<Question>,
    sessions: usize,
}

impl ScriptedPrompter {
    fn new(replies: Vec<Answer>) -> Self {
        Self {
            replies: replies.into(),
            asked: Vec::new(),
            sessions: 0,
        }
    }

    fn asked_ids(&self) -> Vec<QuestionId> {
        self.asked.iter().map(|q| q.id).collect()
    }
}

impl Prompter for ScriptedPrompter {
    fn start(&mut self) -> io::Result<()> {
        self.sessions += 1;
        Ok(())
    }

    fn ask(&mut self, question: &Question) -> io::Result<Answer> {
        self.asked.push(question.clone());
        self.replies
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Interrupted, "script exhausted"))
    }
}

struct CountingCatalog {
    result: ManifestFetchResult,
    fetches: AtomicUsize,
}

impl CountingCatalog {
    fn new(result: ManifestFetchResult) -> Self {
        Self {
            result,
            fetches: AtomicUsize::new(0),
        }
    }

    fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for CountingCatalog {
    async fn fetch(&self) -> ManifestFetchResult {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

#[derive(Default)]
struct RecordingGenerator {
    received: Mutex<Vec<ResolvedConfig>>,
}

#[async_trait]
impl Generator for RecordingGenerator {
    async fn generate(&self, config: &ResolvedConfig) -> anyhow::Result<()> {
        self.received.lock().unwrap().push(config.clone());
        Ok(())
    }
}

/// Product config whose catalog and generator are never reached
#[derive(Clone)]
struct OfflineConfig(OfferingKind);

impl ProductConfig for OfflineConfig {
    fn name(&self) -> &'static str {
        "create-test-project"
    }

    fn display_name(&self) -> &'static str {
        "Strapi"
    }

    fn offering(&self) -> OfferingKind {
        self.0
    }

    fn manifest_url(&self) -> &'static str {
        "http://127.0.0.1:9/catalog.yml"
    }

    fn generator_program(&self) -> &'static str {
        "true"
    }

    fn generator_env(&self) -> &'static str {
        "BOOTSTRAP_TEST_GENERATOR"
    }
}

fn one_template() -> ManifestFetchResult {
    ManifestFetchResult::Available(vec![RemoteManifestEntry {
        title: "Blog Template".to_string(),
        repo: "strapi/strapi-template-blog".to_string(),
    }])
}

fn quickstart_args(directory: Option<&str>, url: Option<&str>) -> InvocationArgs {
    InvocationArgs::new(
        directory.map(String::from),
        url.map(String::from),
        Some(InstallMode::Quickstart),
        PassthroughFlags::default(),
    )
}

#[tokio::test]
async fn test_scenario_a_all_questions_answered() {
    let flow = ResolutionFlow::new(OfferingKind::Template);
    let catalog = CountingCatalog::new(one_template());
    let mut prompter = ScriptedPrompter::new(vec![
        Answer::Text("my-app".to_string()),
        Answer::Url(None),
        Answer::Flag(false),
    ]);

    let resolved = resolve(&flow, &InvocationArgs::default(), &catalog, &mut prompter)
        .await
        .unwrap();

    assert_eq!(
        prompter.asked_ids(),
        vec![QuestionId::Directory, QuestionId::Offering, QuestionId::InstallMode]
    );
    match &prompter.asked[1].kind {
        QuestionKind::Select { choices } => {
            let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
            assert_eq!(labels, vec!["None", "Blog "]);
        }
        other => panic!("expected select, got {:?}", other),
    }

    assert_eq!(resolved.directory, "my-app");
    assert_eq!(resolved.offering_url, None);
    assert!(!resolved.quickstart);
    assert_eq!(catalog.fetches(), 1);

    let generator = RecordingGenerator::default();
    assert_eq!(dispatch(&generator, &resolved).await, EXIT_SUCCESS);
    assert_eq!(generator.received.lock().unwrap().as_slice(), &[resolved]);
}

#[tokio::test]
async fn test_scenario_b_quickstart_with_directory_and_no_catalog() {
    let flow = ResolutionFlow::new(OfferingKind::Template);
    let catalog = CountingCatalog::new(ManifestFetchResult::Unavailable);
    let mut prompter =
        ScriptedPrompter::new(vec![Answer::Text("https://github.com/org/custom".to_string())]);

    let resolved = resolve(&flow, &quickstart_args(Some("my-app"), None), &catalog, &mut prompter)
        .await
        .unwrap();

    assert_eq!(prompter.asked_ids(), vec![QuestionId::Offering]);
    assert!(matches!(prompter.asked[0].kind, QuestionKind::Input { .. }));
    assert_eq!(resolved.directory, "my-app");
    assert_eq!(
        resolved.offering_url.as_deref(),
        Some("https://github.com/org/custom")
    );
    assert!(resolved.quickstart);
}

#[tokio::test]
async fn test_scenario_c_starter_quickstart_without_values_fails_early() {
    let flow = ResolutionFlow::new(OfferingKind::Starter);
    let catalog = CountingCatalog::new(one_template());
    let mut prompter = ScriptedPrompter::new(Vec::new());

    let err = resolve(&flow, &quickstart_args(None, None), &catalog, &mut prompter)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResolveError::QuickstartIncomplete {
            required: "<directory> and <starterurl>"
        }
    ));
    assert!(prompter.asked.is_empty());
    assert_eq!(prompter.sessions, 0);
    assert_eq!(catalog.fetches(), 0);
}

#[tokio::test]
async fn test_template_quickstart_with_url_asks_for_directory() {
    let flow = ResolutionFlow::new(OfferingKind::Template);
    let catalog = CountingCatalog::new(one_template());
    let mut prompter = ScriptedPrompter::new(vec![Answer::Text("my-app".to_string())]);

    let resolved = resolve(
        &flow,
        &quickstart_args(None, Some("https://github.com/org/foo")),
        &catalog,
        &mut prompter,
    )
    .await
    .unwrap();

    assert_eq!(prompter.asked_ids(), vec![QuestionId::Directory]);
    assert_eq!(prompter.sessions, 1);
    assert_eq!(catalog.fetches(), 0);
    assert_eq!(resolved.directory, "my-app");
    assert_eq!(
        resolved.offering_url.as_deref(),
        Some("https://github.com/org/foo")
    );
    assert!(resolved.quickstart);
}

#[tokio::test]
async fn test_template_quickstart_without_directory_or_url_fails_early() {
    let flow = ResolutionFlow::new(OfferingKind::Template);
    let catalog = CountingCatalog::new(one_template());
    let mut prompter = ScriptedPrompter::new(Vec::new());

    let err = resolve(&flow, &quickstart_args(None, None), &catalog, &mut prompter)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResolveError::QuickstartIncomplete {
            required: "<directory>"
        }
    ));
    assert!(prompter.asked.is_empty());
    assert_eq!(prompter.sessions, 0);
    assert_eq!(catalog.fetches(), 0);
}

#[tokio::test]
async fn test_incomplete_quickstart_exits_with_failure_and_generates_nothing() {
    for offering in [OfferingKind::Template, OfferingKind::Starter] {
        let generator = RecordingGenerator::default();

        let status = run(&OfflineConfig(offering), quickstart_args(None, None), &generator).await;

        assert_eq!(status, EXIT_FAILURE);
        assert!(generator.received.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_fully_specified_starter_asks_nothing_and_skips_fetch() {
    let flow = ResolutionFlow::new(OfferingKind::Starter);
    let catalog = CountingCatalog::new(one_template());
    let mut prompter = ScriptedPrompter::new(Vec::new());

    let resolved = resolve(
        &flow,
        &quickstart_args(Some("my-site"), Some("https://github.com/org/starter")),
        &catalog,
        &mut prompter,
    )
    .await
    .unwrap();

    assert!(prompter.asked.is_empty());
    assert_eq!(catalog.fetches(), 0);
    assert_eq!(resolved.offering, OfferingKind::Starter);
    assert_eq!(
        resolved.offering_url.as_deref(),
        Some("https://github.com/org/starter")
    );
}

#[tokio::test]
async fn test_aborted_session_dispatches_nothing() {
    let flow = ResolutionFlow::new(OfferingKind::Starter);
    let catalog = CountingCatalog::new(ManifestFetchResult::Unavailable);
    // Answers the directory, then the script runs dry and the session is interrupted
    let mut prompter = ScriptedPrompter::new(vec![Answer::Text("my-site".to_string())]);

    let err = resolve(&flow, &InvocationArgs::default(), &catalog, &mut prompter)
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::Cancelled));
    assert_eq!(prompter.asked_ids(), vec![QuestionId::Directory, QuestionId::Offering]);
}

#[tokio::test]
async fn test_confirm_gated_flow_declined() {
    let flow = ResolutionFlow {
        confirm_before_offering: true,
        ..ResolutionFlow::new(OfferingKind::Template)
    };
    let catalog = CountingCatalog::new(one_template());
    let mut prompter = ScriptedPrompter::new(vec![
        Answer::Text("my-app".to_string()),
        Answer::Flag(false),
        Answer::Flag(true),
    ]);

    let resolved = resolve(&flow, &InvocationArgs::default(), &catalog, &mut prompter)
        .await
        .unwrap();

    assert_eq!(
        prompter.asked_ids(),
        vec![QuestionId::Directory, QuestionId::UseOffering, QuestionId::InstallMode]
    );
    assert_eq!(resolved.offering_url, None);
    assert!(resolved.quickstart);
}

#[tokio::test]
async fn test_generation_failure_maps_to_exit_failure() {
    struct Failing;

    #[async_trait]
    impl Generator for Failing {
        async fn generate(&self, _config: &ResolvedConfig) -> anyhow::Result<()> {
            anyhow::bail!("⛔️ You can only create a Strapi app in an empty directory.")
        }
    }

    let config = ResolvedConfig {
        directory: "my-app".to_string(),
        offering_url: None,
        quickstart: true,
        offering: OfferingKind::Template,
        passthrough: PassthroughFlags::default(),
    };
    assert_eq!(dispatch(&Failing, &config).await, EXIT_FAILURE);
}
