use ign_domain::config::{FailurePolicy, LaunchConfig};
use ign_domain::integrations::IntegrationSet;
use ign_domain::launch::LaunchOptions;
use ign_domain::registry::{ExtensionSlice, InitializedExtension};
use ign_launcher::{
    BoxError, Integration, IntegrationError, LaunchDelegate, LaunchError, Launcher,
};
use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Shared call journal used to assert the step ordering of the sequence.
type Journal = Arc<Mutex<Vec<&'static str>>>;

#[derive(Debug)]
struct RecordingSdk {
    journal: Journal,
    calls: Arc<AtomicUsize>,
    last_key: Arc<Mutex<Option<String>>>,
    fail: bool,
}

impl RecordingSdk {
    fn new(journal: &Journal) -> (Self, Arc<AtomicUsize>, Arc<Mutex<Option<String>>>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let last_key = Arc::new(Mutex::new(None));
        let sdk = Self {
            journal: journal.clone(),
            calls: calls.clone(),
            last_key: last_key.clone(),
            fail: false,
        };
        (sdk, calls, last_key)
    }
}

impl Integration for RecordingSdk {
    fn name(&self) -> &'static str {
        "maps"
    }

    fn provide_api_key(&self, key: &str) -> Result<(), IntegrationError> {
        self.journal.lock().expect("journal lock").push("sdk");
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_key.lock().expect("key lock") = Some(key.to_owned());
        if self.fail { Err(IntegrationError::new("invalid key")) } else { Ok(()) }
    }
}

#[derive(Debug)]
struct NoopExtension;

impl ExtensionSlice for NoopExtension {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn recording_registrar(
    journal: &Journal,
    calls: &Arc<AtomicUsize>,
) -> impl Fn(&LaunchConfig) -> Result<Vec<InitializedExtension>, BoxError> + Send + Sync + use<> {
    let journal = journal.clone();
    let calls = calls.clone();
    move |_cfg| {
        journal.lock().expect("journal lock").push("register");
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![InitializedExtension::new(NoopExtension)])
    }
}

#[derive(Debug)]
struct StubDelegate {
    journal: Journal,
    verdict: bool,
}

impl LaunchDelegate for StubDelegate {
    fn did_finish_launching(&self, _options: &LaunchOptions) -> bool {
        self.journal.lock().expect("journal lock").push("delegate");
        self.verdict
    }
}

fn config_with_maps_key(key: Option<&str>) -> LaunchConfig {
    let mut cfg = LaunchConfig::default();
    cfg.integrations.maps.api_key = key.map(str::to_owned);
    cfg
}

fn launcher_for(key: Option<&str>, verdict: bool) -> (Launcher, Journal, Arc<AtomicUsize>) {
    let journal: Journal = Arc::new(Mutex::new(Vec::new()));
    let (sdk, sdk_calls, _) = RecordingSdk::new(&journal);
    let registrar_calls = Arc::new(AtomicUsize::new(0));

    let launcher = Launcher::builder()
        .config(config_with_maps_key(key))
        .integration(sdk)
        .registrar(recording_registrar(&journal, &registrar_calls))
        .delegate(StubDelegate { journal: journal.clone(), verdict })
        .build()
        .expect("launcher should build");

    (launcher, journal, sdk_calls)
}

#[test]
fn absent_key_never_initializes_sdk() {
    let (launcher, journal, sdk_calls) = launcher_for(None, true);

    let proceed = launcher.on_launch(&LaunchOptions::new()).expect("launch should succeed");

    assert!(proceed);
    assert_eq!(sdk_calls.load(Ordering::SeqCst), 0);
    assert_eq!(*journal.lock().expect("journal lock"), vec!["register", "delegate"]);
}

#[test]
fn empty_key_never_initializes_sdk() {
    let (launcher, journal, sdk_calls) = launcher_for(Some(""), true);

    let proceed = launcher.on_launch(&LaunchOptions::new()).expect("launch should succeed");

    assert!(proceed, "return value should pass through the true-stub delegate");
    assert_eq!(sdk_calls.load(Ordering::SeqCst), 0);
    assert_eq!(*journal.lock().expect("journal lock"), vec!["register", "delegate"]);
}

#[test]
fn present_key_initializes_sdk_exactly_once_with_exact_value() {
    let journal: Journal = Arc::new(Mutex::new(Vec::new()));
    let (sdk, sdk_calls, last_key) = RecordingSdk::new(&journal);
    let registrar_calls = Arc::new(AtomicUsize::new(0));

    let launcher = Launcher::builder()
        .config(config_with_maps_key(Some("AIzaTest123")))
        .integration(sdk)
        .registrar(recording_registrar(&journal, &registrar_calls))
        .delegate(StubDelegate { journal: journal.clone(), verdict: true })
        .build()
        .expect("launcher should build");

    let proceed = launcher.on_launch(&LaunchOptions::new()).expect("launch should succeed");

    assert!(proceed);
    assert_eq!(sdk_calls.load(Ordering::SeqCst), 1);
    assert_eq!(last_key.lock().expect("key lock").as_deref(), Some("AIzaTest123"));
    assert_eq!(registrar_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn registration_runs_once_between_sdk_init_and_delegation() {
    let (launcher, journal, _) = launcher_for(Some("ABC123XYZ"), true);

    let proceed = launcher.on_launch(&LaunchOptions::new()).expect("launch should succeed");

    assert!(proceed);
    assert_eq!(*journal.lock().expect("journal lock"), vec!["sdk", "register", "delegate"]);
}

#[test]
fn delegate_verdict_passes_through_unchanged() {
    for verdict in [true, false] {
        let (launcher, _, _) = launcher_for(Some("ABC123XYZ"), verdict);
        let proceed = launcher.on_launch(&LaunchOptions::new()).expect("launch should succeed");
        assert_eq!(proceed, verdict);
    }
}

#[test]
fn repeat_launch_does_not_reinitialize_integrations() {
    let (launcher, journal, sdk_calls) = launcher_for(Some("ABC123XYZ"), true);

    launcher.on_launch(&LaunchOptions::new()).expect("first launch");
    launcher.on_launch(&LaunchOptions::new()).expect("second launch");

    assert_eq!(sdk_calls.load(Ordering::SeqCst), 1, "once-guard must hold across launches");
    let journal = journal.lock().expect("journal lock");
    assert_eq!(journal.iter().filter(|step| **step == "sdk").count(), 1);
    assert_eq!(journal.iter().filter(|step| **step == "delegate").count(), 2);
}

#[test]
fn state_records_initialized_integration_set() {
    let (launcher, _, _) = launcher_for(Some("AIzaTest123"), true);
    launcher.on_launch(&LaunchOptions::new()).expect("launch should succeed");
    assert_eq!(launcher.state().expect("snapshot").integrations(), IntegrationSet::MAPS);

    let (launcher, _, _) = launcher_for(None, true);
    launcher.on_launch(&LaunchOptions::new()).expect("launch should succeed");
    assert_eq!(launcher.state().expect("snapshot").integrations(), IntegrationSet::empty());
}

#[test]
fn repeat_launch_skips_extension_registration() {
    let journal: Journal = Arc::new(Mutex::new(Vec::new()));
    let registrar_calls = Arc::new(AtomicUsize::new(0));

    let launcher = Launcher::builder()
        .config(config_with_maps_key(None))
        .registrar(recording_registrar(&journal, &registrar_calls))
        .build()
        .expect("launcher should build");

    launcher.on_launch(&LaunchOptions::new()).expect("first launch");
    launcher.on_launch(&LaunchOptions::new()).expect("second launch");

    assert_eq!(
        registrar_calls.load(Ordering::SeqCst),
        1,
        "registration must not re-run once the snapshot is retained"
    );
    assert_eq!(launcher.state().expect("snapshot").extension_count(), 1);
}

#[test]
fn state_snapshot_contains_registered_extensions() {
    let (launcher, _, _) = launcher_for(None, true);

    assert!(launcher.state().is_none(), "no snapshot before launch");
    launcher.on_launch(&LaunchOptions::new()).expect("launch should succeed");

    let state = launcher.state().expect("snapshot after launch");
    assert_eq!(state.extension_count(), 1);
    assert!(state.get_extension::<NoopExtension>().is_some());
}

#[test]
fn integration_failure_propagates_by_default() {
    let journal: Journal = Arc::new(Mutex::new(Vec::new()));
    let (mut sdk, _, _) = RecordingSdk::new(&journal);
    sdk.fail = true;

    let launcher = Launcher::builder()
        .config(config_with_maps_key(Some("bad-key")))
        .integration(sdk)
        .build()
        .expect("launcher should build");

    let err = launcher.on_launch(&LaunchOptions::new()).expect_err("launch should fail");
    assert!(matches!(err, LaunchError::Integration { integration: "maps", .. }));
}

#[test]
fn integration_failure_is_swallowed_under_log_policy() {
    let journal: Journal = Arc::new(Mutex::new(Vec::new()));
    let (mut sdk, sdk_calls, _) = RecordingSdk::new(&journal);
    sdk.fail = true;

    let launcher = Launcher::builder()
        .config(config_with_maps_key(Some("bad-key")))
        .integration(sdk)
        .on_failure(FailurePolicy::Log)
        .build()
        .expect("launcher should build");

    let proceed = launcher.on_launch(&LaunchOptions::new()).expect("failure should be logged");
    assert!(proceed);
    assert_eq!(sdk_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn registrar_failure_respects_policy() {
    let failing_registrar =
        |_cfg: &LaunchConfig| -> Result<Vec<InitializedExtension>, BoxError> {
            Err("extension exploded".into())
        };

    let launcher = Launcher::builder().registrar(failing_registrar).build().expect("build");
    let err = launcher.on_launch(&LaunchOptions::new()).expect_err("propagate by default");
    assert!(matches!(err, LaunchError::Registration { .. }));

    let launcher = Launcher::builder()
        .registrar(failing_registrar)
        .on_failure(FailurePolicy::Log)
        .build()
        .expect("build");
    let proceed = launcher.on_launch(&LaunchOptions::new()).expect("log policy continues");
    assert!(proceed);
    assert_eq!(launcher.state().expect("snapshot").extension_count(), 0);
}

#[test]
fn empty_app_name_fails_validation() {
    let mut cfg = LaunchConfig::default();
    cfg.app.name = String::new();

    let err = Launcher::builder().config(cfg).build().expect_err("validation should fail");
    assert!(matches!(err, LaunchError::Validation { .. }));
}
