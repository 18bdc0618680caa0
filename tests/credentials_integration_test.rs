//! End-to-end tests for live resolution, export and snapshot restore.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use awsenv::infrastructure::credentials::{
    ChainProvider, EnvProvider, SharedConfig, SharedCredentialsProvider,
};
use awsenv::{
    capture, register, register_with, Config, CredentialMode, CredentialValue, KeyValueConfig,
    Keys, LiveCredentialResolver, ProvideCredentials, ProviderError, ProviderKind,
    ResolutionState, SnapshotCredentialResolver,
};
use common::{aws_env, count, temp_file, Counting};

const CREDENTIALS: &str = "
[default]
aws_access_key_id = AKIAFILEKEY
aws_secret_access_key = FILESECRET
";

/// A metadata-style source that would always succeed if it were asked.
struct RoleCredentials {
    calls: Arc<AtomicUsize>,
}

impl ProvideCredentials for RoleCredentials {
    fn name(&self) -> &'static str {
        "EC2RoleProvider"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Remote
    }

    fn retrieve(&self) -> Result<CredentialValue, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(CredentialValue::new("ASIAROLE", "ROLESECRET", Some("ROLETOKEN".to_string()), "EC2RoleProvider"))
    }
}

#[test]
fn test_concurrent_session_calls_retrieve_once() {
    const CALLERS: usize = 20;
    let file = temp_file(CREDENTIALS);
    let (env, env_calls) = Counting::new(EnvProvider::new());
    let (shared, shared_calls) =
        Counting::new(SharedCredentialsProvider::new().with_filename(file.path()));

    temp_env::with_vars(aws_env(&[("AWS_REGION", "us-west-2")]), || {
        let resolver = LiveCredentialResolver::with_chain(
            ChainProvider::restricted(vec![Box::new(env), Box::new(shared)]),
            SharedConfig::new(),
        );
        let barrier = Barrier::new(CALLERS);

        let sessions: Vec<_> = thread::scope(|s| {
            let handles: Vec<_> = (0..CALLERS)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        resolver.session()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect()
        });

        assert!(sessions.iter().all(|s| Arc::ptr_eq(s, &sessions[0])));
    });

    assert_eq!(count(&env_calls), 1);
    assert_eq!(count(&shared_calls), 1);
}

#[test]
fn test_concurrent_failures_share_one_error() {
    const CALLERS: usize = 8;
    let dir = tempfile::tempdir().unwrap();
    let (env, env_calls) = Counting::new(EnvProvider::new());
    let (shared, shared_calls) = Counting::new(
        SharedCredentialsProvider::new().with_filename(dir.path().join("credentials")),
    );

    temp_env::with_vars(aws_env(&[]), || {
        let resolver = LiveCredentialResolver::with_chain(
            ChainProvider::restricted(vec![Box::new(env), Box::new(shared)]),
            SharedConfig::new(),
        );

        let errors: Vec<_> = thread::scope(|s| {
            let handles: Vec<_> = (0..CALLERS).map(|_| s.spawn(|| resolver.session())).collect();
            handles.into_iter().map(|h| h.join().unwrap().unwrap_err()).collect()
        });

        assert!(errors[0].is_resolution());
        assert!(errors.iter().all(|e| e == &errors[0]));
        assert_eq!(resolver.state(), ResolutionState::Failed);

        // A later call replays the error without probing again.
        assert_eq!(resolver.credentials().unwrap_err(), errors[0]);
    });

    assert_eq!(count(&env_calls), 1);
    assert_eq!(count(&shared_calls), 1);
}

#[test]
fn test_capture_round_trip_identity() {
    let vars = aws_env(&[
        ("AWS_ACCESS_KEY_ID", "AKIAROUNDTRIP"),
        ("AWS_SECRET_ACCESS_KEY", "RTSECRET"),
        ("AWS_SESSION_TOKEN", "RTTOKEN"),
        ("AWS_DEFAULT_REGION", "sa-east-1"),
    ]);
    temp_env::with_vars(vars, || {
        let live = LiveCredentialResolver::new();
        let snapshot = capture(&live).unwrap();
        let restored = SnapshotCredentialResolver::new(snapshot);

        let session = restored.session().unwrap();
        assert_eq!(session.credentials(), &live.credentials().unwrap());
        assert_eq!(session.region(), &live.region().unwrap());
        assert_eq!(session.credentials().session_token(), Some("RTTOKEN"));
    });
}

#[test]
fn test_snapshot_is_independent_of_later_environment() {
    let vars = aws_env(&[
        ("AWS_ACCESS_KEY_ID", "AKIAORIGINAL"),
        ("AWS_SECRET_ACCESS_KEY", "ORIGINALSECRET"),
        ("AWS_REGION", "us-east-1"),
    ]);
    let snapshot = temp_env::with_vars(vars, || capture(&LiveCredentialResolver::new()).unwrap());

    let later = aws_env(&[
        ("AWS_ACCESS_KEY_ID", "AKIACHANGED"),
        ("AWS_SECRET_ACCESS_KEY", "CHANGEDSECRET"),
        ("AWS_REGION", "eu-west-3"),
    ]);
    temp_env::with_vars(later, || {
        assert_eq!(snapshot.credentials.access_key_id(), "AKIAORIGINAL");
        assert_eq!(snapshot.region.as_str(), "us-east-1");
    });
}

#[test]
fn test_export_then_reload_selects_snapshot_path() {
    let dir = tempfile::tempdir().unwrap();
    let exported = dir.path().join("exported.yaml");

    let origin = aws_env(&[
        ("AWS_ACCESS_KEY_ID", "AKIAEXPORTED"),
        ("AWS_SECRET_ACCESS_KEY", "EXPORTEDSECRET"),
        ("AWS_REGION", "us-west-2"),
    ]);
    temp_env::with_vars(origin, || {
        let base = KeyValueConfig::from_yaml_str("cluster: batch\n").unwrap();
        let session = register(Arc::new(base)).unwrap();
        assert_eq!(session.mode(), CredentialMode::Live);

        let mut keys = Keys::new();
        session.marshal(&mut keys).unwrap();
        KeyValueConfig::from_keys(keys).write_to_file(&exported).unwrap();
    });

    // The worker sees a different environment and must not read it.
    let (env, env_calls) = Counting::new(EnvProvider::new());
    let worker = aws_env(&[
        ("AWS_ACCESS_KEY_ID", "AKIAWORKER"),
        ("AWS_SECRET_ACCESS_KEY", "WORKERSECRET"),
        ("AWS_REGION", "ap-southeast-2"),
    ]);
    temp_env::with_vars(worker, || {
        let base = KeyValueConfig::from_file(&exported).unwrap();
        let session = register_with(Arc::new(base), || {
            LiveCredentialResolver::with_chain(
                ChainProvider::restricted(vec![Box::new(env)]),
                SharedConfig::new(),
            )
        })
        .unwrap();

        assert_eq!(session.mode(), CredentialMode::Snapshot);
        let handle = session.session().unwrap();
        assert_eq!(handle.credentials().access_key_id(), "AKIAEXPORTED");
        assert_eq!(handle.credentials().provider_name(), "EnvProvider");
        assert_eq!(handle.region().as_str(), "us-west-2");
        assert_eq!(
            session.value("cluster"),
            Some(serde_yaml::Value::String("batch".to_string()))
        );
    });

    assert_eq!(count(&env_calls), 0);
}

#[test]
fn test_reexporting_a_snapshot_preserves_it() {
    let yaml = "
awsenv:
  credentials:
    accesskeyid: AKIAFROZEN
    secretaccesskey: FROZENSECRET
    providername: SharedCredentialsProvider
  region: us-west-2
";
    let first = register(Arc::new(KeyValueConfig::from_yaml_str(yaml).unwrap())).unwrap();
    let mut keys = Keys::new();
    first.marshal(&mut keys).unwrap();

    let second = register(Arc::new(KeyValueConfig::from_keys(keys))).unwrap();
    assert_eq!(second.mode(), CredentialMode::Snapshot);
    assert_eq!(second.credentials().unwrap(), first.credentials().unwrap());
    assert_eq!(second.region().unwrap().as_str(), "us-west-2");
}

#[test]
fn test_shared_file_only_with_remote_source_present() {
    let file = temp_file(CREDENTIALS);
    let role_calls = Arc::new(AtomicUsize::new(0));

    temp_env::with_vars(aws_env(&[]), || {
        let chain = ChainProvider::restricted(vec![
            Box::new(RoleCredentials {
                calls: Arc::clone(&role_calls),
            }),
            Box::new(EnvProvider::new()),
            Box::new(SharedCredentialsProvider::new().with_filename(file.path())),
        ]);
        let resolver = LiveCredentialResolver::with_chain(chain, SharedConfig::new());

        let creds = resolver.credentials().unwrap();
        assert_eq!(creds.access_key_id(), "AKIAFILEKEY");
        assert_eq!(creds.provider_name(), "SharedCredentialsProvider");
        assert_eq!(creds.session_token(), None);
    });

    assert_eq!(role_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_default_chain_reads_shared_file_from_environment_path() {
    let file = temp_file(CREDENTIALS);
    let path = file.path().to_string_lossy().to_string();

    temp_env::with_vars(aws_env(&[("AWS_SHARED_CREDENTIALS_FILE", path.as_str())]), || {
        let resolver = LiveCredentialResolver::new();
        let creds = resolver.credentials().unwrap();
        assert_eq!(creds.provider_name(), "SharedCredentialsProvider");
        assert!(resolver.region().unwrap().is_empty());
    });
}

#[test]
fn test_snapshot_region_is_frozen_after_first_session() {
    let yaml = "
awsenv:
  credentials:
    accesskeyid: AKIAFROZEN
    secretaccesskey: FROZENSECRET
  region: us-west-2
";
    let base = KeyValueConfig::from_yaml_str(yaml).unwrap();
    let snapshot = awsenv::Snapshot::from_yaml_value(base.value(awsenv::AWSENV_KEY).unwrap()).unwrap();

    let mut resolver = SnapshotCredentialResolver::new(snapshot);
    let session = resolver.session().unwrap();
    assert_eq!(session.region().as_str(), "us-west-2");

    resolver.set_region("eu-north-1");
    assert_eq!(resolver.session().unwrap().region().as_str(), "us-west-2");
}
