//! Concurrent first use of the override channel

use confinject::core::{ConfigProvider, LifecycleState, MapEnvironment};
use confinject::domain::{ConfigKey, ConfigValue, ScalarType};
use confinject::source::{Properties, PROPERTIES_DEFAULT_FILENAME};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use tempfile::TempDir;
use test_case::test_case;

fn overrides(count: usize) -> Properties {
    (0..count)
        .map(|i| (format!("override.key{i}"), format!("value{i}")))
        .collect()
}

fn provider_with_file(contents: &str) -> (TempDir, ConfigProvider) {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(PROPERTIES_DEFAULT_FILENAME), contents).unwrap();
    let provider = ConfigProvider::builder()
        .search_paths([dir.path()])
        .environment(MapEnvironment::new())
        .build()
        .unwrap();
    (dir, provider)
}

#[test_case(2 ; "two callers")]
#[test_case(16 ; "sixteen callers")]
#[test_case(64 ; "sixty-four callers")]
fn test_concurrent_first_resolution_merges_once(callers: usize) {
    let (_dir, provider) = provider_with_file("override.key0=file\nbase.key=base\n");
    let provider = Arc::new(provider);
    provider.set_overrides(overrides(50));

    let barrier = Arc::new(Barrier::new(callers));
    let merges = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..callers)
        .map(|i| {
            let provider = Arc::clone(&provider);
            let barrier = Arc::clone(&barrier);
            let merges = Arc::clone(&merges);
            std::thread::spawn(move || {
                barrier.wait();
                if provider.apply_pending_overrides() {
                    merges.fetch_add(1, Ordering::SeqCst);
                }
                let key = ConfigKey::new(format!("override.key{}", i % 50)).unwrap();
                provider.resolve_key(&key, &ScalarType::Text).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let value = handle.join().expect("resolver thread panicked");
        assert_eq!(value, ConfigValue::Text(format!("value{}", i % 50)));
    }

    assert_eq!(merges.load(Ordering::SeqCst), 1);
    assert_eq!(provider.state(), LifecycleState::OverrideApplied);

    let snapshot = provider.snapshot();
    // 50 override keys plus the one bootstrap-only key
    assert_eq!(snapshot.len(), 51);
    assert_eq!(snapshot["override.key0"], "value0");
    assert_eq!(snapshot["base.key"], "base");
}

#[test]
fn test_concurrent_resolutions_without_overrides_leave_state_loaded() {
    let (_dir, provider) = provider_with_file("a.b=42\n");
    let key = ConfigKey::new("a.b").unwrap();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                assert_eq!(
                    provider.resolve_key(&key, &ScalarType::Integer).unwrap(),
                    ConfigValue::Integer(42)
                );
            });
        }
    });

    assert_eq!(provider.state(), LifecycleState::Loaded);
}

#[tokio::test]
async fn test_provider_shared_across_tasks() {
    let (_dir, provider) = provider_with_file("service.enabled=True\n");
    let provider = Arc::new(provider);
    provider.set_overrides(Properties::from([(
        "service.name".to_string(),
        "landscape".to_string(),
    )]));

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let provider = Arc::clone(&provider);
        tasks.push(tokio::task::spawn_blocking(move || {
            let enabled = provider
                .resolve_key(
                    &ConfigKey::new("service.enabled").unwrap(),
                    &ScalarType::Boolean,
                )
                .unwrap();
            let name = provider
                .resolve_key(&ConfigKey::new("service.name").unwrap(), &ScalarType::Text)
                .unwrap();
            (enabled, name)
        }));
    }

    for task in tasks {
        let (enabled, name) = task.await.unwrap();
        assert_eq!(enabled, ConfigValue::Boolean(true));
        assert_eq!(name, ConfigValue::Text("landscape".to_string()));
    }
}
