//! Ownership, release and concurrent-read behaviour.

use std::thread;

use bus_config_manager::{ConfigManager, InterfaceCfg};

mod common;

#[test]
fn test_views_release_on_drop() {
    let manager = common::manager(true);

    let publisher = manager.get_publisher_by_index(0).unwrap();
    let client = manager.get_client_by_name("default").unwrap();
    assert_eq!(manager.live_views(), 2);

    drop(publisher);
    assert_eq!(manager.live_views(), 1);
    drop(client);
    assert_eq!(manager.live_views(), 0);

    // Teardown is allowed once every view is released
    drop(manager);
}

#[test]
fn test_server_releases_both_resources_together() {
    let manager = common::manager(true);
    let server = manager.get_server_by_index(0).unwrap();
    assert_eq!(manager.live_views(), 2);
    assert_eq!(server.app().app_name(), "VideoIngestion");

    drop(server);
    assert_eq!(manager.live_views(), 0);
}

#[test]
fn test_returned_values_outlive_views() {
    let manager = common::manager(true);
    let (topics, endpoint) = {
        let publisher = manager.get_publisher_by_index(0).unwrap();
        (
            publisher.get_interface_value("Topics").unwrap(),
            publisher.get_endpoint().unwrap(),
        )
    };
    assert_eq!(manager.live_views(), 0);
    assert_eq!(topics.array_len().unwrap(), 3);
    assert_eq!(endpoint, "127.0.0.1:65013");
}

#[test]
fn test_concurrent_reads_are_identical() {
    let manager = common::manager(true);
    let server = manager.get_server_by_name("restricted").unwrap();
    let publisher = manager.get_publisher_by_index(0).unwrap();

    let results: Vec<(Vec<String>, Vec<String>)> = thread::scope(|s| {
        let handles: Vec<_> = (0..2)
            .map(|_| {
                s.spawn(|| {
                    let mut last = None;
                    for _ in 0..100 {
                        last = Some((
                            publisher.get_allowed_clients().unwrap(),
                            server.get_allowed_clients().unwrap(),
                        ));
                    }
                    last.unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results[0], results[1]);
    assert_eq!(results[0].0, vec!["VideoAnalytics", "Visualizer"]);
    assert_eq!(results[0].1, vec!["Visualizer"]);
}

#[test]
fn test_readers_never_see_partial_topic_sets() {
    let manager = common::manager(true);
    let original = vec!["camera1_stream", "camera2_stream", "camera3_stream"];
    let replacement = vec!["a", "b", "c", "d"];

    thread::scope(|s| {
        let reader = s.spawn(|| {
            let view = manager.get_publisher_by_index(0).unwrap();
            for _ in 0..500 {
                let topics = view.get_topics().unwrap();
                assert!(topics == original || topics == replacement, "{:?}", topics);
            }
        });

        let mut writer = manager.get_publisher_by_index(0).unwrap();
        for i in 0..100 {
            let next = if i % 2 == 0 { &replacement } else { &original };
            writer.set_topics(next).unwrap();
        }
        drop(writer);
        reader.join().unwrap();
    });

    assert_eq!(manager.live_views(), 0);
}

#[test]
fn test_manager_from_files() {
    use std::io::Write;

    let mut document = tempfile::NamedTempFile::new().unwrap();
    let body = serde_json::json!({
        "config": {"encoding": "jpeg"},
        "interfaces": common::interfaces()
    });
    // The fixture's empty Topics array is rejected by validation
    write!(document, "{}", body).unwrap();

    let settings = bus_config_manager::ManagerSettings {
        dev_mode: true,
        document_path: Some(document.path().display().to_string()),
        ..Default::default()
    };
    let err = ConfigManager::load(settings.clone()).unwrap_err();
    assert!(err.to_string().contains("Publishers[1].Topics"));

    let mut interfaces = common::interfaces();
    interfaces["Publishers"][1]["Topics"] = serde_json::json!(["frames"]);
    let body = serde_json::json!({"config": {"encoding": "jpeg"}, "interfaces": interfaces});
    std::fs::write(document.path(), body.to_string()).unwrap();

    let manager = ConfigManager::load(settings).unwrap();
    assert_eq!(manager.get_num_publishers().unwrap(), 2);
    assert_eq!(
        manager.get_app_config_value("encoding").unwrap().as_str().unwrap(),
        "jpeg"
    );
}
