//! Shared fixtures for integration tests.

use bus_config_manager::{AppDocument, ConfigManager, KeyStore, ManagerSettings};
use serde_json::json;

/// Interfaces document modelled on a video ingestion pipeline.
pub fn interfaces() -> serde_json::Value {
    json!({
        "Publishers": [
            {
                "Name": "default",
                "Type": "zmq_tcp",
                "EndPoint": "127.0.0.1:65013",
                "Topics": ["camera1_stream", "camera2_stream", "camera3_stream"],
                "AllowedClients": ["VideoAnalytics", "Visualizer"]
            },
            {
                "Name": "ipc_pub",
                "Type": "zmq_ipc",
                "EndPoint": {"SocketDir": "/EII/sockets", "SocketFile": "frames"},
                "Topics": []
            }
        ],
        "Subscribers": [
            {
                "Name": "default",
                "Type": "zmq_tcp",
                "EndPoint": "127.0.0.1:65014",
                "PublisherAppName": "VideoAnalytics",
                "Topics": ["results"]
            }
        ],
        "Servers": [
            {
                "Name": "echo_service",
                "Type": "zmq_tcp",
                "EndPoint": "127.0.0.1:5669"
            },
            {
                "Name": "restricted",
                "Type": "zmq_tcp",
                "EndPoint": "127.0.0.1:5670",
                "AllowedClients": ["Visualizer"]
            }
        ],
        "Clients": [
            {
                "Name": "default",
                "Type": "zmq_tcp",
                "EndPoint": "127.0.0.1:5669",
                "ServerAppName": "VideoAnalytics"
            }
        ]
    })
}

pub fn keys() -> KeyStore {
    let mut keys = KeyStore::default();
    for app in ["VideoIngestion", "VideoAnalytics", "Visualizer"] {
        keys.public.insert(app.to_string(), format!("{}-public", app));
        keys.private.insert(app.to_string(), format!("{}-private", app));
    }
    keys
}

pub fn document() -> AppDocument {
    AppDocument {
        config: json!({"encoding": {"type": "jpeg", "level": 95}}).into(),
        interfaces: interfaces().into(),
        keys: keys(),
    }
}

/// Manager for `VideoIngestion` over the fixture document.
pub fn manager(dev_mode: bool) -> ConfigManager {
    let settings = ManagerSettings {
        app_name: "VideoIngestion".to_string(),
        dev_mode,
        ..Default::default()
    };
    ConfigManager::new(settings, document())
}
