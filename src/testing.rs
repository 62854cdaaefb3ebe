//! JSON fixtures shaped like real API responses.

use hcloud_schema::LoadBalancer;
use serde_json::json;

pub fn action_json(id: i64, command: &str, status: &str) -> serde_json::Value {
    let (progress, finished) = if status == "running" {
        (50, serde_json::Value::Null)
    } else {
        (100, json!("2016-01-30T23:55:00Z"))
    };
    json!({
        "id": id,
        "command": command,
        "status": status,
        "progress": progress,
        "started": "2016-01-30T23:50:00Z",
        "finished": finished,
        "resources": [{"id": 1, "type": "load_balancer"}],
        "error": null
    })
}

/// A protected `lb11` in fsn1 with one healthy server target behind an
/// HTTP service on port 80.
pub fn load_balancer_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "public_net": {
            "enabled": true,
            "ipv4": {"ip": "131.232.99.1"},
            "ipv6": {"ip": "2001:db8::1"}
        },
        "private_net": [],
        "location": {
            "id": 1,
            "name": "fsn1",
            "description": "Falkenstein DC Park 1",
            "country": "DE",
            "city": "Falkenstein",
            "latitude": 50.47612,
            "longitude": 12.370071,
            "network_zone": "eu-central"
        },
        "load_balancer_type": {
            "id": 1,
            "name": "lb11",
            "description": "LB11",
            "max_connections": 20000,
            "max_services": 5,
            "max_targets": 25,
            "max_assigned_certificates": 10,
            "prices": []
        },
        "protection": {"delete": true},
        "labels": {"env": "prod"},
        "created": "2016-01-30T23:50:00+00:00",
        "services": [{
            "protocol": "http",
            "listen_port": 80,
            "destination_port": 80,
            "proxyprotocol": false,
            "health_check": {
                "protocol": "http",
                "port": 80,
                "interval": 15,
                "timeout": 10,
                "retries": 3,
                "http": {"domain": null, "path": "/", "status_codes": ["2??"], "tls": false}
            },
            "http": {"sticky_sessions": false, "redirect_http": false, "certificates": []}
        }],
        "targets": [{
            "type": "server",
            "server": {"id": 80},
            "health_status": [{"listen_port": 80, "status": "healthy"}],
            "use_private_ip": false
        }],
        "algorithm": {"type": "round_robin"}
    })
}

pub fn load_balancer(id: i64, name: &str) -> LoadBalancer {
    serde_json::from_value(load_balancer_json(id, name)).unwrap()
}
