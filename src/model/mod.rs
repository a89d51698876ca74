//! VCH configuration shapes: the UI form model and the provisioning API body

pub mod api;
pub mod de;
pub mod ui;

use serde::{Deserialize, Serialize};

pub use api::VchApi;
pub use ui::VchUi;

/// Traffic policy of a container network.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FirewallPolicy {
    Closed,
    Outbound,
    Peers,
    Published,
    Open,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_reads_wizard_json() {
        let json = r#"{
            "general": {"name": "vch1", "debug": 1},
            "computeCapacity": {"cpuLimit": "unlimited", "memoryLimit": 4096},
            "networks": {
                "publicNetwork": "pub-pg",
                "containerNetworks": [
                    {"containerNetwork": "c-pg", "containerNetworkFirewall": "published"}
                ]
            },
            "security": {"noTlsverify": true}
        }"#;

        let ui: VchUi = serde_json::from_str(json).unwrap();
        let general = ui.general.unwrap();
        assert_eq!(general.name.as_deref(), Some("vch1"));
        assert_eq!(general.debug.as_deref(), Some("1"));

        let compute = ui.compute_capacity.unwrap();
        assert_eq!(compute.cpu_limit.as_deref(), Some("unlimited"));
        assert_eq!(compute.memory_limit.as_deref(), Some("4096"));

        let networks = ui.networks.unwrap();
        assert!(networks.dns_server.is_empty());
        assert_eq!(
            networks.container_networks[0].container_network_firewall,
            Some(FirewallPolicy::Published)
        );

        assert!(ui.security.unwrap().no_tlsverify);
        assert!(ui.storage_capacity.is_none());
    }

    #[test]
    fn test_api_model_wire_names() {
        let api = VchApi {
            network: Some(api::Network {
                public: Some(api::NetworkEndpoint {
                    port_group: Some(api::ObjectRef::named(Some("pub-pg".into()))),
                    static_ip: Some("10.0.0.5/24".into()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&api).unwrap();
        assert_eq!(value["network"]["public"]["static"], "10.0.0.5/24");
        assert_eq!(value["network"]["public"]["port_group"]["name"], "pub-pg");
        assert!(value["network"]["public"].get("gateway").is_none());
        assert!(value.get("name").is_none());
    }

    #[test]
    fn test_generate_certificate_keeps_null_cname() {
        let generate = api::GenerateCertificate {
            size: api::Quantity::new(2048, "bit"),
            organization: Some(vec![None]),
            cname: None,
        };

        let value = serde_json::to_value(&generate).unwrap();
        assert!(value["cname"].is_null());
        assert!(value.as_object().unwrap().contains_key("cname"));
        assert_eq!(value["organization"], serde_json::json!([null]));
    }
}
