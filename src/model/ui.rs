//! Form-shaped VCH model, as populated by the creation wizard

use super::de::{flag, opt_text};
use serde::{Deserialize, Serialize};

/// VCH configuration as edited in the UI. Every section is optional; an
/// absent section means the user never configured it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct VchUi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general: Option<GeneralUi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_capacity: Option<ComputeCapacityUi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_capacity: Option<StorageCapacityUi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networks: Option<NetworksUi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityUi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<RegistryUi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<OperationsUi>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralUi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_name_convention: Option<String>,
    #[serde(deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog_address: Option<String>,
}

/// Compute limits and reservations. Numeric values are kept as the text the
/// user typed; "unlimited" is a legal limit.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ComputeCapacityUi {
    #[serde(deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub cpu_limit: Option<String>,
    #[serde(deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub memory_limit: Option<String>,
    #[serde(deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub cpu_reservation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_shares: Option<String>,
    #[serde(deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub memory_reservation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_shares: Option<String>,
    #[serde(deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub endpoint_cpu: Option<String>,
    #[serde(deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub endpoint_memory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_resource: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageCapacityUi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_store: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_folder: Option<String>,
    #[serde(deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub base_image_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_image_size_unit: Option<String>,
    pub volume_store: Vec<VolumeStoreUi>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeStoreUi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vol_datastore: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vol_file_folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_vol_name: Option<String>,
}

/// Network page of the wizard. The `*_type` fields hold "static" or "dhcp".
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworksUi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge_network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge_network_range: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_network_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_network_gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_network_type: Option<String>,
    pub dns_server: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_network_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_network_gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_network_routing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_network_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_network_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_network_gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_network_routing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_network_type: Option<String>,

    pub container_networks: Vec<ContainerNetworkUi>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_proxy: Option<String>,
    #[serde(deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub http_proxy_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https_proxy: Option<String>,
    #[serde(deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub https_proxy_port: Option<String>,
}

/// One row of the container-network table.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerNetworkUi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_network_dns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_network_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_network_firewall: Option<super::FirewallPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_network_ip_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_network_gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_network_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SecurityUi {
    #[serde(deserialize_with = "flag")]
    pub no_tlsverify: bool,
    pub tls_ca: Vec<CertificateUi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_cname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub certificate_key_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_server_cert: Option<CertificateUi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_server_key: Option<CertificateUi>,
}

/// An uploaded PEM file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CertificateUi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistryUi {
    pub whitelist_registry: Vec<String>,
    pub insecure_registry: Vec<String>,
    pub registry_ca: Vec<CertificateUi>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationsUi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ops_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ops_password: Option<String>,
    #[serde(deserialize_with = "flag")]
    pub ops_grant_perms: bool,
}
