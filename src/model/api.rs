//! Request/response body of the VCH provisioning API

use super::FirewallPolicy;
use serde::{Deserialize, Serialize};

/// VCH as described by the provisioning backend.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct VchApi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute: Option<Compute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<Network>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<Storage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<Auth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<Registry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<Container>,
}

/// A numeric value with its unit, e.g. `{"value": 2000, "units": "MHz"}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Quantity {
    pub value: i64,
    pub units: String,
}

impl Quantity {
    pub fn new(value: i64, units: impl Into<String>) -> Self {
        Self {
            value,
            units: units.into(),
        }
    }
}

/// Reference to a vSphere object by name or managed-object id.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ObjectRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ObjectRef {
    pub fn named(name: Option<String>) -> Self {
        Self { id: None, name }
    }
}

/// PEM-encoded certificate or key.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Pem {
    pub pem: String,
}

// Compute --------------------------------------------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Compute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<Allocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<Allocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<ObjectRef>,
}

/// Limit, reservation and shares of one resource pool dimension.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Allocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares: Option<Shares>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Shares {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

// Endpoint -------------------------------------------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Endpoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations_credentials: Option<OperationsCredentials>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<EndpointCpu>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<Quantity>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct OperationsCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_permissions: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EndpointCpu {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sockets: Option<i64>,
}

// Storage --------------------------------------------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Storage {
    pub image_stores: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_image_size: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_stores: Option<Vec<VolumeStore>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct VolumeStore {
    pub datastore: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

// Network --------------------------------------------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Network {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge: Option<BridgeNetwork>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<NetworkEndpoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<NetworkEndpoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management: Option<NetworkEndpoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<Vec<ContainerNetwork>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BridgeNetwork {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_group: Option<ObjectRef>,
}

/// Public, client or management attachment of the VCH endpoint VM.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct NetworkEndpoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_group: Option<ObjectRef>,
    #[serde(rename = "static", skip_serializing_if = "Option::is_none")]
    pub static_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<Gateway>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Gateway {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_destinations: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ContainerNetwork {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_group: Option<ObjectRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall: Option<FirewallPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_ranges: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<Gateway>,
}

// Auth -----------------------------------------------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Auth {
    pub client: ClientAuth,
    pub server: ServerAuth,
}

/// Client verification: either disabled or a set of trusted CAs.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ClientAuth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_tls_verify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_authorities: Option<Vec<Pem>>,
}

/// Server identity: a generation request or an uploaded certificate/key pair.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ServerAuth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate: Option<GenerateCertificate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<Pem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<Pem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GenerateCertificate {
    pub size: Quantity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Vec<Option<String>>>,
    // serialized as null when unknown, the backend derives it
    pub cname: Option<String>,
}

// Registry -------------------------------------------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Registry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whitelist: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insecure: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_authorities: Option<Vec<Pem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_fetch_proxy: Option<ImageFetchProxy>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ImageFetchProxy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https: Option<String>,
}

// Container ------------------------------------------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Container {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_convention: Option<String>,
}
