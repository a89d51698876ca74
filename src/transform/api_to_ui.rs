//! API document -> UI model

use super::datastore::get_ds_name_and_folder;
use super::TransformError;
use crate::model::api::{
    Compute, Container, ContainerNetwork, Endpoint, Network, NetworkEndpoint, Quantity, Registry,
    Storage,
};
use crate::model::ui::{
    CertificateUi, ComputeCapacityUi, ContainerNetworkUi, GeneralUi, NetworksUi, RegistryUi,
    StorageCapacityUi, VolumeStoreUi,
};
use crate::model::{VchApi, VchUi};
use tracing::debug;

const STATIC: &str = "static";
const DHCP: &str = "dhcp";

fn require<'a, T>(value: &'a Option<T>, path: &str) -> Result<&'a T, TransformError> {
    value.as_ref().ok_or_else(|| TransformError::missing(path))
}

fn join(items: &Option<Vec<String>>) -> String {
    items.as_deref().unwrap_or_default().join(",")
}

/// Fill the wizard from an existing VCH.
///
/// The backend always returns every section, so a missing section or
/// required nested object is reported as an error rather than defaulted.
pub fn api_to_ui(api: &VchApi) -> Result<VchUi, TransformError> {
    build(api).inspect_err(|e| debug!(error = %e, "cannot load VCH into the UI model"))
}

fn build(api: &VchApi) -> Result<VchUi, TransformError> {
    let container = require(&api.container, "container")?;
    let compute = require(&api.compute, "compute")?;
    let endpoint = require(&api.endpoint, "endpoint")?;
    let storage = require(&api.storage, "storage")?;
    let network = require(&api.network, "network")?;

    Ok(VchUi {
        general: Some(general(api, container)),
        compute_capacity: Some(compute_capacity(compute, endpoint)?),
        storage_capacity: Some(storage_capacity(storage)?),
        networks: Some(networks(network, api.registry.as_ref())?),
        registry: api.registry.as_ref().map(registry),
        ..Default::default()
    })
}

fn general(api: &VchApi, container: &Container) -> GeneralUi {
    GeneralUi {
        name: api.name.clone(),
        container_name_convention: Some(container.name_convention.clone().unwrap_or_default()),
        debug: api.debug.map(|d| d.to_string()),
        syslog_address: Some(api.syslog_addr.clone().unwrap_or_default()),
    }
}

fn compute_capacity(
    compute: &Compute,
    endpoint: &Endpoint,
) -> Result<ComputeCapacityUi, TransformError> {
    let value_of = |q: &Option<Quantity>| q.as_ref().map(|q| q.value.to_string());
    let cpu = require(&compute.cpu, "compute.cpu")?;
    let memory = require(&compute.memory, "compute.memory")?;

    Ok(ComputeCapacityUi {
        cpu_limit: value_of(&cpu.limit),
        memory_limit: value_of(&memory.limit),
        cpu_reservation: value_of(&cpu.reservation),
        cpu_shares: require(&cpu.shares, "compute.cpu.shares")?.level.clone(),
        memory_reservation: value_of(&memory.reservation),
        memory_shares: require(&memory.shares, "compute.memory.shares")?.level.clone(),
        endpoint_cpu: require(&endpoint.cpu, "endpoint.cpu")?
            .sockets
            .map(|sockets| sockets.to_string()),
        endpoint_memory: Some(require(&endpoint.memory, "endpoint.memory")?.value.to_string()),
        compute_resource: require(&compute.resource, "compute.resource")?.id.clone(),
    })
}

fn storage_capacity(storage: &Storage) -> Result<StorageCapacityUi, TransformError> {
    let image_store = storage
        .image_stores
        .first()
        .ok_or_else(|| TransformError::missing("storage.image_stores[0]"))?;
    let image_location = get_ds_name_and_folder(image_store)?;

    let volume_store = require(&storage.volume_stores, "storage.volume_stores")?
        .iter()
        .map(|vol| {
            let location = get_ds_name_and_folder(&vol.datastore)?;
            Ok(VolumeStoreUi {
                vol_datastore: Some(location.name),
                vol_file_folder: Some(location.folder_path),
                docker_vol_name: vol.label.clone(),
            })
        })
        .collect::<Result<Vec<_>, TransformError>>()?;

    Ok(StorageCapacityUi {
        image_store: Some(image_location.name),
        file_folder: Some(image_location.folder_path),
        base_image_size: storage
            .base_image_size
            .as_ref()
            .map(|size| size.value.to_string()),
        base_image_size_unit: storage.base_image_size.as_ref().map(|size| size.units.clone()),
        volume_store,
    })
}

/// UI fields of one endpoint attachment.
struct Attachment {
    port_group: Option<String>,
    ip: Option<String>,
    gateway: Option<String>,
    routing: Option<String>,
    network_type: Option<String>,
}

fn attachment(endpoint: &NetworkEndpoint, path: &str) -> Result<Attachment, TransformError> {
    let port_group = require(&endpoint.port_group, &format!("{path}.port_group"))?;
    let gateway = endpoint.gateway.as_ref();
    // "static" is inferred from configured nameservers, not from the address
    let network_type = match &endpoint.nameservers {
        Some(ns) if !ns.is_empty() => STATIC,
        _ => DHCP,
    };

    Ok(Attachment {
        port_group: port_group.id.clone(),
        ip: Some(endpoint.static_ip.clone().unwrap_or_default()),
        gateway: Some(gateway.and_then(|g| g.address.clone()).unwrap_or_default()),
        routing: Some(gateway.map(|g| join(&g.routing_destinations)).unwrap_or_default()),
        network_type: Some(network_type.to_string()),
    })
}

fn networks(network: &Network, registry: Option<&Registry>) -> Result<NetworksUi, TransformError> {
    let bridge = require(&network.bridge, "network.bridge")?;
    let public_endpoint = require(&network.public, "network.public")?;
    let bridge_port_group = require(&bridge.port_group, "network.bridge.port_group")?;
    let public = attachment(public_endpoint, "network.public")?;
    let client = attachment(require(&network.client, "network.client")?, "network.client")?;
    let management = attachment(
        require(&network.management, "network.management")?,
        "network.management",
    )?;

    let container_networks = require(&network.container, "network.container")?
        .iter()
        .enumerate()
        .map(|(index, container)| container_network(index, container))
        .collect::<Result<Vec<_>, TransformError>>()?;

    let proxy = registry.and_then(|r| r.image_fetch_proxy.as_ref());

    Ok(NetworksUi {
        bridge_network: bridge_port_group.id.clone(),
        bridge_network_range: bridge.ip_range.clone(),

        public_network: public.port_group,
        public_network_ip: public.ip,
        public_network_gateway: public.gateway,
        public_network_type: public.network_type,
        dns_server: public_endpoint
            .nameservers
            .clone()
            .unwrap_or_else(|| vec![String::new()]),

        client_network: client.port_group,
        client_network_ip: client.ip,
        client_network_gateway: client.gateway,
        client_network_routing: client.routing,
        client_network_type: client.network_type,

        management_network: management.port_group,
        management_network_ip: management.ip,
        management_network_gateway: management.gateway,
        management_network_routing: management.routing,
        management_network_type: management.network_type,

        container_networks,

        http_proxy: proxy.and_then(|p| p.http.clone()),
        http_proxy_port: None,
        https_proxy: proxy.and_then(|p| p.https.clone()),
        https_proxy_port: None,
    })
}

fn container_network(
    index: usize,
    container: &ContainerNetwork,
) -> Result<ContainerNetworkUi, TransformError> {
    let port_group = require(
        &container.port_group,
        &format!("network.container[{index}].port_group"),
    )?;
    let has_ranges = container
        .ip_ranges
        .as_ref()
        .is_some_and(|ranges| !ranges.is_empty());

    let network_type = if has_ranges {
        let gateway = require(
            &container.gateway,
            &format!("network.container[{index}].gateway"),
        )?;
        match gateway.address.as_deref() {
            Some(address) if !address.is_empty() => STATIC,
            _ => DHCP,
        }
    } else {
        DHCP
    };

    Ok(ContainerNetworkUi {
        container_network: port_group.id.clone(),
        container_network_dns: Some(join(&container.nameservers)),
        container_network_label: container.alias.clone(),
        container_network_firewall: container.firewall,
        container_network_ip_range: Some(join(&container.ip_ranges)),
        container_network_gateway: Some(
            container
                .gateway
                .as_ref()
                .and_then(|g| g.address.clone())
                .unwrap_or_default(),
        ),
        container_network_type: Some(network_type.to_string()),
    })
}

fn registry(registry: &Registry) -> RegistryUi {
    RegistryUi {
        whitelist_registry: registry.whitelist.clone().unwrap_or_default(),
        insecure_registry: registry.insecure.clone().unwrap_or_default(),
        registry_ca: registry
            .certificate_authorities
            .iter()
            .flatten()
            .map(|ca| CertificateUi {
                name: None,
                content: ca.pem.clone(),
            })
            .collect(),
    }
}
