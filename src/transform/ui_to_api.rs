//! UI model -> API request body

use super::parse_int_or_zero;
use crate::model::api::{
    Allocation, Auth, BridgeNetwork, ClientAuth, Compute, Container, ContainerNetwork, Endpoint,
    EndpointCpu, Gateway, GenerateCertificate, ImageFetchProxy, Network, NetworkEndpoint,
    ObjectRef, OperationsCredentials, Pem, Quantity, Registry, ServerAuth, Shares, Storage,
    VolumeStore,
};
use crate::model::ui::{
    CertificateUi, ComputeCapacityUi, ContainerNetworkUi, GeneralUi, NetworksUi,
    OperationsUi, RegistryUi, SecurityUi, StorageCapacityUi,
};
use crate::model::{VchApi, VchUi};
use tracing::debug;

const CPU_UNITS: &str = "MHz";
const MEMORY_UNITS: &str = "MiB";
const KEY_SIZE_UNITS: &str = "bit";
const DEFAULT_KEY_SIZE: i64 = 2048;

/// A form value counts as supplied when present and non-empty.
fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn non_empty<T: Clone>(items: &[T]) -> Option<Vec<T>> {
    (!items.is_empty()).then(|| items.to_vec())
}

fn pems(certs: &[CertificateUi]) -> Vec<Pem> {
    certs
        .iter()
        .map(|cert| Pem {
            pem: cert.content.clone(),
        })
        .collect()
}

/// Build the provisioning request body for a (possibly partial) form.
pub fn ui_to_api(ui: &VchUi) -> VchApi {
    let general = ui.general.as_ref();

    let api = VchApi {
        name: general.and_then(|g| filled(&g.name)).map(str::to_string),
        debug: general
            .and_then(|g| filled(&g.debug))
            .map(|d| parse_int_or_zero(Some(d))),
        syslog_addr: general
            .and_then(|g| filled(&g.syslog_address))
            .map(str::to_string),
        compute: ui.compute_capacity.as_ref().map(compute),
        network: ui.networks.as_ref().map(network),
        storage: ui.storage_capacity.as_ref().map(storage),
        auth: ui.security.as_ref().map(|s| auth(s, general)),
        endpoint: endpoint(ui.operations.as_ref(), ui.compute_capacity.as_ref()),
        registry: registry(ui.registry.as_ref(), ui.networks.as_ref()),
        container: general.and_then(container),
    };

    debug!(
        compute = api.compute.is_some(),
        network = api.network.is_some(),
        storage = api.storage.is_some(),
        auth = api.auth.is_some(),
        endpoint = api.endpoint.is_some(),
        registry = api.registry.is_some(),
        container = api.container.is_some(),
        "built VCH request body"
    );
    api
}

fn compute(capacity: &ComputeCapacityUi) -> Compute {
    let mut cpu = Allocation {
        limit: Some(Quantity::new(
            parse_int_or_zero(capacity.cpu_limit.as_deref()),
            CPU_UNITS,
        )),
        ..Default::default()
    };
    let mut memory = Allocation {
        limit: Some(Quantity::new(
            parse_int_or_zero(capacity.memory_limit.as_deref()),
            MEMORY_UNITS,
        )),
        ..Default::default()
    };

    // shares and the memory reservation ride on the CPU reservation
    if let Some(cpu_reservation) = filled(&capacity.cpu_reservation) {
        cpu.reservation = Some(Quantity::new(
            parse_int_or_zero(Some(cpu_reservation)),
            CPU_UNITS,
        ));
        cpu.shares = Some(Shares {
            level: capacity.cpu_shares.clone(),
        });
        memory.reservation = Some(Quantity::new(
            parse_int_or_zero(capacity.memory_reservation.as_deref()),
            MEMORY_UNITS,
        ));
        memory.shares = Some(Shares {
            level: capacity.memory_shares.clone(),
        });
    }

    Compute {
        cpu: Some(cpu),
        memory: Some(memory),
        resource: filled(&capacity.compute_resource)
            .map(|name| ObjectRef::named(Some(name.to_string()))),
    }
}

fn endpoint(
    operations: Option<&OperationsUi>,
    capacity: Option<&ComputeCapacityUi>,
) -> Option<Endpoint> {
    let endpoint_cpu = capacity.and_then(|c| filled(&c.endpoint_cpu));
    if operations.is_none() && endpoint_cpu.is_none() {
        return None;
    }

    let operations_credentials = operations.map(|ops| OperationsCredentials {
        user: ops.ops_user.clone(),
        password: ops.ops_password.clone(),
        grant_permissions: ops.ops_grant_perms.then_some(true),
    });

    Some(Endpoint {
        operations_credentials,
        cpu: endpoint_cpu.map(|sockets| EndpointCpu {
            sockets: Some(parse_int_or_zero(Some(sockets))),
        }),
        memory: capacity
            .and_then(|c| filled(&c.endpoint_memory))
            .map(|mem| Quantity::new(parse_int_or_zero(Some(mem)), MEMORY_UNITS)),
    })
}

fn storage(capacity: &StorageCapacityUi) -> Storage {
    let image_store = format!(
        "{}{}",
        capacity.image_store.as_deref().unwrap_or_default(),
        capacity.file_folder.as_deref().unwrap_or_default()
    );

    let volume_stores = (!capacity.volume_store.is_empty()).then(|| {
        capacity
            .volume_store
            .iter()
            .map(|vol| VolumeStore {
                datastore: format!(
                    "{}{}",
                    vol.vol_datastore.as_deref().unwrap_or_default(),
                    vol.vol_file_folder.as_deref().unwrap_or_default()
                ),
                label: vol.docker_vol_name.clone(),
            })
            .collect()
    });

    Storage {
        image_stores: vec![image_store],
        base_image_size: Some(Quantity::new(
            parse_int_or_zero(capacity.base_image_size.as_deref()),
            capacity.base_image_size_unit.clone().unwrap_or_default(),
        )),
        volume_stores,
    }
}

/// Static address and gateway of a client or management attachment.
fn routed_endpoint(
    port_group: Option<String>,
    ip: &Option<String>,
    gateway: &Option<String>,
    routing: &Option<String>,
) -> NetworkEndpoint {
    let mut endpoint = NetworkEndpoint {
        port_group: Some(ObjectRef::named(port_group)),
        ..Default::default()
    };

    if let Some(ip) = filled(ip) {
        endpoint.static_ip = Some(ip.to_string());
        endpoint.gateway = Some(Gateway {
            address: gateway.clone(),
            routing_destinations: filled(routing)
                .map(|r| r.split(',').map(str::to_string).collect()),
        });
    }
    endpoint
}

fn network(networks: &NetworksUi) -> Network {
    let mut public = NetworkEndpoint {
        port_group: Some(ObjectRef::named(networks.public_network.clone())),
        ..Default::default()
    };
    if let Some(ip) = filled(&networks.public_network_ip) {
        public.static_ip = Some(ip.to_string());
        // the public gateway never carries routing destinations
        public.gateway = Some(Gateway {
            address: networks.public_network_gateway.clone(),
            routing_destinations: None,
        });
    }
    public.nameservers = non_empty(&networks.dns_server);

    // the client port group is taken from the public network selection
    let client = filled(&networks.client_network).map(|_| {
        routed_endpoint(
            networks.public_network.clone(),
            &networks.client_network_ip,
            &networks.client_network_gateway,
            &networks.client_network_routing,
        )
    });

    let management = filled(&networks.management_network).map(|name| {
        routed_endpoint(
            Some(name.to_string()),
            &networks.management_network_ip,
            &networks.management_network_gateway,
            &networks.management_network_routing,
        )
    });

    let container = (!networks.container_networks.is_empty()).then(|| {
        networks
            .container_networks
            .iter()
            .map(container_network)
            .collect()
    });

    Network {
        bridge: Some(BridgeNetwork {
            ip_range: networks.bridge_network_range.clone(),
            port_group: Some(ObjectRef::named(networks.bridge_network.clone())),
        }),
        public: Some(public),
        client,
        management,
        container,
    }
}

fn container_network(row: &ContainerNetworkUi) -> ContainerNetwork {
    let ip_range = filled(&row.container_network_ip_range);

    ContainerNetwork {
        port_group: Some(ObjectRef::named(row.container_network.clone())),
        nameservers: filled(&row.container_network_dns).map(|dns| vec![dns.to_string()]),
        alias: filled(&row.container_network_label).map(str::to_string),
        firewall: row.container_network_firewall,
        ip_ranges: ip_range.map(|range| vec![range.to_string()]),
        gateway: ip_range.map(|_| Gateway {
            address: row.container_network_gateway.clone(),
            routing_destinations: None,
        }),
    }
}

fn auth(security: &SecurityUi, general: Option<&GeneralUi>) -> Auth {
    let client = if security.no_tlsverify {
        ClientAuth {
            no_tls_verify: Some(true),
            certificate_authorities: None,
        }
    } else {
        ClientAuth {
            no_tls_verify: None,
            certificate_authorities: Some(pems(&security.tls_ca)),
        }
    };

    let server = if let Some(cname) = filled(&security.tls_cname) {
        ServerAuth {
            generate: Some(GenerateCertificate {
                size: Quantity::new(
                    parse_int_or_zero(security.certificate_key_size.as_deref()),
                    KEY_SIZE_UNITS,
                ),
                organization: filled(&security.organization).map(|org| vec![Some(org.to_string())]),
                cname: Some(cname.to_string()),
            }),
            ..Default::default()
        }
    } else if let Some(cert) = &security.tls_server_cert {
        ServerAuth {
            generate: None,
            certificate: Some(Pem {
                pem: cert.content.clone(),
            }),
            private_key: security.tls_server_key.as_ref().map(|key| Pem {
                pem: key.content.clone(),
            }),
        }
    } else {
        let vch_name = general.and_then(|g| filled(&g.name)).map(str::to_string);
        ServerAuth {
            generate: Some(GenerateCertificate {
                size: Quantity::new(DEFAULT_KEY_SIZE, KEY_SIZE_UNITS),
                organization: Some(vec![vch_name.clone()]),
                cname: vch_name,
            }),
            ..Default::default()
        }
    };

    Auth { client, server }
}

fn registry(registry: Option<&RegistryUi>, networks: Option<&NetworksUi>) -> Option<Registry> {
    let mut section = registry.map(|reg| Registry {
        whitelist: non_empty(&reg.whitelist_registry),
        insecure: non_empty(&reg.insecure_registry),
        certificate_authorities: (!reg.registry_ca.is_empty()).then(|| pems(&reg.registry_ca)),
        image_fetch_proxy: None,
    });

    if let Some(networks) = networks {
        let http = filled(&networks.http_proxy).map(str::to_string);
        let https = filled(&networks.https_proxy).map(str::to_string);
        if http.is_some() || https.is_some() {
            section.get_or_insert_with(Registry::default).image_fetch_proxy =
                Some(ImageFetchProxy { http, https });
        }
    }

    section
}

fn container(general: &GeneralUi) -> Option<Container> {
    filled(&general.container_name_convention).map(|convention| Container {
        name_convention: Some(convention.to_string()),
    })
}
