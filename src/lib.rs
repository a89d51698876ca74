//! vchconf - Virtual Container Host configuration library
//!
//! Form validation patterns for the VCH creation wizard and the mapping
//! between the wizard's model and the provisioning API request body.

pub mod cli;
pub mod config;
pub mod model;
pub mod transform;
pub mod utils;
pub mod validators;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::Settings;
pub use model::{VchApi, VchUi};
pub use transform::{api_to_ui, get_ds_name_and_folder, ui_to_api, TransformError};
pub use validators::{clear_field_error, numeric_validators, ErrorBag, PatternName};

/// Library error type
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;
    use model::ui::{ComputeCapacityUi, GeneralUi, NetworksUi, StorageCapacityUi, VolumeStoreUi};

    /// A form that touches the sections the reverse mapping needs, so the
    /// produced body can be read back.
    fn full_form() -> VchUi {
        VchUi {
            general: Some(GeneralUi {
                name: Some("vch1".into()),
                container_name_convention: Some("vch1-{name}".into()),
                debug: Some("1".into()),
                syslog_address: None,
            }),
            compute_capacity: Some(ComputeCapacityUi {
                cpu_limit: Some("2000".into()),
                memory_limit: Some("4096".into()),
                cpu_reservation: Some("500".into()),
                cpu_shares: Some("normal".into()),
                memory_reservation: Some("1024".into()),
                memory_shares: Some("normal".into()),
                endpoint_cpu: Some("2".into()),
                endpoint_memory: Some("2048".into()),
                compute_resource: Some("cluster1".into()),
            }),
            storage_capacity: Some(StorageCapacityUi {
                image_store: Some("ds://datastore1".into()),
                file_folder: Some("/images".into()),
                base_image_size: Some("8".into()),
                base_image_size_unit: Some("GB".into()),
                volume_store: vec![VolumeStoreUi {
                    vol_datastore: Some("ds://datastore2".into()),
                    vol_file_folder: Some("/volumes".into()),
                    docker_vol_name: Some("default".into()),
                }],
            }),
            networks: Some(NetworksUi {
                bridge_network: Some("bridge-pg".into()),
                public_network: Some("public-pg".into()),
                client_network: Some("client-pg".into()),
                management_network: Some("mgmt-pg".into()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_form_body_reads_back() {
        let body = ui_to_api(&full_form());

        // the backend answers with ids and an explicit empty container list
        let mut stored = body.clone();
        let network = stored.network.as_mut().unwrap();
        network.container = Some(vec![]);

        let ui = api_to_ui(&stored).unwrap();
        let general = ui.general.unwrap();
        assert_eq!(general.name.as_deref(), Some("vch1"));
        assert_eq!(general.debug.as_deref(), Some("1"));

        let compute = ui.compute_capacity.unwrap();
        assert_eq!(compute.cpu_limit.as_deref(), Some("2000"));
        assert_eq!(compute.cpu_reservation.as_deref(), Some("500"));
        assert_eq!(compute.endpoint_cpu.as_deref(), Some("2"));
        // the API refers to the compute resource by id, which the form never sends
        assert_eq!(compute.compute_resource, None);

        // folders come back without the leading slash the form concatenated
        let storage = ui.storage_capacity.unwrap();
        assert_eq!(storage.image_store.as_deref(), Some("datastore1"));
        assert_eq!(storage.file_folder.as_deref(), Some("images"));
        assert_eq!(storage.volume_store[0].vol_file_folder.as_deref(), Some("volumes"));
    }

    #[test]
    fn test_form_body_without_network_cannot_be_read_back() {
        let mut form = full_form();
        form.networks = None;
        let body = ui_to_api(&form);
        assert!(matches!(
            api_to_ui(&body),
            Err(TransformError::MissingField { path }) if path == "network"
        ));
    }
}
