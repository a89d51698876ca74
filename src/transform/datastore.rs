//! Datastore path handling (`ds://datastore-name/folder/path`)

use super::TransformError;

/// A datastore path split into the datastore name and the folder below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatastoreLocation {
    pub name: String,
    pub folder_path: String,
}

/// Split a percent-encoded datastore URI into name and folder path.
///
/// The folder path has no leading slash; it is empty when the URI names the
/// datastore root.
pub fn get_ds_name_and_folder(full_path: &str) -> Result<DatastoreLocation, TransformError> {
    let invalid = || TransformError::InvalidDatastorePath {
        path: full_path.to_string(),
    };

    let decoded = urlencoding::decode(full_path).map_err(|_| invalid())?;
    let (_, rest) = decoded.split_once("://").ok_or_else(invalid)?;
    let rest = rest.split("://").next().unwrap_or_default();

    let mut segments = rest.split('/');
    let name = segments.next().unwrap_or_default().to_string();
    let folder_path = segments.collect::<Vec<_>>().join("/");

    Ok(DatastoreLocation { name, folder_path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_folder() {
        let loc = get_ds_name_and_folder("ds://datastore1/folder/sub").unwrap();
        assert_eq!(loc.name, "datastore1");
        assert_eq!(loc.folder_path, "folder/sub");
    }

    #[test]
    fn test_datastore_root() {
        let loc = get_ds_name_and_folder("ds://datastore1").unwrap();
        assert_eq!(loc.name, "datastore1");
        assert_eq!(loc.folder_path, "");

        let loc = get_ds_name_and_folder("ds://datastore1/").unwrap();
        assert_eq!(loc.folder_path, "");
    }

    #[test]
    fn test_percent_encoded_names() {
        let loc = get_ds_name_and_folder("ds://vsan%20Datastore/volumes/my%20vols").unwrap();
        assert_eq!(loc.name, "vsan Datastore");
        assert_eq!(loc.folder_path, "volumes/my vols");
    }

    #[test]
    fn test_missing_scheme() {
        let err = get_ds_name_and_folder("datastore1/folder").unwrap_err();
        assert!(matches!(err, TransformError::InvalidDatastorePath { .. }));
    }
}
