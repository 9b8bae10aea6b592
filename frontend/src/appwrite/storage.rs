use crate::config::{AppwriteConfig, EnvKey};

/// Public download link for a file in the APK bucket.
///
/// Returns `None` when endpoint, bucket or project is unset, or the file id is blank.
pub fn file_download_url(config: &AppwriteConfig, file_id: &str) -> Option<String> {
    let endpoint = config.get(EnvKey::Endpoint)?;
    let bucket = config.get(EnvKey::BucketId)?;
    let project = config.get(EnvKey::ProjectId)?;
    let file_id = file_id.trim();
    if file_id.is_empty() {
        return None;
    }

    let trimmed = endpoint.trim_end_matches('/');
    let base = trimmed.strip_suffix("/v1").unwrap_or(trimmed);
    Some(format!(
        "{}/v1/storage/buckets/{}/files/{}/download?project={}",
        base,
        urlencoding::encode(bucket),
        urlencoding::encode(file_id),
        urlencoding::encode(project)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppwriteConfig {
        AppwriteConfig {
            endpoint: Some("https://cloud.appwrite.io/v1".into()),
            project_id: Some("ribera".into()),
            bucket_id: Some("apk".into()),
            ..AppwriteConfig::default()
        }
    }

    #[test]
    fn builds_url_from_endpoint_without_version() {
        assert_eq!(
            file_download_url(&config(), "build-42").as_deref(),
            Some("https://cloud.appwrite.io/v1/storage/buckets/apk/files/build-42/download?project=ribera")
        );
    }

    #[test]
    fn trailing_slash_after_version_is_stripped() {
        let mut config = config();
        config.endpoint = Some("https://store.example.com/v1/".into());
        assert_eq!(
            file_download_url(&config, "f").as_deref(),
            Some("https://store.example.com/v1/storage/buckets/apk/files/f/download?project=ribera")
        );
    }

    #[test]
    fn endpoint_without_version_still_gets_one() {
        let mut config = config();
        config.endpoint = Some("https://store.example.com".into());
        assert_eq!(
            file_download_url(&config, "f").as_deref(),
            Some("https://store.example.com/v1/storage/buckets/apk/files/f/download?project=ribera")
        );
    }

    #[test]
    fn missing_bucket_yields_no_url() {
        let mut config = config();
        config.bucket_id = None;
        assert_eq!(file_download_url(&config, "build-42"), None);
    }

    #[test]
    fn missing_endpoint_or_project_yields_no_url() {
        let mut no_endpoint = config();
        no_endpoint.endpoint = None;
        assert_eq!(file_download_url(&no_endpoint, "f"), None);

        let mut no_project = config();
        no_project.project_id = Some(String::new());
        assert_eq!(file_download_url(&no_project, "f"), None);
    }

    #[test]
    fn blank_file_id_yields_no_url() {
        assert_eq!(file_download_url(&config(), "  "), None);
    }
}
