use crate::appwrite::storage::file_download_url;
use crate::config::AppwriteConfig;
use crate::services::models::DownloadLinks;

/// Where each download button points. `None` renders the button disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadTargets {
    pub google_play: Option<String>,
    pub app_store: Option<String>,
    pub apk: Option<String>,
}

fn usable(url: &Option<String>) -> Option<String> {
    url.as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(String::from)
}

impl DownloadTargets {
    pub fn resolve(links: Option<&DownloadLinks>, config: &AppwriteConfig) -> Self {
        let Some(links) = links else {
            return Self::default();
        };
        let apk = usable(&links.direct_apk_url).or_else(|| {
            links
                .direct_apk_file_id
                .as_deref()
                .and_then(|file_id| file_download_url(config, file_id))
        });
        Self {
            google_play: usable(&links.google_play_url),
            app_store: usable(&links.app_store_url),
            apk,
        }
    }

    pub fn any(&self) -> bool {
        self.google_play.is_some() || self.app_store.is_some() || self.apk.is_some()
    }
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
    fn no_record_disables_every_button() {
        let targets = DownloadTargets::resolve(None, &config());
        assert_eq!(targets, DownloadTargets::default());
        assert!(!targets.any());
    }

    #[test]
    fn stored_apk_url_wins_over_file_id() {
        let links = DownloadLinks {
            direct_apk_url: Some("https://cdn.example.com/ribera.apk".into()),
            direct_apk_file_id: Some("build-42".into()),
            ..DownloadLinks::default()
        };
        let targets = DownloadTargets::resolve(Some(&links), &config());
        assert_eq!(targets.apk.as_deref(), Some("https://cdn.example.com/ribera.apk"));
    }

    #[test]
    fn apk_url_is_derived_from_file_id() {
        let links = DownloadLinks {
            direct_apk_file_id: Some("build-42".into()),
            ..DownloadLinks::default()
        };
        let targets = DownloadTargets::resolve(Some(&links), &config());
        assert_eq!(
            targets.apk.as_deref(),
            Some("https://cloud.appwrite.io/v1/storage/buckets/apk/files/build-42/download?project=ribera")
        );
    }

    #[test]
    fn file_id_without_bucket_leaves_apk_disabled() {
        let links = DownloadLinks {
            google_play_url: Some("https://play.google.com/store/apps/details?id=me.ribera".into()),
            direct_apk_file_id: Some("build-42".into()),
            ..DownloadLinks::default()
        };
        let mut config = config();
        config.bucket_id = None;
        let targets = DownloadTargets::resolve(Some(&links), &config);
        assert_eq!(targets.apk, None);
        assert!(targets.google_play.is_some());
        assert_eq!(targets.app_store, None);
    }

    #[test]
    fn blank_store_urls_are_ignored() {
        let links = DownloadLinks {
            app_store_url: Some("".into()),
            ..DownloadLinks::default()
        };
        assert_eq!(DownloadTargets::resolve(Some(&links), &config()).app_store, None);
    }
}
