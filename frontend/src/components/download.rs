use yew::prelude::*;

use crate::i18n::Language;
use crate::services::site_data::SiteData;
use crate::state::downloads::DownloadTargets;
use crate::state::remote::{MountGuard, Remote};

#[derive(Properties, PartialEq)]
pub struct DownloadProps {
    pub language: Language,
    pub dark_mode: bool,
}

fn store_button(target: Option<&str>, label: &str, coming_soon: &str, class: &'static str) -> Html {
    match target {
        Some(href) => html! {
            <a href={href.to_string()} class={classes!("store-button", class)} target="_blank" rel="noopener noreferrer">
                {label}
            </a>
        },
        None => html! {
            <span class={classes!("store-button", class, "disabled")} aria-disabled="true" title={coming_soon.to_string()}>
                {label}
                <small>{coming_soon}</small>
            </span>
        },
    }
}

#[function_component(Download)]
pub fn download(props: &DownloadProps) -> Html {
    let language = props.language;
    let targets = use_state(Remote::<DownloadTargets>::default);

    {
        let targets = targets.clone();
        use_effect_with_deps(
            move |_| {
                let guard = MountGuard::new();
                let mounted = guard.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let site = SiteData::live();
                    let result = site.fetch_download_links().await;
                    if let Err(e) = &result {
                        log::error!("Failed to load download links: {}", e);
                    }
                    let resolved = result.map(|links| {
                        let resolved = DownloadTargets::resolve(links.as_ref(), site.config());
                        resolved.any().then_some(resolved)
                    });
                    if mounted.is_mounted() {
                        targets.set(Remote::from_optional(resolved));
                    }
                });
                move || guard.release()
            },
            (),
        );
    }

    // Loading and fallback both render every button disabled.
    let resolved = targets.ready().cloned().unwrap_or_default();
    let coming_soon = language.pick("Coming Soon", "Inakuja Hivi Karibuni");

    html! {
        <section id="download" class={classes!("download-section", props.dark_mode.then(|| "section-dark"))}>
            <div class="section-inner download-inner">
                <div class="download-copy">
                    <h2>{language.pick("Get Ribera App Today", "Pakua Programu ya Ribera Leo")}</h2>
                    <p class="section-lead">
                        {language.pick(
                            "Download now and start creating amazing events",
                            "Pakua sasa na uanze kutengeneza matukio mazuri",
                        )}
                    </p>
                    <div class="store-buttons">
                        {store_button(
                            resolved.google_play.as_deref(),
                            language.pick("Get it on Google Play", "Pata kwenye Google Play"),
                            coming_soon,
                            "google-play",
                        )}
                        {store_button(
                            resolved.app_store.as_deref(),
                            language.pick("Download on the App Store", "Pakua kwenye App Store"),
                            coming_soon,
                            "app-store",
                        )}
                    </div>
                    <div class="apk-block">
                        {store_button(
                            resolved.apk.as_deref(),
                            language.pick("Download APK (Quick Install)", "Pakua APK (Haraka)"),
                            coming_soon,
                            "apk",
                        )}
                        <p class="apk-note">
                            {language.pick(
                                "For Android users who prefer direct installation.",
                                "Kwa watumiaji wa Android wanaopendelea kusakinisha moja kwa moja.",
                            )}
                        </p>
                    </div>
                </div>
                <div class="download-visual">
                    <div class="phone-mock"><span class="logo-mark">{"R"}</span></div>
                </div>
            </div>
        </section>
    }
}
