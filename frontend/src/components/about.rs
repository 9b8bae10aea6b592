use yew::prelude::*;

use crate::i18n::Language;
use crate::services::models::SiteMetrics;
use crate::services::site_data::SiteData;
use crate::state::figures::{stats, updated_on};
use crate::state::remote::{MountGuard, Remote};

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub language: Language,
    pub dark_mode: bool,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let language = props.language;
    let metrics = use_state(Remote::<SiteMetrics>::default);

    {
        let metrics = metrics.clone();
        use_effect_with_deps(
            move |_| {
                let guard = MountGuard::new();
                let mounted = guard.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = SiteData::live().fetch_site_metrics().await;
                    if let Err(e) = &result {
                        log::error!("Unable to fetch site metrics: {}", e);
                    }
                    if mounted.is_mounted() {
                        metrics.set(Remote::from_optional(result));
                    }
                });
                move || guard.release()
            },
            (),
        );
    }

    let loading = metrics.is_loading();
    let stat_cards = stats(metrics.ready(), language)
        .into_iter()
        .map(|stat| {
            html! {
                <div class="stat-card">
                    <div class="stat-number">
                        { if loading { "...".to_string() } else { stat.number } }
                    </div>
                    <div class="stat-label">{stat.label}</div>
                </div>
            }
        })
        .collect::<Html>();

    let updated = metrics
        .ready()
        .and_then(|m| m.updated_at.as_deref())
        .and_then(updated_on)
        .map(|date| {
            html! {
                <p class="stats-updated">
                    {format!("{} {}", language.pick("Figures updated", "Takwimu zimesasishwa"), date)}
                </p>
            }
        });

    html! {
        <section id="about" class={classes!("about-section", props.dark_mode.then(|| "section-dark"))}>
            <div class="section-inner">
                <h2>{language.pick("About Ribera", "Kuhusu Ribera")}</h2>
                <p class="section-lead">
                    {language.pick(
                        "Ribera is a platform that empowers African event organizers and attendees to manage, discover, and enjoy events with digital ease.",
                        "Ribera ni jukwaa linalowawezesha waandaaji wa matukio na washiriki barani Afrika kupanga na kufurahia matukio kwa urahisi wa kidigitali.",
                    )}
                </p>

                <div class="offer-card">
                    <h3>{language.pick("Limited Time Offer!", "Ofa ya Muda Mfupi!")}</h3>
                    <p>
                        {language.pick(
                            "Join now and enjoy 3 months of 0% commission for all your events!",
                            "Jiunge sasa upate miezi 3 bila kamisheni kwa matukio yako yote!",
                        )}
                    </p>
                    <a href="#pricing" class="offer-cta">{language.pick("Join Now", "Jiunge Sasa")}</a>
                </div>

                <div class="stats-grid">{stat_cards}</div>
                {updated}
                if metrics.failed() {
                    <p class="inline-notice">
                        {language.pick(
                            "Live metrics are temporarily unavailable. Showing estimates.",
                            "Takwimu za moja kwa moja hazipatikani kwa sasa. Zinaonyesha makadirio.",
                        )}
                    </p>
                }
            </div>
        </section>
    }
}
