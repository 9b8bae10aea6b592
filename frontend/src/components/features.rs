use yew::prelude::*;

use crate::i18n::Language;

struct Feature {
    icon: &'static str,
    title: (&'static str, &'static str),
    description: (&'static str, &'static str),
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "🎟",
        title: ("Smart Digital Ticketing", "Tiketi za Kidigitali"),
        description: (
            "QR code tickets with real-time validation and fraud protection",
            "Tiketi za msimbo wa QR zenye uthibitisho wa wakati halisi na ulinzi dhidi ya udanganyifu",
        ),
    },
    Feature {
        icon: "💳",
        title: ("BillPay Payments", "Malipo Kupitia BillPay"),
        description: (
            "Secure payment processing with multiple payment options",
            "Uchakataji salama wa malipo na chaguo nyingi za malipo",
        ),
    },
    Feature {
        icon: "📊",
        title: ("Event Management Dashboard", "Dashibodi ya Usimamizi wa Matukio"),
        description: (
            "Complete control over your events with analytics and insights",
            "Udhibiti kamili wa matukio yako pamoja na uchambuzi na maarifa",
        ),
    },
    Feature {
        icon: "🌍",
        title: ("Bilingual Interface", "Kiolesura cha Lugha Mbili"),
        description: (
            "Full support for English and Swahili languages",
            "Msaada kamili wa lugha za Kiingereza na Kiswahili",
        ),
    },
    Feature {
        icon: "🌓",
        title: ("Dark & Light Themes", "Mandhari Meusi na Meupe"),
        description: (
            "Choose your preferred interface theme for better experience",
            "Chagua mandhari unayopendelea kwa uzoefu bora zaidi",
        ),
    },
    Feature {
        icon: "🛡",
        title: ("Enterprise-Grade Security", "Usalama wa Kiwango cha Biashara"),
        description: (
            "Encrypted infrastructure and compliance safeguards for every transaction",
            "Miundombinu iliyosimbwa na uzingatiaji wa viwango kwa kila muamala",
        ),
    },
];

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    pub language: Language,
    pub dark_mode: bool,
}

#[function_component(Features)]
pub fn features(props: &FeaturesProps) -> Html {
    let language = props.language;
    html! {
        <section id="features" class={classes!("features-section", props.dark_mode.then(|| "section-dark"))}>
            <div class="section-inner">
                <h2>{language.pick("Core Features", "Vipengele Vikuu")}</h2>
                <p class="section-lead">
                    {language.pick(
                        "Everything you need to create, manage, and enjoy events",
                        "Kila kitu unachohitaji kutengeneza, kusimamia, na kufurahia matukio",
                    )}
                </p>
                <div class="features-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card">
                            <div class="feature-icon">{feature.icon}</div>
                            <h3>{language.pick(feature.title.0, feature.title.1)}</h3>
                            <p>{language.pick(feature.description.0, feature.description.1)}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
