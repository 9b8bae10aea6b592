use yew::prelude::*;

use crate::i18n::Language;

const STEPS: [((&str, &str), (&str, &str)); 5] = [
    (
        ("Create Event", "Tengeneza Tukio"),
        (
            "Set up your event details, date, and venue information",
            "Weka maelezo ya tukio lako, tarehe, na maelezo ya mahali",
        ),
    ),
    (
        ("Add Tickets & Prices", "Ongeza Tiketi na Bei"),
        (
            "Configure ticket types, pricing, and availability",
            "Sanidi aina za tiketi, bei, na upatikanaji",
        ),
    ),
    (
        ("Promote & Share", "Tangaza na Sambaza"),
        (
            "Share your event and reach your target audience",
            "Sambaza tukio lako na kufikia hadhira unayolenga",
        ),
    ),
    (
        ("Receive Payments via BillPay", "Pokea Malipo Kupitia BillPay"),
        (
            "Get paid securely through our integrated payment system",
            "Pata malipo kwa usalama kupitia mfumo wetu wa malipo",
        ),
    ),
    (
        ("Track Insights", "Fuatilia Takwimu"),
        (
            "Monitor sales, attendance, and event performance",
            "Fuatilia mauzo, mahudhurio, na utendaji wa tukio",
        ),
    ),
];

#[derive(Properties, PartialEq)]
pub struct HowItWorksProps {
    pub language: Language,
    pub dark_mode: bool,
}

#[function_component(HowItWorks)]
pub fn how_it_works(props: &HowItWorksProps) -> Html {
    let language = props.language;
    html! {
        <section id="how-it-works" class={classes!("steps-section", props.dark_mode.then(|| "section-dark"))}>
            <div class="section-inner">
                <h2>{language.pick("How Ribera Works", "Jinsi Ribera Inavyofanya Kazi")}</h2>
                <p class="section-lead">
                    {language.pick(
                        "Simple steps to create and manage your events",
                        "Hatua rahisi za kutengeneza na kusimamia matukio yako",
                    )}
                </p>
                <ol class="steps">
                    { for STEPS.iter().enumerate().map(|(i, ((title_en, title_sw), (text_en, text_sw)))| html! {
                        <li class="step">
                            <span class="step-number">{i + 1}</span>
                            <h3>{language.pick(*title_en, *title_sw)}</h3>
                            <p>{language.pick(*text_en, *text_sw)}</p>
                        </li>
                    }) }
                </ol>
            </div>
        </section>
    }
}
