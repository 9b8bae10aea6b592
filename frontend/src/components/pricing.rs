use yew::prelude::*;

use crate::i18n::Language;

type Text = (&'static str, &'static str);

struct Plan {
    name: Text,
    period: Text,
    price: Text,
    commission: Text,
    description: Text,
    features: [Text; 5],
    popular: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: ("Launch Offer", "Ofa ya Uzinduzi"),
        period: ("First 3 Months", "Miezi 3 ya Kwanza"),
        price: ("FREE", "BURE"),
        commission: ("0% Commission", "Kamisheni 0%"),
        description: ("Perfect for new organizers to get started", "Bora kwa waandaaji wapya kuanza"),
        features: [
            ("Unlimited events", "Matukio yasiyo na kikomo"),
            ("Digital ticketing", "Tiketi za kidigitali"),
            ("BillPay integration", "Muunganisho wa BillPay"),
            ("Basic analytics", "Uchambuzi wa msingi"),
            ("Email support", "Msaada wa barua pepe"),
        ],
        popular: true,
    },
    Plan {
        name: ("Standard Model", "Mfumo wa Kawaida"),
        period: ("After 3 months", "Baada ya miezi 3"),
        price: ("4.5%", "4.5%"),
        commission: ("per ticket + TZS 500", "kwa tiketi + TZS 500"),
        description: (
            "Our standard pricing for regular organizers",
            "Bei yetu ya kawaida kwa waandaaji wa kawaida",
        ),
        features: [
            ("All Launch Offer features", "Vipengele vyote vya Ofa ya Uzinduzi"),
            ("Advanced analytics", "Uchambuzi wa hali ya juu"),
            ("Priority support", "Msaada wa kipaumbele"),
            ("Custom branding", "Chapa maalum"),
            ("Marketing tools", "Zana za uuzaji"),
        ],
        popular: false,
    },
    Plan {
        name: ("Partner Model", "Mfumo wa Ushirikiano"),
        period: ("Custom Terms", "Masharti Maalum"),
        price: ("Custom", "Maalum"),
        commission: ("Tailored rates", "Viwango vilivyoratibiwa"),
        description: (
            "For large venues, festivals, and institutions",
            "Kwa maeneo makubwa, tamasha, na taasisi",
        ),
        features: [
            ("All Standard features", "Vipengele vyote vya Kawaida"),
            ("Dedicated account manager", "Meneja wa akaunti aliyejitolea"),
            ("Custom integrations", "Muunganisho maalum"),
            ("White-label options", "Chaguo za lebo nyeupe"),
            ("Volume discounts", "Punguzo la wingi"),
        ],
        popular: false,
    },
];

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub language: Language,
    pub dark_mode: bool,
    /// Emits the chosen plan's name in the current language.
    pub on_select_plan: Callback<String>,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let language = props.language;

    let cards = PLANS
        .iter()
        .enumerate()
        .map(|(index, plan)| {
            let name = language.pick(plan.name.0, plan.name.1);
            let select = {
                let on_select_plan = props.on_select_plan.clone();
                Callback::from(move |_: MouseEvent| on_select_plan.emit(name.to_string()))
            };
            let cta = if index == PLANS.len() - 1 {
                language.pick("Become a Partner", "Kuwa Mshirika")
            } else {
                language.pick("Start Organizing Free", "Anza Kupanga Bure")
            };
            html! {
                <div class={classes!("plan-card", plan.popular.then(|| "plan-popular"))}>
                    if plan.popular {
                        <div class="plan-badge">{language.pick("Most Popular", "Maarufu Zaidi")}</div>
                    }
                    <h3>{name}</h3>
                    <div class="plan-period">{language.pick(plan.period.0, plan.period.1)}</div>
                    <div class="plan-price">{language.pick(plan.price.0, plan.price.1)}</div>
                    <div class="plan-commission">{language.pick(plan.commission.0, plan.commission.1)}</div>
                    <p class="plan-description">{language.pick(plan.description.0, plan.description.1)}</p>
                    <ul class="plan-features">
                        { for plan.features.iter().map(|(en, sw)| html! {
                            <li>{language.pick(*en, *sw)}</li>
                        }) }
                    </ul>
                    <button class="plan-cta" onclick={select}>{cta}</button>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id="pricing" class={classes!("pricing-section", props.dark_mode.then(|| "section-dark"))}>
            <div class="section-inner">
                <h2>{language.pick("Financial Plan & Business Model", "Mpango wa Kifedha na Mfumo wa Biashara")}</h2>
                <p class="section-lead">
                    {language.pick(
                        "Ribera operates on a transparent commission model, ensuring affordability for organizers and trust for attendees.",
                        "Ribera inafanya kazi kwa mfumo wa uwazi wa kamisheni, kuhakikisha gharama nafuu kwa waandaaji na uaminifu kwa washiriki.",
                    )}
                </p>
                <div class="plans-grid">{cards}</div>
            </div>
        </section>
    }
}
