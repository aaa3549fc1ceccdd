//! Dashboard Page
//!
//! Four tabs over the signed-in user's records. The active tab lives in the
//! `?tab=` query so footer links can open a specific one.

use agri_core::dashboard::{
    OverviewStats, SENSOR_TABLE_ROWS, SensorAverages, export_sensor_csv, npk_distribution,
    prediction_series,
};
use agri_core::i18n::{Options, option_label};
use agri_core::{
    Prediction, PredictionGenerator, PredictionRequest, SoilAnalysis, SoilAnalyzer, Subscription,
    Translations,
};
use chrono::Utc;
use leptos::prelude::*;
use leptos_router::components::{A, Redirect};
use leptos_router::hooks::use_query_map;

use crate::components::{BarChart, Chatbot, PieChart, ProgressBar};
use crate::dom;
use crate::state::{AppState, simulate_latency, use_app_state};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Overview,
    Predictions,
    Data,
    Soil,
}

impl Tab {
    const ALL: [Self; 4] = [Self::Overview, Self::Predictions, Self::Data, Self::Soil];

    /// Unknown or missing values open the overview
    fn from_query(value: Option<&str>) -> Self {
        Self::ALL.into_iter().find(|tab| Some(tab.slug()) == value).unwrap_or(Self::Overview)
    }

    const fn slug(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Predictions => "predictions",
            Self::Data => "data",
            Self::Soil => "soil",
        }
    }

    const fn icon(self) -> &'static str {
        match self {
            Self::Overview => "▦",
            Self::Predictions => "🧠",
            Self::Data => "🗄",
            Self::Soil => "🧪",
        }
    }

    const fn label(self, t: &'static Translations) -> &'static str {
        match self {
            Self::Overview => t.dashboard.overview,
            Self::Predictions => t.dashboard.ai_predictions,
            Self::Data => t.dashboard.data_center,
            Self::Soil => t.dashboard.soil_analysis,
        }
    }
}

/// Unwrap a collection read, logging and showing nothing on failure
fn loaded<T>(result: agri_core::Result<Vec<T>>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        dom::log_error(&format!("Could not load {what}"), &e);
        Vec::new()
    })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_app_state();

    view! {
        <Show
            when=move || state.user.with(Option::is_some)
            fallback=|| view! { <Redirect path="/auth" /> }
        >
            <Dashboard />
        </Show>
        <Chatbot />
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let state = use_app_state();
    let query = use_query_map();
    let tab = Memo::new(move |_| Tab::from_query(query.with(|q| q.get("tab")).as_deref()));
    let user_id = state
        .user
        .with_untracked(|u| u.as_ref().map(|u| u.id.clone()))
        .unwrap_or_default();

    let greeting = move || {
        let name = state.user.with(|u| u.as_ref().map(|u| u.name.clone()).unwrap_or_default());
        format!("{}, {name}!", state.t().dashboard.welcome)
    };

    let banner = move || {
        let tier = state.user.with(|u| u.as_ref().map(|u| u.subscription).unwrap_or_default());
        let d = &state.t().dashboard;
        let name = if tier == Subscription::Free { d.free_tier } else { tier.display_name() };
        let quota = tier
            .prediction_quota()
            .map_or_else(|| "Unlimited predictions".to_string(), |n| format!("{n} {}", d.predictions_per_month));
        let chat_quota = tier
            .chat_queries_per_day()
            .map_or_else(|| "unlimited chat".to_string(), |n| format!("{n} {}", d.chat_queries_per_day));
        view! {
            <div class="subscription-banner">
                <span class="crown">"👑"</span>
                <span class="tier">{name}</span>
                <span class="muted">{format!("- {quota}, {chat_quota}")}</span>
                {(tier == Subscription::Free).then(|| view! {
                    <A href="/#pricing" attr:class="btn btn-primary btn-sm">"↑ "{d.upgrade_pro}</A>
                })}
            </div>
        }
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>{greeting}</h1>
                <p class="muted">{move || state.t().dashboard.subtitle}</p>
            </header>

            {banner}

            <nav class="tabs" role="tablist">
                {Tab::ALL
                    .into_iter()
                    .map(|t| view! {
                        <A
                            href=format!("/dashboard?tab={}", t.slug())
                            attr:class={move || if tab.get() == t { "tab active" } else { "tab" }}
                        >
                            <span class="tab-icon">{t.icon()}</span>
                            <span class="tab-label">{move || t.label(state.t())}</span>
                        </A>
                    })
                    .collect_view()}
            </nav>

            <section class="tab-panel">
                {move || {
                    let user_id = user_id.clone();
                    match tab.get() {
                        Tab::Overview => view! { <OverviewTab user_id=user_id /> }.into_any(),
                        Tab::Predictions => view! { <PredictionsTab user_id=user_id /> }.into_any(),
                        Tab::Data => view! { <DataTab /> }.into_any(),
                        Tab::Soil => view! { <SoilTab user_id=user_id /> }.into_any(),
                    }
                }}
            </section>
        </div>
    }
}

#[component]
fn OverviewTab(user_id: String) -> impl IntoView {
    let state = use_app_state();
    let db = AppState::database();
    let farms = loaded(db.farms(Some(&user_id)), "farms");
    let predictions = loaded(db.predictions(Some(&user_id)), "predictions");
    let stats = OverviewStats::for_user(&farms, &predictions);
    let farm_count = stats.farm_count.to_string();
    let farm_area = format!("{:.1} ha", stats.total_hectares);
    let prediction_count = stats.prediction_count.to_string();
    let recent = stats.recent;
    let has_recent = !recent.is_empty();

    view! {
        <div class="stat-cards">
            <div class="card stat-card">
                <span class="stat-icon">"🌿"</span>
                <p class="stat-value">{farm_count}</p>
                <p class="muted">{move || state.t().dashboard.total_farms}</p>
                <p class="stat-detail">{farm_area}</p>
            </div>
            <div class="card stat-card">
                <span class="stat-icon">"🧠"</span>
                <p class="stat-value">{prediction_count}</p>
                <p class="muted">{move || state.t().dashboard.active_predictions}</p>
            </div>
            <div class="card stat-card">
                <span class="stat-icon">"📈"</span>
                <p class="stat-value">{move || state.t().dashboard.just_now}</p>
                <p class="muted">{move || state.t().dashboard.last_sync}</p>
            </div>
        </div>

        <div class="card">
            <h3>{move || state.t().dashboard.recent_activity}</h3>
            <Show
                when=move || has_recent
                fallback=move || view! { <p class="empty">{move || state.t().common.no_data}</p> }
            >
                <ul class="activity">
                    {recent
                        .iter()
                        .map(|p| {
                            let crop = p.crop_type.clone();
                            let amount = format!("{:.1} {}", p.predicted_yield, p.yield_unit);
                            view! {
                                <li class="activity-item">
                                    <span class="activity-icon">"🧠"</span>
                                    <div class="activity-body">
                                        <p>
                                            {move || format!(
                                                "{} {}",
                                                state.t().dashboard.yield_prediction_for,
                                                option_label(state.t().crops, &crop),
                                            )}
                                        </p>
                                        <p class="muted">{amount}</p>
                                    </div>
                                    <span class="badge">{format!("{}%", p.confidence)}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn OptionSelect(
    label: fn(&'static Translations) -> &'static str,
    options: fn(&'static Translations) -> Options,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let state = use_app_state();

    view! {
        <label class="field">
            {move || label(state.t())}
            <select on:change=move |ev| set_value.set(event_target_value(&ev))>
                <option value="" disabled selected=move || value.with(String::is_empty)>
                    {move || state.t().dashboard.select}
                </option>
                {move || {
                    options(state.t())
                        .iter()
                        .map(|&(key, text)| view! {
                            <option value=key selected=move || value.with(|v| v == key)>{text}</option>
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

#[component]
fn PredictionCard(prediction: Prediction) -> impl IntoView {
    let state = use_app_state();
    let amount = format!("{:.1} {}", prediction.predicted_yield, prediction.yield_unit);
    let confidence = prediction.confidence;

    view! {
        <div class="card result-card">
            <p class="muted">{move || state.t().dashboard.predicted_yield}</p>
            <p class="result-value">{amount}</p>
            <span class="badge">
                {move || format!("{}: {confidence}%", state.t().dashboard.confidence)}
            </span>
            <p class="result-heading">{move || format!("{}:", state.t().dashboard.recommendations)}</p>
            <ul>
                {prediction
                    .recommendations
                    .into_iter()
                    .map(|r| view! { <li>"• "{r}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn PredictionsTab(user_id: String) -> impl IntoView {
    let state = use_app_state();
    let (crop, set_crop) = signal(String::new());
    let (soil, set_soil) = signal(String::new());
    let (weather, set_weather) = signal(String::new());
    let (farm_size, set_farm_size) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let result = RwSignal::new(None::<Prediction>);
    let history = RwSignal::new(loaded(
        AppState::database().predictions(Some(&user_id)),
        "predictions",
    ));

    let predict = move |_| {
        if loading.get_untracked() {
            return;
        }
        let request = PredictionRequest {
            crop: crop.get_untracked(),
            soil: soil.get_untracked(),
            weather: weather.get_untracked(),
            farm_size: farm_size.get_untracked(),
        };
        let user_id = user_id.clone();
        set_loading.set(true);

        leptos::task::spawn_local(async move {
            simulate_latency(state.config.prediction_delay_ms).await;
            let prediction = PredictionGenerator::from_entropy().predict(&user_id, &request, Utc::now());
            if let Err(e) = AppState::database().add_prediction(prediction.clone()) {
                dom::log_error("Could not save prediction", &e);
                state.show_error(e.user_message());
            }
            history.update(|h| h.push(prediction.clone()));
            result.set(Some(prediction));
            set_loading.set(false);
        });
    };

    let series = Signal::derive(move || {
        let crops = state.t().crops;
        history
            .with(|h| prediction_series(h))
            .into_iter()
            .map(|point| (option_label(crops, &point.crop).to_string(), point.predicted_yield))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="two-column">
            <div class="card">
                <h3>{move || state.t().dashboard.new_prediction}</h3>
                <OptionSelect
                    label=|t| t.dashboard.crop_type
                    options=|t| t.crops
                    value=crop
                    set_value=set_crop
                />
                <OptionSelect
                    label=|t| t.dashboard.soil_type
                    options=|t| t.soils
                    value=soil
                    set_value=set_soil
                />
                <OptionSelect
                    label=|t| t.dashboard.weather_condition
                    options=|t| t.weather
                    value=weather
                    set_value=set_weather
                />
                <label class="field">
                    {move || format!("{} (hectares)", state.t().dashboard.farm_size)}
                    <input
                        type="text"
                        inputmode="decimal"
                        placeholder="5"
                        prop:value=move || farm_size.get()
                        on:input=move |ev| set_farm_size.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn-primary btn-block" on:click=predict disabled=move || loading.get()>
                    {move || {
                        if loading.get() { state.t().dashboard.predicting } else { state.t().dashboard.predict }
                    }}
                </button>
                {move || result.get().map(|prediction| view! { <PredictionCard prediction=prediction /> })}
            </div>

            <div class="card">
                <h3>{move || state.t().dashboard.history}</h3>
                <Show
                    when=move || history.with(|h| !h.is_empty())
                    fallback=move || view! { <p class="empty">{move || state.t().common.no_data}</p> }
                >
                    <BarChart data=series />
                </Show>
            </div>
        </div>
    }
}

#[component]
fn DataTab() -> impl IntoView {
    let state = use_app_state();
    // Readings are shared across farms in the demo data
    let readings = loaded(AppState::database().sensor_data(None), "sensor data");
    let averages = SensorAverages::from_readings(&readings);
    let rows: Vec<_> = readings.iter().take(SENSOR_TABLE_ROWS).cloned().collect();

    let export = move |_| match export_sensor_csv(&readings) {
        Ok(csv) => match dom::download("sensor-data.csv", "text/csv", &csv) {
            Ok(()) => state.show_success(state.t().common.success),
            Err(e) => {
                dom::log_error("Download failed", &format!("{e:?}"));
                state.show_error(state.t().common.error);
            }
        },
        Err(e) => {
            dom::log_error("Export failed", &e);
            state.show_error(e.user_message());
        }
    };

    view! {
        <div class="metric-cards">
            {averages.map_or_else(
                || view! { <p class="empty">{move || state.t().common.no_data}</p> }.into_any(),
                |avg| {
                    let metrics: [(&str, fn(&'static Translations) -> &'static str, String); 5] = [
                        ("🌡", |t| t.dashboard.temperature, format!("{:.1}°C", avg.temperature)),
                        ("💧", |t| t.dashboard.humidity, format!("{:.0}%", avg.humidity)),
                        ("🌿", |t| t.dashboard.soil_moisture, format!("{:.0}%", avg.soil_moisture)),
                        ("🌧", |t| t.dashboard.rainfall, format!("{:.1}mm", avg.rainfall)),
                        ("☀", |t| t.dashboard.sunlight, format!("{:.1}h", avg.sunlight)),
                    ];
                    metrics
                        .into_iter()
                        .map(|(icon, label, value)| view! {
                            <div class="card metric-card">
                                <div>
                                    <p class="muted">{move || label(state.t())}</p>
                                    <p class="metric-value">{value}</p>
                                </div>
                                <span class="metric-icon">{icon}</span>
                            </div>
                        })
                        .collect_view()
                        .into_any()
                },
            )}
        </div>

        <div class="card">
            <div class="card-header">
                <h3>{move || state.t().dashboard.sensor_data}</h3>
                <button class="btn btn-outline btn-sm" on:click=export>
                    {move || state.t().dashboard.export}
                </button>
            </div>
            <div class="table-wrap">
                <table class="sensor-table">
                    <thead>
                        <tr>
                            <th>{move || state.t().dashboard.date}</th>
                            <th>{move || state.t().dashboard.temperature}</th>
                            <th>{move || state.t().dashboard.humidity}</th>
                            <th>{move || state.t().dashboard.soil_moisture}</th>
                            <th>{move || state.t().dashboard.source}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|r| view! {
                                <tr>
                                    <td>{r.timestamp.with_timezone(&chrono::Local).format("%d/%m/%Y").to_string()}</td>
                                    <td>{format!("{:.1}°C", r.temperature)}</td>
                                    <td>{format!("{:.0}%", r.humidity)}</td>
                                    <td>{format!("{:.0}%", r.soil_moisture)}</td>
                                    <td><span class="badge">{r.source.as_str()}</span></td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn SoilResult(analysis: SoilAnalysis) -> impl IntoView {
    let state = use_app_state();
    let ph = format!("{:.1}", analysis.ph);
    let organic = format!("{:.1}%", analysis.organic_matter);

    view! {
        <div class="soil-result">
            <h4>{move || state.t().dashboard.analysis_results}</h4>
            {move || {
                let d = &state.t().dashboard;
                view! {
                    <ProgressBar label=d.nitrogen value=analysis.nitrogen max=100.0 unit="%" />
                    <ProgressBar label=d.phosphorus value=analysis.phosphorus max=100.0 unit="%" />
                    <ProgressBar label=d.potassium value=analysis.potassium max=100.0 unit="%" />
                }
            }}
            <div class="soil-figures">
                <div class="figure">
                    <p class="muted">{move || state.t().dashboard.ph_level}</p>
                    <p class="figure-value">{ph}</p>
                </div>
                <div class="figure">
                    <p class="muted">{move || state.t().dashboard.organic_matter}</p>
                    <p class="figure-value">{organic}</p>
                </div>
            </div>
            <ul class="recommendations">
                {analysis
                    .recommendations
                    .into_iter()
                    .map(|r| view! { <li>"• "{r}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn SoilTab(user_id: String) -> impl IntoView {
    let state = use_app_state();
    let (analyzing, set_analyzing) = signal(false);
    let result = RwSignal::new(None::<SoilAnalysis>);
    let analyses = RwSignal::new(loaded(
        AppState::database().soil_analyses(Some(&user_id)),
        "soil analyses",
    ));

    let upload = move |_| {
        if analyzing.get_untracked() {
            return;
        }
        let user_id = user_id.clone();
        set_analyzing.set(true);

        leptos::task::spawn_local(async move {
            simulate_latency(state.config.soil_delay_ms).await;
            let analysis = SoilAnalyzer::from_entropy().analyze(&user_id, Utc::now());
            if let Err(e) = AppState::database().add_soil_analysis(analysis.clone()) {
                dom::log_error("Could not save soil analysis", &e);
                state.show_error(e.user_message());
            }
            analyses.update(|a| a.push(analysis.clone()));
            result.set(Some(analysis));
            set_analyzing.set(false);
        });
    };

    let npk = Signal::derive(move || {
        analyses
            .with(|a| npk_distribution(a))
            .map(|slices| {
                slices
                    .iter()
                    .map(|(nutrient, value)| (nutrient.symbol().to_string(), *value))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    });

    view! {
        <div class="two-column">
            <div class="card">
                <h3>{move || state.t().dashboard.upload_soil}</h3>
                <div class="dropzone">
                    <span class="dropzone-icon">"🧪"</span>
                    <p class="muted">{move || state.t().dashboard.upload_hint}</p>
                    <button class="btn btn-primary" on:click=upload disabled=move || analyzing.get()>
                        {move || {
                            if analyzing.get() { state.t().dashboard.analyzing } else { state.t().dashboard.upload_soil }
                        }}
                    </button>
                </div>
                {move || result.get().map(|analysis| view! { <SoilResult analysis=analysis /> })}
            </div>

            <div class="card">
                <h3>{move || state.t().dashboard.npk_distribution}</h3>
                <Show
                    when=move || npk.with(|slices| !slices.is_empty())
                    fallback=move || view! { <p class="empty">{move || state.t().common.no_data}</p> }
                >
                    <PieChart data=npk />
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_query() {
        assert_eq!(Tab::from_query(None), Tab::Overview);
        assert_eq!(Tab::from_query(Some("predictions")), Tab::Predictions);
        assert_eq!(Tab::from_query(Some("data")), Tab::Data);
        assert_eq!(Tab::from_query(Some("soil")), Tab::Soil);
        assert_eq!(Tab::from_query(Some("billing")), Tab::Overview);
    }

    #[test]
    fn test_tab_slugs_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_query(Some(tab.slug())), tab);
        }
    }
}
