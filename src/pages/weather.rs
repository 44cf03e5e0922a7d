//! Current weather page (`/weather`).

use leptos::prelude::*;

use crate::components::loading_spinner::LoadingSpinner;
use crate::components::page_layout::PageLayout;
use crate::net::api;
use crate::net::types::WeatherData;
use crate::state::session::Session;
use crate::state::toast::{ToastState, notify_error};
use crate::util::in_flight::InFlight;
use crate::util::weather::{format_temperature, title_case, weather_emoji};

#[component]
pub fn WeatherPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let guard = InFlight::for_owner();

    let weather = RwSignal::new(None::<WeatherData>);
    let loading = RwSignal::new(true);

    let ticket = guard.begin();
    leptos::task::spawn_local(async move {
        let result = api::weather(session.api()).await;
        if !guard.is_current(ticket) {
            return;
        }
        loading.set(false);
        match result {
            Ok(response) => weather.set(Some(response.data)),
            Err(err) => notify_error(toasts, format!("Could not load weather: {err}")),
        }
    });

    view! {
        <PageLayout title="Weather">
            <div id="weather-content" class="weather">
                {move || {
                    if loading.get() {
                        return view! { <LoadingSpinner /> }.into_any();
                    }
                    match weather.get() {
                        Some(data) => view! { <WeatherCard data=data /> }.into_any(),
                        None => view! { <p class="weather__empty">"Weather is unavailable right now."</p> }.into_any(),
                    }
                }}
            </div>
        </PageLayout>
    }
}

#[component]
fn WeatherCard(data: WeatherData) -> impl IntoView {
    let description = data
        .primary_condition()
        .map(|condition| condition.description.clone())
        .unwrap_or_default();
    let emoji = weather_emoji(&description).unwrap_or_default();
    let location = if data.sys.country.is_empty() {
        data.name.clone()
    } else {
        format!("{}, {}", data.name, data.sys.country)
    };

    view! {
        <div class="weather__card">
            <span class="weather__emoji">{emoji}</span>
            <span class="weather__temp">{format_temperature(data.main.temp)}</span>
            <span class="weather__description">{title_case(&description)}</span>
            <span class="weather__location">{location}</span>
            {data.wind.map(|wind| view! { <span class="weather__wind">{format!("Wind {:.1} m/s", wind.speed)}</span> })}
        </div>
    }
}
