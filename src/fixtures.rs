//! Sample provider documents shared by the unit tests

use crate::weather::RawWeatherDocument;
use serde_json::json;

fn hour(time: &str, description: &str, chance_of_rain: &str) -> serde_json::Value {
    json!({
        "time": time,
        "tempC": "14",
        "chanceofrain": chance_of_rain,
        "weatherDesc": [{ "value": description }]
    })
}

/// A trimmed-down wttr.in `format=j1` answer for London
pub fn london() -> RawWeatherDocument {
    RawWeatherDocument(json!({
        "current_condition": [{
            "temp_C": "15",
            "FeelsLikeC": "13",
            "weatherDesc": [{ "value": "Partly cloudy" }],
            "windspeedKmph": "19",
            "winddir16Point": "WSW",
            "winddirDegree": "248",
            "humidity": "72",
            "pressure": "1012",
            "visibility": "10",
            "cloudcover": "50",
            "precipMM": "0.1"
        }],
        "nearest_area": [{
            "areaName": [{ "value": "London" }],
            "country": [{ "value": "United Kingdom" }],
            "region": [{ "value": "City of London, Greater London" }]
        }],
        "weather": [
            {
                "date": "2024-05-01",
                "maxtempC": "17",
                "mintempC": "10",
                "uvIndex": "3",
                "astronomy": [{ "sunrise": "05:31 AM", "sunset": "08:23 PM" }],
                "hourly": [
                    hour("0", "Clear", "0"),
                    hour("300", "Clear", "0"),
                    hour("600", "Sunny", "0"),
                    hour("900", "Sunny", "0"),
                    hour("1200", "Partly cloudy", "10"),
                    hour("1500", "Partly cloudy", "10"),
                    hour("1800", "Overcast", "20"),
                    hour("2100", "Overcast", "20")
                ]
            },
            {
                "date": "2024-05-02",
                "maxtempC": "18",
                "mintempC": "9",
                "uvIndex": "4",
                "astronomy": [{ "sunrise": "05:29 AM", "sunset": "08:25 PM" }],
                "hourly": [
                    hour("0", "Cloudy", "20"),
                    hour("300", "Cloudy", "30"),
                    hour("600", "Patchy rain nearby", "60"),
                    hour("900", "Patchy rain nearby", "70"),
                    hour("1200", "Light rain shower", "80"),
                    hour("1500", "Light rain shower", "75"),
                    hour("1800", "Overcast", "40")
                ]
            }
        ]
    }))
}
