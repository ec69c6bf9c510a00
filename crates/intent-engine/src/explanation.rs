// ABOUTME: Spanish explanation templates for each workout structure
// ABOUTME: Pure rendering of a verdict's supporting structure into one sentence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use intent_core::constants::units::SECONDS_PER_MINUTE;
use intent_core::models::{
    EasyStructure, HillEvidence, HillStructure, OtherReason, RaceStructure, SeriesPattern,
    SeriesStructure, TempoStructure, WorkoutStructure,
};

/// Explanation generator
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    /// Render a structure as a Spanish sentence
    #[must_use]
    pub fn explain(structure: &WorkoutStructure) -> String {
        match structure {
            WorkoutStructure::Series(series) => Self::series(series),
            WorkoutStructure::Tempo(tempo) => Self::tempo(tempo),
            WorkoutStructure::Easy(easy) => Self::easy(easy),
            WorkoutStructure::Hills(hills) => Self::hills(hills),
            WorkoutStructure::Recovery(recovery) => format!(
                "Recuperación: {} km a ritmo suave ({} min/km)",
                format_km(recovery.distance_km),
                format_pace(recovery.avg_pace)
            ),
            WorkoutStructure::Progressive(progressive) => format!(
                "Progresivo: {} tramos bajando de {} a {} min/km",
                progressive.segments,
                format_pace(progressive.first_pace),
                format_pace(progressive.last_pace)
            ),
            WorkoutStructure::Fartlek(fartlek) => format!(
                "Fartlek: cambios de ritmo sin patrón fijo entre {} y {} min/km",
                format_pace(fartlek.fastest_pace),
                format_pace(fartlek.slowest_pace)
            ),
            WorkoutStructure::Race(race) => Self::race(race),
            WorkoutStructure::Other(other) => match other.reason {
                OtherReason::GpsNoise => {
                    "Datos de GPS poco fiables: cambios de ritmo imposibles entre kilómetros consecutivos"
                        .to_owned()
                }
                OtherReason::TooShort => format!(
                    "Actividad demasiado corta para clasificar ({} km)",
                    format_km(other.distance_km)
                ),
            },
        }
    }

    fn series(series: &SeriesStructure) -> String {
        let rest = series.avg_rest_seconds.map_or_else(String::new, |seconds| {
            format!(" con descansos de {} s", seconds.round() as u32)
        });
        match series.pattern {
            SeriesPattern::Repeats => format!(
                "Series de {}x{}m{rest}",
                series.repetitions,
                series.rep_distance.unwrap_or_default().round() as u32
            ),
            SeriesPattern::Pyramid => format!(
                "Pirámide {} con descansos",
                join_distances(&series.distances, "-")
            ),
            SeriesPattern::Mixed => format!(
                "Series mixtas: {} repeticiones ({} m){rest}",
                series.repetitions,
                join_distances(&series.distances, ", ")
            ),
            SeriesPattern::Alternating => format!(
                "Series detectadas por alternancia de ritmo rápido y lento: {} repeticiones",
                series.repetitions
            ),
        }
    }

    fn tempo(tempo: &TempoStructure) -> String {
        let main = format!(
            "{} km a {} min/km",
            format_km(tempo.main.distance_km),
            format_pace(tempo.main.avg_pace)
        );
        match (tempo.warmup, tempo.cooldown) {
            (Some(_), Some(_)) => {
                format!("Tempo: calentamiento, {main} y vuelta a la calma")
            }
            (Some(_), None) => format!("Tempo: calentamiento y {main}"),
            (None, Some(_)) => format!("Tempo: {main} y vuelta a la calma"),
            (None, None) => format!("Tempo sostenido: {main}"),
        }
    }

    fn easy(easy: &EasyStructure) -> String {
        let distance = format_km(easy.distance_km);
        match easy.avg_pace {
            _ if easy.basic => {
                format!("Rodaje de {distance} km (clasificación básica sin datos de ritmo)")
            }
            Some(pace) if easy.long_run => format!(
                "Sesión de rodaje largo: {distance} km a ritmo constante ({} min/km)",
                format_pace(pace)
            ),
            Some(pace) => format!(
                "Rodaje: {distance} km a ritmo constante ({} min/km)",
                format_pace(pace)
            ),
            None => format!("Rodaje de {distance} km"),
        }
    }

    fn hills(hills: &HillStructure) -> String {
        match hills.evidence {
            HillEvidence::LapRepeats => format!(
                "Cuestas detectadas por repeticiones cortas con recuperación: {} subidas de {} m de media",
                hills.repetitions,
                hills.avg_climb.unwrap_or_default().round() as u32
            ),
            HillEvidence::ElevationProfile => format!(
                "Cuestas detectadas por el perfil de desnivel: {} m/km en {} subidas",
                hills.gain_per_km.unwrap_or_default().round() as u32,
                hills.repetitions
            ),
        }
    }

    fn race(race: &RaceStructure) -> String {
        let signals = match (race.pace_signal, race.hr_signal) {
            (true, true) => "ritmo y pulso de competición",
            (true, false) => "ritmo muy por encima del habitual",
            _ => "pulso en zona 5",
        };
        format!(
            "Competición: ritmo medio de {} min/km ({signals})",
            format_pace(race.avg_pace)
        )
    }
}

/// Format a pace in min/km as `m:ss`
#[must_use]
pub fn format_pace(minutes_per_km: f64) -> String {
    if !minutes_per_km.is_finite() || minutes_per_km <= 0.0 {
        return "-:--".to_owned();
    }
    let total_seconds = (minutes_per_km * SECONDS_PER_MINUTE).round() as u32;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

fn format_km(kilometers: f64) -> String {
    format!("{kilometers:.1}")
}

fn join_distances(distances: &[f64], separator: &str) -> String {
    distances
        .iter()
        .map(|distance| (distance.round() as u32).to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
