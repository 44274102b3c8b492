use actix_web::{HttpResponse, Responder};

use crate::models::{
    HeartTemperature, HeartTemperatureResponse, TemperatureReading, TrustScore,
    TrustScoreResponse, Verifications,
};

/// GET /api/trust-score
pub async fn trust_score() -> impl Responder {
    HttpResponse::Ok().json(TrustScoreResponse {
        success: true,
        trust_score: TrustScore {
            score: 65.5,
            level: "믿음직한".to_string(),
            daily_quest_completed: true,
            verifications: Verifications {
                phone: true,
                video: false,
                criminal_record: false,
                job: true,
            },
        },
    })
}

/// GET /api/heart-temperature
pub async fn heart_temperature() -> impl Responder {
    let reading = |date: &str, temperature: f64| TemperatureReading {
        date: date.to_string(),
        temperature,
    };

    HttpResponse::Ok().json(HeartTemperatureResponse {
        success: true,
        temperature: HeartTemperature {
            current: 36.5,
            level: "따뜻함".to_string(),
            history: vec![
                reading("2025-01-01", 35.0),
                reading("2025-01-02", 36.0),
                reading("2025-01-03", 36.5),
            ],
        },
    })
}
