//! HTTP surface tests
//!
//! Drive the full router (layers included) over the in-memory backends and
//! check paths, wire names, status codes and the bare-500 failure rule.

use axum::http::StatusCode;
use serde_json::json;

mod helpers;
use helpers::{at, ids, start, TestApp, BASE};

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let (status, body) = app.get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy", "store": "connected" }));
}

// ============================================================================
// Record / Get / Delete
// ============================================================================

#[tokio::test]
async fn test_record_change_returns_created_entry() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            BASE,
            json!({
                "idReserva": 5,
                "estadoAnterior": "Pendiente",
                "estadoNuevo": "Aprobada",
                "usuarioCambio": 3
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        helpers::parse(&body),
        json!({
            "idAudit": 1,
            "idReserva": 5,
            "estadoAnterior": "Pendiente",
            "estadoNuevo": "Aprobada",
            "fechaCambio": "2024-06-15T10:00:00",
            "usuarioCambio": 3
        })
    );
}

#[tokio::test]
async fn test_record_change_without_prior_state() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(BASE, json!({ "idReserva": 9, "estadoNuevo": "Pendiente", "usuarioCambio": 1 }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(helpers::parse(&body)["estadoAnterior"], json!(null));
}

#[tokio::test]
async fn test_record_change_failures_are_bare_500() {
    let app = TestApp::new();

    let bodies = [
        json!({ "idReserva": 5, "usuarioCambio": 3 }).to_string(),
        json!({ "idReserva": 5, "estadoNuevo": "   ", "usuarioCambio": 3 }).to_string(),
        json!({ "idReserva": 5, "estadoNuevo": "x".repeat(51), "usuarioCambio": 3 }).to_string(),
        json!({ "idReserva": "cinco", "estadoNuevo": "Aprobada", "usuarioCambio": 3 }).to_string(),
        "{not json".to_string(),
    ];

    for body in bodies {
        let (status, response) = app.post_raw(BASE, &body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body: {body}");
        assert!(response.is_empty());
    }

    assert_eq!(app.store.count_all().await.unwrap(), 0);
}

#[tokio::test]
async fn test_get_by_id_returns_raw_entry_or_null() {
    let app = TestApp::new();
    app.record(5, None, "Pendiente", 3).await;

    let (status, body) = app.get_json(&format!("{BASE}/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["idAudit"], 1);
    assert!(body.get("nombreUsuario").is_none());

    let (status, body) = app.get(&format!("{BASE}/99")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "null");
}

#[tokio::test]
async fn test_malformed_path_is_bare_500() {
    let app = TestApp::new();

    for uri in [
        format!("{BASE}/abc"),
        format!("{BASE}/reserva/x"),
        format!("{BASE}/resumen-mensual/dos-mil"),
        format!("{BASE}/usuario/1.5"),
    ] {
        let (status, body) = app.get(&uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "uri: {uri}");
        assert!(body.is_empty());
    }
}

#[tokio::test]
async fn test_delete_by_id_reports_absence() {
    let app = TestApp::new();
    app.record(5, None, "Pendiente", 3).await;

    let (status, body) = app.delete(&format!("{BASE}/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "idAudit": 1, "eliminado": true }));

    let (_, body) = app.delete(&format!("{BASE}/1")).await;
    assert_eq!(body, json!({ "idAudit": 1, "eliminado": false }));
}

// ============================================================================
// Listing and Enrichment
// ============================================================================

#[tokio::test]
async fn test_list_is_enriched_and_newest_first() {
    let app = TestApp::new();
    app.record(5, None, "Pendiente", 3).await;
    app.clock.advance(chrono::Duration::minutes(1));
    app.record(77, None, "Pendiente", 42).await;

    let (status, body) = app.get_json(BASE).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![2, 1]);

    assert_eq!(body[0]["nombreUsuario"], "Usuario 42");
    assert_eq!(body[0]["espacioReserva"], json!(null));
    assert_eq!(body[0]["solicitanteReserva"], json!(null));

    assert_eq!(body[1]["nombreUsuario"], "Ana Quispe");
    assert_eq!(body[1]["espacioReserva"], "Auditorio Central");
    assert_eq!(body[1]["solicitanteReserva"], "Luis Mamani");
}

#[tokio::test]
async fn test_reservation_history_latest_and_activity() {
    let app = TestApp::new();
    app.record(6, None, "Pendiente", 3).await;
    app.clock.advance(chrono::Duration::hours(1));
    app.record(6, Some("Pendiente"), "Rechazada", 3).await;
    app.record(5, None, "Pendiente", 3).await;

    let (_, history) = app.get_json(&format!("{BASE}/reserva/6")).await;
    assert_eq!(ids(&history), vec![2, 1]);
    assert_eq!(history[0]["espacioReserva"], json!(null));
    assert_eq!(history[0]["solicitanteReserva"], "Rosa Condori");

    let (_, latest) = app.get_json(&format!("{BASE}/reserva/6/ultimo")).await;
    assert_eq!(latest["estadoNuevo"], "Rechazada");
    assert_eq!(latest["nombreUsuario"], "Ana Quispe");

    let (status, missing) = app.get(&format!("{BASE}/reserva/404/ultimo")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(missing, "null");

    let (_, activity) = app.get_json(&format!("{BASE}/reserva/6/actividad")).await;
    assert_eq!(activity, json!({ "idReserva": 6, "totalCambios": 2, "tieneAuditoria": true }));

    let (_, none) = app.get_json(&format!("{BASE}/reserva/404/actividad")).await;
    assert_eq!(none, json!({ "idReserva": 404, "totalCambios": 0, "tieneAuditoria": false }));
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_buscar_combines_filters() {
    let app = TestApp::new();
    app.record_at(at(2024, 6, 1, 9, 0), 5, "Pendiente").await;
    app.record_at(at(2024, 6, 2, 9, 0), 5, "Aprobada").await;
    app.record_at(at(2024, 6, 3, 9, 0), 6, "Aprobada").await;

    let (_, all) = app.get_json(&format!("{BASE}/buscar")).await;
    assert_eq!(ids(&all), vec![3, 2, 1]);

    let (_, approved) = app
        .get_json(&format!("{BASE}/buscar?estadoNuevo=Aprobada"))
        .await;
    assert_eq!(ids(&approved), vec![3, 2]);

    let (_, narrowed) = app
        .get_json(&format!("{BASE}/buscar?estadoNuevo=Aprobada&idReserva=5&usuarioCambio=3"))
        .await;
    assert_eq!(ids(&narrowed), vec![2]);

    let (_, ranged) = app
        .get_json(&format!(
            "{BASE}/buscar?fechaInicio=2024-06-01T09:00:00&fechaFin=2024-06-02T09:00:00"
        ))
        .await;
    assert_eq!(ids(&ranged), vec![2, 1]);
}

#[tokio::test]
async fn test_buscar_with_malformed_date_is_bare_500() {
    let app = TestApp::new();
    let (status, body) = app
        .get(&format!("{BASE}/buscar?fechaInicio=ayer"))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_blank_optional_params_are_unset() {
    let app = TestApp::new();
    app.record_at(at(2024, 6, 1, 10, 0), 5, "Pendiente").await;
    app.record_at(at(2024, 6, 2, 10, 0), 6, "Aprobada").await;
    app.record_at(at(2024, 6, 14, 10, 0), 5, "Aprobada").await;
    app.clock.set(start());

    let (status, approved) = app
        .get_json(&format!(
            "{BASE}/buscar?idReserva=&usuarioCambio=&estadoNuevo=Aprobada&fechaInicio=&fechaFin="
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&approved), vec![3, 2]);

    let (status, recent) = app.get_json(&format!("{BASE}/recientes?dias=")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&recent), vec![3]);

    let (status, by_user) = app
        .get_json(&format!("{BASE}/usuario/3?fechaInicio=&fechaFin="))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&by_user), vec![3, 2, 1]);

    let (status, schools) = app.get_json("/api/catalogos/escuelas?facultadId=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(schools.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_recent_changes_window() {
    let app = TestApp::new();
    app.record_at(at(2024, 6, 1, 10, 0), 1, "Pendiente").await;
    app.record_at(at(2024, 6, 10, 10, 0), 2, "Pendiente").await;
    app.record_at(at(2024, 6, 15, 9, 0), 3, "Pendiente").await;
    app.clock.set(at(2024, 6, 15, 10, 0));

    let (_, default_window) = app.get_json(&format!("{BASE}/recientes")).await;
    assert_eq!(ids(&default_window), vec![3, 2]);

    let (_, one_day) = app.get_json(&format!("{BASE}/recientes?dias=1")).await;
    assert_eq!(ids(&one_day), vec![3]);

    let (_, wide) = app.get_json(&format!("{BASE}/recientes?dias=30")).await;
    assert_eq!(ids(&wide), vec![3, 2, 1]);

    for bad in ["dias=-1", "dias=siete"] {
        let (status, body) = app.get(&format!("{BASE}/recientes?{bad}")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.is_empty());
    }
}

#[tokio::test]
async fn test_text_search() {
    let app = TestApp::new();
    app.record(1, None, "Pendiente", 3).await;
    app.record(1, Some("Pendiente"), "Aprobada", 3).await;
    app.record(2, None, "Cancelado", 3).await;

    let (_, hits) = app.get_json(&format!("{BASE}/texto?texto=PEND")).await;
    assert_eq!(ids(&hits), vec![2, 1]);

    let (_, none) = app.get_json(&format!("{BASE}/texto?texto=zzz")).await;
    assert_eq!(none, json!([]));

    let (status, _) = app.get(&format!("{BASE}/texto")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_changes_by_user_in_range() {
    let app = TestApp::new();
    app.record_at(at(2024, 5, 1, 8, 0), 1, "Pendiente").await;
    app.record_at(at(2024, 5, 20, 8, 0), 2, "Pendiente").await;
    app.clock.set(at(2024, 5, 21, 8, 0));
    app.record(3, None, "Pendiente", 8).await;

    let (_, all_by_3) = app.get_json(&format!("{BASE}/usuario/3")).await;
    assert_eq!(ids(&all_by_3), vec![2, 1]);

    let (_, in_range) = app
        .get_json(&format!(
            "{BASE}/usuario/3?fechaInicio=2024-05-10T00:00:00&fechaFin=2024-05-31T23:59:59"
        ))
        .await;
    assert_eq!(ids(&in_range), vec![2]);

    let (_, by_8) = app.get_json(&format!("{BASE}/usuario/8")).await;
    assert_eq!(by_8[0]["nombreUsuario"], "Usuario 8");
}

#[tokio::test]
async fn test_distinct_ids() {
    let app = TestApp::new();
    for (reservation, user) in [(30, 4), (10, 9), (30, 2)] {
        app.record(reservation, None, "Pendiente", user).await;
    }

    let (_, reservations) = app.get_json(&format!("{BASE}/reservas")).await;
    assert_eq!(reservations, json!([10, 30]));

    let (_, users) = app.get_json(&format!("{BASE}/usuarios")).await;
    assert_eq!(users, json!([2, 4, 9]));
}

// ============================================================================
// Statistics
// ============================================================================

#[tokio::test]
async fn test_overview_statistics() {
    let app = TestApp::new();
    for state in ["Aprobada", "Aprobada", "Cancelado", "Pendiente"] {
        app.record(1, None, state, 3).await;
    }

    let (status, body) = app.get_json(&format!("{BASE}/estadisticas")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "totalRegistros": 4, "cambiosAprobacion": 2, "cambiosCancelacion": 1 })
    );
}

#[tokio::test]
async fn test_summary_statistics_shape() {
    let app = TestApp::new();
    app.record_at(at(2024, 6, 14, 9, 0), 1, "Aprobada").await;
    app.record_at(at(2024, 6, 14, 18, 0), 2, "Pendiente").await;
    app.record_at(at(2024, 6, 15, 9, 0), 3, "Rechazada").await;
    app.record_at(at(2024, 1, 1, 9, 0), 4, "Cancelado").await;
    app.clock.set(at(2024, 6, 15, 10, 0));

    let (_, body) = app.get_json(&format!("{BASE}/resumen")).await;
    assert_eq!(
        body,
        json!({
            "total": 4,
            "aprobadas": 1,
            "canceladas": 1,
            "rechazadas": 1,
            "pendientes": 1,
            "porDia": [
                { "fecha": "2024-06-15", "cantidad": 1 },
                { "fecha": "2024-06-14", "cantidad": 2 }
            ]
        })
    );
}

#[tokio::test]
async fn test_monthly_summary() {
    let app = TestApp::new();
    app.record_at(at(2024, 2, 29, 23, 59), 1, "Pendiente").await;
    app.record_at(at(2024, 12, 31, 23, 59), 2, "Pendiente").await;
    app.record_at(at(2025, 1, 1, 0, 0), 3, "Pendiente").await;

    let (status, body) = app.get_json(&format!("{BASE}/resumen-mensual/2024")).await;
    assert_eq!(status, StatusCode::OK);

    let months = body.as_object().unwrap();
    assert_eq!(months.len(), 12);
    assert_eq!(body["2"], 1);
    assert_eq!(body["12"], 1);
    assert_eq!(body["1"], 0);
}

// ============================================================================
// Retention
// ============================================================================

#[tokio::test]
async fn test_purge_endpoint_reports_cutoff() {
    let app = TestApp::new();
    app.record_at(at(2023, 6, 15, 9, 59), 1, "Pendiente").await;
    app.record_at(at(2023, 6, 15, 10, 0), 2, "Pendiente").await;
    app.clock.set(at(2024, 6, 15, 10, 0));

    let (status, body) = app.delete(&format!("{BASE}/antiguas")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "eliminados": 1, "fechaLimite": "2023-06-15T10:00:00" }));

    let (_, remaining) = app.get_json(BASE).await;
    assert_eq!(ids(&remaining), vec![2]);
}

// ============================================================================
// Catalogs
// ============================================================================

#[tokio::test]
async fn test_catalogs() {
    let app = TestApp::new();

    let (status, faculties) = app.get_json("/api/catalogos/facultades").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        faculties,
        json!([
            { "id": 1, "nombre": "Facultad de Derecho" },
            { "id": 2, "nombre": "Facultad de Ingeniería" }
        ])
    );

    let (_, all_schools) = app.get_json("/api/catalogos/escuelas").await;
    assert_eq!(all_schools.as_array().unwrap().len(), 3);

    let (_, engineering) = app.get_json("/api/catalogos/escuelas?facultadId=2").await;
    assert_eq!(
        engineering,
        json!([
            { "id": 21, "nombre": "Ingeniería de Sistemas" },
            { "id": 22, "nombre": "Ingeniería Civil" }
        ])
    );

    let (status, body) = app.get("/api/catalogos/escuelas?facultadId=dos").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
}
