// Testes de integração das Atividades: o router real sobre um SQLite em
// memória, com um validador de referências de mentira no lugar do cliente
// HTTP do Gerenciamento.

use std::{collections::HashSet, sync::Arc};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use atividades::{AppState, MIGRATOR, app};
use gerenciamento_client::{TipoReferencia, ValidadorReferencia};

/// Conhece um conjunto fixo de referências; tudo fora dele "não existe".
struct ValidadorStub {
    existentes: HashSet<(TipoReferencia, i64)>,
}

#[async_trait]
impl ValidadorReferencia for ValidadorStub {
    async fn existe(&self, tipo: TipoReferencia, id: i64) -> bool {
        self.existentes.contains(&(tipo, id))
    }
}

/// App com professor 1, turma 2 e aluno 3 existindo no "Gerenciamento".
async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("falha ao abrir o banco em memória");

    MIGRATOR.run(&pool).await.expect("falha ao migrar");

    let validador = ValidadorStub {
        existentes: HashSet::from([
            (TipoReferencia::Professor, 1),
            (TipoReferencia::Turma, 2),
            (TipoReferencia::Aluno, 3),
        ]),
    };

    app(AppState::from_pool(pool, Arc::new(validador)))
}

async fn request(
    app: &Router,
    metodo: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(metodo)
        .uri(uri)
        .header("content-type", "application/json");

    let request = match body {
        Some(json) => builder.body(Body::from(json.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resposta = app.clone().oneshot(request).await.unwrap();
    let status = resposta.status();
    let bytes = resposta.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

async fn criar_atividade(app: &Router) -> i64 {
    let (status, body) = request(
        app,
        "POST",
        "/atividades",
        Some(json!({
            "nome_atividade": "Prova de Matemática - Capítulo 3",
            "peso_porcento": 30,
            "data_entrega": "2025-11-05",
            "turma_id": 2,
            "professor_id": 1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn criar_atividade_com_referencias_validas() {
    let app = test_app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/atividades",
        Some(json!({
            "nome_atividade": "Trabalho de Álgebra Linear",
            "descricao": "Em dupla",
            "turma_id": 2,
            "professor_id": 1
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_i64());
    assert_eq!(body["nome_atividade"], "Trabalho de Álgebra Linear");
    assert_eq!(body["turma_id"], 2);
    assert_eq!(body["professor_id"], 1);

    // GET por id devolve o mesmo registro.
    let id = body["id"].as_i64().unwrap();
    let (status, lido) = request(&app, "GET", &format!("/atividades/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(lido, body);
}

#[tokio::test]
async fn criar_atividade_com_professor_inexistente_falha_primeiro() {
    let app = test_app().await;

    // Professor e turma inválidos: a mensagem é a do professor, que é
    // checado primeiro.
    let (status, body) = request(
        &app,
        "POST",
        "/atividades",
        Some(json!({
            "nome_atividade": "Prova",
            "turma_id": 99,
            "professor_id": 99
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "erro": "Professor não encontrado" }));

    let (_, lista) = request(&app, "GET", "/atividades", None).await;
    assert_eq!(lista, json!([]));
}

#[tokio::test]
async fn criar_atividade_com_turma_inexistente() {
    let app = test_app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/atividades",
        Some(json!({
            "nome_atividade": "Prova",
            "turma_id": 99,
            "professor_id": 1
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "erro": "Turma não encontrada" }));
}

#[tokio::test]
async fn criar_atividade_sem_campos_obrigatorios_devolve_400() {
    let app = test_app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/atividades",
        Some(json!({ "descricao": "sem nome nem referências" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detalhes"]["nome_atividade"].is_array());
    assert!(body["detalhes"]["turma_id"].is_array());
    assert!(body["detalhes"]["professor_id"].is_array());
}

#[tokio::test]
async fn atualizacao_parcial_revalida_somente_o_que_mudou() {
    let app = test_app().await;
    let id = criar_atividade(&app).await;

    // Troca só a descrição: nenhuma referência é revalidada.
    let (status, body) = request(
        &app,
        "PUT",
        &format!("/atividades/{id}"),
        Some(json!({ "descricao": "Valendo 30% da nota" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["descricao"], "Valendo 30% da nota");
    assert_eq!(body["nome_atividade"], "Prova de Matemática - Capítulo 3");
    assert_eq!(body["turma_id"], 2);

    // Troca de turma para uma inexistente: rejeita e não altera nada.
    let (status, body) = request(
        &app,
        "PUT",
        &format!("/atividades/{id}"),
        Some(json!({ "turma_id": 77 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "erro": "Turma não encontrada" }));

    let (_, atual) = request(&app, "GET", &format!("/atividades/{id}"), None).await;
    assert_eq!(atual["turma_id"], 2);
}

#[tokio::test]
async fn criar_nota_para_atividade_e_aluno_existentes() {
    let app = test_app().await;
    let atividade_id = criar_atividade(&app).await;

    let (status, body) = request(
        &app,
        "POST",
        "/notas",
        Some(json!({ "nota": 8.5, "aluno_id": 3, "atividade_id": atividade_id })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["nota"], 8.5);
    assert_eq!(body["aluno_id"], 3);
    assert_eq!(body["atividade_id"], atividade_id);
}

#[tokio::test]
async fn criar_nota_checa_a_atividade_local_antes_do_aluno_remoto() {
    let app = test_app().await;

    // Atividade 42 não existe; o aluno 99 também não, mas a mensagem é a da
    // atividade, checada primeiro.
    let (status, body) = request(
        &app,
        "POST",
        "/notas",
        Some(json!({ "nota": 7.0, "aluno_id": 99, "atividade_id": 42 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "erro": "Atividade não encontrada" }));
}

#[tokio::test]
async fn criar_nota_com_aluno_inexistente() {
    let app = test_app().await;
    let atividade_id = criar_atividade(&app).await;

    let (status, body) = request(
        &app,
        "POST",
        "/notas",
        Some(json!({ "nota": 7.0, "aluno_id": 99, "atividade_id": atividade_id })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "erro": "Aluno não encontrado" }));

    let (_, lista) = request(&app, "GET", "/notas", None).await;
    assert_eq!(lista, json!([]));
}

#[tokio::test]
async fn listar_notas_de_uma_atividade() {
    let app = test_app().await;
    let atividade_id = criar_atividade(&app).await;

    for nota in [8.5, 9.0] {
        let (status, _) = request(
            &app,
            "POST",
            "/notas",
            Some(json!({ "nota": nota, "aluno_id": 3, "atividade_id": atividade_id })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, notas) =
        request(&app, "GET", &format!("/atividades/{atividade_id}/notas"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(notas.as_array().unwrap().len(), 2);

    // Atividade inexistente: 404, não lista vazia.
    let (status, _) = request(&app, "GET", "/atividades/42/notas", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deletar_atividade_remove_as_notas_dela() {
    let app = test_app().await;
    let atividade_id = criar_atividade(&app).await;

    let (_, nota) = request(
        &app,
        "POST",
        "/notas",
        Some(json!({ "nota": 8.5, "aluno_id": 3, "atividade_id": atividade_id })),
    )
    .await;
    let nota_id = nota["id"].as_i64().unwrap();

    let (status, _) = request(&app, "DELETE", &format!("/atividades/{atividade_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(&app, "GET", &format!("/notas/{nota_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn data_de_entrega_e_devolvida_em_formato_iso() {
    let app = test_app().await;
    let id = criar_atividade(&app).await;

    let (_, atividade) = request(&app, "GET", &format!("/atividades/{id}"), None).await;
    assert_eq!(atividade["data_entrega"], "2025-11-05");
}
